use chrono::{DateTime, Utc};
use tokio::sync::{mpsc, watch};

use crate::config::FeedConfig;
use crate::error::AppError;
use crate::event::{RowIntent, ScreenEvent};
use crate::feed::TickGenerator;
use crate::model::order::{compute_total, OrderTicket};
use crate::model::sort::{sort_ticks, SortColumn, SortToggles};
use crate::model::tick::{Tick, TickField};
use crate::observable::Relay;
use crate::ticker::Ticker;

/// Receivers for the four channels a presentation layer observes.
#[derive(Debug, Clone)]
pub struct ScreenOutput {
    pub ticks: watch::Receiver<Vec<Tick>>,
    pub price: watch::Receiver<String>,
    pub amount: watch::Receiver<String>,
    pub total: watch::Receiver<String>,
}

/// State behind the trading screen: the generated tick list, the two order
/// form inputs, and the derived total.
///
/// All mutation goes through `&mut self` on the host's event-loop thread;
/// every mutating call publishes synchronously before returning.
#[derive(Debug)]
pub struct TradeScreen {
    feed: FeedConfig,
    generator: TickGenerator,
    ticks: Relay<Vec<Tick>>,
    price: Relay<String>,
    amount: Relay<String>,
    total: Relay<String>,
    toggles: SortToggles,
    ticker: Option<Ticker>,
}

impl TradeScreen {
    pub fn new(feed: FeedConfig) -> Result<Self, AppError> {
        let generator = TickGenerator::from_config(&feed)?;
        Ok(Self {
            feed,
            generator,
            ticks: Relay::default(),
            price: Relay::default(),
            amount: Relay::default(),
            total: Relay::default(),
            toggles: SortToggles::default(),
            ticker: None,
        })
    }

    /// Attach a ticker that posts timer events into `tx` at the configured
    /// interval. Replaces (and stops) any previously attached ticker.
    pub fn start_feed(&mut self, tx: mpsc::Sender<ScreenEvent>) -> Result<(), AppError> {
        let period = self.feed.interval()?;
        self.ticker = Some(Ticker::spawn(period, tx));
        Ok(())
    }

    pub fn stop_feed(&mut self) {
        if let Some(ticker) = self.ticker.take() {
            ticker.stop();
            tracing::info!("Tick feed stopped");
        }
    }

    pub fn is_feed_running(&self) -> bool {
        self.ticker.as_ref().is_some_and(|t| !t.is_finished())
    }

    pub fn output(&self) -> ScreenOutput {
        ScreenOutput {
            ticks: self.ticks.subscribe(),
            price: self.price.subscribe(),
            amount: self.amount.subscribe(),
            total: self.total.subscribe(),
        }
    }

    pub fn apply(&mut self, event: ScreenEvent) {
        match event {
            ScreenEvent::TimerFired => {
                self.on_tick();
            }
            ScreenEvent::SetPrice(text) => self.set_price(text),
            ScreenEvent::SetAmount(text) => self.set_amount(text),
            ScreenEvent::Sort(column) => self.sort_by(column),
            ScreenEvent::Tap(intent) => {
                self.tap(intent);
            }
        }
    }

    pub fn set_price(&mut self, text: impl Into<String>) {
        self.price.accept(text.into());
        self.recompute_total();
    }

    pub fn set_amount(&mut self, text: impl Into<String>) {
        self.amount.accept(text.into());
        self.recompute_total();
    }

    pub fn on_tick(&mut self) -> Tick {
        self.on_tick_at(Utc::now())
    }

    pub fn on_tick_at(&mut self, now: DateTime<Utc>) -> Tick {
        let tick = self.generator.next_at(now);
        tracing::debug!(
            id = tick.id.0,
            time = %tick.time,
            price = %tick.price,
            amount = %tick.amount,
            "Tick generated"
        );
        let appended = tick.clone();
        self.ticks.modify(|ticks| ticks.push(appended));
        tick
    }

    /// Copy one cell of an existing row into the matching order input.
    /// Returns `false` when no row has the given id.
    pub fn tap(&mut self, intent: RowIntent) -> bool {
        let value = self
            .ticks
            .borrow()
            .iter()
            .find(|t| t.id == intent.id)
            .map(|t| t.field(intent.field).to_string());
        let Some(value) = value else {
            tracing::debug!(id = intent.id.0, field = %intent.field, "Tap on unknown row ignored");
            return false;
        };
        match intent.field {
            TickField::Price => self.set_price(value),
            TickField::Amount => self.set_amount(value),
        }
        true
    }

    pub fn sort_by_price(&mut self) {
        self.sort_by(SortColumn::Price);
    }

    pub fn sort_by_amount(&mut self) {
        self.sort_by(SortColumn::Amount);
    }

    pub fn sort_by(&mut self, column: SortColumn) {
        let direction = self.toggles.take(column);
        self.ticks
            .modify(|ticks| sort_ticks(ticks, column, direction));
        tracing::info!(column = %column, direction = ?direction, "Ticks re-sorted");
    }

    pub fn order_ticket(&self) -> OrderTicket {
        OrderTicket::new(&self.price.borrow(), &self.amount.borrow(), &self.total.borrow())
    }

    /// Acknowledge a placed order and reset the form.
    pub fn confirm_order(&mut self, ticket: &OrderTicket) {
        tracing::info!(
            order_id = %ticket.id,
            price = %ticket.price,
            amount = %ticket.amount,
            total = %ticket.total,
            "Order confirmed"
        );
        self.set_price(String::new());
        self.set_amount(String::new());
    }

    pub fn ticks(&self) -> Vec<Tick> {
        self.ticks.value()
    }

    pub fn borrow_ticks(&self) -> watch::Ref<'_, Vec<Tick>> {
        self.ticks.borrow()
    }

    pub fn tick_count(&self) -> usize {
        self.ticks.borrow().len()
    }

    pub fn price_input(&self) -> String {
        self.price.value()
    }

    pub fn amount_input(&self) -> String {
        self.amount.value()
    }

    pub fn total(&self) -> String {
        self.total.value()
    }

    pub fn sort_toggles(&self) -> SortToggles {
        self.toggles
    }

    /// Test setup: replace the list with prepared rows and publish it.
    /// The generator continues numbering after the largest id given.
    pub fn seed_ticks(&mut self, ticks: Vec<Tick>) {
        if let Some(max_id) = ticks.iter().map(|t| t.id).max() {
            self.generator.skip_past(max_id);
        }
        self.ticks.accept(ticks);
    }

    fn recompute_total(&mut self) {
        let total = compute_total(&self.price.borrow(), &self.amount.borrow());
        self.total.accept(total);
    }
}

impl Drop for TradeScreen {
    fn drop(&mut self) {
        self.stop_feed();
    }
}
