pub mod dashboard;

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::Frame;

use crate::model::order::OrderTicket;
use crate::screen::TradeScreen;

use dashboard::{KeybindBar, OrderForm, OrderPopup, StatusBar, TickTable};

const MAX_STATUS_LEN: usize = 80;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Table,
    Price,
    Amount,
}

/// Presentation-only state; everything the model owns is read from
/// [`TradeScreen`] at draw time.
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    pub focus: Focus,
    pub selected_row: usize,
    pub pending_order: Option<OrderTicket>,
    pub status: Option<String>,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_order_popup_open(&self) -> bool {
        self.pending_order.is_some()
    }

    pub fn set_status(&mut self, msg: impl Into<String>) {
        let mut msg = msg.into();
        if msg.len() > MAX_STATUS_LEN {
            let cut = (0..=MAX_STATUS_LEN)
                .rev()
                .find(|i| msg.is_char_boundary(*i))
                .unwrap_or(0);
            msg.truncate(cut);
        }
        self.status = Some(msg);
    }

    pub fn clamp_selection(&mut self, row_count: usize) {
        self.selected_row = self.selected_row.min(row_count.saturating_sub(1));
    }
}

pub fn render(frame: &mut Frame, screen: &TradeScreen, view: &ViewState) {
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // status bar
            Constraint::Min(6),    // tick table
            Constraint::Length(5), // order form
            Constraint::Length(1), // keybinds
        ])
        .split(frame.area());

    let toggles = screen.sort_toggles();
    frame.render_widget(
        StatusBar {
            tick_count: screen.tick_count(),
            feed_running: screen.is_feed_running(),
            status: view.status.as_deref(),
        },
        outer[0],
    );

    {
        let ticks = screen.borrow_ticks();
        frame.render_widget(
            TickTable::new(&ticks, view.selected_row)
                .focused(view.focus == Focus::Table)
                .toggles(toggles),
            outer[1],
        );
    }

    let price = screen.price_input();
    let amount = screen.amount_input();
    let total = screen.total();
    frame.render_widget(
        OrderForm {
            price: &price,
            amount: &amount,
            total: &total,
            focus: view.focus,
        },
        outer[2],
    );

    frame.render_widget(KeybindBar { focus: view.focus }, outer[3]);

    if let Some(ticket) = &view.pending_order {
        let area = centered_rect(44, 8, frame.area());
        frame.render_widget(OrderPopup { ticket }, area);
    }
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
