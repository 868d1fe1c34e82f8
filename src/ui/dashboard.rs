use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, Widget},
};

use crate::model::order::OrderTicket;
use crate::model::sort::{SortColumn, SortDirection, SortToggles};
use crate::model::tick::Tick;

use super::Focus;

pub struct StatusBar<'a> {
    pub tick_count: usize,
    pub feed_running: bool,
    pub status: Option<&'a str>,
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let feed_status = if self.feed_running {
            Span::styled("LIVE", Style::default().fg(Color::Green))
        } else {
            Span::styled("STOPPED", Style::default().fg(Color::Red))
        };

        let mut spans = vec![
            Span::styled(
                " tick-board ",
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("| ", Style::default().fg(Color::DarkGray)),
            feed_status,
            Span::styled(" | ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("ticks: {}", self.tick_count),
                Style::default().fg(Color::DarkGray),
            ),
        ];
        if let Some(status) = self.status {
            spans.push(Span::styled(" | ", Style::default().fg(Color::DarkGray)));
            spans.push(Span::styled(status, Style::default().fg(Color::Yellow)));
        }

        buf.set_line(area.x, area.y, &Line::from(spans), area.width);
    }
}

pub struct TickTable<'a> {
    ticks: &'a [Tick],
    selected: usize,
    focused: bool,
    toggles: SortToggles,
}

impl<'a> TickTable<'a> {
    pub fn new(ticks: &'a [Tick], selected: usize) -> Self {
        Self {
            ticks,
            selected,
            focused: true,
            toggles: SortToggles::default(),
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn toggles(mut self, toggles: SortToggles) -> Self {
        self.toggles = toggles;
        self
    }

    /// Header label with an arrow hinting which way the next sort goes.
    fn column_title(&self, name: &str, column: SortColumn) -> String {
        let arrow = match self.toggles.direction(column) {
            SortDirection::Ascending => "↑",
            SortDirection::Descending => "↓",
        };
        format!("{} {}", name, arrow)
    }
}

impl Widget for TickTable<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // borders + header
        let visible = area.height.saturating_sub(3).max(1) as usize;
        let offset = self.selected.saturating_sub(visible - 1);

        let header = Row::new(vec![
            Cell::from("Time"),
            Cell::from(self.column_title("Price", SortColumn::Price)),
            Cell::from(self.column_title("Amount", SortColumn::Amount)),
        ])
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );

        let rows = self
            .ticks
            .iter()
            .enumerate()
            .skip(offset)
            .take(visible)
            .map(|(idx, tick)| {
                let style = if self.focused && idx == self.selected {
                    Style::default().fg(Color::Black).bg(Color::Yellow)
                } else {
                    Style::default().fg(Color::White)
                };
                Row::new(vec![
                    Cell::from(tick.time.as_str()),
                    Cell::from(tick.price.as_str()),
                    Cell::from(tick.amount.as_str()),
                ])
                .style(style)
            });

        let border_color = if self.focused {
            Color::Yellow
        } else {
            Color::DarkGray
        };
        let block = Block::default()
            .title(" Trades ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color));

        Table::new(
            rows,
            [
                Constraint::Percentage(30),
                Constraint::Percentage(35),
                Constraint::Percentage(35),
            ],
        )
        .header(header)
        .block(block)
        .render(area, buf);
    }
}

pub struct OrderForm<'a> {
    pub price: &'a str,
    pub amount: &'a str,
    pub total: &'a str,
    pub focus: Focus,
}

impl Widget for OrderForm<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let field_style = |focused: bool| {
            if focused {
                Style::default().fg(Color::Black).bg(Color::Yellow)
            } else {
                Style::default().fg(Color::White)
            }
        };
        let cursor = |focused: bool| if focused { "_" } else { "" };

        let price_focused = self.focus == Focus::Price;
        let amount_focused = self.focus == Focus::Amount;

        let lines = vec![
            Line::from(vec![
                Span::styled("Price:  ", Style::default().fg(Color::DarkGray)),
                Span::styled(
                    format!("{}{}", self.price, cursor(price_focused)),
                    field_style(price_focused),
                ),
            ]),
            Line::from(vec![
                Span::styled("Amount: ", Style::default().fg(Color::DarkGray)),
                Span::styled(
                    format!("{}{}", self.amount, cursor(amount_focused)),
                    field_style(amount_focused),
                ),
            ]),
            Line::from(vec![
                Span::styled("Total:  ", Style::default().fg(Color::DarkGray)),
                Span::styled(
                    self.total,
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
        ];

        let block = Block::default()
            .title(" Order ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));

        Paragraph::new(lines).block(block).render(area, buf);
    }
}

pub struct OrderPopup<'a> {
    pub ticket: &'a OrderTicket,
}

impl Widget for OrderPopup<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);

        let mut lines: Vec<Line> = self
            .ticket
            .summary_lines()
            .into_iter()
            .map(|l| Line::from(Span::styled(l, Style::default().fg(Color::White))))
            .collect();
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled("[Enter]", Style::default().fg(Color::Yellow)),
            Span::styled(" confirm  ", Style::default().fg(Color::DarkGray)),
            Span::styled("[Esc]", Style::default().fg(Color::Yellow)),
            Span::styled(" cancel", Style::default().fg(Color::DarkGray)),
        ]));

        let block = Block::default()
            .title(" Place Order ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow));

        Paragraph::new(lines).block(block).render(area, buf);
    }
}

pub struct KeybindBar {
    pub focus: Focus,
}

impl Widget for KeybindBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let key = |k: &'static str| Span::styled(k, Style::default().fg(Color::Yellow));
        let label = |l: &'static str| Span::styled(l, Style::default().fg(Color::DarkGray));

        let line = match self.focus {
            Focus::Table => Line::from(vec![
                key(" [Q]"),
                label("uit  "),
                key("[P]"),
                label("rice sort  "),
                key("[A]"),
                label("mount sort  "),
                key("[←/→]"),
                label(" copy price/amount  "),
                key("[Tab]"),
                label(" edit  "),
                key("[O]"),
                label("rder"),
            ]),
            Focus::Price | Focus::Amount => Line::from(vec![
                key(" [Tab]"),
                label(" next field  "),
                key("[Esc]"),
                label(" back to trades  "),
                key("[Bksp]"),
                label(" delete"),
            ]),
        };

        buf.set_line(area.x, area.y, &line, area.width);
    }
}
