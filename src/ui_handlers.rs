use crossterm::event::KeyCode;

use crate::event::{RowIntent, ScreenEvent};
use crate::input::{
    parse_field_command, parse_order_command, parse_table_command, FieldCommand, OrderCommand,
    TableCommand,
};
use crate::model::sort::SortColumn;
use crate::model::tick::TickField;
use crate::screen::TradeScreen;
use crate::ui::{Focus, ViewState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    Continue,
    Quit,
}

/// Route one key press to the popup, the focused form field, or the table.
pub fn handle_key(key_code: &KeyCode, screen: &mut TradeScreen, view: &mut ViewState) -> KeyOutcome {
    if view.is_order_popup_open() {
        if let Some(cmd) = parse_order_command(key_code) {
            handle_order_command(cmd, screen, view);
        }
        return KeyOutcome::Continue;
    }

    match view.focus {
        Focus::Price | Focus::Amount => {
            if let Some(cmd) = parse_field_command(key_code) {
                handle_field_command(cmd, screen, view);
            }
            KeyOutcome::Continue
        }
        Focus::Table => match parse_table_command(key_code) {
            Some(TableCommand::Quit) => KeyOutcome::Quit,
            Some(cmd) => {
                handle_table_command(cmd, screen, view);
                KeyOutcome::Continue
            }
            None => KeyOutcome::Continue,
        },
    }
}

fn handle_table_command(cmd: TableCommand, screen: &mut TradeScreen, view: &mut ViewState) {
    let row_count = screen.tick_count();
    match cmd {
        TableCommand::Quit => {}
        TableCommand::SortByPrice => screen.apply(ScreenEvent::Sort(SortColumn::Price)),
        TableCommand::SortByAmount => screen.apply(ScreenEvent::Sort(SortColumn::Amount)),
        TableCommand::SelectUp => {
            view.selected_row = view.selected_row.saturating_sub(1);
        }
        TableCommand::SelectDown => {
            view.selected_row += 1;
            view.clamp_selection(row_count);
        }
        TableCommand::TapPrice => tap_selected(TickField::Price, screen, view),
        TableCommand::TapAmount => tap_selected(TickField::Amount, screen, view),
        TableCommand::FocusForm => view.focus = Focus::Price,
        TableCommand::OpenOrder => {
            let ticket = screen.order_ticket();
            if ticket.is_complete() {
                view.pending_order = Some(ticket);
            } else {
                view.set_status("Enter a numeric price and amount first");
            }
        }
    }
}

fn tap_selected(field: TickField, screen: &mut TradeScreen, view: &mut ViewState) {
    let id = screen.borrow_ticks().get(view.selected_row).map(|t| t.id);
    if let Some(id) = id {
        screen.apply(ScreenEvent::Tap(RowIntent { id, field }));
    }
}

fn handle_field_command(cmd: FieldCommand, screen: &mut TradeScreen, view: &mut ViewState) {
    match cmd {
        FieldCommand::Insert(c) => edit_focused(screen, view.focus, |text| text.push(c)),
        FieldCommand::Backspace => edit_focused(screen, view.focus, |text| {
            text.pop();
        }),
        FieldCommand::NextField => {
            view.focus = match view.focus {
                Focus::Price => Focus::Amount,
                Focus::Amount | Focus::Table => Focus::Table,
            };
        }
        FieldCommand::Leave => view.focus = Focus::Table,
    }
}

fn edit_focused(screen: &mut TradeScreen, focus: Focus, edit: impl FnOnce(&mut String)) {
    match focus {
        Focus::Price => {
            let mut text = screen.price_input();
            edit(&mut text);
            screen.apply(ScreenEvent::SetPrice(text));
        }
        Focus::Amount => {
            let mut text = screen.amount_input();
            edit(&mut text);
            screen.apply(ScreenEvent::SetAmount(text));
        }
        Focus::Table => {}
    }
}

fn handle_order_command(cmd: OrderCommand, screen: &mut TradeScreen, view: &mut ViewState) {
    let Some(ticket) = view.pending_order.take() else {
        return;
    };
    match cmd {
        OrderCommand::Confirm => {
            screen.confirm_order(&ticket);
            view.set_status(format!("Order placed: {} x {}", ticket.price, ticket.amount));
        }
        OrderCommand::Cancel => view.set_status("Order cancelled"),
    }
}
