use crossterm::event::KeyCode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableCommand {
    Quit,
    SortByPrice,
    SortByAmount,
    SelectUp,
    SelectDown,
    TapPrice,
    TapAmount,
    FocusForm,
    OpenOrder,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldCommand {
    Insert(char),
    Backspace,
    NextField,
    Leave,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderCommand {
    Confirm,
    Cancel,
}

pub fn parse_table_command(key_code: &KeyCode) -> Option<TableCommand> {
    match key_code {
        KeyCode::Up => Some(TableCommand::SelectUp),
        KeyCode::Down => Some(TableCommand::SelectDown),
        KeyCode::Left | KeyCode::Enter => Some(TableCommand::TapPrice),
        KeyCode::Right => Some(TableCommand::TapAmount),
        KeyCode::Tab => Some(TableCommand::FocusForm),
        KeyCode::Char(c) => match c.to_ascii_lowercase() {
            'q' => Some(TableCommand::Quit),
            'p' => Some(TableCommand::SortByPrice),
            'a' => Some(TableCommand::SortByAmount),
            'k' => Some(TableCommand::SelectUp),
            'j' => Some(TableCommand::SelectDown),
            'o' => Some(TableCommand::OpenOrder),
            _ => None,
        },
        _ => None,
    }
}

pub fn parse_field_command(key_code: &KeyCode) -> Option<FieldCommand> {
    match key_code {
        KeyCode::Backspace => Some(FieldCommand::Backspace),
        KeyCode::Tab => Some(FieldCommand::NextField),
        KeyCode::Esc | KeyCode::Enter => Some(FieldCommand::Leave),
        KeyCode::Char(c) if !c.is_control() => Some(FieldCommand::Insert(*c)),
        _ => None,
    }
}

pub fn parse_order_command(key_code: &KeyCode) -> Option<OrderCommand> {
    match key_code {
        KeyCode::Enter => Some(OrderCommand::Confirm),
        KeyCode::Esc => Some(OrderCommand::Cancel),
        KeyCode::Char(c) => match c.to_ascii_lowercase() {
            'y' => Some(OrderCommand::Confirm),
            'n' => Some(OrderCommand::Cancel),
            _ => None,
        },
        _ => None,
    }
}
