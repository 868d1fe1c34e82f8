use crossterm::event::KeyCode;
use tick_board::input::{
    parse_field_command, parse_order_command, parse_table_command, FieldCommand, OrderCommand,
    TableCommand,
};

#[test]
fn parse_table_command_maps_case_insensitive_char_keys() {
    assert_eq!(parse_table_command(&KeyCode::Char('q')), Some(TableCommand::Quit));
    assert_eq!(parse_table_command(&KeyCode::Char('Q')), Some(TableCommand::Quit));
    assert_eq!(
        parse_table_command(&KeyCode::Char('P')),
        Some(TableCommand::SortByPrice)
    );
    assert_eq!(
        parse_table_command(&KeyCode::Char('a')),
        Some(TableCommand::SortByAmount)
    );
    assert_eq!(
        parse_table_command(&KeyCode::Char('o')),
        Some(TableCommand::OpenOrder)
    );
    assert_eq!(parse_table_command(&KeyCode::Char('z')), None);
}

#[test]
fn parse_table_command_maps_navigation_and_taps() {
    assert_eq!(parse_table_command(&KeyCode::Up), Some(TableCommand::SelectUp));
    assert_eq!(parse_table_command(&KeyCode::Char('j')), Some(TableCommand::SelectDown));
    assert_eq!(parse_table_command(&KeyCode::Left), Some(TableCommand::TapPrice));
    assert_eq!(parse_table_command(&KeyCode::Enter), Some(TableCommand::TapPrice));
    assert_eq!(parse_table_command(&KeyCode::Right), Some(TableCommand::TapAmount));
    assert_eq!(parse_table_command(&KeyCode::Tab), Some(TableCommand::FocusForm));
}

#[test]
fn parse_field_command_passes_through_text() {
    assert_eq!(
        parse_field_command(&KeyCode::Char('7')),
        Some(FieldCommand::Insert('7'))
    );
    assert_eq!(
        parse_field_command(&KeyCode::Char('q')),
        Some(FieldCommand::Insert('q'))
    );
    assert_eq!(parse_field_command(&KeyCode::Backspace), Some(FieldCommand::Backspace));
    assert_eq!(parse_field_command(&KeyCode::Tab), Some(FieldCommand::NextField));
    assert_eq!(parse_field_command(&KeyCode::Esc), Some(FieldCommand::Leave));
    assert_eq!(parse_field_command(&KeyCode::Up), None);
}

#[test]
fn parse_order_command_confirm_and_cancel() {
    assert_eq!(parse_order_command(&KeyCode::Enter), Some(OrderCommand::Confirm));
    assert_eq!(parse_order_command(&KeyCode::Char('Y')), Some(OrderCommand::Confirm));
    assert_eq!(parse_order_command(&KeyCode::Esc), Some(OrderCommand::Cancel));
    assert_eq!(parse_order_command(&KeyCode::Char('n')), Some(OrderCommand::Cancel));
    assert_eq!(parse_order_command(&KeyCode::Char('x')), None);
}
