use crate::model::sort::SortColumn;
use crate::model::tick::{TickField, TickId};

/// A tap on one cell of a tick row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowIntent {
    pub id: TickId,
    pub field: TickField,
}

impl RowIntent {
    pub fn price(id: TickId) -> Self {
        Self {
            id,
            field: TickField::Price,
        }
    }

    pub fn amount(id: TickId) -> Self {
        Self {
            id,
            field: TickField::Amount,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenEvent {
    TimerFired,
    SetPrice(String),
    SetAmount(String),
    Sort(SortColumn),
    Tap(RowIntent),
}
