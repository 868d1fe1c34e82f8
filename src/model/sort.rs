use std::cmp::Ordering;
use std::fmt;

use super::order::parse_decimal;
use super::tick::{Tick, TickField};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortColumn {
    Price,
    Amount,
}

impl SortColumn {
    pub fn field(self) -> TickField {
        match self {
            SortColumn::Price => TickField::Price,
            SortColumn::Amount => TickField::Amount,
        }
    }
}

impl fmt::Display for SortColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.field().fmt(f)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Per-column toggle. `true` means the next sort on that column is
/// ascending; both start `false`, so the first sort is descending.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortToggles {
    pub price: bool,
    pub amount: bool,
}

impl SortToggles {
    pub fn get(&self, column: SortColumn) -> bool {
        match column {
            SortColumn::Price => self.price,
            SortColumn::Amount => self.amount,
        }
    }

    pub fn direction(&self, column: SortColumn) -> SortDirection {
        if self.get(column) {
            SortDirection::Ascending
        } else {
            SortDirection::Descending
        }
    }

    /// Returns the direction to use now and flips the toggle for next time.
    pub fn take(&mut self, column: SortColumn) -> SortDirection {
        let direction = self.direction(column);
        let toggle = match column {
            SortColumn::Price => &mut self.price,
            SortColumn::Amount => &mut self.amount,
        };
        *toggle = !*toggle;
        direction
    }
}

/// Numeric comparison where unparseable values sort after every parseable
/// one regardless of direction.
pub fn compare_values(a: &str, b: &str, direction: SortDirection) -> Ordering {
    match (parse_decimal(a), parse_decimal(b)) {
        (Some(x), Some(y)) => match direction {
            SortDirection::Ascending => x.total_cmp(&y),
            SortDirection::Descending => y.total_cmp(&x),
        },
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Stable in-place sort of `ticks` on one column.
pub fn sort_ticks(ticks: &mut [Tick], column: SortColumn, direction: SortDirection) {
    let field = column.field();
    ticks.sort_by(|a, b| compare_values(a.field(field), b.field(field), direction));
}
