use std::fmt;

/// Fractional digits used when rendering generated prices and amounts.
pub const VALUE_DECIMALS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TickId(pub u64);

impl fmt::Display for TickId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One synthetic trade print. Values are kept in their rendered form so the
/// row shows exactly what a tap copies into the order form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tick {
    pub id: TickId,
    pub time: String,
    pub price: String,
    pub amount: String,
}

impl Tick {
    pub fn new(
        id: TickId,
        time: impl Into<String>,
        price: impl Into<String>,
        amount: impl Into<String>,
    ) -> Self {
        Self {
            id,
            time: time.into(),
            price: price.into(),
            amount: amount.into(),
        }
    }

    pub fn field(&self, field: TickField) -> &str {
        match field {
            TickField::Price => &self.price,
            TickField::Amount => &self.amount,
        }
    }
}

/// Tappable column of a tick row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickField {
    Price,
    Amount,
}

impl fmt::Display for TickField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TickField::Price => write!(f, "price"),
            TickField::Amount => write!(f, "amount"),
        }
    }
}
