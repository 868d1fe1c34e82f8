use uuid::Uuid;

/// Parse a user-entered decimal. Input is taken verbatim: surrounding
/// whitespace, `inf` and `NaN` are all rejected.
pub fn parse_decimal(text: &str) -> Option<f64> {
    text.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// `price * amount` with exactly four fractional digits, or an empty string
/// when either side is not a number or the product overflows.
pub fn compute_total(price: &str, amount: &str) -> String {
    match (parse_decimal(price), parse_decimal(amount)) {
        (Some(p), Some(a)) => {
            let total = p * a;
            if total.is_finite() {
                format!("{:.4}", total)
            } else {
                String::new()
            }
        }
        _ => String::new(),
    }
}

/// Snapshot of the order form at the moment the user asked to place it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderTicket {
    pub id: Uuid,
    pub price: String,
    pub amount: String,
    pub total: String,
}

impl OrderTicket {
    pub fn new(price: &str, amount: &str, total: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            price: price.to_string(),
            amount: amount.to_string(),
            total: total.to_string(),
        }
    }

    /// A ticket is placeable only when the form produced a total.
    pub fn is_complete(&self) -> bool {
        !self.total.is_empty()
    }

    pub fn summary_lines(&self) -> [String; 3] {
        [
            format!("Price: {}", self.price),
            format!("Amount: {}", self.amount),
            format!("Total: {}", self.total),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_multiplies_and_formats_four_digits() {
        assert_eq!(compute_total("10", "2.5"), "25.0000");
        assert_eq!(compute_total("0.1", "0.2"), "0.0200");
        assert_eq!(compute_total("123.4500", "2"), "246.9000");
        assert_eq!(compute_total("-3", "1.5"), "-4.5000");
    }

    #[test]
    fn total_is_blank_for_non_numeric_sides() {
        assert_eq!(compute_total("abc", "2.5"), "");
        assert_eq!(compute_total("10", ""), "");
        assert_eq!(compute_total(" 10", "2"), "");
        assert_eq!(compute_total("inf", "2"), "");
        assert_eq!(compute_total("NaN", "2"), "");
    }

    #[test]
    fn total_is_blank_on_overflow() {
        assert_eq!(compute_total("1e200", "1e200"), "");
    }

    #[test]
    fn ticket_completeness_follows_total() {
        let ticket = OrderTicket::new("10", "2", "20.0000");
        assert!(ticket.is_complete());
        assert_eq!(ticket.summary_lines()[2], "Total: 20.0000");

        let blank = OrderTicket::new("x", "2", "");
        assert!(!blank.is_complete());
        assert_ne!(ticket.id, blank.id);
    }
}
