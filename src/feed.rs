use chrono::{DateTime, FixedOffset, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::FeedConfig;
use crate::error::AppError;
use crate::model::tick::{Tick, TickId, VALUE_DECIMALS};

/// Synthesizes trade ticks: a timestamp rendered at a fixed UTC offset, and
/// price/amount drawn uniformly from `[0, max_value)`.
#[derive(Debug)]
pub struct TickGenerator {
    rng: StdRng,
    offset: FixedOffset,
    time_format: String,
    max_value: f64,
    next_id: u64,
}

impl TickGenerator {
    pub fn from_config(config: &FeedConfig) -> Result<Self, AppError> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Ok(Self {
            rng,
            offset: config.utc_offset()?,
            time_format: config.time_format.clone(),
            max_value: config.max_value,
            next_id: 1,
        })
    }

    pub fn next_at(&mut self, now: DateTime<Utc>) -> Tick {
        let id = TickId(self.next_id);
        self.next_id += 1;
        let price = self.random_value();
        let amount = self.random_value();
        Tick::new(id, self.format_time(now), price, amount)
    }

    /// Ensure later ticks get ids strictly greater than `id`.
    pub fn skip_past(&mut self, id: TickId) {
        self.next_id = self.next_id.max(id.0.saturating_add(1));
    }

    pub fn format_time(&self, now: DateTime<Utc>) -> String {
        format_timestamp(now, self.offset, &self.time_format)
    }

    fn random_value(&mut self) -> String {
        let raw = self.rng.gen_range(0.0..self.max_value);
        format_value(round_to(raw, VALUE_DECIMALS))
    }
}

pub fn format_timestamp(now: DateTime<Utc>, offset: FixedOffset, format: &str) -> String {
    now.with_timezone(&offset).format(format).to_string()
}

fn round_to(value: f64, decimals: usize) -> f64 {
    let scale = 10f64.powi(decimals as i32);
    (value * scale).round() / scale
}

fn format_value(value: f64) -> String {
    format!("{:.*}", VALUE_DECIMALS, value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn seeded(seed: u64) -> TickGenerator {
        TickGenerator::from_config(&FeedConfig {
            seed: Some(seed),
            ..FeedConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn time_is_rendered_at_plus_eight() {
        let now = Utc.with_ymd_and_hms(2024, 7, 24, 18, 5, 9).unwrap();
        let gen = seeded(1);
        assert_eq!(gen.format_time(now), "02:05:09");
    }

    #[test]
    fn values_have_four_decimals_and_stay_in_range() {
        let mut gen = seeded(42);
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        for _ in 0..200 {
            let tick = gen.next_at(now);
            for value in [&tick.price, &tick.amount] {
                let (_, frac) = value.split_once('.').expect("decimal point");
                assert_eq!(frac.len(), 4, "{value}");
                let v: f64 = value.parse().unwrap();
                assert!((0.0..=100_000.0).contains(&v), "{value}");
            }
        }
    }

    #[test]
    fn ids_increase_and_seed_is_deterministic() {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let mut a = seeded(9);
        let mut b = seeded(9);
        let first = a.next_at(now);
        let second = a.next_at(now);
        assert_eq!(first.id, TickId(1));
        assert_eq!(second.id, TickId(2));
        assert_eq!(b.next_at(now), first);
    }

    #[test]
    fn skip_past_never_moves_ids_backwards() {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let mut gen = seeded(2);
        gen.skip_past(TickId(10));
        assert_eq!(gen.next_at(now).id, TickId(11));
        gen.skip_past(TickId(3));
        assert_eq!(gen.next_at(now).id, TickId(12));
    }

    #[test]
    fn rounding_keeps_four_places() {
        assert!((round_to(1.234_56, 4) - 1.2346).abs() < 1e-12);
        assert_eq!(format_value(42.1), "42.1000");
    }
}
