//! Play rating and overpower calculation.
//!
//! All arithmetic uses [`rust_decimal::Decimal`]; values are only truncated
//! for display via [`truncate_display`].

mod overpower;
mod rating;

pub use overpower::*;
pub use rating::*;

use rust_decimal::{Decimal, RoundingStrategy};

/// Truncate a value to `dp` decimal places for display.
pub fn truncate_display(value: Decimal, dp: u32) -> Decimal {
    value.round_dp_with_strategy(dp, RoundingStrategy::ToZero)
}

/// Chart constant scaled to the 10000-based fixed point both tables use.
fn level_base(constant: Decimal) -> Decimal {
    constant * Decimal::from(10_000)
}

/// Segments shared by the rating and overpower tables below 1,000,000.
fn lower_segments(score: u32, base: Decimal) -> Decimal {
    let s = Decimal::from(score);
    let half = (base - Decimal::from(50_000)) / Decimal::TWO;

    if score >= 975_000 {
        base + (s - Decimal::from(975_000)) * Decimal::TWO / Decimal::from(5)
    } else if score >= 900_000 {
        base - Decimal::from(50_000)
            + (s - Decimal::from(900_000)) * Decimal::TWO / Decimal::from(3)
    } else if score >= 800_000 {
        half + (s - Decimal::from(800_000)) * half / Decimal::from(100_000)
    } else if score >= 500_000 {
        half * (s - Decimal::from(500_000)) / Decimal::from(300_000)
    } else {
        Decimal::ZERO
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_display() {
        assert_eq!(truncate_display(Decimal::new(108_333, 4), 2), Decimal::new(1083, 2));
        assert_eq!(truncate_display(Decimal::new(1_4659, 3), 2), Decimal::new(1465, 2));
        assert_eq!(truncate_display(Decimal::new(-15, 1), 0), Decimal::new(-1, 0));
    }
}
