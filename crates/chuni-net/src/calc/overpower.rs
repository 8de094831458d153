use rust_decimal::{Decimal, RoundingStrategy};

use crate::score::{ComboType, MAX_SCORE};

use super::{level_base, lower_segments};

/// Overpower of `score` before lamp bonuses, floored to 2 decimal places.
pub fn overpower_base(score: u32, constant: Decimal) -> Decimal {
    let base = level_base(constant);
    let s = Decimal::from(score);

    let rating100 = if score >= 1_007_500 {
        base + Decimal::from(20_000) + (s - Decimal::from(1_007_500)) * Decimal::from(3)
    } else if score >= 1_005_000 {
        base + Decimal::from(15_000) + (s - Decimal::from(1_005_000)) * Decimal::TWO
    } else if score >= 1_000_000 {
        base + Decimal::from(10_000) + (s - Decimal::from(1_000_000))
    } else {
        lower_segments(score, base)
    };

    (rating100.max(Decimal::ZERO) / Decimal::from(2_000))
        .round_dp_with_strategy(2, RoundingStrategy::ToNegativeInfinity)
}

/// Overpower of a 1,010,000 play.
pub fn overpower_max(constant: Decimal) -> Decimal {
    constant * Decimal::from(5) + Decimal::from(15)
}

/// Overpower of a single play including the lamp bonus.
pub fn play_overpower(score: u32, combo: ComboType, constant: Decimal) -> Decimal {
    if score == MAX_SCORE {
        return overpower_max(constant);
    }

    let base = overpower_base(score, constant);
    match combo {
        ComboType::AllJustice | ComboType::AllJusticeCritical => base + Decimal::ONE,
        ComboType::FullCombo => base + Decimal::new(5, 1),
        ComboType::None => base,
    }
}
