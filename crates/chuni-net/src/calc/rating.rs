use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use super::{level_base, lower_segments};

/// Scaled delta above the chart constant that no score can reach.
const UNREACHABLE_DELTA: i64 = 21_501;

/// Play rating of `score` on a chart with the given constant.
///
/// A missing constant is treated as 0. The result is never negative.
pub fn rating(score: u32, constant: Option<Decimal>) -> Decimal {
    let base = level_base(constant.unwrap_or_default());
    let s = Decimal::from(score);

    let rating100 = if score >= 1_009_000 {
        base + Decimal::from(21_500)
    } else if score >= 1_007_500 {
        base + Decimal::from(20_000) + (s - Decimal::from(1_007_500))
    } else if score >= 1_005_000 {
        base + Decimal::from(15_000) + (s - Decimal::from(1_005_000)) * Decimal::TWO
    } else if score >= 1_000_000 {
        base + Decimal::from(10_000) + (s - Decimal::from(1_000_000))
    } else {
        lower_segments(score, base)
    };

    rating100.max(Decimal::ZERO) / Decimal::from(10_000)
}

/// Lowest score whose rating reaches `target` on a chart with the given
/// constant, truncated to an integer.
///
/// Returns `None` when even a score of 1,010,000 cannot reach the target.
pub fn score_for_rating(target: Decimal, constant: Decimal) -> Option<u32> {
    let base = level_base(constant);
    let target100 = level_base(target);
    let diff = target100 - base;

    let score = if diff >= Decimal::from(UNREACHABLE_DELTA) {
        return None;
    } else if diff >= Decimal::from(20_000) {
        Decimal::from(1_007_500) + diff - Decimal::from(20_000)
    } else if diff >= Decimal::from(15_000) {
        Decimal::from(1_005_000) + (diff - Decimal::from(15_000)) / Decimal::TWO
    } else if diff >= Decimal::from(10_000) {
        Decimal::from(1_000_000) + diff - Decimal::from(10_000)
    } else if diff >= Decimal::ZERO {
        Decimal::from(975_000) + diff * Decimal::from(5) / Decimal::TWO
    } else if diff >= Decimal::from(-50_000) {
        Decimal::from(900_000) + (diff + Decimal::from(50_000)) * Decimal::from(3) / Decimal::TWO
    } else if target100 <= Decimal::ZERO {
        Decimal::ZERO
    } else {
        // Below 900,000 the slope depends on the constant itself.
        let half = (base - Decimal::from(50_000)) / Decimal::TWO;
        if half <= Decimal::ZERO {
            return None;
        }
        if target100 >= half {
            Decimal::from(800_000) + (target100 / half - Decimal::ONE) * Decimal::from(100_000)
        } else {
            Decimal::from(500_000) + target100 * Decimal::from(300_000) / half
        }
    };

    score.trunc().to_u32()
}
