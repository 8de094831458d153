//! Offline rating calculator.

use anyhow::{Result, bail};
use chuni_net::calc;
use chuni_net::score::{ComboType, MAX_SCORE, Rank};
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct RatingReport {
    score: u32,
    constant: Decimal,
    rank: Rank,
    rating: Decimal,
    overpower: Decimal,
    overpower_full_combo: Decimal,
    overpower_all_justice: Decimal,
    overpower_max: Decimal,
}

pub fn run(score: u32, constant: Decimal, json: bool) -> Result<()> {
    if score > MAX_SCORE {
        bail!("Score must be at most {}", MAX_SCORE);
    }
    if constant.is_sign_negative() {
        bail!("Chart constant must not be negative");
    }

    let report = RatingReport {
        score,
        constant,
        rank: Rank::from_score(score),
        rating: calc::rating(score, Some(constant)),
        overpower: calc::play_overpower(score, ComboType::None, constant),
        overpower_full_combo: calc::play_overpower(score, ComboType::FullCombo, constant),
        overpower_all_justice: calc::play_overpower(score, ComboType::AllJustice, constant),
        overpower_max: calc::overpower_max(constant),
    };

    if json {
        return crate::output::print_json(&report);
    }
    println!(
        "{} ({}) on {}",
        crate::output::format_score(report.score),
        report.rank,
        report.constant
    );
    println!("  RATING    : {}", calc::truncate_display(report.rating, 2));
    println!(
        "  OVERPOWER : {} / FC {} / AJ {} (MAX {})",
        report.overpower,
        report.overpower_full_combo,
        report.overpower_all_justice,
        report.overpower_max
    );
    Ok(())
}
