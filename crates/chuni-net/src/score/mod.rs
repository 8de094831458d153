//! Score classification types.
//!
//! This module contains:
//! - `Rank` - score ranks (D through SSS+)
//! - `ClearType`, `ComboType` - the two independent lamp icon sets
//! - `Judgements`, `NoteTypeBreakdown` - per-play judgement counts and note ratios

mod judge;
mod lamp;
mod rank;

pub use judge::*;
pub use lamp::*;
pub use rank::*;

/// Highest achievable score.
pub const MAX_SCORE: u32 = 1_010_000;
