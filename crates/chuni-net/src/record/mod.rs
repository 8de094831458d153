//! Score record types.
//!
//! Records are layered by composition: a [`Record`] is the data every listing
//! shows, [`MusicRecord`] adds per-song page data, [`RecentRecord`] adds
//! play-log data and [`DetailedRecentRecord`] adds the play detail page.
//! [`ScoreRecord`] gives uniform access to the base record of any layer.

mod extras;
#[allow(clippy::module_inception)]
mod record;

pub use extras::*;
pub use record::*;
