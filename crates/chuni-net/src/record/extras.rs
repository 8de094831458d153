use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calc;
use crate::chart::Level;
use crate::score::ComboType;

/// Metadata attached to a record by later stages.
///
/// The parser only fills `song_id` when the page carries it. The remaining
/// fields are filled by consumers that know the chart catalog.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RecordExtras {
    pub song_id: Option<u32>,
    pub level: Option<Level>,
    pub internal_level: Option<Decimal>,
    pub play_rating: Option<Decimal>,
    pub overpower_base: Option<Decimal>,
    pub overpower_max: Option<Decimal>,
    pub total_combo: Option<u32>,
}

impl RecordExtras {
    pub fn with_song_id(song_id: u32) -> Self {
        Self {
            song_id: Some(song_id),
            ..Default::default()
        }
    }

    /// Fill the derived metrics for a play of a chart with a known constant.
    ///
    /// `overpower_base` holds the overpower of this particular play, lamp
    /// bonus included.
    pub fn annotate(
        &mut self,
        score: u32,
        combo: ComboType,
        level: Option<Level>,
        constant: Decimal,
    ) {
        self.level = level.or(self.level);
        self.internal_level = Some(constant);
        self.play_rating = Some(calc::rating(score, Some(constant)));
        self.overpower_base = Some(calc::play_overpower(score, combo, constant));
        self.overpower_max = Some(calc::overpower_max(constant));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_annotate() {
        let mut extras = RecordExtras::with_song_id(123);
        extras.annotate(
            1_010_000,
            ComboType::AllJusticeCritical,
            Some(Level::new(14, true)),
            Decimal::new(147, 1),
        );

        assert_eq!(extras.song_id, Some(123));
        assert_eq!(extras.level, Some(Level::new(14, true)));
        assert_eq!(extras.internal_level, Some(Decimal::new(147, 1)));
        assert_eq!(extras.play_rating, Some(Decimal::new(1685, 2)));
        assert_eq!(extras.overpower_max, Some(Decimal::new(885, 1)));
        assert_eq!(extras.overpower_base, extras.overpower_max);
    }
}
