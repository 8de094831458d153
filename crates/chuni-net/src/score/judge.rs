use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Judgements {
    pub critical: u32,
    pub justice: u32,
    pub attack: u32,
    pub miss: u32,
}

impl Judgements {
    pub fn total_notes(&self) -> u32 {
        self.critical + self.justice + self.attack + self.miss
    }

    /// Every note was judged JUSTICE CRITICAL.
    pub fn is_all_critical(&self) -> bool {
        self.justice == 0 && self.attack == 0 && self.miss == 0
    }
}

/// Achievement ratio per note type, as fractions (1.01 for 101%).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NoteTypeBreakdown {
    pub tap: Decimal,
    pub hold: Decimal,
    pub slide: Decimal,
    pub air: Decimal,
    pub flick: Decimal,
}
