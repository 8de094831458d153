use serde::{Deserialize, Serialize};
use strum::{FromRepr, IntoStaticStr};

use crate::error::DecodeError;

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Default,
    FromRepr,
    IntoStaticStr,
)]
#[repr(u8)]
pub enum Rank {
    #[default]
    D = 0,
    C = 1,
    B = 2,
    #[strum(serialize = "BB")]
    BB = 3,
    #[strum(serialize = "BBB")]
    BBB = 4,
    A = 5,
    #[strum(serialize = "AA")]
    AA = 6,
    #[strum(serialize = "AAA")]
    AAA = 7,
    S = 8,
    #[strum(serialize = "S+")]
    SPlus = 9,
    #[strum(serialize = "SS")]
    SS = 10,
    #[strum(serialize = "SS+")]
    SSPlus = 11,
    #[strum(serialize = "SSS")]
    SSS = 12,
    #[strum(serialize = "SSS+")]
    SSSPlus = 13,
}

/// Minimum score per rank, indexed by discriminant.
const MIN_SCORES: [u32; 14] = [
    0, 500_000, 600_000, 700_000, 800_000, 900_000, 925_000, 950_000, 975_000, 990_000,
    1_000_000, 1_005_000, 1_007_500, 1_009_000,
];

impl Rank {
    /// Decode the index used in rank icon file names (`..._rank_8.png`).
    pub fn from_index(index: u8) -> Result<Self, DecodeError> {
        Self::from_repr(index).ok_or(DecodeError::UnknownRank(index))
    }

    pub fn from_score(score: u32) -> Self {
        MIN_SCORES
            .iter()
            .rposition(|&min| score >= min)
            .and_then(|i| Self::from_repr(i as u8))
            .unwrap_or_default()
    }

    pub fn min_score(&self) -> u32 {
        MIN_SCORES[*self as usize]
    }

    pub fn short_name(&self) -> &'static str {
        self.into()
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.short_name())
    }
}
