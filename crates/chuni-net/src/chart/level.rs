use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// A chart level as displayed in game, e.g. `13` or `13+`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Level {
    pub value: u8,
    pub plus: bool,
}

impl Level {
    pub fn new(value: u8, plus: bool) -> Self {
        Self { value, plus }
    }

    /// Index of the level folder in the portal's level search.
    ///
    /// Levels up to 7 have no `+` variant, so each level above 7 occupies two
    /// slots.
    pub fn folder_index(&self) -> u32 {
        let value = u32::from(self.value);
        (value.saturating_sub(1) + value.saturating_sub(7)) + u32::from(self.plus)
    }
}

impl FromStr for Level {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (digits, plus) = match s.strip_suffix('+') {
            Some(rest) => (rest, true),
            None => (s, false),
        };

        let value: u8 = digits
            .parse()
            .map_err(|_| Error::InvalidArgument(format!("invalid level: {:?}", s)))?;
        if value == 0 {
            return Err(Error::InvalidArgument(format!("invalid level: {:?}", s)));
        }

        Ok(Self { value, plus })
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.value, if self.plus { "+" } else { "" })
    }
}
