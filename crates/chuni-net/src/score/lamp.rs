use serde::{Deserialize, Serialize};
use strum::IntoStaticStr;

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
    IntoStaticStr,
)]
pub enum ClearType {
    #[default]
    #[strum(serialize = "FAILED")]
    Failed,
    #[strum(serialize = "CLEAR")]
    Clear,
    #[strum(serialize = "HARD")]
    Hard,
    #[strum(serialize = "ABSOLUTE")]
    Absolute,
    #[strum(serialize = "ABSOLUTE+")]
    AbsolutePlus,
    #[strum(serialize = "CATASTROPHY")]
    Catastrophy,
}

impl ClearType {
    pub fn short_name(&self) -> &'static str {
        self.into()
    }
}

impl std::fmt::Display for ClearType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.short_name())
    }
}

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
    IntoStaticStr,
)]
pub enum ComboType {
    #[default]
    #[strum(serialize = "NONE")]
    None,
    #[strum(serialize = "FULL COMBO")]
    FullCombo,
    #[strum(serialize = "ALL JUSTICE")]
    AllJustice,
    #[strum(serialize = "AJC")]
    AllJusticeCritical,
}

impl ComboType {
    pub fn short_name(&self) -> &'static str {
        self.into()
    }

    /// True for ALL JUSTICE and ALL JUSTICE CRITICAL.
    pub fn is_all_justice(&self) -> bool {
        matches!(self, Self::AllJustice | Self::AllJusticeCritical)
    }
}

impl std::fmt::Display for ComboType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.short_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(ClearType::AbsolutePlus.to_string(), "ABSOLUTE+");
        assert_eq!(ClearType::Failed.to_string(), "FAILED");
        assert_eq!(ComboType::AllJusticeCritical.to_string(), "AJC");
        assert_eq!(ComboType::FullCombo.to_string(), "FULL COMBO");
    }

    #[test]
    fn test_combo_ordering() {
        assert!(ComboType::AllJusticeCritical > ComboType::AllJustice);
        assert!(ComboType::AllJustice > ComboType::FullCombo);
        assert!(ComboType::AllJustice.is_all_justice());
        assert!(!ComboType::FullCombo.is_all_justice());
    }
}
