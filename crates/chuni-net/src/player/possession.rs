use serde::{Deserialize, Serialize};
use strum::{FromRepr, IntoStaticStr};

use crate::error::DecodeError;

/// Profile frame tier.
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
pub enum Possession {
    #[default]
    #[strum(serialize = "NONE")]
    None,
    #[strum(serialize = "SILVER")]
    Silver,
    #[strum(serialize = "GOLD")]
    Gold,
    #[strum(serialize = "PLATINUM")]
    Platinum,
    #[strum(serialize = "RAINBOW")]
    Rainbow,
}

impl Possession {
    /// Decode the token at the end of the profile background file name.
    /// Unknown tokens mean no possession frame.
    pub fn from_token(token: &str) -> Self {
        match token {
            "silver" => Self::Silver,
            "gold" => Self::Gold,
            "platina" | "platinum" => Self::Platinum,
            "rainbow" => Self::Rainbow,
            _ => Self::None,
        }
    }

    pub fn color(&self) -> u32 {
        match self {
            Self::None => 0xCECECE,
            Self::Silver => 0x6BAAC7,
            Self::Gold => 0xFCE620,
            Self::Platinum => 0xFFF6C5,
            Self::Rainbow => 0x0B6FF3,
        }
    }
}

impl std::fmt::Display for Possession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name: &'static str = self.into();
        write!(f, "{}", name)
    }
}

/// Skill class shown as the class emblem and medal.
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
    FromRepr,
    IntoStaticStr,
)]
#[repr(u8)]
pub enum SkillClass {
    I = 1,
    II = 2,
    III = 3,
    IV = 4,
    V = 5,
    #[strum(serialize = "∞")]
    Infinite = 6,
}

impl SkillClass {
    pub fn from_u8(value: u8) -> Result<Self, DecodeError> {
        Self::from_repr(value).ok_or(DecodeError::UnknownSkillClass(value))
    }
}

impl std::fmt::Display for SkillClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name: &'static str = self.into();
        write!(f, "{}", name)
    }
}

/// Nameplate background rarity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum NameplateRarity {
    #[default]
    Normal,
    Bronze,
    Silver,
    Gold,
    Platinum,
    Rainbow,
    Staff,
    Ongeki,
    /// Token the client does not know about, kept verbatim.
    Other(String),
}

impl NameplateRarity {
    /// Decode the token from `honor_bg_<token>.png`.
    pub fn from_token(token: &str) -> Self {
        match token {
            "normal" => Self::Normal,
            "bronze" | "copper" => Self::Bronze,
            "silver" => Self::Silver,
            "gold" => Self::Gold,
            "platina" | "platinum" => Self::Platinum,
            "rainbow" => Self::Rainbow,
            "staff" => Self::Staff,
            "ongeki" => Self::Ongeki,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Normal => "normal",
            Self::Bronze => "bronze",
            Self::Silver => "silver",
            Self::Gold => "gold",
            Self::Platinum => "platinum",
            Self::Rainbow => "rainbow",
            Self::Staff => "staff",
            Self::Ongeki => "ongeki",
            Self::Other(token) => token,
        }
    }
}

impl std::fmt::Display for NameplateRarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_possession_from_token() {
        assert_eq!(Possession::from_token("gold"), Possession::Gold);
        assert_eq!(Possession::from_token("platina"), Possession::Platinum);
        assert_eq!(Possession::from_token("platinum"), Possession::Platinum);
        assert_eq!(Possession::from_token("normal"), Possession::None);
        assert_eq!(Possession::Rainbow.color(), 0x0B6FF3);
    }

    #[test]
    fn test_skill_class() {
        assert_eq!(SkillClass::from_u8(1), Ok(SkillClass::I));
        assert_eq!(SkillClass::from_u8(6), Ok(SkillClass::Infinite));
        assert_eq!(SkillClass::from_u8(0), Err(DecodeError::UnknownSkillClass(0)));
        assert_eq!(SkillClass::Infinite.to_string(), "∞");
        assert_eq!(SkillClass::IV.to_string(), "IV");
    }

    #[test]
    fn test_nameplate_rarity() {
        assert_eq!(NameplateRarity::from_token("gold"), NameplateRarity::Gold);
        assert_eq!(
            NameplateRarity::from_token("holographic"),
            NameplateRarity::Other("holographic".to_string())
        );
        assert_eq!(NameplateRarity::from_token("holographic").to_string(), "holographic");
    }
}
