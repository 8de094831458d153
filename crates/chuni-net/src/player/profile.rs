use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{NameplateRarity, Possession, SkillClass};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Nameplate {
    pub content: String,
    pub rarity: NameplateRarity,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rating {
    pub current: Decimal,
    pub max: Decimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Overpower {
    pub value: Decimal,
    /// Fraction of the maximum reachable overpower (0.0568 for 5.68%).
    pub progress: Decimal,
}

/// Layered avatar image. Layers are drawn bottom to top in field order after
/// `base`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Avatar {
    pub base: String,
    pub back: String,
    pub skinfoot_r: String,
    pub skinfoot_l: String,
    pub skin: String,
    pub wear: String,
    pub face: String,
    pub face_cover: String,
    pub head: String,
    pub hand_r: String,
    pub hand_l: String,
    pub item_r: String,
    pub item_l: String,
}

impl Avatar {
    pub fn layers(&self) -> [&str; 13] {
        [
            &self.base,
            &self.back,
            &self.skinfoot_r,
            &self.skinfoot_l,
            &self.skin,
            &self.wear,
            &self.face,
            &self.face_cover,
            &self.head,
            &self.hand_r,
            &self.hand_l,
            &self.item_r,
            &self.item_l,
        ]
    }
}

/// Player card as shown on every portal page header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerProfile {
    pub name: String,
    pub level: u32,
    pub reborn: u32,
    pub nameplate: Nameplate,
    pub rating: Rating,
    pub overpower: Overpower,
    pub possession: Possession,
    pub emblem: Option<SkillClass>,
    pub medal: Option<SkillClass>,
    pub avatar: Avatar,
    pub character: Option<String>,
    pub team: Option<String>,
    pub last_play_date: DateTime<Utc>,
}

impl PlayerProfile {
    /// Level including reborns; each reborn is worth 100 levels.
    pub fn effective_level(&self) -> u32 {
        self.reborn * 100 + self.level
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Currency {
    pub owned: u64,
    pub total: u64,
}

/// Player card plus the data only shown on the player data page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerData {
    pub profile: PlayerProfile,
    pub currency: Currency,
    pub play_count: u32,
    pub friend_code: String,
}
