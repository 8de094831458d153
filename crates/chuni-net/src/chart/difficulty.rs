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
    FromRepr,
    IntoStaticStr,
)]
#[repr(u8)]
pub enum Difficulty {
    #[strum(serialize = "BASIC")]
    Basic = 0,
    #[strum(serialize = "ADVANCED")]
    Advanced = 1,
    #[strum(serialize = "EXPERT")]
    Expert = 2,
    #[strum(serialize = "MASTER")]
    Master = 3,
    #[strum(serialize = "ULTIMA")]
    Ultima = 4,
    #[strum(serialize = "WORLD'S END")]
    WorldsEnd = 5,
}

impl Difficulty {
    pub const ALL: [Difficulty; 6] = [
        Self::Basic,
        Self::Advanced,
        Self::Expert,
        Self::Master,
        Self::Ultima,
        Self::WorldsEnd,
    ];

    /// Embed color used when presenting a record of this difficulty.
    pub fn color(&self) -> u32 {
        match self {
            Self::Basic => 0x009F7B,
            Self::Advanced => 0xF47900,
            Self::Expert => 0xE92829,
            Self::Master => 0x8C1BE1,
            Self::Ultima => 0x131313,
            Self::WorldsEnd => 0x0B6FF3,
        }
    }

    /// Color split into RGB components for terminal output.
    pub fn rgb(&self) -> (u8, u8, u8) {
        let color = self.color();
        ((color >> 16) as u8, (color >> 8) as u8, color as u8)
    }

    pub fn from_embed_color(color: u32) -> Result<Self, DecodeError> {
        Self::ALL
            .into_iter()
            .find(|d| d.color() == color)
            .ok_or(DecodeError::UnknownColor(color))
    }

    pub fn short_form(&self) -> &'static str {
        match self {
            Self::Basic => "BAS",
            Self::Advanced => "ADV",
            Self::Expert => "EXP",
            Self::Master => "MAS",
            Self::Ultima => "ULT",
            Self::WorldsEnd => "WE",
        }
    }

    pub fn from_short_form(short_form: &str) -> Result<Self, DecodeError> {
        Self::ALL
            .into_iter()
            .find(|d| d.short_form() == short_form)
            .ok_or_else(|| DecodeError::UnknownShortForm(short_form.to_string()))
    }

    /// Decode a difficulty from a difficulty icon URL such as
    /// `.../img/musiclevel_master.png`. The last `_`-separated token of the
    /// file stem names the difficulty.
    pub fn from_imgurl(url: &str) -> Result<Self, DecodeError> {
        let file_name = url.rsplit('/').next().unwrap_or(url);
        let stem = file_name.split('.').next().unwrap_or(file_name);
        let token = stem.rsplit('_').next().unwrap_or(stem);

        Self::from_slug(token).map_err(|_| DecodeError::UnknownDifficulty(url.to_string()))
    }

    /// Decode a lowercase difficulty slug as used in `bg_<slug>` class names
    /// and icon file names.
    pub fn from_slug(slug: &str) -> Result<Self, DecodeError> {
        match slug {
            "basic" => Ok(Self::Basic),
            "advanced" => Ok(Self::Advanced),
            "expert" => Ok(Self::Expert),
            "master" => Ok(Self::Master),
            "ultima" | "ultimate" => Ok(Self::Ultima),
            "worldsend" => Ok(Self::WorldsEnd),
            _ => Err(DecodeError::UnknownDifficulty(slug.to_string())),
        }
    }

    /// Segment used by folder search endpoints, e.g. `sendMaster`.
    pub fn path_segment(&self) -> &'static str {
        match self {
            Self::Basic => "Basic",
            Self::Advanced => "Advanced",
            Self::Expert => "Expert",
            Self::Master => "Master",
            Self::Ultima => "Ultima",
            Self::WorldsEnd => "WorldsEnd",
        }
    }

    pub fn is_worlds_end(&self) -> bool {
        matches!(self, Self::WorldsEnd)
    }

    pub fn name(&self) -> &'static str {
        self.into()
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
