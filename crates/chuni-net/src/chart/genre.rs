use serde::{Deserialize, Serialize};
use strum::FromRepr;

/// Record folder genres. The discriminant is the id the portal's genre
/// search form expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default, FromRepr)]
#[repr(u8)]
pub enum Genre {
    #[default]
    All = 99,
    PopsAndAnime = 0,
    Niconico = 2,
    TouhouProject = 3,
    Original = 5,
    Variety = 6,
    Irodorimidori = 7,
    Gekimai = 9,
}

impl Genre {
    pub const ALL: [Genre; 8] = [
        Self::All,
        Self::PopsAndAnime,
        Self::Niconico,
        Self::TouhouProject,
        Self::Original,
        Self::Variety,
        Self::Irodorimidori,
        Self::Gekimai,
    ];

    pub fn id(&self) -> u8 {
        *self as u8
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::All => "All genres",
            Self::PopsAndAnime => "POPS & ANIME",
            Self::Niconico => "niconico",
            Self::TouhouProject => "東方Project",
            Self::Original => "ORIGINAL",
            Self::Variety => "VARIETY",
            Self::Irodorimidori => "イロドリミドリ",
            Self::Gekimai => "ゲキマイ",
        }
    }
}

impl std::fmt::Display for Genre {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_genre_ids() {
        assert_eq!(Genre::All.id(), 99);
        assert_eq!(Genre::Gekimai.id(), 9);
        assert_eq!(Genre::from_repr(3), Some(Genre::TouhouProject));
        assert_eq!(Genre::from_repr(1), None);
    }

    #[test]
    fn test_genre_display() {
        assert_eq!(Genre::PopsAndAnime.to_string(), "POPS & ANIME");
        assert_eq!(Genre::All.to_string(), "All genres");
    }
}
