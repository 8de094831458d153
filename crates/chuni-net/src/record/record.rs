use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::chart::Difficulty;
use crate::score::{ClearType, ComboType, Judgements, MAX_SCORE, NoteTypeBreakdown, Rank};

use super::RecordExtras;

/// Opaque pair the portal needs to open a play's detail page.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReplayToken {
    pub idx: u32,
    pub token: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub title: String,
    pub difficulty: Difficulty,
    pub score: u32,
    pub rank: Rank,
    pub clear_lamp: ClearType,
    pub combo_lamp: ComboType,
    pub extras: RecordExtras,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MusicRecord {
    pub record: Record,
    pub jacket: Option<String>,
    pub play_count: Option<u32>,
    pub ajc_count: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentRecord {
    pub music: MusicRecord,
    /// Track number within the credit, starting at 1.
    pub track: u32,
    pub date: DateTime<Utc>,
    pub new_record: bool,
    pub replay: Option<ReplayToken>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub grade: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailedRecentRecord {
    pub recent: RecentRecord,
    pub max_combo: u32,
    pub judgements: Judgements,
    pub note_types: NoteTypeBreakdown,
    pub character: String,
    pub skill: Skill,
    pub skill_result: i32,
}

impl DetailedRecentRecord {
    /// Combo lamp with the AJC upgrade applied: a perfect score, or a play
    /// with no JUSTICE, ATTACK or MISS judgements, is an AJC even when the
    /// portal did not show the icon.
    pub fn effective_combo_lamp(&self) -> ComboType {
        if self.score() == MAX_SCORE || self.judgements.is_all_critical() {
            ComboType::AllJusticeCritical
        } else {
            self.combo_lamp()
        }
    }
}

/// Uniform access to the base record of every record layer.
pub trait ScoreRecord {
    fn record(&self) -> &Record;

    fn record_mut(&mut self) -> &mut Record;

    fn title(&self) -> &str {
        &self.record().title
    }

    fn difficulty(&self) -> Difficulty {
        self.record().difficulty
    }

    fn score(&self) -> u32 {
        self.record().score
    }

    fn rank(&self) -> Rank {
        self.record().rank
    }

    fn clear_lamp(&self) -> ClearType {
        self.record().clear_lamp
    }

    fn combo_lamp(&self) -> ComboType {
        self.record().combo_lamp
    }

    fn extras(&self) -> &RecordExtras {
        &self.record().extras
    }
}

impl ScoreRecord for Record {
    fn record(&self) -> &Record {
        self
    }

    fn record_mut(&mut self) -> &mut Record {
        self
    }
}

impl ScoreRecord for MusicRecord {
    fn record(&self) -> &Record {
        &self.record
    }

    fn record_mut(&mut self) -> &mut Record {
        &mut self.record
    }
}

impl ScoreRecord for RecentRecord {
    fn record(&self) -> &Record {
        &self.music.record
    }

    fn record_mut(&mut self) -> &mut Record {
        &mut self.music.record
    }
}

impl ScoreRecord for DetailedRecentRecord {
    fn record(&self) -> &Record {
        self.recent.record()
    }

    fn record_mut(&mut self) -> &mut Record {
        self.recent.record_mut()
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use rust_decimal::Decimal;

    use super::*;

    fn detailed(score: u32, judgements: Judgements) -> DetailedRecentRecord {
        DetailedRecentRecord {
            recent: RecentRecord {
                music: MusicRecord {
                    record: Record {
                        title: "Test Song".to_string(),
                        difficulty: Difficulty::Master,
                        score,
                        rank: Rank::from_score(score),
                        clear_lamp: ClearType::Clear,
                        combo_lamp: ComboType::FullCombo,
                        extras: RecordExtras::default(),
                    },
                    jacket: None,
                    play_count: None,
                    ajc_count: None,
                },
                track: 1,
                date: Utc.with_ymd_and_hms(2023, 8, 4, 9, 34, 0).unwrap(),
                new_record: false,
                replay: None,
            },
            max_combo: 1000,
            judgements,
            note_types: NoteTypeBreakdown {
                tap: Decimal::ONE,
                hold: Decimal::ONE,
                slide: Decimal::ONE,
                air: Decimal::ONE,
                flick: Decimal::ONE,
            },
            character: "Chara".to_string(),
            skill: Skill {
                name: "Skill".to_string(),
                grade: 1,
            },
            skill_result: 0,
        }
    }

    #[test]
    fn test_accessors_reach_base_record() {
        let mut record = detailed(1_005_000, Judgements::default());
        assert_eq!(record.title(), "Test Song");
        assert_eq!(record.difficulty(), Difficulty::Master);
        assert_eq!(record.rank(), Rank::SSPlus);

        record.record_mut().extras.song_id = Some(42);
        assert_eq!(record.extras().song_id, Some(42));
        assert_eq!(record.recent.music.record.extras.song_id, Some(42));
    }

    #[test]
    fn test_effective_combo_lamp() {
        let with_justice = Judgements {
            critical: 999,
            justice: 1,
            attack: 0,
            miss: 0,
        };
        assert_eq!(
            detailed(1_009_990, with_justice).effective_combo_lamp(),
            ComboType::FullCombo
        );
        assert_eq!(
            detailed(1_010_000, with_justice).effective_combo_lamp(),
            ComboType::AllJusticeCritical
        );

        let all_critical = Judgements {
            critical: 1000,
            ..Judgements::default()
        };
        let record = detailed(1_009_999, all_critical);
        assert_eq!(record.effective_combo_lamp(), ComboType::AllJusticeCritical);
        assert_eq!(record.combo_lamp(), ComboType::FullCombo);
    }
}
