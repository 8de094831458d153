//! Parser tests against saved portal pages

use chrono::{TimeZone, Utc};
use rust_decimal::Decimal;
use scraper::Html;

use chuni_net::chart::Difficulty;
use chuni_net::parse;
use chuni_net::player::{NameplateRarity, Possession, SkillClass};
use chuni_net::score::{ClearType, ComboType, Rank};

fn fixture_text(name: &str) -> String {
    let path = format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name);
    std::fs::read_to_string(&path).unwrap()
}

fn fixture(name: &str) -> Html {
    Html::parse_document(&fixture_text(name))
}

mod player_tests {
    use super::*;

    #[test]
    fn test_player_card() {
        let profile = parse::parse_player_card(&fixture("home.html")).unwrap();

        assert_eq!(profile.name, "ＢｏＡｎｈＤＬＢ");
        assert_eq!(profile.level, 11);
        assert_eq!(profile.reborn, 0);
        assert_eq!(profile.effective_level(), 11);
        assert_eq!(profile.nameplate.content, "TRUE ENDING");
        assert_eq!(profile.nameplate.rarity, NameplateRarity::Gold);
        assert_eq!(profile.possession, Possession::Gold);
        assert_eq!(profile.rating.current, Decimal::new(1510, 2));
        assert_eq!(profile.rating.max, Decimal::new(1513, 2));
        assert_eq!(profile.overpower.value, Decimal::new(487818, 2));
        assert_eq!(profile.overpower.progress, Decimal::new(568, 4));
        assert_eq!(profile.emblem, Some(SkillClass::IV));
        assert_eq!(profile.medal, Some(SkillClass::III));
        assert_eq!(profile.team.as_deref(), Some("OMNIMIX"));
        assert_eq!(
            profile.last_play_date,
            Utc.with_ymd_and_hms(2023, 8, 4, 9, 34, 0).unwrap()
        );
    }

    #[test]
    fn test_avatar_layers() {
        let profile = parse::parse_player_card(&fixture("home.html")).unwrap();
        let layers = profile.avatar.layers();

        assert_eq!(layers.len(), 13);
        assert!(layers[0].ends_with("avatar_base.png"));
        assert!(profile.avatar.head.ends_with("head_04.png"));
        assert!(profile.avatar.face_cover.ends_with("facecover_03.png"));
    }

    #[test]
    fn test_player_data() {
        let data = parse::parse_player_data(&fixture("player_data.html")).unwrap();

        assert_eq!(data.profile.name, "ＢｏＡｎｈＤＬＢ");
        assert_eq!(data.currency.owned, 133_500);
        assert_eq!(data.currency.total, 136_000);
        assert_eq!(data.play_count, 70);
        assert_eq!(data.friend_code, "1234567890123");
    }

    #[test]
    fn test_player_data_requires_user_data_block() {
        // The home page has the card but not the player data block
        let result = parse::parse_player_data(&fixture("home.html"));
        assert!(matches!(
            result,
            Err(chuni_net::DecodeError::MissingField(_))
        ));
    }
}

mod record_tests {
    use super::*;

    #[test]
    fn test_recent_records() {
        let records = parse::parse_recent_records(&fixture("playlog.html")).unwrap();
        assert_eq!(records.len(), 2);

        let first = &records[0];
        assert_eq!(first.music.record.title, "Air");
        assert_eq!(first.music.record.difficulty, Difficulty::Master);
        assert_eq!(first.music.record.score, 950_592);
        assert_eq!(first.music.record.rank, Rank::AAA);
        assert_eq!(first.music.record.clear_lamp, ClearType::Failed);
        assert_eq!(first.music.record.combo_lamp, ComboType::None);
        assert_eq!(first.track, 4);
        assert!(!first.new_record);
        assert_eq!(
            first.music.jacket.as_deref(),
            Some("https://new.chunithm-net.com/chuni-mobile/html/mobile/img/d7bc2e8b1e9d4f0c.jpg")
        );

        let replay = first.replay.as_ref().unwrap();
        assert_eq!(replay.idx, 40);
        assert_eq!(replay.token, "b9bcc1acf740be4b59d7b21673a3b7ca");

        let second = &records[1];
        assert_eq!(second.music.record.rank, Rank::SSS);
        assert_eq!(second.music.record.clear_lamp, ClearType::Clear);
        assert_eq!(second.music.record.combo_lamp, ComboType::FullCombo);
        assert!(second.new_record);
        assert!(second.date < first.date);
    }

    #[test]
    fn test_recent_record_score_above_max_is_rejected() {
        let body = fixture_text("playlog.html").replace("950,592", "9,999,999");
        let result = parse::parse_recent_records(&Html::parse_document(&body));
        assert_eq!(
            result.unwrap_err(),
            chuni_net::DecodeError::ScoreOutOfRange(9_999_999)
        );
    }

    #[test]
    fn test_rating_list_score_above_max_is_rejected() {
        let body = fixture_text("rating_best.html").replace("1,009,120", "1,010,001");
        let result = parse::parse_rating_list(&Html::parse_document(&body));
        assert_eq!(
            result.unwrap_err(),
            chuni_net::DecodeError::ScoreOutOfRange(1_010_001)
        );
    }

    #[test]
    fn test_detailed_record() {
        let detail = parse::parse_detailed_record(&fixture("playlog_detail.html")).unwrap();

        assert_eq!(detail.recent.music.record.title, "Air");
        assert_eq!(detail.recent.replay, None);
        assert_eq!(detail.max_combo, 312);
        assert_eq!(detail.judgements.critical, 1190);
        assert_eq!(detail.judgements.miss, 29);
        assert_eq!(detail.judgements.total_notes(), 1466);
        assert_eq!(detail.note_types.tap, Decimal::new(9621, 4));
        assert_eq!(detail.note_types.flick, Decimal::ONE);
        assert_eq!(detail.character, "Ayaka");
        assert_eq!(detail.skill.name, "Judge Boost");
        assert_eq!(detail.skill.grade, 2);
        assert_eq!(detail.skill_result, 12_400);
    }

    #[test]
    fn test_music_record() {
        let records = parse::parse_music_record(&fixture("music_record.html"), 13).unwrap();
        assert_eq!(records.len(), 2);

        let expert = &records[0];
        assert_eq!(expert.record.title, "Air");
        assert_eq!(expert.record.difficulty, Difficulty::Expert);
        assert_eq!(expert.record.score, 1_004_210);
        assert_eq!(expert.record.rank, Rank::SS);
        assert_eq!(expert.record.clear_lamp, ClearType::Clear);
        assert_eq!(expert.play_count, Some(12));
        assert_eq!(expert.ajc_count, None);
        assert_eq!(expert.record.extras.song_id, Some(13));

        let master = &records[1];
        assert_eq!(master.record.difficulty, Difficulty::Master);
        assert_eq!(master.play_count, Some(3));
        assert_eq!(master.ajc_count, Some(0));
        assert!(master.jacket.is_some());
    }

    #[test]
    fn test_worlds_end_record() {
        let records = parse::parse_music_record(&fixture("worlds_end_record.html"), 8025).unwrap();
        assert_eq!(records.len(), 1);

        let record = &records[0].record;
        assert_eq!(record.title, "G e n g a o z o");
        assert_eq!(record.difficulty, Difficulty::WorldsEnd);
        assert_eq!(record.combo_lamp, ComboType::AllJustice);
        assert_eq!(record.extras.song_id, Some(8025));
    }

    #[test]
    fn test_rating_list_skips_unplayed() {
        let records = parse::parse_rating_list(&fixture("rating_best.html")).unwrap();
        assert_eq!(records.len(), 2);

        assert_eq!(records[0].title, "Air");
        assert_eq!(records[0].difficulty, Difficulty::Master);
        assert_eq!(records[0].score, 1_009_120);
        assert_eq!(records[0].rank, Rank::SSSPlus);
        assert_eq!(records[0].clear_lamp, ClearType::AbsolutePlus);
        assert_eq!(records[0].combo_lamp, ComboType::AllJusticeCritical);
        assert_eq!(records[0].extras.song_id, Some(13));

        assert_eq!(records[1].difficulty, Difficulty::Ultima);
        assert_eq!(records[1].extras.song_id, Some(2338));
    }
}

mod serde_tests {
    use chuni_net::{DetailedRecentRecord, MusicRecord};

    use super::*;

    #[test]
    fn test_detailed_record_json_round_trip() {
        let detail = parse::parse_detailed_record(&fixture("playlog_detail.html")).unwrap();

        let json = serde_json::to_value(&detail).unwrap();
        assert_eq!(json["recent"]["music"]["record"]["title"], "Air");
        assert_eq!(json["recent"]["music"]["record"]["difficulty"], "Master");
        assert_eq!(json["max_combo"], 312);
        assert_eq!(json["skill"]["name"], "Judge Boost");
        assert_eq!(json["recent"]["replay"], serde_json::Value::Null);

        let restored: DetailedRecentRecord = serde_json::from_value(json).unwrap();
        assert_eq!(restored, detail);
    }

    #[test]
    fn test_music_records_json_round_trip() {
        let records = parse::parse_music_record(&fixture("music_record.html"), 13).unwrap();

        let json = serde_json::to_string(&records).unwrap();
        let restored: Vec<MusicRecord> = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, records);
        assert_eq!(restored[1].ajc_count, Some(0));
    }
}

mod error_page_tests {
    use super::*;

    #[test]
    fn test_error_page() {
        let (code, description) = parse::parse_error_page(&fixture("error_page.html")).unwrap();
        assert_eq!(code, 100001);
        assert_eq!(description, "An error coccured.");

        let err = chuni_net::Error::Api { code, description };
        assert_eq!(err.to_string(), "Error code 100001: An error coccured.");
    }

    #[test]
    fn test_regular_page_is_not_an_error_page() {
        assert!(parse::parse_error_page(&fixture("home.html")).is_err());
    }
}
