use std::str::FromStr;

use rust_decimal::Decimal;
use scraper::{ElementRef, Html};

use crate::chart::Difficulty;
use crate::error::DecodeError;
use crate::record::{
    DetailedRecentRecord, MusicRecord, RecentRecord, Record, RecordExtras, ReplayToken, Skill,
};
use crate::score::{Judgements, NoteTypeBreakdown};

use super::{
    attr, chuni_int, chuni_score, decode_icons_below, parse_time, select_all, select_opt,
    select_req, text, text_of,
};

/// One play in the play log.
const PLAYLOG_ENTRY: &str = ".frame02.w400";

/// Difficulty from a `bg_<slug>` class on a record container.
fn difficulty_from_classes(element: ElementRef<'_>) -> Result<Difficulty, DecodeError> {
    let mut classes = element.value().classes();
    match classes.find_map(|class| class.strip_prefix("bg_")) {
        Some(slug) => Difficulty::from_slug(slug),
        None => Err(DecodeError::UnknownDifficulty(
            element.value().classes().collect::<Vec<_>>().join(" "),
        )),
    }
}

fn parse_replay_token(record: ElementRef<'_>) -> Result<Option<ReplayToken>, DecodeError> {
    const IDX: &str = "form input[name=idx]";
    const TOKEN: &str = "form input[name=token]";

    let Some(idx) = select_opt(record, IDX)? else {
        return Ok(None);
    };
    let token = select_req(record, TOKEN)?;

    Ok(Some(ReplayToken {
        idx: chuni_int("replay idx", attr(idx, IDX, "value")?)?,
        token: attr(token, TOKEN, "value")?.to_string(),
    }))
}

fn parse_jacket(record: ElementRef<'_>) -> Result<String, DecodeError> {
    const JACKET: &str = ".play_jacket_img img";

    let image = select_req(record, JACKET)?;
    match image.value().attr("data-original") {
        Some(lazy) => Ok(lazy.to_string()),
        None => attr(image, JACKET, "src").map(str::to_string),
    }
}

/// Parse one play-log entry.
pub fn parse_basic_record(record: ElementRef<'_>) -> Result<RecentRecord, DecodeError> {
    const DIFFICULTY_ICON: &str = ".play_track_result img";

    let track_text = text_of(record, ".play_track_text")?;
    let track = chuni_int(
        "track",
        track_text.split_whitespace().last().unwrap_or_default(),
    )?;
    let date = parse_time(&text_of(record, ".play_datalist_date, .box_inner01")?)?;

    let difficulty_icon = select_req(record, DIFFICULTY_ICON)?;
    let difficulty = Difficulty::from_imgurl(attr(difficulty_icon, DIFFICULTY_ICON, "src")?)?;

    let score = chuni_score(&text_of(record, ".play_musicdata_score_text")?)?;
    let (rank, clear_lamp, combo_lamp) = decode_icons_below(record)?;

    Ok(RecentRecord {
        music: MusicRecord {
            record: Record {
                title: text_of(record, ".play_musicdata_title")?,
                difficulty,
                score,
                rank,
                clear_lamp,
                combo_lamp,
                extras: RecordExtras::default(),
            },
            jacket: Some(parse_jacket(record)?),
            play_count: None,
            ajc_count: None,
        },
        track,
        date,
        new_record: select_opt(record, ".play_musicdata_score_img")?.is_some(),
        replay: parse_replay_token(record)?,
    })
}

/// Parse the play log, most recent play first.
pub fn parse_recent_records(document: &Html) -> Result<Vec<RecentRecord>, DecodeError> {
    select_all(document.root_element(), PLAYLOG_ENTRY)?
        .into_iter()
        .map(parse_basic_record)
        .collect()
}

/// Value next to a `.musicdata_score_title` label.
fn labelled_value(label: ElementRef<'_>) -> Result<Option<String>, DecodeError> {
    let value = label
        .next_siblings()
        .filter_map(ElementRef::wrap)
        .find(|sibling| sibling.value().classes().any(|class| class == "musicdata_score_num"));

    match value {
        Some(value) => Ok(select_opt(value, ".text_b")?.map(text)),
        None => Ok(None),
    }
}

fn parse_music_block(
    block: ElementRef<'_>,
    title: &str,
    jacket: Option<&str>,
    song_id: u32,
) -> Result<MusicRecord, DecodeError> {
    let mut score = 0;
    let mut play_count = None;
    let mut ajc_count = None;

    for label in select_all(block, ".musicdata_score_title")? {
        let Some(value) = labelled_value(label)? else {
            continue;
        };
        let label = text(label).to_lowercase();
        if label.contains("high score") {
            score = chuni_score(&value)?;
        } else if label.contains("critical") {
            ajc_count = Some(chuni_int("AJC count", value.trim_end_matches("times"))?);
        } else if label.contains("play count") || value.ends_with("times") {
            play_count = Some(chuni_int("play count", value.trim_end_matches("times"))?);
        }
    }

    let (rank, clear_lamp, combo_lamp) = decode_icons_below(block)?;

    Ok(MusicRecord {
        record: Record {
            title: title.to_string(),
            difficulty: difficulty_from_classes(block)?,
            score,
            rank,
            clear_lamp,
            combo_lamp,
            extras: RecordExtras::with_song_id(song_id),
        },
        jacket: jacket.map(str::to_string),
        play_count,
        ajc_count,
    })
}

/// Parse a song's record page into one record per difficulty block.
pub fn parse_music_record(document: &Html, song_id: u32) -> Result<Vec<MusicRecord>, DecodeError> {
    let root = document.root_element();

    let jacket = select_opt(root, ".play_jacket_img img")?
        .and_then(|image| image.value().attr("src"));
    let title = select_opt(root, ".play_musicdata_title, .play_musicdata_worldsend_title")?
        .map(text)
        .unwrap_or_default();

    select_all(root, ".music_box")?
        .into_iter()
        .map(|block| parse_music_block(block, &title, jacket, song_id))
        .collect()
}

/// Parse a best / recent / selection rating list.
///
/// Entries without a high score are skipped. The song id is taken from the
/// entry's detail form.
pub fn parse_rating_list(document: &Html) -> Result<Vec<Record>, DecodeError> {
    const SONG_ID: &str = "input[name=idx]";

    let mut records = Vec::new();
    for form in select_all(document.root_element(), "form")? {
        let Some(entry) = select_opt(form, ".w388.musiclist_box")? else {
            continue;
        };
        let Some(score) = select_opt(form, ".play_musicdata_highscore .text_b")? else {
            continue;
        };

        let song_id = chuni_int("song id", attr(select_req(form, SONG_ID)?, SONG_ID, "value")?)?;
        let (rank, clear_lamp, combo_lamp) = decode_icons_below(form)?;

        records.push(Record {
            title: text_of(form, ".music_title, .musiclist_worldsend_title")?,
            difficulty: difficulty_from_classes(entry)?,
            score: chuni_score(&text(score))?,
            rank,
            clear_lamp,
            combo_lamp,
            extras: RecordExtras::with_song_id(song_id),
        });
    }
    Ok(records)
}

fn judgement(root: ElementRef<'_>, css: &'static str) -> Result<u32, DecodeError> {
    chuni_int(css, &text_of(root, css)?)
}

/// `"101.00%"` as a fraction.
fn note_ratio(root: ElementRef<'_>, css: &'static str) -> Result<Decimal, DecodeError> {
    let value = text_of(root, css)?;
    let ratio = Decimal::from_str(value.trim_end_matches('%').trim()).map_err(|_| {
        DecodeError::InvalidNumber {
            field: css,
            value: value.clone(),
        }
    })?;
    Ok(ratio / Decimal::ONE_HUNDRED)
}

/// `"+3"`, `"-2"` or `"−2"` as a signed integer.
fn signed_int(field: &'static str, value: &str) -> Result<i32, DecodeError> {
    let normalized = value.trim().replace('−', "-");
    chuni_int(field, normalized.trim_start_matches('+'))
}

/// Parse a play detail page.
pub fn parse_detailed_record(document: &Html) -> Result<DetailedRecentRecord, DecodeError> {
    let root = document.root_element();
    let recent = parse_basic_record(select_req(root, ".frame01_inside")?)?;

    let judgements = Judgements {
        critical: judgement(root, ".text_critical.play_data_detail_judge_text")?,
        justice: judgement(root, ".text_justice.play_data_detail_judge_text")?,
        attack: judgement(root, ".text_attack.play_data_detail_judge_text")?,
        miss: judgement(root, ".text_miss.play_data_detail_judge_text")?,
    };
    let note_types = NoteTypeBreakdown {
        tap: note_ratio(root, ".text_tap_red.play_data_detail_notes_text")?,
        hold: note_ratio(root, ".text_hold_yellow.play_data_detail_notes_text")?,
        slide: note_ratio(root, ".text_slide_blue.play_data_detail_notes_text")?,
        air: note_ratio(root, ".text_air_green.play_data_detail_notes_text")?,
        flick: note_ratio(root, ".text_flick_skyblue.play_data_detail_notes_text")?,
    };

    Ok(DetailedRecentRecord {
        recent,
        max_combo: chuni_int("max combo", &text_of(root, ".play_data_detail_maxcombo_block")?)?,
        judgements,
        note_types,
        character: text_of(root, ".play_data_chara_name")?,
        skill: Skill {
            name: text_of(root, ".play_data_skill_name")?,
            grade: chuni_int("skill grade", &text_of(root, ".play_data_skill_grade")?)?,
        },
        skill_result: signed_int(
            "skill result",
            &text_of(root, ".play_musicdata_skilleffect_text")?,
        )?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_from_classes() {
        let html = Html::parse_fragment("<div class=\"music_box bg_expert\"></div>");
        let block = select_req(html.root_element(), ".music_box").unwrap();
        assert_eq!(difficulty_from_classes(block), Ok(Difficulty::Expert));

        let html = Html::parse_fragment("<div class=\"music_box\"></div>");
        let block = select_req(html.root_element(), ".music_box").unwrap();
        assert!(matches!(
            difficulty_from_classes(block),
            Err(DecodeError::UnknownDifficulty(_))
        ));
    }

    #[test]
    fn test_signed_int() {
        assert_eq!(signed_int("skill", "+3"), Ok(3));
        assert_eq!(signed_int("skill", "-2"), Ok(-2));
        assert_eq!(signed_int("skill", "−1,200"), Ok(-1200));
    }

    #[test]
    fn test_record_without_replay_form() {
        let html = Html::parse_fragment(
            r#"<div class="frame02 w400">
                <div class="play_track_text">TRACK 3</div>
                <div class="play_datalist_date">2023/08/04 18:34</div>
                <div class="play_track_result"><img src="https://x/img/musiclevel_expert.png"></div>
                <div class="play_jacket_img"><img src="https://x/img/a.jpg"></div>
                <div class="play_musicdata_title">Song</div>
                <div class="play_musicdata_score_text">1,001,234</div>
            </div>"#,
        );
        let record = parse_recent_records(&html).unwrap().remove(0);
        assert_eq!(record.track, 3);
        assert_eq!(record.replay, None);
        assert_eq!(record.music.record.score, 1_001_234);
        assert_eq!(record.music.record.difficulty, Difficulty::Expert);
        assert_eq!(record.music.jacket.as_deref(), Some("https://x/img/a.jpg"));
        assert!(!record.new_record);
    }
}
