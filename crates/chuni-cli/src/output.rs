//! Console output formatting with colored display

use std::fmt::Write as _;

use anyhow::Result;
use chuni_net::chart::Difficulty;
use chuni_net::player::{PlayerData, PlayerProfile};
use chuni_net::record::{DetailedRecentRecord, MusicRecord, RecentRecord, Record};
use chuni_net::score::{ClearType, ComboType, Rank};
use owo_colors::OwoColorize;
use serde::Serialize;

const BORDER_WIDTH: usize = 50;

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// `1009120` as `1,009,120`.
pub fn format_score(score: u32) -> String {
    let digits = score.to_string();
    let mut output = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            output.push(',');
        }
        output.push(c);
    }
    output
}

/// Short difficulty label in the difficulty's own color
pub fn format_difficulty(difficulty: Difficulty) -> String {
    let (r, g, b) = difficulty.rgb();
    format!("{}", difficulty.short_form().truecolor(r, g, b).bold())
}

fn format_rank(rank: Rank) -> String {
    let label = rank.short_name();
    match rank {
        Rank::SSSPlus | Rank::SSS => format!("{}", label.truecolor(255, 215, 0).bold()),
        Rank::SSPlus | Rank::SS | Rank::SPlus | Rank::S => format!("{}", label.yellow()),
        Rank::AAA | Rank::AA | Rank::A => format!("{}", label.red()),
        _ => format!("{}", label.dimmed()),
    }
}

fn format_clear(clear: ClearType) -> String {
    match clear {
        ClearType::Failed => format!("{}", clear.dimmed()),
        ClearType::Clear => format!("{}", clear.green()),
        ClearType::Hard => format!("{}", clear.truecolor(255, 165, 0)),
        ClearType::Absolute | ClearType::AbsolutePlus => format!("{}", clear.cyan()),
        ClearType::Catastrophy => format!("{}", clear.magenta()),
    }
}

fn format_combo(combo: ComboType) -> String {
    match combo {
        ComboType::None => String::new(),
        ComboType::FullCombo => format!("{}", combo.truecolor(255, 200, 0)),
        ComboType::AllJustice | ComboType::AllJusticeCritical => {
            format!("{}", combo.truecolor(255, 215, 0).bold())
        }
    }
}

/// One line per record: difficulty, title, score, rank and lamps
pub fn format_record(record: &Record) -> String {
    let mut line = format!(
        "[{}] {}  {} {} {}",
        format_difficulty(record.difficulty),
        record.title.bold(),
        format_score(record.score),
        format_rank(record.rank),
        format_clear(record.clear_lamp),
    );
    let combo = format_combo(record.combo_lamp);
    if !combo.is_empty() {
        let _ = write!(line, " {}", combo);
    }
    line
}

pub fn format_profile(profile: &PlayerProfile) -> String {
    let mut output = String::new();
    let border = "━".repeat(BORDER_WIDTH);
    let (r, g, b) = rgb(profile.possession.color());

    let _ = writeln!(output, "{}", border.dimmed());
    let _ = writeln!(
        output,
        "  {} {}",
        profile.name.bold(),
        format!("Lv.{}", profile.effective_level()).truecolor(r, g, b)
    );
    let _ = writeln!(output, "{}", border.dimmed());
    let _ = writeln!(output, "  TITLE     : {}", profile.nameplate.content);
    let _ = writeln!(
        output,
        "  RATING    : {} (MAX {})",
        profile.rating.current.bold(),
        profile.rating.max
    );
    let _ = writeln!(
        output,
        "  OVERPOWER : {} ({}%)",
        profile.overpower.value,
        (profile.overpower.progress * rust_decimal::Decimal::ONE_HUNDRED).round_dp(2)
    );
    if let Some(team) = &profile.team {
        let _ = writeln!(output, "  TEAM      : {}", team);
    }
    if let Some(emblem) = profile.emblem {
        let _ = writeln!(output, "  CLASS     : {}", emblem);
    }
    let _ = write!(
        output,
        "  LAST PLAY : {}",
        profile.last_play_date.format("%Y-%m-%d %H:%M UTC")
    );

    output
}

pub fn format_player_data(data: &PlayerData) -> String {
    let mut output = format_profile(&data.profile);
    let _ = writeln!(output);
    let _ = writeln!(
        output,
        "  CURRENCY  : {} / {}",
        data.currency.owned, data.currency.total
    );
    let _ = writeln!(output, "  PLAYS     : {}", data.play_count);
    let _ = write!(output, "  FRIEND    : {}", data.friend_code);
    output
}

pub fn format_recent(record: &RecentRecord) -> String {
    let mut line = format!(
        "{} #{:<2} {}",
        record.date.format("%m/%d %H:%M").dimmed(),
        record.track,
        format_record(&record.music.record)
    );
    if record.new_record {
        let _ = write!(line, " {}", "NEW RECORD".green().bold());
    }
    if let Some(replay) = &record.replay {
        let _ = write!(line, " {}", format!("(idx {})", replay.idx).dimmed());
    }
    line
}

pub fn format_detail(detail: &DetailedRecentRecord) -> String {
    let judgements = &detail.judgements;
    let notes = &detail.note_types;
    let mut output = String::new();

    let _ = writeln!(output, "{}", format_recent(&detail.recent));
    let _ = writeln!(
        output,
        "  JUDGE : {}/{}/{}/{}",
        judgements.critical.truecolor(255, 215, 0),
        judgements.justice.truecolor(255, 165, 0),
        judgements.attack.green(),
        judgements.miss.dimmed(),
    );
    let _ = writeln!(output, "  COMBO : {}", detail.max_combo);
    let _ = writeln!(
        output,
        "  NOTES : TAP {} HOLD {} SLIDE {} AIR {} FLICK {}",
        notes.tap, notes.hold, notes.slide, notes.air, notes.flick
    );
    let _ = write!(
        output,
        "  SKILL : {} {} Lv.{} ({:+})",
        detail.character, detail.skill.name, detail.skill.grade, detail.skill_result
    );
    output
}

pub fn format_music_record(record: &MusicRecord) -> String {
    let mut line = format_record(&record.record);
    if let Some(plays) = record.play_count {
        let _ = write!(line, "  {}", format!("{} plays", plays).dimmed());
    }
    line
}

fn rgb(color: u32) -> (u8, u8, u8) {
    ((color >> 16) as u8, (color >> 8) as u8, color as u8)
}
