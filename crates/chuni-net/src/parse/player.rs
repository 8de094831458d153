use std::str::FromStr;

use rust_decimal::Decimal;
use scraper::{ElementRef, Html};

use crate::config::portal;
use crate::error::DecodeError;
use crate::player::{
    Avatar, Currency, Nameplate, NameplateRarity, Overpower, PlayerData, PlayerProfile,
    Possession, Rating, SkillClass,
};

use super::{
    attr, chuni_int, extract_last_part, parse_time, select_all, select_opt, select_req, text,
    text_of,
};

fn decimal(field: &'static str, value: &str) -> Result<Decimal, DecodeError> {
    Decimal::from_str(value.trim()).map_err(|_| DecodeError::InvalidNumber {
        field,
        value: value.to_string(),
    })
}

/// Decode the rating shown as one image per digit, e.g. `rating_01.png`,
/// `rating_05.png`, `rating_comma.png`, `rating_01.png`, `rating_00.png` for
/// `15.10`.
fn parse_rating_digits(images: &[ElementRef<'_>]) -> Result<Decimal, DecodeError> {
    const SELECTOR: &str = ".player_rating_num_block img";

    let mut rating = String::with_capacity(images.len());
    for image in images {
        let src = attr(*image, SELECTOR, "src")?;
        let token = extract_last_part(src);
        if token == "comma" {
            rating.push('.');
            continue;
        }
        // Digits are always two characters with a leading zero, e.g. `07`
        match token.as_bytes() {
            [b'0', digit] if digit.is_ascii_digit() => rating.push(char::from(*digit)),
            _ => return Err(DecodeError::InvalidRatingDigit(src.to_string())),
        }
    }

    if rating.is_empty() {
        return Err(DecodeError::MissingField(SELECTOR));
    }
    decimal("rating", &rating)
}

/// Split `4878.18 (5.68%)` into the value and the progress fraction.
fn parse_overpower(value: &str) -> Result<Overpower, DecodeError> {
    let mut parts = value.split_whitespace();
    let overpower = decimal("overpower", parts.next().unwrap_or_default())?;
    let percent = parts
        .next()
        .unwrap_or_default()
        .trim_matches(|c| c == '(' || c == ')' || c == '%');

    Ok(Overpower {
        value: overpower,
        progress: decimal("overpower progress", percent)? / Decimal::ONE_HUNDRED,
    })
}

fn parse_skill_class(
    root: ElementRef<'_>,
    css: &'static str,
) -> Result<Option<SkillClass>, DecodeError> {
    let Some(image) = select_opt(root, css)? else {
        return Ok(None);
    };
    let Some(src) = image.value().attr("src") else {
        return Ok(None);
    };
    let tier: u8 = chuni_int("class emblem", extract_last_part(src))?;
    SkillClass::from_u8(tier).map(Some)
}

fn layer(group: ElementRef<'_>, css: &'static str) -> Result<String, DecodeError> {
    let image = select_req(group, css)?;
    attr(image, css, "src").map(str::to_string)
}

fn parse_avatar(root: ElementRef<'_>) -> Result<Avatar, DecodeError> {
    let group = select_req(root, ".avatar_group")?;

    Ok(Avatar {
        base: portal::AVATAR_BASE_URL.to_string(),
        back: layer(group, ".avatar_back img")?,
        skinfoot_r: layer(group, ".avatar_skinfoot_r img")?,
        skinfoot_l: layer(group, ".avatar_skinfoot_l img")?,
        skin: layer(group, ".avatar_skin img")?,
        wear: layer(group, ".avatar_wear img")?,
        face: layer(group, ".avatar_face img")?,
        face_cover: layer(group, ".avatar_faceCover img")?,
        head: layer(group, ".avatar_head img")?,
        hand_r: layer(group, ".avatar_hand_r img")?,
        hand_l: layer(group, ".avatar_hand_l img")?,
        item_r: layer(group, ".avatar_item_r img")?,
        item_l: layer(group, ".avatar_item_l img")?,
    })
}

/// Parse the player card present at the top of the home and player data
/// pages.
pub fn parse_player_card(document: &Html) -> Result<PlayerProfile, DecodeError> {
    let root = document.root_element();

    let name = text_of(root, ".player_name_in")?;
    let level_text = text_of(root, ".player_lv")?;
    let level = chuni_int(
        "level",
        level_text.trim_start_matches(|c: char| !c.is_ascii_digit()),
    )?;
    let reborn = match select_opt(root, ".player_reborn")?.map(text) {
        Some(reborn) if !reborn.is_empty() => chuni_int("reborn", &reborn)?,
        _ => 0,
    };

    let honor = select_req(root, ".player_honor_short")?;
    let nameplate = Nameplate {
        content: text_of(root, ".player_honor_text")?,
        rarity: NameplateRarity::from_token(extract_last_part(attr(
            honor,
            ".player_honor_short",
            "style",
        )?)),
    };

    let possession = select_opt(root, ".box_playerprofile")?
        .and_then(|profile| profile.value().attr("style"))
        .map(|style| Possession::from_token(extract_last_part(style)))
        .unwrap_or_default();

    let rating = Rating {
        current: parse_rating_digits(&select_all(root, ".player_rating_num_block img")?)?,
        max: decimal("max rating", &text_of(root, ".player_rating_max")?)?,
    };
    let overpower = parse_overpower(&text_of(root, ".player_overpower_text")?)?;
    let last_play_date = parse_time(&text_of(root, ".player_lastplaydate_text")?)?;

    let character = select_opt(root, ".player_chara img")?
        .and_then(|image| image.value().attr("src"))
        .map(str::to_string);
    let team = select_opt(root, ".player_team_name")?
        .map(text)
        .filter(|team| !team.is_empty());

    Ok(PlayerProfile {
        name,
        level,
        reborn,
        nameplate,
        rating,
        overpower,
        possession,
        emblem: parse_skill_class(root, ".player_classemblem_base img")?,
        medal: parse_skill_class(root, ".player_classemblem_top img")?,
        avatar: parse_avatar(root)?,
        character,
        team,
        last_play_date,
    })
}

/// Parse the player data page: the player card plus currency, lifetime play
/// count and friend code.
pub fn parse_player_data(document: &Html) -> Result<PlayerData, DecodeError> {
    let profile = parse_player_card(document)?;
    let root = document.root_element();

    let currency = Currency {
        owned: chuni_int("currency", &text_of(root, ".user_data_point .user_data_text")?)?,
        total: chuni_int(
            "total currency",
            &text_of(root, ".user_data_total_point .user_data_text")?,
        )?,
    };
    let play_count = chuni_int(
        "play count",
        &text_of(root, ".user_data_play_count .user_data_text")?,
    )?;
    let friend_code = text_of(
        root,
        ".user_data_friend_code .user_data_text span:not(.font_90)",
    )?;

    Ok(PlayerData {
        profile,
        currency,
        play_count,
        friend_code,
    })
}
