//! HTML record parser.
//!
//! Pure functions from a parsed portal page ([`scraper::Html`]) or one of its
//! elements to the typed domain records. A missing mandatory element yields
//! [`DecodeError::MissingField`] carrying the selector that found nothing;
//! documented optional fields fall back to their defaults instead.

mod error_page;
mod friend;
mod lamps;
mod player;
mod record;

pub use error_page::*;
pub use friend::*;
pub use lamps::*;
pub use player::*;
pub use record::*;

use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeZone, Utc};
use scraper::{ElementRef, Selector};

use crate::error::DecodeError;
use crate::score::MAX_SCORE;

/// Offset of the portal's local timestamps (UTC+9).
const PORTAL_UTC_OFFSET_SECS: i32 = 9 * 3600;

const TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M";

pub(crate) fn selector(css: &'static str) -> Result<Selector, DecodeError> {
    Selector::parse(css).map_err(|_| DecodeError::InvalidSelector(css))
}

/// First element matching `css` below `element`, if any.
pub(crate) fn select_opt<'a>(
    element: ElementRef<'a>,
    css: &'static str,
) -> Result<Option<ElementRef<'a>>, DecodeError> {
    let selector = selector(css)?;
    Ok(element.select(&selector).next())
}

/// First element matching `css` below `element`.
pub(crate) fn select_req<'a>(
    element: ElementRef<'a>,
    css: &'static str,
) -> Result<ElementRef<'a>, DecodeError> {
    select_opt(element, css)?.ok_or(DecodeError::MissingField(css))
}

pub(crate) fn select_all<'a>(
    element: ElementRef<'a>,
    css: &'static str,
) -> Result<Vec<ElementRef<'a>>, DecodeError> {
    let selector = selector(css)?;
    Ok(element.select(&selector).collect())
}

/// Whitespace-trimmed text content of an element.
pub(crate) fn text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

pub(crate) fn text_of(element: ElementRef<'_>, css: &'static str) -> Result<String, DecodeError> {
    select_req(element, css).map(text)
}

pub(crate) fn attr<'a>(
    element: ElementRef<'a>,
    selector: &'static str,
    attribute: &'static str,
) -> Result<&'a str, DecodeError> {
    element
        .value()
        .attr(attribute)
        .ok_or(DecodeError::MissingAttribute {
            selector,
            attribute,
        })
}

/// Parse an integer as the portal prints it, e.g. `1,009,500`.
pub(crate) fn chuni_int<T: std::str::FromStr>(
    field: &'static str,
    value: &str,
) -> Result<T, DecodeError> {
    let cleaned: String = value
        .chars()
        .filter(|c| *c != ',' && !c.is_whitespace())
        .collect();
    cleaned.parse().map_err(|_| DecodeError::InvalidNumber {
        field,
        value: value.to_string(),
    })
}

/// Parse a score, rejecting anything above the theoretical maximum.
pub(crate) fn chuni_score(value: &str) -> Result<u32, DecodeError> {
    let score = chuni_int("score", value)?;
    if score > MAX_SCORE {
        return Err(DecodeError::ScoreOutOfRange(score));
    }
    Ok(score)
}

/// Last `_`-separated token of a URL's file name without extension, e.g.
/// `gold` for `.../profile_gold.png`.
pub(crate) fn extract_last_part(url: &str) -> &str {
    let last = url.rsplit('_').next().unwrap_or(url);
    last.split('.').next().unwrap_or(last)
}

/// Convert a portal timestamp (`YYYY/MM/DD HH:MM`, UTC+9) to UTC.
pub fn parse_time(value: &str) -> Result<DateTime<Utc>, DecodeError> {
    let value = value.trim();
    let naive = NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT)
        .map_err(|_| DecodeError::InvalidTimestamp(value.to_string()))?;
    let offset = FixedOffset::east_opt(PORTAL_UTC_OFFSET_SECS)
        .ok_or_else(|| DecodeError::InvalidTimestamp(value.to_string()))?;

    offset
        .from_local_datetime(&naive)
        .single()
        .map(|dt| dt.with_timezone(&Utc))
        .ok_or_else(|| DecodeError::InvalidTimestamp(value.to_string()))
}
