use scraper::ElementRef;

use crate::error::DecodeError;
use crate::score::{ClearType, ComboType, Rank};

use super::{chuni_int, extract_last_part, select_all, select_opt};

/// Icon container shared by every record listing.
pub const ICON_CONTAINER: &str = ".play_musicdata_icon";

/// Checked in order; `absolutep` must come before `absolute`.
const CLEAR_ICONS: [(&str, ClearType); 5] = [
    ("_clear", ClearType::Clear),
    ("_hard", ClearType::Hard),
    ("_absolutep", ClearType::AbsolutePlus),
    ("_absolute", ClearType::Absolute),
    ("_catastrophy", ClearType::Catastrophy),
];

/// Checked in order; `alljusticecritical` must come before `alljustice`.
const COMBO_ICONS: [(&str, ComboType); 3] = [
    ("_fullcombo", ComboType::FullCombo),
    ("_alljusticecritical", ComboType::AllJusticeCritical),
    ("_alljustice", ComboType::AllJustice),
];

/// Decode rank, clear lamp and combo lamp from one icon container.
///
/// Each icon is independent: a missing rank icon means D, a missing clear icon
/// means FAILED and a missing combo icon means NONE.
pub fn decode_rank_and_lamps(
    container: ElementRef<'_>,
) -> Result<(Rank, ClearType, ComboType), DecodeError> {
    let sources: Vec<&str> = select_all(container, "img")?
        .into_iter()
        .filter_map(|img| img.value().attr("src"))
        .collect();

    let rank = match sources.iter().find(|src| src.contains("_rank_")) {
        Some(src) => Rank::from_index(chuni_int("rank icon", extract_last_part(src))?)?,
        None => Rank::D,
    };

    let has_icon = |needle: &str| sources.iter().any(|src| src.contains(needle));

    let clear = CLEAR_ICONS
        .iter()
        .find(|(needle, _)| has_icon(*needle))
        .map(|(_, clear)| *clear)
        .unwrap_or_default();

    let combo = COMBO_ICONS
        .iter()
        .find(|(needle, _)| has_icon(*needle))
        .map(|(_, combo)| *combo)
        .unwrap_or_default();

    Ok((rank, clear, combo))
}

/// Decode the icon container below `element`, defaulting to D / FAILED / NONE
/// when the container is absent.
pub(crate) fn decode_icons_below(
    element: ElementRef<'_>,
) -> Result<(Rank, ClearType, ComboType), DecodeError> {
    match select_opt(element, ICON_CONTAINER)? {
        Some(container) => decode_rank_and_lamps(container),
        None => Ok((Rank::D, ClearType::Failed, ComboType::None)),
    }
}
