use scraper::Html;

use crate::error::DecodeError;

use super::{chuni_int, select_all, select_opt, text};

const ERROR_BLOCKS: &str = ".block.text_l .font_small";

/// Parse the portal's error page into `(code, description)`.
///
/// The first block reads `ERROR CODE: 100001`; the description block is
/// optional and defaults to an empty string.
pub fn parse_error_page(document: &Html) -> Result<(u32, String), DecodeError> {
    let blocks = select_all(document.root_element(), ERROR_BLOCKS)?;
    let first = blocks
        .first()
        .map(|block| text(*block))
        .ok_or(DecodeError::MissingField(ERROR_BLOCKS))?;

    let code = match first.split_once(':') {
        Some((_, code)) => chuni_int("error code", code)?,
        None => {
            return Err(DecodeError::InvalidNumber {
                field: "error code",
                value: first,
            });
        }
    };
    let description = blocks.get(1).map(|block| text(*block)).unwrap_or_default();

    Ok((code, description))
}

/// Message the name change form shows when the portal rejects a name.
pub fn parse_name_change_error(document: &Html) -> Result<Option<String>, DecodeError> {
    Ok(select_opt(document.root_element(), ".text_red")?
        .map(text)
        .filter(|message| !message.is_empty()))
}
