use scraper::{ElementRef, Html};

use crate::error::DecodeError;

use super::{select_all, select_opt, text_of};

const PLAYER_BLOCK: &str = ".friend_block";

/// Outcome of looking up a friend code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FriendSearchResult {
    /// No player has this friend code.
    NotFound,
    /// The player was found but no invite can be sent.
    AlreadyFriends { name: String },
    /// The player can be invited by posting `form` to the invite endpoint.
    Invitable {
        name: String,
        form: Vec<(String, String)>,
    },
}

fn invite_form(block: ElementRef<'_>) -> Result<Option<Vec<(String, String)>>, DecodeError> {
    let form = select_all(block, "form")?.into_iter().find(|form| {
        form.value()
            .attr("action")
            .is_some_and(|action| action.contains("sendInvite"))
    });
    let Some(form) = form else {
        return Ok(None);
    };

    let fields = select_all(form, "input[type=hidden]")?
        .into_iter()
        .filter_map(|input| {
            let name = input.value().attr("name")?;
            let value = input.value().attr("value").unwrap_or_default();
            Some((name.to_string(), value.to_string()))
        })
        .collect();
    Ok(Some(fields))
}

/// Parse the friend search result page.
pub fn parse_friend_search(document: &Html) -> Result<FriendSearchResult, DecodeError> {
    let Some(block) = select_opt(document.root_element(), PLAYER_BLOCK)? else {
        return Ok(FriendSearchResult::NotFound);
    };
    let name = text_of(block, ".friend_name")?;

    Ok(match invite_form(block)? {
        Some(form) => FriendSearchResult::Invitable { name, form },
        None => FriendSearchResult::AlreadyFriends { name },
    })
}
