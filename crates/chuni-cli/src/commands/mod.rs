//! CLI command implementations.
//!
//! Every command except `rating` talks to the portal through one
//! [`ChuniNet`] client built from the global arguments.

pub mod account;
pub mod player;
pub mod rating;
pub mod records;

use std::sync::Arc;

use anyhow::{Result, bail};
use chuni_net::client::{FolderQuery, RatingList};
use chuni_net::{ChuniNet, ClientConfig};
use reqwest::cookie::Jar;
use tracing::debug;

use crate::cli::{Args, Command};

/// Build a client from the login and session cookies given on the command
/// line or in the environment.
pub fn connect(args: &Args) -> Result<ChuniNet> {
    if args.clal.is_none() && args.user_id.is_none() {
        bail!("No credentials: set CHUNI_CLAL (or --clal), or CHUNI_USER_ID and CHUNI_TOKEN");
    }

    let mut builder = ClientConfig::builder();
    if let Some(base_url) = &args.base_url {
        builder = builder.base_url(base_url.as_str());
    }
    let config = builder.build()?;
    debug!("Portal origin: {}", config.base_url);

    let client = ChuniNet::new(config, Arc::new(Jar::default()))?;
    if let Some(clal) = &args.clal {
        client.seed_login_cookie(clal);
    }
    client.seed_session_cookies(args.user_id.as_deref(), args.token.as_deref());
    Ok(client)
}

pub async fn run(client: &mut ChuniNet, command: &Command, json: bool) -> Result<()> {
    match command {
        Command::Profile => player::profile(client, json).await,
        Command::PlayerData => player::player_data(client, json).await,
        Command::Recent => records::recent(client, json).await,
        Command::Detail { idx, token } => records::detail(client, *idx, token, json).await,
        Command::Song { id } => records::song(client, *id, json).await,
        Command::Best30 => records::rating_list(client, RatingList::Best, json).await,
        Command::Recent10 => records::rating_list(client, RatingList::Recent, json).await,
        Command::Selection10 => records::rating_list(client, RatingList::Selection, json).await,
        Command::Search {
            level,
            genre,
            rank,
            difficulty,
        } => {
            let query = FolderQuery {
                level: *level,
                genre: genre.map(Into::into),
                rank: *rank,
                difficulty: difficulty.map(Into::into),
            };
            records::search(client, &query, json).await
        }
        Command::Rename { name } => account::rename(client, name).await,
        Command::Logout => account::logout(client).await,
        Command::Friend { code } => account::friend(client, code).await,
        Command::Rating { score, constant } => rating::run(*score, *constant, json),
    }
}
