//! Client facade over the portal.
//!
//! [`ChuniNet`] exposes one method per remote capability. Every method
//! authenticates first when no session cookie exists yet, sends its request
//! through the [`SessionManager`] and parses the page it lands on.

use std::sync::Arc;

use reqwest::Url;
use reqwest::cookie::Jar;
use scraper::Html;
use tracing::{debug, info};

use crate::chart::{Difficulty, Genre, Level};
use crate::config::{ClientConfig, player_name, portal};
use crate::error::{DecodeError, Error, Result};
use crate::parse::{self, FriendSearchResult};
use crate::player::{PlayerData, PlayerProfile};
use crate::record::{DetailedRecentRecord, MusicRecord, RecentRecord, Record, ReplayToken};
use crate::score::Rank;
use crate::transport::{HttpTransport, PortalRequest, SessionManager, Transport};

/// Rating lists shown on the player data page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatingList {
    /// Best 30 plays.
    Best,
    /// Recent 10 plays.
    Recent,
    /// Plays that would enter the best list next.
    Selection,
}

impl RatingList {
    fn path(&self) -> &'static str {
        match self {
            Self::Best => portal::RATING_BEST,
            Self::Recent => portal::RATING_RECENT,
            Self::Selection => portal::RATING_SELECTION,
        }
    }
}

/// Filters for a record folder search.
///
/// When several filters are set the most specific search wins:
/// WORLD'S END difficulty, then level, then genre + difficulty, then
/// rank + difficulty, then difficulty alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FolderQuery {
    pub level: Option<Level>,
    pub genre: Option<Genre>,
    pub rank: Option<Rank>,
    pub difficulty: Option<Difficulty>,
}

/// The single search a [`FolderQuery`] resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FolderSearch {
    WorldsEnd,
    Level(Level),
    Genre(Genre, Difficulty),
    Rank(Rank, Difficulty),
}

impl FolderQuery {
    pub fn level(mut self, level: Level) -> Self {
        self.level = Some(level);
        self
    }

    pub fn genre(mut self, genre: Genre) -> Self {
        self.genre = Some(genre);
        self
    }

    pub fn rank(mut self, rank: Rank) -> Self {
        self.rank = Some(rank);
        self
    }

    pub fn difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = Some(difficulty);
        self
    }

    /// Resolve the filters to one search.
    ///
    /// Genre or rank without a difficulty, and an empty query, are rejected.
    pub fn resolve(&self) -> Result<FolderSearch> {
        if (self.genre.is_some() || self.rank.is_some()) && self.difficulty.is_none() {
            return Err(Error::InvalidArgument(
                "difficulty must be set when searching by genre or rank".to_string(),
            ));
        }

        if self.difficulty.is_some_and(|d| d.is_worlds_end()) {
            return Ok(FolderSearch::WorldsEnd);
        }
        if let Some(level) = self.level {
            return Ok(FolderSearch::Level(level));
        }

        match (self.genre, self.rank, self.difficulty) {
            (Some(genre), _, Some(difficulty)) => Ok(FolderSearch::Genre(genre, difficulty)),
            (None, Some(rank), Some(difficulty)) => Ok(FolderSearch::Rank(rank, difficulty)),
            (None, None, Some(difficulty)) => Ok(FolderSearch::Genre(Genre::All, difficulty)),
            _ => Err(Error::InvalidArgument(
                "at least one search filter must be set".to_string(),
            )),
        }
    }
}

/// Reject names the portal would refuse before sending anything.
pub fn validate_player_name(name: &str) -> Result<()> {
    let length = name.chars().count();
    if length == 0 || length > player_name::MAX_LENGTH {
        return Err(Error::InvalidArgument(format!(
            "player name must be 1 to {} characters",
            player_name::MAX_LENGTH
        )));
    }
    if let Some(c) = name.chars().find(|c| !player_name::is_allowed_char(*c)) {
        return Err(Error::InvalidArgument(format!(
            "player name contains an invalid character: {:?}",
            c
        )));
    }
    Ok(())
}

pub struct ChuniNet<T: Transport = HttpTransport> {
    session: SessionManager<T>,
}

impl ChuniNet<HttpTransport> {
    /// Create a client over an externally owned cookie store.
    pub fn new(config: ClientConfig, cookies: Arc<Jar>) -> Result<Self> {
        let transport = HttpTransport::new(&config, cookies)?;
        Ok(Self::with_transport(config, transport))
    }

    /// Create a client for the default portal with a fresh cookie store
    /// holding only the gateway login cookie.
    pub fn from_clal(clal: &str) -> Result<Self> {
        Self::from_clal_with_config(ClientConfig::default(), clal)
    }

    pub fn from_clal_with_config(config: ClientConfig, clal: &str) -> Result<Self> {
        let client = Self::new(config, Arc::new(Jar::default()))?;
        client.seed_login_cookie(clal);
        Ok(client)
    }
}

impl<T: Transport> ChuniNet<T> {
    pub fn with_transport(config: ClientConfig, transport: T) -> Self {
        Self {
            session: SessionManager::new(transport, config),
        }
    }

    pub fn session(&self) -> &SessionManager<T> {
        &self.session
    }

    pub fn user_id(&self) -> Option<String> {
        self.session.cookie(portal::USER_ID_COOKIE)
    }

    pub fn token(&self) -> Option<String> {
        self.session.cookie(portal::TOKEN_COOKIE)
    }

    /// Store the gateway login cookie used for re-authentication.
    pub fn seed_login_cookie(&self, clal: &str) {
        let config = self.session.config();
        let gateway = gateway_origin(&config.auth_url);
        self.session.transport().set_cookie(
            &gateway,
            portal::LOGIN_COOKIE,
            clal,
            portal::AUTH_COOKIE_PATH,
        );
    }

    /// Restore portal session cookies from a previous session.
    pub fn seed_session_cookies(&self, user_id: Option<&str>, token: Option<&str>) {
        let base = &self.session.config().base_url;
        let transport = self.session.transport();
        if let Some(user_id) = user_id {
            transport.set_cookie(base, portal::USER_ID_COOKIE, user_id, "/");
        }
        if let Some(token) = token {
            transport.set_cookie(base, portal::TOKEN_COOKIE, token, "/");
        }
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.session.config().endpoint(path)
    }

    /// Form token every POST carries.
    fn form_token(&self) -> Result<String> {
        self.token()
            .ok_or_else(|| Error::InvalidToken("no form token cookie in the session".to_string()))
    }

    async fn ensure_session(&mut self) -> Result<()> {
        if !self.session.has_session() {
            debug!("No session cookie, authenticating first");
            self.authenticate().await?;
        }
        Ok(())
    }

    /// Send a request with an established session and return the body.
    async fn fetch(&mut self, request: PortalRequest) -> Result<String> {
        self.ensure_session().await?;
        Ok(self.session.execute(&request).await?.body)
    }

    async fn fetch_parsed<R>(
        &mut self,
        request: PortalRequest,
        parser: impl FnOnce(&Html) -> std::result::Result<R, DecodeError>,
    ) -> Result<R> {
        let body = self.fetch(request).await?;
        Ok(parser(&Html::parse_document(&body))?)
    }

    /// Open the home page, authenticating through the gateway when needed,
    /// and return the player card.
    pub async fn authenticate(&mut self) -> Result<PlayerProfile> {
        let request = PortalRequest::get(self.endpoint(portal::HOME)?);
        let body = self.session.execute(&request).await?.body;

        if !self.session.has_session() {
            return Err(Error::InvalidToken("no userId cookie after login".to_string()));
        }
        let profile = parse::parse_player_card(&Html::parse_document(&body))?;
        info!("Authenticated as {}", profile.name);
        Ok(profile)
    }

    pub async fn player_data(&mut self) -> Result<PlayerData> {
        let request = PortalRequest::get(self.endpoint(portal::PLAYER_DATA)?);
        self.fetch_parsed(request, parse::parse_player_data).await
    }

    /// Play log, most recent play first.
    pub async fn recent_record(&mut self) -> Result<Vec<RecentRecord>> {
        let request = PortalRequest::get(self.endpoint(portal::PLAYLOG)?);
        self.fetch_parsed(request, parse::parse_recent_records).await
    }

    pub async fn detailed_recent_record(
        &mut self,
        replay: &ReplayToken,
    ) -> Result<DetailedRecentRecord> {
        let request = PortalRequest::post(
            self.endpoint(portal::PLAYLOG_DETAIL)?,
            [("idx", replay.idx.to_string()), ("token", replay.token.clone())],
        );
        self.fetch_parsed(request, parse::parse_detailed_record).await
    }

    /// Detail page of a play from the play log.
    pub async fn detailed_record_of(
        &mut self,
        record: &RecentRecord,
    ) -> Result<DetailedRecentRecord> {
        let replay = record.replay.as_ref().ok_or_else(|| {
            Error::InvalidArgument("record has no replay detail reference".to_string())
        })?;
        self.detailed_recent_record(replay).await
    }

    /// Records of every difficulty of one song.
    pub async fn music_record(&mut self, song_id: u32) -> Result<Vec<MusicRecord>> {
        let path = if song_id >= portal::WORLDS_END_ID_THRESHOLD {
            portal::WORLDS_END_DETAIL
        } else {
            portal::MUSIC_DETAIL
        };

        self.ensure_session().await?;
        let request = PortalRequest::post(
            self.endpoint(path)?,
            [("idx", song_id.to_string()), ("token", self.form_token()?)],
        );
        self.fetch_parsed(request, |document| parse::parse_music_record(document, song_id))
            .await
    }

    pub async fn rating_list(&mut self, list: RatingList) -> Result<Vec<Record>> {
        let request = PortalRequest::get(self.endpoint(list.path())?);
        self.fetch_parsed(request, parse::parse_rating_list).await
    }

    pub async fn best30(&mut self) -> Result<Vec<Record>> {
        self.rating_list(RatingList::Best).await
    }

    pub async fn recent10(&mut self) -> Result<Vec<Record>> {
        self.rating_list(RatingList::Recent).await
    }

    pub async fn selection10(&mut self) -> Result<Vec<Record>> {
        self.rating_list(RatingList::Selection).await
    }

    pub async fn music_record_by_folder(&mut self, query: &FolderQuery) -> Result<Vec<Record>> {
        let search = query.resolve()?;
        self.ensure_session().await?;
        let token = self.form_token()?;

        let request = match search {
            FolderSearch::WorldsEnd => PortalRequest::get(self.endpoint(portal::WORLDS_END_LIST)?),
            FolderSearch::Level(level) => PortalRequest::post(
                self.endpoint(portal::MUSIC_LEVEL_SEARCH)?,
                [("level", level.folder_index().to_string()), ("token", token)],
            ),
            FolderSearch::Genre(genre, difficulty) => PortalRequest::post(
                self.endpoint(&format!(
                    "{}send{}/",
                    portal::MUSIC_GENRE_PREFIX,
                    difficulty.path_segment()
                ))?,
                [("genre", genre.id().to_string()), ("token", token)],
            ),
            FolderSearch::Rank(rank, difficulty) => PortalRequest::post(
                self.endpoint(&format!(
                    "{}send{}/",
                    portal::MUSIC_RANK_PREFIX,
                    difficulty.path_segment()
                ))?,
                [("rank", (rank as u8).to_string()), ("token", token)],
            ),
        };
        debug!("Folder search {:?}", search);

        self.fetch_parsed(request, parse::parse_rating_list).await
    }

    /// Change the player name.
    ///
    /// Returns `true` when the portal accepted the name and `false` when it
    /// landed somewhere unexpected without a message.
    pub async fn change_player_name(&mut self, name: &str) -> Result<bool> {
        validate_player_name(name)?;
        self.ensure_session().await?;

        let referer = self.endpoint(portal::USER_NAME_FORM)?;
        let request = PortalRequest::post(
            self.endpoint(portal::USER_NAME_UPDATE)?,
            [("userName", name.to_string()), ("token", self.form_token()?)],
        )
        .with_header("Referer", referer.as_str());

        let response = self.session.execute(&request).await?;
        if response.url.path() == portal::USER_OPTION_PATH {
            info!("Player name changed to {}", name);
            return Ok(true);
        }

        match parse::parse_name_change_error(&Html::parse_document(&response.body))? {
            Some(message) => Err(Error::NameRejected(message)),
            None => Ok(false),
        }
    }

    /// End the portal session. The gateway login cookie is kept.
    pub async fn logout(&mut self) -> Result<bool> {
        let request = PortalRequest::get(self.endpoint(portal::LOGOUT)?);
        let response = self.session.execute_unclassified(&request).await?;
        self.session.mark_unauthenticated();
        Ok(response.status < 400)
    }

    /// Send a friend invite to the player with `friend_code`.
    pub async fn send_friend_request(&mut self, friend_code: &str) -> Result<()> {
        let friend_code = friend_code.trim();
        if friend_code.is_empty() || !friend_code.chars().all(|c| c.is_ascii_digit()) {
            return Err(Error::InvalidFriendCode(friend_code.to_string()));
        }
        self.ensure_session().await?;

        let search = PortalRequest::post(
            self.endpoint(portal::FRIEND_SEARCH)?,
            [("friendCode", friend_code.to_string()), ("token", self.form_token()?)],
        );
        let found = self.fetch_parsed(search, parse::parse_friend_search).await?;

        match found {
            FriendSearchResult::NotFound => Err(Error::InvalidFriendCode(friend_code.to_string())),
            FriendSearchResult::AlreadyFriends { .. } => Err(Error::AlreadyFriends),
            FriendSearchResult::Invitable { name, form } => {
                let invite = PortalRequest::post(self.endpoint(portal::FRIEND_INVITE)?, form);
                self.session.execute(&invite).await?;
                info!("Sent friend request to {}", name);
                Ok(())
            }
        }
    }
}

/// Origin of the authentication gateway, where the login cookie lives.
fn gateway_origin(auth_url: &Url) -> Url {
    let mut origin = auth_url.clone();
    origin.set_path(portal::AUTH_COOKIE_PATH);
    origin.set_query(None);
    origin
}
