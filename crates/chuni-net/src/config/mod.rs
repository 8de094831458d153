//! Client configuration and portal constants.
//!
//! This module contains:
//! - `portal` - upstream URLs and endpoint paths
//! - `error_codes` - upstream error codes the session manager reacts to
//! - `network` - timeouts, user agent and connection retry schedule
//! - `player_name` - player name constraints
//! - `ClientConfig` - per-client settings with a builder

mod client;

pub use client::*;

/// Upstream portal URLs and endpoint paths.
pub mod portal {
    /// Default portal origin.
    pub const BASE_URL: &str = "https://chunithm-net-eng.com";

    /// Authentication gateway. A valid `clal` cookie on this host redirects back
    /// to the portal with fresh session cookies.
    pub const AUTH_URL: &str = "https://lng-tgk-aime-gw.am-all.net/common_auth/login?site_id=chuniex&redirect_url=https://chunithm-net-eng.com/mobile/&back_url=https://chunithm.sega.com/";

    /// Host of the authentication gateway.
    pub const AUTH_HOST: &str = "lng-tgk-aime-gw.am-all.net";

    /// Cookie path the gateway scopes `clal` to.
    pub const AUTH_COOKIE_PATH: &str = "/common_auth";

    /// Generic landing page. Landing here means the session was not accepted.
    pub const LANDING_PATH: &str = "/mobile/";

    /// Prefix of the dedicated error page.
    pub const ERROR_PATH_PREFIX: &str = "/mobile/error";

    /// Constant base layer of every avatar.
    pub const AVATAR_BASE_URL: &str =
        "https://new.chunithm-net.com/chuni-mobile/html/mobile/images/avatar_base.png";

    /// Song ids at or above this value are WORLD'S END charts.
    pub const WORLDS_END_ID_THRESHOLD: u32 = 8000;

    pub const HOME: &str = "mobile/home/";
    pub const PLAYER_DATA: &str = "mobile/home/playerData";
    pub const PLAYLOG: &str = "mobile/record/playlog";
    pub const PLAYLOG_DETAIL: &str = "mobile/record/playlog/sendPlaylogDetail/";
    pub const MUSIC_DETAIL: &str = "mobile/record/musicGenre/sendMusicDetail/";
    pub const WORLDS_END_DETAIL: &str = "mobile/record/worldsEndList/sendWorldsEndDetail/";
    pub const WORLDS_END_LIST: &str = "mobile/record/worldsEndList/";
    pub const RATING_BEST: &str = "mobile/home/playerData/ratingDetailBest/";
    pub const RATING_RECENT: &str = "mobile/home/playerData/ratingDetailRecent/";
    pub const RATING_SELECTION: &str = "mobile/home/playerData/ratingDetailNext/";
    pub const MUSIC_LEVEL_SEARCH: &str = "mobile/record/musicLevel/sendSearch/";
    pub const MUSIC_GENRE_PREFIX: &str = "mobile/record/musicGenre/";
    pub const MUSIC_RANK_PREFIX: &str = "mobile/record/musicRank/";
    pub const USER_NAME_FORM: &str = "mobile/home/userOption/updateUserName";
    pub const USER_NAME_UPDATE: &str = "mobile/home/userOption/updateUserName/update/";
    /// Page the portal lands on after a successful name change.
    pub const USER_OPTION_PATH: &str = "/mobile/home/userOption/";
    pub const LOGOUT: &str = "mobile/home/userOption/logout/";
    pub const FRIEND_SEARCH: &str = "mobile/friend/search/searchUser/";
    pub const FRIEND_INVITE: &str = "mobile/friend/search/sendInvite/";

    /// Session cookie names on the portal host.
    pub const USER_ID_COOKIE: &str = "userId";
    pub const TOKEN_COOKIE: &str = "_t";
    /// Long-lived login cookie on the gateway host.
    pub const LOGIN_COOKIE: &str = "clal";
}

/// Upstream error codes.
pub mod error_codes {
    /// Generic failure.
    pub const ERROR_GENERIC: u32 = 100001;

    /// Session is not valid. Also synthesized when a request lands on the
    /// generic landing page.
    pub const ERROR_INVALID_SESSION: u32 = 200004;

    /// Session expired after a period of inactivity.
    pub const ERROR_CONNECTION_TIME_EXPIRED: u32 = 200002;

    /// Codes that trigger a single re-authentication.
    pub const RECOVERABLE: [u32; 2] = [ERROR_INVALID_SESSION, ERROR_CONNECTION_TIME_EXPIRED];

    pub fn is_recoverable(code: u32) -> bool {
        RECOVERABLE.contains(&code)
    }
}

/// Network configuration.
pub mod network {
    use std::time::Duration;

    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(30);
    pub const READ_TIMEOUT: Duration = Duration::from_secs(30);

    /// Upper bound for a whole request including redirects.
    pub const CALL_TIMEOUT: Duration = Duration::from_secs(120);

    pub const USER_AGENT: &str =
        "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:109.0) Gecko/20100101 Firefox/119.0";

    /// Connection retry configuration.
    ///
    /// Exponential backoff: 250ms → 500ms → 1000ms. Only connection failures are
    /// retried; HTTP statuses and portal errors never are.
    pub mod retry {
        /// Maximum number of attempts for a request that fails to connect.
        pub const MAX_CONNECT_ATTEMPTS: u32 = 3;

        /// Delay (in ms) after each failed attempt.
        pub const RETRY_DELAYS_MS: [u64; 3] = [250, 500, 1000];
    }
}

/// Player name constraints enforced before any request is sent.
pub mod player_name {
    pub const MAX_LENGTH: usize = 8;

    /// Symbols accepted besides alphanumerics and whitespace.
    pub const ALLOWED_SPECIAL_CHARACTERS: &str =
        "・：；？！～／＋－×÷＝♂♀∀＃＆＊＠☆○◎◇□△▽♪†‡ΣαβγθφψωДё＄（）．＿␣-";

    pub fn is_allowed_char(c: char) -> bool {
        c.is_alphanumeric() || c.is_whitespace() || ALLOWED_SPECIAL_CHARACTERS.contains(c)
    }
}
