use thiserror::Error;

/// Markup did not have the shape the parser expects.
///
/// These indicate upstream drift rather than a user or runtime condition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("Missing field: {0}")]
    MissingField(&'static str),

    #[error("Missing attribute `{attribute}` on {selector}")]
    MissingAttribute {
        selector: &'static str,
        attribute: &'static str,
    },

    #[error("Invalid number in {field}: {value:?}")]
    InvalidNumber { field: &'static str, value: String },

    #[error("Invalid timestamp: {0:?}")]
    InvalidTimestamp(String),

    #[error("Unknown difficulty: {0}")]
    UnknownDifficulty(String),

    #[error("Unknown difficulty color: {0:#08X}")]
    UnknownColor(u32),

    #[error("Unknown difficulty short form: {0}")]
    UnknownShortForm(String),

    #[error("Unknown rank index: {0}")]
    UnknownRank(u8),

    #[error("Unknown skill class: {0}")]
    UnknownSkillClass(u8),

    #[error("Score out of range: {0}")]
    ScoreOutOfRange(u32),

    #[error("Invalid rating digit image: {0}")]
    InvalidRatingDigit(String),

    #[error("Invalid selector: {0}")]
    InvalidSelector(&'static str),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),

    #[error("Error code {code}: {description}")]
    Api { code: u32, description: String },

    #[error("Invalid token: {0}")]
    InvalidToken(String),

    #[error("Service under maintenance")]
    Maintenance,

    #[error("Player is already a friend")]
    AlreadyFriends,

    #[error("Invalid friend code: {0}")]
    InvalidFriendCode(String),

    #[error("Player name rejected: {0}")]
    NameRejected(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("{0}")]
    Http(String),
}

impl Error {
    /// Upstream error code, if this error came from the portal's error page.
    pub fn api_code(&self) -> Option<u32> {
        match self {
            Self::Api { code, .. } => Some(*code),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        let message = if e.is_timeout() {
            format!("Request timed out: {}", e)
        } else if e.is_connect() {
            format!("Connection failed: {}", e)
        } else if e.is_request() {
            format!("Request error: {}", e)
        } else if let Some(status) = e.status() {
            format!("HTTP {} error: {}", status.as_u16(), e)
        } else {
            format!("HTTP error: {}", e)
        };
        Error::Http(message)
    }
}
