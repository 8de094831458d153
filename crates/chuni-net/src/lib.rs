//! Client library for the CHUNITHM-NET player portal.
//!
//! The portal has no API; everything is scraped from the HTML pages it serves
//! to a logged-in browser. [`ChuniNet`] drives those pages through a
//! [`Transport`] and hands back typed records, while [`calc`] reproduces the
//! game's play rating and OVER POWER formulas offline.

pub mod calc;
pub mod chart;
pub mod client;
pub mod config;
pub mod error;
pub mod parse;
pub mod player;
pub mod record;
pub mod retry;
pub mod score;
pub mod transport;

pub use chart::{Difficulty, Genre, Level};
pub use client::{ChuniNet, FolderQuery, FolderSearch, RatingList};
pub use config::{ClientConfig, ClientConfigBuilder};
pub use error::{DecodeError, Error, Result};
pub use player::{Currency, PlayerData, PlayerProfile, Possession, SkillClass};
pub use record::{
    DetailedRecentRecord, MusicRecord, RecentRecord, Record, RecordExtras, ReplayToken,
    ScoreRecord,
};
pub use retry::{ExponentialBackoff, FixedDelay, NoRetry, RetryPolicy, RetryStrategy};
pub use score::{ClearType, ComboType, Judgements, Rank};
pub use transport::{HttpTransport, SessionManager, SessionState, Transport};
