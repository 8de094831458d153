//! CLI argument definitions for chuni.

use clap::{Parser, Subcommand, ValueEnum};
use chuni_net::chart::{Difficulty, Genre, Level};
use chuni_net::score::Rank;
use rust_decimal::Decimal;

#[derive(Parser)]
#[command(name = "chuni")]
#[command(about = "CHUNITHM-NET player portal client", version)]
pub struct Args {
    /// Login cookie issued by the authentication gateway
    #[arg(long, env = "CHUNI_CLAL", hide_env_values = true)]
    pub clal: Option<String>,

    /// Portal session user id cookie
    #[arg(long, env = "CHUNI_USER_ID", hide_env_values = true)]
    pub user_id: Option<String>,

    /// Portal session token cookie
    #[arg(long, env = "CHUNI_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Portal origin
    #[arg(long, env = "CHUNI_BASE_URL")]
    pub base_url: Option<String>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show the player card
    Profile,
    /// Show the player card with currency, play count and friend code
    PlayerData,
    /// Show the play log
    Recent,
    /// Show the detail page of one play
    Detail {
        /// Play index from the play log
        #[arg(long)]
        idx: u32,
        /// Replay token from the play log
        #[arg(long)]
        token: String,
    },
    /// Show the records of one song
    Song {
        /// Song id (8000 and above are WORLD'S END)
        id: u32,
    },
    /// Show the best 30 rating list
    Best30,
    /// Show the recent 10 rating list
    Recent10,
    /// Show the plays that would enter the best list next
    Selection10,
    /// Search record folders
    Search {
        /// Level, e.g. 13 or 13+
        #[arg(long)]
        level: Option<Level>,
        #[arg(long, value_enum)]
        genre: Option<GenreArg>,
        /// Rank, e.g. S, SS+ or SSS+
        #[arg(long, value_parser = parse_rank)]
        rank: Option<Rank>,
        #[arg(long, short, value_enum)]
        difficulty: Option<DifficultyArg>,
    },
    /// Change the player name
    Rename {
        /// New name (1 to 8 characters)
        name: String,
    },
    /// End the portal session
    Logout,
    /// Send a friend request
    Friend {
        /// Friend code of the player
        code: String,
    },
    /// Calculate play rating and overpower offline
    Rating {
        #[arg(long)]
        score: u32,
        /// Chart constant, e.g. 14.7
        #[arg(long)]
        constant: Decimal,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum DifficultyArg {
    Basic,
    Advanced,
    Expert,
    Master,
    Ultima,
    #[value(name = "worldsend", alias = "we")]
    WorldsEnd,
}

impl From<DifficultyArg> for Difficulty {
    fn from(arg: DifficultyArg) -> Self {
        match arg {
            DifficultyArg::Basic => Difficulty::Basic,
            DifficultyArg::Advanced => Difficulty::Advanced,
            DifficultyArg::Expert => Difficulty::Expert,
            DifficultyArg::Master => Difficulty::Master,
            DifficultyArg::Ultima => Difficulty::Ultima,
            DifficultyArg::WorldsEnd => Difficulty::WorldsEnd,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum GenreArg {
    All,
    PopsAnime,
    Niconico,
    Touhou,
    Original,
    Variety,
    Irodorimidori,
    Gekimai,
}

impl From<GenreArg> for Genre {
    fn from(arg: GenreArg) -> Self {
        match arg {
            GenreArg::All => Genre::All,
            GenreArg::PopsAnime => Genre::PopsAndAnime,
            GenreArg::Niconico => Genre::Niconico,
            GenreArg::Touhou => Genre::TouhouProject,
            GenreArg::Original => Genre::Original,
            GenreArg::Variety => Genre::Variety,
            GenreArg::Irodorimidori => Genre::Irodorimidori,
            GenreArg::Gekimai => Genre::Gekimai,
        }
    }
}

/// Parse a rank by its display name, case-insensitively.
pub fn parse_rank(value: &str) -> Result<Rank, String> {
    (0..=13)
        .filter_map(|index| Rank::from_index(index).ok())
        .find(|rank| rank.short_name().eq_ignore_ascii_case(value.trim()))
        .ok_or_else(|| format!("unknown rank: {}", value))
}
