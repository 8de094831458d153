//! CLI argument parsing tests.
//!
//! These tests verify that command-line arguments are parsed correctly
//! without contacting the portal.

#[path = "../src/cli.rs"]
#[allow(dead_code)]
mod cli;

use chuni_net::chart::{Difficulty, Genre, Level};
use chuni_net::score::Rank;
use clap::Parser;
use cli::{Args, Command, DifficultyArg, GenreArg};
use rust_decimal::Decimal;

fn parse(args: &[&str]) -> Args {
    Args::try_parse_from(args).unwrap()
}

mod global_tests {
    use super::*;

    #[test]
    fn test_subcommand_is_required() {
        assert!(Args::try_parse_from(["chuni"]).is_err());
    }

    #[test]
    fn test_parse_credentials() {
        let args = parse(&[
            "chuni",
            "--clal",
            "abc",
            "--user-id",
            "42",
            "--token",
            "tok",
            "--base-url",
            "http://localhost:8080",
            "profile",
        ]);
        assert_eq!(args.clal.as_deref(), Some("abc"));
        assert_eq!(args.user_id.as_deref(), Some("42"));
        assert_eq!(args.token.as_deref(), Some("tok"));
        assert_eq!(args.base_url.as_deref(), Some("http://localhost:8080"));
        assert!(matches!(args.command, Command::Profile));
        assert!(!args.json);
    }

    #[test]
    fn test_json_flag_after_subcommand() {
        let args = parse(&["chuni", "best30", "--json"]);
        assert!(args.json);
        assert!(matches!(args.command, Command::Best30));
    }
}

mod record_command_tests {
    use super::*;

    #[test]
    fn test_parse_detail() {
        let args = parse(&["chuni", "detail", "--idx", "40", "--token", "b9bc"]);
        match args.command {
            Command::Detail { idx, token } => {
                assert_eq!(idx, 40);
                assert_eq!(token, "b9bc");
            }
            _ => panic!("Expected Detail command"),
        }
    }

    #[test]
    fn test_detail_requires_token() {
        assert!(Args::try_parse_from(["chuni", "detail", "--idx", "40"]).is_err());
    }

    #[test]
    fn test_parse_song() {
        let args = parse(&["chuni", "song", "8025"]);
        assert!(matches!(args.command, Command::Song { id: 8025 }));
    }

    #[test]
    fn test_parse_search() {
        let args = parse(&[
            "chuni",
            "search",
            "--level",
            "13+",
            "--genre",
            "pops-anime",
            "--rank",
            "sss+",
            "-d",
            "master",
        ]);
        match args.command {
            Command::Search {
                level,
                genre,
                rank,
                difficulty,
            } => {
                assert_eq!(level, Some(Level::new(13, true)));
                assert_eq!(genre, Some(GenreArg::PopsAnime));
                assert_eq!(rank, Some(Rank::SSSPlus));
                assert_eq!(difficulty, Some(DifficultyArg::Master));
                assert_eq!(Genre::from(GenreArg::PopsAnime), Genre::PopsAndAnime);
                assert_eq!(Difficulty::from(DifficultyArg::Master), Difficulty::Master);
            }
            _ => panic!("Expected Search command"),
        }
    }

    #[test]
    fn test_search_worlds_end_alias() {
        let args = parse(&["chuni", "search", "-d", "we"]);
        match args.command {
            Command::Search { difficulty, .. } => {
                assert_eq!(difficulty, Some(DifficultyArg::WorldsEnd));
            }
            _ => panic!("Expected Search command"),
        }
    }

    #[test]
    fn test_search_rejects_bad_values() {
        assert!(Args::try_parse_from(["chuni", "search", "--level", "0"]).is_err());
        assert!(Args::try_parse_from(["chuni", "search", "--rank", "Z"]).is_err());
        assert!(Args::try_parse_from(["chuni", "search", "-d", "extreme"]).is_err());
    }
}

mod offline_command_tests {
    use super::*;

    #[test]
    fn test_parse_rating() {
        let args = parse(&["chuni", "rating", "--score", "1009000", "--constant", "14.7"]);
        match args.command {
            Command::Rating { score, constant } => {
                assert_eq!(score, 1_009_000);
                assert_eq!(constant, Decimal::new(147, 1));
            }
            _ => panic!("Expected Rating command"),
        }
    }

    #[test]
    fn test_parse_rank_names() {
        assert_eq!(cli::parse_rank("S+"), Ok(Rank::SPlus));
        assert_eq!(cli::parse_rank("aaa"), Ok(Rank::AAA));
        assert!(cli::parse_rank("SSSS").is_err());
    }
}

mod account_command_tests {
    use super::*;

    #[test]
    fn test_parse_rename_and_friend() {
        let args = parse(&["chuni", "rename", "ＮＡＭＥ"]);
        assert!(matches!(args.command, Command::Rename { ref name } if name == "ＮＡＭＥ"));

        let args = parse(&["chuni", "friend", "1234567890123"]);
        assert!(matches!(args.command, Command::Friend { ref code } if code == "1234567890123"));

        let args = parse(&["chuni", "logout"]);
        assert!(matches!(args.command, Command::Logout));
    }
}
