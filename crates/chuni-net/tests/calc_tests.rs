//! Rating and overpower calculation tests across chart constants

use rust_decimal::Decimal;

use chuni_net::calc::{
    self, overpower_base, overpower_max, play_overpower, rating, score_for_rating,
};
use chuni_net::record::RecordExtras;
use chuni_net::score::{ComboType, MAX_SCORE, Rank};

fn dec(value: &str) -> Decimal {
    value.parse().unwrap()
}

const CONSTANTS: [&str; 4] = ["10.0", "12.5", "13.7", "15.4"];
const BREAKPOINTS: [u32; 7] = [
    1_009_000, 1_007_500, 1_005_000, 1_000_000, 975_000, 900_000, 800_000,
];

mod rating_tests {
    use super::*;

    #[test]
    fn test_rating_is_monotonic() {
        for constant in CONSTANTS {
            let constant = Some(dec(constant));
            let mut previous = Decimal::ZERO;
            for score in (0..=MAX_SCORE).step_by(1_000) {
                let current = rating(score, constant);
                assert!(current >= previous, "score {} dropped the rating", score);
                previous = current;
            }
        }
    }

    #[test]
    fn test_score_for_rating_inverts_breakpoints() {
        for constant in CONSTANTS {
            let constant = dec(constant);
            for score in BREAKPOINTS {
                let target = rating(score, Some(constant));
                assert_eq!(
                    score_for_rating(target, constant),
                    Some(score),
                    "constant {} score {}",
                    constant,
                    score
                );
            }
        }
    }

    #[test]
    fn test_ceiling_is_constant_plus_2_15() {
        for constant in CONSTANTS {
            let constant = dec(constant);
            assert_eq!(rating(MAX_SCORE, Some(constant)), constant + dec("2.15"));
            assert_eq!(score_for_rating(constant + dec("2.16"), constant), None);
        }
    }

    #[test]
    fn test_display_truncation() {
        let value = rating(950_000, Some(dec("12.5")));
        assert_eq!(calc::truncate_display(value, 2), dec("10.83"));
    }
}

mod overpower_tests {
    use super::*;

    #[test]
    fn test_overpower_never_exceeds_max() {
        for constant in CONSTANTS {
            let constant = dec(constant);
            for score in (0..MAX_SCORE).step_by(2_500) {
                let value = play_overpower(score, ComboType::AllJusticeCritical, constant);
                assert!(value <= overpower_max(constant));
            }
        }
    }

    #[test]
    fn test_overpower_is_two_decimals() {
        for score in [950_001, 987_654, 1_003_210, 1_008_765] {
            let value = overpower_base(score, dec("13.7"));
            assert_eq!(value, value.round_dp(2));
        }
    }
}

mod extras_tests {
    use super::*;

    #[test]
    fn test_annotate_matches_calculators() {
        let constant = dec("13.7");
        let mut extras = RecordExtras::with_song_id(13);
        extras.annotate(1_007_821, ComboType::FullCombo, None, constant);

        assert_eq!(extras.play_rating, Some(rating(1_007_821, Some(constant))));
        assert_eq!(
            extras.overpower_base,
            Some(overpower_base(1_007_821, constant) + dec("0.5"))
        );
        assert_eq!(extras.overpower_max, Some(dec("83.5")));
        assert_eq!(Rank::from_score(1_007_821), Rank::SSS);
    }
}
