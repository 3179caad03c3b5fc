use lyric_similarity::RiffScoreboard;

#[cfg(test)]
mod riff_scoreboard_tests {
    use super::*;

    #[test]
    fn test_new_scoreboard_is_empty() {
        let scoreboard = RiffScoreboard::new();

        assert_eq!(scoreboard.total_score(), 0.0);
        assert_eq!(scoreboard.rounds_played(), 0);
        assert_eq!(scoreboard.average_score(), None);
    }

    #[test]
    fn test_record_round_accumulates() {
        let mut scoreboard = RiffScoreboard::new();

        assert_eq!(scoreboard.record_round("cat cat cat", "cat dog"), 50.0);
        assert_eq!(scoreboard.record_round("Hello, World!", "hello world"), 100.0);
        assert_eq!(scoreboard.record_round("", "abc"), 0.0);

        assert_eq!(scoreboard.total_score(), 150.0);
        assert_eq!(scoreboard.rounds_played(), 3);
        assert_eq!(scoreboard.average_score(), Some(50.0));
    }

    #[test]
    fn test_record_score_clamps_out_of_range() {
        let mut scoreboard = RiffScoreboard::new();

        assert_eq!(scoreboard.record_score(140.0), 100.0);
        assert_eq!(scoreboard.record_score(-3.0), 0.0);
        assert_eq!(scoreboard.record_score(f64::NAN), 0.0);

        assert_eq!(scoreboard.total_score(), 100.0);
        assert_eq!(scoreboard.rounds_played(), 3);
    }

    #[test]
    fn test_reset() {
        let mut scoreboard = RiffScoreboard::new();
        scoreboard.record_round("I love cats", "I love dogs");

        scoreboard.reset();

        assert_eq!(scoreboard, RiffScoreboard::new());
    }
}
