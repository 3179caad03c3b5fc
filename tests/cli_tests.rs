#![cfg(feature = "logger-support")]

#[path = "../test_utils/lib.rs"]
mod test_utils;
use test_utils::constants::TEST_LINE_PAIRS_CSV_PATH;

use std::process::{Command, Output};

fn run_cli(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_lyric-similarity"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run lyric-similarity")
}

#[cfg(test)]
mod cli_tests {
    use super::*;

    #[test]
    fn test_prints_similarity_for_two_lines() {
        let output = run_cli(&["I love cats", "I love dogs"]);

        assert!(output.status.success());
        assert_eq!(String::from_utf8_lossy(&output.stdout), "Similarity: 66.67%\n");
    }

    #[test]
    fn test_empty_lines_are_identical() {
        let output = run_cli(&["", ""]);

        assert!(output.status.success());
        assert_eq!(String::from_utf8_lossy(&output.stdout), "Similarity: 100.00%\n");
    }

    #[test]
    fn test_missing_line_prints_usage() {
        let cases: [&[&str]; 3] = [&[], &["only"], &["--", "only"]];

        for args in cases {
            let output = run_cli(args);

            assert_eq!(output.status.code(), Some(1), "args: {:?}", args);
            assert!(output.stdout.is_empty());
            assert!(String::from_utf8_lossy(&output.stderr).contains("Usage: lyric-similarity"));
        }
    }

    #[test]
    fn test_double_dash_scores_literal_flag() {
        let output = run_cli(&["--", "--csv", "foo"]);

        assert!(output.status.success());
        assert_eq!(String::from_utf8_lossy(&output.stdout), "Similarity: 0.00%\n");
    }

    #[test]
    fn test_batch_scores_each_pair() {
        let output = run_cli(&["--csv", TEST_LINE_PAIRS_CSV_PATH]);

        assert!(output.status.success());

        let expected = "\
1: Similarity: 66.67% (yellow)
2: Similarity: 50.00% (orange)
3: Similarity: 50.00% (orange)
4: Similarity: 100.00% (green)
5: Similarity: 100.00% (green)
6: Similarity: 100.00% (green)
7: Similarity: 0.00% (red)
8: Similarity: 100.00% (green)
9: Similarity: 40.00% (orange)
10: Similarity: 66.67% (yellow)
11: Similarity: 66.67% (yellow)
12: Similarity: 100.00% (green)
13: Similarity: 100.00% (green)
Total: 940.00 over 13 rounds
";
        assert_eq!(String::from_utf8_lossy(&output.stdout), expected);
    }

    #[test]
    fn test_batch_missing_file_fails() {
        let output = run_cli(&["--csv", "tests/test_data_files/does_not_exist.csv"]);

        assert_eq!(output.status.code(), Some(1));
        assert!(output.stdout.is_empty());
    }
}
