#![allow(unused)] // Ignore due to all constants not being utilized across all environments

pub const TEST_LINE_PAIRS_CSV_PATH: &str = "tests/test_data_files/line_pairs.csv";

pub const EXPECTED_SIMILARITY_HEADER: &str = "Expected";

pub const SIMILARITY_TOLERANCE: f64 = 1e-9;
