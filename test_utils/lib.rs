#![allow(dead_code)]

use csv::Reader;
use lyric_similarity::{LyricLinePair, SimilarityScore};
use std::error::Error;
pub mod constants;
use constants::{EXPECTED_SIMILARITY_HEADER, SIMILARITY_TOLERANCE};

/// Utility to load line pairs and their expected scores from a CSV file.
pub fn load_expected_similarities_from_file(
    file_path: &str,
) -> Result<Vec<(LyricLinePair, SimilarityScore)>, Box<dyn Error>> {
    let mut reader = Reader::from_path(file_path)?;

    let headers = reader.headers()?.clone();
    let column = |name: &str| {
        headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| format!("Missing '{}' column", name))
    };
    let line1_idx = column("Line 1")?;
    let line2_idx = column("Line 2")?;
    let expected_idx = column(EXPECTED_SIMILARITY_HEADER)?;

    let mut cases = Vec::new();

    for record in reader.records() {
        let record = record?;
        let pair = LyricLinePair::new(
            record.get(line1_idx).unwrap_or_default(),
            record.get(line2_idx).unwrap_or_default(),
        );
        let expected: SimilarityScore = record
            .get(expected_idx)
            .ok_or("Missing expected score")?
            .trim()
            .parse()?;

        cases.push((pair, expected));
    }

    Ok(cases)
}

/// Asserts that two scores are equal within floating point tolerance.
pub fn assert_similarity_eq(actual: SimilarityScore, expected: SimilarityScore, context: &str) {
    assert!(
        (actual - expected).abs() < SIMILARITY_TOLERANCE,
        "{}: expected {}, got {}",
        context,
        expected,
        actual
    );
}
