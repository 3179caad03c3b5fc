use crate::constants::{CSV_LINE_1_HEADER, CSV_LINE_2_HEADER};
use crate::models::{Error, LyricLinePair};
use csv::ReaderBuilder;
use log::debug;
use std::fs::File;
use std::io::{Cursor, Read};
use std::path::Path;

pub fn read_lyric_line_pairs_from_string(csv: &str) -> Result<Vec<LyricLinePair>, Error> {
    // Use a cursor to simulate a file reader from the string
    read_lyric_line_pairs(Cursor::new(csv))
}

pub fn read_lyric_line_pairs_from_path<P: AsRef<Path>>(
    path: P,
) -> Result<Vec<LyricLinePair>, Error> {
    let file = File::open(path.as_ref())?;

    read_lyric_line_pairs(file)
}

fn read_lyric_line_pairs<R: Read>(source: R) -> Result<Vec<LyricLinePair>, Error> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(source);

    let headers = reader
        .headers()
        .map_err(|e| Error::ParserError(format!("Failed to read headers: {}", e)))?
        .clone();

    let line1_idx = find_column(&headers, CSV_LINE_1_HEADER)?;
    let line2_idx = find_column(&headers, CSV_LINE_2_HEADER)?;

    let mut pairs = Vec::new();

    for record in reader.records() {
        let record =
            record.map_err(|e| Error::ParserError(format!("Failed to read record: {}", e)))?;

        // Short rows are treated as empty lines rather than rejected
        let line1 = record.get(line1_idx).unwrap_or_default();
        let line2 = record.get(line2_idx).unwrap_or_default();

        pairs.push(LyricLinePair::new(line1, line2));
    }

    debug!("Read {} lyric line pairs", pairs.len());

    Ok(pairs)
}

fn find_column(headers: &csv::StringRecord, name: &str) -> Result<usize, Error> {
    headers
        .iter()
        .position(|h| h.trim() == name)
        .ok_or_else(|| Error::ParserError(format!("Missing '{}' column", name)))
}
