use log::{error, info};
use lyric_similarity::{
    classify_similarity, compute_similarity, read_lyric_line_pairs_from_path, RiffScoreboard,
};
use std::env;

const USAGE: &str = "Usage: lyric-similarity [--] <line1> <line2>
       lyric-similarity --csv <file>

Use `--` to score lines that start with `--`.";

fn main() {
    // Initialize the logger
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();

    match args.as_slice() {
        [flag, path] if flag == "--csv" => run_batch(path),
        [flag, line1, line2, ..] if flag == "--" => print_similarity(line1, line2),
        [flag, ..] if flag == "--" => exit_with_usage(),
        [line1, line2, ..] => print_similarity(line1, line2),
        _ => exit_with_usage(),
    }
}

fn exit_with_usage() -> ! {
    eprintln!("{}", USAGE);
    std::process::exit(1);
}

fn print_similarity(line1: &str, line2: &str) {
    let similarity = compute_similarity(line1, line2);
    println!("Similarity: {:.2}%", similarity);
}

fn run_batch(path: &str) {
    let pairs = match read_lyric_line_pairs_from_path(path) {
        Ok(pairs) => pairs,
        Err(e) => {
            error!("Failed to read lyric line pairs from {}: {}", path, e);
            std::process::exit(1);
        }
    };

    info!("Scoring {} lyric line pairs from {}", pairs.len(), path);

    let mut scoreboard = RiffScoreboard::new();

    for (idx, pair) in pairs.iter().enumerate() {
        let similarity = scoreboard.record_round(&pair.line1, &pair.line2);
        println!(
            "{}: Similarity: {:.2}% ({})",
            idx + 1,
            similarity,
            classify_similarity(Some(similarity))
        );
    }

    println!(
        "Total: {:.2} over {} rounds",
        scoreboard.total_score(),
        scoreboard.rounds_played()
    );
}
