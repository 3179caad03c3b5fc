use lyric_similarity::{classify_similarity, compute_similarity};

fn main() {
    env_logger::init();

    let line1 = "Is this the real life?";
    let line2 = "Is this just fantasy?";

    let similarity = compute_similarity(line1, line2);

    println!("Comparing \"{}\" with \"{}\"", line1, line2);
    println!(
        "Similarity: {:.2}% ({})",
        similarity,
        classify_similarity(Some(similarity))
    );
}
