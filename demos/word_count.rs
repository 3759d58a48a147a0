//! Word Count Walkthrough
//!
//! This demo runs each pipeline stage by hand on a small corpus, then
//! repeats the count through the file-based entry point.
//!
//! Key concepts:
//! - Map -> Group -> Reduce -> Filter, one stage at a time
//! - The composed `count_words` gives the same totals
//! - Unreadable files are skipped with a warning when asked to
//!
//! Run with: RUST_LOG=wordtally=debug cargo run --example word_count

use std::error::Error;
use std::fs;
use tracing_subscriber::EnvFilter;
use wordtally::core::{filter_totals, group_pairs, map_corpus, reduce_groups, Threshold};
use wordtally::{count_words, WordCounter};

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Word Count Walkthrough ===\n");

    let text_1 = "Lorem ipsum dolor sit amet, consetetur et sadipscing elitr.";
    let text_2 = "At vero lorem et accusam et justo duo ipsum et ea rebum.";
    let corpus = vec![
        text_1.to_string(),
        text_1.to_string(),
        text_2.to_string(),
        format!("{text_2} {text_2}"),
    ];

    println!("=== Map ===");
    let pairs = map_corpus(&corpus);
    for pair in pairs.iter().take(5) {
        println!("  ({:?}, {})", pair.word, pair.count);
    }
    println!("  ... {} pairs in total\n", pairs.len());

    println!("=== Group ===");
    let grouped = group_pairs(pairs);
    for (word, counts) in grouped.iter().take(3) {
        println!("  {:?}: {:?}", word, counts);
    }
    println!("  ... {} distinct words\n", grouped.len());

    println!("=== Reduce ===");
    let totals = reduce_groups(&grouped);
    for (word, total) in totals.iter().take(3) {
        println!("  {:?}: {}", word, total);
    }

    println!("\n=== Filter (at least 4) ===");
    let frequent = filter_totals(&totals, Threshold::new(4));
    for (word, total) in frequent.sorted_by_count() {
        println!("  {:?}: {}", word, total);
    }

    assert_eq!(totals, count_words(&corpus, None));

    println!("\n=== From Files ===");
    let dir = tempfile::tempdir()?;
    let mut paths = Vec::new();
    for (i, text) in corpus.iter().enumerate() {
        let path = dir.path().join(format!("file_{}.txt", i + 1));
        fs::write(&path, text)?;
        paths.push(path);
    }
    let corrupt = dir.path().join("corrupt.rtf");
    fs::write(&corrupt, [0x7b, 0x5c, 0x72, 0x74, 0x66, 0xff, 0xfe])?;
    paths.push(corrupt);

    let counter = WordCounter::builder().skip_corrupted(true).build();
    let outcome = counter.count_files(&paths)?;
    for notice in &outcome.skipped {
        println!("  skipped: {}", notice.message());
    }
    assert_eq!(outcome.totals, totals);

    let report = outcome.to_report();
    println!("\n=== Report ===");
    println!("{}", report.to_json()?);

    println!("\n=== Walkthrough Complete ===");
    Ok(())
}
