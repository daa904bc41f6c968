//! Benchmark command
//!
//! Times the possibility finder over a batch of random racks.

use crate::core::Rack;
use crate::possibilities::find_possible_words;
use crate::wordlists::Dictionary;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_racks: usize,
    pub dictionary_size: usize,
    pub total_words_found: usize,
    pub average_words_per_rack: f64,
    pub min_words: usize,
    pub max_words: usize,
    pub duration: Duration,
    pub racks_per_second: f64,
}

/// Run the possibility finder over `total_racks` freshly drawn racks
#[must_use]
pub fn run_benchmark(dictionary: &Dictionary, total_racks: usize) -> BenchmarkResult {
    let pb = ProgressBar::new(total_racks as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let mut rng = rand::rng();
    let mut total_words_found = 0;
    let mut min_words = usize::MAX;
    let mut max_words = 0;

    let start = Instant::now();
    for idx in 0..total_racks {
        let rack = Rack::draw(&mut rng);
        let found = find_possible_words(&rack, dictionary).len();

        total_words_found += found;
        min_words = min_words.min(found);
        max_words = max_words.max(found);

        if idx % 10 == 0 && idx > 0 {
            let avg = total_words_found as f64 / (idx + 1) as f64;
            pb.set_message(format!("Avg: {avg:.1} words/rack"));
        }
        pb.inc(1);
    }
    let duration = start.elapsed();
    pb.finish_with_message("Complete!");

    if total_racks == 0 {
        min_words = 0;
    }

    BenchmarkResult {
        total_racks,
        dictionary_size: dictionary.len(),
        total_words_found,
        average_words_per_rack: if total_racks > 0 {
            total_words_found as f64 / total_racks as f64
        } else {
            0.0
        },
        min_words,
        max_words,
        duration,
        racks_per_second: if duration.as_secs_f64() > 0.0 {
            total_racks as f64 / duration.as_secs_f64()
        } else {
            0.0
        },
    }
}
