//! Command implementations

pub mod benchmark;
pub mod possibilities;
pub mod prepare;
pub mod score;
pub mod simple;

pub use benchmark::{BenchmarkResult, run_benchmark};
pub use possibilities::{PossibilitiesReport, find_for_rack};
pub use prepare::{PrepareResult, prepare_wordlist};
pub use score::{ScoreReport, parse_placement, score_specs};
pub use simple::run_simple;
