//! Terminal output formatting

pub mod display;
pub mod formatters;

pub use display::{print_benchmark_result, print_possibilities, print_prepare_result, print_score_report};
pub use formatters::{bonus_code, format_board, format_rack};
