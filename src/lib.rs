//! Tilescore
//!
//! A single-player word-tile game: place letters from a drawn rack onto a
//! 15x15 board of bonus squares, score the result, and see every dictionary
//! word formable from the rack, ranked by score.
//!
//! # Quick Start
//!
//! ```rust
//! use tilescore::core::{Letter, Placement};
//! use tilescore::scoring::score_placements;
//!
//! // Q on the triple-letter square at (1,5), I beside it
//! let placements = [
//!     Placement { letter: Letter::new('Q').unwrap(), row: 1, col: 5 },
//!     Placement { letter: Letter::new('I').unwrap(), row: 1, col: 6 },
//! ];
//! assert_eq!(score_placements(&placements), 31);
//! ```

// Core domain types
pub mod core;

// Scoring engine
pub mod scoring;

// Rack/word possibility search
pub mod possibilities;

// Word lists
pub mod wordlists;

// Game session state and snapshots
pub mod session;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
