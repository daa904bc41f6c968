//! Core domain types for the tile game
//!
//! Letters, the bonus-square geometry, the board, and the rack. Everything
//! here is pure and synchronous; randomness enters only through the caller's
//! `Rng` in [`Rack::draw`].

pub mod bonus;
mod board;
mod letter;
mod rack;

pub use board::{BOARD_SIZE, Board, Placement};
pub use bonus::{BonusKind, classify};
pub use letter::{Letter, LetterError, value_of};
pub use rack::{RACK_SIZE, Rack};
