//! Game session state
//!
//! The session owns the cumulative score, the board, the rack, and the
//! derived display state, and orchestrates scoring and possibility search.
//! Save/load snapshots live in [`snapshot`].

pub mod snapshot;
mod state;

pub use snapshot::{Snapshot, SnapshotError};
pub use state::{GameSession, Phase};
