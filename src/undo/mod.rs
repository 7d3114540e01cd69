//! Bounded, quota-limited undo of the most recent move.

pub mod manager;

pub use manager::{Snapshot, UndoManager, UndoError, MAX_UNDO};
