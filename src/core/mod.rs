//! Core board types: players, pit topology, stone counts.
//!
//! These are the pure-data building blocks. Nothing in this module knows
//! the rules of the game; the `rules` and `game` modules drive all
//! mutation.

pub mod board;
pub mod pit;
pub mod player;

pub use board::Board;
pub use pit::{Pit, PITS_PER_SIDE, TOTAL_PITS};
pub use player::{Player, PlayerMap};
