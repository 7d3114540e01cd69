//! Atomic board events emitted during turn resolution.
//!
//! Every accepted move resolves to an ordered list of events describing
//! each stone movement. The engine returns the full list synchronously;
//! an animator may replay it at its own cadence (one event per frame,
//! with pauses, all at once). The engine never paces playback itself.
//!
//! The board deltas described by the events, applied in order, take the
//! pre-move board to the committed post-move board exactly.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::Pit;

/// Ordered event list for one resolved move.
///
/// A move of `n` stones yields `n + 1` events plus at most one capture
/// and six sweeps; typical moves fit inline without a heap allocation.
pub type EventLog = SmallVec<[SowEvent; 8]>;

/// One atomic stone movement during move resolution.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SowEvent {
    /// All stones picked up from the selected pit; the pit is now empty.
    Lift {
        /// The selected pit.
        pit: Pit,
        /// How many stones were lifted.
        stones: u32,
    },

    /// One stone dropped into a pit along the sowing path.
    Place {
        /// The pit that received the stone.
        pit: Pit,
    },

    /// Capture on the last stone: the landing pit and the pit opposite
    /// are emptied into the mover's store.
    ///
    /// The store receives `captured + 1` stones (the opposite pit's
    /// contents plus the just-landed stone). Follows the `Place` event
    /// for the landing stone.
    Capture {
        /// The mover's empty pit where the last stone landed.
        landing: Pit,
        /// The opponent's pit that was emptied.
        opposite: Pit,
        /// Stones taken from the opposite pit (excludes the landed stone).
        captured: u32,
        /// The mover's store.
        store: Pit,
    },

    /// Endgame sweep: one remaining pit emptied into its owner's store.
    Sweep {
        /// The normal pit that was emptied.
        pit: Pit,
        /// Its owner's store.
        store: Pit,
        /// How many stones moved.
        stones: u32,
    },
}
