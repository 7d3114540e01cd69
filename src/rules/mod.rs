//! Game rules: sowing, last-stone resolution, and endgame evaluation.
//!
//! These modules mutate a working `Board` handed to them by the
//! controller and report what happened as ordered event lists. They hold
//! no state of their own.

pub mod endgame;
pub mod events;
pub mod sowing;

pub use endgame::{check_and_sweep, GameResult};
pub use events::{EventLog, SowEvent};
pub use sowing::{sow, validate, Landing, MoveError, Sown};
