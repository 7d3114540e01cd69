//! Game orchestration: the controller state machine and observer
//! notifications.

pub mod controller;

pub use controller::{GameController, GameUpdate, Phase, TurnOutcome};
