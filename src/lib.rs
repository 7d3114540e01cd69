//! # kalah-engine
//!
//! A turn-resolution engine for two-player Kalah (Mancala) on the fixed
//! 14-slot board: 6 normal pits and 1 store per side.
//!
//! ## Design Principles
//!
//! 1. **Engine-Authoritative**: legality (ownership, non-empty pit, game
//!    running) is checked here, not delegated to the UI.
//!
//! 2. **Synchronous Resolution**: a move resolves completely before
//!    `select_pit` returns, yielding an ordered event list. Animation
//!    pacing belongs to the presentation layer, never the engine.
//!
//! 3. **No Global State**: each [`GameController`] is one independent
//!    game; any number can coexist.
//!
//! ## Modules
//!
//! - `core`: players, pit topology, the board
//! - `rules`: sowing, capture and free-turn resolution, endgame sweep
//! - `undo`: one-deep snapshot with per-player quotas
//! - `game`: the controller state machine and observer notifications
//!
//! ## Example
//!
//! ```
//! use kalah_engine::{GameController, Pit, Player, TurnOutcome};
//!
//! let mut game = GameController::new();
//! game.start_game(3);
//!
//! // A6 holds 3 stones: one lands in A's store, two on B's side.
//! let outcome = game.select_pit(Pit::A6).unwrap();
//! assert_eq!(outcome, TurnOutcome::Switch);
//! assert_eq!(game.player_turn(), Some(Player::B));
//! ```

pub mod core;
pub mod game;
pub mod rules;
pub mod undo;

// Re-export commonly used types
pub use crate::core::{Board, Pit, Player, PlayerMap, PITS_PER_SIDE, TOTAL_PITS};

pub use crate::rules::{EventLog, GameResult, Landing, MoveError, SowEvent, Sown};

pub use crate::undo::{Snapshot, UndoError, UndoManager, MAX_UNDO};

pub use crate::game::{GameController, GameUpdate, Phase, TurnOutcome};
