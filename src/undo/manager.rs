//! The undo policy: one-deep snapshot, per-player quota, eligibility
//! flags.
//!
//! Only the single most recent move can be rescinded. A snapshot is
//! captured at the start of every accepted move and consumed by at most
//! one undo before the next move invalidates it. Each player may undo at
//! most [`MAX_UNDO`] times per turn of theirs; the counter resets once
//! their turn is superseded by the next accepted move.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::{Board, Player, PlayerMap};

/// Maximum undos allowed per player per turn.
pub const MAX_UNDO: u8 = 3;

/// Why an undo request was refused. Game state is untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum UndoError {
    /// No game is in progress.
    #[error("no game is in progress")]
    GameNotRunning,
    /// An undo was already taken; a move must intervene first.
    #[error("a move must be made before undoing again")]
    AlreadyUndone,
    /// No move has been made since the game started.
    #[error("no move to undo yet")]
    NoMoveYet,
    /// The previous mover exhausted their quota for this turn.
    #[error("{0} has no undos left this turn")]
    QuotaExhausted(Player),
}

/// The board and mover as they were before the most recent move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// The board before the move was resolved.
    pub board: Board,
    /// The player who made the move (the turn to restore).
    pub mover: Player,
}

/// Tracks the snapshot, per-player quotas, and undo eligibility.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct UndoManager {
    snapshot: Option<Snapshot>,
    undo_count: PlayerMap<u8>,
    just_undone: bool,
    game_just_started: bool,
    was_free_turn: bool,
}

impl Default for UndoManager {
    fn default() -> Self {
        Self::new()
    }
}

impl UndoManager {
    /// Create a manager in the fresh-game state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            snapshot: None,
            undo_count: PlayerMap::with_value(0),
            just_undone: false,
            game_just_started: true,
            was_free_turn: false,
        }
    }

    /// Reset all policy state for a new game.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Record an accepted move before it resolves.
    ///
    /// Captures the snapshot, resets the undo counter of the player whose
    /// turn is being superseded (the mover after a free turn, otherwise
    /// the mover's opponent), and clears the transient flags.
    pub fn begin_move(&mut self, board: Board, mover: Player) {
        let superseded = if self.was_free_turn {
            mover
        } else {
            mover.opponent()
        };
        self.undo_count[superseded] = 0;

        self.snapshot = Some(Snapshot { board, mover });
        self.just_undone = false;
        self.game_just_started = false;
    }

    /// Record whether the move just committed earned a free turn.
    pub fn set_free_turn(&mut self, free_turn: bool) {
        self.was_free_turn = free_turn;
    }

    /// How many undos a player has taken this turn.
    #[must_use]
    pub fn undos_taken(&self, player: Player) -> u8 {
        self.undo_count[player]
    }

    /// Rescind the most recent move if policy allows.
    ///
    /// On success: the snapshot to restore is returned, the previous
    /// mover's counter is incremented, `just_undone` is set so a second
    /// consecutive undo is refused, and the free-turn flag is cleared.
    pub fn undo(&mut self) -> Result<Snapshot, UndoError> {
        if self.just_undone {
            return Err(UndoError::AlreadyUndone);
        }
        if self.game_just_started {
            return Err(UndoError::NoMoveYet);
        }
        let snapshot = self.snapshot.ok_or(UndoError::NoMoveYet)?;

        if self.undo_count[snapshot.mover] >= MAX_UNDO {
            return Err(UndoError::QuotaExhausted(snapshot.mover));
        }

        self.undo_count[snapshot.mover] += 1;
        self.just_undone = true;
        self.was_free_turn = false;

        Ok(snapshot)
    }
}
