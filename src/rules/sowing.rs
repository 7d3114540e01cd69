//! Turn resolution: lift, sow, and resolve the last-stone rules.
//!
//! `sow` is the core of the engine. Given a board, a selected pit, and
//! the mover, it distributes the lifted stones along the cyclic path
//! (skipping the opponent's store), applies the capture and free-turn
//! rules to the final stone, and reports every atomic movement as an
//! ordered [`SowEvent`](super::events::SowEvent) list.
//!
//! Preconditions are checked before any mutation: a violated
//! precondition is an expected, recoverable rejection (`MoveError`), not
//! a panic.

use thiserror::Error;
use tracing::trace;

use super::events::{EventLog, SowEvent};
use crate::core::{Board, Pit, Player};

/// Why a pit selection was rejected. The board is untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum MoveError {
    /// No game is in progress.
    #[error("no game is in progress")]
    GameNotRunning,
    /// The selected pit holds no stones.
    #[error("pit {0} is empty")]
    EmptyPit(Pit),
    /// The selected pit belongs to the other player.
    #[error("pit {0} is not owned by {1}")]
    NotYourPit(Pit, Player),
    /// Stores cannot be sown from.
    #[error("pit {0} is a store")]
    StorePit(Pit),
}

/// Where the last stone landed, as it affects whose turn is next.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Landing {
    /// Last stone fell in the mover's own store: the mover goes again.
    FreeTurn,
    /// Anywhere else (including a capture): the turn passes.
    Switch,
}

/// A fully resolved sow: the ordered event list and the landing tag.
#[derive(Clone, Debug)]
pub struct Sown {
    /// Atomic stone movements, in resolution order.
    pub events: EventLog,
    /// Whether the mover earned a free turn.
    pub landing: Landing,
}

/// Validate a selection without mutating anything.
///
/// `select_pit` rejections come from here; callers that pre-filter legal
/// pits (a UI graying out empty pits) can share the same check.
pub fn validate(board: &Board, pit: Pit, mover: Player) -> Result<(), MoveError> {
    if pit.is_store() {
        return Err(MoveError::StorePit(pit));
    }
    if pit.owner() != mover {
        return Err(MoveError::NotYourPit(pit, mover));
    }
    if board.stones_in(pit) == 0 {
        return Err(MoveError::EmptyPit(pit));
    }
    Ok(())
}

/// Resolve one sow in place.
///
/// On success the board holds the fully resolved position and the
/// returned events describe each movement in order. On rejection the
/// board is untouched.
pub fn sow(board: &mut Board, pit: Pit, mover: Player) -> Result<Sown, MoveError> {
    validate(board, pit, mover)?;

    let mut events = EventLog::new();

    let stones = board.lift(pit);
    events.push(SowEvent::Lift { pit, stones });

    let skip = mover.opponent().store();
    let mut cursor = pit;

    for placed in 1..=stones {
        cursor = cursor.next();
        if cursor == skip {
            // The opponent's store never receives a stone; the skip does
            // not consume one. Stores are never adjacent, so one step
            // suffices.
            cursor = cursor.next();
        }

        if placed < stones {
            board.add(cursor, 1);
            events.push(SowEvent::Place { pit: cursor });
        }
    }

    let landing = resolve_last_stone(board, cursor, mover, &mut events);
    trace!(%pit, %mover, stones, ?landing, "sow resolved");

    Ok(Sown { events, landing })
}

/// Apply the last-stone rules at `cursor` and emit the closing events.
fn resolve_last_stone(
    board: &mut Board,
    cursor: Pit,
    mover: Player,
    events: &mut EventLog,
) -> Landing {
    let lands_in_own_empty_pit =
        !cursor.is_store() && cursor.owner() == mover && board.stones_in(cursor) == 0;

    board.add(cursor, 1);
    events.push(SowEvent::Place { pit: cursor });

    if lands_in_own_empty_pit {
        // Capture: the opposite pit's stones and the landed stone all go
        // to the mover's store. Both source pits end empty.
        let opposite = cursor.opposite();
        let captured = board.lift(opposite);
        let landed = board.lift(cursor);
        debug_assert_eq!(landed, 1);

        let store = mover.store();
        board.add(store, captured + 1);
        events.push(SowEvent::Capture {
            landing: cursor,
            opposite,
            captured,
            store,
        });

        Landing::Switch
    } else if cursor == mover.store() {
        Landing::FreeTurn
    } else {
        Landing::Switch
    }
}
