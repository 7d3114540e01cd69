//! Endgame detection: the side-empty sweep and winner computation.
//!
//! Checked after every completed sow. When one player's six normal pits
//! are all empty, the opponent's remaining normal-pit stones are swept
//! into the opponent's store and the game ends. The winner holds the
//! strictly greater store; equal stores are an explicit draw, never a
//! "no result" sentinel.

use serde::{Deserialize, Serialize};

use super::events::{EventLog, SowEvent};
use crate::core::{Board, Pit, Player};

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Single winner by strict store majority.
    Winner(Player),
    /// Equal store totals.
    Draw,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: Player) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }
}

/// Check for an empty side and perform the final sweep if the game ended.
///
/// Returns `None` (board untouched) while both sides still hold stones.
/// Otherwise sweeps every remaining normal pit into its owner's store,
/// emitting one `Sweep` event per non-empty pit, and returns the result.
///
/// The sweep conserves the board total: stones move between pits, none
/// are created or destroyed.
pub fn check_and_sweep(board: &mut Board) -> Option<(GameResult, EventLog)> {
    let emptied = Player::both().find(|&p| board.side_is_empty(p))?;

    let mut events = EventLog::new();
    sweep_side(board, emptied.opponent(), &mut events);

    let a = board.store_of(Player::A);
    let b = board.store_of(Player::B);
    let result = match a.cmp(&b) {
        std::cmp::Ordering::Greater => GameResult::Winner(Player::A),
        std::cmp::Ordering::Less => GameResult::Winner(Player::B),
        std::cmp::Ordering::Equal => GameResult::Draw,
    };

    Some((result, events))
}

/// Move every stone left on `player`'s side into `player`'s store.
fn sweep_side(board: &mut Board, player: Player, events: &mut EventLog) {
    let store = player.store();
    for pit in Pit::side(player) {
        let stones = board.lift(pit);
        if stones > 0 {
            board.add(store, stones);
            events.push(SowEvent::Sweep { pit, store, stones });
        }
    }
}
