//! The board: 14 stone counts behind a focused accessor surface.
//!
//! Mutation is restricted to the crate (`lift`/`add`/`set`): only the
//! rules modules rewrite counts, and they do so through operations that
//! cannot produce a negative count. Presentation code reads, never
//! writes.

use serde::{Deserialize, Serialize};

use super::pit::{Pit, TOTAL_PITS};
use super::player::Player;

/// The 14-slot stone layout.
///
/// Cheap to copy (a single small array), so the rules pipeline works on a
/// scratch copy and the controller commits it whole.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    stones: [u32; TOTAL_PITS],
}

impl Board {
    /// An empty board (all slots zero).
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            stones: [0; TOTAL_PITS],
        }
    }

    /// A fresh board: every normal pit holds `initial_stones`, both
    /// stores are empty.
    ///
    /// ## Panics
    ///
    /// Panics if `initial_stones` is zero; a game with empty pits cannot
    /// start and indicates a caller bug.
    #[must_use]
    pub fn new(initial_stones: u32) -> Self {
        assert!(initial_stones > 0, "initial stone count must be positive");

        let mut board = Self::empty();
        for pit in Pit::all().filter(|p| !p.is_store()) {
            board.stones[pit.index()] = initial_stones;
        }
        board
    }

    /// Get the stone count in a pit.
    #[must_use]
    pub fn stones_in(&self, pit: Pit) -> u32 {
        self.stones[pit.index()]
    }

    /// Sum of a player's six normal pits.
    #[must_use]
    pub fn side_sum(&self, player: Player) -> u32 {
        Pit::side(player).map(|p| self.stones_in(p)).sum()
    }

    /// Check whether a player's six normal pits are all empty.
    #[must_use]
    pub fn side_is_empty(&self, player: Player) -> bool {
        self.side_sum(player) == 0
    }

    /// Stone count in a player's store.
    #[must_use]
    pub fn store_of(&self, player: Player) -> u32 {
        self.stones_in(player.store())
    }

    /// Total stones on the board. Constant for the lifetime of a game.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.stones.iter().sum()
    }

    /// Take every stone out of a pit, returning how many were lifted.
    pub(crate) fn lift(&mut self, pit: Pit) -> u32 {
        std::mem::take(&mut self.stones[pit.index()])
    }

    /// Add stones to a pit.
    pub(crate) fn add(&mut self, pit: Pit, count: u32) {
        self.stones[pit.index()] += count;
    }
}
