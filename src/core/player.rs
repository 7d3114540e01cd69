//! Player identification and per-player data storage.
//!
//! ## Player
//!
//! Kalah is strictly two-player: `Player::A` owns the bottom row of pits,
//! `Player::B` the top row.
//!
//! ## PlayerMap
//!
//! Per-player data storage backed by a fixed two-slot array for O(1)
//! access. Supports iteration and indexing by `Player`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::pit::Pit;

/// One of the two players.
///
/// `Player::A` sows pits 0..=5 into store 6; `Player::B` sows pits 7..=12
/// into store 13.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    A,
    B,
}

impl Player {
    /// Get the opposing player.
    #[must_use]
    pub const fn opponent(self) -> Player {
        match self {
            Player::A => Player::B,
            Player::B => Player::A,
        }
    }

    /// Get this player's store (mancala pit).
    #[must_use]
    pub const fn store(self) -> Pit {
        match self {
            Player::A => Pit::A_STORE,
            Player::B => Pit::B_STORE,
        }
    }

    /// Get the raw player index (0 for A, 1 for B).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Player::A => 0,
            Player::B => 1,
        }
    }

    /// Iterate over both players, A first.
    pub fn both() -> impl Iterator<Item = Player> {
        [Player::A, Player::B].into_iter()
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::A => write!(f, "Player A"),
            Player::B => write!(f, "Player B"),
        }
    }
}

/// Per-player data storage with O(1) access.
///
/// Backed by a `[T; 2]` with one entry per player.
///
/// ## Example
///
/// ```
/// use kalah_engine::core::{Player, PlayerMap};
///
/// let mut undos: PlayerMap<u8> = PlayerMap::with_value(0);
///
/// undos[Player::B] += 1;
/// assert_eq!(undos[Player::A], 0);
/// assert_eq!(undos[Player::B], 1);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: [T; 2],
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    ///
    /// The factory receives the `Player` for each slot.
    pub fn new(factory: impl Fn(Player) -> T) -> Self {
        Self {
            data: [factory(Player::A), factory(Player::B)],
        }
    }

    /// Create a new PlayerMap with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: Player) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: Player) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (Player, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Player, &T)> {
        Player::both().zip(self.data.iter())
    }
}

impl<T> Index<Player> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: Player) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<Player> for PlayerMap<T> {
    fn index_mut(&mut self, player: Player) -> &mut Self::Output {
        self.get_mut(player)
    }
}
