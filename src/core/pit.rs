//! Pit identifiers and the fixed board topology.
//!
//! The board has 14 slots laid out in the standard Kalah topology:
//!
//! ```text
//!        B6  B5  B4  B3  B2  B1
//!  B store                      A store
//!        A1  A2  A3  A4  A5  A6
//! ```
//!
//! Indices run 0..=5 for A's normal pits, 6 for A's store, 7..=12 for B's
//! normal pits, and 13 for B's store. Sowing follows ascending index,
//! wrapping after 13, so each player sows toward and through their own
//! store.

use serde::{Deserialize, Serialize};

use super::player::Player;

/// Total number of slots on the board (12 normal pits + 2 stores).
pub const TOTAL_PITS: usize = 14;

/// Normal (sowing) pits per side.
pub const PITS_PER_SIDE: usize = 6;

/// A validated board slot identifier in `0..14`.
///
/// Constructing a `Pit` from an out-of-range index is a caller bug, not a
/// game-state condition, and panics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Pit(u8);

impl Pit {
    /// Player A's first normal pit.
    pub const A1: Pit = Pit(0);
    /// Player A's last normal pit (adjacent to A's store).
    pub const A6: Pit = Pit(5);
    /// Player A's store.
    pub const A_STORE: Pit = Pit(6);
    /// Player B's first normal pit.
    pub const B1: Pit = Pit(7);
    /// Player B's last normal pit (adjacent to B's store).
    pub const B6: Pit = Pit(12);
    /// Player B's store.
    pub const B_STORE: Pit = Pit(13);

    /// Create a pit from a raw index.
    ///
    /// ## Panics
    ///
    /// Panics if `index >= 14`.
    #[must_use]
    pub fn new(index: usize) -> Self {
        assert!(index < TOTAL_PITS, "pit index {index} out of range 0..14");
        Pit(index as u8)
    }

    /// Get the raw slot index (0..14).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Check whether this pit is a store (mancala pit).
    #[must_use]
    pub const fn is_store(self) -> bool {
        matches!(self, Pit::A_STORE | Pit::B_STORE)
    }

    /// Get the player who owns this pit.
    #[must_use]
    pub const fn owner(self) -> Player {
        if self.0 <= Pit::A_STORE.0 {
            Player::A
        } else {
            Player::B
        }
    }

    /// Get the pit directly across the board.
    ///
    /// The mapping is a fixed involution: normal pit `i` pairs with
    /// `12 - i`, and the two stores pair with each other.
    #[must_use]
    pub const fn opposite(self) -> Pit {
        match self {
            Pit::A_STORE => Pit::B_STORE,
            Pit::B_STORE => Pit::A_STORE,
            Pit(i) => Pit(12 - i),
        }
    }

    /// Get the next pit in sowing order (ascending index, wrapping).
    #[must_use]
    pub const fn next(self) -> Pit {
        Pit((self.0 + 1) % TOTAL_PITS as u8)
    }

    /// Iterate over every slot in sowing order, starting at A1.
    pub fn all() -> impl Iterator<Item = Pit> {
        (0..TOTAL_PITS).map(Pit::new)
    }

    /// Iterate over a player's six normal pits, nearest-to-farthest from
    /// the start of their row.
    pub fn side(player: Player) -> impl Iterator<Item = Pit> {
        let base = match player {
            Player::A => 0,
            Player::B => PITS_PER_SIDE + 1,
        };
        (base..base + PITS_PER_SIDE).map(Pit::new)
    }
}

impl std::fmt::Display for Pit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            Pit::A_STORE => write!(f, "A-store"),
            Pit::B_STORE => write!(f, "B-store"),
            Pit(i) if i < 6 => write!(f, "A{}", i + 1),
            Pit(i) => write!(f, "B{}", i - 6),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ownership_split() {
        for pit in Pit::all() {
            let expected = if pit.index() <= 6 { Player::A } else { Player::B };
            assert_eq!(pit.owner(), expected, "{pit}");
        }
    }

    #[test]
    fn test_stores() {
        assert!(Pit::A_STORE.is_store());
        assert!(Pit::B_STORE.is_store());
        assert_eq!(Pit::all().filter(|p| p.is_store()).count(), 2);
    }

    #[test]
    fn test_opposite_is_involution() {
        for pit in Pit::all() {
            assert_eq!(pit.opposite().opposite(), pit);
        }
    }

    #[test]
    fn test_opposite_pairs() {
        // A1 faces B6 and so on down the rows; stores face each other.
        assert_eq!(Pit::A1.opposite(), Pit::B6);
        assert_eq!(Pit::A6.opposite(), Pit::B1);
        assert_eq!(Pit::new(2).opposite(), Pit::new(10));
        assert_eq!(Pit::A_STORE.opposite(), Pit::B_STORE);
    }

    #[test]
    fn test_opposite_crosses_sides() {
        for pit in Pit::all().filter(|p| !p.is_store()) {
            assert_eq!(pit.opposite().owner(), pit.owner().opponent());
        }
    }

    #[test]
    fn test_next_wraps() {
        assert_eq!(Pit::A1.next(), Pit::new(1));
        assert_eq!(Pit::A6.next(), Pit::A_STORE);
        assert_eq!(Pit::B_STORE.next(), Pit::A1);

        // Walking 14 steps from any pit returns to it.
        let mut pit = Pit::new(9);
        for _ in 0..TOTAL_PITS {
            pit = pit.next();
        }
        assert_eq!(pit, Pit::new(9));
    }

    #[test]
    fn test_side_pits() {
        let a: Vec<_> = Pit::side(Player::A).collect();
        let b: Vec<_> = Pit::side(Player::B).collect();

        assert_eq!(a.len(), PITS_PER_SIDE);
        assert_eq!(b.len(), PITS_PER_SIDE);
        assert!(a.iter().all(|p| p.owner() == Player::A && !p.is_store()));
        assert!(b.iter().all(|p| p.owner() == Player::B && !p.is_store()));
        assert_eq!(a[5], Pit::A6);
        assert_eq!(b[0], Pit::B1);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Pit::A1), "A1");
        assert_eq!(format!("{}", Pit::new(11)), "B5");
        assert_eq!(format!("{}", Pit::A_STORE), "A-store");
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_out_of_range_panics() {
        let _ = Pit::new(14);
    }

    #[test]
    fn test_pit_serialization() {
        let json = serde_json::to_string(&Pit::B1).unwrap();
        let deserialized: Pit = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, Pit::B1);
    }
}
