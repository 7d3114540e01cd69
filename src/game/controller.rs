//! The game controller: owns all mutable state and wires the rules
//! together.
//!
//! One `GameController` is one independent game. There is no global
//! instance; embedders may run any number of games side by side.
//!
//! ## Flow
//!
//! `select_pit` resolves synchronously: validate, snapshot for undo, sow
//! on a working copy of the board, run the endgame check, commit, advance
//! the turn, then notify observers once with the full ordered event list.
//! Rejected inputs mutate nothing and notify nobody. `&mut self` makes an
//! overlapping move unrepresentable; there is no in-flight window for a
//! duplicate selection to race into.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{Board, Pit, Player};
use crate::rules::{self, EventLog, GameResult, Landing, MoveError};
use crate::undo::{UndoError, UndoManager};

/// Lifecycle of a controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Constructed, `start_game` not called yet.
    NotStarted,
    /// A game is running and one player holds the turn.
    InProgress,
    /// The endgame sweep has run; the result is final.
    GameOver,
}

/// How an accepted move left the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnOutcome {
    /// Last stone landed in the mover's store; the mover goes again.
    FreeTurn,
    /// The turn passed to the opponent.
    Switch,
    /// The move emptied a side; the sweep ran and the game is over.
    GameOver(GameResult),
}

/// A committed state transition, broadcast to observers.
///
/// Exactly one update is sent per committed mutation. The event list in
/// `MoveResolved` is the complete resolution of the move (sow plus any
/// endgame sweep), for presentation layers that replay stone movements
/// at their own cadence.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameUpdate {
    /// A new game was set up.
    GameStarted {
        /// Stones placed in each normal pit.
        initial_stones: u32,
    },
    /// A move was accepted and fully resolved.
    MoveResolved {
        /// Who moved.
        player: Player,
        /// Every atomic stone movement, in order.
        events: EventLog,
        /// Whose turn it is now, or the final result.
        outcome: TurnOutcome,
    },
    /// The most recent move was rescinded.
    MoveUndone {
        /// The player whose turn it is again.
        restored_turn: Player,
    },
}

type Observer = Box<dyn FnMut(&GameUpdate)>;

/// A single game of Kalah: board, turn, lifecycle, undo policy, and
/// observer list.
pub struct GameController {
    board: Board,
    turn: Player,
    phase: Phase,
    result: Option<GameResult>,
    initial_stones: Option<u32>,
    undo: UndoManager,
    observers: Vec<Observer>,
}

impl Default for GameController {
    fn default() -> Self {
        Self::new()
    }
}

impl GameController {
    /// Create a controller with no game started.
    #[must_use]
    pub fn new() -> Self {
        Self {
            board: Board::empty(),
            turn: Player::A,
            phase: Phase::NotStarted,
            result: None,
            initial_stones: None,
            undo: UndoManager::new(),
            observers: Vec::new(),
        }
    }

    /// Subscribe to committed state transitions.
    ///
    /// Observers run synchronously, in subscription order, once per
    /// committed mutation.
    pub fn subscribe(&mut self, observer: impl FnMut(&GameUpdate) + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Start a fresh game: every normal pit gets `initial_stones`, both
    /// stores are emptied, Player A moves first.
    ///
    /// ## Panics
    ///
    /// Panics if `initial_stones` is zero (a caller bug, not a game
    /// condition).
    pub fn start_game(&mut self, initial_stones: u32) {
        self.board = Board::new(initial_stones);
        self.turn = Player::A;
        self.phase = Phase::InProgress;
        self.result = None;
        self.initial_stones = Some(initial_stones);
        self.undo.reset();

        debug!(initial_stones, "game started");
        self.notify(&GameUpdate::GameStarted { initial_stones });
    }

    /// Start over with the previously configured stone count.
    ///
    /// ## Panics
    ///
    /// Panics if `start_game` was never called on this controller.
    pub fn restart(&mut self) {
        let stones = self
            .initial_stones
            .expect("restart before any start_game");
        self.start_game(stones);
    }

    /// Resolve one turn for the current player.
    ///
    /// Rejections (`MoveError`) leave every piece of state untouched and
    /// fire no notification; the caller may retry with valid input.
    pub fn select_pit(&mut self, pit: Pit) -> Result<TurnOutcome, MoveError> {
        if self.phase != Phase::InProgress {
            return Err(MoveError::GameNotRunning);
        }
        let mover = self.turn;

        let mut working = self.board;
        let sown = match rules::sow(&mut working, pit, mover) {
            Ok(sown) => sown,
            Err(err) => {
                debug!(%pit, %mover, %err, "move rejected");
                return Err(err);
            }
        };

        // The move is accepted: snapshot the pre-move position and reset
        // the superseded player's undo quota before committing.
        self.undo.begin_move(self.board, mover);

        let mut events = sown.events;
        let mut outcome = match sown.landing {
            Landing::FreeTurn => TurnOutcome::FreeTurn,
            Landing::Switch => TurnOutcome::Switch,
        };

        if let Some((result, sweep)) = rules::check_and_sweep(&mut working) {
            events.extend(sweep);
            outcome = TurnOutcome::GameOver(result);
        }

        self.board = working;
        match outcome {
            TurnOutcome::FreeTurn => {
                self.undo.set_free_turn(true);
            }
            TurnOutcome::Switch => {
                self.undo.set_free_turn(false);
                self.turn = mover.opponent();
            }
            TurnOutcome::GameOver(result) => {
                self.phase = Phase::GameOver;
                self.result = Some(result);
            }
        }

        debug!(%pit, %mover, ?outcome, "move committed");
        let update = GameUpdate::MoveResolved {
            player: mover,
            events,
            outcome,
        };
        self.notify(&update);

        Ok(outcome)
    }

    /// Rescind the most recent move, restoring board and turn.
    ///
    /// Subject to the undo policy: a game must be running, undos cannot
    /// repeat without an intervening move, nothing can be undone before
    /// the first move, and each player gets [`crate::undo::MAX_UNDO`]
    /// undos per turn of theirs. Rejections leave state untouched.
    pub fn undo_turn(&mut self) -> Result<(), UndoError> {
        if self.phase != Phase::InProgress {
            return Err(UndoError::GameNotRunning);
        }

        let snapshot = self.undo.undo()?;
        self.board = snapshot.board;
        self.turn = snapshot.mover;

        debug!(restored_turn = %snapshot.mover, "move undone");
        self.notify(&GameUpdate::MoveUndone {
            restored_turn: snapshot.mover,
        });
        Ok(())
    }

    // === Queries ===

    /// Stones currently in a pit.
    #[must_use]
    pub fn stones_in(&self, pit: Pit) -> u32 {
        self.board.stones_in(pit)
    }

    /// The player who owns a pit.
    #[must_use]
    pub fn owner_of(&self, pit: Pit) -> Player {
        pit.owner()
    }

    /// Whether a pit is a store (mancala pit).
    #[must_use]
    pub fn is_mancala_pit(&self, pit: Pit) -> bool {
        pit.is_store()
    }

    /// Whose turn it is, or `None` outside a running game.
    #[must_use]
    pub fn player_turn(&self) -> Option<Player> {
        match self.phase {
            Phase::InProgress => Some(self.turn),
            Phase::NotStarted | Phase::GameOver => None,
        }
    }

    /// The final result, or `None` while the game has not ended.
    ///
    /// A draw is reported explicitly; it is never conflated with "still
    /// in progress".
    #[must_use]
    pub fn has_game_ended(&self) -> Option<GameResult> {
        self.result
    }

    /// The current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The committed board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The configured stone count, once `start_game` has been called.
    #[must_use]
    pub fn initial_stones(&self) -> Option<u32> {
        self.initial_stones
    }

    fn notify(&mut self, update: &GameUpdate) {
        for observer in &mut self.observers {
            observer(update);
        }
    }
}

impl std::fmt::Debug for GameController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameController")
            .field("board", &self.board)
            .field("turn", &self.turn)
            .field("phase", &self.phase)
            .field("result", &self.result)
            .field("observers", &self.observers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::SowEvent;

    #[test]
    fn test_new_controller_is_inert() {
        let game = GameController::new();

        assert_eq!(game.phase(), Phase::NotStarted);
        assert_eq!(game.player_turn(), None);
        assert_eq!(game.has_game_ended(), None);
    }

    #[test]
    fn test_start_game_layout_and_turn() {
        let mut game = GameController::new();
        game.start_game(4);

        assert_eq!(game.phase(), Phase::InProgress);
        assert_eq!(game.player_turn(), Some(Player::A));
        assert_eq!(game.board().total(), 48);
        assert_eq!(game.stones_in(Pit::A_STORE), 0);
        assert_eq!(game.stones_in(Pit::B_STORE), 0);
    }

    #[test]
    fn test_select_before_start_is_rejected() {
        let mut game = GameController::new();
        assert_eq!(
            game.select_pit(Pit::A1).unwrap_err(),
            MoveError::GameNotRunning
        );
    }

    #[test]
    fn test_opening_scenario_three_stones() {
        // start_game(3); A6 holds 3 stones reaching A-store, B1, B2.
        let mut game = GameController::new();
        game.start_game(3);

        let outcome = game.select_pit(Pit::A6).unwrap();

        assert_eq!(game.stones_in(Pit::A6), 0);
        assert_eq!(game.stones_in(Pit::A_STORE), 1);
        assert_eq!(game.stones_in(Pit::B1), 4);
        assert_eq!(game.stones_in(Pit::new(8)), 4);
        assert_eq!(outcome, TurnOutcome::Switch);
        assert_eq!(game.player_turn(), Some(Player::B));
    }

    #[test]
    fn test_free_turn_keeps_current_player() {
        // With 4 stones, A3 reaches exactly A's store.
        let mut game = GameController::new();
        game.start_game(4);

        let outcome = game.select_pit(Pit::new(2)).unwrap();

        assert_eq!(outcome, TurnOutcome::FreeTurn);
        assert_eq!(game.player_turn(), Some(Player::A));

        // The same player's next selection is accepted.
        assert!(game.select_pit(Pit::new(3)).is_ok());
    }

    #[test]
    fn test_rejection_leaves_state_untouched() {
        let mut game = GameController::new();
        game.start_game(4);
        let board = *game.board();

        // B's pit, while it is A's turn.
        let err = game.select_pit(Pit::B1).unwrap_err();

        assert_eq!(err, MoveError::NotYourPit(Pit::B1, Player::A));
        assert_eq!(*game.board(), board);
        assert_eq!(game.player_turn(), Some(Player::A));
    }

    #[test]
    fn test_restart_reuses_stone_count() {
        let mut game = GameController::new();
        game.start_game(3);
        game.select_pit(Pit::A1).unwrap();

        game.restart();

        assert_eq!(game.initial_stones(), Some(3));
        assert_eq!(game.board().total(), 36);
        assert_eq!(game.player_turn(), Some(Player::A));
    }

    #[test]
    #[should_panic(expected = "restart before any start_game")]
    fn test_restart_without_configuration_panics() {
        let mut game = GameController::new();
        game.restart();
    }

    #[test]
    #[should_panic(expected = "must be positive")]
    fn test_start_game_zero_stones_panics() {
        let mut game = GameController::new();
        game.start_game(0);
    }

    #[test]
    fn test_observers_see_committed_transitions_in_order() {
        use std::cell::RefCell;
        use std::rc::Rc;

        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut game = GameController::new();

        let first = Rc::clone(&seen);
        game.subscribe(move |update| {
            first.borrow_mut().push((1, update.clone()));
        });
        let second = Rc::clone(&seen);
        game.subscribe(move |update| {
            second.borrow_mut().push((2, update.clone()));
        });

        game.start_game(3);
        game.select_pit(Pit::A6).unwrap();

        let seen = seen.borrow();
        assert_eq!(seen.len(), 4, "two transitions, two observers each");
        assert_eq!(seen[0].0, 1);
        assert_eq!(seen[1].0, 2);
        assert!(matches!(seen[0].1, GameUpdate::GameStarted { initial_stones: 3 }));
        assert!(matches!(seen[2].1, GameUpdate::MoveResolved { player: Player::A, .. }));
    }

    #[test]
    fn test_rejected_move_notifies_nobody() {
        use std::cell::Cell;
        use std::rc::Rc;

        let count = Rc::new(Cell::new(0));
        let mut game = GameController::new();
        let counter = Rc::clone(&count);
        game.subscribe(move |_| counter.set(counter.get() + 1));

        game.start_game(4);
        let after_start = count.get();

        let _ = game.select_pit(Pit::B1); // wrong owner
        let _ = game.undo_turn(); // nothing to undo

        assert_eq!(count.get(), after_start);
    }

    #[test]
    fn test_move_resolved_carries_full_event_list() {
        use std::cell::RefCell;
        use std::rc::Rc;

        let updates = Rc::new(RefCell::new(Vec::new()));
        let mut game = GameController::new();
        let sink = Rc::clone(&updates);
        game.subscribe(move |u| sink.borrow_mut().push(u.clone()));

        game.start_game(4);
        game.select_pit(Pit::A1).unwrap();

        let updates = updates.borrow();
        let GameUpdate::MoveResolved { events, .. } = &updates[1] else {
            panic!("expected MoveResolved");
        };
        assert_eq!(events[0], SowEvent::Lift { pit: Pit::A1, stones: 4 });
        let placements = events
            .iter()
            .filter(|e| matches!(e, SowEvent::Place { .. }))
            .count();
        assert_eq!(placements, 4);
    }
}
