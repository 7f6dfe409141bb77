//! Game-session management for the taquin sliding-tile puzzle.
//!
//! This crate owns the state of one puzzle session: the board being played,
//! its dimensions, the move statistics, and the solved flag. The rendering
//! layer drives a [`Game`] through taps, new-game requests, and dimension
//! changes, and reads the resulting state back through accessors; the
//! session never calls out.
//!
//! # Examples
//!
//! ```
//! use taquin_core::{Dimensions, Position};
//! use taquin_game::Game;
//!
//! let mut game = Game::new(Dimensions::new(3, 3)?);
//! assert_eq!(game.stats().current(), 0);
//! assert!(!game.is_solved());
//!
//! // The empty slot of a fresh board is bottom-right, so the cell left of
//! // it can always slide.
//! let outcome = game.apply_move(Position::new(2, 1));
//! assert!(!outcome.is_ignored());
//! assert_eq!(game.stats().current(), 1);
//! # Ok::<(), taquin_core::DimensionsError>(())
//! ```

pub mod game;
pub mod stats;

pub use self::{
    game::{Game, MoveOutcome},
    stats::MoveStats,
};
