//! The session controller.

use derive_more::IsVariant;
use taquin_core::{Board, Dimensions, Position};
use taquin_generator::{BoardGenerator, BoardSeed, GeneratedBoard};

use crate::MoveStats;

/// A sliding-tile game session.
///
/// Owns the board being played, the move statistics, and the solved flag,
/// and applies a user tap end to end: neighbor check, swap, move count, win
/// scan, statistics fold. The rendering layer drives the session through
/// [`Game::apply_move`], [`Game::new_game`], and [`Game::resize`], and reads
/// state back through the accessors; no callbacks flow the other way.
///
/// A solved session stays interactive: nothing locks input after a win, so
/// continued play can scramble the board again. The solved flag is
/// recomputed from the board after every successful move, and every move
/// that lands the solved configuration counts as a win in the statistics.
///
/// # Example
///
/// ```
/// use taquin_core::{Dimensions, Position};
/// use taquin_game::Game;
///
/// let mut game = Game::new(Dimensions::new(3, 3)?);
///
/// // A fresh board keeps its empty slot bottom-right, so tapping the cell
/// // above it always moves.
/// let outcome = game.apply_move(Position::new(1, 2));
/// assert!(!outcome.is_ignored());
/// assert_eq!(game.stats().current(), 1);
///
/// // Tapping a far corner now does nothing: the empty slot sits at (1, 2),
/// // which is not adjacent to (0, 0).
/// let outcome = game.apply_move(Position::new(0, 0));
/// assert!(outcome.is_ignored());
/// assert_eq!(game.stats().current(), 1);
/// # Ok::<(), taquin_core::DimensionsError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    seed: BoardSeed,
    stats: MoveStats,
    solved: bool,
}

impl Game {
    /// Starts a session with a freshly generated board and zeroed
    /// statistics.
    #[must_use]
    pub fn new(dimensions: Dimensions) -> Self {
        Self::with_board(BoardGenerator::new(dimensions).generate())
    }

    /// Builds a session around an already generated board.
    ///
    /// Useful when the caller generates up front, to show or log the seed
    /// before play starts, or to replay a known board.
    #[must_use]
    pub fn with_board(generated: GeneratedBoard) -> Self {
        let GeneratedBoard { board, seed } = generated;
        Self {
            board,
            seed,
            stats: MoveStats::new(),
            solved: false,
        }
    }

    /// Returns the board being played.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the session dimensions.
    #[must_use]
    pub fn dimensions(&self) -> Dimensions {
        self.board.dimensions()
    }

    /// Returns the seed of the board being played.
    #[must_use]
    pub const fn seed(&self) -> BoardSeed {
        self.seed
    }

    /// Returns the move statistics.
    #[must_use]
    pub const fn stats(&self) -> MoveStats {
        self.stats
    }

    /// Returns `true` while the board shows the solved configuration.
    #[must_use]
    pub const fn is_solved(&self) -> bool {
        self.solved
    }

    /// Applies a tap on `position`.
    ///
    /// When the tapped cell has the empty slot as an orthogonal neighbor,
    /// the two are exchanged, the move is counted, and the win scan runs on
    /// the new board. When the cell has no empty neighbor, or the position
    /// is off the board, the tap is ignored and the session is unchanged;
    /// an ignored tap is a normal outcome, not an error.
    pub fn apply_move(&mut self, position: Position) -> MoveOutcome {
        let Some(empty) = self.board.empty_neighbor(position) else {
            return MoveOutcome::Ignored;
        };

        self.board = self.board.with_swapped(position, empty);
        self.stats.record_move();

        self.solved = self.board.is_solved();
        if self.solved {
            self.stats.record_win();
            MoveOutcome::Solved
        } else {
            MoveOutcome::Moved
        }
    }

    /// Restarts the session: a new board with the same dimensions, zeroed
    /// statistics, solved flag cleared.
    pub fn new_game(&mut self) {
        self.restart(self.dimensions());
    }

    /// Restarts the session with new dimensions.
    pub fn resize(&mut self, dimensions: Dimensions) {
        self.restart(dimensions);
    }

    fn restart(&mut self, dimensions: Dimensions) {
        let GeneratedBoard { board, seed } = BoardGenerator::new(dimensions).generate();
        self.board = board;
        self.seed = seed;
        self.stats.reset();
        self.solved = false;
    }
}

/// The result of one tap handed to [`Game::apply_move`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, IsVariant)]
pub enum MoveOutcome {
    /// The tapped cell has no empty neighbor, or lies off the board; the
    /// session is unchanged.
    Ignored,
    /// A tile slid into the empty slot; the board is not solved.
    Moved,
    /// A tile slid into the empty slot and completed the solved
    /// configuration.
    Solved,
}
