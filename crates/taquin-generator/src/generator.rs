//! Board shuffling.

use rand::{RngExt as _, SeedableRng as _};
use rand_pcg::Pcg64Mcg;
use taquin_core::{Board, Cell, Dimensions};

use crate::BoardSeed;

/// A randomized board generator for fixed dimensions.
///
/// Generation builds the solved cell sequence `[1, …, n-1, empty]` and
/// shuffles it with a backward Fisher–Yates pass over every slot except the
/// last: for `i` from `n-2` down to `1`, the swap partner `j` is drawn
/// uniformly from `[0, i]`.
///
/// Callers can rely on two properties of the shuffle:
///
/// - the last slot never takes part in a swap, so the empty slot of a fresh
///   board is always the bottom-right cell;
/// - the arrangement is not checked for solvability: about half of all tile
///   arrangements cannot reach the solved configuration through legal moves,
///   and such boards are handed out as-is.
///
/// # Examples
///
/// ```
/// use taquin_core::Dimensions;
/// use taquin_generator::BoardGenerator;
///
/// let generator = BoardGenerator::new(Dimensions::new(3, 3)?);
/// let generated = generator.generate();
///
/// let dims = generated.board.dimensions();
/// assert_eq!(generated.board.empty_position(), dims.last_position());
/// # Ok::<(), taquin_core::DimensionsError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct BoardGenerator {
    dimensions: Dimensions,
}

impl BoardGenerator {
    /// Creates a generator for boards of the given dimensions.
    #[must_use]
    pub const fn new(dimensions: Dimensions) -> Self {
        Self { dimensions }
    }

    /// Returns the dimensions this generator produces boards for.
    #[must_use]
    pub const fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    /// Generates a board from a fresh random seed.
    #[must_use]
    pub fn generate(&self) -> GeneratedBoard {
        self.generate_with_seed(BoardSeed::random())
    }

    /// Generates the board determined by `seed`.
    ///
    /// The same seed always yields the same board for the same dimensions.
    #[must_use]
    pub fn generate_with_seed(&self, seed: BoardSeed) -> GeneratedBoard {
        let mut rng = Pcg64Mcg::from_seed(seed.rng_state());

        let mut cells: Vec<_> = (1..self.dimensions.cell_count()).map(Cell::Tile).collect();
        cells.push(Cell::Empty);

        // Backward pass over every slot but the last, which keeps holding
        // the empty cell.
        for i in (1..=cells.len() - 2).rev() {
            let j = rng.random_range(0..=i);
            cells.swap(i, j);
        }

        #[expect(clippy::missing_panics_doc)]
        let board = Board::from_cells(self.dimensions, cells)
            .expect("the shuffle permutes a valid cell sequence");
        GeneratedBoard { board, seed }
    }
}

/// A generated board together with the seed that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedBoard {
    /// The shuffled board.
    pub board: Board,
    /// The seed the board was generated from.
    pub seed: BoardSeed,
}
