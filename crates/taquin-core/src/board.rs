//! The puzzle board: tile layout, move legality, and win detection.

use std::fmt;

use derive_more::{Display, Error};

use crate::{Cell, Dimensions, Direction, Position};

/// A sliding-tile board.
///
/// Cells are stored in row-major order behind [`Position`] accessors. Every
/// board holds each tile value `1..=n-1` exactly once plus exactly one
/// [`Cell::Empty`] slot, where `n` is the cell count. Constructors either
/// build such a board directly ([`Board::solved`]) or validate the invariants
/// ([`Board::from_cells`]).
///
/// Boards are value types: [`Board::with_swapped`] returns a new board and
/// never mutates its receiver, which is what makes session state transitions
/// predictable for the layer driving the game.
///
/// # Examples
///
/// ```
/// use taquin_core::{Board, Cell, Dimensions, Position};
///
/// let dims = Dimensions::new(2, 2)?;
/// let board = Board::solved(dims);
/// assert!(board.is_solved());
/// assert_eq!(board.cell(Position::new(0, 0)), Some(Cell::Tile(1)));
/// assert_eq!(board.empty_position(), Position::new(1, 1));
/// # Ok::<(), taquin_core::DimensionsError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    dimensions: Dimensions,
    cells: Vec<Cell>,
}

impl Board {
    /// Returns the solved configuration for the given dimensions: tiles in
    /// ascending row-major order with the empty slot in the bottom-right
    /// cell.
    #[must_use]
    pub fn solved(dimensions: Dimensions) -> Self {
        let mut cells: Vec<_> = (1..dimensions.cell_count()).map(Cell::Tile).collect();
        cells.push(Cell::Empty);
        Self { dimensions, cells }
    }

    /// Builds a board from row-major cells, validating the board invariants.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::WrongCellCount`] if `cells` does not hold
    /// exactly `dimensions.cell_count()` cells,
    /// [`BoardError::NoEmptyCell`] / [`BoardError::MultipleEmptyCells`] if
    /// the empty slot is missing or duplicated, and
    /// [`BoardError::TileOutOfRange`] / [`BoardError::DuplicateTile`] if the
    /// tile values are not exactly `1..=n-1`, each once.
    pub fn from_cells(dimensions: Dimensions, cells: Vec<Cell>) -> Result<Self, BoardError> {
        let expected = usize::from(dimensions.cell_count());
        if cells.len() != expected {
            return Err(BoardError::WrongCellCount {
                expected,
                actual: cells.len(),
            });
        }

        let mut seen = vec![false; usize::from(dimensions.tile_count())];
        let mut empty_seen = false;
        for &cell in &cells {
            match cell {
                Cell::Empty => {
                    if empty_seen {
                        return Err(BoardError::MultipleEmptyCells);
                    }
                    empty_seen = true;
                }
                Cell::Tile(value) => {
                    if value == 0 || value > dimensions.tile_count() {
                        return Err(BoardError::TileOutOfRange { value });
                    }
                    let slot = &mut seen[usize::from(value - 1)];
                    if *slot {
                        return Err(BoardError::DuplicateTile { value });
                    }
                    *slot = true;
                }
            }
        }
        if !empty_seen {
            return Err(BoardError::NoEmptyCell);
        }

        // Cell count matches, the empty slot is unique, and no tile value is
        // out of range or duplicated, so every value 1..=n-1 is present.
        Ok(Self { dimensions, cells })
    }

    /// Returns the board dimensions.
    #[must_use]
    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    /// Returns the cell at `position`, or `None` when the position is off
    /// the board.
    #[must_use]
    pub fn cell(&self, position: Position) -> Option<Cell> {
        self.dimensions
            .contains(position)
            .then(|| self.cells[self.index_of(position)])
    }

    /// Returns the position of the empty slot.
    ///
    /// # Panics
    ///
    /// Panics if the board invariant of exactly one empty cell has been
    /// broken, which cannot happen through the public constructors.
    #[must_use]
    pub fn empty_position(&self) -> Position {
        self.dimensions
            .positions()
            .find(|&pos| self.cells[self.index_of(pos)].is_empty())
            .expect("a board holds exactly one empty cell")
    }

    /// Returns the position of the empty slot if it is orthogonally adjacent
    /// to `position`, checking the neighbors in up, left, down, right order.
    ///
    /// Returns `None` when no neighbor holds the empty slot and when
    /// `position` itself is off the board. Neither case is an error: the tap
    /// is simply ignored by the caller.
    #[must_use]
    pub fn empty_neighbor(&self, position: Position) -> Option<Position> {
        if !self.dimensions.contains(position) {
            return None;
        }
        Direction::SCAN_ORDER.into_iter().find_map(|direction| {
            let neighbor = position.step(direction)?;
            (self.cell(neighbor) == Some(Cell::Empty)).then_some(neighbor)
        })
    }

    /// Returns a copy of this board with the cells at `a` and `b` exchanged.
    ///
    /// The receiver is left untouched.
    ///
    /// # Panics
    ///
    /// Panics if `a` or `b` is off the board.
    #[must_use]
    pub fn with_swapped(&self, a: Position, b: Position) -> Self {
        assert!(
            self.dimensions.contains(a) && self.dimensions.contains(b),
            "swapped positions must be on the board"
        );
        let mut board = self.clone();
        let (i, j) = (self.index_of(a), self.index_of(b));
        board.cells.swap(i, j);
        board
    }

    /// Returns `true` when the tiles run `1, 2, …` in row-major order and
    /// the final cell is the empty slot.
    ///
    /// The whole board is scanned; there is no early success path.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        let last = self.cells.len() - 1;
        let mut counter = 1;
        for (index, &cell) in self.cells.iter().enumerate() {
            if index == last {
                if !cell.is_empty() {
                    return false;
                }
            } else {
                if cell != Cell::Tile(counter) {
                    return false;
                }
                counter += 1;
            }
        }
        true
    }

    /// Returns the rows of the board, top to bottom, for layout by a
    /// renderer.
    #[must_use]
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(usize::from(self.dimensions.columns()))
    }

    fn index_of(&self, position: Position) -> usize {
        usize::from(position.row()) * usize::from(self.dimensions.columns())
            + usize::from(position.column())
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.dimensions.tile_count().to_string().len();
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for (j, cell) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{cell:>width$}")?;
            }
        }
        Ok(())
    }
}

/// Rejected raw cell sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum BoardError {
    /// The cell sequence length does not match the dimensions.
    #[display("expected {expected} cells, got {actual}")]
    WrongCellCount {
        /// Cell count required by the dimensions.
        expected: usize,
        /// Cell count actually supplied.
        actual: usize,
    },
    /// No cell holds the empty slot.
    #[display("board has no empty cell")]
    NoEmptyCell,
    /// More than one cell holds the empty slot.
    #[display("board has more than one empty cell")]
    MultipleEmptyCells,
    /// A tile value lies outside `1..=n-1`.
    #[display("tile value {value} is out of range")]
    TileOutOfRange {
        /// The offending tile value.
        value: u16,
    },
    /// A tile value occurs more than once.
    #[display("tile value {value} appears more than once")]
    DuplicateTile {
        /// The offending tile value.
        value: u16,
    },
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn dims(lines: u8, columns: u8) -> Dimensions {
        Dimensions::new(lines, columns).unwrap()
    }

    /// Builds a board from tile values with `0` standing in for the empty
    /// slot.
    fn board_from_values(lines: u8, columns: u8, values: &[u16]) -> Board {
        let cells = values
            .iter()
            .map(|&value| {
                if value == 0 {
                    Cell::Empty
                } else {
                    Cell::Tile(value)
                }
            })
            .collect();
        Board::from_cells(dims(lines, columns), cells).unwrap()
    }

    #[test]
    fn test_solved_board_layout() {
        let board = Board::solved(dims(2, 3));
        let cells: Vec<_> = board
            .dimensions()
            .positions()
            .map(|pos| board.cell(pos).unwrap())
            .collect();
        assert_eq!(
            cells,
            [
                Cell::Tile(1),
                Cell::Tile(2),
                Cell::Tile(3),
                Cell::Tile(4),
                Cell::Tile(5),
                Cell::Empty,
            ]
        );
        assert_eq!(board.empty_position(), Position::new(1, 2));
    }

    #[test]
    fn test_from_cells_accepts_valid_permutation() {
        let board = board_from_values(2, 2, &[3, 0, 1, 2]);
        assert_eq!(board.cell(Position::new(0, 0)), Some(Cell::Tile(3)));
        assert_eq!(board.empty_position(), Position::new(0, 1));
    }

    #[test]
    fn test_from_cells_rejects_invalid_sequences() {
        let d = dims(2, 2);

        assert_eq!(
            Board::from_cells(d, vec![Cell::Tile(1), Cell::Empty]),
            Err(BoardError::WrongCellCount {
                expected: 4,
                actual: 2
            })
        );
        assert_eq!(
            Board::from_cells(
                d,
                vec![Cell::Tile(1), Cell::Tile(2), Cell::Tile(3), Cell::Tile(4)]
            ),
            Err(BoardError::TileOutOfRange { value: 4 })
        );
        assert_eq!(
            Board::from_cells(
                d,
                vec![Cell::Tile(1), Cell::Tile(2), Cell::Tile(3), Cell::Tile(1)]
            ),
            Err(BoardError::DuplicateTile { value: 1 })
        );
        assert_eq!(
            Board::from_cells(
                d,
                vec![Cell::Empty, Cell::Tile(2), Cell::Tile(3), Cell::Empty]
            ),
            Err(BoardError::MultipleEmptyCells)
        );
        // A sequence of the right length with a duplicate instead of the
        // empty slot trips the duplicate check before the missing-empty one.
        assert_eq!(
            Board::from_cells(
                d,
                vec![Cell::Tile(1), Cell::Tile(2), Cell::Tile(3), Cell::Tile(3)]
            ),
            Err(BoardError::DuplicateTile { value: 3 })
        );
    }

    #[test]
    fn test_cell_out_of_bounds_is_none() {
        let board = Board::solved(dims(3, 3));
        assert_eq!(board.cell(Position::new(3, 0)), None);
        assert_eq!(board.cell(Position::new(0, 3)), None);
    }

    #[test]
    fn test_empty_neighbor_in_each_direction() {
        // 2x3 board, empty in the middle of the bottom row:
        //   1 2 3
        //   4 · 5
        let board = board_from_values(2, 3, &[1, 2, 3, 4, 0, 5]);
        let empty = Position::new(1, 1);

        assert_eq!(board.empty_neighbor(Position::new(0, 1)), Some(empty)); // empty is below
        assert_eq!(board.empty_neighbor(Position::new(1, 0)), Some(empty)); // empty is right
        assert_eq!(board.empty_neighbor(Position::new(1, 2)), Some(empty)); // empty is left

        // Empty in the middle of the top row:
        //   1 · 2
        //   3 4 5
        let board = board_from_values(2, 3, &[1, 0, 2, 3, 4, 5]);
        let empty = Position::new(0, 1);
        assert_eq!(board.empty_neighbor(Position::new(1, 1)), Some(empty)); // empty is above
    }

    #[test]
    fn test_empty_neighbor_none_when_not_adjacent() {
        let board = Board::solved(dims(3, 3));
        // Far corner: the empty slot is at (2, 2), two steps away.
        assert_eq!(board.empty_neighbor(Position::new(0, 0)), None);
        // Diagonal neighbors do not count.
        assert_eq!(board.empty_neighbor(Position::new(1, 1)), None);
        // The empty slot itself has no empty neighbor.
        assert_eq!(board.empty_neighbor(Position::new(2, 2)), None);
    }

    #[test]
    fn test_empty_neighbor_out_of_range_tap_is_none() {
        let board = Board::solved(dims(3, 3));
        // (3, 2) is off a 3x3 board even though its upper neighbor (2, 2)
        // holds the empty slot.
        assert_eq!(board.empty_neighbor(Position::new(3, 2)), None);
        assert_eq!(board.empty_neighbor(Position::new(200, 200)), None);
    }

    #[test]
    fn test_with_swapped_does_not_mutate_receiver() {
        let board = Board::solved(dims(3, 3));
        let copy = board.clone();

        let swapped = board.with_swapped(Position::new(2, 1), Position::new(2, 2));

        assert_eq!(board, copy);
        assert_ne!(swapped, board);
        assert_eq!(swapped.cell(Position::new(2, 1)), Some(Cell::Empty));
        assert_eq!(swapped.cell(Position::new(2, 2)), Some(Cell::Tile(8)));
    }

    #[test]
    fn test_is_solved_only_for_solved_configuration() {
        let board = Board::solved(dims(3, 3));
        assert!(board.is_solved());

        // Any exchange of two distinct cells breaks the configuration.
        let positions: Vec<_> = board.dimensions().positions().collect();
        for (i, &a) in positions.iter().enumerate() {
            for &b in &positions[i + 1..] {
                assert!(!board.with_swapped(a, b).is_solved(), "{a:?} <-> {b:?}");
            }
        }
    }

    #[test]
    fn test_is_solved_requires_trailing_empty() {
        // Ascending order but with the empty slot mid-board:
        //   1 2 3
        //   4 · 5
        let board = board_from_values(2, 3, &[1, 2, 3, 4, 0, 5]);
        assert!(!board.is_solved());
    }

    #[test]
    fn test_display_grid() {
        let board = board_from_values(2, 2, &[3, 0, 1, 2]);
        assert_eq!(board.to_string(), "3 ·\n1 2");

        // Two-digit tiles are right-aligned.
        let board = Board::solved(dims(3, 4));
        assert_eq!(
            board.to_string(),
            " 1  2  3  4\n 5  6  7  8\n 9 10 11  ·"
        );
    }

    proptest! {
        #[test]
        fn prop_with_swapped_purity(
            lines in 2..=5u8,
            columns in 2..=5u8,
            seed_a in 0..25usize,
            seed_b in 0..25usize,
        ) {
            let board = Board::solved(dims(lines, columns));
            let copy = board.clone();

            let count = usize::from(board.dimensions().cell_count());
            let positions: Vec<_> = board.dimensions().positions().collect();
            let a = positions[seed_a % count];
            let b = positions[seed_b % count];

            let _swapped = board.with_swapped(a, b);
            prop_assert_eq!(&board, &copy);
        }

        #[test]
        fn prop_swap_roundtrip_restores_board(
            lines in 2..=5u8,
            columns in 2..=5u8,
            seed_a in 0..25usize,
            seed_b in 0..25usize,
        ) {
            let board = Board::solved(dims(lines, columns));

            let count = usize::from(board.dimensions().cell_count());
            let positions: Vec<_> = board.dimensions().positions().collect();
            let a = positions[seed_a % count];
            let b = positions[seed_b % count];

            let roundtrip = board.with_swapped(a, b).with_swapped(a, b);
            prop_assert_eq!(roundtrip, board);
        }
    }
}
