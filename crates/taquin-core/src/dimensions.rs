//! Validated board dimensions.

use derive_more::{Display, Error};

use crate::Position;

/// The `(lines, columns)` shape of a puzzle board.
///
/// Both sides must be at least [`Dimensions::MIN_SIDE`]; a one-wide board is
/// degenerate. Dimensions are immutable; changing the shape of a session
/// means generating a new board.
///
/// # Examples
///
/// ```
/// use taquin_core::Dimensions;
///
/// let dims = Dimensions::new(3, 4)?;
/// assert_eq!(dims.cell_count(), 12);
/// assert_eq!(dims.tile_count(), 11);
///
/// assert!(Dimensions::new(1, 4).is_err());
/// # Ok::<(), taquin_core::DimensionsError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dimensions {
    lines: u8,
    columns: u8,
}

impl Dimensions {
    /// Minimum number of lines and of columns of a board.
    pub const MIN_SIDE: u8 = 2;

    /// Creates dimensions from a number of lines and columns.
    ///
    /// # Errors
    ///
    /// Returns [`DimensionsError::TooSmall`] if either side is smaller than
    /// [`Self::MIN_SIDE`].
    pub const fn new(lines: u8, columns: u8) -> Result<Self, DimensionsError> {
        if lines < Self::MIN_SIDE || columns < Self::MIN_SIDE {
            return Err(DimensionsError::TooSmall { lines, columns });
        }
        Ok(Self { lines, columns })
    }

    /// Returns the number of lines (rows).
    #[must_use]
    pub const fn lines(&self) -> u8 {
        self.lines
    }

    /// Returns the number of columns.
    #[must_use]
    pub const fn columns(&self) -> u8 {
        self.columns
    }

    /// Returns the total number of cells, `lines * columns`.
    #[must_use]
    pub fn cell_count(&self) -> u16 {
        u16::from(self.lines) * u16::from(self.columns)
    }

    /// Returns the number of tiles, one less than the cell count.
    #[must_use]
    pub fn tile_count(&self) -> u16 {
        self.cell_count() - 1
    }

    /// Returns the bottom-right position, the home of the empty slot in the
    /// solved configuration.
    #[must_use]
    pub const fn last_position(&self) -> Position {
        Position::new(self.lines - 1, self.columns - 1)
    }

    /// Returns `true` if `position` lies on a board of these dimensions.
    #[must_use]
    pub const fn contains(&self, position: Position) -> bool {
        position.row() < self.lines && position.column() < self.columns
    }

    /// Returns all positions of a board of these dimensions in row-major
    /// order.
    #[must_use]
    pub fn positions(&self) -> impl Iterator<Item = Position> + use<> {
        let Self { lines, columns } = *self;
        (0..lines).flat_map(move |row| (0..columns).map(move |column| Position::new(row, column)))
    }
}

/// Rejected board dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum DimensionsError {
    /// One of the sides is below [`Dimensions::MIN_SIDE`].
    #[display("board dimensions {lines}x{columns} are too small; both sides must be at least 2")]
    TooSmall {
        /// Requested number of lines.
        lines: u8,
        /// Requested number of columns.
        columns: u8,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_validates_minimum_side() {
        assert!(Dimensions::new(2, 2).is_ok());
        assert!(Dimensions::new(5, 3).is_ok());

        assert_eq!(
            Dimensions::new(1, 3),
            Err(DimensionsError::TooSmall {
                lines: 1,
                columns: 3
            })
        );
        assert_eq!(
            Dimensions::new(3, 0),
            Err(DimensionsError::TooSmall {
                lines: 3,
                columns: 0
            })
        );
    }

    #[test]
    fn test_counts() {
        let dims = Dimensions::new(3, 5).unwrap();
        assert_eq!(dims.lines(), 3);
        assert_eq!(dims.columns(), 5);
        assert_eq!(dims.cell_count(), 15);
        assert_eq!(dims.tile_count(), 14);
        assert_eq!(dims.last_position(), Position::new(2, 4));
    }

    #[test]
    fn test_contains() {
        let dims = Dimensions::new(3, 4).unwrap();
        assert!(dims.contains(Position::new(0, 0)));
        assert!(dims.contains(Position::new(2, 3)));
        assert!(!dims.contains(Position::new(3, 0)));
        assert!(!dims.contains(Position::new(0, 4)));
    }

    #[test]
    fn test_positions_row_major() {
        let dims = Dimensions::new(2, 3).unwrap();
        let positions: Vec<_> = dims.positions().collect();
        assert_eq!(
            positions,
            [
                Position::new(0, 0),
                Position::new(0, 1),
                Position::new(0, 2),
                Position::new(1, 0),
                Position::new(1, 1),
                Position::new(1, 2),
            ]
        );
    }

    #[test]
    fn test_error_display() {
        let err = Dimensions::new(1, 2).unwrap_err();
        assert_eq!(
            err.to_string(),
            "board dimensions 1x2 are too small; both sides must be at least 2"
        );
    }
}
