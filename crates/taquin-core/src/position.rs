//! Board coordinates and slide directions.

/// A zero-based `(row, column)` coordinate.
///
/// Positions are plain coordinates with no bound attached; whether a
/// position lies on a given board depends on the
/// [`Dimensions`](crate::Dimensions) it is checked against.
///
/// # Examples
///
/// ```
/// use taquin_core::{Direction, Position};
///
/// let pos = Position::new(1, 2);
/// assert_eq!(pos.row(), 1);
/// assert_eq!(pos.column(), 2);
///
/// assert_eq!(pos.step(Direction::Up), Some(Position::new(0, 2)));
/// // Stepping above the first row leaves the coordinate space.
/// assert_eq!(Position::new(0, 2).step(Direction::Up), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    row: u8,
    column: u8,
}

impl Position {
    /// Creates a position from zero-based row and column coordinates.
    #[must_use]
    pub const fn new(row: u8, column: u8) -> Self {
        Self { row, column }
    }

    /// Returns the zero-based row coordinate.
    #[must_use]
    pub const fn row(&self) -> u8 {
        self.row
    }

    /// Returns the zero-based column coordinate.
    #[must_use]
    pub const fn column(&self) -> u8 {
        self.column
    }

    /// Returns the neighboring position one step in `direction`, or `None`
    /// when the step would leave the coordinate space.
    ///
    /// The upper bound is a board property, so a `Some` result may still be
    /// off the board; callers check it against their
    /// [`Dimensions`](crate::Dimensions).
    #[must_use]
    pub fn step(self, direction: Direction) -> Option<Self> {
        let (row_delta, column_delta) = direction.offset();
        let row = self.row.checked_add_signed(row_delta)?;
        let column = self.column.checked_add_signed(column_delta)?;
        Some(Self { row, column })
    }
}

/// One of the four orthogonal slide directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Toward the previous row.
    Up,
    /// Toward the previous column.
    Left,
    /// Toward the next row.
    Down,
    /// Toward the next column.
    Right,
}

impl Direction {
    /// The fixed order in which a tapped cell's neighbors are inspected when
    /// looking for the empty slot: up, left, down, right.
    pub const SCAN_ORDER: [Self; 4] = [Self::Up, Self::Left, Self::Down, Self::Right];

    /// Returns the `(row, column)` delta of one step in this direction.
    #[must_use]
    pub const fn offset(self) -> (i8, i8) {
        match self {
            Self::Up => (-1, 0),
            Self::Left => (0, -1),
            Self::Down => (1, 0),
            Self::Right => (0, 1),
        }
    }
}
