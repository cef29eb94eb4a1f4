use crate::config::{GRID_SIZE, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::error::GeometryError;
use crate::input::Direction;

/// Grid position in pixel-aligned coordinates (always a multiple of the cell size).
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Board dimensions and the arithmetic for moving across them.
///
/// The board is a torus: stepping off one edge re-enters at the opposite edge.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GridGeometry {
    width: i32,
    height: i32,
    cell_size: i32,
}

impl GridGeometry {
    /// Validates a `width` x `height` board made of `cell_size` cells.
    pub fn new(width: i32, height: i32, cell_size: i32) -> Result<Self, GeometryError> {
        if width <= 0 || height <= 0 || cell_size <= 0 {
            return Err(GeometryError::NonPositive {
                width,
                height,
                cell_size,
            });
        }

        if width % cell_size != 0 || height % cell_size != 0 {
            return Err(GeometryError::NotCellAligned {
                width,
                height,
                cell_size,
            });
        }

        Ok(Self {
            width,
            height,
            cell_size,
        })
    }

    /// The 640x480 board with 20-unit cells.
    #[must_use]
    pub const fn standard() -> Self {
        Self {
            width: SCREEN_WIDTH,
            height: SCREEN_HEIGHT,
            cell_size: GRID_SIZE,
        }
    }

    #[must_use]
    pub fn width(self) -> i32 {
        self.width
    }

    #[must_use]
    pub fn height(self) -> i32 {
        self.height
    }

    #[must_use]
    pub fn cell_size(self) -> i32 {
        self.cell_size
    }

    #[must_use]
    pub fn columns(self) -> i32 {
        self.width / self.cell_size
    }

    #[must_use]
    pub fn rows(self) -> i32 {
        self.height / self.cell_size
    }

    /// Returns the total number of cells on the board.
    #[must_use]
    pub fn total_cells(self) -> usize {
        // Both factors are positive by construction.
        self.columns().unsigned_abs() as usize * self.rows().unsigned_abs() as usize
    }

    /// Board center snapped down onto the cell grid.
    #[must_use]
    pub fn center(self) -> Position {
        self.cell_at(self.columns() / 2, self.rows() / 2)
    }

    /// Converts grid units to a pixel-aligned position.
    #[must_use]
    pub fn cell_at(self, column: i32, row: i32) -> Position {
        Position {
            x: column * self.cell_size,
            y: row * self.cell_size,
        }
    }

    /// Converts a pixel-aligned position to `(column, row)`.
    #[must_use]
    pub fn to_grid(self, position: Position) -> (i32, i32) {
        (
            position.x.div_euclid(self.cell_size),
            position.y.div_euclid(self.cell_size),
        )
    }

    /// Returns true when the position lies inside the board.
    #[must_use]
    pub fn contains(self, position: Position) -> bool {
        position.x >= 0 && position.y >= 0 && position.x < self.width && position.y < self.height
    }

    /// Returns true when the position is the origin of a cell on the board.
    #[must_use]
    pub fn is_cell(self, position: Position) -> bool {
        self.contains(position)
            && position.x % self.cell_size == 0
            && position.y % self.cell_size == 0
    }

    /// Moves one cell in `direction`, wrapping around the board edges.
    #[must_use]
    pub fn wrap_step(self, position: Position, direction: Direction) -> Position {
        let (dx, dy) = direction.delta();
        Position {
            x: (position.x + dx * self.cell_size).rem_euclid(self.width),
            y: (position.y + dy * self.cell_size).rem_euclid(self.height),
        }
    }
}

impl Default for GridGeometry {
    fn default() -> Self {
        Self::standard()
    }
}
