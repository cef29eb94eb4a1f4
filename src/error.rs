use std::io;

use thiserror::Error;

/// Board dimensions that cannot form a whole grid.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Error)]
pub enum GeometryError {
    #[error("board dimensions and cell size must be positive (got {width}x{height}, cell {cell_size})")]
    NonPositive {
        width: i32,
        height: i32,
        cell_size: i32,
    },
    #[error("board {width}x{height} is not a whole number of {cell_size}-unit cells")]
    NotCellAligned {
        width: i32,
        height: i32,
        cell_size: i32,
    },
}

/// Food placement failures.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Error)]
pub enum SpawnError {
    #[error("no free cell left on a board of {total_cells} cells")]
    NoFreeCell { total_cells: usize },
}

/// Top-level failures surfaced by the binary.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("terminal i/o failed: {0}")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Geometry(#[from] GeometryError),
    #[error(transparent)]
    Spawn(#[from] SpawnError),
    #[error("failed to install logger: {0}")]
    Logger(#[from] log::SetLoggerError),
}
