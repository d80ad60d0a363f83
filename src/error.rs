use std::fmt;

use crate::maze::{Coord, Direction};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    /// A maze needs at least one row and one column.
    InvalidDimensions { rows: usize, cols: usize },
    /// Walls can only be broken between 4-adjacent cells.
    NotAdjacent { a: Coord, b: Coord },
    /// A coordinate outside the maze.
    OutOfBounds { coord: Coord },
    /// Only walls facing the maze exterior can be opened as boundaries.
    NotBoundary { coord: Coord, direction: Direction },
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MazeError::InvalidDimensions { rows, cols } => write!(
                f,
                "invalid maze dimensions {rows}x{cols}: rows and columns must be at least 1"
            ),
            MazeError::NotAdjacent { a, b } => {
                write!(f, "cells {a:?} and {b:?} are not adjacent")
            }
            MazeError::OutOfBounds { coord } => {
                write!(f, "coordinate {coord:?} is out of bounds")
            }
            MazeError::NotBoundary { coord, direction } => {
                write!(f, "the {direction:?} wall of {coord:?} faces another cell")
            }
        }
    }
}

impl std::error::Error for MazeError {}
