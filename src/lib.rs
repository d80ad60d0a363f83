//! Perfect maze generation by randomized recursive backtracking, and a
//! depth-first solver that reports every forward and undone move.

pub mod config;
pub mod error;
pub mod generators;
pub mod maze;
pub mod observer;
pub mod render;
pub mod solvers;

pub use config::MazeConfig;
pub use error::MazeError;
pub use maze::{Cell, Coord, Direction, Maze};
pub use observer::{MazeEvent, MazeObserver, Move, Trace};
