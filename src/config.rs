use crate::{error::MazeError, maze::Maze};

/// Parameters for one generate-and-solve run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MazeConfig {
    pub rows: usize,
    pub cols: usize,
    /// Fixes the carved layout when set.
    pub seed: Option<u64>,
    /// Terminal column and row of the top-left corner. Only the renderer uses it.
    pub origin: (u16, u16),
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            rows: 12,
            cols: 16,
            seed: None,
            origin: (0, 0),
        }
    }
}

impl MazeConfig {
    pub fn validate(&self) -> Result<(), MazeError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(MazeError::InvalidDimensions {
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(())
    }

    /// A closed maze with the configured dimensions.
    pub fn build_maze(&self) -> Result<Maze, MazeError> {
        self.validate()?;
        Maze::new(self.rows, self.cols)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = MazeConfig::default();
        assert!(config.validate().is_ok());
        let maze = config.build_maze().unwrap();
        assert_eq!((maze.rows(), maze.cols()), (12, 16));
    }

    #[test]
    fn test_zero_dimensions_are_rejected() {
        let config = MazeConfig {
            cols: 0,
            ..MazeConfig::default()
        };
        assert_eq!(
            config.build_maze(),
            Err(MazeError::InvalidDimensions { rows: 12, cols: 0 })
        );
    }
}
