use super::Direction;

/// One grid position: four independent walls and a visited flag shared by
/// generation and solving.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub top: bool,
    pub bottom: bool,
    pub left: bool,
    pub right: bool,
    /// Transient mark, cleared between generation and solving.
    pub visited: bool,
}

impl Default for Cell {
    fn default() -> Self {
        Cell::CLOSED
    }
}

impl Cell {
    /// A cell with all four walls standing and not yet visited.
    pub const CLOSED: Cell = Cell {
        top: true,
        bottom: true,
        left: true,
        right: true,
        visited: false,
    };

    pub fn has_wall(&self, direction: Direction) -> bool {
        match direction {
            Direction::Up => self.top,
            Direction::Down => self.bottom,
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }

    pub fn set_wall(&mut self, direction: Direction, present: bool) {
        let wall = match direction {
            Direction::Up => &mut self.top,
            Direction::Down => &mut self.bottom,
            Direction::Left => &mut self.left,
            Direction::Right => &mut self.right,
        };
        *wall = present;
    }

    /// Number of sides without a wall, boundary openings included.
    pub fn open_sides(&self) -> usize {
        Direction::ALL
            .iter()
            .filter(|&&direction| !self.has_wall(direction))
            .count()
    }
}
