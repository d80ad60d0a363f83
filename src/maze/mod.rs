pub mod cell;
pub mod grid;

pub use cell::Cell;
use grid::Grid;

use crate::error::MazeError;

/// Logical `(row, col)` position of a cell.
pub type Coord = (usize, usize);

/// Side of the top-left cell opened as the maze entrance.
pub const ENTRANCE_SIDE: Direction = Direction::Left;
/// Side of the bottom-right cell opened as the maze exit.
pub const EXIT_SIDE: Direction = Direction::Right;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All directions in probing order. The solver's tie-break depends on it.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Direction leading from `from` to a 4-adjacent `to`, if they are adjacent.
    pub fn between(from: Coord, to: Coord) -> Option<Direction> {
        let (r1, c1) = from;
        let (r2, c2) = to;
        if c1 == c2 {
            if r2.checked_add(1) == Some(r1) {
                return Some(Direction::Up);
            }
            if r1.checked_add(1) == Some(r2) {
                return Some(Direction::Down);
            }
        } else if r1 == r2 {
            if c2.checked_add(1) == Some(c1) {
                return Some(Direction::Left);
            }
            if c1.checked_add(1) == Some(c2) {
                return Some(Direction::Right);
            }
        }
        None
    }

    /// Applies the step to `coord`. Only underflow is caught here, callers check the upper bounds.
    fn step(self, coord: Coord) -> Option<Coord> {
        let (row, col) = coord;
        match self {
            Direction::Up => row.checked_sub(1).map(|r| (r, col)),
            Direction::Down => row.checked_add(1).map(|r| (r, col)),
            Direction::Left => col.checked_sub(1).map(|c| (row, c)),
            Direction::Right => col.checked_add(1).map(|c| (row, c)),
        }
    }
}

/// A rectangular maze of walled cells, owned and mutated by one phase at a time.
#[derive(Debug, Clone, PartialEq)]
pub struct Maze {
    grid: Grid<Cell>,
}

impl Maze {
    /// Creates a maze with every wall standing and no cell visited.
    ///
    /// # Errors
    /// `MazeError::InvalidDimensions` if `rows` or `cols` is zero.
    pub fn new(rows: usize, cols: usize) -> Result<Self, MazeError> {
        if rows == 0 || cols == 0 {
            return Err(MazeError::InvalidDimensions { rows, cols });
        }
        Ok(Maze {
            grid: Grid::new(rows, cols, Cell::CLOSED),
        })
    }

    /// Number of rows of cells.
    pub fn rows(&self) -> usize {
        self.grid.rows()
    }

    /// Number of columns of cells.
    pub fn cols(&self) -> usize {
        self.grid.cols()
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.rows() * self.cols()
    }

    /// Always false, a maze has at least one cell.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The top-left cell, whose `ENTRANCE_SIDE` is opened by generation.
    pub fn entrance(&self) -> Coord {
        (0, 0)
    }

    /// The bottom-right cell, whose `EXIT_SIDE` is opened by generation.
    pub fn exit(&self) -> Coord {
        (self.rows() - 1, self.cols() - 1)
    }

    pub fn is_in_bounds(&self, coord: Coord) -> bool {
        self.grid.is_in_bounds(coord)
    }

    /// Returns the cell at `coord`, or `None` outside the maze.
    pub fn cell(&self, coord: Coord) -> Option<&Cell> {
        self.is_in_bounds(coord).then(|| &self.grid[coord])
    }

    /// Iterates over all cells row by row.
    pub fn cells(&self) -> impl Iterator<Item = (Coord, &Cell)> {
        self.grid.iter()
    }

    /// Adjacent coordinate in `direction`, if it lies within the maze.
    pub fn neighbor(&self, coord: Coord, direction: Direction) -> Option<Coord> {
        if !self.is_in_bounds(coord) {
            return None;
        }
        direction.step(coord).filter(|&c| self.is_in_bounds(c))
    }

    /// In-bounds neighbors of a cell, in `Direction::ALL` order.
    pub fn neighbors(&self, coord: Coord) -> impl Iterator<Item = (Direction, Coord)> + '_ {
        Direction::ALL
            .into_iter()
            .filter_map(move |direction| Some((direction, self.neighbor(coord, direction)?)))
    }

    /// Whether a passage leads from `coord` to its neighbor in `direction`.
    ///
    /// Both facing walls are checked, so a half-broken pair never counts as open.
    pub fn is_passage(&self, coord: Coord, direction: Direction) -> bool {
        match self.neighbor(coord, direction) {
            Some(next) => {
                !self.grid[coord].has_wall(direction)
                    && !self.grid[next].has_wall(direction.opposite())
            }
            None => false,
        }
    }

    /// Clears the pair of walls separating two 4-adjacent cells.
    ///
    /// # Errors
    /// * `MazeError::OutOfBounds` if either coordinate lies outside the maze
    /// * `MazeError::NotAdjacent` if the cells do not share a side
    pub fn break_wall_between(&mut self, a: Coord, b: Coord) -> Result<(), MazeError> {
        for coord in [a, b] {
            if !self.is_in_bounds(coord) {
                return Err(MazeError::OutOfBounds { coord });
            }
        }
        let direction = Direction::between(a, b).ok_or(MazeError::NotAdjacent { a, b })?;
        self.grid[a].set_wall(direction, false);
        self.grid[b].set_wall(direction.opposite(), false);
        Ok(())
    }

    /// Opens a wall that faces the outside of the maze.
    ///
    /// # Errors
    /// * `MazeError::OutOfBounds` if `coord` lies outside the maze
    /// * `MazeError::NotBoundary` if the wall in `direction` is shared with another cell
    pub fn open_boundary(&mut self, coord: Coord, direction: Direction) -> Result<(), MazeError> {
        if !self.is_in_bounds(coord) {
            return Err(MazeError::OutOfBounds { coord });
        }
        if self.neighbor(coord, direction).is_some() {
            return Err(MazeError::NotBoundary { coord, direction });
        }
        self.grid[coord].set_wall(direction, false);
        Ok(())
    }

    pub fn is_visited(&self, coord: Coord) -> bool {
        self.cell(coord).is_some_and(|cell| cell.visited)
    }

    /// Marks a cell visited. Ignored outside the maze.
    pub fn set_visited(&mut self, coord: Coord, visited: bool) {
        if self.is_in_bounds(coord) {
            self.grid[coord].visited = visited;
        }
    }

    pub fn reset_visited(&mut self) {
        self.grid.iter_mut().for_each(|cell| cell.visited = false);
    }

    /// Number of broken walls shared between two cells, each pair counted once.
    pub fn internal_passages(&self) -> usize {
        self.cells()
            .map(|(coord, _)| {
                [Direction::Down, Direction::Right]
                    .into_iter()
                    .filter(|&d| self.is_passage(coord, d))
                    .count()
            })
            .sum()
    }
}

impl std::ops::Index<Coord> for Maze {
    type Output = Cell;

    fn index(&self, index: Coord) -> &Self::Output {
        &self.grid[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_zero_dimensions() {
        assert_eq!(
            Maze::new(0, 3),
            Err(MazeError::InvalidDimensions { rows: 0, cols: 3 })
        );
        assert_eq!(
            Maze::new(3, 0),
            Err(MazeError::InvalidDimensions { rows: 3, cols: 0 })
        );
    }

    #[test]
    fn test_new_maze_is_closed() {
        let maze = Maze::new(3, 5).unwrap();
        assert_eq!(maze.len(), 15);
        assert!(maze.cells().all(|(_, cell)| *cell == Cell::CLOSED));
        assert_eq!(maze.exit(), (2, 4));
    }

    #[test]
    fn test_neighbor_bounds() {
        let maze = Maze::new(3, 4).unwrap();
        assert_eq!(maze.neighbor((0, 0), Direction::Up), None);
        assert_eq!(maze.neighbor((0, 0), Direction::Left), None);
        assert_eq!(maze.neighbor((0, 0), Direction::Down), Some((1, 0)));
        assert_eq!(maze.neighbor((2, 3), Direction::Down), None);
        assert_eq!(maze.neighbor((2, 3), Direction::Right), None);
        assert_eq!(maze.neighbor((1, 1), Direction::Right), Some((1, 2)));
        assert_eq!(maze.neighbor((5, 5), Direction::Up), None);
    }

    #[test]
    fn test_neighbors_follow_direction_order() {
        let maze = Maze::new(3, 3).unwrap();
        let neighbors = maze.neighbors((1, 1)).map(|(_, c)| c).collect::<Vec<_>>();
        assert_eq!(neighbors, vec![(0, 1), (2, 1), (1, 0), (1, 2)]);
    }

    #[test]
    fn test_direction_between() {
        assert_eq!(Direction::between((1, 1), (0, 1)), Some(Direction::Up));
        assert_eq!(Direction::between((1, 1), (2, 1)), Some(Direction::Down));
        assert_eq!(Direction::between((1, 1), (1, 0)), Some(Direction::Left));
        assert_eq!(Direction::between((1, 1), (1, 2)), Some(Direction::Right));
        assert_eq!(Direction::between((1, 1), (2, 2)), None);
        assert_eq!(Direction::between((1, 1), (1, 1)), None);
        assert_eq!(Direction::between((0, 0), (0, 2)), None);
    }

    #[test]
    fn test_break_wall_between_clears_both_sides() {
        let mut maze = Maze::new(2, 2).unwrap();
        maze.break_wall_between((0, 0), (0, 1)).unwrap();
        assert!(!maze.cell((0, 0)).unwrap().right);
        assert!(!maze.cell((0, 1)).unwrap().left);
        assert!(maze.is_passage((0, 0), Direction::Right));
        assert!(maze.is_passage((0, 1), Direction::Left));
        assert!(!maze.is_passage((0, 0), Direction::Down));
        assert_eq!(maze.internal_passages(), 1);
    }

    #[test]
    fn test_break_wall_between_rejects_non_adjacent() {
        let mut maze = Maze::new(3, 3).unwrap();
        assert_eq!(
            maze.break_wall_between((0, 0), (1, 1)),
            Err(MazeError::NotAdjacent {
                a: (0, 0),
                b: (1, 1)
            })
        );
        assert_eq!(
            maze.break_wall_between((0, 0), (0, 3)),
            Err(MazeError::OutOfBounds { coord: (0, 3) })
        );
        assert!(maze.cells().all(|(_, cell)| *cell == Cell::CLOSED));
    }

    #[test]
    fn test_open_boundary() {
        let mut maze = Maze::new(2, 3).unwrap();
        maze.open_boundary((0, 0), ENTRANCE_SIDE).unwrap();
        assert!(!maze.cell((0, 0)).unwrap().left);
        assert_eq!(
            maze.open_boundary((0, 0), Direction::Right),
            Err(MazeError::NotBoundary {
                coord: (0, 0),
                direction: Direction::Right
            })
        );
        assert_eq!(maze.internal_passages(), 0);
    }

    #[test]
    fn test_reset_visited() {
        let mut maze = Maze::new(2, 2).unwrap();
        maze.set_visited((1, 1), true);
        maze.set_visited((0, 1), true);
        assert!(maze.is_visited((1, 1)));
        maze.reset_visited();
        assert!(maze.cells().all(|(_, cell)| !cell.visited));
    }
}
