use rand::{Rng, SeedableRng, rngs::StdRng};

mod recur_backtrack;

use recur_backtrack::recursive_backtrack;

use crate::{
    error::MazeError,
    maze::{Coord, ENTRANCE_SIDE, EXIT_SIDE, Maze},
    observer::{MazeEvent, MazeObserver},
};

/// Get a random number generator, optionally seeded for reproducibility.
pub fn get_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

/// Turns a closed maze into a perfect maze with an entrance and an exit.
///
/// With a seed the result is reproducible: the same dimensions, start and
/// seed always carve the same walls.
pub fn generate_maze<O>(
    maze: &mut Maze,
    start: Coord,
    seed: Option<u64>,
    observer: &mut O,
) -> Result<(), MazeError>
where
    O: MazeObserver + ?Sized,
{
    let mut rng = get_rng(seed);
    generate_maze_with_rng(maze, start, &mut rng, observer)
}

/// Same as [`generate_maze`] with a caller-owned random source.
///
/// # Errors
/// `MazeError::OutOfBounds` if `start` lies outside the maze.
pub fn generate_maze_with_rng<R, O>(
    maze: &mut Maze,
    start: Coord,
    rng: &mut R,
    observer: &mut O,
) -> Result<(), MazeError>
where
    R: Rng,
    O: MazeObserver + ?Sized,
{
    if !maze.is_in_bounds(start) {
        return Err(MazeError::OutOfBounds { coord: start });
    }

    // Boundary openings lead outside, not into another cell
    for (coord, side) in [(maze.entrance(), ENTRANCE_SIDE), (maze.exit(), EXIT_SIDE)] {
        maze.open_boundary(coord, side)?;
        let cell = maze[coord];
        observer.notify(maze, MazeEvent::CellUpdated { coord, cell });
    }

    let carved = recursive_backtrack(maze, start, rng, observer)?;
    maze.reset_visited();

    tracing::debug!(
        rows = maze.rows(),
        cols = maze.cols(),
        carved,
        passages = maze.internal_passages(),
        "[generator] carved maze"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::{Cell, Direction};
    use crate::observer::Trace;

    /// Counts the cells reachable from the entrance through passages.
    fn flood_fill(maze: &Maze) -> usize {
        let mut seen = vec![false; maze.len()];
        let index = |(r, c): Coord| r * maze.cols() + c;
        let mut stack = vec![maze.entrance()];
        seen[index(maze.entrance())] = true;
        let mut count = 0;
        while let Some(cell) = stack.pop() {
            count += 1;
            for direction in Direction::ALL {
                if let Some(next) = maze.neighbor(cell, direction) {
                    if maze.is_passage(cell, direction) && !seen[index(next)] {
                        seen[index(next)] = true;
                        stack.push(next);
                    }
                }
            }
        }
        count
    }

    /// Every wall must agree with the wall facing it from the other side.
    fn walls_are_consistent(maze: &Maze) -> bool {
        maze.cells().all(|(coord, cell)| {
            Direction::ALL.iter().all(|&direction| {
                match maze.neighbor(coord, direction) {
                    Some(next) => {
                        cell.has_wall(direction) == maze[next].has_wall(direction.opposite())
                    }
                    None => true,
                }
            })
        })
    }

    fn boundary_openings(maze: &Maze) -> Vec<(Coord, Direction)> {
        maze.cells()
            .flat_map(move |(coord, cell)| {
                Direction::ALL
                    .into_iter()
                    .filter(move |&d| !cell.has_wall(d) && maze.neighbor(coord, d).is_none())
                    .map(move |d| (coord, d))
            })
            .collect()
    }

    #[test]
    fn test_generated_mazes_are_perfect() {
        for rows in 1..=7 {
            for cols in 1..=7 {
                for seed in 0..4 {
                    let mut maze = Maze::new(rows, cols).unwrap();
                    generate_maze(&mut maze, (0, 0), Some(seed), &mut ()).unwrap();

                    assert!(walls_are_consistent(&maze), "{rows}x{cols} seed {seed}");
                    assert_eq!(maze.internal_passages(), rows * cols - 1);
                    assert_eq!(flood_fill(&maze), rows * cols);
                    assert!(maze.cells().all(|(_, cell)| !cell.visited));
                }
            }
        }
    }

    #[test]
    fn test_entrance_and_exit_are_the_only_boundary_openings() {
        for seed in 0..10 {
            let mut maze = Maze::new(5, 8).unwrap();
            generate_maze(&mut maze, (0, 0), Some(seed), &mut ()).unwrap();
            assert_eq!(
                boundary_openings(&maze),
                vec![((0, 0), ENTRANCE_SIDE), ((4, 7), EXIT_SIDE)]
            );
        }
    }

    #[test]
    fn test_generation_is_deterministic_for_a_seed() {
        let mut first = Maze::new(12, 17).unwrap();
        let mut second = Maze::new(12, 17).unwrap();
        generate_maze(&mut first, (0, 0), Some(42), &mut ()).unwrap();
        generate_maze(&mut second, (0, 0), Some(42), &mut ()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_unseeded_generation_is_still_perfect() {
        let mut maze = Maze::new(10, 10).unwrap();
        generate_maze(&mut maze, (0, 0), None, &mut ()).unwrap();
        assert_eq!(maze.internal_passages(), 99);
        assert_eq!(flood_fill(&maze), 100);
    }

    #[test]
    fn test_single_cell_maze() {
        let mut maze = Maze::new(1, 1).unwrap();
        let mut trace = Trace::new();
        generate_maze(&mut maze, (0, 0), Some(1), &mut trace).unwrap();

        let cell = maze[(0, 0)];
        assert!(!cell.left && !cell.right);
        assert!(cell.top && cell.bottom);
        assert_eq!(maze.internal_passages(), 0);
        // Entrance, exit, then the carve finishing on the only cell
        let updates = trace.updated_cells().collect::<Vec<_>>();
        assert_eq!(updates.len(), 3);
        assert!(updates.iter().all(|(coord, _)| *coord == (0, 0)));
    }

    #[test]
    fn test_boundary_updates_come_first() {
        let mut maze = Maze::new(3, 3).unwrap();
        let mut trace = Trace::new();
        generate_maze(&mut maze, (0, 0), Some(5), &mut trace).unwrap();

        let updates = trace.updated_cells().collect::<Vec<_>>();
        assert_eq!(updates.len(), 2 + 9);
        assert_eq!(updates[0].0, (0, 0));
        assert!(!updates[0].1.left);
        assert_eq!(updates[1].0, (2, 2));
        assert!(!updates[1].1.right);
    }

    #[test]
    fn test_large_maze_does_not_overflow_the_stack() {
        let mut maze = Maze::new(400, 400).unwrap();
        generate_maze(&mut maze, (0, 0), Some(9), &mut ()).unwrap();
        assert_eq!(maze.internal_passages(), 400 * 400 - 1);
    }

    #[test]
    fn test_rejects_start_out_of_bounds() {
        let mut maze = Maze::new(2, 2).unwrap();
        assert_eq!(
            generate_maze(&mut maze, (2, 0), Some(0), &mut ()),
            Err(MazeError::OutOfBounds { coord: (2, 0) })
        );
        assert!(maze.cells().all(|(_, cell)| *cell == Cell::CLOSED));
    }
}
