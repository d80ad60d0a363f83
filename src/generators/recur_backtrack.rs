use rand::Rng;

use crate::{
    error::MazeError,
    maze::{Coord, Maze},
    observer::{MazeEvent, MazeObserver},
};

/// Carves a spanning tree from `start` with randomized depth-first backtracking.
///
/// The stack holds the current carving path. The top cell looks at its
/// unvisited neighbors again every time it is revisited, so a branch is
/// finished before any sibling is considered, exactly like the recursive
/// formulation. Returns the number of cells reached.
pub(super) fn recursive_backtrack<R, O>(
    maze: &mut Maze,
    start: Coord,
    rng: &mut R,
    observer: &mut O,
) -> Result<usize, MazeError>
where
    R: Rng,
    O: MazeObserver + ?Sized,
{
    maze.set_visited(start, true);
    let mut carved = 1;

    // The stack keeps only visited cells, each one adjacent to the one below it
    let mut stack = vec![start];

    while let Some(&cell) = stack.last() {
        let unvisited = maze
            .neighbors(cell)
            .filter(|&(_, c)| !maze.is_visited(c))
            .map(|(_, c)| c)
            .collect::<Vec<_>>();

        if unvisited.is_empty() {
            // Dead end: the cell will not change anymore
            stack.pop();
            let state = maze[cell];
            observer.notify(
                maze,
                MazeEvent::CellUpdated {
                    coord: cell,
                    cell: state,
                },
            );
            continue;
        }

        let neighbor = unvisited[rng.random_range(0..unvisited.len())];
        maze.break_wall_between(cell, neighbor)?;
        maze.set_visited(neighbor, true);
        carved += 1;
        stack.push(neighbor);
    }

    Ok(carved)
}
