mod dfs;

use dfs::solve_dfs;

use crate::{
    maze::{Coord, Maze},
    observer::MazeObserver,
};

/// Searches a path from `start` to `goal`, reporting every step to `observer`.
///
/// Visited flags are cleared first so a maze can be solved more than once.
/// Walls are never touched. Returns the cells of the path, start and goal
/// included, or `None` when the goal cannot be reached.
pub fn solve_path<O>(
    maze: &mut Maze,
    start: Coord,
    goal: Coord,
    observer: &mut O,
) -> Option<Vec<Coord>>
where
    O: MazeObserver + ?Sized,
{
    if !maze.is_in_bounds(start) || !maze.is_in_bounds(goal) {
        tracing::warn!(?start, ?goal, "[solver] start or goal out of bounds");
        return None;
    }

    maze.reset_visited();
    let path = solve_dfs(maze, start, goal, observer);

    match &path {
        Some(path) => tracing::debug!(?start, ?goal, length = path.len(), "[solver] path found"),
        None => tracing::debug!(?start, ?goal, "[solver] goal is unreachable"),
    }
    path
}

/// Solves the maze from its entrance to its exit.
pub fn solve_maze<O>(maze: &mut Maze, observer: &mut O) -> bool
where
    O: MazeObserver + ?Sized,
{
    let (start, goal) = (maze.entrance(), maze.exit());
    solve_path(maze, start, goal, observer).is_some()
}
