use crate::{
    maze::{Coord, Direction, Maze},
    observer::{MazeEvent, MazeObserver, Move},
};

/// A cell on the search path and the index of the next direction to probe.
struct Frame {
    coord: Coord,
    next: usize,
}

fn enter<O: MazeObserver + ?Sized>(maze: &mut Maze, coord: Coord, observer: &mut O) {
    maze.set_visited(coord, true);
    observer.notify(maze, MazeEvent::Entered(coord));
}

/// Depth-first search through open passages, probing directions in
/// `Direction::ALL` order.
///
/// A frame resumes probing where it left off once its child branch fails,
/// so moves and undos come out in the same order as a recursive search.
/// Returns the path from `start` to `goal`, both included.
pub(super) fn solve_dfs<O>(
    maze: &mut Maze,
    start: Coord,
    goal: Coord,
    observer: &mut O,
) -> Option<Vec<Coord>>
where
    O: MazeObserver + ?Sized,
{
    enter(maze, start, observer);
    if start == goal {
        return Some(vec![start]);
    }

    let mut stack = vec![Frame {
        coord: start,
        next: 0,
    }];

    while let Some(frame) = stack.last_mut() {
        let current = frame.coord;
        let found = Direction::ALL[frame.next..]
            .iter()
            .enumerate()
            .find_map(|(offset, &direction)| {
                let neighbor = maze.neighbor(current, direction)?;
                (maze.is_passage(current, direction) && !maze.is_visited(neighbor))
                    .then_some((offset, neighbor))
            });

        match found {
            Some((offset, neighbor)) => {
                frame.next += offset + 1;
                let step = Move {
                    from: current,
                    to: neighbor,
                    undo: false,
                };
                observer.notify(maze, MazeEvent::Move(step));
                enter(maze, neighbor, observer);

                if neighbor == goal {
                    let mut path = stack.iter().map(|f| f.coord).collect::<Vec<_>>();
                    path.push(neighbor);
                    return Some(path);
                }
                stack.push(Frame {
                    coord: neighbor,
                    next: 0,
                });
            }
            None => {
                // Dead end: back out to the cell we came from
                stack.pop();
                if let Some(parent) = stack.last() {
                    let step = Move {
                        from: parent.coord,
                        to: current,
                        undo: true,
                    };
                    observer.notify(maze, MazeEvent::Move(step));
                }
            }
        }
    }

    None
}
