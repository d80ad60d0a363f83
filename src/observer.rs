use std::{sync::mpsc::Sender, time::Duration};

use crate::maze::{Cell, Coord, Maze};

/// One step of the solver between two adjacent cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub from: Coord,
    pub to: Coord,
    /// Set when the step is taken back after a dead end.
    pub undo: bool,
}

/// Progress notifications emitted while a maze is generated or solved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MazeEvent {
    /// A cell reached its final wall state during generation.
    CellUpdated { coord: Coord, cell: Cell },
    /// The solver stepped onto a cell.
    Entered(Coord),
    /// The solver moved forward into a neighbor, or backed out of it.
    Move(Move),
}

/// Receives events synchronously after each mutation.
///
/// Observers only see the maze through a shared reference and cannot
/// influence the algorithm that drives them.
pub trait MazeObserver {
    fn notify(&mut self, maze: &Maze, event: MazeEvent);
}

impl MazeObserver for () {
    fn notify(&mut self, _maze: &Maze, _event: MazeEvent) {}
}

impl<O: MazeObserver + ?Sized> MazeObserver for &mut O {
    fn notify(&mut self, maze: &Maze, event: MazeEvent) {
        (**self).notify(maze, event);
    }
}

/// Forwards events to another thread, e.g. a renderer draining a channel.
impl MazeObserver for Sender<MazeEvent> {
    fn notify(&mut self, _maze: &Maze, event: MazeEvent) {
        // A dropped receiver only means nobody is watching anymore
        let _ = self.send(event);
    }
}

/// Records every event in order.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Trace {
    events: Vec<MazeEvent>,
}

impl Trace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[MazeEvent] {
        &self.events
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn moves(&self) -> impl Iterator<Item = Move> + '_ {
        self.events.iter().filter_map(|event| match event {
            MazeEvent::Move(m) => Some(*m),
            _ => None,
        })
    }

    pub fn forward_moves(&self) -> impl Iterator<Item = Move> + '_ {
        self.moves().filter(|m| !m.undo)
    }

    pub fn undo_moves(&self) -> impl Iterator<Item = Move> + '_ {
        self.moves().filter(|m| m.undo)
    }

    pub fn entered(&self) -> impl Iterator<Item = Coord> + '_ {
        self.events.iter().filter_map(|event| match event {
            MazeEvent::Entered(coord) => Some(*coord),
            _ => None,
        })
    }

    /// Cells reported by generation, in emission order.
    pub fn updated_cells(&self) -> impl Iterator<Item = (Coord, Cell)> + '_ {
        self.events.iter().filter_map(|event| match event {
            MazeEvent::CellUpdated { coord, cell } => Some((*coord, *cell)),
            _ => None,
        })
    }
}

impl MazeObserver for Trace {
    fn notify(&mut self, _maze: &Maze, event: MazeEvent) {
        self.events.push(event);
    }
}

/// Sleeps after every event passed on to the inner observer, to pace animations.
pub struct Paced<O> {
    inner: O,
    delay: Duration,
}

impl<O: MazeObserver> Paced<O> {
    pub fn new(inner: O, delay: Duration) -> Self {
        Self { inner, delay }
    }

    pub fn into_inner(self) -> O {
        self.inner
    }
}

impl<O: MazeObserver> MazeObserver for Paced<O> {
    fn notify(&mut self, maze: &Maze, event: MazeEvent) {
        self.inner.notify(maze, event);
        if !self.delay.is_zero() {
            std::thread::sleep(self.delay);
        }
    }
}
