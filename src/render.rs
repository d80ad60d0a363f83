use std::io::Write;

use crossterm::{
    cursor, queue,
    style::{self, Color, Stylize},
    terminal::{self, ClearType},
};

use crate::{
    maze::{Cell, Coord, Maze, grid::Grid},
    observer::{MazeEvent, MazeObserver, Move},
};

/// Character columns used by one cell, walls excluded.
const CELL_INNER_WIDTH: usize = 3;
const CELL_STRIDE: usize = CELL_INNER_WIDTH + 1;

/// Color of forward solver moves.
const FORWARD_COLOR: Color = Color::Red;
/// Color of moves taken back after a dead end.
const UNDO_COLOR: Color = Color::DarkGrey;

#[derive(Debug, Clone, Copy, PartialEq)]
struct Glyph {
    symbol: char,
    color: Option<Color>,
}

impl Glyph {
    const BLANK: Glyph = Glyph::plain(' ');

    const fn plain(symbol: char) -> Self {
        Glyph {
            symbol,
            color: None,
        }
    }

    const fn colored(symbol: char, color: Color) -> Self {
        Glyph {
            symbol,
            color: Some(color),
        }
    }
}

/// Character picture of a maze and the solver trace drawn over it.
///
/// Cell `(r, c)` has its center at line `2r + 1`, column `4c + 2`; walls sit
/// on the even lines and on every fourth column.
#[derive(Debug, Clone)]
pub struct Canvas {
    glyphs: Grid<Glyph>,
    /// Positions changed since the last [`Canvas::draw_changes`].
    dirty: Vec<(usize, usize)>,
}

impl Canvas {
    /// Draws every wall of `maze` and nothing else.
    pub fn new(maze: &Maze) -> Self {
        let mut canvas = Canvas {
            glyphs: Grid::new(
                maze.rows() * 2 + 1,
                maze.cols() * CELL_STRIDE + 1,
                Glyph::BLANK,
            ),
            dirty: Vec::new(),
        };
        for row in 0..=maze.rows() {
            for col in 0..=maze.cols() {
                canvas.glyphs[(row * 2, col * CELL_STRIDE)] = Glyph::plain('+');
            }
        }
        maze.cells().for_each(|(coord, cell)| canvas.draw_cell(coord, cell));
        canvas.dirty.clear();
        canvas
    }

    fn put(&mut self, pos: (usize, usize), glyph: Glyph) {
        if self.glyphs[pos] != glyph {
            self.glyphs[pos] = glyph;
            self.dirty.push(pos);
        }
    }

    /// Number of glyphs changed and not drawn yet.
    pub fn pending_changes(&self) -> usize {
        self.dirty.len()
    }

    /// Number of terminal lines.
    pub fn height(&self) -> usize {
        self.glyphs.rows()
    }

    /// Number of terminal columns.
    pub fn width(&self) -> usize {
        self.glyphs.cols()
    }

    fn center(coord: Coord) -> (usize, usize) {
        (coord.0 * 2 + 1, coord.1 * CELL_STRIDE + CELL_INNER_WIDTH / 2 + 1)
    }

    /// Redraws the four walls around one cell.
    pub fn draw_cell(&mut self, coord: Coord, cell: &Cell) {
        let (top, left) = (coord.0 * 2, coord.1 * CELL_STRIDE);
        for dx in 1..=CELL_INNER_WIDTH {
            self.put((top, left + dx), wall_glyph(cell.top, '-'));
            self.put((top + 2, left + dx), wall_glyph(cell.bottom, '-'));
        }
        self.put((top + 1, left), wall_glyph(cell.left, '|'));
        self.put((top + 1, left + CELL_STRIDE), wall_glyph(cell.right, '|'));
    }

    /// Marks the cell the solver stands on.
    pub fn draw_visit(&mut self, coord: Coord) {
        self.put(Canvas::center(coord), Glyph::colored('*', FORWARD_COLOR));
    }

    /// Draws a segment between the centers of two adjacent cells.
    pub fn draw_move(&mut self, step: Move) {
        let color = if step.undo { UNDO_COLOR } else { FORWARD_COLOR };
        let (r1, c1) = Canvas::center(step.from);
        let (r2, c2) = Canvas::center(step.to);
        let (symbol, positions) = if r1 == r2 {
            let cols = c1.min(c2)..=c1.max(c2);
            ('─', cols.map(|col| (r1, col)).collect::<Vec<_>>())
        } else {
            let rows = r1.min(r2)..=r1.max(r2);
            ('│', rows.map(|row| (row, c1)).collect::<Vec<_>>())
        };
        for pos in positions {
            let symbol = if pos == (r1, c1) || pos == (r2, c2) {
                '*'
            } else {
                symbol
            };
            self.put(pos, Glyph::colored(symbol, color));
        }
    }

    pub fn apply(&mut self, event: &MazeEvent) {
        match event {
            MazeEvent::CellUpdated { coord, cell } => self.draw_cell(*coord, cell),
            MazeEvent::Entered(coord) => self.draw_visit(*coord),
            MazeEvent::Move(step) => self.draw_move(*step),
        }
    }

    /// Plain text of one line, without colors.
    pub fn line(&self, row: usize) -> String {
        (0..self.width())
            .map(|col| self.glyphs[(row, col)].symbol)
            .collect()
    }

    fn queue_glyph<W: Write>(&self, out: &mut W, pos: (usize, usize)) -> std::io::Result<()> {
        let glyph = self.glyphs[pos];

        #[cfg(debug_assertions)]
        {
            use unicode_width::UnicodeWidthChar;
            assert_eq!(
                glyph.symbol.width(),
                Some(1),
                "Each glyph must occupy exactly one character width."
            );
        }

        match glyph.color {
            Some(color) => queue!(out, style::PrintStyledContent(glyph.symbol.with(color))),
            None => queue!(out, style::Print(glyph.symbol)),
        }
    }

    fn queue_line<W: Write>(&self, out: &mut W, row: usize) -> std::io::Result<()> {
        for col in 0..self.width() {
            self.queue_glyph(out, (row, col))?;
        }
        Ok(())
    }

    /// Prints the canvas line by line, shifted right and down by `origin`.
    pub fn print<W: Write>(&self, out: &mut W, origin: (u16, u16)) -> std::io::Result<()> {
        let indent = " ".repeat(origin.0 as usize);
        for _ in 0..origin.1 {
            queue!(out, style::Print("\n"))?;
        }
        for row in 0..self.height() {
            queue!(out, style::Print(&indent))?;
            self.queue_line(out, row)?;
            queue!(out, style::Print("\n"))?;
        }
        out.flush()
    }

    /// Draws the canvas in place with its top-left corner at `origin`.
    pub fn draw_at<W: Write>(&mut self, out: &mut W, origin: (u16, u16)) -> std::io::Result<()> {
        for row in 0..self.height() {
            queue!(out, cursor::MoveTo(origin.0, offset(origin.1, row)))?;
            self.queue_line(out, row)?;
        }
        self.dirty.clear();
        out.flush()
    }

    /// Draws only the glyphs changed since the last draw.
    pub fn draw_changes<W: Write>(
        &mut self,
        out: &mut W,
        origin: (u16, u16),
    ) -> std::io::Result<()> {
        let mut dirty = std::mem::take(&mut self.dirty);
        dirty.sort_unstable();
        dirty.dedup();
        for &(row, col) in &dirty {
            queue!(out, cursor::MoveTo(offset(origin.0, col), offset(origin.1, row)))?;
            self.queue_glyph(out, (row, col))?;
        }
        // Keep the allocation for the next batch
        dirty.clear();
        self.dirty = dirty;
        out.flush()
    }
}

fn wall_glyph(present: bool, symbol: char) -> Glyph {
    if present {
        Glyph::plain(symbol)
    } else {
        Glyph::BLANK
    }
}

/// Terminal coordinate `by` cells past `base`, clamped to the last one.
fn offset(base: u16, by: usize) -> u16 {
    base.saturating_add(u16::try_from(by).unwrap_or(u16::MAX))
}

/// Redraws the changed part of the maze on the terminal after every event.
///
/// Write errors cannot travel through the observer, so the first one is kept
/// and drawing stops until [`TerminalView::finish`] reports it.
pub struct TerminalView<W: Write> {
    out: W,
    canvas: Canvas,
    origin: (u16, u16),
    error: Option<std::io::Error>,
}

impl<W: Write> TerminalView<W> {
    /// Clears the screen and draws the maze in its current state.
    pub fn new(mut out: W, maze: &Maze, origin: (u16, u16)) -> std::io::Result<Self> {
        queue!(out, terminal::Clear(ClearType::All), cursor::Hide)?;
        let mut canvas = Canvas::new(maze);
        canvas.draw_at(&mut out, origin)?;
        Ok(Self {
            out,
            canvas,
            origin,
            error: None,
        })
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    /// Puts the cursor back below the maze and hands back the writer.
    pub fn finish(mut self) -> std::io::Result<W> {
        if let Some(err) = self.error.take() {
            return Err(err);
        }
        let below = offset(self.origin.1, self.canvas.height());
        queue!(self.out, cursor::MoveTo(0, below), cursor::Show)?;
        self.out.flush()?;
        Ok(self.out)
    }
}

impl<W: Write> MazeObserver for TerminalView<W> {
    fn notify(&mut self, _maze: &Maze, event: MazeEvent) {
        if self.error.is_some() {
            return;
        }
        self.canvas.apply(&event);
        if let Err(err) = self.canvas.draw_changes(&mut self.out, self.origin) {
            tracing::error!("[renderer] failed to draw maze: {err}");
            self.error = Some(err);
        }
    }
}
