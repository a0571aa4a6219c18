use std::io;
use std::time::Duration;

use crate::ScreenSize;
use crate::grid::Grid;

/// Rows kept free for the status line and the prompt.
pub const ROW_MARGIN: ScreenSize = 3;

/// Columns kept free so lines never touch the terminal border.
pub const COL_MARGIN: ScreenSize = 1;

/// Size of the host terminal, in character cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalSize {
    pub rows: ScreenSize,
    pub cols: ScreenSize,
}

impl TerminalSize {
    pub const fn new(rows: ScreenSize, cols: ScreenSize) -> Self {
        Self { rows, cols }
    }

    /// Grid dimensions `(rows, cols)` left once the margins are taken out. Terminals smaller
    /// than the margins give a zero sized grid.
    pub fn grid_dimensions(&self) -> (usize, usize) {
        (
            self.rows.saturating_sub(ROW_MARGIN) as usize,
            self.cols.saturating_sub(COL_MARGIN) as usize,
        )
    }
}

/// Everything a renderer needs to draw one generation.
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    pub generation: u64,
    pub population: usize,
    pub grid: &'a Grid,
}

/// The answer to "all cells are dead, add more?".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Scatter this many more live cells and keep going
    Repopulate(usize),

    /// Stop the simulation
    Quit,
}

/// The outside world, as seen by [`crate::simulation::Simulation::run`].
///
/// Implementations own drawing, timing and user input. The simulation only hands over frames
/// and asks for decisions.
pub trait Shell {
    /// Draw a generation.
    fn present(&mut self, frame: &Frame<'_>) -> io::Result<()>;

    /// Wait between two generations.
    fn pause(&mut self, delay: Duration);

    /// Called once the population hits zero. `frame` is the extinct generation.
    fn ask_repopulate(&mut self, frame: &Frame<'_>) -> io::Result<Decision>;
}
