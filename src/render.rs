use std::fmt::Write;

use crate::cell::Cell;
use crate::shell::Frame;

/// Glyph for a live cell, `U+25A0`.
pub const ALIVE_GLYPH: char = '■';

pub const DEAD_GLYPH: char = ' ';

/// Turns frames into text: a status line followed by one line per grid row.
pub struct Renderer {
    /// The frame buffer. Reused between frames.
    fb: String,

    alive: char,
    dead: char,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(ALIVE_GLYPH, DEAD_GLYPH)
    }
}

impl Renderer {
    pub fn new(alive: char, dead: char) -> Self {
        Self {
            fb: String::new(),
            alive,
            dead,
        }
    }

    pub fn header(frame: &Frame<'_>) -> String {
        format!(
            "Generation {} | live cells: {}",
            frame.generation, frame.population
        )
    }

    /// Render `frame`. Every line, including the last one, ends with `\n`.
    pub fn render(&mut self, frame: &Frame<'_>) -> &str {
        let grid = frame.grid;

        // Glyphs can be up to 4 bytes each, plus a newline per row
        self.fb.clear();
        self.fb.reserve(4 * grid.len() + grid.rows() + 64);

        // Writing to a `String` can't fail
        let _ = writeln!(self.fb, "{}", Self::header(frame));

        let (alive, dead) = (self.alive, self.dead);
        let glyph = |cell: &Cell| if cell.is_alive() { alive } else { dead };

        for row in grid.iter_rows() {
            self.fb.extend(row.iter().map(glyph));
            self.fb.push('\n');
        }

        &self.fb
    }
}

#[cfg(test)]
mod test {
    use super::Renderer;
    use crate::grid::Grid;
    use crate::shell::Frame;

    #[test]
    fn default_glyphs() {
        let mut grid = Grid::new(2, 3);
        grid.set_alive(0, 1);
        grid.set_alive(1, 2);

        let frame = Frame {
            generation: 1,
            population: 2,
            grid: &grid,
        };

        let mut r = Renderer::default();

        assert_eq!(
            r.render(&frame),
            "Generation 1 | live cells: 2\n ■ \n  ■\n"
        );
    }

    #[test]
    fn empty_grid_has_only_header() {
        let grid = Grid::new(0, 10);
        let frame = Frame {
            generation: 9,
            population: 0,
            grid: &grid,
        };

        let mut r = Renderer::default();

        assert_eq!(r.render(&frame), "Generation 9 | live cells: 0\n");
    }
}
