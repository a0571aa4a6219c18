use std::io;
use std::io::BufRead;
use std::io::StdinLock;
use std::io::Stdout;
use std::io::Write;
use std::thread;
use std::time::Duration;

use crossterm::cursor;
use crossterm::execute;
use crossterm::queue;
use crossterm::style;
use crossterm::terminal;
use tracing::warn;

use crate::prompt;
use crate::prompt::Choice;
use crate::render::Renderer;
use crate::shell::Decision;
use crate::shell::Frame;
use crate::shell::Shell;
use crate::shell::TerminalSize;

/// Ask the host terminal for its size.
pub fn terminal_size() -> io::Result<TerminalSize> {
    let (cols, rows) = terminal::size()?;

    Ok(TerminalSize::new(rows, cols))
}

/// A [`Shell`] drawing with ANSI escapes to `out` and reading answers line by line from `input`.
pub struct Terminal<W, I> {
    out: W,
    input: I,
    renderer: Renderer,
}

impl Terminal<Stdout, StdinLock<'static>> {
    pub fn stdio(renderer: Renderer) -> Self {
        Self::new(io::stdout(), io::stdin().lock(), renderer)
    }
}

impl<W: Write, I: BufRead> Terminal<W, I> {
    pub fn new(out: W, input: I, renderer: Renderer) -> Self {
        Self {
            out,
            input,
            renderer,
        }
    }

    pub fn into_inner(self) -> (W, I) {
        (self.out, self.input)
    }

    /// `None` once the input is exhausted.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();

        if self.input.read_line(&mut line)? == 0 {
            Ok(None)
        } else {
            Ok(Some(line))
        }
    }

    fn print_line(&mut self, line: &str) -> io::Result<()> {
        execute!(self.out, style::Print(line), cursor::MoveToNextLine(1))
    }

    fn ask_choice(&mut self) -> io::Result<Option<Choice>> {
        loop {
            self.print_line("All cells are dead, add more?")?;
            self.print_line("1. Yes")?;
            self.print_line("2. No")?;

            let Some(line) = self.read_line()? else {
                return Ok(None);
            };

            match prompt::parse_choice(&line) {
                Ok(choice) => return Ok(Some(choice)),
                Err(e) => {
                    warn!("Rejected answer: {e}");
                    self.print_line(&e.to_string())?;
                }
            }
        }
    }

    fn ask_count(&mut self) -> io::Result<Option<usize>> {
        loop {
            execute!(self.out, style::Print("Number of cells to add: "))?;

            let Some(line) = self.read_line()? else {
                return Ok(None);
            };

            match prompt::parse_count(&line) {
                Ok(count) => return Ok(Some(count)),
                Err(e) => {
                    warn!("Rejected cell count: {e}");
                    self.print_line(&e.to_string())?;
                }
            }
        }
    }

    /// Blocks until the user presses enter, or the input is closed.
    pub fn wait_for_enter(&mut self) -> io::Result<()> {
        execute!(self.out, style::Print("Press Enter to exit..."))?;
        self.read_line()?;

        Ok(())
    }
}

impl<W: Write, I: BufRead> Shell for Terminal<W, I> {
    fn present(&mut self, frame: &Frame<'_>) -> io::Result<()> {
        queue!(
            self.out,
            terminal::Clear(terminal::ClearType::All),
            cursor::MoveTo(0, 0),
        )?;

        for line in self.renderer.render(frame).lines() {
            queue!(self.out, style::Print(line), cursor::MoveToNextLine(1))?;
        }

        self.out.flush()
    }

    fn pause(&mut self, delay: Duration) {
        thread::sleep(delay);
    }

    fn ask_repopulate(&mut self, frame: &Frame<'_>) -> io::Result<Decision> {
        self.present(frame)?;

        // A closed input counts as "no"
        let Some(Choice::Yes) = self.ask_choice()? else {
            return Ok(Decision::Quit);
        };

        match self.ask_count()? {
            Some(count) => Ok(Decision::Repopulate(count)),
            None => Ok(Decision::Quit),
        }
    }
}

#[cfg(test)]
mod test {
    use std::io::Cursor;

    use super::Terminal;
    use crate::grid::Grid;
    use crate::render::Renderer;
    use crate::shell::Decision;
    use crate::shell::Frame;
    use crate::shell::Shell;

    fn terminal(input: &str) -> Terminal<Vec<u8>, Cursor<Vec<u8>>> {
        Terminal::new(
            Vec::new(),
            Cursor::new(input.as_bytes().to_vec()),
            Renderer::new('#', '.'),
        )
    }

    fn output(t: Terminal<Vec<u8>, Cursor<Vec<u8>>>) -> String {
        let (out, _) = t.into_inner();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn present_draws_every_row() {
        let mut grid = Grid::new(2, 2);
        grid.set_alive(1, 0);

        let frame = Frame {
            generation: 4,
            population: 1,
            grid: &grid,
        };

        let mut t = terminal("");
        t.present(&frame).unwrap();

        let out = output(t);
        assert!(out.contains("Generation 4 | live cells: 1"));
        assert!(out.contains(".."));
        assert!(out.contains("#."));
    }

    #[test]
    fn repopulate_after_retries() {
        let grid = Grid::new(2, 2);
        let frame = Frame {
            generation: 2,
            population: 0,
            grid: &grid,
        };

        let mut t = terminal("what\n1\nmany\n12\n");
        let decision = t.ask_repopulate(&frame).unwrap();

        assert_eq!(decision, Decision::Repopulate(12));

        let out = output(t);
        assert!(out.contains("Expected 1 (yes) or 2 (no), found \"what\""));
        assert!(out.contains("found \"many\""));
    }

    #[test]
    fn decline() {
        let grid = Grid::new(1, 1);
        let frame = Frame {
            generation: 2,
            population: 0,
            grid: &grid,
        };

        let mut t = terminal("2\n");

        assert_eq!(t.ask_repopulate(&frame).unwrap(), Decision::Quit);
    }

    #[test]
    fn closed_input_quits() {
        let grid = Grid::new(1, 1);
        let frame = Frame {
            generation: 2,
            population: 0,
            grid: &grid,
        };

        assert_eq!(terminal("").ask_repopulate(&frame).unwrap(), Decision::Quit);
        assert_eq!(terminal("y\n").ask_repopulate(&frame).unwrap(), Decision::Quit);
    }
}
