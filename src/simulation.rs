use std::io;
use std::time::Duration;

use rand::Rng;
use tracing::debug;
use tracing::info;

use crate::grid::Grid;
use crate::shell::Decision;
use crate::shell::Frame;
use crate::shell::Shell;
use crate::shell::TerminalSize;

/// Default pause between two generations, about 60 generations per second.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(16);

/// Result of a single generation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    Alive { population: usize },

    /// Every cell is dead
    Extinct,
}

/// Where a call to [`Simulation::run`] stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub generation: u64,
    pub population: usize,
}

/// Owns a [`Grid`] and drives it one generation at a time.
pub struct Simulation<R> {
    grid: Grid,

    /// Starts at 1 and goes up once per step.
    generation: u64,

    /// Next generation buffer. Kept around so stepping doesn't allocate.
    next: Vec<bool>,

    delay: Duration,

    rng: R,
}

impl<R: Rng> Simulation<R> {
    /// An all dead simulation on a `rows` x `cols` grid.
    pub fn new(rows: usize, cols: usize, rng: R) -> Self {
        Self::from_grid(Grid::new(rows, cols), rng)
    }

    /// Start from an existing generation, e.g. a hand placed pattern.
    pub fn from_grid(grid: Grid, rng: R) -> Self {
        let next = Vec::with_capacity(grid.len());

        Self {
            grid,
            generation: 1,
            next,
            delay: DEFAULT_DELAY,
            rng,
        }
    }

    /// An all dead simulation filling a terminal of the given size, minus the status margins.
    pub fn for_terminal(size: TerminalSize, rng: R) -> Self {
        let (rows, cols) = size.grid_dimensions();

        Self::new(rows, cols, rng)
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn population(&self) -> usize {
        self.grid.population_count()
    }

    pub fn frame(&self) -> Frame<'_> {
        Frame {
            generation: self.generation,
            population: self.population(),
            grid: &self.grid,
        }
    }

    /// Initial random population.
    ///
    /// Picks a count `p` uniformly between 10% and 100% of the cells, then makes `p` random
    /// cells alive. The same cell can be picked more than once, so the population afterwards
    /// is at most `p`. Returns `p`.
    pub fn seed(&mut self) -> usize {
        let total = self.grid.len();
        let p = self.rng.gen_range(total.div_ceil(10)..=total);

        self.scatter(p);
        info!(requested = p, population = self.population(), "seeded grid");

        p
    }

    /// Makes `count` more random cells alive, with no density bound.
    pub fn repopulate(&mut self, count: usize) {
        self.scatter(count);
        info!(requested = count, population = self.population(), "repopulated grid");
    }

    fn scatter(&mut self, count: usize) {
        if self.grid.is_empty() {
            return;
        }

        let (rows, cols) = (self.grid.rows(), self.grid.cols());

        for _ in 0..count {
            let row = self.rng.gen_range(0..rows);
            let col = self.rng.gen_range(0..cols);

            self.grid.set_alive(row, col);
        }
    }

    /// Advance by one generation.
    ///
    /// Every next state is computed from the current generation before any cell is written.
    pub fn step(&mut self) -> StepOutcome {
        self.grid.snapshot_into(&mut self.next);
        self.grid.commit(&self.next);
        self.generation += 1;

        let population = self.population();
        debug!(generation = self.generation, population, "step");

        if population == 0 {
            StepOutcome::Extinct
        } else {
            StepOutcome::Alive { population }
        }
    }

    /// Run until the shell declines to repopulate an extinct grid.
    pub fn run<S: Shell>(&mut self, shell: &mut S) -> io::Result<RunSummary> {
        loop {
            shell.present(&self.frame())?;

            let outcome = self.step();
            shell.pause(self.delay);

            if outcome == StepOutcome::Extinct {
                match shell.ask_repopulate(&self.frame())? {
                    Decision::Repopulate(count) => self.repopulate(count),
                    Decision::Quit => break,
                }
            }
        }

        info!(generation = self.generation, "simulation stopped");

        Ok(RunSummary {
            generation: self.generation,
            population: self.population(),
        })
    }
}
