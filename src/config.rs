use std::time::Duration;

use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::render::ALIVE_GLYPH;
use crate::render::DEAD_GLYPH;
use crate::render::Renderer;
use crate::shell::TerminalSize;

/// Conway's Game of Life, in your terminal.
///
/// Logging goes to stderr and is controlled with `RUST_LOG` (default `warn`).
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Args {
    /// Seed for the random initial population. Picked from the OS when missing.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Pause between two generations, in milliseconds.
    #[arg(long, default_value_t = 16)]
    pub delay: u64,

    /// Use this many terminal rows instead of the detected height.
    #[arg(long)]
    pub rows: Option<u16>,

    /// Use this many terminal columns instead of the detected width.
    #[arg(long)]
    pub cols: Option<u16>,

    /// Glyph for a live cell.
    #[arg(long, default_value_t = ALIVE_GLYPH)]
    pub alive: char,

    /// Glyph for a dead cell.
    #[arg(long, default_value_t = DEAD_GLYPH)]
    pub dead: char,

    /// Exit right away instead of waiting for Enter once the simulation stops.
    #[arg(long)]
    pub no_wait: bool,
}

impl Args {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay)
    }

    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    pub fn renderer(&self) -> Renderer {
        Renderer::new(self.alive, self.dead)
    }

    /// Apply the `--rows` and `--cols` overrides on top of the detected size.
    pub fn terminal_size(&self, detected: TerminalSize) -> TerminalSize {
        TerminalSize::new(
            self.rows.unwrap_or(detected.rows),
            self.cols.unwrap_or(detected.cols),
        )
    }

    /// Whether the terminal has to be asked for its size at all.
    pub fn needs_detection(&self) -> bool {
        self.rows.is_none() || self.cols.is_none()
    }
}
