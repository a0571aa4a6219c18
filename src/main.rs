use std::io;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use termlife::config::Args;
use termlife::io::Terminal;
use termlife::shell::TerminalSize;
use termlife::simulation::Simulation;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    // Get the width and height of the terminal
    let detected = if args.needs_detection() {
        termlife::io::terminal_size().context("Failed to read the terminal size")?
    } else {
        TerminalSize::new(0, 0)
    };
    let size = args.terminal_size(detected);

    let mut sim = Simulation::for_terminal(size, args.rng()).with_delay(args.delay());
    let grid = sim.grid();
    info!(rows = grid.rows(), cols = grid.cols(), "starting simulation");

    sim.seed();

    let mut terminal = Terminal::stdio(args.renderer());
    let summary = sim.run(&mut terminal).context("Terminal I/O failed")?;

    info!(
        generation = summary.generation,
        population = summary.population,
        "done"
    );

    if !args.no_wait {
        terminal.wait_for_enter()?;
    }

    Ok(())
}
