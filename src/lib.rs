pub mod cell;
pub mod config;
pub mod grid;
pub mod io;
pub mod prompt;
pub mod render;
pub mod rule_set;
pub mod shell;
pub mod simulation;

pub type ScreenSize = u16;
