pub mod commands;
pub mod core;
mod help;
mod io;
pub mod output;
mod shell;

pub use shell::run_cli;
