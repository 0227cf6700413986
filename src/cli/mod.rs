pub mod output;
pub mod pages;
pub mod routes;
mod shell;
pub mod ui;

pub use shell::{
    dispatch, handle_line, load_context, run_cli, CliArgs, CliError, LineError, LoopControl,
};
