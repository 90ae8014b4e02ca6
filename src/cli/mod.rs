//! Command-line interface layer.

use anyhow::Result;

pub mod args;
pub mod commands;
mod exit_code;
mod report;
mod run;

pub use args::{Arguments, Command};

use exit_code::exit_code_from_result;

pub fn run_cli(args: Arguments) -> Result<i32> {
    let verbose = args.verbose();

    let Some(args) = args.with_command_or_help() else {
        return Ok(0);
    };

    let result = run::run(args)?;
    report::print(&result, verbose);

    Ok(exit_code_from_result(&result))
}
