pub mod handlers;

use crate::presentation::cli::Cli;
use clap::Parser;
use ipreport_core::error::Result;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    handlers::handle_report(cli.input, cli.output, cli.format)
}
