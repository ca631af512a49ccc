//! resgen CLI - pack binary resources and generate a C++ resource registry.

use clap::Parser;
use resgen::cli::{self, Cli};

fn main() {
    let parsed = Cli::parse();
    cli::init_logging(parsed.verbosity);
    std::process::exit(cli::exit_code(cli::dispatch(parsed.command)));
}
