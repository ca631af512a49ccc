//! `generator <output.cpp> <output.hpp> <input.json>...`

use clap::Parser;
use resgen::cli::{self, GenerateArgs, Verbosity};

#[derive(Parser, Debug)]
#[command(
    name = "generator",
    version,
    about = "Generate a C++ resource registry from JSON resource maps"
)]
struct GeneratorCli {
    #[command(flatten)]
    args: GenerateArgs,

    #[command(flatten)]
    verbosity: Verbosity,
}

fn main() {
    let parsed = GeneratorCli::parse();
    cli::init_logging(parsed.verbosity);
    std::process::exit(cli::exit_code(cli::cmd_generate(&parsed.args)));
}
