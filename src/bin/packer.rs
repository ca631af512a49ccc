//! `packer <output.json> <input_file>...`

use clap::Parser;
use resgen::cli::{self, PackArgs, Verbosity};

#[derive(Parser, Debug)]
#[command(name = "packer", version, about = "Pack files into a JSON resource map")]
struct PackerCli {
    #[command(flatten)]
    args: PackArgs,

    #[command(flatten)]
    verbosity: Verbosity,
}

fn main() {
    let parsed = PackerCli::parse();
    cli::init_logging(parsed.verbosity);
    std::process::exit(cli::exit_code(cli::cmd_pack(&parsed.args)));
}
