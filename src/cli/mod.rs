//! RG-011: CLI subcommands - pack, generate, list, completions.

use crate::core::{config, generator, merge, packer, registry::Registry};
use clap::{Args, CommandFactory, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "resgen",
    version,
    about = "Pack binary resources into embeddable C++ byte arrays with a lookup-by-name registry"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub verbosity: Verbosity,
}

/// Logging verbosity shared by every binary.
#[derive(Args, Debug, Clone, Copy, Default)]
pub struct Verbosity {
    /// More log output on stderr (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

/// Arguments of the packer stage.
#[derive(Args, Debug, Clone)]
pub struct PackArgs {
    /// JSON resource map to write
    pub output: PathBuf,

    /// Files to pack, in order (patterns are expanded unless the path exists)
    #[arg(required = true)]
    pub inputs: Vec<PathBuf>,
}

/// Arguments of the generator stage.
#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    /// C++ source file to write
    pub source: PathBuf,

    /// C++ header file to write
    pub header: PathBuf,

    /// JSON resource maps to merge (later files win)
    #[arg(required = true)]
    pub inputs: Vec<PathBuf>,

    /// Generator config (class name, banner)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Pack files into a JSON resource map
    Pack(PackArgs),

    /// Generate a C++ source/header pair from JSON resource maps
    Generate(GenerateArgs),

    /// Merge and validate resource maps, then list their entries
    List {
        /// JSON resource maps to merge
        #[arg(required = true)]
        inputs: Vec<PathBuf>,
    },

    /// Print shell completions for resgen
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Install the stderr log subscriber. Safe to call more than once.
pub fn init_logging(verbosity: Verbosity) {
    let default = match verbosity.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Dispatch a CLI command.
pub fn dispatch(cmd: Commands) -> Result<(), String> {
    match cmd {
        Commands::Pack(args) => cmd_pack(&args),
        Commands::Generate(args) => cmd_generate(&args),
        Commands::List { inputs } => cmd_list(&inputs),
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "resgen", &mut std::io::stdout());
            Ok(())
        }
    }
}

pub fn cmd_pack(args: &PackArgs) -> Result<(), String> {
    let count = packer::pack(&args.output, &args.inputs)?;
    println!("Packed {} resource(s) into {}", count, args.output.display());
    Ok(())
}

pub fn cmd_generate(args: &GenerateArgs) -> Result<(), String> {
    let cfg = config::load_or_default(args.config.as_deref())?;
    let summary = generator::generate(&args.source, &args.header, &args.inputs, &cfg)?;
    println!(
        "Generated {} + {} ({} resources, {} bytes)",
        args.source.display(),
        args.header.display(),
        summary.resources,
        summary.total_bytes
    );
    Ok(())
}

fn cmd_list(inputs: &[PathBuf]) -> Result<(), String> {
    let registry = load_registry(inputs)?;
    print!("{}", format_listing(&registry));
    Ok(())
}

/// One `<key>\t<identifier>\t<size>` line per entry, then a totals line.
pub fn format_listing(registry: &Registry) -> String {
    let mut out = String::new();
    for (key, record) in registry.iter() {
        out.push_str(&format!("{}\t{}\t{}\n", key, record.identifier, record.size()));
    }
    out.push('\n');
    out.push_str(&format!(
        "{} resource(s), {} bytes\n",
        registry.len(),
        registry.total_size()
    ));
    out
}

fn load_registry(inputs: &[PathBuf]) -> Result<Registry, String> {
    let map = merge::load_and_merge(inputs)?;
    Registry::from_map(&map)
}

/// Report an error the way every binary does and pick the exit code.
pub fn exit_code(result: Result<(), String>) -> i32 {
    match result {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("error: {}", e);
            1
        }
    }
}
