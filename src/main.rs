use std::path::PathBuf;

use clap::{Parser, Subcommand};
use kohlrahbi::Result;
use kohlrahbi::collect;
use kohlrahbi::logging::{self, LogConfig};
use kohlrahbi::model::EdifactFormat;

fn main() {
    let cli = Cli::parse();
    if let Err(error) = run(cli) {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let log_config = match &cli.log_config {
        Some(path) => LogConfig::from_file(path)?,
        None => LogConfig::from_verbosity(cli.verbose),
    };
    logging::init_logging(&log_config)?;

    match cli.command {
        Command::Conditions(args) => execute_conditions(args),
        Command::FormatOf(args) => execute_format_of(args),
    }
}

fn execute_conditions(args: ConditionsArgs) -> Result<()> {
    for path in collect::collect_conditions(&args.input, &args.output_path)? {
        println!("{}", path.display());
    }
    Ok(())
}

fn execute_format_of(args: FormatOfArgs) -> Result<()> {
    for pruefi in &args.pruefidentifikatoren {
        let format = EdifactFormat::from_pruefidentifikator(pruefi)?;
        println!("{pruefi}\t{format}");
    }
    Ok(())
}

#[derive(Parser)]
#[command(
    name = "kohlrahbi",
    version = concat!("version ", env!("CARGO_PKG_VERSION")),
    about = "Tooling around the conditions of EDIFACT application handbooks (AHB)."
)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// JSON file with the logging configuration; overrides --verbose.
    #[arg(long, global = true)]
    log_config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Merge extracted conditions documents into one file per EDIFACT format.
    Conditions(ConditionsArgs),
    /// Print the EDIFACT format of each Pruefidentifikator.
    FormatOf(FormatOfArgs),
}

#[derive(clap::Args)]
struct ConditionsArgs {
    /// Conditions JSON documents; later files overwrite earlier keys.
    #[arg(long, required = true, num_args = 1..)]
    input: Vec<PathBuf>,

    /// Directory receiving `<FORMAT>/conditions.json`.
    #[arg(long)]
    output_path: PathBuf,
}

#[derive(clap::Args)]
struct FormatOfArgs {
    /// Five digit Pruefidentifikatoren, e.g. 11042.
    #[arg(required = true)]
    pruefidentifikatoren: Vec<String>,
}
