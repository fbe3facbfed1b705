mod tools;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_verbosity_flag::{ErrorLevel, Verbosity};
use std::io::{Write, stdout};

// Command line front end of the MLT decoder
#[derive(Parser, Debug)]
#[command(
	author,
	version,
	about,
	long_about = None,
	propagate_version = true,
	disable_help_subcommand = true,
)]
struct Cli {
	#[command(subcommand)]
	command: Commands,

	#[command(flatten)]
	verbose: Verbosity<ErrorLevel>,
}

#[derive(Subcommand, Debug)]
enum Commands {
	/// Print every feature of a tile
	Decode(tools::decode::Subcommand),

	/// Show a summary of the layers of a tile
	Probe(tools::probe::Subcommand),
}

fn main() -> Result<()> {
	let cli = Cli::parse();

	env_logger::Builder::new()
		.filter_level(cli.verbose.log_level_filter())
		.format_timestamp(None)
		.init();

	run(cli, &mut stdout().lock())
}

fn run(cli: Cli, output: &mut dyn Write) -> Result<()> {
	match &cli.command {
		Commands::Decode(arguments) => tools::decode::run(arguments, output),
		Commands::Probe(arguments) => tools::probe::run(arguments, output),
	}
}
