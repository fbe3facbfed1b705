use super::TileInput;
use anyhow::Result;
use clap::Args;
use std::io::Write;

#[derive(Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	#[command(flatten)]
	input: TileInput,
}

pub fn run(arguments: &Subcommand, output: &mut dyn Write) -> Result<()> {
	let (tile, metadata, size) = arguments.input.load()?;

	writeln!(
		output,
		"tile: {size} bytes, {} layers, {} features",
		tile.layers.len(),
		tile.num_features()
	)?;
	writeln!(output, "schema: {} feature tables", metadata.feature_tables.len())?;
	for layer in &tile.layers {
		writeln!(
			output,
			"layer {:?}: version {}, extent {}, {} features",
			layer.name,
			layer.version,
			layer.extent,
			layer.len()
		)?;
	}
	Ok(())
}
