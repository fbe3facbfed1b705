use super::{TileCoord, TileInput};
use anyhow::{Result, bail};
use clap::Args;
use mlt_decoder::{Layer, geo::Feature};
use std::io::Write;

#[derive(Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	#[command(flatten)]
	input: TileInput,

	/// only print the layer with this name
	#[arg(long, short)]
	layer: Option<String>,

	/// print coordinates as longitude/latitude, using the tile address z/x/y
	#[arg(long, short, value_name = "Z/X/Y")]
	tile: Option<TileCoord>,
}

pub fn run(arguments: &Subcommand, output: &mut dyn Write) -> Result<()> {
	let (tile, _, _) = arguments.input.load()?;

	let layers: Vec<&Layer> = match &arguments.layer {
		Some(name) => match tile.find_layer(name) {
			Some(layer) => vec![layer],
			None => bail!("tile has no layer {name:?}"),
		},
		None => tile.layers.iter().collect(),
	};

	for layer in layers {
		writeln!(
			output,
			"layer {:?} (version {}, extent {}, {} features)",
			layer.name,
			layer.version,
			layer.extent,
			layer.len()
		)?;
		for (index, feature) in layer.features.iter().enumerate() {
			write_feature(output, index, feature, arguments.tile)?;
		}
	}
	Ok(())
}

fn write_feature(output: &mut dyn Write, index: usize, feature: &Feature, tile: Option<TileCoord>) -> Result<()> {
	let id = feature.id.map_or_else(|| "null".to_string(), |id| id.to_string());
	write!(output, "  #{index} id={id} ")?;

	match tile {
		Some(coord) => {
			let points = feature
				.geometry
				.project(feature.extent, coord.x, coord.y, coord.z)
				.iter()
				.map(|[lon, lat]| format!("[{lon:.6}, {lat:.6}]"))
				.collect::<Vec<_>>();
			write!(output, "{} [{}]", feature.geometry.get_type(), points.join(", "))?;
		}
		None => write!(output, "{:?}", feature.geometry)?,
	}

	for (key, value) in feature.properties.iter() {
		write!(output, " {key}={value}")?;
	}
	writeln!(output)?;
	Ok(())
}
