use anyhow::{Context, Result, bail, ensure};
use std::{fmt::Display, str::FromStr};

/// Tile address `z/x/y`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TileCoord {
	pub z: u8,
	pub x: u32,
	pub y: u32,
}

impl FromStr for TileCoord {
	type Err = anyhow::Error;

	fn from_str(text: &str) -> Result<Self> {
		let parts = text.split('/').collect::<Vec<_>>();
		let [z, x, y] = parts.as_slice() else {
			bail!("tile must be given as z/x/y, got {text:?}");
		};
		let z: u8 = z.parse().with_context(|| format!("invalid zoom level {z:?}"))?;
		let x: u32 = x.parse().with_context(|| format!("invalid x {x:?}"))?;
		let y: u32 = y.parse().with_context(|| format!("invalid y {y:?}"))?;

		ensure!(z <= 30, "zoom level {z} is too high");
		let max = 1u32 << z;
		ensure!(x < max && y < max, "tile {x}/{y} is outside zoom level {z}");
		Ok(TileCoord { z, x, y })
	}
}

impl Display for TileCoord {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}/{}/{}", self.z, self.x, self.y)
	}
}
