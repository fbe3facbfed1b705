//! Conversion of tile coordinates to WGS84 through the inverse web-mercator projection.

use crate::geo::Coordinates;
use std::f64::consts::PI;

/// Converts tile coordinates of tile `z/x/y` to `[longitude, latitude]` pairs in degrees.
///
/// `extent` is the size of the tile coordinate space. Coordinates outside `0..extent` (the
/// tile buffer) are projected the same way and land in the neighbouring tiles.
#[must_use]
pub fn project(points: &[Coordinates], extent: u32, x: u32, y: u32, z: u8) -> Vec<[f64; 2]> {
	let size = f64::from(extent) * 2f64.powi(i32::from(z));
	let x0 = f64::from(extent) * f64::from(x);
	let y0 = f64::from(extent) * f64::from(y);

	points
		.iter()
		.map(|point| {
			let lon = (f64::from(point.x()) + x0) * 360.0 / size - 180.0;
			let y2 = 180.0 - (f64::from(point.y()) + y0) * 360.0 / size;
			let lat = 360.0 / PI * (y2 * PI / 180.0).exp().atan() - 90.0;
			[lon, lat]
		})
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use approx::assert_relative_eq;
	use rstest::rstest;

	#[rstest]
	#[case::center_of_world(0, 0, 0, [2048, 2048], [0.0, 0.0])]
	#[case::north_west(1, 0, 0, [0, 0], [-180.0, 85.051_128_779_806_6])]
	#[case::center_of_z1(1, 1, 1, [0, 0], [0.0, 0.0])]
	#[case::south_east(1, 1, 1, [4096, 4096], [180.0, -85.051_128_779_806_6])]
	fn projects_points(
		#[case] z: u8,
		#[case] x: u32,
		#[case] y: u32,
		#[case] point: [i32; 2],
		#[case] expected: [f64; 2],
	) {
		let projected = project(&[Coordinates::from(point)], 4096, x, y, z);
		assert_relative_eq!(projected[0][0], expected[0], epsilon = 1e-9);
		assert_relative_eq!(projected[0][1], expected[1], epsilon = 1e-9);
	}

	#[test]
	fn empty_input() {
		assert!(project(&[], 4096, 0, 0, 0).is_empty());
	}
}
