use super::*;
use crate::projection::project;
use std::fmt::Debug;

/// A decoded feature geometry in tile coordinates.
#[derive(Clone, PartialEq, Eq)]
pub enum Geometry {
	Point(PointGeometry),
	LineString(LineStringGeometry),
	LinearRing(RingGeometry),
	Polygon(PolygonGeometry),
	MultiPoint(MultiPointGeometry),
	MultiLineString(MultiLineStringGeometry),
	MultiPolygon(MultiPolygonGeometry),
}

impl Geometry {
	#[must_use]
	pub fn new_point(value: [i32; 2]) -> Self {
		Self::Point(PointGeometry::from(value))
	}
	#[must_use]
	pub fn new_line_string(value: Vec<[i32; 2]>) -> Self {
		Self::LineString(LineStringGeometry::from(value))
	}
	#[must_use]
	pub fn new_polygon(value: Vec<Vec<[i32; 2]>>) -> Self {
		Self::Polygon(PolygonGeometry::from(value))
	}
	#[must_use]
	pub fn new_multi_point(value: Vec<[i32; 2]>) -> Self {
		Self::MultiPoint(MultiPointGeometry::from(value))
	}
	#[must_use]
	pub fn new_multi_line_string(value: Vec<Vec<[i32; 2]>>) -> Self {
		Self::MultiLineString(MultiLineStringGeometry::from(value))
	}
	#[must_use]
	pub fn new_multi_polygon(value: Vec<Vec<Vec<[i32; 2]>>>) -> Self {
		Self::MultiPolygon(MultiPolygonGeometry::from(value))
	}

	#[must_use]
	pub fn get_type(&self) -> &'static str {
		match self {
			Geometry::Point(_) => "Point",
			Geometry::LineString(_) => "LineString",
			Geometry::LinearRing(_) => "LinearRing",
			Geometry::Polygon(_) => "Polygon",
			Geometry::MultiPoint(_) => "MultiPoint",
			Geometry::MultiLineString(_) => "MultiLineString",
			Geometry::MultiPolygon(_) => "MultiPolygon",
		}
	}

	fn as_trait(&self) -> &dyn DynGeometry {
		match self {
			Geometry::Point(g) => g,
			Geometry::LineString(g) => g,
			Geometry::LinearRing(g) => g,
			Geometry::Polygon(g) => g,
			Geometry::MultiPoint(g) => g,
			Geometry::MultiLineString(g) => g,
			Geometry::MultiPolygon(g) => g,
		}
	}

	/// Converts every vertex to `[longitude, latitude]` for the tile `z/x/y`.
	#[must_use]
	pub fn project(&self, extent: u32, x: u32, y: u32, z: u8) -> Vec<[f64; 2]> {
		project(&self.to_coordinates(), extent, x, y, z)
	}
}

/// Object-safe view of [`GeometryTrait`] so the enum can delegate without repeating the match.
trait DynGeometry {
	fn visit(&self, visit: &mut dyn FnMut(&Coordinates));
}

impl<G: GeometryTrait> DynGeometry for G {
	fn visit(&self, visit: &mut dyn FnMut(&Coordinates)) {
		self.for_each_coordinate(visit);
	}
}

impl GeometryTrait for Geometry {
	fn for_each_coordinate(&self, visit: &mut dyn FnMut(&Coordinates)) {
		self.as_trait().visit(visit);
	}
}

impl Debug for Geometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let inner: &dyn Debug = match self {
			Geometry::Point(g) => g,
			Geometry::LineString(g) => g,
			Geometry::LinearRing(g) => g,
			Geometry::Polygon(g) => g,
			Geometry::MultiPoint(g) => g,
			Geometry::MultiLineString(g) => g,
			Geometry::MultiPolygon(g) => g,
		};
		f.debug_tuple(self.get_type()).field(inner).finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use approx::assert_relative_eq;

	#[test]
	fn debug_names_the_type() {
		assert_eq!(format!("{:?}", Geometry::new_point([100, 200])), "Point([100, 200])");
		assert_eq!(
			format!("{:?}", Geometry::new_line_string(vec![[0, 0], [1, 2]])),
			"LineString([[0, 0], [1, 2]])"
		);
	}

	#[test]
	fn delegates_vertex_queries() {
		let geometry = Geometry::new_multi_polygon(vec![
			vec![vec![[0, 0], [4, 0], [4, 4], [0, 0]]],
			vec![vec![[10, 10], [12, 10], [12, 12], [10, 10]]],
		]);
		assert_eq!(geometry.get_type(), "MultiPolygon");
		assert_eq!(geometry.num_vertices(), 8);
		assert_eq!(geometry.compute_bounds(), Some([0, 0, 12, 12]));

		let ring = Geometry::LinearRing(RingGeometry::closed(vec![Coordinates::new(1, 1), Coordinates::new(2, 2)]));
		assert_eq!(ring.num_vertices(), 3);
	}

	#[test]
	fn projects_tile_corners() {
		let geometry = Geometry::new_multi_point(vec![[0, 0], [4096, 4096]]);
		let projected = geometry.project(4096, 0, 0, 0);
		assert_eq!(projected.len(), 2);
		assert_relative_eq!(projected[0][0], -180.0, epsilon = 1e-9);
		assert_relative_eq!(projected[0][1], 85.051_128_779_806_6, epsilon = 1e-9);
		assert_relative_eq!(projected[1][0], 180.0, epsilon = 1e-9);
		assert_relative_eq!(projected[1][1], -85.051_128_779_806_6, epsilon = 1e-9);
	}
}
