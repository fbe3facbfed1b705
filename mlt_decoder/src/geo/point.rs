use super::{CompositeGeometryTrait, Coordinates, GeometryTrait};
use std::fmt::Debug;

/// A single vertex.
#[derive(Clone, PartialEq, Eq)]
pub struct PointGeometry(pub Coordinates);

impl PointGeometry {
	#[must_use]
	pub fn new(c: Coordinates) -> Self {
		Self(c)
	}

	#[must_use]
	pub fn x(&self) -> i32 {
		self.0.x()
	}

	#[must_use]
	pub fn y(&self) -> i32 {
		self.0.y()
	}
}

impl GeometryTrait for PointGeometry {
	fn for_each_coordinate(&self, visit: &mut dyn FnMut(&Coordinates)) {
		visit(&self.0);
	}
}

impl Debug for PointGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		self.0.fmt(f)
	}
}

impl<T> From<T> for PointGeometry
where
	Coordinates: From<T>,
{
	fn from(value: T) -> Self {
		Self(Coordinates::from(value))
	}
}

/// An unordered set of points belonging to one feature.
#[derive(Clone, PartialEq, Eq)]
pub struct MultiPointGeometry(pub Vec<PointGeometry>);

impl GeometryTrait for MultiPointGeometry {
	fn for_each_coordinate(&self, visit: &mut dyn FnMut(&Coordinates)) {
		self.0.iter().for_each(|point| visit(&point.0));
	}
}

impl CompositeGeometryTrait<PointGeometry> for MultiPointGeometry {
	fn as_vec(&self) -> &Vec<PointGeometry> {
		&self.0
	}
	fn into_inner(self) -> Vec<PointGeometry> {
		self.0
	}
}

impl Debug for MultiPointGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

crate::impl_from_array!(MultiPointGeometry, PointGeometry);
