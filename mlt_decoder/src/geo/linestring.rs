use super::{CompositeGeometryTrait, Coordinates, GeometryTrait};
use std::fmt::Debug;

/// An open sequence of vertices.
#[derive(Clone, PartialEq, Eq)]
pub struct LineStringGeometry(pub Vec<Coordinates>);

impl GeometryTrait for LineStringGeometry {
	fn for_each_coordinate(&self, visit: &mut dyn FnMut(&Coordinates)) {
		self.0.iter().for_each(visit);
	}
}

impl CompositeGeometryTrait<Coordinates> for LineStringGeometry {
	fn as_vec(&self) -> &Vec<Coordinates> {
		&self.0
	}
	fn into_inner(self) -> Vec<Coordinates> {
		self.0
	}
}

impl Debug for LineStringGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

#[derive(Clone, PartialEq, Eq)]
pub struct MultiLineStringGeometry(pub Vec<LineStringGeometry>);

impl GeometryTrait for MultiLineStringGeometry {
	fn for_each_coordinate(&self, visit: &mut dyn FnMut(&Coordinates)) {
		self.0.iter().for_each(|line| line.for_each_coordinate(visit));
	}
}

impl CompositeGeometryTrait<LineStringGeometry> for MultiLineStringGeometry {
	fn as_vec(&self) -> &Vec<LineStringGeometry> {
		&self.0
	}
	fn into_inner(self) -> Vec<LineStringGeometry> {
		self.0
	}
}

impl Debug for MultiLineStringGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

crate::impl_from_array!(LineStringGeometry, Coordinates, MultiLineStringGeometry, LineStringGeometry);
