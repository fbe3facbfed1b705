use super::{CompositeGeometryTrait, Coordinates, GeometryTrait};
use std::fmt::Debug;

/// A closed ring: the last vertex repeats the first.
#[derive(Clone, PartialEq, Eq)]
pub struct RingGeometry(pub Vec<Coordinates>);

impl RingGeometry {
	/// Builds a ring from its distinct vertices by appending the first vertex again.
	#[must_use]
	pub fn closed(mut vertices: Vec<Coordinates>) -> Self {
		if let Some(first) = vertices.first().copied() {
			vertices.push(first);
		}
		Self(vertices)
	}

	#[must_use]
	pub fn is_closed(&self) -> bool {
		!self.0.is_empty() && self.0.first() == self.0.last()
	}
}

impl GeometryTrait for RingGeometry {
	fn for_each_coordinate(&self, visit: &mut dyn FnMut(&Coordinates)) {
		self.0.iter().for_each(visit);
	}
}

impl CompositeGeometryTrait<Coordinates> for RingGeometry {
	fn as_vec(&self) -> &Vec<Coordinates> {
		&self.0
	}
	fn into_inner(self) -> Vec<Coordinates> {
		self.0
	}
}

impl Debug for RingGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

/// A shell ring followed by zero or more hole rings.
#[derive(Clone, PartialEq, Eq)]
pub struct PolygonGeometry(pub Vec<RingGeometry>);

impl PolygonGeometry {
	#[must_use]
	pub fn shell(&self) -> Option<&RingGeometry> {
		self.0.first()
	}

	#[must_use]
	pub fn holes(&self) -> &[RingGeometry] {
		self.0.get(1..).unwrap_or_default()
	}
}

impl GeometryTrait for PolygonGeometry {
	fn for_each_coordinate(&self, visit: &mut dyn FnMut(&Coordinates)) {
		self.0.iter().for_each(|ring| ring.for_each_coordinate(visit));
	}
}

impl CompositeGeometryTrait<RingGeometry> for PolygonGeometry {
	fn as_vec(&self) -> &Vec<RingGeometry> {
		&self.0
	}
	fn into_inner(self) -> Vec<RingGeometry> {
		self.0
	}
}

impl Debug for PolygonGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

#[derive(Clone, PartialEq, Eq)]
pub struct MultiPolygonGeometry(pub Vec<PolygonGeometry>);

impl GeometryTrait for MultiPolygonGeometry {
	fn for_each_coordinate(&self, visit: &mut dyn FnMut(&Coordinates)) {
		self.0.iter().for_each(|polygon| polygon.for_each_coordinate(visit));
	}
}

impl CompositeGeometryTrait<PolygonGeometry> for MultiPolygonGeometry {
	fn as_vec(&self) -> &Vec<PolygonGeometry> {
		&self.0
	}
	fn into_inner(self) -> Vec<PolygonGeometry> {
		self.0
	}
}

impl Debug for MultiPolygonGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

crate::impl_from_array!(
	RingGeometry,
	Coordinates,
	PolygonGeometry,
	RingGeometry,
	MultiPolygonGeometry,
	PolygonGeometry
);
