use super::Coordinates;
use std::fmt::Debug;

/// Shared interface of all decoded geometry types.
pub trait GeometryTrait: Debug + Clone {
	/// Calls `visit` for every vertex in storage order, including the closing vertex of rings.
	fn for_each_coordinate(&self, visit: &mut dyn FnMut(&Coordinates));

	/// Number of vertices, counting the closing vertex of rings.
	fn num_vertices(&self) -> usize {
		let mut count = 0;
		self.for_each_coordinate(&mut |_| count += 1);
		count
	}

	/// Returns `[x_min, y_min, x_max, y_max]`, or `None` for an empty geometry.
	fn compute_bounds(&self) -> Option<[i32; 4]> {
		let mut bounds: Option<[i32; 4]> = None;
		self.for_each_coordinate(&mut |c| {
			bounds = Some(match bounds {
				None => [c.x(), c.y(), c.x(), c.y()],
				Some([x0, y0, x1, y1]) => [x0.min(c.x()), y0.min(c.y()), x1.max(c.x()), y1.max(c.y())],
			});
		});
		bounds
	}

	/// All vertices in storage order.
	fn to_coordinates(&self) -> Vec<Coordinates> {
		let mut coordinates = Vec::new();
		self.for_each_coordinate(&mut |c| coordinates.push(*c));
		coordinates
	}
}

/// Geometries that are collections of simpler elements, such as a polygon made of rings.
pub trait CompositeGeometryTrait<Item>: Debug + Clone {
	/// Returns an immutable reference to the inner collection of elements.
	fn as_vec(&self) -> &Vec<Item>;

	/// Consumes the composite geometry and returns the inner collection of elements.
	fn into_inner(self) -> Vec<Item>;

	fn is_empty(&self) -> bool {
		self.as_vec().is_empty()
	}

	fn len(&self) -> usize {
		self.as_vec().len()
	}

	fn first(&self) -> Option<&Item> {
		self.as_vec().first()
	}

	fn last(&self) -> Option<&Item> {
		self.as_vec().last()
	}
}
