use std::fmt::Debug;

/// One vertex in integer tile coordinates, `0..extent` on both axes for in-tile points.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Coordinates([i32; 2]);

impl Coordinates {
	#[must_use]
	pub fn new(x: i32, y: i32) -> Self {
		Self([x, y])
	}

	#[must_use]
	pub fn x(&self) -> i32 {
		self.0[0]
	}

	#[must_use]
	pub fn y(&self) -> i32 {
		self.0[1]
	}
}

impl From<[i32; 2]> for Coordinates {
	fn from(value: [i32; 2]) -> Self {
		Coordinates(value)
	}
}

impl<'a> From<&'a [i32; 2]> for Coordinates {
	fn from(value: &'a [i32; 2]) -> Self {
		Coordinates(*value)
	}
}

impl From<(i32, i32)> for Coordinates {
	fn from(value: (i32, i32)) -> Self {
		Coordinates([value.0, value.1])
	}
}

impl Debug for Coordinates {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}
