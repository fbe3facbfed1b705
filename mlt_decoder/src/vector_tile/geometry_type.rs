use mlt_core::DecodeError;

/// Geometry tag stored per feature in the geometry type stream.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GeometryType {
	Point = 0,
	LineString = 1,
	Polygon = 2,
	MultiPoint = 3,
	MultiLineString = 4,
	MultiPolygon = 5,
}

impl GeometryType {
	#[must_use]
	pub fn is_polygonal(&self) -> bool {
		matches!(self, GeometryType::Polygon | GeometryType::MultiPolygon)
	}
}

impl TryFrom<u32> for GeometryType {
	type Error = DecodeError;

	fn try_from(value: u32) -> Result<Self, DecodeError> {
		Ok(match value {
			0 => GeometryType::Point,
			1 => GeometryType::LineString,
			2 => GeometryType::Polygon,
			3 => GeometryType::MultiPoint,
			4 => GeometryType::MultiLineString,
			5 => GeometryType::MultiPolygon,
			_ => return Err(DecodeError::UnsupportedGeometryType(value)),
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(0, GeometryType::Point)]
	#[case(1, GeometryType::LineString)]
	#[case(2, GeometryType::Polygon)]
	#[case(3, GeometryType::MultiPoint)]
	#[case(4, GeometryType::MultiLineString)]
	#[case(5, GeometryType::MultiPolygon)]
	fn from_tag(#[case] tag: u32, #[case] expected: GeometryType) {
		assert_eq!(GeometryType::try_from(tag).unwrap(), expected);
		assert_eq!(expected as u32, tag);
	}

	#[test]
	fn unknown_tag() {
		assert_eq!(GeometryType::try_from(6), Err(DecodeError::UnsupportedGeometryType(6)));
	}

	#[test]
	fn polygonal() {
		assert!(GeometryType::Polygon.is_polygonal());
		assert!(GeometryType::MultiPolygon.is_polygonal());
		assert!(!GeometryType::LineString.is_polygonal());
	}
}
