//! Rebuilds nested geometries from the flat streams of a [`GeometryColumn`].
//!
//! The count streams are shared by all features of the column. Every geometry takes exactly the
//! counts and vertices its encoder wrote, in feature order, so a single [`GeometryCursors`]
//! walks the column once:
//!
//! | type            | consumes                                                               |
//! |-----------------|------------------------------------------------------------------------|
//! | Point           | 1 vertex                                                               |
//! | MultiPoint      | 1 geometry count, then that many vertices                              |
//! | LineString      | 1 ring count if the column contains polygons, else 1 part count        |
//! | Polygon         | 1 part count (rings), then 1 ring count per ring                       |
//! | MultiLineString | 1 geometry count, then the LineString rule that many times             |
//! | MultiPolygon    | 1 geometry count, then the Polygon rule that many times                |

use super::{GeometryColumn, GeometryType};
use crate::geo::{
	Coordinates, Geometry, LineStringGeometry, MultiLineStringGeometry, MultiPointGeometry, MultiPolygonGeometry,
	PointGeometry, PolygonGeometry, RingGeometry,
};
use mlt_core::{DecodeError, DecodeResult};

/// Read positions into the streams of one geometry column.
#[derive(Debug)]
pub struct GeometryCursors<'a> {
	column: &'a GeometryColumn,
	geometry_offset: usize,
	part_offset: usize,
	ring_offset: usize,
	vertex_buffer_offset: usize,
	vertex_offsets_offset: usize,
}

impl<'a> GeometryCursors<'a> {
	#[must_use]
	pub fn new(column: &'a GeometryColumn) -> Self {
		GeometryCursors {
			column,
			geometry_offset: 0,
			part_offset: 0,
			ring_offset: 0,
			vertex_buffer_offset: 0,
			vertex_offsets_offset: 0,
		}
	}

	pub fn next_num_geometries(&mut self) -> DecodeResult<u32> {
		next_count(&self.column.num_geometries, &mut self.geometry_offset, "geometry")
	}

	pub fn next_num_parts(&mut self) -> DecodeResult<u32> {
		next_count(&self.column.num_parts, &mut self.part_offset, "part")
	}

	pub fn next_num_rings(&mut self) -> DecodeResult<u32> {
		next_count(&self.column.num_rings, &mut self.ring_offset, "ring")
	}

	/// Takes the next vertex, through the vertex dictionary if the column has one.
	pub fn next_vertex(&mut self) -> DecodeResult<Coordinates> {
		let index = match &self.column.vertex_offsets {
			Some(offsets) => {
				let index = *offsets
					.get(self.vertex_offsets_offset)
					.ok_or_else(|| DecodeError::corrupt("vertex offsets exhausted"))?;
				self.vertex_offsets_offset += 1;
				index as usize
			}
			None => {
				self.vertex_buffer_offset += 1;
				self.vertex_buffer_offset - 1
			}
		};

		let buffer = &self.column.vertex_buffer;
		match (buffer.get(index * 2), buffer.get(index * 2 + 1)) {
			(Some(x), Some(y)) => Ok(Coordinates::new(*x, *y)),
			_ => Err(DecodeError::corrupt(format!(
				"vertex {index} is outside the vertex buffer of {} value(s)",
				buffer.len()
			))),
		}
	}

	/// Takes the next `count` vertices.
	pub fn next_vertices(&mut self, count: u32) -> DecodeResult<Vec<Coordinates>> {
		let count = count as usize;
		if count > self.remaining_vertices() {
			return Err(DecodeError::corrupt(format!(
				"{count} vertices requested, only {} left",
				self.remaining_vertices()
			)));
		}
		(0..count).map(|_| self.next_vertex()).collect()
	}

	fn remaining_vertices(&self) -> usize {
		match &self.column.vertex_offsets {
			Some(offsets) => offsets.len() - self.vertex_offsets_offset,
			None => (self.column.vertex_buffer.len() / 2).saturating_sub(self.vertex_buffer_offset),
		}
	}

	/// Checks that every vertex (or vertex offset) of the column has been consumed.
	pub fn finish(&self) -> DecodeResult<()> {
		let (consumed, total, what) = match &self.column.vertex_offsets {
			Some(offsets) => (self.vertex_offsets_offset, offsets.len(), "vertex offsets"),
			None => (self.vertex_buffer_offset * 2, self.column.vertex_buffer.len(), "vertex values"),
		};
		if consumed == total {
			Ok(())
		} else {
			Err(DecodeError::corrupt(format!(
				"geometries consumed {consumed} of {total} {what}"
			)))
		}
	}
}

fn next_count(counts: &[u32], offset: &mut usize, what: &str) -> DecodeResult<u32> {
	let count = *counts
		.get(*offset)
		.ok_or_else(|| DecodeError::corrupt(format!("{what} counts exhausted after {offset} value(s)")))?;
	*offset += 1;
	Ok(count)
}

/// Builds one geometry per entry of `column.geometry_types`.
pub fn decode_geometries(column: &GeometryColumn) -> DecodeResult<Vec<Geometry>> {
	let contains_polygon = column.contains_polygon();
	let mut cursors = GeometryCursors::new(column);

	let geometries = column
		.geometry_types
		.iter()
		.map(|geometry_type| decode_geometry(*geometry_type, &mut cursors, contains_polygon))
		.collect::<DecodeResult<Vec<_>>>()?;

	cursors.finish()?;
	Ok(geometries)
}

fn decode_geometry(
	geometry_type: GeometryType,
	cursors: &mut GeometryCursors,
	contains_polygon: bool,
) -> DecodeResult<Geometry> {
	Ok(match geometry_type {
		GeometryType::Point => Geometry::Point(PointGeometry(cursors.next_vertex()?)),
		GeometryType::LineString => Geometry::LineString(decode_line_string(cursors, contains_polygon)?),
		GeometryType::Polygon => Geometry::Polygon(decode_polygon(cursors)?),
		GeometryType::MultiPoint => {
			let count = cursors.next_num_geometries()?;
			let points = cursors.next_vertices(count)?;
			Geometry::MultiPoint(MultiPointGeometry(points.into_iter().map(PointGeometry).collect()))
		}
		GeometryType::MultiLineString => {
			let count = cursors.next_num_geometries()?;
			let lines = (0..count)
				.map(|_| decode_line_string(cursors, contains_polygon))
				.collect::<DecodeResult<_>>()?;
			Geometry::MultiLineString(MultiLineStringGeometry(lines))
		}
		GeometryType::MultiPolygon => {
			let count = cursors.next_num_geometries()?;
			let polygons = (0..count).map(|_| decode_polygon(cursors)).collect::<DecodeResult<_>>()?;
			Geometry::MultiPolygon(MultiPolygonGeometry(polygons))
		}
	})
}

fn decode_line_string(cursors: &mut GeometryCursors, contains_polygon: bool) -> DecodeResult<LineStringGeometry> {
	let count = if contains_polygon {
		cursors.next_num_rings()?
	} else {
		cursors.next_num_parts()?
	};
	Ok(LineStringGeometry(cursors.next_vertices(count)?))
}

fn decode_polygon(cursors: &mut GeometryCursors) -> DecodeResult<PolygonGeometry> {
	let num_rings = cursors.next_num_parts()?;
	let rings = (0..num_rings)
		.map(|_| -> DecodeResult<RingGeometry> {
			let count = cursors.next_num_rings()?;
			if count == 0 {
				return Err(DecodeError::corrupt("polygon ring without vertices"));
			}
			Ok(RingGeometry::closed(cursors.next_vertices(count)?))
		})
		.collect::<DecodeResult<_>>()?;
	Ok(PolygonGeometry(rings))
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::geo::{CompositeGeometryTrait, GeometryTrait};
	use pretty_assertions::assert_eq;
	use proptest::prelude::*;

	fn make_column(types: &[GeometryType], vertices: &[i32]) -> GeometryColumn {
		GeometryColumn {
			geometry_types: types.to_vec(),
			vertex_buffer: vertices.to_vec(),
			..GeometryColumn::default()
		}
	}

	#[test]
	fn points() {
		let column = make_column(&[GeometryType::Point, GeometryType::Point], &[100, 200, -5, 7]);
		assert_eq!(
			decode_geometries(&column).unwrap(),
			vec![Geometry::new_point([100, 200]), Geometry::new_point([-5, 7])]
		);
	}

	#[test]
	fn multi_points_through_dictionary() {
		let mut column = make_column(&[GeometryType::MultiPoint, GeometryType::Point], &[1, 1, 2, 2]);
		column.num_geometries = vec![3];
		column.vertex_offsets = Some(vec![1, 1, 0, 1]);
		assert_eq!(
			decode_geometries(&column).unwrap(),
			vec![
				Geometry::new_multi_point(vec![[2, 2], [2, 2], [1, 1]]),
				Geometry::new_point([2, 2]),
			]
		);
	}

	#[test]
	fn line_strings_use_part_counts_without_polygons() {
		let mut column = make_column(
			&[GeometryType::LineString, GeometryType::MultiLineString],
			&[0, 0, 1, 1, 2, 2, 3, 3, 4, 4, 5, 5, 6, 6],
		);
		column.num_parts = vec![2, 2, 3];
		column.num_geometries = vec![2];
		assert_eq!(
			decode_geometries(&column).unwrap(),
			vec![
				Geometry::new_line_string(vec![[0, 0], [1, 1]]),
				Geometry::new_multi_line_string(vec![vec![[2, 2], [3, 3]], vec![[4, 4], [5, 5], [6, 6]]]),
			]
		);
	}

	#[test]
	fn line_strings_use_ring_counts_next_to_polygons() {
		let mut column = make_column(
			&[GeometryType::LineString, GeometryType::Polygon],
			&[0, 0, 9, 9, 0, 0, 4, 0, 4, 4],
		);
		column.num_parts = vec![1];
		column.num_rings = vec![2, 3];
		assert_eq!(
			decode_geometries(&column).unwrap(),
			vec![
				Geometry::new_line_string(vec![[0, 0], [9, 9]]),
				Geometry::new_polygon(vec![vec![[0, 0], [4, 0], [4, 4], [0, 0]]]),
			]
		);
	}

	#[test]
	fn polygons_with_holes_are_closed() {
		let mut column = make_column(
			&[GeometryType::Polygon, GeometryType::MultiPolygon],
			&[
				0, 0, 10, 0, 10, 10, 0, 10, // shell
				2, 2, 4, 2, 4, 4, // hole
				20, 20, 30, 20, 30, 30, // first polygon
				40, 40, 50, 40, 50, 50, // second polygon
			],
		);
		column.num_geometries = vec![2];
		column.num_parts = vec![2, 1, 1];
		column.num_rings = vec![4, 3, 3, 3];

		let geometries = decode_geometries(&column).unwrap();
		assert_eq!(
			geometries[0],
			Geometry::new_polygon(vec![
				vec![[0, 0], [10, 0], [10, 10], [0, 10], [0, 0]],
				vec![[2, 2], [4, 2], [4, 4], [2, 2]],
			])
		);

		let Geometry::MultiPolygon(multi_polygon) = &geometries[1] else {
			panic!("expected a multi polygon, got {:?}", geometries[1]);
		};
		assert_eq!(multi_polygon.len(), 2);
		for polygon in multi_polygon.as_vec() {
			for ring in polygon.as_vec() {
				assert!(ring.is_closed());
				assert_eq!(ring.first(), ring.last());
			}
		}
		assert_eq!(geometries[1].num_vertices(), 8);
	}

	#[test]
	fn all_vertices_are_consumed() {
		let mut column = make_column(
			&[GeometryType::Point, GeometryType::MultiPoint, GeometryType::LineString],
			&[1, 1, 2, 2, 3, 3, 4, 4, 5, 5],
		);
		column.num_geometries = vec![2];
		column.num_parts = vec![2];
		let geometries = decode_geometries(&column).unwrap();
		let consumed: usize = geometries.iter().map(GeometryTrait::num_vertices).sum();
		assert_eq!(consumed, column.vertex_buffer.len() / 2);

		column.vertex_buffer.extend([6, 6]);
		assert!(matches!(decode_geometries(&column), Err(DecodeError::CorruptStream(_))));
	}

	#[test]
	fn unused_vertex_offsets_are_corrupt() {
		let mut column = make_column(&[GeometryType::Point], &[1, 1]);
		column.vertex_offsets = Some(vec![0, 0]);
		assert!(matches!(decode_geometries(&column), Err(DecodeError::CorruptStream(_))));
	}

	#[test]
	fn overreads_are_corrupt() {
		let mut column = make_column(&[GeometryType::LineString], &[1, 1, 2, 2]);
		column.num_parts = vec![3];
		assert!(matches!(decode_geometries(&column), Err(DecodeError::CorruptStream(_))));

		let column = make_column(&[GeometryType::MultiPoint], &[1, 1]);
		assert!(matches!(decode_geometries(&column), Err(DecodeError::CorruptStream(_))));

		let mut column = make_column(&[GeometryType::Point], &[1, 1]);
		column.vertex_offsets = Some(vec![5]);
		assert!(matches!(decode_geometries(&column), Err(DecodeError::CorruptStream(_))));
	}

	#[test]
	fn cursors_advance_independently() {
		let mut column = make_column(&[], &[7, 8]);
		column.num_geometries = vec![4];
		column.num_parts = vec![5, 6];
		column.num_rings = vec![9];
		let mut cursors = GeometryCursors::new(&column);

		assert_eq!(cursors.next_num_parts().unwrap(), 5);
		assert_eq!(cursors.next_num_rings().unwrap(), 9);
		assert_eq!(cursors.next_num_parts().unwrap(), 6);
		assert_eq!(cursors.next_num_geometries().unwrap(), 4);
		assert!(cursors.next_num_rings().is_err());
		assert!(cursors.finish().is_err());
		assert_eq!(cursors.next_vertex().unwrap(), Coordinates::new(7, 8));
		assert!(cursors.finish().is_ok());
	}

	#[test]
	fn empty_polygon_rings_are_corrupt() {
		let mut column = make_column(&[GeometryType::Polygon], &[]);
		column.num_parts = vec![1];
		column.num_rings = vec![0];
		assert!(matches!(decode_geometries(&column), Err(DecodeError::CorruptStream(_))));

		let mut column = make_column(&[GeometryType::MultiPolygon], &[1, 1, 2, 2, 3, 3]);
		column.num_geometries = vec![1];
		column.num_parts = vec![2];
		column.num_rings = vec![3, 0];
		assert!(matches!(decode_geometries(&column), Err(DecodeError::CorruptStream(_))));
	}

	/// Writes geometries into the flat streams the way an encoder does.
	fn encode_column(geometries: &[Geometry], use_dictionary: bool) -> GeometryColumn {
		let contains_polygon = geometries
			.iter()
			.any(|geometry| matches!(geometry, Geometry::Polygon(_) | Geometry::MultiPolygon(_)));
		let mut column = GeometryColumn::default();
		let mut vertices: Vec<Coordinates> = Vec::new();

		let push_line = |column: &mut GeometryColumn, vertices: &mut Vec<Coordinates>, line: &[Coordinates]| {
			if contains_polygon {
				column.num_rings.push(line.len() as u32);
			} else {
				column.num_parts.push(line.len() as u32);
			}
			vertices.extend_from_slice(line);
		};
		let push_polygon = |column: &mut GeometryColumn, vertices: &mut Vec<Coordinates>, polygon: &PolygonGeometry| {
			column.num_parts.push(polygon.0.len() as u32);
			for ring in &polygon.0 {
				let open = &ring.0[..ring.0.len() - 1];
				column.num_rings.push(open.len() as u32);
				vertices.extend_from_slice(open);
			}
		};

		for geometry in geometries {
			match geometry {
				Geometry::Point(point) => {
					column.geometry_types.push(GeometryType::Point);
					vertices.push(point.0);
				}
				Geometry::LineString(line) => {
					column.geometry_types.push(GeometryType::LineString);
					push_line(&mut column, &mut vertices, &line.0);
				}
				Geometry::Polygon(polygon) => {
					column.geometry_types.push(GeometryType::Polygon);
					push_polygon(&mut column, &mut vertices, polygon);
				}
				Geometry::MultiPoint(points) => {
					column.geometry_types.push(GeometryType::MultiPoint);
					column.num_geometries.push(points.0.len() as u32);
					vertices.extend(points.0.iter().map(|point| point.0));
				}
				Geometry::MultiLineString(lines) => {
					column.geometry_types.push(GeometryType::MultiLineString);
					column.num_geometries.push(lines.0.len() as u32);
					for line in &lines.0 {
						push_line(&mut column, &mut vertices, &line.0);
					}
				}
				Geometry::MultiPolygon(polygons) => {
					column.geometry_types.push(GeometryType::MultiPolygon);
					column.num_geometries.push(polygons.0.len() as u32);
					for polygon in &polygons.0 {
						push_polygon(&mut column, &mut vertices, polygon);
					}
				}
				Geometry::LinearRing(_) => unreachable!("rings are never generated"),
			}
		}

		if use_dictionary {
			// store the vertices in reverse order and point at them through the offsets
			let count = vertices.len() as u32;
			column.vertex_offsets = Some((0..count).map(|index| count - 1 - index).collect());
			vertices.reverse();
		}
		column.vertex_buffer = vertices.iter().flat_map(|vertex| [vertex.x(), vertex.y()]).collect();
		column
	}

	fn vertex() -> impl Strategy<Value = [i32; 2]> {
		prop::array::uniform2(-4096..8192i32)
	}

	fn line() -> impl Strategy<Value = Vec<[i32; 2]>> {
		prop::collection::vec(vertex(), 1..5)
	}

	fn polygon() -> impl Strategy<Value = Vec<Vec<[i32; 2]>>> {
		let ring = line().prop_map(|mut ring| {
			ring.push(ring[0]);
			ring
		});
		prop::collection::vec(ring, 1..3)
	}

	fn geometry() -> impl Strategy<Value = Geometry> {
		prop_oneof![
			vertex().prop_map(Geometry::new_point),
			line().prop_map(Geometry::new_line_string),
			polygon().prop_map(Geometry::new_polygon),
			prop::collection::vec(vertex(), 1..4).prop_map(Geometry::new_multi_point),
			prop::collection::vec(line(), 1..3).prop_map(Geometry::new_multi_line_string),
			prop::collection::vec(polygon(), 1..3).prop_map(Geometry::new_multi_polygon),
		]
	}

	proptest! {
		#[test]
		fn every_vertex_is_consumed_exactly_once(
			geometries in prop::collection::vec(geometry(), 0..12),
			use_dictionary in any::<bool>(),
		) {
			let mut column = encode_column(&geometries, use_dictionary);
			prop_assert_eq!(decode_geometries(&column).unwrap(), geometries);

			// one surplus vertex (or vertex offset) breaks conservation
			match &mut column.vertex_offsets {
				Some(offsets) => offsets.push(0),
				None => column.vertex_buffer.extend([0, 0]),
			}
			let surplus_is_corrupt = matches!(decode_geometries(&column), Err(DecodeError::CorruptStream(_)));
			prop_assert!(surplus_is_corrupt);
		}
	}
}
