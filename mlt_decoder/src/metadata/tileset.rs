use super::Column;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::{
	fs::File,
	io::{BufReader, Read},
	path::Path,
};

/// The columns of one feature table. The table name becomes the layer name.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct FeatureTableSchema {
	pub name: String,
	pub columns: Vec<Column>,
}

/// Schema of a whole tileset. Feature tables are addressed by their position in
/// `feature_tables`.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct TileSetMetadata {
	#[serde(default)]
	pub version: u32,
	#[serde(default)]
	pub name: Option<String>,
	#[serde(default)]
	pub description: Option<String>,
	#[serde(default)]
	pub attribution: Option<String>,
	#[serde(default)]
	pub min_zoom: Option<u8>,
	#[serde(default)]
	pub max_zoom: Option<u8>,
	/// `[west, south, east, north]` in degrees.
	#[serde(default)]
	pub bounds: Option<[f64; 4]>,
	#[serde(default)]
	pub feature_tables: Vec<FeatureTableSchema>,
}

impl TileSetMetadata {
	#[must_use]
	pub fn new(feature_tables: Vec<FeatureTableSchema>) -> Self {
		TileSetMetadata {
			feature_tables,
			..Default::default()
		}
	}

	pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
		Ok(serde_yaml_ng::from_reader(reader)?)
	}

	pub fn from_string(text: &str) -> Result<Self> {
		Ok(serde_yaml_ng::from_str(text)?)
	}

	pub fn from_path(path: &Path) -> Result<Self> {
		let file = File::open(path).with_context(|| format!("opening schema {path:?}"))?;
		TileSetMetadata::from_reader(BufReader::new(file)).with_context(|| format!("parsing schema {path:?}"))
	}

	#[must_use]
	pub fn feature_table(&self, id: u32) -> Option<&FeatureTableSchema> {
		self.feature_tables.get(id as usize)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::metadata::{ColumnType, ComplexColumn, ComplexType, LogicalScalarType, ScalarType};
	use pretty_assertions::assert_eq;
	use std::io::Write;

	const SCHEMA: &str = r"
name: demo
min_zoom: 0
max_zoom: 14
feature_tables:
  - name: pois
    columns:
      - name: id
        type: { scalar: uint_64 }
      - name: geometry
        type: { complex: { type: geometry } }
      - name: name
        nullable: true
        type: { scalar: string }
      - name: opened
        nullable: true
        type: { logical: date }
  - name: roads
    columns:
      - name: geometry
        type: { complex: { type: geometry } }
";

	#[test]
	fn parse_schema() {
		let metadata = TileSetMetadata::from_string(SCHEMA).unwrap();
		assert_eq!(metadata.name.as_deref(), Some("demo"));
		assert_eq!(metadata.max_zoom, Some(14));
		assert_eq!(metadata.feature_tables.len(), 2);

		let pois = metadata.feature_table(0).unwrap();
		assert_eq!(pois.name, "pois");
		assert_eq!(
			pois.columns,
			vec![
				Column::scalar("id", ScalarType::UInt64),
				Column::geometry(),
				Column::scalar("name", ScalarType::String).nullable(),
				Column::new("opened", ColumnType::Logical(LogicalScalarType::Date)).nullable(),
			]
		);
		assert_eq!(metadata.feature_table(1).unwrap().name, "roads");
		assert!(metadata.feature_table(2).is_none());
	}

	#[test]
	fn parse_json_and_nested_fields() {
		let metadata = TileSetMetadata::from_string(
			r#"{"feature_tables": [{"name": "t", "columns": [
				{"name": "tags", "type": {"complex": {"type": "map", "children": [
					{"name": "k", "type": {"scalar": "string"}}
				]}}}
			]}]}"#,
		)
		.unwrap();
		let column = &metadata.feature_tables[0].columns[0];
		let ColumnType::Complex(ComplexColumn { complex_type, children }) = &column.column_type else {
			panic!("expected a complex column");
		};
		assert_eq!(*complex_type, ComplexType::Map);
		assert_eq!(children[0].name, "k");
	}

	#[test]
	fn parse_empty_schema() {
		assert_eq!(TileSetMetadata::from_string("{}").unwrap(), TileSetMetadata::default());
	}

	#[test]
	fn rejects_unknown_fields() {
		assert!(TileSetMetadata::from_string("feature_tabels: []").is_err());
		let schema = "feature_tables: [{name: t, columns: [{name: a, type: {scalar: int_16}}]}]";
		assert!(TileSetMetadata::from_string(schema).is_err());
	}

	#[test]
	fn from_path() {
		let mut file = tempfile::NamedTempFile::new().unwrap();
		file.write_all(SCHEMA.as_bytes()).unwrap();
		let metadata = TileSetMetadata::from_path(file.path()).unwrap();
		assert_eq!(metadata.feature_tables.len(), 2);

		let error = TileSetMetadata::from_path(Path::new("/does/not/exist.yml")).unwrap_err();
		assert!(error.to_string().starts_with("opening schema"));
	}
}
