use serde::Deserialize;
use std::fmt::Display;

/// Physical type of a scalar column.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ScalarType {
	Boolean,
	#[serde(rename = "int_8")]
	Int8,
	#[serde(rename = "uint_8")]
	UInt8,
	#[serde(rename = "int_32")]
	Int32,
	#[serde(rename = "uint_32")]
	UInt32,
	#[serde(rename = "int_64")]
	Int64,
	#[serde(rename = "uint_64")]
	UInt64,
	Float,
	Double,
	String,
}

/// Scalar types with a meaning beyond their storage.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LogicalScalarType {
	/// Milliseconds since the epoch, stored as a signed 64-bit integer.
	Timestamp,
	/// Days since the epoch, stored as a signed 32-bit integer.
	Date,
	/// A JSON document, stored as a string.
	Json,
}

impl LogicalScalarType {
	/// The physical type the values are stored as.
	#[must_use]
	pub fn storage_type(&self) -> ScalarType {
		match self {
			LogicalScalarType::Timestamp => ScalarType::Int64,
			LogicalScalarType::Date => ScalarType::Int32,
			LogicalScalarType::Json => ScalarType::String,
		}
	}
}

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ComplexType {
	#[serde(rename = "vec_2")]
	Vec2,
	#[serde(rename = "vec_3")]
	Vec3,
	Geometry,
	#[serde(rename = "geometry_z")]
	GeometryZ,
	List,
	Map,
	Struct,
}

/// Whether a column has one value per feature or one per vertex.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ColumnScope {
	#[default]
	Feature,
	Vertex,
}

/// A nested type together with its child fields.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ComplexColumn {
	#[serde(rename = "type")]
	pub complex_type: ComplexType,
	#[serde(default)]
	pub children: Vec<Field>,
}

/// A child of a complex column. Only carried through for completeness; nested values are not
/// decoded.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Field {
	pub name: String,
	#[serde(default)]
	pub nullable: bool,
	#[serde(rename = "type", with = "serde_yaml_ng::with::singleton_map")]
	pub field_type: ColumnType,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ColumnType {
	Scalar(ScalarType),
	Logical(LogicalScalarType),
	Complex(ComplexColumn),
}

impl ColumnType {
	/// The physical scalar type the column values are decoded as, if it is a scalar column.
	#[must_use]
	pub fn scalar_type(&self) -> Option<ScalarType> {
		match self {
			ColumnType::Scalar(scalar) => Some(*scalar),
			ColumnType::Logical(logical) => Some(logical.storage_type()),
			ColumnType::Complex(_) => None,
		}
	}
}

impl Display for ColumnType {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			ColumnType::Scalar(scalar) => write!(f, "{scalar:?}"),
			ColumnType::Logical(logical) => write!(f, "{logical:?}"),
			ColumnType::Complex(complex) => write!(f, "{:?}", complex.complex_type),
		}
	}
}

/// One column of a feature table.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Column {
	pub name: String,
	#[serde(default)]
	pub nullable: bool,
	#[serde(default)]
	pub column_scope: ColumnScope,
	#[serde(rename = "type", with = "serde_yaml_ng::with::singleton_map")]
	pub column_type: ColumnType,
}

impl Column {
	#[must_use]
	pub fn new(name: &str, column_type: ColumnType) -> Column {
		Column {
			name: name.to_string(),
			nullable: false,
			column_scope: ColumnScope::Feature,
			column_type,
		}
	}

	#[must_use]
	pub fn scalar(name: &str, scalar_type: ScalarType) -> Column {
		Column::new(name, ColumnType::Scalar(scalar_type))
	}

	#[must_use]
	pub fn geometry() -> Column {
		Column::new(
			"geometry",
			ColumnType::Complex(ComplexColumn {
				complex_type: ComplexType::Geometry,
				children: vec![],
			}),
		)
	}

	#[must_use]
	pub fn nullable(mut self) -> Column {
		self.nullable = true;
		self
	}
}
