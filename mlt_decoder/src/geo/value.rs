use std::fmt::{Debug, Display};

/// A single property value of a feature.
///
/// The variant follows the declared column type: signed integer columns give [`PropertyValue::Int`],
/// unsigned ones [`PropertyValue::UInt`]. A feature without a value in a nullable column gets
/// [`PropertyValue::Null`].
#[derive(Clone, PartialEq)]
pub enum PropertyValue {
	Bool(bool),
	Double(f64),
	Float(f32),
	Int(i64),
	Null,
	String(String),
	UInt(u64),
}

impl PropertyValue {
	#[must_use]
	pub fn is_null(&self) -> bool {
		matches!(self, PropertyValue::Null)
	}
}

impl Debug for PropertyValue {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::String(v) => f.debug_tuple("String").field(v).finish(),
			Self::Float(v) => f.debug_tuple("Float").field(v).finish(),
			Self::Double(v) => f.debug_tuple("Double").field(v).finish(),
			Self::Int(v) => f.debug_tuple("Int").field(v).finish(),
			Self::UInt(v) => f.debug_tuple("UInt").field(v).finish(),
			Self::Bool(v) => f.debug_tuple("Bool").field(v).finish(),
			Self::Null => f.debug_tuple("Null").finish(),
		}
	}
}

impl Display for PropertyValue {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			PropertyValue::Bool(v) => write!(f, "{v}"),
			PropertyValue::Double(v) => write!(f, "{v}"),
			PropertyValue::Float(v) => write!(f, "{v}"),
			PropertyValue::Int(v) => write!(f, "{v}"),
			PropertyValue::Null => f.write_str("null"),
			PropertyValue::String(v) => write!(f, "{v:?}"),
			PropertyValue::UInt(v) => write!(f, "{v}"),
		}
	}
}

impl From<&str> for PropertyValue {
	fn from(value: &str) -> Self {
		PropertyValue::String(value.to_string())
	}
}

impl From<String> for PropertyValue {
	fn from(value: String) -> Self {
		PropertyValue::String(value)
	}
}

impl From<bool> for PropertyValue {
	fn from(value: bool) -> Self {
		PropertyValue::Bool(value)
	}
}

impl From<i32> for PropertyValue {
	fn from(value: i32) -> Self {
		PropertyValue::Int(i64::from(value))
	}
}

impl From<u32> for PropertyValue {
	fn from(value: u32) -> Self {
		PropertyValue::UInt(u64::from(value))
	}
}

impl From<i64> for PropertyValue {
	fn from(value: i64) -> Self {
		PropertyValue::Int(value)
	}
}

impl From<u64> for PropertyValue {
	fn from(value: u64) -> Self {
		PropertyValue::UInt(value)
	}
}

impl From<f32> for PropertyValue {
	fn from(value: f32) -> Self {
		PropertyValue::Float(value)
	}
}

impl From<f64> for PropertyValue {
	fn from(value: f64) -> Self {
		PropertyValue::Double(value)
	}
}

impl<T> From<Option<T>> for PropertyValue
where
	PropertyValue: From<T>,
{
	fn from(value: Option<T>) -> Self {
		value.map_or(PropertyValue::Null, PropertyValue::from)
	}
}
