use super::PropertyValue;
use std::fmt::Debug;

/// The properties of one feature, kept in column order.
#[derive(Clone, Default, PartialEq)]
pub struct Properties {
	properties: Vec<(String, PropertyValue)>,
}

impl Properties {
	#[must_use]
	pub fn new() -> Properties {
		Properties { properties: Vec::new() }
	}

	/// Sets `key` to `value`, replacing an existing entry in place.
	pub fn insert(&mut self, key: String, value: PropertyValue) {
		match self.properties.iter_mut().find(|(k, _)| *k == key) {
			Some(entry) => entry.1 = value,
			None => self.properties.push((key, value)),
		}
	}

	#[must_use]
	pub fn get(&self, key: &str) -> Option<&PropertyValue> {
		self.properties.iter().find(|(k, _)| k == key).map(|(_, v)| v)
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, &PropertyValue)> {
		self.properties.iter().map(|(k, v)| (k.as_str(), v))
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.properties.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.properties.is_empty()
	}
}

impl IntoIterator for Properties {
	type Item = (String, PropertyValue);
	type IntoIter = std::vec::IntoIter<(String, PropertyValue)>;
	fn into_iter(self) -> Self::IntoIter {
		self.properties.into_iter()
	}
}

impl From<Vec<(&str, PropertyValue)>> for Properties {
	fn from(value: Vec<(&str, PropertyValue)>) -> Self {
		value.into_iter().map(|(k, v)| (k.to_string(), v)).collect()
	}
}

impl FromIterator<(String, PropertyValue)> for Properties {
	fn from_iter<T: IntoIterator<Item = (String, PropertyValue)>>(iter: T) -> Self {
		let mut properties = Properties::new();
		for (key, value) in iter {
			properties.insert(key, value);
		}
		properties
	}
}

impl Debug for Properties {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_map().entries(self.iter()).finish()
	}
}
