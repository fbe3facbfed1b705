use super::{Geometry, Properties, PropertyValue};

/// One decoded feature of a layer.
#[derive(Clone, Debug, PartialEq)]
pub struct Feature {
	/// `None` when the layer has no id column or the id is null for this feature.
	pub id: Option<u64>,
	/// Size of the tile coordinate space the geometry lives in.
	pub extent: u32,
	pub geometry: Geometry,
	pub properties: Properties,
}

impl Feature {
	#[must_use]
	pub fn new(id: Option<u64>, extent: u32, geometry: Geometry, properties: Properties) -> Self {
		Self {
			id,
			extent,
			geometry,
			properties,
		}
	}

	#[must_use]
	pub fn property(&self, key: &str) -> Option<&PropertyValue> {
		self.properties.get(key)
	}
}
