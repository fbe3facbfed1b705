use super::{Word, zigzag};

/// Replaces every element with the running sum up to and including it.
pub fn decode_delta<T: Word>(values: &mut [T]) {
	let mut previous = T::zero();
	for value in values.iter_mut() {
		previous = previous.wrapping_add(value);
		*value = previous;
	}
}

/// Zigzag-decodes every element, then replaces it with the running sum.
pub fn decode_zigzag_delta<T: Word>(values: &mut [T]) {
	let mut previous = T::zero();
	for value in values.iter_mut() {
		previous = previous.wrapping_add(&zigzag(*value));
		*value = previous;
	}
}

/// Decodes two interleaved zigzag delta chains, one per coordinate axis.
///
/// The first pair holds absolute values, every later element is added to the element two
/// positions before it.
pub fn decode_componentwise_delta<T: Word>(values: &mut [T]) {
	for index in 0..values.len() {
		let value = zigzag(values[index]);
		values[index] = if index < 2 {
			value
		} else {
			value.wrapping_add(&values[index - 2])
		};
	}
}
