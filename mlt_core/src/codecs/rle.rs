use super::Word;
use crate::{DecodeError, DecodeResult, io::Cursor, types::BitVector};

/// Decodes `num_bytes` bytes of byte-oriented run-length encoding.
///
/// Each group starts with a control byte:
/// - `0..=127`: a run of `control + 3` copies of the following byte,
/// - `128..=255`: `256 - control` literal bytes follow verbatim.
///
/// Decoding stops once exactly `num_bytes` bytes were produced; a group that would overshoot is
/// a [`DecodeError::CorruptStream`]. Every iteration consumes input, so a short buffer ends in
/// [`DecodeError::TruncatedInput`] rather than looping.
pub fn decode_byte_rle(cursor: &mut Cursor, num_bytes: usize) -> DecodeResult<Vec<u8>> {
	let mut values = Vec::with_capacity(num_bytes.min(cursor.remaining().saturating_mul(130)));
	while values.len() < num_bytes {
		let control = cursor.read_u8()?;
		let missing = num_bytes - values.len();
		if control <= 127 {
			let run = usize::from(control) + 3;
			if run > missing {
				return Err(overshoot(run, missing));
			}
			let value = cursor.read_u8()?;
			values.resize(values.len() + run, value);
		} else {
			let count = 256 - usize::from(control);
			if count > missing {
				return Err(overshoot(count, missing));
			}
			values.extend_from_slice(cursor.read_slice(count)?);
		}
	}
	Ok(values)
}

fn overshoot(produced: usize, missing: usize) -> DecodeError {
	DecodeError::corrupt(format!(
		"byte run-length group of {produced} byte(s) exceeds the {missing} byte(s) still expected"
	))
}

/// Decodes a boolean run-length stream of `num_booleans` bits.
///
/// The bits are packed least-significant-bit first into `ceil(num_booleans / 8)` bytes, which
/// are themselves byte run-length encoded.
pub fn decode_boolean_rle(cursor: &mut Cursor, num_booleans: usize) -> DecodeResult<BitVector> {
	let bytes = decode_byte_rle(cursor, num_booleans.div_ceil(8))?;
	Ok(BitVector::new(bytes, num_booleans))
}

/// Upper bound for the number of values a single run-length stream may expand to.
///
/// The expanded size is declared by the stream header and is not backed by input bytes, so it
/// is capped before anything is allocated.
pub const MAX_RLE_VALUES: usize = 1 << 26;

/// Expands unsigned run-length data.
///
/// The first `num_runs` entries of `data` are run lengths, the next `num_runs` entries the
/// values. The run lengths must add up to `num_values`, which may not exceed
/// [`MAX_RLE_VALUES`].
pub fn decode_unsigned_rle<T: Word>(data: &[T], num_runs: usize, num_values: usize) -> DecodeResult<Vec<T>> {
	if num_values > MAX_RLE_VALUES {
		return Err(DecodeError::corrupt(format!(
			"run-length stream declares {num_values} values, at most {MAX_RLE_VALUES} are allowed"
		)));
	}
	if data.len() != num_runs * 2 {
		return Err(DecodeError::corrupt(format!(
			"run-length data has {} entries, expected {} for {num_runs} runs",
			data.len(),
			num_runs * 2
		)));
	}
	let (runs, run_values) = data.split_at(num_runs);

	let mut values = Vec::new();
	values
		.try_reserve_exact(num_values)
		.map_err(|error| DecodeError::corrupt(format!("cannot allocate {num_values} run-length values: {error}")))?;
	for (run, value) in runs.iter().zip(run_values) {
		let run = run.to_usize().unwrap_or(usize::MAX);
		if run > num_values - values.len() {
			return Err(DecodeError::corrupt(format!(
				"run lengths exceed the declared {num_values} value(s)"
			)));
		}
		values.resize(values.len() + run, *value);
	}
	if values.len() != num_values {
		return Err(DecodeError::corrupt(format!(
			"run lengths add up to {}, expected {num_values}",
			values.len()
		)));
	}
	Ok(values)
}
