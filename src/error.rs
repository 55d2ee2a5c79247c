//! The one error kind this crate surfaces.

use thiserror::Error;

/// Returned by indexed accessors and [`draw_from_universe`](`crate::NonRepeatingPicker::draw_from_universe`)
/// when there is no value at the requested position.
///
/// Every other operation in this crate is total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum OutOfRange {
	/// `index` doesn't address any of the `len` values it was checked against.
	#[error("index {index} is out of range for {len} values")]
	Index {
		/// The rejected index.
		index: usize,
		/// The length the index was validated against.
		len: usize,
	},
	/// A random value was requested from a universe without any values.
	#[error("cannot draw from an empty universe")]
	EmptyUniverse,
}

impl OutOfRange {
	pub(crate) fn check(index: usize, len: usize) -> Result<(), Self> {
		if index < len {
			Ok(())
		} else {
			Err(Self::Index { index, len })
		}
	}
}
