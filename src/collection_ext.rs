//! Duplicate-rejecting insertion for the common collections.

use alloc::collections::{BTreeSet, VecDeque};
use alloc::vec::Vec;

/// Inserts a value only if the collection doesn't hold an equal one yet.
pub trait TryAdd<T> {
	/// Adds `value` iff no equal value is present.
	///
	/// Returns whether `value` was added.
	fn try_add(&mut self, value: T) -> bool;
}

impl<T: PartialEq> TryAdd<T> for Vec<T> {
	fn try_add(&mut self, value: T) -> bool {
		if self.contains(&value) {
			return false;
		}
		self.push(value);
		true
	}
}

impl<T: PartialEq> TryAdd<T> for VecDeque<T> {
	fn try_add(&mut self, value: T) -> bool {
		if self.contains(&value) {
			return false;
		}
		self.push_back(value);
		true
	}
}

impl<T: Ord> TryAdd<T> for BTreeSet<T> {
	fn try_add(&mut self, value: T) -> bool {
		self.insert(value)
	}
}

#[cfg(feature = "std")]
impl<T, S> TryAdd<T> for std::collections::HashSet<T, S>
where
	T: Eq + core::hash::Hash,
	S: core::hash::BuildHasher,
{
	fn try_add(&mut self, value: T) -> bool {
		self.insert(value)
	}
}
