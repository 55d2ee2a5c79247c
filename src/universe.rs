//! A borrowed, read-only view of a picker's values.

use core::{iter::FusedIterator, slice};

/// Lazily iterates over the values currently stored in a [`NonRepeatingPicker`](`crate::NonRepeatingPicker`),
/// either its universe or its remaining pool.
///
/// This borrows the live storage rather than copying it, so it always reflects the state at the time it's consumed.
#[must_use = "iterators are lazy and do nothing unless consumed"]
#[derive(Debug, Clone)]
pub struct Universe<'a, T> {
	iter: slice::Iter<'a, T>,
}

impl<'a, T> Universe<'a, T> {
	pub(crate) fn new(values: &'a [T]) -> Self {
		Self { iter: values.iter() }
	}

	/// Returns the not-yet-visited values as slice.
	#[must_use]
	pub fn as_slice(&self) -> &'a [T] {
		self.iter.as_slice()
	}
}

impl<'a, T> Iterator for Universe<'a, T> {
	type Item = &'a T;

	fn next(&mut self) -> Option<Self::Item> {
		self.iter.next()
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		self.iter.size_hint()
	}
}

impl<T> DoubleEndedIterator for Universe<'_, T> {
	fn next_back(&mut self) -> Option<Self::Item> {
		self.iter.next_back()
	}
}

impl<T> ExactSizeIterator for Universe<'_, T> {}

impl<T> FusedIterator for Universe<'_, T> {}
