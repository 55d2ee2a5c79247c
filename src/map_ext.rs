//! Value-oriented helpers for key-value maps.
//!
//! Maps are indexed by key, so everything here that looks at values is a linear scan.
//! That's fine for the small maps this is meant for.

use alloc::collections::BTreeMap;
use alloc::vec::Vec;

/// How [`MapExt::merge_with`] resolves keys present in both maps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MergePolicy {
	/// Keep the target's value.
	#[default]
	KeepExisting,
	/// Replace the target's value with the incoming one.
	Overwrite,
}

/// Extension methods for maps that work in terms of their values.
pub trait MapExt<K, V> {
	/// Inserts `value` at `key`, replacing and returning any previous value.
	fn add_or_update(&mut self, key: K, value: V) -> Option<V>;

	/// Finds the first key (in iteration order) whose value equals `value`.
	fn first_key_by_value(&self, value: &V) -> Option<&K>
	where
		V: PartialEq;

	/// Finds all keys whose value equals `value`, in iteration order.
	fn keys_by_value(&self, value: &V) -> Vec<&K>
	where
		V: PartialEq;

	/// Copies all entries whose value equals `value` into a new map.
	#[must_use]
	fn entries_with_value(&self, value: &V) -> Self
	where
		Self: Sized,
		K: Clone,
		V: PartialEq + Clone;

	/// Removes all entries whose value equals `value`.
	///
	/// Returns the number of removed entries.
	fn delete_by_value(&mut self, value: &V) -> usize
	where
		V: PartialEq;

	/// Sets all values equal to `old` to `new`.
	///
	/// Returns the number of changed entries.
	fn replace_value(&mut self, old: &V, new: V) -> usize
	where
		V: PartialEq + Clone;

	/// Moves all entries of `other` into this map, resolving conflicts according to `policy`.
	fn merge_with(&mut self, other: Self, policy: MergePolicy)
	where
		Self: Sized;
}

/// Swaps keys and values.
pub trait Invert {
	/// The value-to-key map type.
	type Output;

	/// Creates a new map from each value to its key.
	///
	/// Where values aren't unique, the **last** key in iteration order wins.
	#[must_use]
	fn invert(&self) -> Self::Output;
}

/// Both map types share these method names, so their bodies are identical.
macro_rules! map_ext_methods {
	() => {
		fn add_or_update(&mut self, key: K, value: V) -> Option<V> {
			self.insert(key, value)
		}

		fn first_key_by_value(&self, value: &V) -> Option<&K>
		where
			V: PartialEq,
		{
			self.iter().find(|(_, v)| *v == value).map(|(k, _)| k)
		}

		fn keys_by_value(&self, value: &V) -> Vec<&K>
		where
			V: PartialEq,
		{
			self.iter()
				.filter(|(_, v)| *v == value)
				.map(|(k, _)| k)
				.collect()
		}

		fn entries_with_value(&self, value: &V) -> Self
		where
			K: Clone,
			V: PartialEq + Clone,
		{
			self.iter()
				.filter(|(_, v)| *v == value)
				.map(|(k, v)| (k.clone(), v.clone()))
				.collect()
		}

		fn delete_by_value(&mut self, value: &V) -> usize
		where
			V: PartialEq,
		{
			let before = self.len();
			self.retain(|_, v| v != value);
			before - self.len()
		}

		fn replace_value(&mut self, old: &V, new: V) -> usize
		where
			V: PartialEq + Clone,
		{
			let mut replaced = 0;
			for v in self.values_mut().filter(|v| *v == old) {
				*v = new.clone();
				replaced += 1;
			}
			replaced
		}

		fn merge_with(&mut self, other: Self, policy: MergePolicy) {
			for (k, v) in other {
				match policy {
					MergePolicy::KeepExisting => {
						self.entry(k).or_insert(v);
					}
					MergePolicy::Overwrite => {
						self.insert(k, v);
					}
				}
			}
		}
	};
}

impl<K: Ord, V> MapExt<K, V> for BTreeMap<K, V> {
	map_ext_methods!();
}

impl<K: Clone, V: Ord + Clone> Invert for BTreeMap<K, V> {
	type Output = BTreeMap<V, K>;

	fn invert(&self) -> Self::Output {
		self.iter().map(|(k, v)| (v.clone(), k.clone())).collect()
	}
}

#[cfg(feature = "std")]
mod hash_map {
	use super::{Invert, MapExt, MergePolicy};
	use alloc::vec::Vec;
	use core::hash::{BuildHasher, Hash};
	use std::collections::HashMap;

	impl<K, V, S> MapExt<K, V> for HashMap<K, V, S>
	where
		K: Eq + Hash,
		S: BuildHasher + Default,
	{
		map_ext_methods!();
	}

	impl<K, V, S> Invert for HashMap<K, V, S>
	where
		K: Clone,
		V: Eq + Hash + Clone,
		S: BuildHasher + Default,
	{
		type Output = HashMap<V, K, S>;

		fn invert(&self) -> Self::Output {
			self.iter().map(|(k, v)| (v.clone(), k.clone())).collect()
		}
	}
}
