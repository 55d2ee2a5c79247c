use alloc::{boxed::Box, vec::Vec};
use core::fmt::{self, Debug, Formatter};
use rand::{Rng, RngCore};
use tap::{Pipe, Tap};

use crate::{collection_ext::TryAdd, OutOfRange, Universe};

/// Identifies a hook registered through [`NonRepeatingPicker::on_reset`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ResetHookId(u64);

/// Draws random values from a fixed universe without repeating any of them until all were drawn.
///
/// Each value in the universe is copied into a pool when the picker resets.
/// [`.draw()`](`NonRepeatingPicker::draw`) removes a random value from that pool,
/// and an empty pool is refilled from the universe automatically (which is also a reset).
///
/// Extra one-shot values can be queued through [`.add_to_pool(…)`](`NonRepeatingPicker::add_to_pool`).
/// These are not restored by resets.
///
/// The random number generator is owned by the picker. Inject a seeded one to get reproducible draws.
pub struct NonRepeatingPicker<T, R> {
	universe: Vec<T>,
	pool: Vec<T>,
	rng: R,
	reset_hooks: Vec<(ResetHookId, Box<dyn FnMut()>)>,
	next_hook_id: u64,
}

impl<T: Debug, R> Debug for NonRepeatingPicker<T, R> {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.debug_struct("NonRepeatingPicker")
			.field("universe", &self.universe)
			.field("pool", &self.pool)
			.field("reset_hooks", &self.reset_hooks.len())
			.finish_non_exhaustive()
	}
}

impl<T, R: RngCore> NonRepeatingPicker<T, R> {
	/// Creates a new [`NonRepeatingPicker`] with an empty universe.
	#[must_use]
	pub fn with_rng(rng: R) -> Self {
		Self {
			universe: Vec::new(),
			pool: Vec::new(),
			rng,
			reset_hooks: Vec::new(),
			next_hook_id: 0,
		}
	}

	/// Creates a new [`NonRepeatingPicker`] with `value` as its only universe value.
	#[must_use]
	pub fn from_value_with_rng(value: T, rng: R) -> Self
	where
		T: Clone,
	{
		Self::with_rng(rng).tap_mut(|picker| {
			picker.pool.push(value.clone());
			picker.universe.push(value);
		})
	}

	/// Creates a new [`NonRepeatingPicker`] whose universe and pool both consist of `values`.
	///
	/// Duplicates within `values` are skipped, as with [`.extend_universe(…)`](`NonRepeatingPicker::extend_universe`).
	#[must_use]
	pub fn from_values_with_rng(values: impl IntoIterator<Item = T>, rng: R) -> Self
	where
		T: Clone + PartialEq,
	{
		Self::with_rng(rng).tap_mut(|picker| {
			picker.extend_universe(values);
			picker.pool.clone_from(&picker.universe);
		})
	}

	/// Draws a random value from the pool, removing it there.
	///
	/// If the pool is empty, the picker is [reset](`NonRepeatingPicker::reset`) first.
	///
	/// Returns [`None`] iff the universe (and with it the pool) is still empty afterwards.
	/// This is not treated as an error: Calling this again simply returns [`None`] again.
	pub fn draw(&mut self) -> Option<T>
	where
		T: Clone,
	{
		if self.pool.is_empty() {
			self.reset();
		}

		if self.pool.is_empty() {
			return None;
		}

		// Shifting keeps the undrawn values in their original order.
		self.rng
			.gen_range(0..self.pool.len())
			.pipe(|index| self.pool.remove(index))
			.pipe(Some)
	}

	/// Like [`.draw()`](`NonRepeatingPicker::draw`), but returns `T`'s default value where that returns [`None`].
	pub fn draw_or_default(&mut self) -> T
	where
		T: Clone + Default,
	{
		self.draw().unwrap_or_default()
	}

	/// Picks a random value from the universe without consuming it.
	///
	/// # Errors
	///
	/// Iff the universe is empty.
	pub fn draw_from_universe(&mut self) -> Result<&T, OutOfRange> {
		if self.universe.is_empty() {
			return Err(OutOfRange::EmptyUniverse);
		}

		let index = self.rng.gen_range(0..self.universe.len());
		self.universe_value_at(index)
	}
}

impl<T, R> NonRepeatingPicker<T, R> {
	/// Gets the number of values in the universe.
	#[must_use]
	pub fn universe_count(&self) -> usize {
		self.universe.len()
	}

	/// Gets the number of values left in the pool before the next automatic reset.
	#[must_use]
	pub fn pool_count(&self) -> usize {
		self.pool.len()
	}

	/// Checks whether the current cycle is over, i.e. whether the next draw will reset the pool.
	#[must_use]
	pub fn is_exhausted(&self) -> bool {
		self.pool.is_empty()
	}

	/// Iterates over the universe as it currently is.
	pub fn universe(&self) -> Universe<'_, T> {
		Universe::new(&self.universe)
	}

	/// Iterates over the values left in the pool, in their original relative order.
	pub fn pool(&self) -> Universe<'_, T> {
		Universe::new(&self.pool)
	}

	/// Adds `value` to the universe, iff no equal value is present there yet.
	///
	/// The pool is not affected until the next reset.
	///
	/// Returns whether `value` was added.
	pub fn add_to_universe(&mut self, value: T) -> bool
	where
		T: PartialEq,
	{
		self.universe.try_add(value)
	}

	/// Adds each of `values` to the universe, skipping those that are already present.
	///
	/// Later duplicates within `values` are skipped as well. The relative order of the added values is preserved.
	pub fn extend_universe(&mut self, values: impl IntoIterator<Item = T>)
	where
		T: PartialEq,
	{
		for value in values {
			self.universe.try_add(value);
		}
	}

	/// Queues `value` for drawing in the current cycle only.
	///
	/// Values equal to one in the **universe** are rejected, even if they were already drawn from the pool.
	///
	/// Returns whether `value` was added.
	pub fn add_to_pool(&mut self, value: T) -> bool
	where
		T: PartialEq,
	{
		if self.universe.contains(&value) {
			return false;
		}
		self.pool.push(value);
		true
	}

	/// Queues each of `values` for drawing in the current cycle only.
	///
	/// Unlike [`.add_to_pool(…)`](`NonRepeatingPicker::add_to_pool`), this skips values equal to one
	/// that is currently in the **pool**, not the universe.
	pub fn extend_pool(&mut self, values: impl IntoIterator<Item = T>)
	where
		T: PartialEq,
	{
		for value in values {
			self.pool.try_add(value);
		}
	}

	/// Removes the first value equal to `value` from the universe.
	///
	/// Returns whether a value was removed.
	pub fn remove_from_universe(&mut self, value: &T) -> bool
	where
		T: PartialEq,
	{
		match self.universe.iter().position(|v| v == value) {
			Some(index) => {
				self.universe.remove(index);
				true
			}
			None => false,
		}
	}

	/// Removes the value at `index` from the universe.
	///
	/// Does nothing and returns [`None`] if `index` is out of range.
	pub fn remove_from_universe_at(&mut self, index: usize) -> Option<T> {
		(index < self.universe.len()).then(|| self.universe.remove(index))
	}

	/// Removes all values from the universe. The pool is left as is.
	pub fn clear_universe(&mut self) {
		self.universe.clear()
	}

	/// Replaces the pool with a copy of the universe and then calls each reset hook.
	///
	/// Anything still left in the pool is discarded, including values added through
	/// [`.add_to_pool(…)`](`NonRepeatingPicker::add_to_pool`).
	pub fn reset(&mut self)
	where
		T: Clone,
	{
		self.pool.clone_from(&self.universe);
		for (_, hook) in &mut self.reset_hooks {
			hook()
		}
	}

	/// Removes and returns the value at `index` in the pool.
	///
	/// # Errors
	///
	/// Iff `index` is not less than the **universe**'s length,
	/// or if it is but the pool is shorter.
	pub fn draw_at(&mut self, index: usize) -> Result<T, OutOfRange> {
		OutOfRange::check(index, self.universe.len())?;
		OutOfRange::check(index, self.pool.len())?;
		Ok(self.pool.remove(index))
	}

	/// Gets the value at `index` in the universe without removing it.
	///
	/// # Errors
	///
	/// Iff `index` is not less than the universe's length.
	pub fn universe_value_at(&self, index: usize) -> Result<&T, OutOfRange> {
		self.universe.get(index).ok_or(OutOfRange::Index {
			index,
			len: self.universe.len(),
		})
	}

	/// Registers `hook` to be called after each reset, whether explicit or caused by a draw.
	///
	/// Hooks run in registration order.
	pub fn on_reset(&mut self, hook: impl 'static + FnMut()) -> ResetHookId {
		let id = ResetHookId(self.next_hook_id);
		self.next_hook_id += 1;
		self.reset_hooks.push((id, Box::new(hook)));
		id
	}

	/// Unregisters the hook identified by `id`.
	///
	/// Returns whether such a hook was registered.
	pub fn remove_reset_hook(&mut self, id: ResetHookId) -> bool {
		let before = self.reset_hooks.len();
		self.reset_hooks.retain(|(hook_id, _)| *hook_id != id);
		self.reset_hooks.len() != before
	}
}

impl<T: PartialEq, R> Extend<T> for NonRepeatingPicker<T, R> {
	/// Same as [`.extend_universe(…)`](`NonRepeatingPicker::extend_universe`).
	fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
		self.extend_universe(iter)
	}
}

#[cfg(feature = "std")]
mod std_rng {
	use super::NonRepeatingPicker;
	use rand::{rngs::StdRng, SeedableRng};

	/// Constructors using an entropy-seeded [`StdRng`].
	impl<T> NonRepeatingPicker<T, StdRng> {
		/// Creates a new [`NonRepeatingPicker`] with an empty universe.
		#[must_use]
		pub fn new() -> Self {
			Self::with_rng(StdRng::from_entropy())
		}

		/// Creates a new [`NonRepeatingPicker`] with `value` as its only universe value.
		#[must_use]
		pub fn from_value(value: T) -> Self
		where
			T: Clone,
		{
			Self::from_value_with_rng(value, StdRng::from_entropy())
		}

		/// Creates a new [`NonRepeatingPicker`] whose universe and pool both consist of `values`, without duplicates.
		#[must_use]
		pub fn from_values(values: impl IntoIterator<Item = T>) -> Self
		where
			T: Clone + PartialEq,
		{
			Self::from_values_with_rng(values, StdRng::from_entropy())
		}
	}

	impl<T> Default for NonRepeatingPicker<T, StdRng> {
		fn default() -> Self {
			Self::new()
		}
	}
}
