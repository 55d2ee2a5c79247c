//! A random picker that doesn't repeat itself until its pool runs dry.
//!
//! [`NonRepeatingPicker`] is a "shuffle bag": It draws values from a configured universe at random,
//! but won't hand out any of them a second time until each was drawn once.
//! At that point, it refills automatically and lets any registered hooks know.
//!
//! There are also some small extension traits for collections ([`TryAdd`]) and maps ([`MapExt`], [`Invert`]).
//!
//! # Performance Focus
//!
//! This implementation is optimised for relatively small value counts,
//! like the entries of a loot table or a playlist.
//! Membership checks are linear scans.
//!
//! # Features
//!
//! - `"std"`: Implements the extension traits for [`HashMap`](https://doc.rust-lang.org/std/collections/struct.HashMap.html)
//!   and [`HashSet`](https://doc.rust-lang.org/std/collections/struct.HashSet.html),
//!   and adds constructors that seed a `StdRng` from system entropy.
#![no_std]
#![doc(html_root_url = "https://docs.rs/nonrepeat/0.0.1")]
#![warn(clippy::pedantic, missing_docs)]
#![allow(clippy::semicolon_if_nothing_returned)]

#[cfg(doctest)]
#[doc = include_str!("../README.md")]
mod readme {}

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod collection_ext;
mod error;
mod map_ext;
mod picker;
mod universe;

pub use collection_ext::TryAdd;
pub use error::OutOfRange;
pub use map_ext::{Invert, MapExt, MergePolicy};
pub use picker::{NonRepeatingPicker, ResetHookId};
pub use universe::Universe;
