use nonrepeat::TryAdd;
use std::collections::{BTreeSet, VecDeque};

#[test]
fn vec() {
	let mut values = vec![1, 2];
	assert!(values.try_add(3));
	assert!(!values.try_add(1));
	assert_eq!(values, [1, 2, 3]);
}

#[test]
fn vec_deque() {
	let mut values = VecDeque::from([1]);
	assert!(!values.try_add(1));
	assert!(values.try_add(0));
	assert_eq!(values, [1, 0]);
}

#[test]
fn btree_set() {
	let mut values = BTreeSet::new();
	assert!(values.try_add("b"));
	assert!(values.try_add("a"));
	assert!(!values.try_add("b"));
	assert_eq!(values.len(), 2);
}

#[cfg(feature = "std")]
#[test]
fn hash_set() {
	let mut values = std::collections::HashSet::new();
	assert!(values.try_add('x'));
	assert!(!values.try_add('x'));
	assert_eq!(values.len(), 1);
}
