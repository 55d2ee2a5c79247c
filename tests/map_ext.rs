use nonrepeat::{Invert, MapExt, MergePolicy};
use std::collections::BTreeMap;

fn fruit() -> BTreeMap<&'static str, u32> {
	BTreeMap::from([("apple", 1), ("banana", 2), ("cherry", 1), ("durian", 3)])
}

#[test]
fn add_or_update() {
	let mut map = fruit();
	assert_eq!(map.add_or_update("apple", 5), Some(1));
	assert_eq!(map.add_or_update("elderberry", 4), None);
	assert_eq!(map["apple"], 5);
	assert_eq!(map["elderberry"], 4);
}

#[test]
fn lookup_by_value() {
	let map = fruit();
	assert_eq!(map.first_key_by_value(&1), Some(&"apple"));
	assert_eq!(map.first_key_by_value(&9), None);
	assert_eq!(map.keys_by_value(&1), [&"apple", &"cherry"]);
	assert!(map.keys_by_value(&9).is_empty());
	assert_eq!(
		map.entries_with_value(&1),
		BTreeMap::from([("apple", 1), ("cherry", 1)])
	);
}

#[test]
fn delete_by_value() {
	let mut map = fruit();
	assert_eq!(map.delete_by_value(&1), 2);
	assert_eq!(map.delete_by_value(&1), 0);
	assert_eq!(map, BTreeMap::from([("banana", 2), ("durian", 3)]));
}

#[test]
fn replace_value() {
	let mut map = fruit();
	assert_eq!(map.replace_value(&1, 7), 2);
	assert_eq!(map.replace_value(&9, 0), 0);
	assert_eq!(map.keys_by_value(&7), [&"apple", &"cherry"]);
	assert_eq!(map["banana"], 2);
}

#[test]
fn merge_keeping_existing() {
	let mut map = BTreeMap::from([(1, 'a'), (2, 'b')]);
	map.merge_with(BTreeMap::from([(2, 'x'), (3, 'c')]), MergePolicy::default());
	assert_eq!(map, BTreeMap::from([(1, 'a'), (2, 'b'), (3, 'c')]));
}

#[test]
fn merge_overwriting() {
	let mut map = BTreeMap::from([(1, 'a'), (2, 'b')]);
	map.merge_with(BTreeMap::from([(2, 'x'), (3, 'c')]), MergePolicy::Overwrite);
	assert_eq!(map, BTreeMap::from([(1, 'a'), (2, 'x'), (3, 'c')]));
}

#[test]
fn invert_last_key_wins() {
	let inverted = fruit().invert();
	assert_eq!(
		inverted,
		BTreeMap::from([(1, "cherry"), (2, "banana"), (3, "durian")])
	);
}
