#![cfg(feature = "std")]

use nonrepeat::{Invert, MapExt, MergePolicy};
use std::collections::HashMap;

#[test]
fn value_helpers() {
	let mut map = HashMap::from([("a", 1), ("b", 2), ("c", 1)]);

	let mut keys = map.keys_by_value(&1);
	keys.sort_unstable();
	assert_eq!(keys, [&"a", &"c"]);
	assert_eq!(map.first_key_by_value(&2), Some(&"b"));
	assert_eq!(map.entries_with_value(&1).len(), 2);

	assert_eq!(map.replace_value(&1, 4), 2);
	assert_eq!(map.delete_by_value(&4), 2);
	assert_eq!(map, HashMap::from([("b", 2)]));
	assert_eq!(map.add_or_update("b", 3), Some(2));
}

#[test]
fn merge_and_invert() {
	let mut map = HashMap::from([(1, 'a'), (2, 'b')]);
	map.merge_with(HashMap::from([(2, 'x'), (3, 'c')]), MergePolicy::KeepExisting);
	assert_eq!(map, HashMap::from([(1, 'a'), (2, 'b'), (3, 'c')]));

	map.merge_with(HashMap::from([(2, 'x')]), MergePolicy::Overwrite);
	assert_eq!(map[&2], 'x');

	assert_eq!(
		map.invert(),
		HashMap::from([('a', 1), ('x', 2), ('c', 3)])
	);
}
