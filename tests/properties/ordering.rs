//! Property tests for traversal order.

use proptest::prelude::*;

use progmem::walker::{walk_source_tree, WalkOptions};

fn file_names() -> impl Strategy<Value = Vec<String>> {
    let name = proptest::string::string_regex("[a-z]{1,6}(/[a-z]{1,6})?\\.[a-z]{2,3}").unwrap();
    proptest::collection::btree_set(name, 1..10)
        .prop_map(|set| set.into_iter().collect::<Vec<_>>())
        .prop_shuffle()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 32,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: the tree is sorted by relative path no matter the order
    /// files were created in.
    #[test]
    fn property_walk_order_ignores_creation_order(names in file_names()) {
        let dir = tempfile::tempdir().unwrap();
        for name in &names {
            let path = dir.path().join(name);
            std::fs::create_dir_all(path.parent().unwrap()).unwrap();
            std::fs::write(&path, name.as_bytes()).unwrap();
        }

        let walk = walk_source_tree(dir.path(), &WalkOptions::default()).unwrap();
        let walked: Vec<&str> = walk.tree.files().iter().map(|f| f.relative_path.as_str()).collect();

        let mut expected: Vec<&str> = names.iter().map(String::as_str).collect();
        expected.sort();
        prop_assert_eq!(walked, expected);
    }
}
