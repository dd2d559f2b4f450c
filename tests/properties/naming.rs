//! Property tests for path-to-identifier mapping.

use proptest::prelude::*;

use progmem::naming::{identifier_for, IdentifierTable};

fn relative_path() -> impl Strategy<Value = String> {
    let segment = proptest::string::string_regex("[A-Za-z0-9._ -]{1,12}").unwrap();
    proptest::collection::vec(segment, 1..=4).prop_map(|segments| segments.join("/"))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: every identifier is a valid C identifier.
    #[test]
    fn property_identifier_is_valid_c(path in "(?s).{0,64}") {
        let ident = identifier_for(&path);

        prop_assert!(!ident.is_empty());
        prop_assert!(ident.chars().all(|c| c.is_ascii_alphanumeric() || c == '_'));
        prop_assert!(!ident.starts_with(|c: char| c.is_ascii_digit()));
    }

    /// PROPERTY: one output character per input character (plus an
    /// optional `_` prefix), so distinct lengths never collide by accident.
    #[test]
    fn property_identifier_length_tracks_path(path in relative_path()) {
        let ident = identifier_for(&path);
        let prefix = usize::from(path.starts_with(|c: char| c.is_ascii_digit()));

        prop_assert_eq!(ident.chars().count(), path.chars().count() + prefix);
    }

    /// PROPERTY: request paths and relative paths name the same asset.
    #[test]
    fn property_leading_slash_is_ignored(path in relative_path()) {
        prop_assert_eq!(identifier_for(&format!("/{path}")), identifier_for(&path));
    }

    /// PROPERTY: already-valid identifiers map to themselves.
    #[test]
    fn property_identifier_is_idempotent(path in relative_path()) {
        let once = identifier_for(&path);
        prop_assert_eq!(identifier_for(&once), once);
    }

    /// PROPERTY: the table rejects exactly the paths whose identifier is taken.
    #[test]
    fn property_table_detects_every_collision(
        paths in proptest::collection::btree_set(relative_path(), 1..16)
    ) {
        let mut table = IdentifierTable::new();
        let mut seen = std::collections::HashSet::new();

        for path in &paths {
            let fresh = seen.insert(identifier_for(path));
            prop_assert_eq!(table.claim(path).is_ok(), fresh);
        }
        prop_assert_eq!(table.len(), seen.len());
    }
}
