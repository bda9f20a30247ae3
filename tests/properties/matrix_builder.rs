//! Property tests for group resolution and filtering.

use proptest::prelude::*;

use store_matrix::{build_matrix, GroupTable, MatrixError, StoreDescriptor, StoreRegistry};

const IDS: &[&str] = &["a", "b", "c", "d", "e", "f"];
const KINDS: &[&str] = &["target", "global", "Target", "staging"];

fn registry_strategy() -> impl Strategy<Value = Vec<(usize, usize)>> {
    proptest::collection::vec((0..IDS.len(), 0..KINDS.len()), 0..=IDS.len())
}

fn members_strategy() -> impl Strategy<Value = Vec<usize>> {
    // One index past IDS stands for an unregistered identifier.
    proptest::collection::vec(0..=IDS.len(), 0..12)
}

fn member_name(i: usize) -> String {
    IDS.get(i).map(|s| s.to_string()).unwrap_or_else(|| "ghost".to_string())
}

fn build_registry(entries: &[(usize, usize)]) -> StoreRegistry {
    entries
        .iter()
        .map(|&(id, kind)| (IDS[id], StoreDescriptor::with_kind(KINDS[kind])))
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: The matrix is exactly the target members, in group order, duplicates included.
    #[test]
    fn property_matrix_is_ordered_target_subsequence(
        entries in registry_strategy(),
        members in members_strategy(),
    ) {
        let registry = build_registry(&entries);
        let names: Vec<String> = members.iter().map(|&i| member_name(i)).collect();
        let groups: GroupTable = [("g", names.clone())].into_iter().collect();

        let expected: Vec<String> = names
            .iter()
            .filter(|n| registry.get(n).is_some_and(|d| d.is_target()))
            .cloned()
            .collect();

        match build_matrix(&registry, &groups, "g") {
            Ok(matrix) => {
                prop_assert!(!expected.is_empty());
                prop_assert_eq!(matrix.store_names(), expected.iter().map(String::as_str).collect::<Vec<_>>());
                prop_assert_eq!(matrix.total(), expected.len());
                for entry in matrix.entries() {
                    prop_assert_eq!(Some(&entry.config), registry.get(&entry.name));
                }
            }
            Err(MatrixError::NoTargetStores { group }) => {
                prop_assert!(expected.is_empty());
                prop_assert_eq!(group, "g");
            }
            Err(other) => prop_assert!(false, "unexpected error: {}", other),
        }
    }

    /// PROPERTY: Any name absent from the group table fails with GroupNotFound.
    #[test]
    fn property_unknown_group_is_not_found(
        entries in registry_strategy(),
        requested in "[a-z-]{1,12}",
    ) {
        prop_assume!(requested != "g");
        let registry = build_registry(&entries);
        let groups: GroupTable = [("g", vec!["a".to_string()])].into_iter().collect();

        let result = build_matrix(&registry, &groups, &requested);
        prop_assert!(
            matches!(result, Err(MatrixError::GroupNotFound { ref group }) if *group == requested),
            "expected GroupNotFound for {:?}, got {:?}", requested, result
        );
    }

    /// PROPERTY: Building twice from the same inputs yields identical JSON.
    #[test]
    fn property_json_is_deterministic(
        entries in registry_strategy(),
        members in members_strategy(),
    ) {
        let registry = build_registry(&entries);
        let names: Vec<String> = members.iter().map(|&i| member_name(i)).collect();
        let groups: GroupTable = [("g", names)].into_iter().collect();

        if let (Ok(first), Ok(second)) = (
            build_matrix(&registry, &groups, "g"),
            build_matrix(&registry, &groups, "g"),
        ) {
            prop_assert_eq!(first.to_json().unwrap(), second.to_json().unwrap());
        }
    }
}
