//! Matrix builder service
//!
//! Turns a group name into a deployment matrix:
//! 1. Resolve the group in the group table (`GroupNotFound` if absent)
//! 2. Keep members whose registry descriptor has `type == "target"`
//! 3. Refuse an empty result (`NoTargetStores`)
//!
//! Dropping a member is silent at this level; only an empty selection fails.

use crate::domain::entities::{
    DeploymentMatrix, GroupTable, MatrixEntry, StoreDescriptor, StoreRegistry,
};
use crate::domain::value_objects::StoreKind;
use crate::error::{MatrixError, MatrixResult};

/// Why a group member is left out of the matrix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropReason {
    /// No registry entry with this identifier
    Unregistered,
    /// Registered, but its type is not `target`
    NotTarget(StoreKind),
}

/// A group member that did not survive filtering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DroppedStore {
    pub name: String,
    pub reason: DropReason,
}

/// Result of filtering a group's members against the registry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemberSelection {
    /// Surviving members, in group order, duplicates preserved
    pub selected: Vec<(String, StoreDescriptor)>,
    pub dropped: Vec<DroppedStore>,
}

impl MemberSelection {
    pub fn names(&self) -> Vec<&str> {
        self.selected.iter().map(|(name, _)| name.as_str()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }
}

/// Look up the members of `group`.
pub fn resolve_group<'a>(groups: &'a GroupTable, group: &str) -> MatrixResult<&'a [String]> {
    groups
        .members(group)
        .ok_or_else(|| MatrixError::GroupNotFound {
            group: group.to_string(),
        })
}

/// Split `members` into target stores and dropped ones. Never fails.
pub fn select_targets(registry: &StoreRegistry, members: &[String]) -> MemberSelection {
    let mut selection = MemberSelection::default();

    for name in members {
        match registry.get(name) {
            Some(descriptor) if descriptor.is_target() => {
                selection.selected.push((name.clone(), descriptor.clone()));
            }
            Some(descriptor) => {
                tracing::debug!(store = %name, kind = %descriptor.kind(), "skipping non-target store");
                selection.dropped.push(DroppedStore {
                    name: name.clone(),
                    reason: DropReason::NotTarget(descriptor.kind().clone()),
                });
            }
            None => {
                tracing::debug!(store = %name, "skipping unregistered store");
                selection.dropped.push(DroppedStore {
                    name: name.clone(),
                    reason: DropReason::Unregistered,
                });
            }
        }
    }

    selection
}

/// Turn a selection into a matrix, failing when nothing survived.
pub fn into_matrix(group: &str, selection: MemberSelection) -> MatrixResult<DeploymentMatrix> {
    if selection.is_empty() {
        return Err(MatrixError::NoTargetStores {
            group: group.to_string(),
        });
    }

    let entries = selection
        .selected
        .into_iter()
        .map(|(name, config)| MatrixEntry { name, config })
        .collect();

    Ok(DeploymentMatrix::new(group, entries))
}

/// Full resolution: group lookup, filtering and the empty check.
pub fn build_matrix(
    registry: &StoreRegistry,
    groups: &GroupTable,
    group: &str,
) -> MatrixResult<DeploymentMatrix> {
    let members = resolve_group(groups, group)?;
    into_matrix(group, select_targets(registry, members))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> StoreRegistry {
        [
            ("a", StoreDescriptor::with_kind("target")),
            ("b", StoreDescriptor::with_kind("global")),
            ("c", StoreDescriptor::with_kind("target")),
        ]
        .into_iter()
        .collect()
    }

    fn group(members: &[&str]) -> Vec<String> {
        members.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn build_keeps_only_registered_targets_in_order() {
        let groups: GroupTable = [("g1", group(&["a", "b", "c", "x"]))].into_iter().collect();
        let matrix = build_matrix(&registry(), &groups, "g1").unwrap();
        assert_eq!(matrix.store_names(), ["a", "c"]);
        assert_eq!(matrix.total(), 2);
    }

    #[test]
    fn build_preserves_duplicates_and_group_order() {
        let groups: GroupTable = [("g1", group(&["c", "a", "c"]))].into_iter().collect();
        let matrix = build_matrix(&registry(), &groups, "g1").unwrap();
        assert_eq!(matrix.store_names(), ["c", "a", "c"]);
    }

    #[test]
    fn build_missing_group_fails() {
        let groups: GroupTable = [("g1", group(&["a"]))].into_iter().collect();
        let err = build_matrix(&registry(), &groups, "missing-group").unwrap_err();
        assert!(matches!(err, MatrixError::GroupNotFound { ref group } if group == "missing-group"));
    }

    #[test]
    fn build_null_group_is_not_found() {
        let groups: GroupTable = serde_yaml_ng::from_str("groups:\n  g1: ~\n  g2: [a]\n").unwrap();
        let err = build_matrix(&registry(), &groups, "g1").unwrap_err();
        assert!(matches!(err, MatrixError::GroupNotFound { ref group } if group == "g1"));
    }

    #[test]
    fn build_empty_group_fails_with_no_targets() {
        let groups: GroupTable = [("g1", vec![])].into_iter().collect();
        let err = build_matrix(&registry(), &groups, "g1").unwrap_err();
        assert!(matches!(err, MatrixError::NoTargetStores { .. }));
    }

    #[test]
    fn build_group_without_targets_fails() {
        let groups: GroupTable = [("g1", group(&["b", "x", "b"]))].into_iter().collect();
        let err = build_matrix(&registry(), &groups, "g1").unwrap_err();
        assert!(matches!(err, MatrixError::NoTargetStores { ref group } if group == "g1"));
    }

    #[test]
    fn select_reports_drop_reasons() {
        let selection = select_targets(&registry(), &group(&["b", "x", "a"]));
        assert_eq!(selection.names(), ["a"]);
        assert_eq!(
            selection.dropped,
            vec![
                DroppedStore {
                    name: "b".to_string(),
                    reason: DropReason::NotTarget(StoreKind::Other("global".to_string())),
                },
                DroppedStore {
                    name: "x".to_string(),
                    reason: DropReason::Unregistered,
                },
            ]
        );
    }

    #[test]
    fn entries_carry_full_descriptor() {
        let groups: GroupTable = [("g1", group(&["a"]))].into_iter().collect();
        let matrix = build_matrix(&registry(), &groups, "g1").unwrap();
        assert_eq!(matrix.entries()[0].config, StoreDescriptor::with_kind("target"));
    }
}
