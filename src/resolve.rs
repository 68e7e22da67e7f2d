//! Name to ID resolution
//!
//! Teams, projects and columns are all looked up the same way: list the
//! records under a parent, take the first whose name matches exactly.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{BoardError, Result};

/// Kind of record being resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Team,
    Project,
    Column,
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityKind::Team => write!(f, "team"),
            EntityKind::Project => write!(f, "project"),
            EntityKind::Column => write!(f, "column"),
        }
    }
}

/// A team, project or column as returned by a GitHub listing.
///
/// Every other field in the payload is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedEntity {
    pub id: u64,
    pub name: String,
}

/// Find the id of the first entity called `name`.
///
/// Matching is exact and case-sensitive.
pub fn find_id(kind: EntityKind, entities: &[NamedEntity], name: &str) -> Result<u64> {
    let found = entities
        .iter()
        .find(|entity| entity.name == name)
        .ok_or_else(|| BoardError::NotFound {
            kind,
            name: name.to_string(),
        })?;

    debug!(kind = %kind, name = %name, id = found.id, "Resolved ID");
    Ok(found.id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entity(id: u64, name: &str) -> NamedEntity {
        NamedEntity {
            id,
            name: name.to_string(),
        }
    }

    #[test]
    fn test_finds_matching_name() {
        let teams = vec![entity(1, "Docs"), entity(5, "Core")];
        assert_eq!(find_id(EntityKind::Team, &teams, "Core").unwrap(), 5);
    }

    #[test]
    fn test_first_match_wins() {
        let columns = vec![entity(10, "Todo"), entity(11, "Todo"), entity(12, "Done")];
        assert_eq!(find_id(EntityKind::Column, &columns, "Todo").unwrap(), 10);
    }

    #[test]
    fn test_match_is_case_sensitive() {
        let projects = vec![entity(7, "roadmap")];
        let err = find_id(EntityKind::Project, &projects, "Roadmap").unwrap_err();
        assert!(matches!(err, BoardError::NotFound { kind: EntityKind::Project, .. }));
    }

    #[test]
    fn test_empty_list_is_not_found() {
        for kind in [EntityKind::Team, EntityKind::Project, EntityKind::Column] {
            let err = find_id(kind, &[], "Missing").unwrap_err();
            assert_eq!(err.to_string(), format!("ID not found for {} Missing.", kind));
        }
    }

    #[test]
    fn test_deserialize_ignores_extra_fields() {
        let payload = serde_json::json!([
            { "id": 99, "name": "Todo", "url": "https://api.github.com/projects/columns/99", "cards_url": "x" }
        ]);
        let columns: Vec<NamedEntity> = serde_json::from_value(payload).unwrap();
        assert_eq!(columns, vec![entity(99, "Todo")]);
    }

    #[test]
    fn test_entity_kind_display() {
        assert_eq!(EntityKind::Team.to_string(), "team");
        assert_eq!(EntityKind::Project.to_string(), "project");
        assert_eq!(EntityKind::Column.to_string(), "column");
    }
}
