//! Domain DTOs for the labels API.
//!
//! # Design
//! These types mirror the mock-server's schema but are defined independently.
//! Integration tests catch any schema drift between the two crates.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The ID or namespaced path of a project.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ProjectId {
    Id(u64),
    /// Namespaced path such as `group/project`. Encoded when rendered.
    Path(String),
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProjectId::Id(id) => write!(f, "{id}"),
            ProjectId::Path(path) => f.write_str(&urlencoding::encode(path)),
        }
    }
}

impl From<u64> for ProjectId {
    fn from(id: u64) -> Self {
        ProjectId::Id(id)
    }
}

impl From<&str> for ProjectId {
    fn from(path: &str) -> Self {
        ProjectId::Path(path.to_string())
    }
}

impl From<String> for ProjectId {
    fn from(path: String) -> Self {
        ProjectId::Path(path)
    }
}

/// A label as returned by the API. Offered to callers that parse responses
/// themselves; the core never does.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Label {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub name: String,
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Request payload for creating a label.
///
/// `color` is 6-digit hex notation with a leading `#`, e.g. `#5843AD`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewLabel {
    pub name: String,
    pub color: String,
}

/// Request payload for editing an existing label, identified by `name`.
/// Omitted fields are left unchanged on the server.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LabelUpdate {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_project_id_renders_as_number() {
        assert_eq!(ProjectId::Id(42).to_string(), "42");
    }

    #[test]
    fn path_project_id_is_url_encoded() {
        assert_eq!(ProjectId::from("group/sub group/project").to_string(), "group%2Fsub%20group%2Fproject");
    }

    #[test]
    fn label_update_omits_absent_fields() {
        let update = LabelUpdate {
            name: "bug".to_string(),
            new_name: None,
            color: Some("#FF0000".to_string()),
        };
        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(json, serde_json::json!({"name": "bug", "color": "#FF0000"}));
    }

    #[test]
    fn label_accepts_extra_server_fields() {
        let label: Label = serde_json::from_str(
            r##"{"id":7,"name":"bug","color":"#d9534f","description":null,"open_issues_count":3}"##,
        )
        .unwrap();
        assert_eq!(label.id, Some(7));
        assert_eq!(label.name, "bug");
        assert!(label.description.is_none());
    }
}
