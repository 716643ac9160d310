//! Typed desired configuration and managed state for each resource kind.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

use super::error::ResourceError;
use crate::tag::validate_tag_name;

/// Separator used when a list of tag ids is flattened into one identifier.
pub const TAG_ID_SEPARATOR: char = '|';

// ---------------------------------------------------------------------------
// Single tag
// ---------------------------------------------------------------------------

/// Desired configuration of a single tag association.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WorkspaceTagConfig {
    /// Id of the workspace to attach the tag to
    pub workspace_id: String,
    /// Name of the tag to attach
    pub tag_name: String,
}

impl WorkspaceTagConfig {
    pub fn validate(&self) -> Result<(), ResourceError> {
        require_workspace_id(&self.workspace_id)?;
        validate_tag_name(&self.tag_name)?;
        Ok(())
    }
}

/// Managed state of a single tag association.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WorkspaceTagState {
    /// Remote id of the tag
    pub id: String,
    pub workspace_id: String,
    pub tag_name: String,
}

impl WorkspaceTagState {
    #[must_use]
    pub fn config(&self) -> WorkspaceTagConfig {
        WorkspaceTagConfig {
            workspace_id: self.workspace_id.clone(),
            tag_name: self.tag_name.clone(),
        }
    }
}

// ---------------------------------------------------------------------------
// Tag set
// ---------------------------------------------------------------------------

/// Desired configuration of a set of tag associations on one workspace.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WorkspaceTagsConfig {
    pub workspace_id: String,
    #[serde(default)]
    pub tag_names: BTreeSet<String>,
}

impl WorkspaceTagsConfig {
    pub fn validate(&self) -> Result<(), ResourceError> {
        require_workspace_id(&self.workspace_id)?;
        for name in &self.tag_names {
            validate_tag_name(name)?;
        }
        Ok(())
    }
}

/// Managed state of a tag set.
///
/// `tag_names` holds only the desired names that were found on the remote,
/// and `id` the remote ids of exactly those tags.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WorkspaceTagsState {
    pub id: TagIdList,
    pub workspace_id: String,
    #[serde(default)]
    pub tag_names: BTreeSet<String>,
}

impl WorkspaceTagsState {
    #[must_use]
    pub fn config(&self) -> WorkspaceTagsConfig {
        WorkspaceTagsConfig {
            workspace_id: self.workspace_id.clone(),
            tag_names: self.tag_names.clone(),
        }
    }
}

/// Ordered remote tag ids backing a tag-set resource.
///
/// Serialized as a single `|`-joined string with no leading or trailing
/// separator; that string form only exists at the serialization boundary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct TagIdList(Vec<String>);

impl TagIdList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, id: impl Into<String>) {
        let id = id.into();
        if !id.is_empty() {
            self.0.push(id);
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a TagIdList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<String> for TagIdList {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        let mut list = Self::new();
        for id in iter {
            list.push(id);
        }
        list
    }
}

impl fmt::Display for TagIdList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, id) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, "{TAG_ID_SEPARATOR}")?;
            }
            f.write_str(id)?;
        }
        Ok(())
    }
}

impl From<String> for TagIdList {
    fn from(joined: String) -> Self {
        joined
            .trim_matches(TAG_ID_SEPARATOR)
            .split(TAG_ID_SEPARATOR)
            .map(str::to_string)
            .collect()
    }
}

impl From<TagIdList> for String {
    fn from(list: TagIdList) -> Self {
        list.to_string()
    }
}

fn require_workspace_id(workspace_id: &str) -> Result<(), ResourceError> {
    if workspace_id.trim().is_empty() {
        return Err(ResourceError::InvalidConfig(
            "workspace_id cannot be empty".to_string(),
        ));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Data source
// ---------------------------------------------------------------------------

/// Arguments of the read-only tag lookup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WorkspaceTagQuery {
    pub workspace_id: String,
    pub tag_name: String,
}

/// Result of the read-only tag lookup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WorkspaceTagData {
    /// Remote id of the matched tag
    pub id: String,
    pub workspace_id: String,
    pub tag_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> BTreeSet<String> {
        list.iter().map(|n| (*n).to_string()).collect()
    }

    #[test]
    fn test_tag_id_list_display_joins_with_separator() {
        let ids: TagIdList = vec!["tag-1".to_string(), "tag-2".to_string()]
            .into_iter()
            .collect();
        assert_eq!(ids.to_string(), "tag-1|tag-2");
        assert_eq!(ids.len(), 2);
    }

    #[test]
    fn test_tag_id_list_parse_trims_separators() {
        let ids = TagIdList::from("|tag-1|tag-2|".to_string());
        assert_eq!(ids.iter().collect::<Vec<_>>(), vec!["tag-1", "tag-2"]);
    }

    #[test]
    fn test_tag_id_list_empty() {
        let ids = TagIdList::from(String::new());
        assert!(ids.is_empty());
        assert_eq!(ids.to_string(), "");
    }

    #[test]
    fn test_tag_id_list_skips_empty_ids() {
        let mut ids = TagIdList::new();
        ids.push("");
        ids.push("tag-1");
        assert_eq!(ids.to_string(), "tag-1");
    }

    #[test]
    fn test_tags_state_serializes_id_as_string() {
        let state = WorkspaceTagsState {
            id: TagIdList::from("tag-1|tag-2".to_string()),
            workspace_id: "ws-1".to_string(),
            tag_names: names(&["blue", "red"]),
        };

        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["id"], "tag-1|tag-2");
        assert_eq!(json["tag_names"], serde_json::json!(["blue", "red"]));

        let back: WorkspaceTagsState = serde_json::from_value(json).unwrap();
        assert_eq!(back, state);
    }

    #[test]
    fn test_tag_config_validation() {
        let ok = WorkspaceTagConfig {
            workspace_id: "ws-1".to_string(),
            tag_name: "red".to_string(),
        };
        assert!(ok.validate().is_ok());

        let bad_name = WorkspaceTagConfig {
            tag_name: "Red".to_string(),
            ..ok.clone()
        };
        assert!(matches!(
            bad_name.validate(),
            Err(ResourceError::InvalidTagName(_))
        ));

        let no_workspace = WorkspaceTagConfig {
            workspace_id: String::new(),
            ..ok
        };
        assert!(matches!(
            no_workspace.validate(),
            Err(ResourceError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_tags_config_validation_checks_every_name() {
        let config = WorkspaceTagsConfig {
            workspace_id: "ws-1".to_string(),
            tag_names: names(&["red", "ok-too", "NOPE"]),
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("NOPE"));
    }

    #[test]
    fn test_tags_config_tag_names_default_to_empty() {
        let config: WorkspaceTagsConfig =
            serde_json::from_str(r#"{"workspace_id": "ws-1"}"#).unwrap();
        assert!(config.tag_names.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_state_config_roundtrip() {
        let state = WorkspaceTagState {
            id: "tag-1".to_string(),
            workspace_id: "ws-1".to_string(),
            tag_name: "red".to_string(),
        };
        let config = state.config();
        assert_eq!(config.workspace_id, "ws-1");
        assert_eq!(config.tag_name, "red");
    }
}
