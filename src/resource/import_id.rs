//! Composite import identifiers.
//!
//! A single association is imported as `<ORGANIZATION>/<WORKSPACE NAME>/<TAG NAME>`;
//! a tag set as several of those joined with `|`.

use std::fmt;
use std::str::FromStr;

use super::error::ResourceError;

pub const WORKSPACE_TAG_IMPORT_FORMAT: &str = "<ORGANIZATION>/<WORKSPACE NAME>/<TAG NAME>";
pub const WORKSPACE_TAGS_IMPORT_FORMAT: &str = "<ORGANIZATION>/<WORKSPACE NAME>/<TAG NAME>|...";

const FIELD_SEPARATOR: char = '/';
const ENTRY_SEPARATOR: char = '|';

/// One decoded `organization/workspace/tag` triple.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagImportId {
    pub organization: String,
    pub workspace: String,
    pub tag: String,
}

impl TagImportId {
    /// Split one triple; `None` unless it has exactly three parts.
    fn from_triple(triple: &str) -> Option<Self> {
        let parts: Vec<&str> = triple.split(FIELD_SEPARATOR).collect();
        match parts.as_slice() {
            [organization, workspace, tag] => Some(Self {
                organization: (*organization).to_string(),
                workspace: (*workspace).to_string(),
                tag: (*tag).to_string(),
            }),
            _ => None,
        }
    }

    /// Whether this triple names the same workspace as `other`.
    #[must_use]
    pub fn same_workspace(&self, other: &Self) -> bool {
        self.organization == other.organization && self.workspace == other.workspace
    }
}

impl fmt::Display for TagImportId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{FIELD_SEPARATOR}{}{FIELD_SEPARATOR}{}",
            self.organization, self.workspace, self.tag
        )
    }
}

impl FromStr for TagImportId {
    type Err = ResourceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_workspace_tag_id(s)
    }
}

/// Decode a single-association import id.
pub fn parse_workspace_tag_id(input: &str) -> Result<TagImportId, ResourceError> {
    TagImportId::from_triple(input).ok_or_else(|| ResourceError::InvalidImportFormat {
        input: input.to_string(),
        expected: WORKSPACE_TAG_IMPORT_FORMAT,
    })
}

/// Decode a tag-set import id into its triples, in input order.
///
/// Fails if any triple does not have exactly three parts.
pub fn parse_workspace_tags_id(input: &str) -> Result<Vec<TagImportId>, ResourceError> {
    input
        .split(ENTRY_SEPARATOR)
        .map(|triple| {
            TagImportId::from_triple(triple).ok_or_else(|| ResourceError::InvalidImportFormat {
                input: input.to_string(),
                expected: WORKSPACE_TAGS_IMPORT_FORMAT,
            })
        })
        .collect()
}

/// Encode triples as a tag-set import id.
#[must_use]
pub fn format_workspace_tags_id(ids: &[TagImportId]) -> String {
    ids.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(&ENTRY_SEPARATOR.to_string())
}
