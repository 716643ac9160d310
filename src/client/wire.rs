//! JSON:API documents exchanged with the remote API.

use serde::{Deserialize, Serialize};

use super::types::{Tag, TagPage, Workspace};

pub(super) const TAGS_TYPE: &str = "tags";

// ---------------------------------------------------------------------------
// Responses
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub(super) struct WorkspaceDocument {
    data: WorkspaceResource,
}

#[derive(Debug, Deserialize)]
struct WorkspaceResource {
    id: String,
    attributes: WorkspaceAttributes,
    #[serde(default)]
    relationships: Option<WorkspaceRelationships>,
}

#[derive(Debug, Deserialize)]
struct WorkspaceAttributes {
    name: String,
}

#[derive(Debug, Deserialize)]
struct WorkspaceRelationships {
    #[serde(default)]
    organization: Option<RelationshipDocument>,
}

#[derive(Debug, Deserialize)]
struct RelationshipDocument {
    #[serde(default)]
    data: Option<ResourceIdentifier>,
}

#[derive(Debug, Deserialize)]
struct ResourceIdentifier {
    id: String,
}

impl From<WorkspaceDocument> for Workspace {
    fn from(doc: WorkspaceDocument) -> Self {
        let organization = doc
            .data
            .relationships
            .and_then(|r| r.organization)
            .and_then(|o| o.data)
            .map(|d| d.id);

        Self {
            id: doc.data.id,
            name: doc.data.attributes.name,
            organization,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(super) struct TagListDocument {
    #[serde(default)]
    data: Vec<Option<TagResource>>,
    #[serde(default)]
    meta: Option<ListMeta>,
}

#[derive(Debug, Deserialize)]
struct TagResource {
    id: String,
    attributes: TagAttributes,
}

#[derive(Debug, Deserialize)]
struct TagAttributes {
    name: String,
}

#[derive(Debug, Deserialize)]
struct ListMeta {
    pagination: Pagination,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
struct Pagination {
    current_page: u32,
    #[serde(default)]
    next_page: Option<u32>,
    total_pages: u32,
}

impl From<TagListDocument> for TagPage {
    fn from(doc: TagListDocument) -> Self {
        let items = doc
            .data
            .into_iter()
            .map(|item| {
                item.map(|r| Tag {
                    id: r.id,
                    name: r.attributes.name,
                })
            })
            .collect();

        // A listing without pagination metadata is a single, complete page.
        let (current_page, total_pages, next_page) = doc.meta.map_or((1, 1, None), |m| {
            (
                m.pagination.current_page,
                m.pagination.total_pages,
                m.pagination.next_page,
            )
        });

        Self {
            items,
            current_page,
            total_pages,
            next_page,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub(super) struct ErrorDocument {
    #[serde(default)]
    errors: Vec<ErrorObject>,
}

#[derive(Debug, Deserialize)]
struct ErrorObject {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    detail: Option<String>,
}

impl ErrorDocument {
    /// Flatten the error objects into one human-readable message.
    pub(super) fn message(&self) -> Option<String> {
        let parts: Vec<&str> = self
            .errors
            .iter()
            .filter_map(|e| e.detail.as_deref().or(e.title.as_deref()))
            .collect();

        if parts.is_empty() {
            None
        } else {
            Some(parts.join("; "))
        }
    }
}

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub(super) struct TagRelationshipBody<'a> {
    data: Vec<TagRelationshipItem<'a>>,
}

#[derive(Debug, Serialize)]
struct TagRelationshipItem<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    attributes: TagNameAttributes<'a>,
}

#[derive(Debug, Serialize)]
struct TagNameAttributes<'a> {
    name: &'a str,
}

impl<'a> TagRelationshipBody<'a> {
    pub(super) fn new(names: &'a [String]) -> Self {
        Self {
            data: names
                .iter()
                .map(|name| TagRelationshipItem {
                    kind: TAGS_TYPE,
                    attributes: TagNameAttributes { name },
                })
                .collect(),
        }
    }
}
