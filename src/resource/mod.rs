//! Resource and data-source handlers for workspace tags.
//!
//! This module provides the lifecycle operations an orchestrator drives:
//! - `workspace_tag`: one tag on one workspace (create, read, delete, import)
//! - `workspace_tags`: a set of tags on one workspace (create, read, update,
//!   delete, import)
//! - `data_source`: read-only, case-insensitive lookup of a tag id
//!
//! Every operation takes the remote API explicitly and re-reads remote state
//! on each call; nothing is cached between calls.

mod data_source;
mod error;
mod import_id;
mod state;
mod workspace;
mod workspace_tag;
mod workspace_tags;

pub use data_source::read_workspace_tag_data;
pub use error::ResourceError;
pub use import_id::{
    format_workspace_tags_id, parse_workspace_tag_id, parse_workspace_tags_id, TagImportId,
    WORKSPACE_TAGS_IMPORT_FORMAT, WORKSPACE_TAG_IMPORT_FORMAT,
};
pub use state::{
    TagIdList, WorkspaceTagConfig, WorkspaceTagData, WorkspaceTagQuery, WorkspaceTagState,
    WorkspaceTagsConfig, WorkspaceTagsState, TAG_ID_SEPARATOR,
};
pub use workspace_tag::{
    create_workspace_tag, delete_workspace_tag, import_workspace_tag, read_workspace_tag,
};
pub use workspace_tags::{
    create_workspace_tags, delete_workspace_tags, import_workspace_tags, read_workspace_tags,
    update_workspace_tags,
};
