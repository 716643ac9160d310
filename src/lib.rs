#![cfg_attr(
    test,
    allow(
        clippy::panic,
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic_in_result_fn,
        clippy::unwrap_in_result,
        clippy::indexing_slicing
    )
)]

pub mod client;
pub mod config;
pub mod logging;
pub mod resource;
pub mod tag;

// Re-export commonly used types
pub use client::{ClientError, HttpTagClient, Tag, TagApi, TagPage, Workspace};
pub use config::{ConfigError, ProviderConfig};
pub use resource::{
    create_workspace_tag, create_workspace_tags, delete_workspace_tag, delete_workspace_tags,
    import_workspace_tag, import_workspace_tags, read_workspace_tag, read_workspace_tag_data,
    read_workspace_tags, update_workspace_tags, ResourceError, TagIdList, WorkspaceTagConfig,
    WorkspaceTagData, WorkspaceTagQuery, WorkspaceTagState, WorkspaceTagsConfig,
    WorkspaceTagsState,
};
pub use tag::{diff_tag_names, MatchPolicy, TagDiff};
