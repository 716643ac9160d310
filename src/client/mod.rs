//! Remote workspace/tag API.
//!
//! The reconcilers only ever talk to the remote system through the [`TagApi`]
//! trait. [`HttpTagClient`] is the JSON:API implementation used against a real
//! server; tests substitute an in-memory fake.

mod error;
mod http;
mod types;
mod wire;

use async_trait::async_trait;

pub use error::ClientError;
pub use http::HttpTagClient;
pub use types::{Tag, TagPage, Workspace};

/// Operations the reconcilers need from the remote workspace/tag API.
///
/// Implementations must not cache: every call reflects the remote state at the
/// time it is made, since other processes may mutate the same workspace
/// between calls.
#[async_trait]
pub trait TagApi: Send + Sync {
    /// Read a workspace by its opaque id.
    async fn read_workspace(&self, workspace_id: &str) -> Result<Workspace, ClientError>;

    /// Read a workspace by organization and workspace name.
    async fn read_workspace_by_name(
        &self,
        organization: &str,
        workspace: &str,
    ) -> Result<Workspace, ClientError>;

    /// Fetch one page (1-based) of the tags attached to a workspace.
    async fn list_tags(&self, workspace_id: &str, page: u32) -> Result<TagPage, ClientError>;

    /// Attach tags to a workspace. Adding a name that is already attached is a
    /// no-op on the remote side.
    async fn add_tags(&self, workspace_id: &str, names: &[String]) -> Result<(), ClientError>;

    /// Detach tags from a workspace.
    async fn remove_tags(&self, workspace_id: &str, names: &[String]) -> Result<(), ClientError>;
}
