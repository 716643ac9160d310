//! Read-only lookup of a tag's id on a workspace.

use tracing::debug;

use super::error::ResourceError;
use super::state::{WorkspaceTagData, WorkspaceTagQuery};
use super::workspace::verify_workspace;
use crate::client::TagApi;
use crate::tag::{find_tag, MatchPolicy};

/// Look up a tag by name, ignoring case.
///
/// Tag names are unique per workspace regardless of case on the remote, so a
/// case-insensitive match identifies at most one tag.
pub async fn read_workspace_tag_data(
    api: &dyn TagApi,
    query: &WorkspaceTagQuery,
) -> Result<WorkspaceTagData, ResourceError> {
    verify_workspace(api, &query.workspace_id).await?;

    let tag = find_tag(
        api,
        &query.workspace_id,
        &query.tag_name,
        MatchPolicy::CaseInsensitive,
    )
    .await
    .map_err(|e| ResourceError::remote("retrieving tags", &query.workspace_id, e))?
    .ok_or_else(|| ResourceError::TagNotFound {
        tag: query.tag_name.clone(),
        workspace: query.workspace_id.clone(),
    })?;

    debug!("Found tag {} ({}) on workspace {}", tag.name, tag.id, query.workspace_id);
    Ok(WorkspaceTagData {
        id: tag.id,
        workspace_id: query.workspace_id.clone(),
        tag_name: query.tag_name.clone(),
    })
}
