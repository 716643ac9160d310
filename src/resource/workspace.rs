//! Workspace resolution shared by every handler.

use crate::client::{ClientError, TagApi, Workspace};

use super::error::ResourceError;

/// Confirm a workspace exists before acting on it.
pub(crate) async fn verify_workspace(
    api: &dyn TagApi,
    workspace_id: &str,
) -> Result<Workspace, ResourceError> {
    api.read_workspace(workspace_id)
        .await
        .map_err(|e| workspace_error(workspace_id.to_string(), e))
}

/// Resolve a workspace from its organization and name.
pub(crate) async fn resolve_workspace(
    api: &dyn TagApi,
    organization: &str,
    workspace: &str,
) -> Result<Workspace, ResourceError> {
    api.read_workspace_by_name(organization, workspace)
        .await
        .map_err(|e| workspace_error(format!("{workspace} in organization {organization}"), e))
}

fn workspace_error(workspace: String, source: ClientError) -> ResourceError {
    if source.is_not_found() {
        ResourceError::WorkspaceNotFound { workspace, source }
    } else {
        ResourceError::RemoteCall {
            operation: "retrieving workspace".to_string(),
            workspace,
            source,
        }
    }
}
