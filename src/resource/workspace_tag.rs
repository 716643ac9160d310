//! A single tag attached to a workspace.
//!
//! Both attributes force replacement, so there is no update: changing either
//! one is a delete followed by a create.

use std::slice;
use tracing::{debug, info, warn};

use super::error::ResourceError;
use super::import_id::parse_workspace_tag_id;
use super::state::{WorkspaceTagConfig, WorkspaceTagState};
use super::workspace::{resolve_workspace, verify_workspace};
use crate::client::TagApi;
use crate::tag::{find_tag, MatchPolicy};

/// Attach a tag to a workspace, then read back its remote id.
pub async fn create_workspace_tag(
    api: &dyn TagApi,
    config: &WorkspaceTagConfig,
) -> Result<WorkspaceTagState, ResourceError> {
    config.validate()?;
    let ws = verify_workspace(api, &config.workspace_id).await?;

    debug!("Create tag {} in workspace {}", config.tag_name, ws.id);
    api.add_tags(&ws.id, slice::from_ref(&config.tag_name))
        .await
        .map_err(|e| ResourceError::remote(format!("creating tag {}", config.tag_name), &ws.id, e))?;

    let state = read_workspace_tag(api, config).await?;
    info!("Created tag {} ({}) on workspace {}", state.tag_name, state.id, state.workspace_id);
    Ok(state)
}

/// Confirm the tag is still attached and return its current state.
///
/// Fails with [`ResourceError::TagNotFound`] when the association is gone.
pub async fn read_workspace_tag(
    api: &dyn TagApi,
    config: &WorkspaceTagConfig,
) -> Result<WorkspaceTagState, ResourceError> {
    verify_workspace(api, &config.workspace_id).await?;

    let tag = find_tag(api, &config.workspace_id, &config.tag_name, MatchPolicy::Exact)
        .await
        .map_err(|e| ResourceError::remote("retrieving tags", &config.workspace_id, e))?
        .ok_or_else(|| ResourceError::TagNotFound {
            tag: config.tag_name.clone(),
            workspace: config.workspace_id.clone(),
        })?;

    Ok(WorkspaceTagState {
        id: tag.id,
        workspace_id: config.workspace_id.clone(),
        tag_name: config.tag_name.clone(),
    })
}

/// Detach the tag. An association that is already gone counts as deleted.
///
/// Only the workspace and tag name are needed, so a caller holding state
/// passes `state.config()`.
pub async fn delete_workspace_tag(
    api: &dyn TagApi,
    config: &WorkspaceTagConfig,
) -> Result<(), ResourceError> {
    debug!("Delete tag {} in workspace {}", config.tag_name, config.workspace_id);

    match api
        .remove_tags(&config.workspace_id, slice::from_ref(&config.tag_name))
        .await
    {
        Ok(()) => {
            info!("Deleted tag {} from workspace {}", config.tag_name, config.workspace_id);
            Ok(())
        }
        Err(e) if e.is_not_found() => {
            warn!(
                "Tag {} or workspace {} already gone; treating delete as done",
                config.tag_name, config.workspace_id
            );
            Ok(())
        }
        Err(e) => Err(ResourceError::remote(
            format!("deleting tag {}", config.tag_name),
            &config.workspace_id,
            e,
        )),
    }
}

/// Build state from an `<ORGANIZATION>/<WORKSPACE NAME>/<TAG NAME>` id.
pub async fn import_workspace_tag(
    api: &dyn TagApi,
    import_id: &str,
) -> Result<WorkspaceTagState, ResourceError> {
    let id = parse_workspace_tag_id(import_id)?;
    let ws = resolve_workspace(api, &id.organization, &id.workspace).await?;

    let tag = find_tag(api, &ws.id, &id.tag, MatchPolicy::Exact)
        .await
        .map_err(|e| ResourceError::remote("retrieving tags", &ws.id, e))?
        .ok_or_else(|| ResourceError::TagNotFound {
            tag: id.tag.clone(),
            workspace: format!("{} in organization {}", id.workspace, id.organization),
        })?;

    info!("Imported tag {} ({}) on workspace {}", tag.name, tag.id, ws.id);
    Ok(WorkspaceTagState {
        id: tag.id,
        workspace_id: ws.id,
        tag_name: tag.name,
    })
}
