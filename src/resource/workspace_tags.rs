//! A set of tags attached to one workspace.

use std::collections::{BTreeMap, BTreeSet};
use tracing::{debug, info, warn};

use super::error::ResourceError;
use super::import_id::{parse_workspace_tags_id, WORKSPACE_TAGS_IMPORT_FORMAT};
use super::state::{TagIdList, WorkspaceTagsConfig, WorkspaceTagsState};
use super::workspace::{resolve_workspace, verify_workspace};
use crate::client::TagApi;
use crate::tag::{diff_tag_names, find_tag, list_all_tags, MatchPolicy};

/// Attach every desired tag in one request, then read back the result.
pub async fn create_workspace_tags(
    api: &dyn TagApi,
    config: &WorkspaceTagsConfig,
) -> Result<WorkspaceTagsState, ResourceError> {
    config.validate()?;
    let ws = verify_workspace(api, &config.workspace_id).await?;

    if config.tag_names.is_empty() {
        debug!("No tags to create in workspace {}", ws.id);
    } else {
        let names = to_vec(&config.tag_names);
        debug!("Create tags {:?} in workspace {}", names, ws.id);
        api.add_tags(&ws.id, &names).await.map_err(|e| {
            ResourceError::remote(format!("creating tags {names:?}"), &ws.id, e)
        })?;
    }

    let state = read_workspace_tags(api, config).await?;
    info!(
        "Created {} tag(s) on workspace {}",
        state.tag_names.len(),
        state.workspace_id
    );
    Ok(state)
}

/// Report which of the desired tags are currently attached.
///
/// Desired names missing on the remote are dropped from the returned state
/// rather than reported as errors; remote tags that were never desired are
/// ignored.
pub async fn read_workspace_tags(
    api: &dyn TagApi,
    config: &WorkspaceTagsConfig,
) -> Result<WorkspaceTagsState, ResourceError> {
    verify_workspace(api, &config.workspace_id).await?;

    let remote = list_all_tags(api, &config.workspace_id)
        .await
        .map_err(|e| ResourceError::remote("retrieving tags", &config.workspace_id, e))?;

    let mut tag_names = BTreeSet::new();
    let mut id = TagIdList::new();
    for wanted in &config.tag_names {
        if let Some(tag) = remote
            .iter()
            .find(|t| MatchPolicy::Exact.matches(&t.name, wanted))
        {
            debug!("Found tag {} on workspace {}", wanted, config.workspace_id);
            tag_names.insert(tag.name.clone());
            id.push(tag.id.clone());
        }
    }

    Ok(WorkspaceTagsState {
        id,
        workspace_id: config.workspace_id.clone(),
        tag_names,
    })
}

/// Converge the remote from `prior` to `desired`.
///
/// Additions are sent before removals so a rename never passes through an
/// empty set. Nothing is sent when the name sets already agree. If either
/// request fails the error is returned and no new state is produced.
pub async fn update_workspace_tags(
    api: &dyn TagApi,
    prior: &WorkspaceTagsState,
    desired: &WorkspaceTagsConfig,
) -> Result<WorkspaceTagsState, ResourceError> {
    desired.validate()?;
    let workspace_id = &desired.workspace_id;

    if prior.tag_names == desired.tag_names {
        debug!("Tag names unchanged for workspace {workspace_id}");
    } else {
        let diff = diff_tag_names(&prior.tag_names, &desired.tag_names);

        if !diff.to_add.is_empty() {
            let names = to_vec(&diff.to_add);
            debug!("Adding tags {names:?} to workspace {workspace_id}");
            api.add_tags(workspace_id, &names)
                .await
                .map_err(|e| ResourceError::remote("adding tags", workspace_id, e))?;
        }

        if !diff.to_remove.is_empty() {
            let names = to_vec(&diff.to_remove);
            debug!("Removing tags {names:?} from workspace {workspace_id}");
            api.remove_tags(workspace_id, &names)
                .await
                .map_err(|e| ResourceError::remote("removing tags", workspace_id, e))?;
        }

        info!(
            "Updated tags on workspace {}: +{} -{}",
            workspace_id,
            diff.to_add.len(),
            diff.to_remove.len()
        );
    }

    read_workspace_tags(api, desired).await
}

/// Detach every tag in `state`. Tags or a workspace that are already gone
/// count as deleted.
pub async fn delete_workspace_tags(
    api: &dyn TagApi,
    state: &WorkspaceTagsState,
) -> Result<(), ResourceError> {
    if state.tag_names.is_empty() {
        debug!("No tags to delete in workspace {}", state.workspace_id);
        return Ok(());
    }

    let names = to_vec(&state.tag_names);
    debug!("Delete tags {:?} in workspace {}", names, state.workspace_id);

    match api.remove_tags(&state.workspace_id, &names).await {
        Ok(()) => {
            info!(
                "Deleted {} tag(s) from workspace {}",
                names.len(),
                state.workspace_id
            );
            Ok(())
        }
        Err(e) if e.is_not_found() => {
            warn!(
                "Tags {:?} on workspace {} already gone; treating delete as done",
                names, state.workspace_id
            );
            Ok(())
        }
        Err(e) => Err(ResourceError::remote(
            format!("deleting tags {names:?}"),
            &state.workspace_id,
            e,
        )),
    }
}

/// Build state from a `|`-joined list of `<ORGANIZATION>/<WORKSPACE NAME>/<TAG NAME>`.
///
/// The resulting id lists tag ids in name order, as [`read_workspace_tags`]
/// does, whatever order the entries were given in. Each tag is looked up in the workspace its own entry names, but the
/// resulting state belongs to the workspace of the first entry. Entries naming
/// a different workspace are accepted with a warning.
pub async fn import_workspace_tags(
    api: &dyn TagApi,
    import_id: &str,
) -> Result<WorkspaceTagsState, ResourceError> {
    let entries = parse_workspace_tags_id(import_id)?;

    let mut workspace_id = None;
    let mut found = BTreeMap::new();

    for entry in &entries {
        let ws = resolve_workspace(api, &entry.organization, &entry.workspace).await?;

        let tag = find_tag(api, &ws.id, &entry.tag, MatchPolicy::Exact)
            .await
            .map_err(|e| ResourceError::remote("retrieving tags", &ws.id, e))?
            .ok_or_else(|| ResourceError::TagNotFound {
                tag: entry.tag.clone(),
                workspace: format!("{} in organization {}", entry.workspace, entry.organization),
            })?;

        found.entry(tag.name).or_insert(tag.id);

        if workspace_id.is_none() {
            workspace_id = Some(ws.id);
        }
    }

    // parse_workspace_tags_id always yields at least one entry.
    let (Some(first), Some(workspace_id)) = (entries.first(), workspace_id) else {
        return Err(ResourceError::InvalidImportFormat {
            input: import_id.to_string(),
            expected: WORKSPACE_TAGS_IMPORT_FORMAT,
        });
    };

    for entry in entries.iter().skip(1) {
        if !entry.same_workspace(first) {
            warn!(
                "Import entry {} names a different workspace than {}/{}; using {}",
                entry, first.organization, first.workspace, workspace_id
            );
        }
    }

    let id: TagIdList = found.values().cloned().collect();
    let tag_names: BTreeSet<String> = found.into_keys().collect();

    info!("Imported {} tag(s) on workspace {}", tag_names.len(), workspace_id);
    Ok(WorkspaceTagsState {
        id,
        workspace_id,
        tag_names,
    })
}

fn to_vec(names: &BTreeSet<String>) -> Vec<String> {
    names.iter().cloned().collect()
}
