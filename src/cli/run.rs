use color_eyre::eyre::{Result, WrapErr};
use serde::Serialize;
use std::collections::BTreeSet;
use std::path::Path;

use super::{Command, TagCommand, TagSetTarget, TagTarget, TagsCommand};
use workspace_tags::client::TagApi;
use workspace_tags::resource::{
    create_workspace_tag, create_workspace_tags, delete_workspace_tag, delete_workspace_tags,
    import_workspace_tag, import_workspace_tags, read_workspace_tag, read_workspace_tag_data,
    read_workspace_tags, update_workspace_tags, WorkspaceTagConfig, WorkspaceTagQuery,
    WorkspaceTagsConfig, WorkspaceTagsState,
};

/// Execute one subcommand against `api`.
pub async fn run(command: Command, api: &dyn TagApi) -> Result<()> {
    match command {
        Command::Tag(cmd) => run_tag(cmd, api).await,
        Command::Tags(cmd) => run_tags(cmd, api).await,
        Command::Lookup(target) => {
            let query = WorkspaceTagQuery {
                workspace_id: target.workspace_id,
                tag_name: target.tag_name,
            };
            print_json(&read_workspace_tag_data(api, &query).await?)
        }
    }
}

async fn run_tag(command: TagCommand, api: &dyn TagApi) -> Result<()> {
    match command {
        TagCommand::Create(target) => {
            print_json(&create_workspace_tag(api, &tag_config(target)).await?)
        }
        TagCommand::Read(target) => print_json(&read_workspace_tag(api, &tag_config(target)).await?),
        TagCommand::Delete(target) => {
            delete_workspace_tag(api, &tag_config(target)).await?;
            Ok(())
        }
        TagCommand::Import { id } => print_json(&import_workspace_tag(api, &id).await?),
    }
}

async fn run_tags(command: TagsCommand, api: &dyn TagApi) -> Result<()> {
    match command {
        TagsCommand::Create(target) => {
            print_json(&create_workspace_tags(api, &tags_config(target)).await?)
        }
        TagsCommand::Read(target) => {
            print_json(&read_workspace_tags(api, &tags_config(target)).await?)
        }
        TagsCommand::Update { state, tag_names } => {
            let prior = read_state(&state)?;
            let desired = WorkspaceTagsConfig {
                workspace_id: prior.workspace_id.clone(),
                tag_names: tag_names.into_iter().collect(),
            };
            print_json(&update_workspace_tags(api, &prior, &desired).await?)
        }
        TagsCommand::Delete { state } => {
            let prior = read_state(&state)?;
            delete_workspace_tags(api, &prior).await?;
            Ok(())
        }
        TagsCommand::Import { id } => print_json(&import_workspace_tags(api, &id).await?),
    }
}

fn tag_config(target: TagTarget) -> WorkspaceTagConfig {
    WorkspaceTagConfig {
        workspace_id: target.workspace_id,
        tag_name: target.tag_name,
    }
}

fn tags_config(target: TagSetTarget) -> WorkspaceTagsConfig {
    WorkspaceTagsConfig {
        workspace_id: target.workspace_id,
        tag_names: target.tag_names.into_iter().collect::<BTreeSet<_>>(),
    }
}

fn read_state(path: &Path) -> Result<WorkspaceTagsState> {
    let content = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("Failed to read state file {}", path.display()))?;
    serde_json::from_str(&content)
        .wrap_err_with(|| format!("Failed to parse state file {}", path.display()))
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
