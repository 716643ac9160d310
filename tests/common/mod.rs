//! Common test utilities
#![allow(dead_code)] // Not every test file uses every helper

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};
use workspace_tags::client::{ClientError, Tag, TagApi, TagPage, Workspace};

/// A remote API call observed by [`FakeTagApi`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    ReadWorkspace(String),
    ReadWorkspaceByName(String, String),
    ListTags(String, u32),
    AddTags(String, Vec<String>),
    RemoveTags(String, Vec<String>),
}

impl Call {
    pub fn is_mutation(&self) -> bool {
        matches!(self, Self::AddTags(..) | Self::RemoveTags(..))
    }
}

#[derive(Default)]
struct Remote {
    workspaces: Vec<Workspace>,
    tags: HashMap<String, Vec<Option<Tag>>>,
    calls: Vec<Call>,
}

/// In-memory workspace/tag API that records every call.
///
/// Tag ids are derived from the lowercased name (`tag-<name>`), so the same
/// name keeps the same id across re-association, as on the real remote.
pub struct FakeTagApi {
    remote: Mutex<Remote>,
    page_size: usize,
    stuck_pagination: bool,
    frozen_pagination: bool,
    fail_add: bool,
    fail_remove: bool,
    remove_not_found: bool,
}

impl FakeTagApi {
    pub fn new() -> Self {
        Self {
            remote: Mutex::new(Remote::default()),
            page_size: 100,
            stuck_pagination: false,
            frozen_pagination: false,
            fail_add: false,
            fail_remove: false,
            remove_not_found: false,
        }
    }

    /// Register a workspace `id` named `name` in `organization`.
    pub fn with_workspace(self, organization: &str, name: &str, id: &str) -> Self {
        {
            let mut remote = self.lock();
            remote.workspaces.push(Workspace {
                id: id.to_string(),
                name: name.to_string(),
                organization: Some(organization.to_string()),
            });
            remote.tags.entry(id.to_string()).or_default();
        }
        self
    }

    /// Attach tags to a workspace without recording a call.
    pub fn with_tags(self, workspace_id: &str, names: &[&str]) -> Self {
        {
            let mut remote = self.lock();
            let tags = remote.tags.entry(workspace_id.to_string()).or_default();
            for name in names {
                tags.push(Some(tag(name)));
            }
        }
        self
    }

    /// Insert a null entry into the workspace's listing.
    pub fn with_null_item(self, workspace_id: &str) -> Self {
        self.lock()
            .tags
            .entry(workspace_id.to_string())
            .or_default()
            .push(None);
        self
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Report more pages than exist, with a `next_page` that never advances.
    pub fn with_stuck_pagination(mut self) -> Self {
        self.stuck_pagination = true;
        self
    }

    /// Ignore the requested page: always answer with the first page and
    /// metadata pointing at page 2.
    pub fn with_frozen_pagination(mut self) -> Self {
        self.frozen_pagination = true;
        self
    }

    pub fn failing_add(mut self) -> Self {
        self.fail_add = true;
        self
    }

    pub fn failing_remove(mut self) -> Self {
        self.fail_remove = true;
        self
    }

    pub fn remove_reports_not_found(mut self) -> Self {
        self.remove_not_found = true;
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.lock().calls.clone()
    }

    pub fn mutations(&self) -> Vec<Call> {
        self.calls().into_iter().filter(Call::is_mutation).collect()
    }

    pub fn list_calls(&self) -> usize {
        self.calls()
            .iter()
            .filter(|c| matches!(c, Call::ListTags(..)))
            .count()
    }

    pub fn clear_calls(&self) {
        self.lock().calls.clear();
    }

    /// Names currently attached to a workspace, in listing order.
    pub fn tag_names(&self, workspace_id: &str) -> Vec<String> {
        self.lock()
            .tags
            .get(workspace_id)
            .map(|tags| tags.iter().flatten().map(|t| t.name.clone()).collect())
            .unwrap_or_default()
    }

    fn lock(&self) -> MutexGuard<'_, Remote> {
        self.remote.lock().expect("fake remote lock poisoned")
    }

    fn record(&self, call: Call) -> MutexGuard<'_, Remote> {
        let mut remote = self.lock();
        remote.calls.push(call);
        remote
    }
}

/// The tag the fake assigns to `name`.
pub fn tag(name: &str) -> Tag {
    Tag {
        id: tag_id(name),
        name: name.to_string(),
    }
}

pub fn tag_id(name: &str) -> String {
    format!("tag-{}", name.to_lowercase())
}

pub fn names(list: &[&str]) -> std::collections::BTreeSet<String> {
    list.iter().map(|n| (*n).to_string()).collect()
}

fn not_found(what: &str) -> ClientError {
    ClientError::NotFound(what.to_string())
}

fn server_error() -> ClientError {
    ClientError::Api {
        status: 500,
        message: "internal server error".to_string(),
    }
}

#[async_trait]
impl TagApi for FakeTagApi {
    async fn read_workspace(&self, workspace_id: &str) -> Result<Workspace, ClientError> {
        let remote = self.record(Call::ReadWorkspace(workspace_id.to_string()));
        remote
            .workspaces
            .iter()
            .find(|w| w.id == workspace_id)
            .cloned()
            .ok_or_else(|| not_found(workspace_id))
    }

    async fn read_workspace_by_name(
        &self,
        organization: &str,
        workspace: &str,
    ) -> Result<Workspace, ClientError> {
        let remote = self.record(Call::ReadWorkspaceByName(
            organization.to_string(),
            workspace.to_string(),
        ));
        remote
            .workspaces
            .iter()
            .find(|w| w.name == workspace && w.organization.as_deref() == Some(organization))
            .cloned()
            .ok_or_else(|| not_found(workspace))
    }

    async fn list_tags(&self, workspace_id: &str, page: u32) -> Result<TagPage, ClientError> {
        let remote = self.record(Call::ListTags(workspace_id.to_string(), page));
        let all = remote
            .tags
            .get(workspace_id)
            .ok_or_else(|| not_found(workspace_id))?;

        if self.frozen_pagination {
            return Ok(TagPage {
                items: all.iter().take(self.page_size).cloned().collect(),
                current_page: 1,
                total_pages: 3,
                next_page: Some(2),
            });
        }

        let page_count = all.len().div_ceil(self.page_size).max(1);
        let total_pages = u32::try_from(page_count).expect("page count fits in u32");
        let start = (page as usize - 1) * self.page_size;
        let items: Vec<Option<Tag>> = all.iter().skip(start).take(self.page_size).cloned().collect();

        if self.stuck_pagination {
            return Ok(TagPage {
                items,
                current_page: page,
                total_pages: page + 5,
                next_page: Some(page),
            });
        }

        Ok(TagPage {
            items,
            current_page: page,
            total_pages,
            next_page: (page < total_pages).then_some(page + 1),
        })
    }

    async fn add_tags(&self, workspace_id: &str, names: &[String]) -> Result<(), ClientError> {
        let mut remote = self.record(Call::AddTags(workspace_id.to_string(), names.to_vec()));
        if self.fail_add {
            return Err(server_error());
        }
        let tags = remote
            .tags
            .get_mut(workspace_id)
            .ok_or_else(|| not_found(workspace_id))?;

        for name in names {
            let exists = tags
                .iter()
                .flatten()
                .any(|t| t.name.eq_ignore_ascii_case(name));
            if !exists {
                tags.push(Some(tag(name)));
            }
        }
        Ok(())
    }

    async fn remove_tags(&self, workspace_id: &str, names: &[String]) -> Result<(), ClientError> {
        let mut remote = self.record(Call::RemoveTags(workspace_id.to_string(), names.to_vec()));
        if self.fail_remove {
            return Err(server_error());
        }
        if self.remove_not_found {
            return Err(not_found(workspace_id));
        }
        let tags = remote
            .tags
            .get_mut(workspace_id)
            .ok_or_else(|| not_found(workspace_id))?;

        tags.retain(|t| t.as_ref().is_none_or(|t| !names.contains(&t.name)));
        Ok(())
    }
}
