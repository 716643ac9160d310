//! Page-by-page scans of a workspace's tag listing.

use tracing::{debug, warn};

use super::types::MatchPolicy;
use crate::client::{ClientError, Tag, TagApi, TagPage};

const FIRST_PAGE: u32 = 1;

/// Find a tag on a workspace by name.
///
/// Pages are requested starting at page 1 and scanned in order; the first
/// item whose name matches under `policy` is returned. Null items are
/// skipped. Returns `Ok(None)` once every page has been read without a match,
/// or once the remote's pagination stops advancing.
pub async fn find_tag(
    api: &dyn TagApi,
    workspace_id: &str,
    name: &str,
    policy: MatchPolicy,
) -> Result<Option<Tag>, ClientError> {
    let mut page_number = FIRST_PAGE;

    loop {
        debug!(workspace_id, page = page_number, tag = name, "Scanning tag page");
        let page = api.list_tags(workspace_id, page_number).await?;
        if is_repeat(&page, page_number, workspace_id) {
            return Ok(None);
        }

        if let Some(tag) = page.tags().find(|t| policy.matches(&t.name, name)) {
            return Ok(Some(tag.clone()));
        }

        match next_page(&page, page_number, workspace_id) {
            Some(next) => page_number = next,
            None => return Ok(None),
        }
    }
}

/// Read every tag on a workspace, across all pages.
pub async fn list_all_tags(api: &dyn TagApi, workspace_id: &str) -> Result<Vec<Tag>, ClientError> {
    let mut tags = Vec::new();
    let mut page_number = FIRST_PAGE;

    loop {
        debug!(workspace_id, page = page_number, "Listing tag page");
        let page = api.list_tags(workspace_id, page_number).await?;
        if is_repeat(&page, page_number, workspace_id) {
            return Ok(tags);
        }
        let following = next_page(&page, page_number, workspace_id);

        tags.extend(page.items.into_iter().flatten());

        match following {
            Some(next) => page_number = next,
            None => return Ok(tags),
        }
    }
}

/// Whether the remote answered a later request with some other page, whose
/// items have already been seen or were never asked for.
fn is_repeat(page: &TagPage, requested: u32, workspace_id: &str) -> bool {
    let repeat = requested > FIRST_PAGE && page.current_page != requested;
    if repeat {
        warn!(
            workspace_id,
            requested,
            current_page = page.current_page,
            "Tag listing returned a different page than requested; stopping"
        );
    }
    repeat
}

/// The next page to request, logging when the remote's pagination metadata
/// says there is more but does not say where.
fn next_page(page: &TagPage, requested: u32, workspace_id: &str) -> Option<u32> {
    let next = page.following_page(requested);
    if next.is_none() && page.current_page < page.total_pages {
        warn!(
            workspace_id,
            requested,
            current_page = page.current_page,
            total_pages = page.total_pages,
            next_page = ?page.next_page,
            "Tag listing reported more pages without an advancing next page; stopping"
        );
    }
    next
}
