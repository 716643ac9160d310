use serde::{Deserialize, Serialize};

/// A resolved workspace.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Workspace {
    /// Opaque remote id (e.g. `ws-abc123`)
    pub id: String,
    /// Workspace name, unique within its organization
    pub name: String,
    /// Name of the owning organization, when the remote reports it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
}

/// A tag as reported by the remote tag listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Tag {
    /// Opaque remote id (e.g. `tag-xyz789`)
    pub id: String,
    pub name: String,
}

/// One page of a workspace's tag list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagPage {
    /// Items may be `None` when the remote returns a null entry.
    pub items: Vec<Option<Tag>>,
    pub current_page: u32,
    pub total_pages: u32,
    pub next_page: Option<u32>,
}

impl TagPage {
    /// Iterate the non-null tags on this page.
    pub fn tags(&self) -> impl Iterator<Item = &Tag> {
        self.items.iter().flatten()
    }

    /// The page to request after `requested`, if there is more to read.
    ///
    /// Returns `None` when the response is not the page that was requested,
    /// once `current_page` reaches `total_pages`, and when the remote reports a
    /// `next_page` that does not move past `requested`. A caller looping on
    /// this therefore requests strictly increasing pages and always stops.
    #[must_use]
    pub fn following_page(&self, requested: u32) -> Option<u32> {
        if self.current_page != requested || self.current_page >= self.total_pages {
            return None;
        }
        self.next_page.filter(|next| *next > requested)
    }
}
