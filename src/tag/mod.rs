//! Tag name rules, set diffing and paginated lookup.
//!
//! Everything here is independent of which resource kind is being
//! reconciled; the resource handlers compose these pieces.

mod diff;
mod lookup;
mod types;

pub use diff::{diff_tag_names, TagDiff};
pub use lookup::{find_tag, list_all_tags};
pub use types::{validate_tag_name, MatchPolicy, TagNameError};
