use std::collections::BTreeSet;

/// Changes needed to move a workspace from one tag-name set to another.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagDiff {
    /// Names in the new set but not the old one
    pub to_add: BTreeSet<String>,
    /// Names in the old set but not the new one
    pub to_remove: BTreeSet<String>,
}

impl TagDiff {
    /// Nothing to add and nothing to remove.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.to_add.is_empty() && self.to_remove.is_empty()
    }
}

/// Compute `new - old` and `old - new`.
#[must_use]
pub fn diff_tag_names(old: &BTreeSet<String>, new: &BTreeSet<String>) -> TagDiff {
    TagDiff {
        to_add: new.difference(old).cloned().collect(),
        to_remove: old.difference(new).cloned().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(names: &[&str]) -> BTreeSet<String> {
        names.iter().map(|n| (*n).to_string()).collect()
    }

    fn union(a: &BTreeSet<String>, b: &BTreeSet<String>) -> BTreeSet<String> {
        a.union(b).cloned().collect()
    }

    #[test]
    fn test_growing_set_only_adds() {
        let a = set(&["red", "green"]);
        let b = set(&["blue", "yellow"]);

        let diff = diff_tag_names(&a, &union(&a, &b));
        assert_eq!(diff.to_add, b);
        assert!(diff.to_remove.is_empty());
    }

    #[test]
    fn test_shrinking_set_only_removes() {
        let a = set(&["red"]);
        let b = set(&["blue", "yellow"]);

        let diff = diff_tag_names(&union(&a, &b), &a);
        assert!(diff.to_add.is_empty());
        assert_eq!(diff.to_remove, b);
    }

    #[test]
    fn test_identical_sets_produce_no_changes() {
        for s in [set(&[]), set(&["red"]), set(&["red", "blue", "green"])] {
            let diff = diff_tag_names(&s, &s);
            assert!(diff.is_empty());
        }
    }

    #[test]
    fn test_rename_adds_and_removes() {
        let diff = diff_tag_names(&set(&["red"]), &set(&["blue"]));
        assert_eq!(diff.to_add, set(&["blue"]));
        assert_eq!(diff.to_remove, set(&["red"]));
        assert!(!diff.is_empty());
    }

    #[test]
    fn test_empty_sides() {
        let diff = diff_tag_names(&set(&[]), &set(&["red"]));
        assert_eq!(diff.to_add, set(&["red"]));
        assert!(diff.to_remove.is_empty());

        let diff = diff_tag_names(&set(&["red"]), &set(&[]));
        assert!(diff.to_add.is_empty());
        assert_eq!(diff.to_remove, set(&["red"]));
    }

    #[test]
    fn test_names_differing_only_in_case_are_distinct() {
        let diff = diff_tag_names(&set(&["red"]), &set(&["Red"]));
        assert_eq!(diff.to_add, set(&["Red"]));
        assert_eq!(diff.to_remove, set(&["red"]));
    }
}
