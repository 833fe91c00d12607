//! Project-tag editing shared by the create, edit and search drafts.
//!
//! A [`ProjectList`] holds bare project names in insertion order and never
//! contains an empty name or two equal names (compared case-sensitively).
//! Names only become [`ProjectTag`]s when a draft is committed to the store,
//! see [`ProjectList::promote`].

use serde::{Deserialize, Serialize};

use crate::models::ProjectTag;

/// Ordered, duplicate-free list of project names held by a draft.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectList {
    names: Vec<String>,
}

impl ProjectList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a list from existing tags, keeping their order.
    pub fn from_tags(tags: &[ProjectTag]) -> Self {
        let mut list = Self::new();
        for tag in tags {
            list.add(&tag.name);
        }
        list
    }

    /// Append `name` unless it is empty or already present.
    ///
    /// Returns whether the list changed.
    pub fn add(&mut self, name: &str) -> bool {
        if name.is_empty() || self.contains(name) {
            return false;
        }
        self.names.push(name.to_string());
        true
    }

    /// Remove the entry at `index`, shifting later entries down.
    ///
    /// Out-of-range indices are ignored.
    pub fn remove(&mut self, index: usize) -> Option<String> {
        if index < self.names.len() {
            Some(self.names.remove(index))
        } else {
            None
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    pub fn clear(&mut self) {
        self.names.clear();
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.names
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.names.clone()
    }

    /// Turn the names into tags, reusing the id of any tag in `previous` with the
    /// same name. New names get ids above the largest id seen so far, so a list
    /// promoted against nothing is numbered `0..len`. Once the largest id is
    /// `i64::MAX`, new names take the smallest unused non-negative id.
    pub fn promote(&self, previous: &[ProjectTag]) -> Vec<ProjectTag> {
        promote_names(self.iter(), previous)
    }
}

impl<S: AsRef<str>> FromIterator<S> for ProjectList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut list = Self::new();
        for name in iter {
            list.add(name.as_ref());
        }
        list
    }
}

/// Promote bare names to tags with stable, name-keyed ids.
pub(crate) fn promote_names<'a>(
    names: impl IntoIterator<Item = &'a str>,
    previous: &[ProjectTag],
) -> Vec<ProjectTag> {
    let mut taken: Vec<i64> = previous.iter().map(|t| t.id).collect();
    let mut tags: Vec<ProjectTag> = Vec::new();
    for name in names {
        if name.is_empty() || tags.iter().any(|t| t.name == name) {
            continue;
        }
        let id = match previous.iter().find(|t| t.name == name) {
            Some(existing) => existing.id,
            None => {
                let id = next_free_id(&taken);
                taken.push(id);
                id
            }
        };
        tags.push(ProjectTag::new(id, name));
    }
    tags
}

/// One above the largest id in use, or the smallest unused non-negative id once
/// the largest is `i64::MAX`.
fn next_free_id(taken: &[i64]) -> i64 {
    match taken.iter().max() {
        None => 0,
        Some(max) => max
            .checked_add(1)
            .unwrap_or_else(|| (0..i64::MAX).find(|id| !taken.contains(id)).unwrap_or(0)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_ignores_duplicates_and_empty_names() {
        let mut list = ProjectList::new();
        assert!(list.add("apollo"));
        assert!(list.add("gemini"));

        assert!(!list.add("apollo"));
        assert!(!list.add(""));
        assert_eq!(list.len(), 2);

        // Matching is case-sensitive
        assert!(list.add("Apollo"));
        assert_eq!(list.to_vec(), vec!["apollo", "gemini", "Apollo"]);
    }

    #[test]
    fn test_remove_preserves_order_of_the_rest() {
        let mut list: ProjectList = ["a", "b", "c", "d"].into_iter().collect();

        assert_eq!(list.remove(1), Some("b".to_string()));
        assert_eq!(list.to_vec(), vec!["a", "c", "d"]);

        assert_eq!(list.remove(10), None);
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn test_from_iter_deduplicates() {
        let list: ProjectList = ["x", "x", "", "y"].into_iter().collect();
        assert_eq!(list.to_vec(), vec!["x", "y"]);
    }

    #[test]
    fn test_promote_fresh_list_numbers_from_zero() {
        let list: ProjectList = ["x", "y"].into_iter().collect();
        let tags = list.promote(&[]);

        assert_eq!(tags, vec![ProjectTag::new(0, "x"), ProjectTag::new(1, "y")]);
    }

    #[test]
    fn test_promote_keeps_ids_of_surviving_names() {
        let previous = vec![
            ProjectTag::new(0, "a"),
            ProjectTag::new(1, "b"),
            ProjectTag::new(2, "c"),
        ];
        let mut list = ProjectList::from_tags(&previous);
        list.remove(1);
        list.add("d");

        let tags = list.promote(&previous);
        assert_eq!(
            tags,
            vec![
                ProjectTag::new(0, "a"),
                ProjectTag::new(2, "c"),
                ProjectTag::new(3, "d"),
            ]
        );
    }

    #[test]
    fn test_promote_after_max_id_reuses_smallest_free_id() {
        let previous = vec![ProjectTag::new(i64::MAX, "p"), ProjectTag::new(0, "z")];
        let list: ProjectList = ["p", "q", "r"].into_iter().collect();

        let tags = list.promote(&previous);
        assert_eq!(
            tags,
            vec![
                ProjectTag::new(i64::MAX, "p"),
                ProjectTag::new(1, "q"),
                ProjectTag::new(2, "r"),
            ]
        );
    }
}
