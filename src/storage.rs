/// The persisted snippet record stored in chrome.storage.local

use crate::error::Skip;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Reserved group key for snippets added without a group name.
/// User input is trimmed and only replaced by this key when empty, so it
/// never collides with a real group that had to be typed.
pub const UNGROUPED_KEY: &str = "__ungrouped__";

/// Map a raw group name from the UI to the key it is stored under
pub fn resolve_group(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        UNGROUPED_KEY.to_string()
    } else {
        trimmed.to_string()
    }
}

pub fn is_ungrouped(group: &str) -> bool {
    group == UNGROUPED_KEY
}

/// Root storage structure: group name -> snippets in insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SnippetCollection {
    groups: BTreeMap<String, Vec<String>>,
}

impl SnippetCollection {
    pub fn new() -> Self {
        SnippetCollection {
            groups: BTreeMap::new(),
        }
    }

    pub fn group(&self, name: &str) -> Option<&[String]> {
        self.groups.get(name).map(Vec::as_slice)
    }

    /// Iterate over every group entry, including an empty ungrouped bucket
    pub fn groups(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.groups
            .iter()
            .map(|(name, snippets)| (name.as_str(), snippets.as_slice()))
    }

    /// Append a snippet to the end of a group, creating the group if needed
    pub fn push(&mut self, group: String, text: String) {
        self.groups.entry(group).or_default().push(text);
    }

    /// Remove the snippet at `index`. A named group left empty is dropped.
    pub fn remove_snippet(&mut self, group: &str, index: usize) -> Result<String, Skip> {
        let snippets = self
            .groups
            .get_mut(group)
            .ok_or_else(|| Skip::GroupNotFound(group.to_string()))?;

        if index >= snippets.len() {
            return Err(Skip::IndexOutOfRange {
                group: group.to_string(),
                index,
                len: snippets.len(),
            });
        }

        let removed = snippets.remove(index);

        if snippets.is_empty() && !is_ungrouped(group) {
            self.groups.remove(group);
        }

        Ok(removed)
    }

    /// Remove a whole named group. The ungrouped bucket is refused.
    pub fn remove_group(&mut self, group: &str) -> Result<Vec<String>, Skip> {
        if is_ungrouped(group) {
            return Err(Skip::UngroupedGroup);
        }

        self.groups
            .remove(group)
            .ok_or_else(|| Skip::GroupNotFound(group.to_string()))
    }
}

impl FromIterator<(String, Vec<String>)> for SnippetCollection {
    fn from_iter<I: IntoIterator<Item = (String, Vec<String>)>>(iter: I) -> Self {
        SnippetCollection {
            groups: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collection(entries: &[(&str, &[&str])]) -> SnippetCollection {
        entries
            .iter()
            .map(|(name, snippets)| {
                (
                    name.to_string(),
                    snippets.iter().map(|s| s.to_string()).collect(),
                )
            })
            .collect()
    }

    #[test]
    fn test_resolve_group() {
        assert_eq!(resolve_group(""), UNGROUPED_KEY);
        assert_eq!(resolve_group("   \t\n"), UNGROUPED_KEY);
        assert_eq!(resolve_group("  work "), "work");
        assert_eq!(resolve_group("two words"), "two words");
    }

    #[test]
    fn test_push_keeps_insertion_order_and_duplicates() {
        let mut snippets = SnippetCollection::new();
        snippets.push("work".to_string(), "b".to_string());
        snippets.push("work".to_string(), "a".to_string());
        snippets.push("work".to_string(), "b".to_string());

        assert_eq!(snippets.group("work"), Some(&["b".to_string(), "a".to_string(), "b".to_string()][..]));
    }

    #[test]
    fn test_remove_snippet_preserves_order() {
        let mut snippets = collection(&[("work", &["a", "b", "c"])]);

        let removed = snippets.remove_snippet("work", 1);

        assert_eq!(removed, Ok("b".to_string()));
        assert_eq!(snippets, collection(&[("work", &["a", "c"])]));
    }

    #[test]
    fn test_remove_last_snippet_drops_named_group() {
        let mut snippets = collection(&[("work", &["a"]), ("home", &["x"])]);

        snippets.remove_snippet("work", 0).unwrap();

        assert_eq!(snippets.group("work"), None);
        assert!(snippets.group("home").is_some());
    }

    #[test]
    fn test_remove_last_ungrouped_snippet_keeps_bucket() {
        let mut snippets = collection(&[(UNGROUPED_KEY, &["a"])]);

        snippets.remove_snippet(UNGROUPED_KEY, 0).unwrap();

        assert_eq!(snippets.group(UNGROUPED_KEY), Some(&[][..]));
        assert_eq!(snippets.groups().count(), 1);
    }

    #[test]
    fn test_remove_snippet_missing_group() {
        let mut snippets = collection(&[("work", &["a"])]);

        let result = snippets.remove_snippet("home", 0);

        assert_eq!(result, Err(Skip::GroupNotFound("home".to_string())));
        assert_eq!(snippets, collection(&[("work", &["a"])]));
    }

    #[test]
    fn test_remove_snippet_index_out_of_range() {
        let mut snippets = collection(&[("work", &["a"])]);

        let result = snippets.remove_snippet("work", 3);

        assert_eq!(
            result,
            Err(Skip::IndexOutOfRange {
                group: "work".to_string(),
                index: 3,
                len: 1,
            })
        );
        assert_eq!(snippets, collection(&[("work", &["a"])]));
    }

    #[test]
    fn test_remove_group() {
        let mut snippets = collection(&[("work", &["a", "b"]), ("home", &["x"]), (UNGROUPED_KEY, &["u"])]);

        let removed = snippets.remove_group("work").unwrap();

        assert_eq!(removed, vec!["a".to_string(), "b".to_string()]);
        assert_eq!(snippets, collection(&[("home", &["x"]), (UNGROUPED_KEY, &["u"])]));
    }

    #[test]
    fn test_remove_group_refuses_ungrouped() {
        let mut snippets = collection(&[(UNGROUPED_KEY, &["u"])]);

        assert_eq!(snippets.remove_group(UNGROUPED_KEY), Err(Skip::UngroupedGroup));
        assert_eq!(snippets, collection(&[(UNGROUPED_KEY, &["u"])]));
    }

    #[test]
    fn test_remove_missing_group() {
        let mut snippets = collection(&[("work", &["a"])]);

        assert_eq!(snippets.remove_group("home"), Err(Skip::GroupNotFound("home".to_string())));
    }

    #[test]
    fn test_serialization_is_plain_object() {
        let snippets = collection(&[(UNGROUPED_KEY, &["foo"]), ("work", &["multi\nline"])]);

        let json = serde_json::to_value(&snippets).unwrap();

        assert_eq!(
            json,
            serde_json::json!({ "__ungrouped__": ["foo"], "work": ["multi\nline"] })
        );

        let deserialized: SnippetCollection = serde_json::from_value(json).unwrap();
        assert_eq!(deserialized, snippets);
    }
}
