/// Display model for the snippet list: group ordering and labels

use crate::storage::{SnippetCollection, is_ungrouped};
use std::cmp::Ordering;

/// Identifies a rendered snippet row by its position at render time
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SnippetKey {
    pub group: String,
    pub index: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SnippetRow {
    pub key: SnippetKey,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GroupBlock {
    /// Storage key of the group
    pub name: String,
    /// Header text (the ungrouped bucket gets a readable label)
    pub label: String,
    /// False for the ungrouped bucket
    pub deletable: bool,
    pub rows: Vec<SnippetRow>,
}

/// What the sidebar shows: either group blocks or the placeholder
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SnippetList {
    #[default]
    Loading,
    Empty,
    Groups(Vec<GroupBlock>),
}

impl SnippetList {
    pub fn from_collection(collection: &SnippetCollection, ungrouped_label: &str) -> SnippetList {
        let mut groups: Vec<(&str, &[String])> = collection
            .groups()
            .filter(|(_, snippets)| !snippets.is_empty())
            .collect();

        groups.sort_by(|a, b| compare_groups(a.0, b.0));

        if groups.is_empty() {
            return SnippetList::Empty;
        }

        let blocks = groups
            .into_iter()
            .map(|(name, snippets)| {
                let ungrouped = is_ungrouped(name);
                GroupBlock {
                    name: name.to_string(),
                    label: if ungrouped { ungrouped_label.to_string() } else { name.to_string() },
                    deletable: !ungrouped,
                    rows: snippets
                        .iter()
                        .enumerate()
                        .map(|(index, text)| SnippetRow {
                            key: SnippetKey {
                                group: name.to_string(),
                                index,
                            },
                            text: text.clone(),
                        })
                        .collect(),
                }
            })
            .collect();

        SnippetList::Groups(blocks)
    }
}

/// Named groups ascending, ungrouped bucket last
fn compare_groups(a: &str, b: &str) -> Ordering {
    match (is_ungrouped(a), is_ungrouped(b)) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a.cmp(b),
    }
}
