/// Snippet store manager: every mutation is a read-modify-write of the whole
/// collection followed by a full re-render from storage.
///
/// Operations are not serialized against each other. Two mutations started
/// before either finishes each read the same snapshot, and the later write
/// wins. Row positions handed to `delete_snippet` are only meaningful against
/// the collection that produced the last render.

use crate::config::SidebarConfig;
use crate::error::{Skip, SnippetResult};
use crate::host::{Clipboard, SnippetStore, SnippetView};
use crate::render::{SnippetKey, SnippetList};
use crate::storage::{SnippetCollection, resolve_group};

/// Outcome of a mutating operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation {
    Applied,
    Skipped(Skip),
}

pub struct SnippetManager<S, C, V> {
    store: S,
    clipboard: C,
    view: V,
    config: SidebarConfig,
}

impl<S, C, V> SnippetManager<S, C, V>
where
    S: SnippetStore,
    C: Clipboard,
    V: SnippetView,
{
    pub fn new(store: S, clipboard: C, view: V, config: SidebarConfig) -> Self {
        SnippetManager {
            store,
            clipboard,
            view,
            config,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    /// Current collection; an absent record is an empty collection
    pub async fn read(&self) -> SnippetResult<SnippetCollection> {
        Ok(self.store.load().await?.unwrap_or_default())
    }

    pub async fn write(&self, collection: &SnippetCollection) -> SnippetResult<()> {
        self.store.save(collection).await
    }

    pub async fn add_snippet(&self, text: &str, group_raw: &str) -> SnippetResult<Mutation> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(skipped(Skip::EmptySnippet));
        }

        let group = resolve_group(group_raw);
        let mut collection = self.read().await?;
        collection.push(group, text.to_string());
        self.commit(&collection).await
    }

    pub async fn delete_snippet(&self, group: &str, index: usize) -> SnippetResult<Mutation> {
        let mut collection = self.read().await?;
        match collection.remove_snippet(group, index) {
            Ok(_) => self.commit(&collection).await,
            Err(skip) => Ok(skipped(skip)),
        }
    }

    pub async fn delete_group(&self, group: &str) -> SnippetResult<Mutation> {
        let mut collection = self.read().await?;
        match collection.remove_group(group) {
            Ok(_) => self.commit(&collection).await,
            Err(skip) => Ok(skipped(skip)),
        }
    }

    /// Rebuild the whole list from storage and hand it to the view
    pub async fn render(&self) -> SnippetResult<()> {
        let collection = self.read().await?;
        let list = SnippetList::from_collection(&collection, &self.config.ungrouped_label);
        self.view.show(list);
        Ok(())
    }

    /// Returns whether the clipboard accepted the text. Failures are only logged.
    pub async fn copy_snippet(&self, key: &SnippetKey, text: &str) -> bool {
        match self.clipboard.write_text(text).await {
            Ok(()) => {
                log::info!("Snippet copied to clipboard!");
                self.view.flash_copied(key, self.config.copied_flash_ms);
                true
            }
            Err(e) => {
                log::error!("Failed to copy snippet: {}", e);
                false
            }
        }
    }

    async fn commit(&self, collection: &SnippetCollection) -> SnippetResult<Mutation> {
        self.write(collection).await?;
        self.render().await?;
        Ok(Mutation::Applied)
    }
}

fn skipped(skip: Skip) -> Mutation {
    match skip {
        Skip::EmptySnippet => log::info!("{}", skip),
        _ => log::warn!("{}", skip),
    }
    Mutation::Skipped(skip)
}
