/// Seams between the snippet manager and the browser: storage, clipboard, view

use crate::error::{SnippetError, SnippetResult};
use crate::render::{SnippetKey, SnippetList};
use crate::storage::SnippetCollection;
use serde::Serialize;
use std::cell::RefCell;
use std::collections::HashMap;
use wasm_bindgen::prelude::*;

// Import JS bridge functions
#[wasm_bindgen(module = "/sidebar.js")]
extern "C" {
    #[wasm_bindgen(catch)]
    async fn getStorage(key: &str) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn setStorage(key: &str, value: JsValue) -> Result<(), JsValue>;

    #[wasm_bindgen(catch)]
    async fn writeClipboard(text: &str) -> Result<(), JsValue>;
}

/// Key-value storage holding the whole collection under one key
#[allow(async_fn_in_trait)]
pub trait SnippetStore {
    /// `None` when nothing has been stored yet
    async fn load(&self) -> SnippetResult<Option<SnippetCollection>>;

    /// Replace the stored collection in a single write
    async fn save(&self, collection: &SnippetCollection) -> SnippetResult<()>;
}

#[allow(async_fn_in_trait)]
pub trait Clipboard {
    async fn write_text(&self, text: &str) -> SnippetResult<()>;
}

/// Receives render output from the manager
pub trait SnippetView {
    fn show(&self, list: SnippetList);

    /// Highlight a row, then clear it after `duration_ms`
    fn flash_copied(&self, key: &SnippetKey, duration_ms: u32);
}

/// chrome.storage.local through the JS bridge
#[derive(Debug, Clone)]
pub struct ChromeStore {
    key: String,
}

impl ChromeStore {
    pub fn new(key: impl Into<String>) -> Self {
        ChromeStore { key: key.into() }
    }
}

impl SnippetStore for ChromeStore {
    async fn load(&self) -> SnippetResult<Option<SnippetCollection>> {
        let stored = getStorage(&self.key)
            .await
            .map_err(|e| SnippetError::Storage(format!("Failed to get storage: {:?}", e)))?;

        if stored.is_null() || stored.is_undefined() {
            Ok(None)
        } else {
            serde_wasm_bindgen::from_value(stored)
                .map(Some)
                .map_err(|e| SnippetError::Serialization(format!("Failed to parse storage: {:?}", e)))
        }
    }

    async fn save(&self, collection: &SnippetCollection) -> SnippetResult<()> {
        // Plain object, not a JS Map, so chrome.storage can hold it
        let serializer = serde_wasm_bindgen::Serializer::json_compatible();
        let value = collection
            .serialize(&serializer)
            .map_err(|e| SnippetError::Serialization(format!("Failed to serialize storage: {:?}", e)))?;

        setStorage(&self.key, value)
            .await
            .map_err(|e| SnippetError::Storage(format!("Failed to save storage: {:?}", e)))
    }
}

/// navigator.clipboard through the JS bridge
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserClipboard;

impl Clipboard for BrowserClipboard {
    async fn write_text(&self, text: &str) -> SnippetResult<()> {
        writeClipboard(text)
            .await
            .map_err(|e| SnippetError::Clipboard(format!("{:?}", e)))
    }
}

/// JSON-string key-value store kept in memory
#[derive(Debug)]
pub struct MemoryStore {
    key: String,
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new(key: impl Into<String>) -> Self {
        MemoryStore {
            key: key.into(),
            entries: RefCell::new(HashMap::new()),
        }
    }

    /// Raw stored JSON for the collection key
    pub fn raw(&self) -> Option<String> {
        self.entries.borrow().get(&self.key).cloned()
    }

    pub fn set_raw(&self, json: impl Into<String>) {
        self.entries.borrow_mut().insert(self.key.clone(), json.into());
    }
}

impl SnippetStore for MemoryStore {
    async fn load(&self) -> SnippetResult<Option<SnippetCollection>> {
        match self.raw() {
            None => Ok(None),
            Some(json) => serde_json::from_str(&json)
                .map(Some)
                .map_err(|e| SnippetError::Serialization(format!("Failed to parse storage: {}", e))),
        }
    }

    async fn save(&self, collection: &SnippetCollection) -> SnippetResult<()> {
        let json = serde_json::to_string(collection)
            .map_err(|e| SnippetError::Serialization(format!("Failed to serialize storage: {}", e)))?;
        self.set_raw(json);
        Ok(())
    }
}
