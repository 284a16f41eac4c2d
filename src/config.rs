/// Sidebar settings, overridable from the host page

use serde::Deserialize;

pub const DEFAULT_STORAGE_KEY: &str = "snippets";
pub const DEFAULT_PLACEHOLDER: &str = "No snippets saved yet.";
pub const DEFAULT_UNGROUPED_LABEL: &str = "Ungrouped";
pub const DEFAULT_COPIED_FLASH_MS: u32 = 500;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SidebarConfig {
    /// chrome.storage.local key holding the whole collection
    pub storage_key: String,
    /// Text shown when there is nothing to list
    pub placeholder: String,
    /// Header shown for the ungrouped bucket
    pub ungrouped_label: String,
    /// How long a copied row stays highlighted
    pub copied_flash_ms: u32,
}

impl Default for SidebarConfig {
    fn default() -> Self {
        SidebarConfig {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            ungrouped_label: DEFAULT_UNGROUPED_LABEL.to_string(),
            copied_flash_ms: DEFAULT_COPIED_FLASH_MS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SidebarConfig::default();

        assert_eq!(config.storage_key, "snippets");
        assert_eq!(config.placeholder, "No snippets saved yet.");
        assert_eq!(config.ungrouped_label, "Ungrouped");
        assert_eq!(config.copied_flash_ms, 500);
    }

    #[test]
    fn test_partial_override() {
        let config: SidebarConfig =
            serde_json::from_str(r#"{ "storageKey": "test_snippets", "copiedFlashMs": 1000 }"#).unwrap();

        assert_eq!(config.storage_key, "test_snippets");
        assert_eq!(config.copied_flash_ms, 1000);
        assert_eq!(config.placeholder, DEFAULT_PLACEHOLDER);
        assert_eq!(config.ungrouped_label, DEFAULT_UNGROUPED_LABEL);
    }
}
