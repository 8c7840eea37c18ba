//! Single-slot TOML persistence for the template string.
//!
//! The template has its own lifecycle: it survives entry clears and session
//! restarts, so it lives in one keyed slot on disk rather than inside any
//! session state. The renderer itself never sees this module; callers load
//! the string here and pass it to [`crate::template::render`] as plain input.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::data_dir;
use crate::error::StorageError;

/// Built-in default template.
pub const DEFAULT_TEMPLATE: &str = "今日专注 {{TotalTime}}（{{rangeCount}} 段），共 {{Points}}";

/// Default shipped by earlier releases. A stored value equal to this string
/// is silently replaced with [`DEFAULT_TEMPLATE`] on load.
pub const LEGACY_DEFAULT_TEMPLATE: &str = "今日专注 {{TotalTime}}，共 {{Points}}";

/// The persisted key-value slot, injected into callers that own a template.
pub trait TemplateStore {
    /// Load the stored template, falling back to the default when the slot
    /// is empty and migrating the legacy default value.
    fn load(&self) -> Result<String, StorageError>;

    /// Persist the template.
    fn save(&self, template: &str) -> Result<(), StorageError>;
}

#[derive(Debug, Serialize, Deserialize)]
struct TemplateSlot {
    template: String,
}

/// TOML-file-backed store at `<data_dir>/template.toml`.
#[derive(Debug, Clone)]
pub struct FileTemplateStore {
    path: PathBuf,
}

impl FileTemplateStore {
    /// Open the store at the default location.
    ///
    /// # Errors
    /// Returns an error if the data directory cannot be created.
    pub fn open() -> Result<Self, StorageError> {
        Ok(Self {
            path: data_dir()?.join("template.toml"),
        })
    }

    /// Open the store at an explicit path.
    pub fn at(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl TemplateStore for FileTemplateStore {
    fn load(&self) -> Result<String, StorageError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Ok(DEFAULT_TEMPLATE.to_string());
            }
            Err(source) => {
                return Err(StorageError::ReadFailed {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        let slot: TemplateSlot = toml::from_str(&content)?;
        if slot.template == LEGACY_DEFAULT_TEMPLATE {
            Ok(DEFAULT_TEMPLATE.to_string())
        } else {
            Ok(slot.template)
        }
    }

    fn save(&self, template: &str) -> Result<(), StorageError> {
        let slot = TemplateSlot {
            template: template.to_string(),
        };
        let content = toml::to_string_pretty(&slot)?;
        std::fs::write(&self.path, content).map_err(|source| StorageError::WriteFailed {
            path: self.path.clone(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// Map-backed store, exercising the trait seam without touching disk.
    struct MemoryTemplateStore {
        slots: Mutex<HashMap<String, String>>,
    }

    impl MemoryTemplateStore {
        fn new() -> Self {
            Self {
                slots: Mutex::new(HashMap::new()),
            }
        }
    }

    impl TemplateStore for MemoryTemplateStore {
        fn load(&self) -> Result<String, StorageError> {
            let slots = self.slots.lock().unwrap();
            let stored = slots.get("template").cloned();
            Ok(match stored {
                None => DEFAULT_TEMPLATE.to_string(),
                Some(t) if t == LEGACY_DEFAULT_TEMPLATE => DEFAULT_TEMPLATE.to_string(),
                Some(t) => t,
            })
        }

        fn save(&self, template: &str) -> Result<(), StorageError> {
            self.slots
                .lock()
                .unwrap()
                .insert("template".to_string(), template.to_string());
            Ok(())
        }
    }

    #[test]
    fn missing_file_yields_default() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileTemplateStore::at(dir.path().join("template.toml"));
        assert_eq!(store.load().unwrap(), DEFAULT_TEMPLATE);
    }

    #[test]
    fn save_then_load_roundtrips() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileTemplateStore::at(dir.path().join("template.toml"));
        store.save("{{totaltime}} done").unwrap();
        assert_eq!(store.load().unwrap(), "{{totaltime}} done");
    }

    #[test]
    fn legacy_default_is_migrated_on_load() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileTemplateStore::at(dir.path().join("template.toml"));
        store.save(LEGACY_DEFAULT_TEMPLATE).unwrap();
        assert_eq!(store.load().unwrap(), DEFAULT_TEMPLATE);
    }

    #[test]
    fn non_default_values_are_not_migrated() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileTemplateStore::at(dir.path().join("template.toml"));
        store.save("自定义 {{TotalTime}}").unwrap();
        assert_eq!(store.load().unwrap(), "自定义 {{TotalTime}}");
    }

    #[test]
    fn corrupt_slot_is_an_error_not_a_panic() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("template.toml");
        std::fs::write(&path, "not = [valid").unwrap();
        let store = FileTemplateStore::at(&path);
        assert!(matches!(store.load(), Err(StorageError::ParseFailed(_))));
    }

    #[test]
    fn memory_store_honors_the_same_contract() {
        let store = MemoryTemplateStore::new();
        assert_eq!(store.load().unwrap(), DEFAULT_TEMPLATE);
        store.save(LEGACY_DEFAULT_TEMPLATE).unwrap();
        assert_eq!(store.load().unwrap(), DEFAULT_TEMPLATE);
        store.save("mine").unwrap();
        assert_eq!(store.load().unwrap(), "mine");
    }
}
