// Copyright 2026 Muvon Un Limited
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::fs;
use std::path::PathBuf;

use crate::catalog::taxonomy::{TaxonomyKind, TaxonomyRegistry};
use crate::catalog::types::FaqRecord;
use crate::constants::{CATEGORIES_KEY, RECORDS_KEY, SYSTEMS_KEY, THEME_KEY, TYPES_KEY};
use crate::error::{CatalogError, CatalogResult};

/// Persistent key-value store boundary. The catalog only ever reads and
/// writes serialized blobs under fixed key names; what backs them is an
/// external concern.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> CatalogResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> CatalogResult<()>;
}

/// Get the system-wide storage directory for pfbase
/// Following XDG Base Directory specification on Unix-like systems
/// and proper conventions on other systems
pub fn get_system_storage_dir() -> CatalogResult<PathBuf> {
    let base_dir = if cfg!(target_os = "macos") {
        // macOS: ~/.local/share/pfbase
        dirs::home_dir()
            .ok_or_else(|| CatalogError::Persistence("unable to determine home directory".into()))?
            .join(".local")
            .join("share")
            .join("pfbase")
    } else if cfg!(target_os = "windows") {
        // Windows: %APPDATA%/pfbase
        dirs::data_dir()
            .ok_or_else(|| CatalogError::Persistence("unable to determine data directory".into()))?
            .join("pfbase")
    } else {
        // Linux and other Unix-like: ~/.local/share/pfbase or $XDG_DATA_HOME/pfbase
        if let Ok(xdg_data_home) = std::env::var("XDG_DATA_HOME") {
            PathBuf::from(xdg_data_home).join("pfbase")
        } else {
            dirs::home_dir()
                .ok_or_else(|| {
                    CatalogError::Persistence("unable to determine home directory".into())
                })?
                .join(".local")
                .join("share")
                .join("pfbase")
        }
    };

    if !base_dir.exists() {
        fs::create_dir_all(&base_dir)?;
    }

    Ok(base_dir)
}

/// Get the system config file path
/// Stored directly under ~/.local/share/pfbase/ on all systems
pub fn get_system_config_path() -> CatalogResult<PathBuf> {
    let system_dir = get_system_storage_dir()?;
    Ok(system_dir.join("config.toml"))
}

/// File-backed key-value store: one JSON blob per key under the storage
/// directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    pub fn open_default() -> CatalogResult<Self> {
        Ok(Self::new(get_system_storage_dir()?))
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> CatalogResult<Option<String>> {
        let path = self.key_path(key);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(path)?))
    }

    fn set(&self, key: &str, value: &str) -> CatalogResult<()> {
        if !self.dir.exists() {
            fs::create_dir_all(&self.dir)?;
        }
        fs::write(self.key_path(key), value)?;
        Ok(())
    }
}

/// Loads the record collection, falling back to the built-in seed
/// collection when the key is absent or holds malformed data. Load
/// failures never crash the session.
pub fn load_records(store: &dyn KeyValueStore) -> Vec<FaqRecord> {
    match store.get(RECORDS_KEY) {
        Ok(Some(raw)) => match serde_json::from_str(&raw) {
            Ok(records) => records,
            Err(e) => {
                tracing::warn!("stored records are malformed, using seed data: {}", e);
                crate::constants::seed_records()
            }
        },
        Ok(None) => crate::constants::seed_records(),
        Err(e) => {
            tracing::warn!("failed to read stored records, using seed data: {}", e);
            crate::constants::seed_records()
        }
    }
}

pub fn save_records(store: &dyn KeyValueStore, records: &[FaqRecord]) -> CatalogResult<()> {
    let raw = serde_json::to_string(records)?;
    store.set(RECORDS_KEY, &raw)
}

/// Loads the three taxonomy lists; any list that is absent or malformed
/// falls back to its default vocabulary independently.
pub fn load_taxonomy(store: &dyn KeyValueStore) -> TaxonomyRegistry {
    let defaults = TaxonomyRegistry::with_defaults();
    let systems = load_list(store, SYSTEMS_KEY, defaults.values(TaxonomyKind::Systems));
    let categories = load_list(
        store,
        CATEGORIES_KEY,
        defaults.values(TaxonomyKind::Categories),
    );
    let types = load_list(store, TYPES_KEY, defaults.values(TaxonomyKind::Types));
    TaxonomyRegistry::from_lists(systems, categories, types)
}

pub fn save_taxonomy(store: &dyn KeyValueStore, registry: &TaxonomyRegistry) -> CatalogResult<()> {
    store.set(
        SYSTEMS_KEY,
        &serde_json::to_string(registry.values(TaxonomyKind::Systems))?,
    )?;
    store.set(
        CATEGORIES_KEY,
        &serde_json::to_string(registry.values(TaxonomyKind::Categories))?,
    )?;
    store.set(
        TYPES_KEY,
        &serde_json::to_string(registry.values(TaxonomyKind::Types))?,
    )?;
    Ok(())
}

pub fn load_theme(store: &dyn KeyValueStore) -> String {
    match store.get(THEME_KEY) {
        Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_else(|_| "light".to_string()),
        _ => "light".to_string(),
    }
}

pub fn save_theme(store: &dyn KeyValueStore, theme: &str) -> CatalogResult<()> {
    store.set(THEME_KEY, &serde_json::to_string(theme)?)
}

fn load_list(store: &dyn KeyValueStore, key: &str, defaults: &[String]) -> Vec<String> {
    match store.get(key) {
        Ok(Some(raw)) => match serde_json::from_str(&raw) {
            Ok(list) => list,
            Err(e) => {
                tracing::warn!("stored {} list is malformed, using defaults: {}", key, e);
                defaults.to_vec()
            }
        },
        _ => defaults.to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store() -> (TempDir, FileStore) {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path().to_path_buf());
        (dir, store)
    }

    #[test]
    fn test_file_store_round_trip() {
        let (_dir, store) = store();

        assert!(store.get("missing").unwrap().is_none());
        store.set("records", "[]").unwrap();
        assert_eq!(store.get("records").unwrap().unwrap(), "[]");
    }

    #[test]
    fn test_load_records_seeds_when_absent() {
        let (_dir, store) = store();

        let records = load_records(&store);
        assert!(!records.is_empty(), "fresh store starts with seed data");
    }

    #[test]
    fn test_load_records_seeds_on_malformed_data() {
        let (_dir, store) = store();
        store.set(RECORDS_KEY, "{ not json").unwrap();

        // Seed timestamps differ per call, so compare identity only
        let records = load_records(&store);
        assert_eq!(records[0].id, "pf-685-seed");
    }

    #[test]
    fn test_records_save_then_load() {
        let (_dir, store) = store();
        let records = crate::constants::seed_records();

        save_records(&store, &records).unwrap();
        assert_eq!(load_records(&store), records);
    }

    #[test]
    fn test_taxonomy_lists_fall_back_independently() {
        let (_dir, store) = store();
        store.set(SYSTEMS_KEY, "not a list").unwrap();
        store.set(CATEGORIES_KEY, r#"["Only"]"#).unwrap();

        let registry = load_taxonomy(&store);
        let defaults = TaxonomyRegistry::with_defaults();

        assert_eq!(
            registry.values(TaxonomyKind::Systems),
            defaults.values(TaxonomyKind::Systems)
        );
        assert_eq!(
            registry.values(TaxonomyKind::Categories),
            &["Only".to_string()]
        );
    }

    #[test]
    fn test_theme_defaults_to_light() {
        let (_dir, store) = store();

        assert_eq!(load_theme(&store), "light");
        save_theme(&store, "dark").unwrap();
        assert_eq!(load_theme(&store), "dark");
    }
}
