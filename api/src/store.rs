//! A tiny persisted key-value store.
//!
//! On the web this is `window.localStorage`; on desktop it is a JSON file in
//! the platform data directory. Only two keys exist today and there is no
//! schema versioning. All operations are silent no-ops when the backing
//! store is unavailable.

/// Two-letter UI language code.
pub const LANGUAGE_KEY: &str = "language";
/// Opaque placeholder session token.
pub const USER_TOKEN_KEY: &str = "userToken";

#[cfg(target_arch = "wasm32")]
pub use wasm32::*;

#[cfg(not(target_arch = "wasm32"))]
pub use non_wasm32::*;

#[cfg(target_arch = "wasm32")]
mod wasm32 {
    fn local_storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }

    pub fn get(key: &str) -> Option<String> {
        local_storage()?.get_item(key).ok()?
    }

    pub fn set(key: &str, value: &str) {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(key, value);
        }
    }

    pub fn remove(key: &str) {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(key);
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod non_wasm32 {
    use std::collections::BTreeMap;
    use std::path::Path;
    use std::path::PathBuf;

    use dioxus_logger::tracing::warn;

    fn store_path() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(std::env::temp_dir)
            .join("printhub")
            .join("store.json")
    }

    pub(crate) fn read_map(path: &Path) -> BTreeMap<String, String> {
        match std::fs::read_to_string(path) {
            Ok(contents) => serde_json::from_str(&contents).unwrap_or_default(),
            Err(_) => BTreeMap::new(),
        }
    }

    pub(crate) fn write_map(path: &Path, map: &BTreeMap<String, String>) {
        if let Some(parent) = path.parent() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                warn!("could not create store dir: {e}");
                return;
            }
        }
        match serde_json::to_string_pretty(map) {
            Ok(json) => {
                if let Err(e) = std::fs::write(path, json) {
                    warn!("could not write store file: {e}");
                }
            }
            Err(e) => warn!("could not serialize store: {e}"),
        }
    }

    pub fn get(key: &str) -> Option<String> {
        read_map(&store_path()).get(key).cloned()
    }

    pub fn set(key: &str, value: &str) {
        let path = store_path();
        let mut map = read_map(&path);
        map.insert(key.to_string(), value.to_string());
        write_map(&path, &map);
    }

    pub fn remove(key: &str) {
        let path = store_path();
        let mut map = read_map(&path);
        if map.remove(key).is_some() {
            write_map(&path, &map);
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn round_trips_through_file() {
            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().join("store.json");

            let mut map = BTreeMap::new();
            map.insert("language".to_string(), "ar".to_string());
            map.insert("userToken".to_string(), "fake-token-123".to_string());
            write_map(&path, &map);

            let loaded = read_map(&path);
            assert_eq!(loaded, map);
        }

        #[test]
        fn missing_file_reads_empty() {
            let dir = tempfile::tempdir().unwrap();
            assert!(read_map(&dir.path().join("nope.json")).is_empty());
        }
    }
}
