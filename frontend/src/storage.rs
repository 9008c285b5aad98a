use gloo_console::warn;
use gloo_utils::window;
use wasm_bindgen::JsValue;
use web_sys::Storage;
use workout_tracker_lib::storage::{KeyValueStorage, StorageError};

/// `window.localStorage`, or nothing when the browser refuses access.
pub struct LocalStorage {
    storage: Option<Storage>,
}

impl LocalStorage {
    pub fn new() -> Self {
        let storage = window().local_storage().ok().flatten();
        if storage.is_none() {
            warn!("localStorage is not available, workouts will not be saved");
        }
        Self { storage }
    }

    fn storage(&self) -> Result<&Storage, StorageError> {
        self.storage
            .as_ref()
            .ok_or_else(|| StorageError::Unavailable("localStorage is not available".into()))
    }
}

fn describe(err: JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

impl KeyValueStorage for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage()?
            .get_item(key)
            .map_err(|err| StorageError::Unavailable(describe(err)))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage()?
            .set_item(key, value)
            .map_err(|err| StorageError::Write(describe(err)))
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.storage()?
            .remove_item(key)
            .map_err(|err| StorageError::Write(describe(err)))
    }
}
