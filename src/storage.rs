//! Device-local key/value persistence.
//!
//! Everything the client remembers between sessions goes through
//! [`KeyValueStore`]: tutorial progress, dismissal flags, onboarding state.
//! In the browser that is `window.localStorage`; when storage is disabled the
//! app falls back to an in-memory store so progress lasts for the session.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{AppError, AppResult};
use crate::util::cwarn;

pub trait KeyValueStore {
    fn get(&self, key: &str) -> AppResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> AppResult<()>;
    fn remove(&self, key: &str) -> AppResult<()>;
}

/// `window.localStorage`.
pub struct LocalStore {
    storage: web_sys::Storage,
}

impl LocalStore {
    pub fn open() -> AppResult<Self> {
        let win = web_sys::window().ok_or(AppError::StorageUnavailable)?;
        match win.local_storage() {
            Ok(Some(storage)) => Ok(Self { storage }),
            _ => Err(AppError::StorageUnavailable),
        }
    }
}

fn js_err(e: wasm_bindgen::JsValue) -> AppError {
    AppError::Storage(format!("{:?}", e))
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        self.storage.get_item(key).map_err(js_err)
    }

    fn set(&self, key: &str, value: &str) -> AppResult<()> {
        self.storage.set_item(key, value).map_err(js_err)
    }

    fn remove(&self, key: &str) -> AppResult<()> {
        self.storage.remove_item(key).map_err(js_err)
    }
}

#[derive(Default)]
pub struct MemoryStore {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> AppResult<()> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> AppResult<()> {
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}

/// Shared handle passed through props and context; equal when it is the same store.
#[derive(Clone)]
pub struct DeviceStore(pub Rc<dyn KeyValueStore>);

impl DeviceStore {
    /// Local storage when the browser allows it, otherwise a session-only memory store.
    pub fn open() -> Self {
        match LocalStore::open() {
            Ok(store) => Self(Rc::new(store)),
            Err(e) => {
                cwarn(&format!("{e}; progress will not survive a reload"));
                Self::memory()
            }
        }
    }

    pub fn memory() -> Self {
        Self(Rc::new(MemoryStore::new()))
    }
}

impl PartialEq for DeviceStore {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl std::ops::Deref for DeviceStore {
    type Target = dyn KeyValueStore;

    fn deref(&self) -> &Self::Target {
        &*self.0
    }
}

/// `Ok(None)` when the key is absent.
pub fn read_json<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> AppResult<Option<T>> {
    match store.get(key)? {
        Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
        None => Ok(None),
    }
}

pub fn write_json<T: Serialize + ?Sized>(store: &dyn KeyValueStore, key: &str, value: &T) -> AppResult<()> {
    let raw = serde_json::to_string(value)?;
    store.set(key, &raw)
}

/// Flags are stored as `"true"` or not at all.
pub fn read_flag(store: &dyn KeyValueStore, key: &str) -> bool {
    match store.get(key) {
        Ok(v) => v.as_deref() == Some("true"),
        Err(e) => {
            cwarn(&format!("reading {key}: {e}"));
            false
        }
    }
}

pub fn write_flag(store: &dyn KeyValueStore, key: &str, on: bool) {
    let res = if on {
        store.set(key, "true")
    } else {
        store.remove(key)
    };
    if let Err(e) = res {
        cwarn(&format!("writing {key}: {e}"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_round_trip_and_clear() {
        let store = MemoryStore::new();
        assert!(!read_flag(&store, "k"));
        write_flag(&store, "k", true);
        assert_eq!(store.get("k").unwrap().as_deref(), Some("true"));
        assert!(read_flag(&store, "k"));
        write_flag(&store, "k", false);
        assert_eq!(store.get("k").unwrap(), None);
    }

    #[test]
    fn non_true_flag_values_read_as_unset() {
        let store = MemoryStore::new();
        store.set("k", "1").unwrap();
        assert!(!read_flag(&store, "k"));
    }

    #[test]
    fn device_store_equality_is_identity() {
        let a = DeviceStore::memory();
        let b = DeviceStore::memory();
        assert!(a == a.clone());
        assert!(a != b);
        a.set("k", "v").unwrap();
        assert_eq!(b.get("k").unwrap(), None);
    }

    #[test]
    fn malformed_json_surfaces_decode_error() {
        let store = MemoryStore::new();
        store.set("ids", "[not json").unwrap();
        let res = read_json::<Vec<String>>(&store, "ids");
        assert!(matches!(res, Err(AppError::Decode(_))));
        assert!(matches!(read_json::<Vec<String>>(&store, "missing"), Ok(None)));
    }
}
