// Durable key -> string storage behind the design stores.
//
// Values are raw strings rather than the JSON gloo-storage writes by
// default, so preferences saved by earlier versions of the site stay readable.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use super::error::StorageError;

pub type StorageResult<T> = Result<T, StorageError>;

pub trait PreferenceStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;
    fn remove(&self, key: &str) -> StorageResult<()>;
}

/// `window.localStorage`.
#[derive(Debug, Clone, Copy)]
pub struct BrowserStorage {
    _private: (),
}

impl BrowserStorage {
    /// `None` when the page has no usable local storage (privacy modes,
    /// sandboxed frames).
    pub fn detect() -> Option<Self> {
        let available = web_sys::window()
            .and_then(|window| window.local_storage().ok().flatten())
            .is_some();
        available.then_some(Self { _private: () })
    }

    fn raw(&self) -> web_sys::Storage {
        use gloo_storage::{LocalStorage, Storage};
        LocalStorage::raw()
    }
}

impl PreferenceStorage for BrowserStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        self.raw().get_item(key).map_err(|e| rejected(key, e))
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        self.raw().set_item(key, value).map_err(|e| rejected(key, e))
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        self.raw().remove_item(key).map_err(|e| rejected(key, e))
    }
}

fn rejected(key: &str, error: wasm_bindgen::JsValue) -> StorageError {
    StorageError::Rejected {
        key: key.to_owned(),
        reason: format!("{error:?}"),
    }
}

/// Process-local storage, used when the browser has none and in tests.
///
/// Clones share the same map, so a second store built over a clone sees
/// what the first one wrote, the way a reloaded page sees local storage.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<HashMap<String, String>>>,
    unavailable: Rc<RefCell<bool>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every following call fail with [`StorageError::Unavailable`].
    pub fn make_unavailable(&self, unavailable: bool) {
        *self.unavailable.borrow_mut() = unavailable;
    }

    pub fn raw_get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    pub fn raw_set(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_owned(), value.to_owned());
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    fn check(&self) -> StorageResult<()> {
        if *self.unavailable.borrow() {
            Err(StorageError::Unavailable)
        } else {
            Ok(())
        }
    }
}

impl PreferenceStorage for MemoryStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        self.check()?;
        Ok(self.raw_get(key))
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        self.check()?;
        self.raw_set(key, value);
        Ok(())
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        self.check()?;
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

/// Storage as the stores see it: never fails.
///
/// A failed write is logged and kept in a session overlay, so the rest of the
/// session reads back what the user chose even though it won't survive a
/// reload. A failed read is treated as an absent value.
#[derive(Clone, derivative::Derivative)]
#[derivative(Debug)]
pub struct Preferences {
    #[derivative(Debug = "ignore")]
    backend: Rc<dyn PreferenceStorage>,
    // None marks a removal that could not reach the backend
    overlay: Rc<RefCell<HashMap<String, Option<String>>>>,
}

impl Preferences {
    pub fn new(backend: Rc<dyn PreferenceStorage>) -> Self {
        Self {
            backend,
            overlay: Rc::default(),
        }
    }

    /// An empty stored string reads as absent.
    pub fn get(&self, key: &str) -> Option<String> {
        let value = match self.overlay.borrow().get(key) {
            Some(value) => value.clone(),
            None => match self.backend.get(key) {
                Ok(value) => value,
                Err(e) => {
                    tracing::warn!(key, error = %e, "failed to read preference, using default");
                    None
                }
            },
        };

        value.filter(|value| !value.is_empty())
    }

    pub fn set(&self, key: &str, value: &str) {
        match self.backend.set(key, value) {
            Ok(()) => {
                self.overlay.borrow_mut().remove(key);
            }
            Err(e) => {
                tracing::warn!(key, error = %e, "failed to persist preference, keeping it for this session only");
                self.overlay
                    .borrow_mut()
                    .insert(key.to_owned(), Some(value.to_owned()));
            }
        }
    }

    pub fn remove(&self, key: &str) {
        match self.backend.remove(key) {
            Ok(()) => {
                self.overlay.borrow_mut().remove(key);
            }
            Err(e) => {
                tracing::warn!(key, error = %e, "failed to remove preference");
                self.overlay.borrow_mut().insert(key.to_owned(), None);
            }
        }
    }

    pub(crate) fn same_backend(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.overlay, &other.overlay)
    }
}
