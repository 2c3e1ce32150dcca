//! The signed-in user, cached in localStorage until logout.
//!
//! Identity is trusted as cached; nothing here talks to the server.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use crate::models::{User, UserId};

pub const USER_KEY: &str = "fa_user";
pub const USER_NAME_KEY: &str = "fa_user_name";

pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: &str);
    fn remove_item(&self, key: &str);
}

pub struct BrowserStorage {
    storage: web_sys::Storage,
}

impl BrowserStorage {
    pub fn open() -> Option<Self> {
        let window = web_sys::window()?;
        match window.local_storage() {
            Ok(Some(storage)) => Some(Self { storage }),
            _ => None,
        }
    }
}

impl KeyValueStore for BrowserStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.storage.get_item(key).ok().flatten()
    }

    fn set_item(&self, key: &str, value: &str) {
        if self.storage.set_item(key, value).is_err() {
            log::warn!("localStorage refused write of `{}`", key);
        }
    }

    fn remove_item(&self, key: &str) {
        let _ = self.storage.remove_item(key);
    }
}

#[derive(Default)]
pub struct MemoryStorage {
    items: RefCell<HashMap<String, String>>,
}

impl KeyValueStore for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    fn remove_item(&self, key: &str) {
        self.items.borrow_mut().remove(key);
    }
}

#[derive(Clone)]
pub struct Session {
    store: Rc<dyn KeyValueStore>,
}

impl PartialEq for Session {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.store, &other.store)
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("user_id", &self.user_id())
            .finish()
    }
}

impl Session {
    pub fn new(store: Rc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    pub fn browser() -> Self {
        match BrowserStorage::open() {
            Some(storage) => Self::new(Rc::new(storage)),
            None => {
                log::warn!("localStorage unavailable, session will not survive a reload");
                Self::in_memory()
            }
        }
    }

    pub fn in_memory() -> Self {
        Self::new(Rc::new(MemoryStorage::default()))
    }

    pub fn get(&self) -> Option<User> {
        let raw = self.store.get_item(USER_KEY)?;
        match serde_json::from_str::<Option<User>>(&raw) {
            Ok(user) => user,
            Err(err) => {
                log::warn!("ignoring unreadable `{}` entry: {}", USER_KEY, err);
                None
            }
        }
    }

    pub fn set(&self, user: &User) {
        match serde_json::to_string(user) {
            Ok(raw) => {
                self.store.set_item(USER_KEY, &raw);
                self.store.set_item(USER_NAME_KEY, user.display_name());
            }
            Err(err) => log::error!("could not serialise session user: {}", err),
        }
    }

    pub fn clear(&self) {
        self.store.remove_item(USER_KEY);
        self.store.remove_item(USER_NAME_KEY);
    }

    pub fn user_id(&self) -> Option<UserId> {
        self.get().map(|user| user.id)
    }

    pub fn display_name(&self) -> String {
        self.store
            .get_item(USER_NAME_KEY)
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| "User".to_string())
    }
}
