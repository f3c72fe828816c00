//! Shared test utilities for setting cell and server switcher tests

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use globed_menu::cell::{Capability, PermissionCallback, PermissionProvider};
use globed_menu::config::{Config, MemorySettingsStore, SharedStore, shared};

/// In-memory store starting from default settings
pub fn memory_store() -> SharedStore<MemorySettingsStore> {
    shared(MemorySettingsStore::default())
}

/// In-memory store starting from `config`
pub fn memory_store_with(config: Config) -> SharedStore<MemorySettingsStore> {
    shared(MemorySettingsStore::new(config))
}

/// Permission provider whose requests stay pending until the test answers them
#[derive(Default)]
pub struct ScriptedPermissions {
    pub granted: Cell<bool>,
    pending: RefCell<Vec<PermissionCallback>>,
    pub requests: Cell<usize>,
}

impl ScriptedPermissions {
    pub fn pending(&self) -> usize {
        self.pending.borrow().len()
    }

    /// Answer every pending request with `granted`
    pub fn answer_all(&self, granted: bool) {
        if granted {
            self.granted.set(true);
        }
        let callbacks: Vec<_> = self.pending.borrow_mut().drain(..).collect();
        for callback in callbacks {
            callback(granted);
        }
    }
}

impl PermissionProvider for ScriptedPermissions {
    fn status(&self, _capability: Capability) -> bool {
        self.granted.get()
    }

    fn request(&self, _capability: Capability, callback: PermissionCallback) {
        self.requests.set(self.requests.get() + 1);
        self.pending.borrow_mut().push(callback);
    }
}

pub fn scripted_permissions() -> Rc<ScriptedPermissions> {
    Rc::new(ScriptedPermissions::default())
}
