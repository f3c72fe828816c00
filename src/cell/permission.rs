//! Runtime permissions gating the audio device picker

use std::cell::RefCell;
use std::collections::HashSet;

/// Capabilities that need the user's consent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    RecordAudio,
}

/// Callback receiving the outcome of a permission request
pub type PermissionCallback = Box<dyn FnOnce(bool)>;

/// Platform permission subsystem.
///
/// `request` must invoke the callback exactly once, on the UI thread, either
/// before returning or later from the event loop.
pub trait PermissionProvider {
    fn status(&self, capability: Capability) -> bool;

    fn request(&self, capability: Capability, callback: PermissionCallback);
}

/// Desktop platforms have no capture permission prompt of their own, so a
/// request is answered immediately and remembered for the session.
#[derive(Debug)]
pub struct DesktopPermissions {
    granted: RefCell<HashSet<Capability>>,
    grant_on_request: bool,
}

impl Default for DesktopPermissions {
    fn default() -> Self {
        Self::new(true)
    }
}

impl DesktopPermissions {
    pub fn new(grant_on_request: bool) -> Self {
        Self {
            granted: RefCell::new(HashSet::new()),
            grant_on_request,
        }
    }

    /// Mark a capability as already granted
    pub fn granted(self, capability: Capability) -> Self {
        self.granted.borrow_mut().insert(capability);
        self
    }
}

impl PermissionProvider for DesktopPermissions {
    fn status(&self, capability: Capability) -> bool {
        self.granted.borrow().contains(&capability)
    }

    fn request(&self, capability: Capability, callback: PermissionCallback) {
        if self.grant_on_request {
            self.granted.borrow_mut().insert(capability);
        }
        tracing::debug!(
            "Permission request for {:?}: granted={}",
            capability,
            self.grant_on_request
        );
        callback(self.grant_on_request);
    }
}
