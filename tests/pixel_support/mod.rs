#![allow(dead_code)]

use std::cell::{Cell, RefCell};

use honest_herbalist_site::utils::checkout::CheckoutNavigator;
use honest_herbalist_site::utils::dedup::{KeyValueStorage, StorageError};
use honest_herbalist_site::utils::meta_pixel::{PixelTransport, TrackedEvent, TrackingError};

/// Records every call; optionally fails `track` like a throwing `fbq`.
#[derive(Default)]
pub struct RecordingTransport {
    pub init_calls: RefCell<Vec<String>>,
    pub events: RefCell<Vec<TrackedEvent>>,
    pub fail_track: Cell<bool>,
    pub no_window: Cell<bool>,
}

impl RecordingTransport {
    pub fn failing() -> Self {
        let transport = Self::default();
        transport.fail_track.set(true);
        transport
    }

    pub fn without_window() -> Self {
        let transport = Self::default();
        transport.no_window.set(true);
        transport
    }

    pub fn named(&self, name: &str) -> Vec<TrackedEvent> {
        self.events
            .borrow()
            .iter()
            .filter(|event| event.name == name)
            .cloned()
            .collect()
    }
}

impl PixelTransport for RecordingTransport {
    fn has_window(&self) -> bool {
        !self.no_window.get()
    }

    fn init(&self, account_id: &str) -> Result<(), TrackingError> {
        self.init_calls.borrow_mut().push(account_id.to_string());
        Ok(())
    }

    fn track(&self, event: &TrackedEvent) -> Result<(), TrackingError> {
        self.events.borrow_mut().push(event.clone());
        if self.fail_track.get() {
            return Err(TrackingError::Transport("fbq threw".into()));
        }
        Ok(())
    }
}

/// Storage that throws on every access, as with privacy-locked browsers.
pub struct ThrowingStorage;

impl KeyValueStorage for ThrowingStorage {
    fn get_item(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Access("SecurityError: access denied".into()))
    }

    fn set_item(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Access("SecurityError: access denied".into()))
    }
}

#[derive(Default)]
pub struct RecordingNavigator {
    pub visits: RefCell<Vec<(String, u32)>>,
}

impl CheckoutNavigator for RecordingNavigator {
    fn navigate_after(&self, url: &str, delay_ms: u32) {
        self.visits.borrow_mut().push((url.to_string(), delay_ms));
    }
}
