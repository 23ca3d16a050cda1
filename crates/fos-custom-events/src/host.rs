//! Host document seam
//!
//! The registry never touches native listeners directly. It installs one
//! handler per event type and fires events through an [`EventHost`].

use fos_dom::{CustomEvent, Document, Value};

use crate::{CeError, Result};

/// Native handler installed once per event type.
/// Returns `false` to signal the event was handled.
pub type NativeHandler = Box<dyn Fn(&CustomEvent) -> bool>;

/// Document wrapper the registry binds to
pub trait EventHost {
    /// Capability marker, checked before anything is installed
    fn is_event_host(&self) -> bool;

    /// Install a native listener for `event_type`
    fn event_bind(&self, event_type: &str, handler: NativeHandler);

    /// Synchronously dispatch a native custom event of `event_type`
    fn trigger(&self, event_type: &str, detail: Vec<Value>) -> Result<()>;
}

impl EventHost for Document {
    fn is_event_host(&self) -> bool {
        !self.is_closed()
    }

    fn event_bind(&self, event_type: &str, handler: NativeHandler) {
        self.add_event_listener(event_type, handler);
    }

    fn trigger(&self, event_type: &str, detail: Vec<Value>) -> Result<()> {
        self.dispatch_custom_event(event_type, detail)
            .map(|_| ())
            .map_err(|e| CeError::Host(e.to_string()))
    }
}
