//! DOM Events
//!
//! Native custom events dispatched on a document.

use crate::Value;

/// Native custom event
#[derive(Debug, Clone)]
pub struct CustomEvent {
    pub event_type: String,
    pub detail: Vec<Value>,
    pub bubbles: bool,
    pub cancelable: bool,
    /// Milliseconds since the dispatching document was created
    pub timestamp: f64,
    default_prevented: bool,
    propagation_stopped: bool,
}

impl CustomEvent {
    /// Create a custom event with a detail payload
    pub fn new(event_type: &str, detail: Vec<Value>) -> Self {
        Self {
            event_type: event_type.to_string(),
            detail,
            bubbles: false,
            cancelable: true,
            timestamp: 0.0,
            default_prevented: false,
            propagation_stopped: false,
        }
    }

    /// Set the dispatch timestamp
    pub fn with_timestamp(mut self, timestamp: f64) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Prevent default action
    pub fn prevent_default(&mut self) {
        if self.cancelable {
            self.default_prevented = true;
        }
    }

    /// Stop propagation
    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }

    /// Check if default was prevented
    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented
    }

    /// Check if propagation was stopped
    pub fn is_propagation_stopped(&self) -> bool {
        self.propagation_stopped
    }
}

/// Event dispatcher trait
pub trait EventDispatcher {
    /// Dispatch an event. Returns false if the default action was prevented.
    fn dispatch_event(&self, event: CustomEvent) -> crate::Result<bool>;
}
