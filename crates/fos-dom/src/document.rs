//! Document - Event target API
//!
//! The document is the single target custom events are bound on and
//! dispatched to. Listeners are keyed by event type and run in registration
//! order.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;
use std::time::Instant;

use crate::{CustomEvent, DomError, EventDispatcher, Result, Value};

/// Native listener. Returning `false` marks the event as handled, which
/// prevents its default action and stops propagation.
pub type NativeListener = Rc<dyn Fn(&CustomEvent) -> bool>;

/// Listener identifier, unique per document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(pub(crate) u64);

struct ListenerEntry {
    id: ListenerId,
    callback: NativeListener,
}

/// HTML Document
pub struct Document {
    /// Document URL
    url: String,
    /// Creation time, origin for event timestamps
    created: Instant,
    /// Event type -> listeners
    listeners: RefCell<HashMap<String, Vec<ListenerEntry>>>,
    next_id: Cell<u64>,
    closed: Cell<bool>,
}

impl Document {
    /// Create a new empty document
    pub fn new(url: &str) -> Self {
        Self {
            url: url.to_string(),
            created: Instant::now(),
            listeners: RefCell::new(HashMap::new()),
            next_id: Cell::new(0),
            closed: Cell::new(false),
        }
    }

    /// Get document URL
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Add an event listener for `event_type`
    pub fn add_event_listener<F>(&self, event_type: &str, callback: F) -> ListenerId
    where
        F: Fn(&CustomEvent) -> bool + 'static,
    {
        let id = ListenerId(self.next_id.get());
        self.next_id.set(id.0 + 1);

        self.listeners
            .borrow_mut()
            .entry(event_type.to_string())
            .or_default()
            .push(ListenerEntry {
                id,
                callback: Rc::new(callback),
            });

        tracing::trace!("{}: listener {:?} added for '{}'", self.url, id, event_type);
        id
    }

    /// Remove an event listener
    pub fn remove_event_listener(&self, event_type: &str, id: ListenerId) -> bool {
        let mut listeners = self.listeners.borrow_mut();
        let Some(entries) = listeners.get_mut(event_type) else {
            return false;
        };

        let before = entries.len();
        entries.retain(|entry| entry.id != id);
        let removed = entries.len() < before;

        if entries.is_empty() {
            listeners.remove(event_type);
        }
        removed
    }

    /// Number of listeners bound to `event_type`
    pub fn listener_count(&self, event_type: &str) -> usize {
        self.listeners
            .borrow()
            .get(event_type)
            .map_or(0, Vec::len)
    }

    /// Event types with at least one listener, sorted
    pub fn event_types(&self) -> Vec<String> {
        let mut types: Vec<String> = self.listeners.borrow().keys().cloned().collect();
        types.sort();
        types
    }

    /// Dispatch a custom event of `event_type` carrying `detail`.
    ///
    /// Listeners run synchronously. The listener list is captured before the
    /// first listener runs, so listeners added during dispatch wait for the
    /// next event. Returns false if a listener prevented the default action.
    pub fn dispatch_custom_event(&self, event_type: &str, detail: Vec<Value>) -> Result<bool> {
        let event = CustomEvent::new(event_type, detail).with_timestamp(self.now());
        self.dispatch_event(event)
    }

    /// Close the document. Later dispatches fail.
    pub fn close(&self) {
        self.closed.set(true);
    }

    /// Whether the document has been closed
    pub fn is_closed(&self) -> bool {
        self.closed.get()
    }

    fn now(&self) -> f64 {
        self.created.elapsed().as_secs_f64() * 1000.0
    }
}

impl EventDispatcher for Document {
    fn dispatch_event(&self, mut event: CustomEvent) -> Result<bool> {
        if self.is_closed() {
            return Err(DomError::Closed { url: self.url.clone() });
        }

        let snapshot: Vec<NativeListener> = self
            .listeners
            .borrow()
            .get(&event.event_type)
            .map(|entries| entries.iter().map(|e| e.callback.clone()).collect())
            .unwrap_or_default();

        tracing::trace!(
            "{}: dispatching '{}' to {} listener(s)",
            self.url,
            event.event_type,
            snapshot.len()
        );

        for listener in snapshot {
            if !listener(&event) {
                event.prevent_default();
                event.stop_propagation();
            }
        }

        Ok(!event.is_default_prevented())
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new("about:blank")
    }
}

impl std::fmt::Debug for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Document")
            .field("url", &self.url)
            .field("event_types", &self.event_types())
            .field("closed", &self.is_closed())
            .finish()
    }
}
