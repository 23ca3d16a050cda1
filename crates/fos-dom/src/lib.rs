//! fOS DOM - Document event target
//!
//! The document-side half of custom events: script values, native
//! `CustomEvent` objects and a `Document` that listeners bind to and events
//! are dispatched on.

mod document;
mod dom_events;
mod value;

pub use document::{Document, ListenerId, NativeListener};
pub use dom_events::{CustomEvent, EventDispatcher};
pub use value::{Function, Value};

/// DOM error
#[derive(Debug, thiserror::Error)]
pub enum DomError {
    #[error("Document {url} is closed")]
    Closed { url: String },
}

/// Result type for DOM operations
pub type Result<T> = std::result::Result<T, DomError>;
