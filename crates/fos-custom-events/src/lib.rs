//! fOS Custom Events
//!
//! Namespaced custom events on top of a host document.
//!
//! Features:
//! - One native listener per event type, shared by every name under it
//! - Persistent and one-shot callback queues
//! - Per-call FIFO/LIFO insertion and identity-based deduplication
//! - `<type>-<name>` namespaces with a default type for bare names

mod config;
mod host;
mod namespace;
mod registry;
mod table;

pub use config::{CustomEventsConfig, DEFAULT_EVENT_TYPE, DEFAULT_SEPARATOR};
pub use host::{EventHost, NativeHandler};
pub use namespace::{event_type_of, EventNames};
pub use registry::CustomEvents;
pub use table::Order;

pub use fos_dom::{CustomEvent, Function, Value};

/// Custom events error
#[derive(Debug, thiserror::Error)]
pub enum CeError {
    #[error("Host document has not been defined")]
    HostMissing,

    #[error("Host is not a valid event host")]
    HostInvalid,

    #[error("{op}: callback not defined (got {found})")]
    InvalidCallback {
        op: &'static str,
        found: &'static str,
    },

    #[error("Host dispatch failed: {0}")]
    Host(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Result type for custom event operations
pub type Result<T> = std::result::Result<T, CeError>;
