//! Custom event registry
//!
//! Keeps persistent and one-shot callback queues per event name and binds a
//! single native listener per event type on the host. Triggering a name
//! dispatches a native event of its type with `[name, ...args]` as detail;
//! the type's listener then fans out to the queues registered for that name.

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use fos_dom::{CustomEvent, Function, Value};

use crate::host::EventHost;
use crate::namespace::{event_type_of, EventNames};
use crate::table::{EventTable, Order};
use crate::{CeError, CustomEventsConfig, Result};

#[derive(Debug, Default)]
struct Tables {
    persistent: EventTable,
    once: EventTable,
    /// Types with a native listener installed. Never shrinks.
    bound: HashSet<String>,
}

/// State captured by the native listener of one event type
struct TypeContext {
    event_type: String,
    tables: Rc<RefCell<Tables>>,
}

impl TypeContext {
    /// Fan a native event out to the queues of the name in `detail[0]`.
    ///
    /// Callbacks receive the native event in place of the name, followed by
    /// the remaining detail values. No table borrow is held while callbacks
    /// run, so they are free to bind, remove and trigger.
    fn handle(&self, event: &CustomEvent) -> bool {
        let Some(name) = event.detail.first().and_then(Value::as_str) else {
            tracing::debug!(
                "ignoring '{}' event without a custom event name",
                self.event_type
            );
            return false;
        };
        let args = &event.detail[1..];

        let once = self.tables.borrow_mut().once.take(&self.event_type, name);
        if let Some(queue) = once {
            tracing::trace!("dispatching '{}' to {} one-shot callback(s)", name, queue.len());
            for callback in &queue {
                callback.call(event, args);
            }

            // One-shot registrations made while the batch ran are discarded
            self.tables.borrow_mut().once.take(&self.event_type, name);
        }

        let persistent = self.tables.borrow().persistent.snapshot(&self.event_type, name);
        if let Some(queue) = persistent {
            tracing::trace!("dispatching '{}' to {} callback(s)", name, queue.len());
            for callback in &queue {
                callback.call(event, args);
            }
        }

        false
    }
}

/// Namespaced custom event registry bound to one host document
///
/// Names follow `<type>-<name>`; names without a separator fall under the
/// configured default type (`DDomCE`).
///
/// ```rust,ignore
/// let doc = Rc::new(Document::new("about:blank"));
/// let events = CustomEvents::new(doc)?;
///
/// events.bind("cart-updated", Function::new(|_event, args| { /* ... */ }), Order::Fifo)?;
/// events.trigger("cart-updated", [3])?;
/// ```
pub struct CustomEvents<H: EventHost> {
    host: Rc<H>,
    config: CustomEventsConfig,
    tables: Rc<RefCell<Tables>>,
}

impl<H: EventHost> CustomEvents<H> {
    /// Create a registry on `host` with the default configuration
    pub fn new(host: Rc<H>) -> Result<Self> {
        Self::with_config(host, CustomEventsConfig::default())
    }

    /// Create a registry on `host`, failing if no host was provided
    pub fn from_host(host: Option<Rc<H>>) -> Result<Self> {
        let host = host.ok_or(CeError::HostMissing)?;
        Self::new(host)
    }

    /// Create a registry on `host` with `config`
    pub fn with_config(host: Rc<H>, config: CustomEventsConfig) -> Result<Self> {
        config.validate()?;
        if !host.is_event_host() {
            return Err(CeError::HostInvalid);
        }

        Ok(Self {
            host,
            config,
            tables: Rc::new(RefCell::new(Tables::default())),
        })
    }

    pub fn config(&self) -> &CustomEventsConfig {
        &self.config
    }

    pub fn host(&self) -> &Rc<H> {
        &self.host
    }

    /// Event type `name` is dispatched under
    pub fn event_type_of<'a>(&'a self, name: &'a str) -> &'a str {
        event_type_of(name, &self.config)
    }

    /// Bind `callback` to each of `names`, persistently
    pub fn bind(
        &self,
        names: impl Into<EventNames>,
        callback: impl Into<Value>,
        order: Order,
    ) -> Result<()> {
        let callback = expect_function("bind", callback.into())?;

        for name in names.into().iter() {
            let event_type = self.bind_type(name);
            self.tables
                .borrow_mut()
                .persistent
                .insert(&event_type, name, callback.clone(), order);
        }
        Ok(())
    }

    /// Bind `callback` to run on the next trigger of `name` only
    pub fn bind_once(&self, name: &str, callback: impl Into<Value>, order: Order) -> Result<()> {
        let callback = expect_function("bind_once", callback.into())?;

        let event_type = self.bind_type(name);
        self.tables
            .borrow_mut()
            .once
            .insert(&event_type, name, callback, order);
        Ok(())
    }

    /// Bind `callback` persistently unless the same function is already
    /// queued for `name`. Returns whether it was inserted.
    pub fn bind_unique(&self, name: &str, callback: impl Into<Value>, order: Order) -> Result<bool> {
        let callback = expect_function("bind_unique", callback.into())?;

        let event_type = self.bind_type(name);
        let mut tables = self.tables.borrow_mut();
        if tables.persistent.contains(&event_type, name, &callback) {
            return Ok(false);
        }
        tables.persistent.insert(&event_type, name, callback, order);
        Ok(true)
    }

    /// Remove every occurrence of `callback` bound to `name`, persistent and
    /// one-shot alike. Returns how many entries were removed.
    pub fn remove(&self, name: &str, callback: impl Into<Value>) -> Result<usize> {
        let callback = expect_function("remove", callback.into())?;

        let event_type = self.bind_type(name);
        let mut tables = self.tables.borrow_mut();
        let removed = tables.persistent.remove(&event_type, name, &callback)
            + tables.once.remove(&event_type, name, &callback);

        if removed > 0 {
            tracing::trace!("removed {} callback(s) from '{}'", removed, name);
        }
        Ok(removed)
    }

    /// Trigger `name`. Callbacks receive the native event followed by `args`.
    ///
    /// Runs synchronously: every matching callback has returned by the time
    /// this does.
    pub fn trigger<I>(&self, name: &str, args: I) -> Result<()>
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        let event_type = self.bind_type(name);

        let mut detail = vec![Value::from(name)];
        detail.extend(args.into_iter().map(Into::into));

        tracing::trace!("triggering '{}' on type '{}'", name, event_type);
        self.host.trigger(&event_type, detail)
    }

    /// Whether a native listener has been installed for `event_type`
    pub fn is_type_bound(&self, event_type: &str) -> bool {
        self.tables.borrow().bound.contains(event_type)
    }

    /// Event types with a native listener, sorted
    pub fn bound_types(&self) -> Vec<String> {
        let mut types: Vec<String> = self.tables.borrow().bound.iter().cloned().collect();
        types.sort();
        types
    }

    /// Number of queued callbacks for `name`, persistent and one-shot
    pub fn listener_count(&self, name: &str) -> usize {
        let event_type = self.event_type_of(name);
        let tables = self.tables.borrow();
        tables.persistent.len(event_type, name) + tables.once.len(event_type, name)
    }

    pub fn has_listeners(&self, name: &str) -> bool {
        self.listener_count(name) > 0
    }

    /// Resolve the type of `name`, creating its sub-tables and installing
    /// its native listener on first use.
    fn bind_type(&self, name: &str) -> String {
        let event_type = self.event_type_of(name).to_string();

        {
            let mut tables = self.tables.borrow_mut();
            tables.persistent.ensure_type(&event_type);
            tables.once.ensure_type(&event_type);
            if !tables.bound.insert(event_type.clone()) {
                return event_type;
            }
        }

        let context = TypeContext {
            event_type: event_type.clone(),
            tables: self.tables.clone(),
        };
        self.host
            .event_bind(&event_type, Box::new(move |event: &CustomEvent| context.handle(event)));

        tracing::debug!("bound native listener for custom event type '{}'", event_type);
        event_type
    }
}

impl<H: EventHost> std::fmt::Debug for CustomEvents<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CustomEvents")
            .field("config", &self.config)
            .field("bound_types", &self.bound_types())
            .finish()
    }
}

fn expect_function(op: &'static str, value: Value) -> Result<Function> {
    value.as_function().cloned().ok_or(CeError::InvalidCallback {
        op,
        found: value.type_name(),
    })
}
