//! Namespaced listener tables
//!
//! Two-level map of event type -> event name -> callback queue. A name entry
//! only exists while its queue is non-empty and a type entry is pruned once
//! its last name is removed.

use std::collections::HashMap;

use fos_dom::Function;

/// Insertion position for a new callback
///
/// Chosen per call. Queues are always run head to tail, so a queue may hold
/// entries inserted under both orders.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Order {
    /// Append to the tail (first in, first out)
    #[default]
    Fifo,
    /// Prepend to the head (last in, first out)
    Lifo,
}

/// Callback queues for one table (persistent or one-shot)
#[derive(Debug, Default)]
pub(crate) struct EventTable {
    types: HashMap<String, HashMap<String, Vec<Function>>>,
}

impl EventTable {
    /// Make sure the sub-table for `event_type` exists
    pub fn ensure_type(&mut self, event_type: &str) {
        if !self.types.contains_key(event_type) {
            self.types.insert(event_type.to_string(), HashMap::new());
        }
    }

    pub fn has_type(&self, event_type: &str) -> bool {
        self.types.contains_key(event_type)
    }

    /// Insert a callback into the queue for `name`
    pub fn insert(&mut self, event_type: &str, name: &str, callback: Function, order: Order) {
        let queue = self
            .types
            .entry(event_type.to_string())
            .or_default()
            .entry(name.to_string())
            .or_default();

        match order {
            Order::Fifo => queue.push(callback),
            Order::Lifo => queue.insert(0, callback),
        }
    }

    /// Whether `callback` is already queued for `name`
    pub fn contains(&self, event_type: &str, name: &str, callback: &Function) -> bool {
        self.queue(event_type, name)
            .is_some_and(|queue| queue.iter().any(|f| f.ptr_eq(callback)))
    }

    /// Remove every occurrence of `callback` from the queue for `name`.
    /// Returns the number of entries removed.
    pub fn remove(&mut self, event_type: &str, name: &str, callback: &Function) -> usize {
        let Some(names) = self.types.get_mut(event_type) else {
            return 0;
        };
        let Some(queue) = names.get_mut(name) else {
            return 0;
        };

        let before = queue.len();
        queue.retain(|f| !f.ptr_eq(callback));
        let removed = before - queue.len();

        if queue.is_empty() {
            self.take(event_type, name);
        }
        removed
    }

    /// Detach the whole queue for `name`, pruning the type if it becomes empty
    pub fn take(&mut self, event_type: &str, name: &str) -> Option<Vec<Function>> {
        let names = self.types.get_mut(event_type)?;
        let queue = names.remove(name)?;
        if names.is_empty() {
            self.types.remove(event_type);
        }
        Some(queue)
    }

    /// Copy of the queue for `name`, head first
    pub fn snapshot(&self, event_type: &str, name: &str) -> Option<Vec<Function>> {
        self.queue(event_type, name).cloned()
    }

    pub fn len(&self, event_type: &str, name: &str) -> usize {
        self.queue(event_type, name).map_or(0, Vec::len)
    }

    fn queue(&self, event_type: &str, name: &str) -> Option<&Vec<Function>> {
        self.types.get(event_type).and_then(|names| names.get(name))
    }
}
