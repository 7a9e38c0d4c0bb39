//! Event handler tables.
//!
//! Configurable behaviour in the form of a map from event kinds to function
//! values: the component that reads events only needs to know how to look a
//! handler up, never what the handlers do.
//!
//! # Examples
//!
//! ```
//! use lambdakit::dispatch::HandlerTable;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
//! enum Color { Blue, Red, Yellow }
//!
//! let event_handlers = HandlerTable::new()
//!     .with_handler(Color::Blue, |payload: u32| format!("blue {payload}"))
//!     .with_handler(Color::Red, |payload: u32| format!("red {payload}"));
//!
//! assert_eq!(event_handlers.dispatch(&Color::Blue, 7).unwrap(), "blue 7");
//! assert!(event_handlers.dispatch(&Color::Yellow, 7).is_err());
//! ```

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use crate::error::LambdaError;
use crate::function::{Function, Shareable};

/// A table of event handlers keyed by event kind.
///
/// * `K` - The event key (kind) type
/// * `E` - The event passed to a handler
/// * `R` - What a handler returns
pub struct HandlerTable<K, E, R = ()> {
    handlers: HashMap<K, Function<E, R>>,
}

impl<K, E, R> HandlerTable<K, E, R>
where
    K: Eq + Hash + fmt::Debug,
{
    /// Creates an empty table.
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Adds a handler for `key`, replacing any previous one (builder style).
    #[must_use]
    pub fn with_handler<F>(mut self, key: K, handler: F) -> Self
    where
        F: Fn(E) -> R + Shareable + 'static,
    {
        self.register(key, Function::new(handler));
        self
    }

    /// Registers `handler` for `key`.
    ///
    /// Returns the handler previously registered for `key`, if any.
    pub fn register(&mut self, key: K, handler: Function<E, R>) -> Option<Function<E, R>> {
        tracing::trace!(key = ?key, "registering event handler");
        self.handlers.insert(key, handler)
    }

    /// Removes and returns the handler for `key`.
    pub fn unregister(&mut self, key: &K) -> Option<Function<E, R>> {
        self.handlers.remove(key)
    }

    /// Returns the handler registered for `key`.
    pub fn handler(&self, key: &K) -> Option<&Function<E, R>> {
        self.handlers.get(key)
    }

    /// Returns `true` when a handler is registered for `key`.
    pub fn handles(&self, key: &K) -> bool {
        self.handlers.contains_key(key)
    }

    /// Number of registered handlers.
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Returns `true` when no handler is registered.
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Runs the handler registered for `key` with `event`.
    ///
    /// # Errors
    ///
    /// Returns [`LambdaError::UnknownEvent`] when no handler is registered
    /// for `key`. The event is dropped in that case.
    pub fn dispatch(&self, key: &K, event: E) -> Result<R, LambdaError> {
        let Some(handler) = self.handlers.get(key) else {
            tracing::warn!(key = ?key, "no handler registered for event");
            return Err(LambdaError::UnknownEvent {
                key: format!("{key:?}"),
            });
        };
        tracing::debug!(key = ?key, "dispatching event");
        Ok(handler.apply(event))
    }

    /// Dispatches each event in order, classifying it with `key_of`.
    ///
    /// This is the read-dispatch loop of an event consumer. Results are
    /// collected in event order.
    ///
    /// # Errors
    ///
    /// Stops at the first event without a handler and returns
    /// [`LambdaError::UnknownEvent`]; earlier events have already been
    /// handled, later ones are not.
    ///
    /// # Examples
    ///
    /// ```
    /// use lambdakit::dispatch::HandlerTable;
    ///
    /// let table = HandlerTable::new()
    ///     .with_handler("double", |n: i32| n * 2)
    ///     .with_handler("negate", |n: i32| -n);
    ///
    /// let events = [4, -3, 10];
    /// let results = table
    ///     .dispatch_all(events, |n| if *n > 0 { "double" } else { "negate" })
    ///     .unwrap();
    /// assert_eq!(results, vec![8, 3, 20]);
    /// ```
    pub fn dispatch_all<I, C>(&self, events: I, key_of: C) -> Result<Vec<R>, LambdaError>
    where
        I: IntoIterator<Item = E>,
        C: Fn(&E) -> K,
    {
        events
            .into_iter()
            .map(|event| {
                let key = key_of(&event);
                self.dispatch(&key, event)
            })
            .collect()
    }
}

impl<K, E, R> Default for HandlerTable<K, E, R>
where
    K: Eq + Hash + fmt::Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Clone, E, R> Clone for HandlerTable<K, E, R> {
    fn clone(&self) -> Self {
        Self {
            handlers: self.handlers.clone(),
        }
    }
}

impl<K: fmt::Debug, E, R> fmt::Debug for HandlerTable<K, E, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("HandlerTable")
            .field("keys", &self.handlers.keys().collect::<Vec<_>>())
            .finish()
    }
}
