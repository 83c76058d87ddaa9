//! Verb-keyed handler registry.
//!
//! A [`HandlerRegistry`] maps an uppercase verb to the handlers interested in
//! it, in the order they were registered. Handlers are registered explicitly
//! at startup; the registry does not discover them on its own.
//!
//! ```
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use std::sync::Arc;
//! use ircwire::dispatch::{HandlerRegistry, MessageHandler};
//! use ircwire::Message;
//!
//! #[derive(Default)]
//! struct PingCounter(AtomicUsize);
//!
//! impl MessageHandler<()> for PingCounter {
//!     fn handle_incoming(&self, _conn: &(), _msg: &Message) {
//!         self.0.fetch_add(1, Ordering::Relaxed);
//!     }
//! }
//!
//! let counter = Arc::new(PingCounter::default());
//! let mut registry = HandlerRegistry::<()>::new();
//! registry.register("ping", counter.clone());
//!
//! let ping: Message = "PING :server".parse()?;
//! assert_eq!(registry.dispatch_incoming(&(), &ping), 1);
//! assert_eq!(counter.0.load(Ordering::Relaxed), 1);
//! # Ok::<(), ircwire::error::ParseError>(())
//! ```

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::Message;

/// Something that reacts to messages on a connection of type `C`.
///
/// Both methods default to doing nothing, so a handler only implements the
/// direction it cares about.
pub trait MessageHandler<C>: Send + Sync {
    /// Called for a message received from the peer.
    fn handle_incoming(&self, _conn: &C, _msg: &Message) {}

    /// Called for a message about to be sent to the peer.
    fn handle_outgoing(&self, _conn: &C, _msg: &Message) {}
}

/// Explicit table from verb to an ordered list of handlers.
///
/// Verbs are matched case-insensitively by uppercasing both the registered
/// verb and the verb of each dispatched message.
pub struct HandlerRegistry<C> {
    handlers: HashMap<String, Vec<Arc<dyn MessageHandler<C>>>>,
}

impl<C> HandlerRegistry<C> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Register `handler` for `verb`. Handlers run in registration order.
    pub fn register(&mut self, verb: &str, handler: Arc<dyn MessageHandler<C>>) -> &mut Self {
        self.handlers
            .entry(verb.to_ascii_uppercase())
            .or_default()
            .push(handler);
        self
    }

    /// The handlers registered for `verb`, in order.
    pub fn handlers_for(&self, verb: &str) -> &[Arc<dyn MessageHandler<C>>] {
        self.handlers
            .get(&verb.to_ascii_uppercase())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Pass an incoming message to every handler for its verb.
    ///
    /// Returns the number of handlers invoked.
    pub fn dispatch_incoming(&self, conn: &C, msg: &Message) -> usize {
        let handlers = self.handlers_for(msg.verb());
        if handlers.is_empty() {
            debug!(verb = msg.verb(), "no incoming handlers registered");
        }
        for handler in handlers {
            handler.handle_incoming(conn, msg);
        }
        handlers.len()
    }

    /// Pass an outgoing message to every handler for its verb.
    ///
    /// Returns the number of handlers invoked.
    pub fn dispatch_outgoing(&self, conn: &C, msg: &Message) -> usize {
        let handlers = self.handlers_for(msg.verb());
        if handlers.is_empty() {
            debug!(verb = msg.verb(), "no outgoing handlers registered");
        }
        for handler in handlers {
            handler.handle_outgoing(conn, msg);
        }
        handlers.len()
    }

    /// Registered verbs, uppercase, in no particular order.
    pub fn verbs(&self) -> impl Iterator<Item = &str> {
        self.handlers.keys().map(String::as_str)
    }

    /// Number of distinct verbs with at least one handler.
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Returns `true` if nothing has been registered.
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl<C> Default for HandlerRegistry<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> fmt::Debug for HandlerRegistry<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for (verb, handlers) in &self.handlers {
            map.entry(verb, &handlers.len());
        }
        map.finish()
    }
}
