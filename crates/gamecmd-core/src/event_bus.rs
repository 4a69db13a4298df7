//! EventBus - ordered, synchronous hooks around command dispatch.
//!
//! Two channels exist: `receive` fires after a command resolves and may
//! cancel the dispatch, `fail` fires when a command's guard or execute
//! handler fails. Listeners run in registration order on the dispatching
//! task. The first listener error stops the remaining listeners of that
//! emit and is returned to the caller.

use crate::command::Command;
use crate::error::{Error, ExecutionError, Result};
use std::sync::Arc;

/// Channel identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// A command resolved and is about to run
    Receive,
    /// A command's guard or execute handler failed
    Fail,
}

impl EventKind {
    /// Returns the string representation
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Receive => "receive",
            Self::Fail => "fail",
        }
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Payload of the `receive` channel
///
/// Listeners can read the dispatch but only change whether it proceeds.
pub struct ReceiveEvent<A> {
    actor: Arc<A>,
    command: Arc<Command<A>>,
    full_text: String,
    args: Vec<String>,
    cancelled: bool,
}

impl<A> ReceiveEvent<A> {
    pub(crate) fn new(
        actor: Arc<A>,
        command: Arc<Command<A>>,
        full_text: String,
        args: Vec<String>,
    ) -> Self {
        Self {
            actor,
            command,
            full_text,
            args,
            cancelled: false,
        }
    }

    /// Actor that issued the command
    #[must_use]
    pub fn actor(&self) -> &Arc<A> {
        &self.actor
    }

    /// Resolved command
    #[must_use]
    pub fn command(&self) -> &Arc<Command<A>> {
        &self.command
    }

    /// Arguments joined by single spaces
    #[must_use]
    pub fn full_text(&self) -> &str {
        &self.full_text
    }

    /// Positional arguments
    #[must_use]
    pub fn args(&self) -> &[String] {
        &self.args
    }

    pub(crate) fn into_arguments(self) -> (String, Vec<String>) {
        (self.full_text, self.args)
    }

    /// Stop the dispatch once all `receive` listeners have run
    pub fn cancel(&mut self) {
        self.cancelled = true;
    }

    /// Whether a listener cancelled the dispatch
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }
}

/// Payload of the `fail` channel
pub struct FailEvent<A> {
    /// Actor that issued the command
    pub actor: Arc<A>,
    /// Command that failed
    pub command: Arc<Command<A>>,
    /// Arguments joined by single spaces
    pub full_text: String,
    /// Positional arguments
    pub args: Vec<String>,
    /// The captured failure
    pub error: ExecutionError,
}

/// Listener callback type
pub type Listener<E> = Arc<dyn Fn(&mut E) -> anyhow::Result<()> + Send + Sync>;

/// A named, ordered list of listeners
pub struct Channel<E> {
    kind: EventKind,
    listeners: Vec<Listener<E>>,
}

impl<E> Channel<E> {
    /// Create an empty channel
    #[must_use]
    pub fn new(kind: EventKind) -> Self {
        Self {
            kind,
            listeners: Vec::new(),
        }
    }

    /// Append a listener. The same callback may be added more than once.
    pub fn on<F>(&mut self, listener: F)
    where
        F: Fn(&mut E) -> anyhow::Result<()> + Send + Sync + 'static,
    {
        self.listeners.push(Arc::new(listener));
    }

    /// Append an already shared listener
    pub fn on_shared(&mut self, listener: Listener<E>) {
        self.listeners.push(listener);
    }

    /// Invoke every listener in order, stopping at the first error
    pub fn emit(&self, event: &mut E) -> Result<()> {
        for listener in &self.listeners {
            listener(event).map_err(|source| Error::Listener {
                channel: self.kind.as_str(),
                source,
            })?;
        }
        Ok(())
    }

    /// Which channel this is
    #[must_use]
    pub fn kind(&self) -> EventKind {
        self.kind
    }

    /// Number of registered listeners
    #[must_use]
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    /// Whether no listener is registered
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

/// The `receive` and `fail` channels of a dispatcher
pub struct EventBus<A> {
    receive: Channel<ReceiveEvent<A>>,
    fail: Channel<FailEvent<A>>,
}

impl<A> Default for EventBus<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> EventBus<A> {
    /// Create a bus with no listeners
    #[must_use]
    pub fn new() -> Self {
        Self {
            receive: Channel::new(EventKind::Receive),
            fail: Channel::new(EventKind::Fail),
        }
    }

    /// Listen on `receive`
    pub fn on_receive<F>(&mut self, listener: F) -> &mut Self
    where
        F: Fn(&mut ReceiveEvent<A>) -> anyhow::Result<()> + Send + Sync + 'static,
    {
        self.receive.on(listener);
        self
    }

    /// Listen on `fail`
    pub fn on_fail<F>(&mut self, listener: F) -> &mut Self
    where
        F: Fn(&mut FailEvent<A>) -> anyhow::Result<()> + Send + Sync + 'static,
    {
        self.fail.on(listener);
        self
    }

    /// The `receive` channel
    #[must_use]
    pub fn receive(&self) -> &Channel<ReceiveEvent<A>> {
        &self.receive
    }

    /// The `receive` channel, mutably
    pub fn receive_mut(&mut self) -> &mut Channel<ReceiveEvent<A>> {
        &mut self.receive
    }

    /// The `fail` channel
    #[must_use]
    pub fn fail(&self) -> &Channel<FailEvent<A>> {
        &self.fail
    }

    /// The `fail` channel, mutably
    pub fn fail_mut(&mut self) -> &mut Channel<FailEvent<A>> {
        &mut self.fail
    }

    /// Number of listeners on a channel
    #[must_use]
    pub fn listener_count(&self, kind: EventKind) -> usize {
        match kind {
            EventKind::Receive => self.receive.len(),
            EventKind::Fail => self.fail.len(),
        }
    }

    pub(crate) fn emit_receive(&self, event: &mut ReceiveEvent<A>) -> Result<()> {
        self.receive.emit(event)
    }

    pub(crate) fn emit_fail(&self, event: &mut FailEvent<A>) -> Result<()> {
        self.fail.emit(event)
    }
}
