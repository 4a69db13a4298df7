//! Command - registration specs, registered commands and their state
//!
//! A [`CommandSpec`] is what integrators hand to the registry. Once
//! accepted it becomes an immutable [`Command`] shared behind an `Arc`;
//! the only mutable part is its [`CommandState`], which persists across
//! invocations and is reachable from the command's own handlers.

use crate::actor::Actor;
use crate::registry::CommandRegistry;
use futures::future::{self, BoxFuture, FutureExt};
use serde_json::{Map, Value};
use std::future::Future;
use std::sync::{Arc, Mutex, PoisonError};

/// Type-erased guard predicate
pub type GuardFn<A> =
    Arc<dyn Fn(Invocation<A>) -> BoxFuture<'static, anyhow::Result<bool>> + Send + Sync>;

/// Type-erased execute handler
pub type ExecuteFn<A> =
    Arc<dyn Fn(Invocation<A>) -> BoxFuture<'static, anyhow::Result<()>> + Send + Sync>;

/// Mutable per-command state, seeded from the spec's extra values.
///
/// Cloning yields another handle to the same cell. Each accessor takes the
/// lock only for its own duration, so a read followed by a write across an
/// `.await` is not atomic with respect to other dispatches of the same
/// command.
#[derive(Clone, Default)]
pub struct CommandState {
    inner: Arc<Mutex<Map<String, Value>>>,
}

impl CommandState {
    /// Create state from initial values
    #[must_use]
    pub fn new(initial: Map<String, Value>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(initial)),
        }
    }

    /// Run a closure with exclusive access to the values
    pub fn update<R>(&self, f: impl FnOnce(&mut Map<String, Value>) -> R) -> R {
        let mut guard = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut guard)
    }

    /// Get a copy of a value
    #[must_use]
    pub fn get(&self, key: &str) -> Option<Value> {
        self.update(|values| values.get(key).cloned())
    }

    /// Get a value as an integer
    #[must_use]
    pub fn get_i64(&self, key: &str) -> Option<i64> {
        self.get(key).and_then(|v| v.as_i64())
    }

    /// Set a value, returning the previous one
    pub fn set(&self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        let key = key.into();
        let value = value.into();
        self.update(|values| values.insert(key, value))
    }

    /// Add `by` to an integer value (missing counts as 0) and return the result
    pub fn increment(&self, key: &str, by: i64) -> i64 {
        self.update(|values| {
            let next = values.get(key).and_then(Value::as_i64).unwrap_or(0) + by;
            values.insert(key.to_string(), Value::from(next));
            next
        })
    }

    /// Copy of all values
    #[must_use]
    pub fn snapshot(&self) -> Map<String, Value> {
        self.update(|values| values.clone())
    }
}

impl std::fmt::Debug for CommandState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("CommandState").field(&self.snapshot()).finish()
    }
}

/// Everything a guard or execute handler receives for one dispatch
pub struct Invocation<A> {
    pub(crate) actor: Arc<A>,
    pub(crate) command: Arc<Command<A>>,
    pub(crate) full_text: String,
    pub(crate) args: Vec<String>,
    pub(crate) registry: Arc<CommandRegistry<A>>,
}

impl<A> Clone for Invocation<A> {
    fn clone(&self) -> Self {
        Self {
            actor: Arc::clone(&self.actor),
            command: Arc::clone(&self.command),
            full_text: self.full_text.clone(),
            args: self.args.clone(),
            registry: Arc::clone(&self.registry),
        }
    }
}

impl<A> Invocation<A> {
    /// The actor that issued the command
    #[must_use]
    pub fn actor(&self) -> &Arc<A> {
        &self.actor
    }

    /// The resolved command
    #[must_use]
    pub fn command(&self) -> &Arc<Command<A>> {
        &self.command
    }

    /// Arguments joined by single spaces
    #[must_use]
    pub fn full_text(&self) -> &str {
        &self.full_text
    }

    /// Positional arguments, identifier excluded
    #[must_use]
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Positional argument by index
    #[must_use]
    pub fn arg(&self, index: usize) -> Option<&str> {
        self.args.get(index).map(String::as_str)
    }

    /// State cell of the resolved command
    #[must_use]
    pub fn state(&self) -> &CommandState {
        &self.command.state
    }

    /// Registry the command was resolved from
    #[must_use]
    pub fn registry(&self) -> &Arc<CommandRegistry<A>> {
        &self.registry
    }
}

/// A registered command
pub struct Command<A> {
    pub(crate) name: String,
    pub(crate) aliases: Vec<String>,
    pub(crate) guard: Option<GuardFn<A>>,
    pub(crate) execute: ExecuteFn<A>,
    pub(crate) state: CommandState,
}

impl<A> Command<A> {
    /// Canonical (lowercase) name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Canonical aliases, deduplicated, in declaration order
    #[must_use]
    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    /// Whether the command has a guard predicate
    #[must_use]
    pub fn has_guard(&self) -> bool {
        self.guard.is_some()
    }

    /// Per-command state
    #[must_use]
    pub fn state(&self) -> &CommandState {
        &self.state
    }
}

impl<A> std::fmt::Debug for Command<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Command")
            .field("name", &self.name)
            .field("aliases", &self.aliases)
            .field("has_guard", &self.guard.is_some())
            .field("state", &self.state)
            .finish()
    }
}

/// Registration request for a command
pub struct CommandSpec<A> {
    pub(crate) name: String,
    pub(crate) aliases: Vec<String>,
    pub(crate) guard: Option<GuardFn<A>>,
    pub(crate) execute: Option<ExecuteFn<A>>,
    pub(crate) extra: Map<String, Value>,
}

impl<A: Actor> CommandSpec<A> {
    /// Start a spec with the given name
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            aliases: Vec::new(),
            guard: None,
            execute: None,
            extra: Map::new(),
        }
    }

    /// Add an alias
    #[must_use]
    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into());
        self
    }

    /// Add several aliases
    #[must_use]
    pub fn aliases<I, S>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.aliases.extend(aliases.into_iter().map(Into::into));
        self
    }

    /// Seed a value in the command's state
    #[must_use]
    pub fn extra(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// Set an async guard predicate
    #[must_use]
    pub fn guard<F, Fut>(mut self, f: F) -> Self
    where
        F: Fn(Invocation<A>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = anyhow::Result<bool>> + Send + 'static,
    {
        self.guard = Some(Arc::new(move |inv| f(inv).boxed()));
        self
    }

    /// Set a synchronous guard predicate
    #[must_use]
    pub fn guard_fn<F>(mut self, f: F) -> Self
    where
        F: Fn(&Invocation<A>) -> anyhow::Result<bool> + Send + Sync + 'static,
    {
        self.guard = Some(Arc::new(move |inv| future::ready(f(&inv)).boxed()));
        self
    }

    /// Set an async execute handler
    #[must_use]
    pub fn execute<F, Fut>(mut self, f: F) -> Self
    where
        F: Fn(Invocation<A>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = anyhow::Result<()>> + Send + 'static,
    {
        self.execute = Some(Arc::new(move |inv| f(inv).boxed()));
        self
    }

    /// Set a synchronous execute handler
    #[must_use]
    pub fn execute_fn<F>(mut self, f: F) -> Self
    where
        F: Fn(&Invocation<A>) -> anyhow::Result<()> + Send + Sync + 'static,
    {
        self.execute = Some(Arc::new(move |inv| future::ready(f(&inv)).boxed()));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actor::MockActor;

    #[test]
    fn test_state_increment() {
        let mut initial = Map::new();
        initial.insert("timesRan".to_string(), Value::from(0));
        let state = CommandState::new(initial);

        assert_eq!(state.increment("timesRan", 1), 1);
        assert_eq!(state.increment("timesRan", 1), 2);
        assert_eq!(state.get_i64("timesRan"), Some(2));
        assert_eq!(state.increment("missing", 5), 5);
    }

    #[test]
    fn test_state_handles_share_cell() {
        let state = CommandState::default();
        let other = state.clone();

        assert!(state.set("level", 5).is_none());
        assert_eq!(other.get_i64("level"), Some(5));
        assert_eq!(other.set("level", 7), Some(Value::from(5)));
        assert_eq!(state.snapshot().len(), 1);
    }

    #[test]
    fn test_sync_handlers_are_wrapped() {
        let mut registry = CommandRegistry::<MockActor>::new();
        let command = registry
            .register(
                CommandSpec::<MockActor>::new("argtest")
                    .guard_fn(|inv| Ok(!inv.full_text().is_empty()))
                    .execute_fn(|inv| {
                        inv.state().increment("runs", 1);
                        Ok(())
                    }),
            )
            .unwrap();

        let invocation = Invocation {
            actor: Arc::new(MockActor::new()),
            command: Arc::clone(&command),
            full_text: "lorem ipsum".to_string(),
            args: vec!["lorem".to_string(), "ipsum".to_string()],
            registry: Arc::new(registry),
        };

        let guard = command.guard.as_ref().unwrap();
        assert!(tokio_test::block_on(guard(invocation.clone())).unwrap());
        tokio_test::block_on((command.execute)(invocation.clone())).unwrap();

        assert_eq!(invocation.arg(1), Some("ipsum"));
        assert_eq!(invocation.arg(2), None);
        assert_eq!(command.state().get_i64("runs"), Some(1));
    }
}
