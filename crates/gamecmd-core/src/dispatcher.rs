//! Dispatcher - routes raw command lines to registered commands
//!
//! One dispatch walks these steps:
//! - tokenize the line and resolve the identifier
//! - emit `receive`, stopping if any listener cancels
//! - await the guard (absent means allowed)
//! - await the execute handler
//!
//! Guard and execute failures, including panics, are captured and
//! delivered through `fail`. Listener failures are returned to the caller.

use crate::actor::Actor;
use crate::command::{Command, Invocation};
use crate::config::{validate_not_found_message, DispatcherConfig};
use crate::error::{ExecutionError, Result, Stage};
use crate::event_bus::{EventBus, FailEvent, ReceiveEvent};
use crate::parse::CommandLine;
use crate::registry::CommandRegistry;
use futures::FutureExt;
use std::any::Any;
use std::future::Future;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use tracing::{debug, instrument, warn};
use uuid::Uuid;

/// Terminal state of a dispatch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// No command matched the identifier
    Unresolved,
    /// A `receive` listener cancelled the dispatch
    Cancelled,
    /// The guard did not allow execution
    Skipped,
    /// The execute handler ran to completion
    Completed,
    /// The guard or execute handler failed and `fail` was emitted
    Failed(Stage),
}

impl DispatchOutcome {
    /// Whether the command's execute handler finished successfully
    #[must_use]
    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed)
    }
}

/// Command dispatcher
///
/// Built from a fully populated registry and event bus; both are read-only
/// once the dispatcher exists, so commands and listeners must be registered
/// before serving traffic.
pub struct Dispatcher<A> {
    registry: Arc<CommandRegistry<A>>,
    events: EventBus<A>,
    config: DispatcherConfig,
}

impl<A: Actor> Dispatcher<A> {
    /// Create a new dispatcher
    pub fn new(
        registry: CommandRegistry<A>,
        events: EventBus<A>,
        config: DispatcherConfig,
    ) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            registry: Arc::new(registry),
            events,
            config,
        })
    }

    /// Create with default configuration
    #[must_use]
    pub fn with_defaults(registry: CommandRegistry<A>, events: EventBus<A>) -> Self {
        Self {
            registry: Arc::new(registry),
            events,
            config: DispatcherConfig::default(),
        }
    }

    /// Get the registry
    #[must_use]
    pub fn registry(&self) -> &Arc<CommandRegistry<A>> {
        &self.registry
    }

    /// Get the event bus
    #[must_use]
    pub fn events(&self) -> &EventBus<A> {
        &self.events
    }

    /// Get the configuration
    #[must_use]
    pub fn config(&self) -> &DispatcherConfig {
        &self.config
    }

    /// Enable or disable the not-found notice
    pub fn set_not_found_notice(&mut self, enabled: bool) {
        self.config.not_found_notice = enabled;
    }

    /// Set the not-found message. Empty messages are rejected.
    pub fn set_not_found_message(&mut self, message: impl Into<String>) -> Result<()> {
        let message = message.into();
        validate_not_found_message(&message)?;
        self.config.not_found_message = message;
        Ok(())
    }

    /// Dispatch one raw command line (without the leading `/`) for an actor
    ///
    /// Returns `Err` only when a `receive` or `fail` listener fails.
    #[instrument(skip(self, actor), fields(actor = %actor.name(), dispatch_id = %Uuid::new_v4()))]
    pub async fn dispatch(&self, actor: Arc<A>, line: &str) -> Result<DispatchOutcome> {
        let Some(parsed) = CommandLine::parse(line) else {
            debug!("Blank command line");
            self.not_found(&actor);
            return Ok(DispatchOutcome::Unresolved);
        };

        let Some(command) = self.registry.find(&parsed.identifier)? else {
            debug!(identifier = %parsed.identifier, "Command not found");
            self.not_found(&actor);
            return Ok(DispatchOutcome::Unresolved);
        };

        let full_text = parsed.full_text();
        let mut received = ReceiveEvent::new(
            Arc::clone(&actor),
            Arc::clone(&command),
            full_text,
            parsed.args,
        );
        self.events.emit_receive(&mut received)?;
        if received.is_cancelled() {
            debug!(command = %command.name(), "Dispatch cancelled by listener");
            return Ok(DispatchOutcome::Cancelled);
        }

        let (full_text, args) = received.into_arguments();
        let invocation = Invocation {
            actor,
            command: Arc::clone(&command),
            full_text,
            args,
            registry: Arc::clone(&self.registry),
        };

        match run(&command, invocation.clone()).await {
            Ok(true) => Ok(DispatchOutcome::Completed),
            Ok(false) => {
                debug!(command = %command.name(), "Guard did not allow execution");
                Ok(DispatchOutcome::Skipped)
            }
            Err(error) => {
                warn!(
                    command = %command.name(),
                    stage = %error.stage,
                    error = %error.source,
                    "Command failed"
                );
                let stage = error.stage;
                let Invocation {
                    actor,
                    full_text,
                    args,
                    ..
                } = invocation;
                let mut failed = FailEvent {
                    actor,
                    command,
                    full_text,
                    args,
                    error,
                };
                self.events.emit_fail(&mut failed)?;
                Ok(DispatchOutcome::Failed(stage))
            }
        }
    }

    fn not_found(&self, actor: &A) {
        if self.config.not_found_notice {
            actor.output_chat(&self.config.not_found_message);
        }
    }
}

/// Run guard then execute. `Ok(false)` means the guard said no.
async fn run<A: Actor>(
    command: &Arc<Command<A>>,
    invocation: Invocation<A>,
) -> std::result::Result<bool, ExecutionError> {
    if let Some(guard) = &command.guard {
        let guard = Arc::clone(guard);
        let inv = invocation.clone();
        let allowed = capture(async move { guard(inv).await })
            .await
            .map_err(|source| ExecutionError {
                command: command.name.clone(),
                stage: Stage::Guard,
                source,
            })?;
        if !allowed {
            return Ok(false);
        }
    }

    let execute = Arc::clone(&command.execute);
    capture(async move { execute(invocation).await })
        .await
        .map_err(|source| ExecutionError {
            command: command.name.clone(),
            stage: Stage::Execute,
            source,
        })?;

    Ok(true)
}

/// Await a handler call, turning a panic into an error
async fn capture<T>(call: impl Future<Output = anyhow::Result<T>>) -> anyhow::Result<T> {
    match AssertUnwindSafe(call).catch_unwind().await {
        Ok(result) => result,
        Err(payload) => Err(anyhow::anyhow!(
            "handler panicked: {}",
            panic_message(payload.as_ref())
        )),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(message) = payload.downcast_ref::<&str>() {
        *message
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.as_str()
    } else {
        "unknown panic"
    }
}
