//! gamecmd Core - Command Registry and Dispatch
//!
//! This crate provides the command layer for a multiplayer game server:
//! - Registry: command registration with case-insensitive names and aliases
//! - EventBus: `receive` and `fail` hooks around every dispatch
//! - Dispatcher: tokenizes chat input and runs guard/execute handlers

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod actor;
pub mod command;
pub mod config;
pub mod dispatcher;
pub mod error;
pub mod event_bus;
pub mod parse;
pub mod registry;

pub use actor::Actor;
pub use command::{Command, CommandSpec, CommandState, ExecuteFn, GuardFn, Invocation};
pub use config::{DispatcherConfig, DEFAULT_NOT_FOUND_MESSAGE};
pub use dispatcher::{DispatchOutcome, Dispatcher};
pub use error::{Error, ExecutionError, Result, Stage};
pub use event_bus::{Channel, EventBus, EventKind, FailEvent, Listener, ReceiveEvent};
pub use parse::CommandLine;
pub use registry::CommandRegistry;
