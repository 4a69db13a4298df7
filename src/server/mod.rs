//! Server module for gamecmd
//!
//! Contains the host-side wiring around the dispatcher.
//!
//! # Module Structure
//!
//! - `config`: Configuration structures for the host
//! - `loader`: Configuration loading from files and environment
//! - `player`: Console-backed players
//! - `init`: Registry, listener and dispatcher construction

pub mod config;
mod init;
mod loader;
mod player;

pub use config::ConsoleConfig;
pub use init::{build_dispatcher, build_registry};
pub use loader::load_config;
pub use player::ConsolePlayer;
