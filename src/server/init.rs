//! Dispatcher construction

use super::config::AppConfig;
use anyhow::{Context, Result};
use gamecmd_core::{CommandRegistry, Dispatcher, EventBus};
use gamecmd_stock::{install_stock_listeners, register_stock_commands_with_config, Player};
use tracing::info;

/// Registry with every stock command
pub fn build_registry<P: Player>(config: &AppConfig) -> Result<CommandRegistry<P>> {
    let mut registry = CommandRegistry::<P>::new();
    register_stock_commands_with_config(&mut registry, &config.stock)
        .context("Failed to register stock commands")?;
    Ok(registry)
}

/// Dispatcher with the stock commands and listeners
pub fn build_dispatcher<P: Player>(config: &AppConfig) -> Result<Dispatcher<P>> {
    let registry = build_registry::<P>(config)?;

    let mut events = EventBus::<P>::new();
    install_stock_listeners(&mut events);

    info!(
        commands = registry.len(),
        not_found_notice = config.dispatcher.not_found_notice,
        "Dispatcher ready"
    );
    Dispatcher::new(registry, events, config.dispatcher.clone())
        .context("Invalid dispatcher configuration")
}
