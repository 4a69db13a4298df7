//! Commands - the stock command set
//!
//! - argtest (echo, combineargs): repeat the arguments back
//! - freemode_male_only: model-gated command
//! - boom: always fails, useful for exercising `fail`
//! - getweapon (giveweapon): admin-gated weapon grant
//! - count_runs: per-command counter
//! - commands (cmds): list every identifier
//! - async: slow guard and execute with random outcomes

mod argtest;
mod boom;
mod count_runs;
mod freemode;
mod getweapon;
mod listing;
mod slow;

pub use argtest::argtest;
pub use boom::{boom, Boom};
pub use count_runs::{count_runs, TIMES_RAN};
pub use freemode::{freemode_male_only, FREEMODE_MALE_MODEL};
pub use getweapon::{getweapon, ADMIN_LEVEL, DEFAULT_AMMO};
pub use listing::commands;
pub use slow::slow;

use crate::player::Player;
use gamecmd_core::{CommandRegistry, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for the stock commands
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockConfig {
    /// Minimum admin level for getweapon
    #[serde(default = "default_weapon_admin_level")]
    pub weapon_admin_level: i64,
    /// How long the async guard waits, in milliseconds
    #[serde(default = "default_slow_guard_delay_ms")]
    pub slow_guard_delay_ms: u64,
    /// How long the async execute waits, in milliseconds
    #[serde(default = "default_slow_execute_delay_ms")]
    pub slow_execute_delay_ms: u64,
    /// Probability that the async guard allows execution
    #[serde(default = "default_half")]
    pub slow_allow_chance: f64,
    /// Probability that the async execute succeeds
    #[serde(default = "default_half")]
    pub slow_success_chance: f64,
}

fn default_weapon_admin_level() -> i64 {
    5
}

fn default_slow_guard_delay_ms() -> u64 {
    5000
}

fn default_slow_execute_delay_ms() -> u64 {
    2000
}

fn default_half() -> f64 {
    0.5
}

impl Default for StockConfig {
    fn default() -> Self {
        Self {
            weapon_admin_level: default_weapon_admin_level(),
            slow_guard_delay_ms: default_slow_guard_delay_ms(),
            slow_execute_delay_ms: default_slow_execute_delay_ms(),
            slow_allow_chance: default_half(),
            slow_success_chance: default_half(),
        }
    }
}

impl StockConfig {
    /// Guard delay of the async command
    #[must_use]
    pub fn slow_guard_delay(&self) -> Duration {
        Duration::from_millis(self.slow_guard_delay_ms)
    }

    /// Execute delay of the async command
    #[must_use]
    pub fn slow_execute_delay(&self) -> Duration {
        Duration::from_millis(self.slow_execute_delay_ms)
    }
}

/// Register all stock commands with the registry (default config)
pub fn register_stock_commands<P: Player>(registry: &mut CommandRegistry<P>) -> Result<()> {
    register_stock_commands_with_config(registry, &StockConfig::default())
}

/// Register all stock commands with custom configuration
pub fn register_stock_commands_with_config<P: Player>(
    registry: &mut CommandRegistry<P>,
    config: &StockConfig,
) -> Result<()> {
    registry.register(argtest())?;
    registry.register(freemode_male_only())?;
    registry.register(boom())?;
    registry.register(getweapon(config.weapon_admin_level))?;
    registry.register(count_runs())?;
    registry.register(commands())?;
    registry.register(slow(config))?;
    Ok(())
}
