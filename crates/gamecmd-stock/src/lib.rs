//! gamecmd Stock - Ready-made commands and listeners
//!
//! This crate provides the stock command set for gamecmd servers:
//! - Commands: argtest, freemode_male_only, boom, getweapon, count_runs,
//!   commands, async
//! - Listeners: vehicle lockout on `receive`, failure report on `fail`
//! - Player: the actor capabilities those commands rely on

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod commands;
pub mod joaat;
pub mod listeners;
pub mod player;

#[cfg(test)]
pub(crate) mod testing;

pub use commands::{
    register_stock_commands, register_stock_commands_with_config, Boom, StockConfig,
};
pub use joaat::joaat;
pub use listeners::install_stock_listeners;
pub use player::Player;
