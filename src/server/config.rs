//! Server configuration types

use anyhow::{bail, Result};
use gamecmd_core::DispatcherConfig;
use gamecmd_stock::StockConfig;
use serde::{Deserialize, Serialize};

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub dispatcher: DispatcherConfig,
    #[serde(default)]
    pub stock: StockConfig,
    #[serde(default)]
    pub console: ConsoleConfig,
}

impl AppConfig {
    /// Check cross-field constraints serde cannot express
    pub fn validate(&self) -> Result<()> {
        self.dispatcher.validate()?;
        self.console.validate()
    }
}

/// Console host configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsoleConfig {
    /// Player that issues commands when the console starts
    #[serde(default = "default_player_name")]
    pub default_player: String,
    /// Simulated players
    #[serde(default = "default_players")]
    pub players: Vec<PlayerConfig>,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            default_player: default_player_name(),
            players: default_players(),
        }
    }
}

impl ConsoleConfig {
    /// Look up a player by name, ignoring case
    pub fn player(&self, name: &str) -> Option<&PlayerConfig> {
        self.players
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
    }

    fn validate(&self) -> Result<()> {
        if self.players.is_empty() {
            bail!("console.players must list at least one player");
        }
        for (i, player) in self.players.iter().enumerate() {
            if player.name.trim().is_empty() {
                bail!("console.players[{}] has an empty name", i);
            }
            let duplicate = self.players[..i]
                .iter()
                .any(|p| p.name.eq_ignore_ascii_case(&player.name));
            if duplicate {
                bail!("console player \"{}\" is listed twice", player.name);
            }
        }
        if self.player(&self.default_player).is_none() {
            bail!(
                "console.default_player \"{}\" is not in console.players",
                self.default_player
            );
        }
        Ok(())
    }
}

/// A simulated player
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerConfig {
    pub name: String,
    #[serde(default)]
    pub admin_level: i64,
    /// Model name, hashed when the player spawns
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default)]
    pub in_vehicle: bool,
}

fn default_player_name() -> String {
    "admin".to_string()
}

fn default_model() -> String {
    "mp_m_freemode_01".to_string()
}

fn default_players() -> Vec<PlayerConfig> {
    vec![PlayerConfig {
        name: default_player_name(),
        admin_level: 5,
        model: default_model(),
        in_vehicle: false,
    }]
}
