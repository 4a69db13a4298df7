//! Console-backed players

use super::config::PlayerConfig;
use gamecmd_core::Actor;
use gamecmd_stock::{joaat, Player};
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::info;

/// A simulated player whose chat goes to stdout
#[derive(Debug)]
pub struct ConsolePlayer {
    name: String,
    model: u32,
    admin_level: i64,
    in_vehicle: AtomicBool,
    connected: AtomicBool,
}

impl ConsolePlayer {
    /// Spawn a player from its configuration
    pub fn new(config: &PlayerConfig) -> Self {
        Self {
            name: config.name.clone(),
            model: joaat(&config.model),
            admin_level: config.admin_level,
            in_vehicle: AtomicBool::new(config.in_vehicle),
            connected: AtomicBool::new(true),
        }
    }

    /// Put the player in or out of a vehicle
    pub fn set_in_vehicle(&self, in_vehicle: bool) {
        self.in_vehicle.store(in_vehicle, Ordering::SeqCst);
    }

    /// Mark the player as gone. Pending commands see this after their next await.
    pub fn disconnect(&self) {
        self.connected.store(false, Ordering::SeqCst);
    }
}

impl Actor for ConsolePlayer {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn output_chat(&self, message: &str) {
        println!("[to {}] {}", self.name, message);
    }
}

impl Player for ConsolePlayer {
    fn model(&self) -> u32 {
        self.model
    }

    fn in_vehicle(&self) -> bool {
        self.in_vehicle.load(Ordering::SeqCst)
    }

    fn admin_level(&self) -> i64 {
        self.admin_level
    }

    fn give_weapon(&self, weapon: u32, ammo: u32) {
        info!(
            player = %self.name,
            weapon = %format!("{:#010x}", weapon),
            ammo,
            "Weapon given"
        );
    }

    fn is_connected(&self) -> bool {
        self.connected.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> PlayerConfig {
        PlayerConfig {
            name: "driver".to_string(),
            admin_level: 2,
            model: "mp_m_freemode_01".to_string(),
            in_vehicle: true,
        }
    }

    #[test]
    fn test_spawn_from_config() {
        let player = ConsolePlayer::new(&config());

        assert_eq!(player.name(), "driver");
        assert_eq!(player.model(), 0x705E_61F2);
        assert_eq!(player.admin_level(), 2);
        assert!(player.in_vehicle());
        assert!(player.is_connected());
    }

    #[test]
    fn test_state_changes() {
        let player = ConsolePlayer::new(&config());

        player.set_in_vehicle(false);
        player.disconnect();

        assert!(!player.in_vehicle());
        assert!(!player.is_connected());
    }
}
