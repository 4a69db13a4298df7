//! In-memory player for unit tests

use crate::player::Player;
use gamecmd_core::{Actor, CommandRegistry, CommandSpec, Dispatcher, EventBus};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

pub(crate) struct TestPlayer {
    pub model: u32,
    pub in_vehicle: bool,
    pub admin_level: i64,
    pub connected: AtomicBool,
    pub chat: Mutex<Vec<String>>,
    pub weapons: Mutex<Vec<(u32, u32)>>,
}

impl Default for TestPlayer {
    fn default() -> Self {
        Self {
            model: crate::joaat("mp_m_freemode_01"),
            in_vehicle: false,
            admin_level: 0,
            connected: AtomicBool::new(true),
            chat: Mutex::new(Vec::new()),
            weapons: Mutex::new(Vec::new()),
        }
    }
}

impl TestPlayer {
    pub fn chat(&self) -> Vec<String> {
        self.chat.lock().unwrap().clone()
    }

    pub fn weapons(&self) -> Vec<(u32, u32)> {
        self.weapons.lock().unwrap().clone()
    }

    pub fn disconnect(&self) {
        self.connected.store(false, Ordering::SeqCst);
    }
}

impl Actor for TestPlayer {
    fn name(&self) -> String {
        "tester".to_string()
    }

    fn output_chat(&self, message: &str) {
        self.chat.lock().unwrap().push(message.to_string());
    }
}

impl Player for TestPlayer {
    fn model(&self) -> u32 {
        self.model
    }

    fn in_vehicle(&self) -> bool {
        self.in_vehicle
    }

    fn admin_level(&self) -> i64 {
        self.admin_level
    }

    fn give_weapon(&self, weapon: u32, ammo: u32) {
        self.weapons.lock().unwrap().push((weapon, ammo));
    }

    fn is_connected(&self) -> bool {
        self.connected.load(Ordering::SeqCst)
    }
}

/// Dispatcher with just the given commands and no listeners
pub(crate) fn dispatcher_for(specs: Vec<CommandSpec<TestPlayer>>) -> Dispatcher<TestPlayer> {
    let mut registry = CommandRegistry::<TestPlayer>::new();
    for spec in specs {
        registry.register(spec).unwrap();
    }
    Dispatcher::with_defaults(registry, EventBus::new())
}
