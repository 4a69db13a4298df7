//! Player - actor capabilities used by the stock commands

use gamecmd_core::Actor;

/// A connected player as seen by the stock commands
pub trait Player: Actor {
    /// Model hash (see [`crate::joaat`])
    fn model(&self) -> u32;

    /// Whether the player is sitting in a vehicle
    fn in_vehicle(&self) -> bool;

    /// Administrative level; 0 for regular players
    fn admin_level(&self) -> i64;

    /// Give a weapon by hash with the given ammo
    fn give_weapon(&self, weapon: u32, ammo: u32);

    /// Whether the player is still on the server. Commands that await
    /// check this before touching the player again.
    fn is_connected(&self) -> bool {
        true
    }
}
