//! argtest - repeat the arguments back to the player

use crate::player::Player;
use gamecmd_core::CommandSpec;

/// `/argtest lorem ipsum` replies "You wrote: lorem ipsum"
pub fn argtest<P: Player>() -> CommandSpec<P> {
    CommandSpec::<P>::new("argtest")
        .aliases(["echo", "combineargs"])
        .guard_fn(|inv| {
            if inv.full_text().is_empty() {
                inv.actor().output_chat("No arguments provided.");
                return Ok(false);
            }
            Ok(true)
        })
        .execute_fn(|inv| {
            inv.actor()
                .output_chat(&format!("You wrote: {}", inv.full_text()));
            Ok(())
        })
}
