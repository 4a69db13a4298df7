//! freemode_male_only - only runs for the freemode male model

use crate::joaat::joaat;
use crate::player::Player;
use gamecmd_core::CommandSpec;

/// Model name the command is restricted to
pub const FREEMODE_MALE_MODEL: &str = "mp_m_freemode_01";

/// Model-gated command
pub fn freemode_male_only<P: Player>() -> CommandSpec<P> {
    CommandSpec::<P>::new("freemode_male_only")
        .guard_fn(|inv| Ok(inv.actor().model() == joaat(FREEMODE_MALE_MODEL)))
        .execute_fn(|inv| {
            inv.actor()
                .output_chat("Yes, only freemode male can run this command.");
            Ok(())
        })
}
