//! commands - list every registered name and alias

use crate::player::Player;
use gamecmd_core::CommandSpec;

/// `/commands` replies with all identifiers, sorted
pub fn commands<P: Player>() -> CommandSpec<P> {
    CommandSpec::<P>::new("commands")
        .alias("cmds")
        .execute_fn(|inv| {
            let mut identifiers = inv.registry().identifiers();
            identifiers.sort_unstable();
            inv.actor()
                .output_chat(&format!("Commands: {}", identifiers.join(", ")));
            Ok(())
        })
}
