//! count_runs - remembers how often it ran

use crate::player::Player;
use gamecmd_core::CommandSpec;

/// State key of the run counter
pub const TIMES_RAN: &str = "timesRan";

/// Counter command. The guard reports the count before the run, execute
/// bumps it and reports the new value.
pub fn count_runs<P: Player>() -> CommandSpec<P> {
    CommandSpec::<P>::new("count_runs")
        .extra(TIMES_RAN, 0)
        .guard_fn(|inv| {
            let runs = inv.state().get_i64(TIMES_RAN).unwrap_or(0);
            inv.actor()
                .output_chat(&format!("This command was used {} time(s).", runs));
            Ok(true)
        })
        .execute_fn(|inv| {
            let runs = inv.state().increment(TIMES_RAN, 1);
            inv.actor()
                .output_chat(&format!("Now it's used {} time(s).", runs));
            Ok(())
        })
}
