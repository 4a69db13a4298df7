//! Listeners - stock `receive` and `fail` hooks

use crate::player::Player;
use gamecmd_core::{EventBus, FailEvent, ReceiveEvent};
use tracing::error;

/// Install the stock listeners:
/// - players in a vehicle cannot use commands
/// - failed commands are reported to the player and logged
pub fn install_stock_listeners<P: Player>(events: &mut EventBus<P>) {
    events
        .on_receive(block_in_vehicle::<P>)
        .on_fail(report_failure::<P>);
}

fn block_in_vehicle<P: Player>(event: &mut ReceiveEvent<P>) -> anyhow::Result<()> {
    if event.actor().in_vehicle() {
        event
            .actor()
            .output_chat("You cannot use commands in a vehicle.");
        event.cancel();
    }
    Ok(())
}

fn report_failure<P: Player>(event: &mut FailEvent<P>) -> anyhow::Result<()> {
    event.actor.output_chat(&format!(
        "Failed to run command \"{}\".",
        event.command.name()
    ));
    error!(
        player = %event.actor.name(),
        command = %event.command.name(),
        stage = %event.error.stage,
        error = ?event.error.source,
        "Command failed"
    );
    Ok(())
}
