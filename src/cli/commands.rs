//! `gamecmd commands` - list what the console host would register

use crate::server::{build_registry, load_config, ConsolePlayer};

/// Print every identifier, sorted, one per line
pub fn run() -> anyhow::Result<()> {
    let config = load_config()?;
    let registry = build_registry::<ConsolePlayer>(&config)?;

    let mut identifiers = registry.identifiers();
    identifiers.sort_unstable();
    for identifier in identifiers {
        println!("{}", identifier);
    }
    Ok(())
}
