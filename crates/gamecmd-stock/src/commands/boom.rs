//! boom - a command that always fails

use crate::player::Player;
use gamecmd_core::CommandSpec;
use thiserror::Error;

/// The error `boom` fails with
#[derive(Debug, Error)]
#[error("error thrown")]
pub struct Boom;

/// Always fails, which emits `fail`
pub fn boom<P: Player>() -> CommandSpec<P> {
    CommandSpec::<P>::new("boom").execute_fn(|_| Err(Boom.into()))
}
