//! Actor - the host-side handle a command runs on behalf of

/// A player (or any other chat participant) that can issue commands.
///
/// The core only ever needs a display name for diagnostics and a way to
/// send a line of chat back. Everything else the host knows about the actor
/// is reached by the command handlers themselves, which are free to require
/// a richer trait on the concrete actor type.
#[cfg_attr(test, mockall::automock)]
pub trait Actor: Send + Sync + 'static {
    /// Name used in logs and tracing spans
    fn name(&self) -> String;

    /// Display a line of chat text to this actor
    fn output_chat(&self, message: &str);
}
