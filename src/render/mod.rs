//! Terminal backends that put frames on a real screen.

mod core;
mod session;

pub use self::core::CrosstermTerminal;
pub use session::TerminalSession;
