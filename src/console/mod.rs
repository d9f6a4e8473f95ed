//! Console module
//!
//! Command parsing and the interactive session loop.

pub mod command;
pub mod session;

pub use command::{parse_line, Command};
pub use session::{OutputMode, Session, SessionError};
