//! # Command Module
//!
//! Turns prompt input into a [`Command`] and completes partial input.
//!
//! | Input | Command | Effect |
//! |-------|---------|--------|
//! | `about`, `experience`, `projects`, `skills`, `contact`, `links` | content | navigate + show view |
//! | `help`, `clear` | [`Command::Help`], [`Command::Clear`] | navigate to welcome |
//! | `sudo` | [`Command::Sudo`] | "permission denied" notice |
//! | `hello`, `hi` | [`Command::Hello`] | greeting notice |
//! | `exit` | [`Command::Exit`] | quit |
//! | anything else | [`Command::Unknown`] | "command not found" notice |

pub mod completion;
pub mod parser;

pub use completion::complete;
pub use parser::{Command, COMPLETION_NAMES};
