//! Interactive command shell for the carpool database.
//!
//! Members log in, post/search/cancel ride requests, manage bookings on
//! rides they drive, and exchange inbox messages, all against a single
//! SQLite connection owned by `carpool-store`.
//!
//! # Architecture
//!
//! - [`shell::Shell`]: per-instance state (store, console, session)
//!   and the interactive loop
//! - [`registry`]: verb table; session gating is applied once at
//!   registration via [`registry::gated`]
//! - [`args`]: per-command argument parsers with recoverable errors
//! - [`console`]: the synchronous prompt/read/print seam, scriptable
//!   in tests
//!
//! The shell is single-threaded and fully synchronous: one line is
//! processed to completion before the next is read, and every mutating
//! command is durable once its handler returns.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod args;
pub mod config;
pub mod console;
pub mod error;
mod handlers;
pub mod registry;
pub mod render;
pub mod shell;

pub use config::ShellConfig;
pub use console::{Console, ScriptedConsole, StdConsole};
pub use error::{Result, ShellError};
pub use registry::Registry;
pub use shell::Shell;
