//! Library exports for the drawpad subsystems.
//!
//! Exposes the pad session, its command vocabulary and the configuration
//! data structures so that the CLI, the schema dumper and integration tests
//! share one implementation.

pub mod command;
pub mod config;
pub mod draw;
pub mod export;
pub mod input;
pub mod pad;
pub mod upload;
pub mod util;

pub use command::{Command, CommandError};
pub use config::Config;
pub use pad::{Pad, PadError};
