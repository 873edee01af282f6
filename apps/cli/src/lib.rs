//! # fcmkit CLI
//!
//! Library half of the `fcmkit` binary: argument definitions, the layered options loader,
//! and the command handlers. Handlers write to any [`std::io::Write`] so they can be
//! exercised without a terminal.

pub mod args;
pub mod commands;
pub mod config;

pub use crate::args::{Cli, Command, SettingArgs, SourceArgs};
pub use crate::config::{ConfigError, load_options};
