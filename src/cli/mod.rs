//! CLI module for the Pomodoro Timer.
//!
//! This module provides the command-line interface:
//! - `commands`: Command definitions using clap derive
//! - `display`: Output formatting and display logic

pub mod commands;
pub mod display;

pub use commands::{Cli, Commands, LayoutArg, SetArgs, SettingsCommand, Toggle};
pub use display::Display;
