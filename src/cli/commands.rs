//! Command definitions for the Pomodoro Timer CLI.
//!
//! Uses clap derive macro for argument parsing.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::types::{Layout, TimerSettings, MAX_DURATION_MINUTES};

// ============================================================================
// CLI Structure
// ============================================================================

/// Pomodoro Timer - A full-screen terminal productivity tool
#[derive(Parser, Debug)]
#[command(
    name = "pomodoro",
    version,
    about = "Full-screen terminal Pomodoro timer",
    long_about = "A simple Pomodoro timer that runs in your terminal.\n\
                  Four focus sessions with short breaks in between, then a long break.",
    propagate_version = true
)]
pub struct Cli {
    /// Subcommand to execute (defaults to `run`)
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Directory holding stored preferences and the log file
    #[arg(long, global = true, env = "POMODORO_TERM_HOME", value_name = "DIR")]
    pub data_dir: Option<PathBuf>,
}

// ============================================================================
// Subcommands
// ============================================================================

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Run the interactive timer
    Run,

    /// Show or change the timer settings
    #[command(subcommand)]
    Settings(SettingsCommand),

    /// Show or set the screen layout
    Layout {
        /// New layout; omit to show the current one
        #[arg(value_enum)]
        layout: Option<LayoutArg>,
    },

    /// Generate shell completion scripts
    Completions {
        /// Shell type for completion script
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Settings subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum SettingsCommand {
    /// Print the stored settings
    Show,

    /// Change one or more settings
    Set(SetArgs),

    /// Remove every stored preference
    Reset,
}

// ============================================================================
// Settings Arguments
// ============================================================================

/// On/off switch for a completion effect
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    On,
    Off,
}

impl From<Toggle> for bool {
    fn from(toggle: Toggle) -> Self {
        toggle == Toggle::On
    }
}

/// Layout choices on the command line
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutArg {
    Portrait,
    Landscape,
}

impl From<LayoutArg> for Layout {
    fn from(arg: LayoutArg) -> Self {
        match arg {
            LayoutArg::Portrait => Layout::Portrait,
            LayoutArg::Landscape => Layout::Landscape,
        }
    }
}

/// Arguments for `settings set`
#[derive(Args, Debug, Clone, Default)]
pub struct SetArgs {
    /// Focus duration in minutes (1-180)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_DURATION_MINUTES)))]
    pub focus: Option<u32>,

    /// Short break duration in minutes (1-180)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_DURATION_MINUTES)))]
    pub short_break: Option<u32>,

    /// Long break duration in minutes (1-180)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_DURATION_MINUTES)))]
    pub long_break: Option<u32>,

    /// Play a tone when a session completes
    #[arg(long, value_enum)]
    pub sound: Option<Toggle>,

    /// Ring the terminal bell when a session completes
    #[arg(long, value_enum)]
    pub vibration: Option<Toggle>,
}

impl SetArgs {
    /// Returns true if no setting was given.
    pub fn is_empty(&self) -> bool {
        self.focus.is_none()
            && self.short_break.is_none()
            && self.long_break.is_none()
            && self.sound.is_none()
            && self.vibration.is_none()
    }

    /// Applies the given values over `settings`.
    pub fn apply(&self, mut settings: TimerSettings) -> TimerSettings {
        if let Some(minutes) = self.focus {
            settings.focus_duration_minutes = minutes;
        }
        if let Some(minutes) = self.short_break {
            settings.short_break_duration_minutes = minutes;
        }
        if let Some(minutes) = self.long_break {
            settings.long_break_duration_minutes = minutes;
        }
        if let Some(toggle) = self.sound {
            settings.sound_enabled = toggle.into();
        }
        if let Some(toggle) = self.vibration {
            settings.vibration_enabled = toggle.into();
        }
        settings
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // ------------------------------------------------------------------------
    // Cli Tests
    // ------------------------------------------------------------------------

    mod cli_tests {
        use super::*;

        #[test]
        fn test_parse_no_args() {
            let cli = Cli::parse_from(["pomodoro"]);
            assert!(cli.command.is_none());
            assert!(!cli.verbose);
        }

        #[test]
        fn test_parse_short_verbose_flag() {
            let cli = Cli::parse_from(["pomodoro", "-v"]);
            assert!(cli.verbose);
        }

        #[test]
        fn test_parse_run_command() {
            let cli = Cli::parse_from(["pomodoro", "run"]);
            assert!(matches!(cli.command, Some(Commands::Run)));
        }

        #[test]
        fn test_parse_data_dir_global() {
            let cli = Cli::parse_from(["pomodoro", "settings", "show", "--data-dir", "/tmp/p"]);
            assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/p")));
            assert!(matches!(
                cli.command,
                Some(Commands::Settings(SettingsCommand::Show))
            ));
        }

        #[test]
        fn test_parse_layout() {
            let cli = Cli::parse_from(["pomodoro", "layout", "landscape"]);
            match cli.command {
                Some(Commands::Layout { layout }) => {
                    assert_eq!(layout, Some(LayoutArg::Landscape));
                }
                _ => panic!("Expected Layout command"),
            }

            let cli = Cli::parse_from(["pomodoro", "layout"]);
            assert!(matches!(cli.command, Some(Commands::Layout { layout: None })));
        }

        #[test]
        fn test_parse_invalid_layout() {
            assert!(Cli::try_parse_from(["pomodoro", "layout", "diagonal"]).is_err());
        }

        #[test]
        fn test_parse_completions_zsh() {
            let cli = Cli::parse_from(["pomodoro", "completions", "zsh"]);
            match cli.command {
                Some(Commands::Completions { shell }) => {
                    assert_eq!(shell, clap_complete::Shell::Zsh);
                }
                _ => panic!("Expected Completions command"),
            }
        }
    }

    // ------------------------------------------------------------------------
    // Settings Set Tests
    // ------------------------------------------------------------------------

    mod set_args_tests {
        use super::*;

        fn parse_set(args: &[&str]) -> SetArgs {
            let mut argv = vec!["pomodoro", "settings", "set"];
            argv.extend_from_slice(args);
            match Cli::parse_from(argv).command {
                Some(Commands::Settings(SettingsCommand::Set(args))) => args,
                other => panic!("Expected settings set, got {:?}", other),
            }
        }

        #[test]
        fn test_parse_all_options() {
            let args = parse_set(&[
                "--focus",
                "50",
                "--short-break",
                "10",
                "--long-break",
                "30",
                "--sound",
                "off",
                "--vibration",
                "on",
            ]);
            assert_eq!(args.focus, Some(50));
            assert_eq!(args.short_break, Some(10));
            assert_eq!(args.long_break, Some(30));
            assert_eq!(args.sound, Some(Toggle::Off));
            assert_eq!(args.vibration, Some(Toggle::On));
        }

        #[test]
        fn test_duration_range() {
            for bad in ["0", "181", "-5", "abc"] {
                let result =
                    Cli::try_parse_from(["pomodoro", "settings", "set", "--focus", bad]);
                assert!(result.is_err(), "{} should be rejected", bad);
            }
            assert_eq!(parse_set(&["--focus", "180"]).focus, Some(180));
        }

        #[test]
        fn test_is_empty() {
            assert!(parse_set(&[]).is_empty());
            assert!(!parse_set(&["--sound", "on"]).is_empty());
        }

        #[test]
        fn test_apply_only_given_fields() {
            let args = parse_set(&["--short-break", "7", "--sound", "off"]);
            let settings = args.apply(TimerSettings::default());
            assert_eq!(settings.focus_duration_minutes, 25);
            assert_eq!(settings.short_break_duration_minutes, 7);
            assert_eq!(settings.long_break_duration_minutes, 15);
            assert!(!settings.sound_enabled);
            assert!(settings.vibration_enabled);
        }
    }
}
