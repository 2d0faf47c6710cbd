//! CLI command definitions using clap

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// deskpad: button-driven calculator and note-card board
#[derive(Parser, Debug)]
#[command(name = "deskpad")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (suppress non-error output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output (auto, always, never)
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorArg,

    /// YAML config file
    #[arg(long, env = "DESKPAD_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Emit JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the interactive terminal calculator
    Tui(TuiArgs),

    /// Replay a key script through the calculator
    ///
    /// Keys: 0-9, '.', '+', '-', '*' or 'x', '/', '=', 'c' (clear),
    /// '<' (backspace). Spaces are ignored.
    Keys(KeysArgs),

    /// List the sample card board through a filter
    Cards(CardsArgs),
}

/// Arguments for the tui command
#[derive(Parser, Debug, Default)]
pub struct TuiArgs {
    /// Write logs to this file (overrides `log.file` from the config)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

/// Arguments for the keys command
#[derive(Parser, Debug)]
pub struct KeysArgs {
    /// Key script, e.g. "12+7*2="
    #[arg(allow_hyphen_values = true)]
    pub sequence: String,

    /// Print the display after every key
    #[arg(long)]
    pub steps: bool,
}

/// Arguments for the cards command
#[derive(Parser, Debug, Default)]
pub struct CardsArgs {
    /// Case-insensitive text matched against title and description
    #[arg(short, long)]
    pub search: Option<String>,

    /// Category key (work, personal, study, hobbies, other, all)
    #[arg(short, long)]
    pub category: Option<String>,
}

/// Color argument for CLI
#[derive(ValueEnum, Clone, Debug, Default)]
pub enum ColorArg {
    /// Automatic color detection
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorArg> for crate::config::ColorChoice {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Auto => Self::Auto,
            ColorArg::Always => Self::Always,
            ColorArg::Never => Self::Never,
        }
    }
}
