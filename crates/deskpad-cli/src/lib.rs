//! deskpad CLI library
//!
//! Command definitions, configuration, logging and handlers behind the
//! `deskpad` binary.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

mod commands;
mod config;
mod error;
pub mod handlers;
pub mod logging;
mod output;

pub use commands::{CardsArgs, Cli, ColorArg, Commands, KeysArgs, TuiArgs};
pub use config::{AppConfig, CliConfig, ColorChoice, LogConfig, LogFormat, Verbosity};
pub use error::{CliError, CliResult};
pub use logging::{init_logging, LogTarget};
pub use output::{write_json, JsonEnvelope, OutputFormat, Painter};
