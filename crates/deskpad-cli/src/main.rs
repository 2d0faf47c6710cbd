//! deskpad: terminal calculator and card board
//!
//! ## Usage
//!
//! ```bash
//! deskpad tui                          # Interactive calculator
//! deskpad keys "2+3*4="                # Replay keys, prints 20
//! deskpad keys "5/0=" --steps          # Show the display after every key
//! deskpad cards --category study       # List sample cards
//! deskpad --config deskpad.yaml keys "10/3="
//! ```

use clap::Parser;
use deskpad_cli::{
    handlers::{execute_cards, execute_keys, execute_tui},
    init_logging, AppConfig, Cli, CliConfig, CliResult, ColorChoice, Commands, LogTarget,
    OutputFormat, Painter, Verbosity,
};
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();

    // Build configuration from CLI args
    let config = build_config(&cli);
    let app_config = AppConfig::load(cli.config.as_deref())?;

    let target = match &cli.command {
        Commands::Tui(args) => LogTarget::for_tui(&app_config.log, args.log_file.as_deref()),
        Commands::Keys(_) | Commands::Cards(_) => LogTarget::for_command(&app_config.log),
    };
    let ansi = match config.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => console::colors_enabled_stderr(),
    };
    let _log_guard = init_logging(&app_config.log, config.verbosity, &target, ansi)?;

    let format = OutputFormat::from_json_flag(config.json);
    let painter = Painter::from_config(&config);

    match cli.command {
        Commands::Tui(_) => execute_tui(app_config.engine),
        Commands::Keys(args) => execute_keys(
            &mut std::io::stdout().lock(),
            &args,
            app_config.engine,
            format,
            painter,
        ),
        Commands::Cards(args) => {
            execute_cards(&mut std::io::stdout().lock(), &args, format, painter)
        }
    }
}

fn build_config(cli: &Cli) -> CliConfig {
    let verbosity = Verbosity::from_flags(cli.quiet, cli.verbose);
    let color: ColorChoice = cli.color.clone().into();

    CliConfig::new()
        .with_verbosity(verbosity)
        .with_color(color)
        .with_json(cli.json)
}
