//! Keys command handler: replay a key script through the engine

use std::io::Write;

use deskpad::{Calculator, Command, EngineConfig};
use serde::Serialize;
use tracing::{debug, info};

use crate::commands::KeysArgs;
use crate::error::CliResult;
use crate::output::{write_json, OutputFormat, Painter};

/// Display after a single key
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeyStep {
    /// Key label as drawn on the keypad
    pub key: String,
    /// Display text after the key
    pub display: String,
}

/// Final engine state after a replay
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeysReport {
    /// Script as given
    pub sequence: String,
    /// Display text; empty when nothing was entered
    pub display: String,
    /// Whether the display shows the error sentinel
    pub is_error: bool,
    /// Stored left operand
    pub accumulator: Option<f64>,
    /// Pending operator name
    pub pending: Option<&'static str>,
    /// Per-key displays, only collected with `--steps`
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub steps: Vec<KeyStep>,
}

/// Runs `sequence` on a fresh calculator
///
/// The whole script is parsed before any key is applied, so an unknown key
/// leaves no partial result.
pub fn replay(sequence: &str, engine: EngineConfig, record_steps: bool) -> CliResult<KeysReport> {
    let commands = Command::parse_sequence(sequence)?;
    debug!(keys = commands.len(), "replaying key script");

    let mut calc = Calculator::with_config(engine);
    let mut steps = Vec::new();
    for command in commands {
        calc.apply(command);
        if record_steps {
            steps.push(KeyStep {
                key: command.label(),
                display: calc.current_display(),
            });
        }
    }

    let report = KeysReport {
        sequence: sequence.to_string(),
        display: calc.current_display(),
        is_error: calc.is_error(),
        accumulator: calc.accumulator(),
        pending: calc.pending_operation().map(|op| op.name()),
        steps,
    };
    info!(display = %report.display, "key script finished");
    Ok(report)
}

/// Execute the keys command
pub fn execute_keys<W: Write>(
    out: &mut W,
    args: &KeysArgs,
    engine: EngineConfig,
    format: OutputFormat,
    painter: Painter,
) -> CliResult<()> {
    let report = replay(&args.sequence, engine, args.steps)?;
    match format {
        OutputFormat::Json => write_json(out, &report),
        OutputFormat::Text => write_text(out, &report, painter),
    }
}

fn shown(display: &str) -> &str {
    if display.is_empty() {
        "0"
    } else {
        display
    }
}

fn write_text<W: Write>(out: &mut W, report: &KeysReport, painter: Painter) -> CliResult<()> {
    if !painter.is_quiet() {
        for step in &report.steps {
            writeln!(
                out,
                "{}  {}",
                painter.dim(&format!("{:>2}", step.key)),
                shown(&step.display)
            )?;
        }
    }
    writeln!(out, "{}", painter.display(shown(&report.display), report.is_error))?;
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::error::CliError;

    fn args(sequence: &str, steps: bool) -> KeysArgs {
        KeysArgs {
            sequence: sequence.to_string(),
            steps,
        }
    }

    fn run_text(sequence: &str, steps: bool) -> String {
        let mut out = Vec::new();
        execute_keys(
            &mut out,
            &args(sequence, steps),
            EngineConfig::default(),
            OutputFormat::Text,
            Painter::new(false, false),
        )
        .unwrap();
        String::from_utf8(out).unwrap()
    }

    // ===== replay =====

    #[test]
    fn test_replay_chaining() {
        let report = replay("2+3*4=", EngineConfig::default(), false).unwrap();
        assert_eq!(report.display, "20");
        assert!(!report.is_error);
        assert_eq!(report.accumulator, Some(20.0));
        assert_eq!(report.pending, None);
        assert!(report.steps.is_empty());
    }

    #[test]
    fn test_replay_pending_operator() {
        let report = replay("12 +", EngineConfig::default(), false).unwrap();
        assert_eq!(report.display, "12");
        assert_eq!(report.accumulator, Some(12.0));
        assert_eq!(report.pending, Some("add"));
    }

    #[test]
    fn test_replay_division_by_zero() {
        let report = replay("5/0=", EngineConfig::default(), false).unwrap();
        assert_eq!(report.display, "Error");
        assert!(report.is_error);
        assert_eq!(report.accumulator, None);
    }

    #[test]
    fn test_replay_unknown_key() {
        let err = replay("1+?", EngineConfig::default(), false).unwrap_err();
        assert!(matches!(err, CliError::Input(_)));
        assert!(err.to_string().contains("position 2"));
    }

    #[test]
    fn test_replay_steps() {
        let report = replay("1.5<", EngineConfig::default(), true).unwrap();
        let displays: Vec<_> = report.steps.iter().map(|s| s.display.as_str()).collect();
        assert_eq!(displays, ["1", "1.", "1.5", "1."]);
        assert_eq!(report.steps[3].key, "⌫");
    }

    #[test]
    fn test_replay_respects_engine_config() {
        let report = replay("10/3=", EngineConfig::new().with_display_precision(2), false).unwrap();
        assert_eq!(report.display, "3.33");

        let report = replay("123456", EngineConfig::new().with_max_input_len(3), false).unwrap();
        assert_eq!(report.display, "123");
    }

    // ===== output =====

    #[test]
    fn test_text_output_final_only() {
        assert_eq!(run_text("6*7=", false), "42\n");
    }

    #[test]
    fn test_text_output_empty_display_shows_zero() {
        assert_eq!(run_text("", false), "0\n");
        assert_eq!(run_text("5<", false), "0\n");
    }

    #[test]
    fn test_text_output_steps() {
        let text = run_text("2+3=", true);
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], " 2  2");
        assert_eq!(lines[1], " +  2");
        assert_eq!(lines[3], " =  5");
        assert_eq!(lines[4], "5");
    }

    #[test]
    fn test_quiet_hides_steps() {
        let mut out = Vec::new();
        execute_keys(
            &mut out,
            &args("2+3=", true),
            EngineConfig::default(),
            OutputFormat::Text,
            Painter::new(false, true),
        )
        .unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "5\n");
    }

    #[test]
    fn test_json_output() {
        let mut out = Vec::new();
        execute_keys(
            &mut out,
            &args("9-12=", false),
            EngineConfig::default(),
            OutputFormat::Json,
            Painter::new(false, false),
        )
        .unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["ok"], true);
        assert_eq!(value["data"]["display"], "-3");
        assert_eq!(value["data"]["is_error"], false);
        assert_eq!(value["data"]["accumulator"], -3.0);
        assert!(value["data"].get("steps").is_none());
    }
}
