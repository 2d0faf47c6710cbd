//! Output formatting: styled text and JSON envelopes

use std::io::Write;

use console::{Color, Style};
use deskpad::cards::Category;
use serde::Serialize;

use crate::config::CliConfig;
use crate::error::CliResult;

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// JSON output
    Json,
}

impl OutputFormat {
    /// Format selected by `--json`
    #[must_use]
    pub const fn from_json_flag(json: bool) -> Self {
        if json {
            Self::Json
        } else {
            Self::Text
        }
    }
}

/// JSON envelope wrapping every `--json` result
#[derive(Debug, Serialize)]
pub struct JsonEnvelope<T: Serialize> {
    /// Always `true`; errors go to stderr as text
    pub ok: bool,
    /// Command payload
    pub data: T,
}

/// Writes `data` as a pretty-printed envelope followed by a newline
pub fn write_json<W: Write, T: Serialize>(out: &mut W, data: T) -> CliResult<()> {
    let envelope = JsonEnvelope { ok: true, data };
    let text = serde_json::to_string_pretty(&envelope)?;
    writeln!(out, "{text}")?;
    Ok(())
}

/// Text styling that honors `--color`
#[derive(Debug, Clone, Copy)]
pub struct Painter {
    use_color: bool,
    quiet: bool,
}

impl Painter {
    /// Create a painter
    #[must_use]
    pub const fn new(use_color: bool, quiet: bool) -> Self {
        Self { use_color, quiet }
    }

    /// Painter for the given CLI flags
    #[must_use]
    pub fn from_config(config: &CliConfig) -> Self {
        Self::new(config.color.should_color(), config.verbosity.is_quiet())
    }

    /// Whether decorative lines (headers, counters) are suppressed
    #[must_use]
    pub const fn is_quiet(&self) -> bool {
        self.quiet
    }

    fn style(&self) -> Style {
        Style::new().force_styling(self.use_color)
    }

    /// Calculator display text; the error sentinel is red
    #[must_use]
    pub fn display(&self, text: &str, is_error: bool) -> String {
        let style = if is_error {
            self.style().red().bold()
        } else {
            self.style().bold()
        };
        style.apply_to(text).to_string()
    }

    /// Section heading
    #[must_use]
    pub fn heading(&self, text: &str) -> String {
        self.style().bold().underlined().apply_to(text).to_string()
    }

    /// Secondary text
    #[must_use]
    pub fn dim(&self, text: &str) -> String {
        self.style().dim().apply_to(text).to_string()
    }

    /// `[Label]` badge in the category color
    #[must_use]
    pub fn category_badge(&self, category: Category) -> String {
        self.style()
            .fg(category_color(category))
            .apply_to(format!("[{}]", category.label()))
            .to_string()
    }
}

/// Nearest terminal color to a category's accent
#[must_use]
pub const fn category_color(category: Category) -> Color {
    match category {
        Category::Work => Color::Green,
        Category::Personal => Color::Red,
        Category::Study => Color::Blue,
        Category::Hobbies => Color::Yellow,
        Category::Other => Color::Magenta,
    }
}
