//! Cards command handler: list the sample board through a filter

use std::io::Write;

use deskpad::cards::{Card, CardBoard, Category, EmptyState};
use serde::Serialize;
use tracing::debug;

use crate::commands::CardsArgs;
use crate::error::{CliError, CliResult};
use crate::output::{write_json, OutputFormat, Painter};

/// Category filter from a `--category` value; `all` means no restriction
pub fn parse_category(key: &str) -> CliResult<Option<Category>> {
    let key = key.trim().to_lowercase();
    if key == "all" {
        return Ok(None);
    }
    Category::from_key(&key).map(Some).ok_or_else(|| {
        let known: Vec<_> = Category::ALL.iter().map(Category::key).collect();
        CliError::invalid_argument(format!(
            "unknown category {key:?} (expected one of: all, {})",
            known.join(", ")
        ))
    })
}

/// Sample board with the filters from `args` applied
pub fn filtered_board(args: &CardsArgs) -> CliResult<CardBoard> {
    let mut board = CardBoard::with_examples();
    if let Some(text) = &args.search {
        board.set_search(text.as_str());
    }
    if let Some(key) = &args.category {
        board.set_category(parse_category(key)?);
    }
    debug!(filter = ?board.filter(), "filtering cards");
    Ok(board)
}

#[derive(Debug, Serialize)]
struct CardsReport<'a> {
    counter: String,
    total: usize,
    cards: Vec<&'a Card>,
    empty_state: Option<EmptyStateReport>,
}

#[derive(Debug, Serialize)]
struct EmptyStateReport {
    #[serde(flatten)]
    state: EmptyState,
    heading: &'static str,
    message: String,
}

impl From<EmptyState> for EmptyStateReport {
    fn from(state: EmptyState) -> Self {
        Self {
            state,
            heading: state.heading(),
            message: state.message(),
        }
    }
}

/// Execute the cards command
pub fn execute_cards<W: Write>(
    out: &mut W,
    args: &CardsArgs,
    format: OutputFormat,
    painter: Painter,
) -> CliResult<()> {
    let board = filtered_board(args)?;
    match format {
        OutputFormat::Json => {
            let report = CardsReport {
                counter: board.counter_label(),
                total: board.len(),
                cards: board.visible(),
                empty_state: board.empty_state().map(EmptyStateReport::from),
            };
            write_json(out, &report)
        }
        OutputFormat::Text => write_text(out, &board, painter),
    }
}

fn write_text<W: Write>(out: &mut W, board: &CardBoard, painter: Painter) -> CliResult<()> {
    if !painter.is_quiet() {
        writeln!(
            out,
            "{} {}",
            painter.heading("Cards"),
            painter.dim(&format!("({})", board.counter_label()))
        )?;
    }

    if let Some(state) = board.empty_state() {
        writeln!(out, "{}", state.heading())?;
        writeln!(out, "{}", painter.dim(&state.message()))?;
        return Ok(());
    }

    for card in board.visible() {
        writeln!(out, "{} {}", painter.category_badge(card.category), card.title)?;
        writeln!(out, "    {}", card.description)?;
        writeln!(
            out,
            "    {}",
            painter.dim(&card.created_at.format("%Y-%m-%d %H:%M").to_string())
        )?;
    }
    Ok(())
}
