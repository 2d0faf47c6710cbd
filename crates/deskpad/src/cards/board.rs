//! The card board: create, delete, filter and order cards

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use super::{CardError, CardResult, Category};

/// A note-like card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// `card-<uuid>`
    pub id: String,
    /// Trimmed, non-empty title
    pub title: String,
    /// Trimmed, non-empty description
    pub description: String,
    /// Category the card is filed under
    pub category: Category,
    /// Creation time
    pub created_at: DateTime<Utc>,
}

impl Card {
    fn matches_text(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle) || self.description.to_lowercase().contains(needle)
    }
}

/// Search text plus an optional category restriction
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardFilter {
    /// Free-text search over title and description
    pub text: String,
    /// `None` shows every category
    pub category: Option<Category>,
}

impl CardFilter {
    /// Whether `card` passes the filter
    #[must_use]
    pub fn matches(&self, card: &Card) -> bool {
        let needle = self.text.trim().to_lowercase();
        let category_ok = self.category.map_or(true, |c| c == card.category);
        category_ok && (needle.is_empty() || card.matches_text(&needle))
    }

    /// Whether the filter lets everything through
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty() && self.category.is_none()
    }
}

/// Placeholder shown instead of the card grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EmptyState {
    /// The board has no cards at all
    NoCards,
    /// Cards exist but none pass the filter
    NoResults {
        /// Cards on the board
        total: usize,
    },
}

impl EmptyState {
    /// Headline
    #[must_use]
    pub fn heading(&self) -> &'static str {
        match self {
            Self::NoCards => "No cards yet",
            Self::NoResults { .. } => "No results",
        }
    }

    /// Body text
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::NoCards => "Use the form to create your first card!".to_string(),
            Self::NoResults { total } => {
                format!("No cards match those filters. (Total: {total})")
            }
        }
    }
}

/// In-memory card collection with its current filter
#[derive(Debug, Clone, Default)]
pub struct CardBoard {
    /// Insertion order
    cards: Vec<Card>,
    filter: CardFilter,
}

impl CardBoard {
    /// Empty board
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Board seeded with the three sample cards
    #[must_use]
    pub fn with_examples() -> Self {
        let mut board = Self::new();
        for (title, description, category) in [
            (
                "Learn Rust",
                "Finish the advanced course on ownership and traits.",
                Category::Study,
            ),
            (
                "Team meeting",
                "Present the new web development project.",
                Category::Work,
            ),
            (
                "Gym",
                "Training routine: cardio and weights.",
                Category::Personal,
            ),
        ] {
            // Sample text is never blank
            if let Err(err) = board.create(title, description, category) {
                debug!(%err, "skipping sample card");
            }
        }
        board
    }

    /// Creates a card stamped with the current time
    pub fn create(
        &mut self,
        title: &str,
        description: &str,
        category: Category,
    ) -> CardResult<&Card> {
        self.create_at(title, description, category, Utc::now())
    }

    /// Creates a card with an explicit creation time
    ///
    /// # Errors
    ///
    /// Returns [`CardError::EmptyField`] if the title or description is
    /// blank after trimming.
    pub fn create_at(
        &mut self,
        title: &str,
        description: &str,
        category: Category,
        created_at: DateTime<Utc>,
    ) -> CardResult<&Card> {
        let title = title.trim();
        let description = description.trim();
        if title.is_empty() {
            return Err(CardError::EmptyField { field: "title" });
        }
        if description.is_empty() {
            return Err(CardError::EmptyField {
                field: "description",
            });
        }

        let card = Card {
            id: format!("card-{}", Uuid::new_v4()),
            title: title.to_string(),
            description: description.to_string(),
            category,
            created_at,
        };
        debug!(id = %card.id, category = card.category.key(), "card created");
        self.cards.push(card);
        let index = self.cards.len() - 1;
        Ok(&self.cards[index])
    }

    /// Removes the card with `id`; returns whether one was removed
    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.cards.len();
        self.cards.retain(|card| card.id != id);
        let removed = self.cards.len() != before;
        debug!(id, removed, "card delete");
        removed
    }

    /// Looks a card up by id
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Card> {
        self.cards.iter().find(|card| card.id == id)
    }

    /// All cards in insertion order
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Number of cards, ignoring the filter
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// True when the board has no cards
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    // ===== Filtering =====

    /// Current filter
    #[must_use]
    pub fn filter(&self) -> &CardFilter {
        &self.filter
    }

    /// Sets the search text
    pub fn set_search(&mut self, text: impl Into<String>) {
        self.filter.text = text.into();
    }

    /// Restricts to one category, or `None` for all
    pub fn set_category(&mut self, category: Option<Category>) {
        self.filter.category = category;
    }

    /// Clears search text and category
    pub fn reset_filters(&mut self) {
        self.filter = CardFilter::default();
    }

    /// Cards passing the filter, newest first; equal timestamps put the
    /// later insertion first
    #[must_use]
    pub fn visible(&self) -> Vec<&Card> {
        let mut cards: Vec<&Card> = self
            .cards
            .iter()
            .rev()
            .filter(|card| self.filter.matches(card))
            .collect();
        // Stable sort keeps the reversed insertion order for ties
        cards.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        cards
    }

    /// `"1 card"` or `"N cards"` over the whole board
    #[must_use]
    pub fn counter_label(&self) -> String {
        match self.cards.len() {
            1 => "1 card".to_string(),
            n => format!("{n} cards"),
        }
    }

    /// Placeholder to show instead of the grid, if any
    #[must_use]
    pub fn empty_state(&self) -> Option<EmptyState> {
        if self.cards.is_empty() {
            Some(EmptyState::NoCards)
        } else if self.visible().is_empty() {
            Some(EmptyState::NoResults {
                total: self.cards.len(),
            })
        } else {
            None
        }
    }
}
