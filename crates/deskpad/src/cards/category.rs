//! Card categories with their labels and accent colors

use serde::{Deserialize, Serialize};

/// Category a card is filed under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Category {
    /// Work items
    Work,
    /// Personal errands
    Personal,
    /// Courses and reading
    Study,
    /// Free-time projects
    Hobbies,
    /// Everything else
    #[default]
    Other,
}

impl Category {
    /// Every category, in menu order
    pub const ALL: [Self; 5] = [
        Self::Work,
        Self::Personal,
        Self::Study,
        Self::Hobbies,
        Self::Other,
    ];

    /// Stable key used in filters and serialized cards
    #[must_use]
    pub const fn key(&self) -> &'static str {
        match self {
            Self::Work => "work",
            Self::Personal => "personal",
            Self::Study => "study",
            Self::Hobbies => "hobbies",
            Self::Other => "other",
        }
    }

    /// Human-readable label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Work => "Work",
            Self::Personal => "Personal",
            Self::Study => "Study",
            Self::Hobbies => "Hobbies",
            Self::Other => "Other",
        }
    }

    /// Accent color as `#rrggbb`
    #[must_use]
    pub const fn color(&self) -> &'static str {
        match self {
            Self::Work => "#2ecc71",
            Self::Personal => "#e74c3c",
            Self::Study => "#3498db",
            Self::Hobbies => "#f39c12",
            Self::Other => "#9b59b6",
        }
    }

    /// Accent color as an RGB triple
    #[must_use]
    pub fn rgb(&self) -> (u8, u8, u8) {
        let hex = &self.color()[1..];
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).unwrap_or(0);
        (channel(0), channel(2), channel(4))
    }

    /// Exact key lookup
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.key() == key)
    }

    /// Key lookup that files unknown keys under [`Category::Other`]
    #[must_use]
    pub fn from_key_or_other(key: &str) -> Self {
        Self::from_key(key).unwrap_or_default()
    }
}

impl From<String> for Category {
    fn from(key: String) -> Self {
        Self::from_key_or_other(&key)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
