//! Search state and the case-insensitive match predicate.

// ===== SearchState =====

/// State of the search input line.
///
/// `Typing` holds the edit buffer; `cursor` counts chars, not bytes.
/// `Active` is a committed query whose input line is closed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SearchState {
    /// No search.
    #[default]
    Inactive,
    /// User is typing a query.
    Typing {
        /// Edit buffer.
        query: String,
        /// Cursor position in chars.
        cursor: usize,
    },
    /// Query committed with Enter.
    Active {
        /// The committed query.
        query: SearchQuery,
    },
}

impl SearchState {
    /// Whether keystrokes go to the input line.
    pub fn is_typing(&self) -> bool {
        matches!(self, SearchState::Typing { .. })
    }

    /// Text currently shown in the input line.
    pub fn text(&self) -> &str {
        match self {
            SearchState::Inactive => "",
            SearchState::Typing { query, .. } => query,
            SearchState::Active { query } => query.as_str(),
        }
    }
}

// ===== SearchQuery =====

/// Validated search query. Never blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    raw: String,
    folded: String,
}

impl SearchQuery {
    /// Returns `None` if the query is empty or whitespace-only.
    pub fn new(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return None;
        }
        let folded = raw.to_lowercase();
        Some(Self { raw, folded })
    }

    /// The query as typed.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Case-insensitive substring match against `haystack`.
    pub fn matches(&self, haystack: &str) -> bool {
        haystack.to_lowercase().contains(&self.folded)
    }

    /// True if any of `fields` matches.
    pub fn matches_any(&self, fields: &[&str]) -> bool {
        fields.iter().any(|f| self.matches(f))
    }
}
