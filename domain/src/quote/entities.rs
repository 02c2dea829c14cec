//! Quote value object

use serde::{Deserialize, Serialize};

/// An inspirational quote with its attribution (Value Object)
///
/// Immutable once constructed. Equality is structural, so the same
/// quote text under two categories compares equal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    text: String,
    author: String,
}

impl Quote {
    /// Create a new quote
    pub fn new(text: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            author: author.into(),
        }
    }

    /// Get the quote text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the attributed author
    pub fn author(&self) -> &str {
        &self.author
    }

    /// Format as a quoted attribution string for notifications
    ///
    /// Matches the notification body shown by the host:
    /// `"<text>" — <author>`.
    pub fn attributed(&self) -> String {
        format!("\"{}\" — {}", self.text, self.author)
    }
}

impl std::fmt::Display for Quote {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.attributed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attributed_format() {
        let quote = Quote::new("The secret of getting ahead is getting started.", "Mark Twain");
        assert_eq!(
            quote.attributed(),
            "\"The secret of getting ahead is getting started.\" — Mark Twain"
        );
    }

    #[test]
    fn test_quote_serde_round_trip() {
        let quote = Quote::new("Believe you can and you're halfway there.", "Theodore Roosevelt");
        let json = serde_json::to_string(&quote).unwrap();
        let back: Quote = serde_json::from_str(&json).unwrap();
        assert_eq!(back, quote);
    }
}
