//! Quote catalog with category-based random selection

use crate::core::error::DomainError;
use crate::quote::entities::Quote;
use rand::Rng;
use std::collections::HashMap;
use std::sync::LazyLock;

/// Category used when the requested one is unknown
pub const DEFAULT_CATEGORY: &str = "motivation";

static BUILTIN: LazyLock<QuoteCatalog> = LazyLock::new(|| {
    let mut categories = HashMap::new();
    categories.insert(
        "motivation".to_string(),
        vec![
            Quote::new(
                "The only way to do great work is to love what you do.",
                "Steve Jobs",
            ),
            Quote::new(
                "Success is not final, failure is not fatal: it is the courage to continue that counts.",
                "Winston Churchill",
            ),
            Quote::new(
                "Believe you can and you're halfway there.",
                "Theodore Roosevelt",
            ),
            Quote::new(
                "It does not matter how slowly you go as long as you do not stop.",
                "Confucius",
            ),
            Quote::new(
                "The secret of getting ahead is getting started.",
                "Mark Twain",
            ),
        ],
    );
    categories.insert(
        "productivity".to_string(),
        vec![
            Quote::new("Focus on being productive instead of busy.", "Tim Ferriss"),
            Quote::new(
                "The key is not to prioritize what's on your schedule, but to schedule your priorities.",
                "Stephen Covey",
            ),
            Quote::new(
                "Action is the foundational key to all success.",
                "Pablo Picasso",
            ),
        ],
    );
    categories.insert(
        "mindfulness".to_string(),
        vec![
            Quote::new(
                "The present moment is filled with joy and happiness. If you are attentive, you will see it.",
                "Thich Nhat Hanh",
            ),
            Quote::new(
                "Almost everything will work again if you unplug it for a few minutes, including you.",
                "Anne Lamott",
            ),
        ],
    );
    categories.insert(
        "success".to_string(),
        vec![
            Quote::new(
                "Success usually comes to those who are too busy to be looking for it.",
                "Henry David Thoreau",
            ),
            Quote::new(
                "I find that the harder I work, the more luck I seem to have.",
                "Thomas Jefferson",
            ),
        ],
    );

    QuoteCatalog::new(categories).expect("built-in catalog is valid")
});

/// Fixed mapping from category name to a non-empty list of quotes
///
/// Construction validates the two invariants selection relies on:
/// every category list is non-empty, and the [`DEFAULT_CATEGORY`]
/// fallback exists. After that, selection is total.
#[derive(Debug, Clone)]
pub struct QuoteCatalog {
    categories: HashMap<String, Vec<Quote>>,
}

impl QuoteCatalog {
    /// Create a catalog from a category mapping
    pub fn new(categories: HashMap<String, Vec<Quote>>) -> Result<Self, DomainError> {
        if !categories.contains_key(DEFAULT_CATEGORY) {
            return Err(DomainError::MissingDefaultCategory(
                DEFAULT_CATEGORY.to_string(),
            ));
        }
        for (name, quotes) in &categories {
            if quotes.is_empty() {
                return Err(DomainError::EmptyCategory(name.clone()));
            }
        }
        Ok(Self { categories })
    }

    /// The built-in catalog shipped with the plugin
    pub fn builtin() -> &'static QuoteCatalog {
        &BUILTIN
    }

    /// Quotes for a category, falling back to the default category
    ///
    /// An unknown name is not an error: the caller configured a category
    /// that does not exist, and the motivational fallback is always a
    /// reasonable answer.
    pub fn category(&self, name: &str) -> &[Quote] {
        self.categories
            .get(name)
            .unwrap_or_else(|| &self.categories[DEFAULT_CATEGORY])
    }

    /// Whether a category exists under this exact name
    pub fn contains(&self, name: &str) -> bool {
        self.categories.contains_key(name)
    }

    /// Iterate over the category names
    pub fn category_names(&self) -> impl Iterator<Item = &str> {
        self.categories.keys().map(String::as_str)
    }

    /// Pick a uniformly random quote from a category
    ///
    /// Unknown categories fall back to [`DEFAULT_CATEGORY`]. The list is
    /// never empty, so this always returns a quote.
    pub fn pick_with<R: Rng>(&self, category: &str, rng: &mut R) -> &Quote {
        let quotes = self.category(category);
        &quotes[rng.random_range(0..quotes.len())]
    }

    /// Pick a quote using the thread-local random source
    pub fn pick(&self, category: &str) -> &Quote {
        self.pick_with(category, &mut rand::rng())
    }
}
