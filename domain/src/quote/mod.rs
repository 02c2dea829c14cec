//! Quote selection
//!
//! A [`QuoteCatalog`](catalog::QuoteCatalog) holds fixed, named lists of
//! quotes. Selection is uniformly random within one category, with a
//! silent fallback to the default category for unknown names.

pub mod catalog;
pub mod entities;

pub use catalog::{DEFAULT_CATEGORY, QuoteCatalog};
pub use entities::Quote;
