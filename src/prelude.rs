//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use recomendar::prelude::*;
//! ```

pub use crate::error::{RecomendarError, Result};
pub use crate::recommend::{Article, ArticleIngest, ReadEvent, Recommender, ANONYMOUS_USER};
pub use crate::similarity::cosine_similarity;
pub use crate::text::{PorterStemmer, Stemmer, StopWordsFilter, TextNormalizer, VocabularyIndex};
