//! Article values and engine-boundary event types.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::text::TextNormalizer;

/// Ingestion payload for one article, as delivered by the transport layer.
///
/// Ingestion is an idempotent upsert: re-ingesting an id replaces the stored
/// article wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleIngest {
    /// Unique article key.
    pub id: u64,
    /// Publisher the article belongs to.
    pub publisher_id: u64,
    /// Category id; zero usually means unknown.
    pub category_id: u64,
    /// Raw article text (title and body concatenated upstream).
    pub text: String,
    /// Whether the provider allows recommending this article.
    pub recommendable: bool,
}

/// A click event: some user read some article.
///
/// `user_id == 0` is the provider's anonymous sentinel; such events are
/// ignored for profiling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadEvent {
    /// Reading user; zero means unknown/anonymous.
    pub user_id: u64,
    /// Publisher reported by the event itself.
    pub publisher_id: u64,
    /// Id of the read article; may be unknown to the engine.
    pub article_id: u64,
}

/// An immutable stored article.
///
/// Created once at ingestion with its keyword map precomputed; an update for
/// the same id produces a fresh `Article` value instead of mutating this one,
/// so holders of a stale reference can never observe partial updates.
///
/// The dense TF-IDF vector aligned to the vocabulary is engine-owned state,
/// not part of this value; it changes shape as the vocabulary grows.
#[derive(Debug, Clone)]
pub struct Article {
    id: u64,
    publisher_id: u64,
    category_id: u64,
    recommendable: bool,
    text: String,
    keywords: Vec<(String, usize)>,
}

impl Article {
    /// Build an article from an ingestion payload.
    ///
    /// # Errors
    ///
    /// Propagates normalization failures from
    /// [`TextNormalizer::keyword_map`].
    pub fn from_ingest(ingest: ArticleIngest, normalizer: &TextNormalizer) -> Result<Self> {
        let keywords = normalizer.keyword_map(&ingest.text)?;
        Ok(Self {
            id: ingest.id,
            publisher_id: ingest.publisher_id,
            category_id: ingest.category_id,
            recommendable: ingest.recommendable,
            text: ingest.text,
            keywords,
        })
    }

    /// Unique article key.
    #[must_use]
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Publisher the article belongs to.
    #[must_use]
    pub fn publisher_id(&self) -> u64 {
        self.publisher_id
    }

    /// Category id; zero usually means unknown.
    #[must_use]
    pub fn category_id(&self) -> u64 {
        self.category_id
    }

    /// Whether the provider allows recommending this article.
    #[must_use]
    pub fn is_recommendable(&self) -> bool {
        self.recommendable
    }

    /// Raw text the keyword map was computed from.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Keyword counts in first-occurrence order.
    #[must_use]
    pub fn keywords(&self) -> &[(String, usize)] {
        &self.keywords
    }
}
