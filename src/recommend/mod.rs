//! Content-based news recommendation.
//!
//! This module owns all recommendation state: stored articles, the
//! vocabulary their vectors are aligned to, and per-user read and publisher
//! profiles. Ranking is tiered: cosine similarity against the user's read
//! history when one exists, publisher-preference sampling when only clicks
//! on unknown articles were seen, and uniform cold-start sampling otherwise.
//!
//! # Quick Start
//!
//! ```
//! use recomendar::recommend::{ArticleIngest, Recommender};
//! use recomendar::text::TextNormalizer;
//!
//! let mut engine = Recommender::new(TextNormalizer::new());
//! engine
//!     .add_article(ArticleIngest {
//!         id: 1,
//!         publisher_id: 10,
//!         category_id: 0,
//!         text: "messi scores in barcelona".to_string(),
//!         recommendable: true,
//!     })
//!     .expect("ingestion should succeed");
//!
//! // No profile yet: cold-start tier returns what is available.
//! let ids = engine.recommend(42, 5).expect("recommend should succeed");
//! assert_eq!(ids, vec![1]);
//! ```

pub mod article;
pub mod engine;

pub use article::{Article, ArticleIngest, ReadEvent};
pub use engine::{Recommender, ANONYMOUS_USER};
