//! Recomendar: content-based news article recommendation in pure Rust.
//!
//! Recomendar ranks unseen news articles for a user by cosine similarity to
//! the articles the user has already read, over an incrementally grown
//! TF-IDF vector-space model. When no read history exists it degrades to
//! publisher-preference sampling, and finally to uniform cold-start
//! sampling.
//!
//! # Quick Start
//!
//! ```
//! use recomendar::prelude::*;
//!
//! let mut engine = Recommender::new(TextNormalizer::new());
//!
//! for (id, text) in [
//!     (1, "messi barcelona madrid ronaldo"),
//!     (2, "messi barcelona valencia liga"),
//!     (3, "madonna radio hollywood"),
//! ] {
//!     engine
//!         .add_article(ArticleIngest {
//!             id,
//!             publisher_id: id,
//!             category_id: 0,
//!             text: text.to_string(),
//!             recommendable: true,
//!         })
//!         .unwrap();
//! }
//!
//! engine.record_read(&ReadEvent { user_id: 7, publisher_id: 1, article_id: 1 });
//!
//! let ids = engine.recommend(7, 2).unwrap();
//! assert_eq!(ids[0], 2); // shares the most weighted terms with the read article
//! ```
//!
//! # Modules
//!
//! - [`text`]: normalization pipeline (cleaning, stop words, stemming) and
//!   the append-only TF-IDF vocabulary
//! - [`similarity`]: cosine similarity over dense vectors
//! - [`recommend`]: article storage, user profiles and the tiered ranking
//!   engine
//! - [`error`]: crate error type and `Result` alias
//!
//! # Concurrency
//!
//! The engine is synchronous and single-threaded by design; `&mut self`
//! receivers enforce single-writer access. Wrap the engine in a mutex if
//! multiple request handlers must share one instance.

pub mod error;
pub mod prelude;
pub mod recommend;
pub mod similarity;
pub mod text;

pub use error::{RecomendarError, Result};
pub use recommend::{Article, ArticleIngest, ReadEvent, Recommender};
pub use text::TextNormalizer;
