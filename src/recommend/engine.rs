//! The recommendation engine: article storage, user profiles and tiered
//! ranking.

use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};
use std::io::BufRead;

use tracing::debug;

use crate::error::Result;
use crate::recommend::article::{Article, ArticleIngest, ReadEvent};
use crate::similarity::cosine_similarity;
use crate::text::{TextNormalizer, VocabularyIndex};

/// Reserved user id for unknown/anonymous readers; never profiled.
pub const ANONYMOUS_USER: u64 = 0;

/// Content-based news recommender over an incremental vector-space model.
///
/// Articles are stored with TF-IDF vectors over a growing vocabulary; users
/// are profiled by the articles they read and the publishers they click.
/// Recommendations fall back through three tiers:
///
/// 1. mean cosine similarity to the user's read articles,
/// 2. a uniform sample of articles from the user's preferred publishers,
/// 3. a uniform sample of everything (cold start).
///
/// The engine is synchronous and single-threaded: every call runs to
/// completion before state is observable, and `&mut self` receivers make the
/// single-writer discipline a compile-time property. Callers that share an
/// engine across threads must serialize access externally.
///
/// # Examples
///
/// ```
/// use recomendar::recommend::{ArticleIngest, ReadEvent, Recommender};
/// use recomendar::text::TextNormalizer;
///
/// let mut engine = Recommender::new(TextNormalizer::new());
/// for (id, text) in [(1, "messi barcelona"), (2, "messi madrid"), (3, "madonna radio")] {
///     engine
///         .add_article(ArticleIngest {
///             id,
///             publisher_id: id,
///             category_id: 0,
///             text: text.to_string(),
///             recommendable: true,
///         })
///         .expect("ingestion should succeed");
/// }
///
/// engine.record_read(&ReadEvent { user_id: 42, publisher_id: 1, article_id: 1 });
///
/// let ids = engine.recommend(42, 2).expect("recommend should succeed");
/// assert_eq!(ids[0], 2); // shares "messi" with the read article
/// ```
#[derive(Debug)]
pub struct Recommender {
    normalizer: TextNormalizer,
    vocabulary: VocabularyIndex,
    /// Stored articles in insertion order.
    articles: Vec<Article>,
    /// Article id to position in `articles`.
    index_by_id: HashMap<u64, usize>,
    /// Article id to TF-IDF vector at the current vocabulary size.
    vectors: HashMap<u64, Vec<f64>>,
    /// Publisher id to ids of its stored articles.
    by_publisher: HashMap<u64, HashSet<u64>>,
    /// User id to ids of read (and resolved) articles.
    reads: HashMap<u64, HashSet<u64>>,
    /// User id to publisher ids the user has clicked.
    preferences: HashMap<u64, HashSet<u64>>,
    /// Seed for tier 2/3 sampling; `None` means thread-local entropy.
    random_state: Option<u64>,
}

impl Recommender {
    /// Create an engine around the given normalizer.
    ///
    /// The normalizer is owned, not shared: independent engines carry
    /// independent stop-word state.
    #[must_use]
    pub fn new(normalizer: TextNormalizer) -> Self {
        Self {
            normalizer,
            vocabulary: VocabularyIndex::new(),
            articles: Vec::new(),
            index_by_id: HashMap::new(),
            vectors: HashMap::new(),
            by_publisher: HashMap::new(),
            reads: HashMap::new(),
            preferences: HashMap::new(),
            random_state: None,
        }
    }

    /// Set the random state for reproducible tier 2/3 sampling.
    #[must_use]
    pub fn with_random_state(mut self, random_state: u64) -> Self {
        self.random_state = Some(random_state);
        self
    }

    /// Reload the normalizer's stop words; see
    /// [`TextNormalizer::load_stop_words`].
    ///
    /// Articles ingested earlier keep the keyword maps computed under the
    /// previous set.
    pub fn load_stop_words<R: BufRead>(&mut self, source: Option<R>) {
        self.normalizer.load_stop_words(source);
    }

    /// Ingest an article; an idempotent upsert by id.
    ///
    /// An existing article with the same id is removed from the sequence and
    /// every index before the new value is inserted (replace, never merge).
    /// Afterwards every stored vector is recomputed at the current vocabulary
    /// size, so all vectors agree on inverse document frequencies.
    ///
    /// # Errors
    ///
    /// Propagates normalization failures; the store is not modified in that
    /// case.
    pub fn add_article(&mut self, ingest: ArticleIngest) -> Result<()> {
        let article = Article::from_ingest(ingest, &self.normalizer)?;
        let id = article.id();

        if self.index_by_id.contains_key(&id) {
            debug!(article_id = id, "replacing existing article");
            self.remove_article(id);
        }

        self.vocabulary.observe(article.keywords());
        self.by_publisher
            .entry(article.publisher_id())
            .or_default()
            .insert(id);
        self.index_by_id.insert(id, self.articles.len());
        self.articles.push(article);

        self.recompute_vectors();
        Ok(())
    }

    /// Register a click: the user read an article.
    ///
    /// Events for [`ANONYMOUS_USER`] are ignored. A resolvable article id
    /// joins the user's read-set; independently, the event's own publisher id
    /// joins the user's preferred publishers even when the article is unknown
    /// (the event's publisher field is used uniformly, whether or not it
    /// agrees with the stored article).
    pub fn record_read(&mut self, event: &ReadEvent) {
        if event.user_id == ANONYMOUS_USER {
            return;
        }

        if self.index_by_id.contains_key(&event.article_id) {
            self.reads
                .entry(event.user_id)
                .or_default()
                .insert(event.article_id);
        }

        self.preferences
            .entry(event.user_id)
            .or_default()
            .insert(event.publisher_id);
    }

    /// Recommend up to `limit` article ids for a user.
    ///
    /// Tiers are evaluated in order: read-history ranking, publisher
    /// preference sampling, cold-start sampling. The result is duplicate-free
    /// and at most `limit` long; a zero limit or an empty store yields an
    /// empty list.
    ///
    /// # Errors
    ///
    /// Propagates similarity failures; these cannot occur while the
    /// engine's vector invariant holds.
    pub fn recommend(&self, user_id: u64, limit: usize) -> Result<Vec<u64>> {
        if limit == 0 || self.articles.is_empty() {
            return Ok(Vec::new());
        }

        if let Some(read) = self.reads.get(&user_id).filter(|r| !r.is_empty()) {
            return self.rank_by_read_history(read, limit);
        }

        if let Some(preferred) = self.preferences.get(&user_id).filter(|p| !p.is_empty()) {
            let candidates: Vec<u64> = self
                .articles
                .iter()
                .filter(|a| preferred.contains(&a.publisher_id()))
                .map(Article::id)
                .collect();
            if !candidates.is_empty() {
                return Ok(self.sample(candidates, limit));
            }
        }

        let all: Vec<u64> = self.articles.iter().map(Article::id).collect();
        Ok(self.sample(all, limit))
    }

    /// Rank unread articles by mean cosine similarity to the read-set.
    fn rank_by_read_history(&self, read: &HashSet<u64>, limit: usize) -> Result<Vec<u64>> {
        let mut scored: Vec<(u64, f64)> = Vec::with_capacity(self.articles.len());
        for article in &self.articles {
            let id = article.id();
            if read.contains(&id) {
                continue;
            }
            scored.push((id, self.predict_rating(id, read)?));
        }

        // Stable sort: equal scores keep insertion order.
        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
        scored.truncate(limit);
        Ok(scored.into_iter().map(|(id, _)| id).collect())
    }

    /// Mean cosine similarity of a candidate to every read article.
    fn predict_rating(&self, candidate_id: u64, read: &HashSet<u64>) -> Result<f64> {
        let Some(candidate) = self.vectors.get(&candidate_id) else {
            return Ok(0.0);
        };

        let mut sum = 0.0;
        for read_id in read {
            if let Some(read_vector) = self.vectors.get(read_id) {
                sum += cosine_similarity(candidate, read_vector)?;
            }
        }
        Ok(sum / read.len() as f64)
    }

    /// Draw up to `limit` candidates uniformly without replacement.
    ///
    /// Short candidate lists are returned whole, in insertion order.
    fn sample(&self, candidates: Vec<u64>, limit: usize) -> Vec<u64> {
        use rand::seq::SliceRandom;
        use rand::SeedableRng;

        if candidates.len() <= limit {
            return candidates;
        }

        if let Some(seed) = self.random_state {
            let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
            candidates.choose_multiple(&mut rng, limit).copied().collect()
        } else {
            let mut rng = rand::thread_rng();
            candidates.choose_multiple(&mut rng, limit).copied().collect()
        }
    }

    /// Remove an article from the sequence and every index.
    fn remove_article(&mut self, id: u64) {
        let Some(pos) = self.index_by_id.remove(&id) else {
            return;
        };
        let old = self.articles.remove(pos);

        for (i, article) in self.articles.iter().enumerate().skip(pos) {
            self.index_by_id.insert(article.id(), i);
        }

        self.vocabulary.retire(old.keywords());
        self.vectors.remove(&id);

        if let Some(ids) = self.by_publisher.get_mut(&old.publisher_id()) {
            ids.remove(&id);
            if ids.is_empty() {
                self.by_publisher.remove(&old.publisher_id());
            }
        }
    }

    /// Rebuild every stored vector at the current vocabulary size.
    ///
    /// Document frequencies and the article count are read now, so all
    /// stored vectors agree on idf after each ingestion.
    fn recompute_vectors(&mut self) {
        let total = self.articles.len();
        self.vectors = self
            .articles
            .iter()
            .map(|a| (a.id(), self.vocabulary.term_vector(a.keywords(), total)))
            .collect();
    }

    /// Stored articles in insertion order.
    #[must_use]
    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    /// Look up a stored article by id.
    #[must_use]
    pub fn article(&self, id: u64) -> Option<&Article> {
        self.index_by_id.get(&id).map(|&pos| &self.articles[pos])
    }

    /// Whether an article id is stored.
    #[must_use]
    pub fn contains_article(&self, id: u64) -> bool {
        self.index_by_id.contains_key(&id)
    }

    /// Number of stored articles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.articles.len()
    }

    /// Whether the store is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }

    /// The vocabulary the vectors are aligned to.
    #[must_use]
    pub fn vocabulary(&self) -> &VocabularyIndex {
        &self.vocabulary
    }

    /// The TF-IDF vector of a stored article.
    #[must_use]
    pub fn vector(&self, id: u64) -> Option<&[f64]> {
        self.vectors.get(&id).map(Vec::as_slice)
    }

    /// Ids of articles the user has read, if any were resolved.
    #[must_use]
    pub fn read_by(&self, user_id: u64) -> Option<&HashSet<u64>> {
        self.reads.get(&user_id)
    }

    /// Publishers the user has clicked articles from.
    #[must_use]
    pub fn preferred_publishers(&self, user_id: u64) -> Option<&HashSet<u64>> {
        self.preferences.get(&user_id)
    }

    /// The normalizer articles are ingested through.
    #[must_use]
    pub fn normalizer(&self) -> &TextNormalizer {
        &self.normalizer
    }
}

impl Default for Recommender {
    fn default() -> Self {
        Self::new(TextNormalizer::new())
    }
}
