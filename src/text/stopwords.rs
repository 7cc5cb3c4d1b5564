//! Stop word filtering for the normalization pipeline.
//!
//! Stop words are high-frequency words ("the", "is", "at") that carry little
//! signal for similarity ranking. The active set is plain process data, not a
//! hidden global: the [`TextNormalizer`](crate::text::TextNormalizer) owns
//! one filter and replaces it wholesale on reload.
//!
//! An empty filter means "no filtering"; the recommender stays fully
//! functional without any stop-word source.
//!
//! # Examples
//!
//! ```
//! use recomendar::text::stopwords::StopWordsFilter;
//!
//! let filter = StopWordsFilter::new(vec!["the", "is"]);
//! assert!(filter.is_stop_word("the"));
//! assert!(filter.is_stop_word("THE"));
//! assert!(!filter.is_stop_word("barcelona"));
//! ```

use std::collections::HashSet;
use std::io::BufRead;

use crate::error::Result;

/// Set of stop words with case-insensitive O(1) membership checks.
///
/// Words are stored lowercase; lookups lowercase their argument.
#[derive(Debug, Clone, Default)]
pub struct StopWordsFilter {
    stop_words: HashSet<String>,
}

impl StopWordsFilter {
    /// Create a filter from an explicit word collection.
    ///
    /// # Examples
    ///
    /// ```
    /// use recomendar::text::stopwords::StopWordsFilter;
    ///
    /// let filter = StopWordsFilter::new(vec!["og", "i", "det"]);
    /// assert_eq!(filter.len(), 3);
    /// ```
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let stop_words = words
            .into_iter()
            .map(|w| w.as_ref().to_lowercase())
            .collect();
        Self { stop_words }
    }

    /// Create an empty filter that removes nothing.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Load a filter from a line-oriented UTF-8 stream.
    ///
    /// One term per line; surrounding whitespace is trimmed and blank lines
    /// are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`RecomendarError::Io`](crate::error::RecomendarError::Io)
    /// when the stream fails mid-read. Callers that must not fail degrade to
    /// [`StopWordsFilter::empty`]; see
    /// [`TextNormalizer::load_stop_words`](crate::text::TextNormalizer::load_stop_words).
    ///
    /// # Examples
    ///
    /// ```
    /// use std::io::Cursor;
    /// use recomendar::text::stopwords::StopWordsFilter;
    ///
    /// let source = Cursor::new("hei\n\nok\nhade\n");
    /// let filter = StopWordsFilter::from_reader(source).expect("read should succeed");
    /// assert_eq!(filter.len(), 3);
    /// ```
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut stop_words = HashSet::new();
        for line in reader.lines() {
            let line = line?;
            let word = line.trim();
            if !word.is_empty() {
                stop_words.insert(word.to_lowercase());
            }
        }
        Ok(Self { stop_words })
    }

    /// Check whether a word is a stop word (case-insensitive).
    #[must_use]
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(&word.to_lowercase())
    }

    /// Number of stop words in the filter.
    #[must_use]
    pub fn len(&self) -> usize {
        self.stop_words.len()
    }

    /// Whether the filter is empty (filters nothing).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stop_words.is_empty()
    }
}
