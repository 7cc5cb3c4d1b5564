//! Text processing pipeline: cleaning, tokenization, stop words, stemming
//! and TF-IDF vocabulary maintenance.
//!
//! The pipeline turns raw article text into a keyword-count map:
//!
//! ```text
//! text -> tokenize (clean, drop short, lowercase)
//!      -> filter_and_stem (stop words, Porter stem, stop words again)
//!      -> keyword_map (term -> count, first-occurrence order)
//! ```
//!
//! # Quick Start
//!
//! ```
//! use recomendar::text::TextNormalizer;
//!
//! let normalizer = TextNormalizer::new();
//! let keywords = normalizer
//!     .keyword_map("Messi returns, Messi scores!")
//!     .expect("keyword map should succeed");
//!
//! assert_eq!(keywords[0].0, "messi");
//! assert_eq!(keywords[0].1, 2);
//! ```

pub mod stem;
pub mod stopwords;
pub mod vectorize;

pub use stem::{PorterStemmer, Stemmer};
pub use stopwords::StopWordsFilter;
pub use vectorize::VocabularyIndex;

use std::collections::HashMap;
use std::io::BufRead;

use tracing::warn;

use crate::error::Result;

/// Normalizes raw article text into weighted keywords.
///
/// Owns the active stop-word set and the stemmer as explicit state. Engines
/// receive a normalizer at construction, so independent engine instances can
/// carry independent stop-word configurations and be tested in parallel.
///
/// Pure given the current stop-word set; reloading replaces that set
/// wholesale.
///
/// # Examples
///
/// ```
/// use recomendar::text::{StopWordsFilter, TextNormalizer};
///
/// let normalizer =
///     TextNormalizer::new().with_stop_words(StopWordsFilter::new(vec!["the", "to"]));
///
/// let words = normalizer
///     .filter_and_stem(&["the".to_string(), "running".to_string()])
///     .expect("pipeline should succeed");
/// assert_eq!(words, vec!["run"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TextNormalizer {
    stop_words: StopWordsFilter,
    stemmer: PorterStemmer,
}

impl TextNormalizer {
    /// Create a normalizer with an empty stop-word set (no filtering).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the stop-word set, builder style.
    #[must_use]
    pub fn with_stop_words(mut self, stop_words: StopWordsFilter) -> Self {
        self.stop_words = stop_words;
        self
    }

    /// The active stop-word set.
    #[must_use]
    pub fn stop_words(&self) -> &StopWordsFilter {
        &self.stop_words
    }

    /// Replace the stop-word set wholesale.
    pub fn set_stop_words(&mut self, stop_words: StopWordsFilter) {
        self.stop_words = stop_words;
    }

    /// Reload the stop-word set from an optional line stream.
    ///
    /// `None` clears the set to empty, meaning "no filtering". A failing
    /// stream is logged and likewise degrades to the empty set; stop words
    /// are an accuracy aid, never worth failing ingestion over.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::io::Cursor;
    /// use recomendar::text::TextNormalizer;
    ///
    /// let mut normalizer = TextNormalizer::new();
    /// normalizer.load_stop_words(Some(Cursor::new("the\nis\n")));
    /// assert_eq!(normalizer.stop_words().len(), 2);
    ///
    /// normalizer.load_stop_words::<Cursor<&str>>(None);
    /// assert!(normalizer.stop_words().is_empty());
    /// ```
    pub fn load_stop_words<R: BufRead>(&mut self, source: Option<R>) {
        self.stop_words = match source {
            Some(reader) => match StopWordsFilter::from_reader(reader) {
                Ok(filter) => filter,
                Err(e) => {
                    warn!(error = %e, "failed to read stop words, disabling filtering");
                    StopWordsFilter::empty()
                }
            },
            None => StopWordsFilter::empty(),
        };
    }

    /// Strip every character that is not a Unicode letter.
    ///
    /// # Examples
    ///
    /// ```
    /// use recomendar::text::TextNormalizer;
    ///
    /// let normalizer = TextNormalizer::new();
    /// assert_eq!(normalizer.clean_token("barça!"), "barça");
    /// assert_eq!(normalizer.clean_token("2026"), "");
    /// ```
    #[must_use]
    pub fn clean_token(&self, token: &str) -> String {
        token.chars().filter(|c| c.is_alphabetic()).collect()
    }

    /// Split text on whitespace into cleaned, lowercased tokens.
    ///
    /// Tokens whose cleaned form is one character or shorter are dropped;
    /// they carry no signal and would bloat the vocabulary.
    #[must_use]
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        text.split_whitespace()
            .map(|token| self.clean_token(token))
            .filter(|clean| clean.chars().count() > 1)
            .map(|clean| clean.to_lowercase())
            .collect()
    }

    /// Apply stop-word filtering and stemming to tokenized words.
    ///
    /// A token is dropped when the active stop-word set contains it, and a
    /// stem is dropped when the set contains the stemmed form. An empty set
    /// filters nothing.
    ///
    /// # Errors
    ///
    /// Propagates stemmer failures; the built-in Porter stemmer never fails.
    pub fn filter_and_stem<S: AsRef<str>>(&self, tokens: &[S]) -> Result<Vec<String>> {
        let mut words = Vec::with_capacity(tokens.len());
        for token in tokens {
            let token = token.as_ref();
            if self.stop_words.is_stop_word(token) {
                continue;
            }
            let stemmed = self.stemmer.stem(token)?;
            if self.stop_words.is_stop_word(&stemmed) {
                continue;
            }
            words.push(stemmed);
        }
        Ok(words)
    }

    /// Run the full pipeline and count term occurrences.
    ///
    /// Terms appear in first-occurrence order, which is the order they would
    /// join the vocabulary in.
    ///
    /// # Errors
    ///
    /// Propagates stemmer failures from [`TextNormalizer::filter_and_stem`].
    pub fn keyword_map(&self, text: &str) -> Result<Vec<(String, usize)>> {
        let tokens = self.tokenize(text);
        let words = self.filter_and_stem(&tokens)?;

        let mut keywords: Vec<(String, usize)> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();
        for word in words {
            match index.get(&word) {
                Some(&i) => keywords[i].1 += 1,
                None => {
                    index.insert(word.clone(), keywords.len());
                    keywords.push((word, 1));
                }
            }
        }
        Ok(keywords)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_clean_token_keeps_only_letters() {
        let normalizer = TextNormalizer::new();
        assert_eq!(normalizer.clean_token("hello,"), "hello");
        assert_eq!(normalizer.clean_token("don't"), "dont");
        assert_eq!(normalizer.clean_token("123abc456"), "abc");
        assert_eq!(normalizer.clean_token("§2026!"), "");
        assert!(normalizer
            .clean_token("übermäßig.")
            .chars()
            .all(char::is_alphabetic));
    }

    #[test]
    fn test_tokenize_drops_short_tokens() {
        let normalizer = TextNormalizer::new();
        let tokens = normalizer.tokenize("A 1 ok Bendik is an ent.");
        assert_eq!(tokens, vec!["ok", "bendik", "is", "an", "ent"]);
        assert!(tokens.iter().all(|t| t.chars().count() > 1));
    }

    #[test]
    fn test_tokenize_lowercases() {
        let normalizer = TextNormalizer::new();
        assert_eq!(normalizer.tokenize("MESSI Barcelona"), vec!["messi", "barcelona"]);
    }

    #[test]
    fn test_filter_and_stem_without_stop_words() {
        let normalizer = TextNormalizer::new();
        let words = normalizer
            .filter_and_stem(&["running", "cats"])
            .expect("pipeline should succeed");
        assert_eq!(words, vec!["run", "cat"]);
    }

    #[test]
    fn test_filter_and_stem_drops_stop_words() {
        let normalizer =
            TextNormalizer::new().with_stop_words(StopWordsFilter::new(vec!["is", "an"]));
        let words = normalizer
            .filter_and_stem(&["bendik", "is", "an", "ent"])
            .expect("pipeline should succeed");
        assert_eq!(words, vec!["bendik", "ent"]);
    }

    #[test]
    fn test_filter_and_stem_drops_stop_word_stems() {
        // "running" survives the first check but stems to "run",
        // which is itself a stop word.
        let normalizer = TextNormalizer::new().with_stop_words(StopWordsFilter::new(vec!["run"]));
        let words = normalizer
            .filter_and_stem(&["running", "jumping"])
            .expect("pipeline should succeed");
        assert_eq!(words, vec!["jump"]);
    }

    #[test]
    fn test_keyword_map_counts_in_first_occurrence_order() {
        let normalizer = TextNormalizer::new();
        let keywords = normalizer
            .keyword_map("messi barcelona messi madrid barcelona messi")
            .expect("keyword map should succeed");
        assert_eq!(
            keywords,
            vec![
                ("messi".to_string(), 3),
                ("barcelona".to_string(), 2),
                ("madrid".to_string(), 1),
            ]
        );
    }

    #[test]
    fn test_keyword_map_empty_text() {
        let normalizer = TextNormalizer::new();
        let keywords = normalizer
            .keyword_map("")
            .expect("keyword map should succeed");
        assert!(keywords.is_empty());
    }

    #[test]
    fn test_load_stop_words_replaces_wholesale() {
        let mut normalizer = TextNormalizer::new();
        normalizer.load_stop_words(Some(Cursor::new("hei\nok\nhade\n")));
        assert_eq!(normalizer.stop_words().len(), 3);

        normalizer.load_stop_words(Some(Cursor::new("og\n")));
        assert_eq!(normalizer.stop_words().len(), 1);
        assert!(!normalizer.stop_words().is_stop_word("hei"));
    }

    #[test]
    fn test_load_stop_words_none_clears() {
        let mut normalizer = TextNormalizer::new();
        normalizer.load_stop_words(Some(Cursor::new("hei\n")));
        normalizer.load_stop_words::<Cursor<&str>>(None);
        assert!(normalizer.stop_words().is_empty());
    }

    #[test]
    fn test_load_stop_words_degrades_on_stream_failure() {
        struct FailingReader;
        impl std::io::Read for FailingReader {
            fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
                Err(std::io::Error::new(std::io::ErrorKind::Other, "stream died"))
            }
        }

        let mut normalizer = TextNormalizer::new();
        normalizer.load_stop_words(Some(Cursor::new("hei\n")));
        normalizer.load_stop_words(Some(std::io::BufReader::new(FailingReader)));
        assert!(normalizer.stop_words().is_empty());
    }
}
