//! Append-only vocabulary and TF-IDF vector assembly.
//!
//! The vocabulary assigns every distinct term a permanent vector position in
//! first-seen order and tracks per-term document frequency. Because positions
//! are never reassigned, a vector built over the current vocabulary stays
//! aligned with every other vector built at the same size; growth only ever
//! appends new positions (conceptually zero-padding older vectors).
//!
//! # Quick Start
//!
//! ```
//! use recomendar::text::vectorize::VocabularyIndex;
//!
//! let mut vocab = VocabularyIndex::new();
//! let keywords = vec![("messi".to_string(), 2), ("barcelona".to_string(), 1)];
//! vocab.observe(&keywords);
//!
//! assert_eq!(vocab.len(), 2);
//! assert_eq!(vocab.position("messi"), Some(0));
//!
//! let vector = vocab.term_vector(&keywords, 1);
//! assert_eq!(vector.len(), vocab.len());
//! ```

use std::collections::HashMap;

/// Ordered term index with document frequencies.
///
/// Terms are appended in first-seen order and keep their position forever;
/// document frequency counts distinct articles containing the term at least
/// once.
#[derive(Debug, Clone, Default)]
pub struct VocabularyIndex {
    /// Terms in position order; index in this Vec is the vector position.
    terms: Vec<String>,
    /// Term to position lookup.
    positions: HashMap<String, usize>,
    /// Document frequency per position, parallel to `terms`.
    doc_freq: Vec<usize>,
}

impl VocabularyIndex {
    /// Create an empty vocabulary.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one article's keyword map.
    ///
    /// Each distinct term either joins the vocabulary at the next free
    /// position with a document frequency of one, or has its document
    /// frequency incremented by exactly one. Occurrence counts within the
    /// article do not matter here; they only weight the article's own vector.
    pub fn observe(&mut self, keywords: &[(String, usize)]) {
        for (term, _count) in keywords {
            if let Some(&pos) = self.positions.get(term) {
                self.doc_freq[pos] += 1;
            } else {
                let pos = self.terms.len();
                self.terms.push(term.clone());
                self.positions.insert(term.clone(), pos);
                self.doc_freq.push(1);
            }
        }
    }

    /// Release one article's contribution to the document frequencies.
    ///
    /// Used when an article is replaced by a re-ingestion of the same id, so
    /// frequencies keep describing the live store. Terms keep their positions
    /// even at frequency zero; the vocabulary never shrinks.
    pub fn retire(&mut self, keywords: &[(String, usize)]) {
        for (term, _count) in keywords {
            if let Some(&pos) = self.positions.get(term) {
                self.doc_freq[pos] = self.doc_freq[pos].saturating_sub(1);
            }
        }
    }

    /// Number of distinct terms ever observed.
    #[must_use]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Whether no term has been observed yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Vector position of a term, if it has one.
    #[must_use]
    pub fn position(&self, term: &str) -> Option<usize> {
        self.positions.get(term).copied()
    }

    /// Whether the term has a vocabulary position.
    #[must_use]
    pub fn contains(&self, term: &str) -> bool {
        self.positions.contains_key(term)
    }

    /// Number of live articles containing the term; zero for unknown terms.
    #[must_use]
    pub fn document_frequency(&self, term: &str) -> usize {
        self.positions
            .get(term)
            .map_or(0, |&pos| self.doc_freq[pos])
    }

    /// Terms in position order.
    #[must_use]
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// Inverse document frequency of a term.
    ///
    /// `ln(total_articles / document_frequency)`; unknown terms and terms
    /// with no live documents weigh zero.
    #[must_use]
    pub fn idf(&self, term: &str, total_articles: usize) -> f64 {
        let df = self.document_frequency(term);
        if df == 0 || total_articles == 0 {
            return 0.0;
        }
        (total_articles as f64 / df as f64).ln()
    }

    /// Assemble a dense TF-IDF vector over the current vocabulary.
    ///
    /// Entry `i` is `count(term_i) * idf(term_i)`; terms absent from the
    /// keyword map contribute zero. The result always has the current
    /// vocabulary length, so vectors assembled at the same time are mutually
    /// comparable.
    #[must_use]
    pub fn term_vector(&self, keywords: &[(String, usize)], total_articles: usize) -> Vec<f64> {
        let counts: HashMap<&str, usize> = keywords
            .iter()
            .map(|(term, count)| (term.as_str(), *count))
            .collect();

        self.terms
            .iter()
            .map(|term| match counts.get(term.as_str()) {
                Some(&count) => count as f64 * self.idf(term, total_articles),
                None => 0.0,
            })
            .collect()
    }
}
