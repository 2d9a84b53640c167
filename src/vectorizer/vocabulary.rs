use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::vectorizer::corpus::{Corpus, TermStat};

/// Vocabulary
/// The ranked, bounded set of terms used as feature dimensions.
///
/// A term's dimension index is its rank: terms are ordered by descending
/// corpus occurrences, ties broken lexicographically, so the same corpus
/// always produces the same vocabulary.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Vocabulary {
    #[serde(with = "indexmap::map::serde_seq")]
    terms: IndexMap<Box<str>, TermStat>,
}

impl Vocabulary {
    /// Select the vocabulary from corpus statistics
    ///
    /// # Arguments
    /// * `corpus` - statistics of the current run
    /// * `min_term_freq` - minimum corpus-wide occurrences of a kept term
    /// * `max_vocab_size` - maximum number of kept terms
    pub fn build(corpus: &Corpus, min_term_freq: u64, max_vocab_size: usize) -> Self {
        let mut candidates: Vec<(&str, TermStat)> = corpus
            .iter()
            .filter(|(_, stat)| stat.occurrences >= min_term_freq)
            .collect();
        candidates.sort_unstable_by(|a, b| {
            b.1.occurrences
                .cmp(&a.1.occurrences)
                .then_with(|| a.0.cmp(b.0))
        });
        candidates.truncate(max_vocab_size);

        let terms: IndexMap<Box<str>, TermStat> = candidates
            .into_iter()
            .map(|(term, stat)| (Box::from(term), stat))
            .collect();
        debug!(
            candidates = corpus.vocab_size(),
            kept = terms.len(),
            min_term_freq,
            max_vocab_size,
            "vocabulary built"
        );
        Self { terms }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Dimension index of a term
    #[inline]
    pub fn index_of(&self, term: &str) -> Option<usize> {
        self.terms.get_index_of(term)
    }

    /// Term at a dimension index
    pub fn term(&self, index: usize) -> Option<&str> {
        self.terms.get_index(index).map(|(term, _)| term.as_ref())
    }

    /// Statistics of the term at a dimension index
    pub fn stat(&self, index: usize) -> Option<TermStat> {
        self.terms.get_index(index).map(|(_, &stat)| stat)
    }

    /// Document frequency of the term at a dimension index
    pub fn doc_freq(&self, index: usize) -> u64 {
        self.stat(index).map_or(0, |stat| stat.doc_freq)
    }

    /// (term, stat) pairs in dimension order
    pub fn iter(&self) -> impl Iterator<Item = (&str, TermStat)> {
        self.terms.iter().map(|(term, &stat)| (term.as_ref(), stat))
    }
}
