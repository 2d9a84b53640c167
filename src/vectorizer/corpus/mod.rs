use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::vectorizer::term::TermFrequency;

/// Corpus-wide statistics of a single term
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermStat {
    /// occurrences across all documents (with repetition)
    pub occurrences: u64,
    /// number of distinct documents containing the term
    pub doc_freq: u64,
}

/// keep document count and per-term statistics for one run
///
/// Built fresh for every clustering run and threaded through the pipeline
/// by value, never shared between runs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Corpus {
    /// number of documents added
    doc_num: u64,
    /// term statistics in first-seen order
    term_stats: IndexMap<Box<str>, TermStat>,
}

impl Corpus {
    /// Create a new instance
    pub fn new() -> Self {
        Self {
            doc_num: 0,
            term_stats: IndexMap::new(),
        }
    }

    /// Build a corpus from per-document term frequencies
    pub fn from_docs(docs: &[TermFrequency]) -> Self {
        let mut corpus = Self::new();
        for doc in docs {
            corpus.add_doc(doc);
        }
        corpus
    }

    /// Add a document's terms to the corpus
    pub fn add_doc(&mut self, doc: &TermFrequency) {
        self.doc_num += 1;
        for (term, count) in doc.iter() {
            // termごとに1文書1回だけdfを数える
            if let Some(stat) = self.term_stats.get_mut(term) {
                stat.occurrences += count;
                stat.doc_freq += 1;
            } else {
                self.term_stats.insert(
                    term.into(),
                    TermStat {
                        occurrences: count,
                        doc_freq: 1,
                    },
                );
            }
        }
    }

    /// Get the number of documents in the corpus
    #[inline]
    pub fn doc_num(&self) -> u64 {
        self.doc_num
    }

    /// Get the statistics of a term
    pub fn term_stat(&self, term: &str) -> Option<TermStat> {
        self.term_stats.get(term).copied()
    }

    /// Occurrences of a term across the corpus
    pub fn occurrences(&self, term: &str) -> u64 {
        self.term_stat(term).map_or(0, |stat| stat.occurrences)
    }

    /// Number of documents containing a term
    pub fn doc_freq(&self, term: &str) -> u64 {
        self.term_stat(term).map_or(0, |stat| stat.doc_freq)
    }

    /// Number of distinct terms
    #[inline]
    pub fn vocab_size(&self) -> usize {
        self.term_stats.len()
    }

    /// (term, stat) pairs in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = (&str, TermStat)> {
        self.term_stats.iter().map(|(term, &stat)| (term.as_ref(), stat))
    }
}
