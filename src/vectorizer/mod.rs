pub mod corpus;
pub mod term;
pub mod tfidf;
pub mod tokenizer;
pub mod vocabulary;

use std::marker::PhantomData;

use num::Float;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::vectorizer::{
    corpus::Corpus,
    term::TermFrequency,
    tfidf::{DefaultTFIDFEngine, TFIDFEngine},
    vocabulary::Vocabulary,
};

/// TF-IDF Vectorizer fitted on one run's documents
///
/// `TFIDFVectorizer<N, E>` has the following generic parameters:
/// - `N`: float type of the produced weights (f32, f64)
/// - `E`: TF-IDF calculation engine type (e.g., DefaultTFIDFEngine)
#[derive(Debug, Clone)]
pub struct TFIDFVectorizer<N = f64, E = DefaultTFIDFEngine>
where
    N: Float,
    E: TFIDFEngine<N>,
{
    /// selected vocabulary, one dimension per term
    vocabulary: Vocabulary,
    /// IDF vector, same order as the vocabulary
    idf_vec: Vec<N>,
    /// number of documents the vectorizer was fitted on
    doc_num: u64,
    _marker: PhantomData<fn() -> E>,
}

impl<N, E> TFIDFVectorizer<N, E>
where
    N: Float + Send + Sync,
    E: TFIDFEngine<N>,
{
    /// Build corpus statistics, vocabulary and IDF from the documents
    pub fn fit(docs: &[TermFrequency], min_term_freq: u64, max_vocab_size: usize) -> Self {
        let corpus = Corpus::from_docs(docs);
        let vocabulary = Vocabulary::build(&corpus, min_term_freq, max_vocab_size);
        let idf_vec = E::idf_vec(&vocabulary, corpus.doc_num());
        Self {
            vocabulary,
            idf_vec,
            doc_num: corpus.doc_num(),
            _marker: PhantomData,
        }
    }

    /// TF-IDF vector of a single document
    pub fn transform(&self, doc: &TermFrequency) -> Vec<N> {
        let mut vec = E::tf_vec(doc, &self.vocabulary);
        vec.iter_mut()
            .zip(self.idf_vec.iter())
            .for_each(|(w, &idf)| *w = *w * idf);
        vec
    }

    /// Dense matrix, one row per document in input order
    pub fn transform_all(&self, docs: &[TermFrequency]) -> TFIDFMatrix<N> {
        let rows: Vec<Vec<N>> = docs.par_iter().map(|doc| self.transform(doc)).collect();
        debug!(rows = rows.len(), cols = self.vocabulary.len(), "tf-idf matrix built");
        TFIDFMatrix {
            rows,
            cols: self.vocabulary.len(),
        }
    }

    /// `fit` then `transform_all` over the same documents
    pub fn fit_transform(
        docs: &[TermFrequency],
        min_term_freq: u64,
        max_vocab_size: usize,
    ) -> (Self, TFIDFMatrix<N>) {
        let vectorizer = Self::fit(docs, min_term_freq, max_vocab_size);
        let matrix = vectorizer.transform_all(docs);
        (vectorizer, matrix)
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn idf(&self) -> &[N] {
        &self.idf_vec
    }

    pub fn doc_num(&self) -> u64 {
        self.doc_num
    }
}

/// Dense documents × terms matrix
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TFIDFMatrix<N> {
    rows: Vec<Vec<N>>,
    cols: usize,
}

impl<N> TFIDFMatrix<N> {
    pub fn rows(&self) -> &[Vec<N>] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Option<&[N]> {
        self.rows.get(index).map(Vec::as_slice)
    }

    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn n_cols(&self) -> usize {
        self.cols
    }

    pub fn into_rows(self) -> Vec<Vec<N>> {
        self.rows
    }
}
