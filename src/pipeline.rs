use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{
    cluster::{silhouette_score, Kmeans},
    config::ClusteringConfig,
    document::Document,
    error::{Error, Result},
    vectorizer::{term::TermFrequency, TFIDFVectorizer},
};

/// The clustering batch: tokens → vocabulary → TF-IDF → k-means → silhouette.
///
/// Holds only configuration. Every [`run`](Self::run) builds its vocabulary
/// and matrix from scratch; nothing carries over between runs.
#[derive(Debug, Clone)]
pub struct ClusteringPipeline {
    config: ClusteringConfig,
}

/// Outcome of one clustering run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusterReport<K> {
    /// `(document id, label)` for every clustered document, in input order
    pub assignments: Vec<(K, usize)>,
    pub n_clusters: usize,
    /// mean silhouette, `None` when disabled
    pub silhouette: Option<f64>,
    pub iterations: usize,
    pub converged: bool,
    pub inertia: f64,
    pub vocabulary_size: usize,
    /// seed actually used, for replaying the run
    pub seed: u64,
}

impl ClusteringPipeline {
    pub fn new(config: ClusteringConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ClusteringConfig {
        &self.config
    }

    /// Cluster `documents`.
    ///
    /// Only the first `max_documents` are considered, and of those only the
    /// ones with non-blank text.
    ///
    /// # Errors
    /// - [`Error::EmptyInput`] when no document is eligible
    /// - [`Error::InvalidClusterCount`] when `num_clusters` exceeds the eligible count
    /// - [`Error::EmptyVocabulary`] when no term passes the frequency filter
    pub fn run<K>(&self, documents: &[Document<K>]) -> Result<ClusterReport<K>>
    where
        K: Clone + Send + Sync,
    {
        let config = &self.config;
        let eligible: Vec<&Document<K>> = documents
            .iter()
            .take(config.max_documents)
            .filter(|doc| doc.is_eligible())
            .collect();
        debug!(
            given = documents.len(),
            eligible = eligible.len(),
            max_documents = config.max_documents,
            "documents selected"
        );
        if eligible.is_empty() {
            return Err(Error::EmptyInput);
        }
        let k = config.num_clusters;
        if k == 0 || k > eligible.len() {
            return Err(Error::InvalidClusterCount {
                requested: k,
                n_items: eligible.len(),
            });
        }

        let freqs: Vec<TermFrequency> = eligible
            .par_iter()
            .map(|doc| TermFrequency::from_text(doc.text()))
            .collect();
        let vectorizer: TFIDFVectorizer<f64> =
            TFIDFVectorizer::fit(&freqs, config.min_term_freq, config.max_vocab_size);
        if vectorizer.vocabulary().is_empty() {
            return Err(Error::EmptyVocabulary);
        }
        let matrix = vectorizer.transform_all(&freqs);

        let seed = config.seed.unwrap_or_else(rand::random);
        let fit = Kmeans::new(k)
            .with_seed(seed)
            .with_max_iter(config.max_iterations)
            .fit(matrix.rows())?;

        let silhouette = if config.compute_silhouette {
            Some(silhouette_score(matrix.rows(), &fit.labels, k)?)
        } else {
            None
        };

        info!(
            documents = eligible.len(),
            vocabulary = vectorizer.vocabulary().len(),
            k,
            seed,
            iterations = fit.iterations,
            converged = fit.converged,
            silhouette = ?silhouette,
            "clustering finished"
        );

        Ok(ClusterReport {
            assignments: eligible
                .iter()
                .map(|doc| doc.id.clone())
                .zip(fit.labels)
                .collect(),
            n_clusters: k,
            silhouette,
            iterations: fit.iterations,
            converged: fit.converged,
            inertia: fit.inertia,
            vocabulary_size: vectorizer.vocabulary().len(),
            seed,
        })
    }
}

impl<K> ClusterReport<K> {
    /// Label of a document, `None` when it was not clustered.
    pub fn label_of(&self, id: &K) -> Option<usize>
    where
        K: PartialEq,
    {
        self.assignments
            .iter()
            .find(|(doc_id, _)| doc_id == id)
            .map(|&(_, label)| label)
    }

    /// Ids assigned to `label`, in input order.
    pub fn members(&self, label: usize) -> impl Iterator<Item = &K> {
        self.assignments
            .iter()
            .filter(move |(_, l)| *l == label)
            .map(|(id, _)| id)
    }

    /// Number of documents per label, indexed by label.
    pub fn cluster_sizes(&self) -> Vec<usize> {
        let mut sizes = vec![0; self.n_clusters];
        for &(_, label) in &self.assignments {
            sizes[label] += 1;
        }
        sizes
    }
}
