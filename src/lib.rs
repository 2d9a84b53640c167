/// This crate is a Document Clustering Engine built on a TF-IDF Vectorizer.
pub mod cluster;
pub mod config;
pub mod document;
pub mod error;
pub mod loader;
pub mod pipeline;
pub mod store;
pub mod utils;
pub mod vectorizer;

/// Clustering Pipeline
/// The top-level entry point of this crate.
/// One synchronous call turns a document set into cluster labels:
///
/// raw text → tokens → corpus statistics → vocabulary → TF-IDF matrix
/// → k-means labels → silhouette score
///
/// Each run recomputes everything from scratch; the pipeline holds nothing
/// but its configuration.
///
/// `run` fails with a typed error when there is nothing to cluster
/// (`Error::EmptyInput`, `Error::EmptyVocabulary`, see `Error::is_noop`) or
/// when the requested cluster count exceeds the eligible documents.
pub use pipeline::{ClusterReport, ClusteringPipeline};

/// Clustering Configuration
/// All recognized parameters of a run: cluster count, corpus cap,
/// vocabulary cap, minimum term frequency, iteration cap and seed.
///
/// Can be loaded from defaults + TOML file + `DOC_CLUSTER_*` environment
/// variables.
pub use config::ClusteringConfig;

/// Input document
/// An opaque id plus optional text. Documents whose text is absent or blank
/// are not clustered.
pub use document::Document;

/// Error type of this crate
pub use error::{Error, Result};

/// TF-IDF Vectorizer
/// Fits a bounded vocabulary and IDF vector on one run's documents and
/// produces a dense documents × terms matrix.
///
/// `TFIDFVectorizer<N, E>` has the following generic parameters:
/// - `N`: weight type (f32, f64)
/// - `E`: TF-IDF calculation engine type (e.g., DefaultTFIDFEngine)
pub use vectorizer::{TFIDFMatrix, TFIDFVectorizer};

/// TF IDF Calculation Engine Trait
/// Defines how TF and IDF vectors are computed.
/// `DefaultTFIDFEngine` uses `tf = count / length` and `idf = ln(N / (1 + df))`.
pub use vectorizer::tfidf::{DefaultTFIDFEngine, TFIDFEngine};

/// Term Frequency, Corpus and Vocabulary
/// - `TermFrequency`: term counts of one document
/// - `Corpus`: per-term occurrences and document frequency over a run
/// - `Vocabulary`: the ranked, bounded term set used as dimensions
pub use vectorizer::{corpus::Corpus, term::TermFrequency, vocabulary::Vocabulary};

/// Clustering and evaluation
/// - `Kmeans`: seeded Lloyd's k-means
/// - `silhouette_score`: mean silhouette coefficient in `[-1, 1]`
pub use cluster::{silhouette_score, Kmeans, KmeansFit};

/// Document store boundary
/// `DocumentStore` is implemented by whatever persists documents;
/// `recluster` runs the pipeline against it and writes labels back,
/// `UNCLUSTERED` marking documents left out of the run.
pub use store::{cluster_statistics, recluster, ClusterLabel, DocumentStore, MemoryStore, UNCLUSTERED};
