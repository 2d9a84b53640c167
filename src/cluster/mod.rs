//! Centroid clustering of TF-IDF rows and its internal evaluation.
//!
//! - [`Kmeans`]: Lloyd iterations with seeded maximin initialization
//! - [`silhouette_score`]: cohesion/separation of a labelling, in `[-1, 1]`
//!
//! Both use [`crate::utils::math::distance`] (Euclidean).
//!
//! ```rust
//! use tf_idf_cluster::cluster::{silhouette_score, Kmeans};
//!
//! let data = vec![
//!     vec![0.0, 0.0],
//!     vec![0.1, 0.1],
//!     vec![10.0, 10.0],
//!     vec![10.1, 10.1],
//! ];
//! let fit = Kmeans::new(2).with_seed(42).fit(&data).unwrap();
//! assert_eq!(fit.labels[0], fit.labels[1]);
//! assert_ne!(fit.labels[0], fit.labels[2]);
//!
//! let score = silhouette_score(&data, &fit.labels, 2).unwrap();
//! assert!(score > 0.9);
//! ```

mod kmeans;
mod silhouette;

pub use kmeans::{Kmeans, KmeansFit, DEFAULT_MAX_ITER, DEFAULT_SEED};
pub use silhouette::{silhouette_samples, silhouette_score};
