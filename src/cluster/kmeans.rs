use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::utils::math::{distance, squared_euclidean};

/// Iteration cap used by [`Kmeans::new`].
pub const DEFAULT_MAX_ITER: usize = 100;

/// Seed used by [`Kmeans::new`].
pub const DEFAULT_SEED: u64 = 42;

/// Lloyd's k-means over Euclidean distance.
///
/// Initialization is seeded maximin: the first centroid is a uniformly drawn
/// point, every further centroid is the point farthest from its nearest
/// already-chosen centroid (lowest index on ties). A centroid that loses all
/// its members keeps its previous position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Kmeans {
    k: usize,
    max_iter: usize,
    seed: u64,
}

/// Result of a k-means fit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KmeansFit {
    /// One label in `[0, k)` per input row.
    pub labels: Vec<usize>,
    /// Final centroids, `k` rows.
    pub centroids: Vec<Vec<f64>>,
    /// Number of assignment passes run.
    pub iterations: usize,
    /// `false` when the iteration cap stopped the loop.
    pub converged: bool,
    /// Sum of squared distances from each row to its centroid.
    pub inertia: f64,
}

impl Kmeans {
    pub fn new(k: usize) -> Self {
        Self {
            k,
            max_iter: DEFAULT_MAX_ITER,
            seed: DEFAULT_SEED,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = max_iter;
        self
    }

    pub fn n_clusters(&self) -> usize {
        self.k
    }

    pub fn fit_predict(&self, data: &[Vec<f64>]) -> Result<Vec<usize>> {
        Ok(self.fit(data)?.labels)
    }

    pub fn fit(&self, data: &[Vec<f64>]) -> Result<KmeansFit> {
        let n = data.len();
        if n == 0 {
            return Err(Error::EmptyInput);
        }
        if self.k == 0 || self.k > n {
            return Err(Error::InvalidClusterCount {
                requested: self.k,
                n_items: n,
            });
        }
        if self.max_iter == 0 {
            return Err(Error::InvalidParameter {
                name: "max_iter",
                message: "must be at least 1".to_string(),
            });
        }
        let dim = data[0].len();
        if let Some(row) = data.iter().find(|row| row.len() != dim) {
            return Err(Error::DimensionMismatch {
                expected: dim,
                found: row.len(),
            });
        }

        let mut centroids = self.init_centroids(data);
        // usize::MAX: 初回は必ず「変化あり」になる
        let mut labels = vec![usize::MAX; n];
        let mut iterations = 0;
        let mut converged = false;

        while iterations < self.max_iter {
            iterations += 1;
            let next: Vec<usize> = data
                .par_iter()
                .map(|row| nearest_centroid(row, &centroids))
                .collect();
            let changed = next.iter().zip(labels.iter()).filter(|(a, b)| a != b).count();
            labels = next;
            trace!(iteration = iterations, changed, "k-means assignment");
            if changed == 0 {
                converged = true;
                break;
            }
            update_centroids(data, &labels, &mut centroids);
        }

        let inertia: f64 = data
            .iter()
            .zip(labels.iter())
            .map(|(row, &label)| squared_euclidean(row, &centroids[label]))
            .sum();
        debug!(k = self.k, n, iterations, converged, inertia, "k-means finished");

        Ok(KmeansFit {
            labels,
            centroids,
            iterations,
            converged,
            inertia,
        })
    }

    fn init_centroids(&self, data: &[Vec<f64>]) -> Vec<Vec<f64>> {
        let mut rng = ChaCha8Rng::seed_from_u64(self.seed);
        let first = rng.gen_range(0..data.len());
        let mut chosen = Vec::with_capacity(self.k);
        chosen.push(first);

        // 各点から最も近い選択済みcentroidまでの距離
        let mut nearest: Vec<f64> = data.iter().map(|row| distance(row, &data[first])).collect();
        while chosen.len() < self.k {
            let mut next = 0;
            let mut best = f64::NEG_INFINITY;
            for (i, &d) in nearest.iter().enumerate() {
                if d > best {
                    best = d;
                    next = i;
                }
            }
            chosen.push(next);
            for (slot, row) in nearest.iter_mut().zip(data.iter()) {
                let d = distance(row, &data[next]);
                if d < *slot {
                    *slot = d;
                }
            }
        }
        trace!(?chosen, "k-means seeds");
        chosen.into_iter().map(|i| data[i].clone()).collect()
    }
}

/// Index of the closest centroid, lowest index on ties.
fn nearest_centroid(row: &[f64], centroids: &[Vec<f64>]) -> usize {
    let mut best = 0;
    let mut best_dist = f64::INFINITY;
    for (c, centroid) in centroids.iter().enumerate() {
        let d = distance(row, centroid);
        if d < best_dist {
            best_dist = d;
            best = c;
        }
    }
    best
}

fn update_centroids(data: &[Vec<f64>], labels: &[usize], centroids: &mut [Vec<f64>]) {
    let dim = centroids.first().map_or(0, Vec::len);
    let mut sums = vec![vec![0.0; dim]; centroids.len()];
    let mut counts = vec![0usize; centroids.len()];
    for (row, &label) in data.iter().zip(labels.iter()) {
        counts[label] += 1;
        for (s, &x) in sums[label].iter_mut().zip(row.iter()) {
            *s += x;
        }
    }
    for ((centroid, sum), count) in centroids.iter_mut().zip(sums).zip(counts) {
        if count == 0 {
            continue;
        }
        for (c, s) in centroid.iter_mut().zip(sum) {
            *c = s / count as f64;
        }
    }
}
