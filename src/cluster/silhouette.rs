use rayon::prelude::*;

use crate::error::{Error, Result};
use crate::utils::math::distance;

/// Mean silhouette coefficient of a labelling.
///
/// For point `i`:
/// - `a(i)`: mean distance to the other members of its cluster, 0 for a singleton
/// - `b(i)`: smallest mean distance to the members of another non-empty
///   cluster, 0 when no other cluster has members
/// - `s(i) = (b - a) / max(a, b)`, 0 when both are 0
///
/// O(N²) distance evaluations; bound N before calling.
/// An empty input scores 0.
pub fn silhouette_score(data: &[Vec<f64>], labels: &[usize], n_clusters: usize) -> Result<f64> {
    let samples = silhouette_samples(data, labels, n_clusters)?;
    if samples.is_empty() {
        return Ok(0.0);
    }
    // 順序固定で合計: 実行ごとに同じ値になる
    let total: f64 = samples.iter().sum();
    Ok(total / samples.len() as f64)
}

/// Per-point silhouette values `s(i)`, in input order.
pub fn silhouette_samples(data: &[Vec<f64>], labels: &[usize], n_clusters: usize) -> Result<Vec<f64>> {
    if data.len() != labels.len() {
        return Err(Error::DimensionMismatch {
            expected: data.len(),
            found: labels.len(),
        });
    }
    if let Some(&label) = labels.iter().find(|&&label| label >= n_clusters) {
        return Err(Error::InvalidParameter {
            name: "labels",
            message: format!("label {label} is outside [0, {n_clusters})"),
        });
    }

    let mut sizes = vec![0usize; n_clusters];
    for &label in labels {
        sizes[label] += 1;
    }

    Ok((0..data.len())
        .into_par_iter()
        .map(|i| point_silhouette(i, data, labels, &sizes))
        .collect())
}

fn point_silhouette(i: usize, data: &[Vec<f64>], labels: &[usize], sizes: &[usize]) -> f64 {
    let mut sums = vec![0.0; sizes.len()];
    for (j, (row, &label)) in data.iter().zip(labels.iter()).enumerate() {
        if j != i {
            sums[label] += distance(&data[i], row);
        }
    }

    let own = labels[i];
    let a = if sizes[own] > 1 {
        sums[own] / (sizes[own] - 1) as f64
    } else {
        0.0
    };
    let b = sums
        .iter()
        .zip(sizes.iter())
        .enumerate()
        .filter(|&(c, (_, &size))| c != own && size > 0)
        .map(|(_, (&sum, &size))| sum / size as f64)
        .reduce(f64::min)
        .unwrap_or(0.0);

    let denom = a.max(b);
    if denom == 0.0 {
        0.0
    } else {
        (b - a) / denom
    }
}
