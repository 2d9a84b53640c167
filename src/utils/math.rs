use num::Float;

/// 二乗ユークリッド距離
///
/// # Arguments
/// * `a` - ベクトル
/// * `b` - 同じ長さのベクトル
#[inline]
pub fn squared_euclidean<N>(a: &[N], b: &[N]) -> N
where
    N: Float,
{
    debug_assert_eq!(
        a.len(),
        b.len(),
        "Vectors must be of the same length to compute distance."
    );
    a.iter().zip(b.iter()).fold(N::zero(), |acc, (&x, &y)| {
        let d = x - y;
        acc + d * d
    })
}

/// Euclidean distance.
///
/// This is the only distance used by the crate: k-means assignment and the
/// silhouette evaluator both call it, so they can never disagree.
#[inline]
pub fn distance<N>(a: &[N], b: &[N]) -> N
where
    N: Float,
{
    squared_euclidean(a, b).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_of_3_4_5_triangle() {
        let a = [0.0f64, 0.0];
        let b = [3.0f64, 4.0];
        assert_eq!(squared_euclidean(&a, &b), 25.0);
        assert_eq!(distance(&a, &b), 5.0);
        assert_eq!(distance(&b, &a), 5.0);
    }

    #[test]
    fn distance_to_self_is_zero() {
        let a = [0.25f32, -1.5, 8.0];
        assert_eq!(distance(&a, &a), 0.0);
    }

    #[test]
    fn empty_vectors_are_zero_apart() {
        let a: [f64; 0] = [];
        assert_eq!(distance(&a, &a), 0.0);
    }
}
