use num::Float;

use crate::vectorizer::{term::TermFrequency, vocabulary::Vocabulary};

/// TF-IDF weighting engine
///
/// Plug a different weighting scheme into `TFIDFVectorizer<N, E>` by
/// implementing this trait.
pub trait TFIDFEngine<N>
where
    N: Float,
{
    /// IDFベクトルを生成するメソッド
    /// # Arguments
    /// * `vocab` - 語彙 (次元順)
    /// * `doc_num` - 文書数
    /// # Returns
    /// * `Vec<N>` - IDFベクトル
    fn idf_vec(vocab: &Vocabulary, doc_num: u64) -> Vec<N>;

    /// TFベクトルを生成するメソッド
    /// 語彙に無いtermは無視される
    fn tf_vec(freq: &TermFrequency, vocab: &Vocabulary) -> Vec<N>;
}

/// Default engine
///
/// - `tf = count / total terms of the document`, 0 for a document with no terms
/// - `idf = ln(N / (1 + df))`, not floored: near-universal terms get a zero or
///   negative weight
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultTFIDFEngine;

impl DefaultTFIDFEngine {
    pub fn new() -> Self {
        DefaultTFIDFEngine
    }

    #[inline]
    fn cast<N: Float>(value: f64) -> N {
        num::cast(value).unwrap_or_else(N::nan)
    }
}

impl<N> TFIDFEngine<N> for DefaultTFIDFEngine
where
    N: Float,
{
    fn idf_vec(vocab: &Vocabulary, doc_num: u64) -> Vec<N> {
        let doc_num = doc_num as f64;
        vocab
            .iter()
            .map(|(_, stat)| Self::cast((doc_num / (1.0 + stat.doc_freq as f64)).ln()))
            .collect()
    }

    fn tf_vec(freq: &TermFrequency, vocab: &Vocabulary) -> Vec<N> {
        let mut tf_vec = vec![N::zero(); vocab.len()];
        let total_count = freq.term_sum();
        if total_count == 0 {
            // 空ドキュメントは0ベクトル
            return tf_vec;
        }
        let total_count = total_count as f64;
        for (term, count) in freq.iter() {
            if let Some(index) = vocab.index_of(term) {
                tf_vec[index] = Self::cast(count as f64 / total_count);
            }
        }
        tf_vec
    }
}
