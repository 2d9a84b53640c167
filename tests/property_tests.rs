use proptest::prelude::*;
use tf_idf_cluster::{
    silhouette_score, vectorizer::tokenizer::tokenize, ClusteringConfig, ClusteringPipeline, Document, Kmeans,
    TFIDFVectorizer, TermFrequency,
};

proptest! {
    #[test]
    fn prop_kmeans_all_assigned(
        data in prop::collection::vec(prop::collection::vec(-10.0f64..10.0, 2), 1..20),
        k in 1usize..5
    ) {
        // Skip if k > n
        if k <= data.len() {
            let labels = Kmeans::new(k).with_seed(42).fit_predict(&data).unwrap();
            prop_assert_eq!(labels.len(), data.len());
            for &l in &labels {
                prop_assert!(l < k);
            }
        }
    }

    #[test]
    fn prop_silhouette_in_range(
        data in prop::collection::vec(prop::collection::vec(-10.0f64..10.0, 3), 1..30),
        seed in any::<u64>(),
        k in 1usize..6
    ) {
        if k <= data.len() {
            let labels = Kmeans::new(k).with_seed(seed).fit_predict(&data).unwrap();
            let score = silhouette_score(&data, &labels, k).unwrap();
            prop_assert!((-1.0..=1.0).contains(&score), "score = {}", score);
        }
    }

    #[test]
    fn prop_tokens_are_normalized(text in ".{0,200}") {
        for token in tokenize(&text) {
            prop_assert!(token.len() > 1);
            prop_assert!(token.chars().all(|c| c.is_ascii_lowercase()));
        }
    }

    #[test]
    fn prop_vocabulary_bounds(
        texts in prop::collection::vec("[a-d]{2,3}( [a-d]{2,3}){0,8}", 1..12),
        min_term_freq in 1u64..4,
        max_vocab_size in 1usize..8
    ) {
        let docs: Vec<TermFrequency> = texts.iter().map(|t| TermFrequency::from_text(t)).collect();
        let (vectorizer, matrix) = TFIDFVectorizer::<f64>::fit_transform(&docs, min_term_freq, max_vocab_size);
        let vocab = vectorizer.vocabulary();
        prop_assert!(vocab.len() <= max_vocab_size);
        let n = docs.len() as f64;
        for (j, (_, stat)) in vocab.iter().enumerate() {
            prop_assert!(stat.occurrences >= min_term_freq);
            prop_assert!(stat.doc_freq <= docs.len() as u64);
            prop_assert_eq!(vectorizer.idf()[j], (n / (1.0 + stat.doc_freq as f64)).ln());
        }
        for (doc, row) in docs.iter().zip(matrix.rows()) {
            prop_assert_eq!(row.len(), vocab.len());
            if doc.is_empty() {
                prop_assert!(row.iter().all(|&w| w == 0.0));
            }
        }
    }

    #[test]
    fn prop_pipeline_deterministic(
        texts in prop::collection::vec("[a-f]{2,4}( [a-f]{2,4}){0,6}", 2..10),
        seed in any::<u64>()
    ) {
        let documents: Vec<Document<usize>> = texts
            .iter()
            .enumerate()
            .map(|(i, t)| Document::new(i, t.as_str()))
            .collect();
        let config = ClusteringConfig::default()
            .with_num_clusters(2)
            .with_min_term_freq(1)
            .with_seed(seed);
        let pipeline = ClusteringPipeline::new(config).unwrap();
        let a = pipeline.run(&documents);
        let b = pipeline.run(&documents);
        match (a, b) {
            (Ok(a), Ok(b)) => {
                prop_assert_eq!(a.assignments.len(), documents.len());
                prop_assert!(a.assignments.iter().all(|&(_, l)| l < 2));
                prop_assert_eq!(a, b);
            }
            (Err(a), Err(b)) => prop_assert_eq!(a.to_string(), b.to_string()),
            _ => prop_assert!(false, "runs disagree"),
        }
    }
}
