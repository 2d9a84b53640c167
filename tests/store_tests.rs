use tf_idf_cluster::{
    recluster, ClusteringConfig, ClusteringPipeline, Document, DocumentStore, Error, MemoryStore, UNCLUSTERED,
};

fn pipeline(k: usize) -> ClusteringPipeline {
    let config = ClusteringConfig::default()
        .with_num_clusters(k)
        .with_min_term_freq(1)
        .with_seed(42);
    ClusteringPipeline::new(config).unwrap()
}

fn library() -> MemoryStore<&'static str> {
    let mut store = MemoryStore::new();
    store.insert("a1", Some("cat dog cat".to_string()));
    store.insert("a2", Some("dog cat bird".to_string()));
    store.insert("a3", Some("bird dog cat".to_string()));
    store.insert("empty", None);
    store.insert("v1", Some("car engine car".to_string()));
    store.insert("v2", Some("engine car wheel".to_string()));
    store.insert("v3", Some("wheel engine car".to_string()));
    store
}

#[test]
fn recluster_writes_labels_and_sentinel() {
    let mut store = library();
    let report = recluster(&mut store, &pipeline(2)).unwrap().unwrap();
    assert_eq!(report.assignments.len(), 6);

    assert_eq!(store.label_of(&"empty"), Some(UNCLUSTERED));
    let animal = store.label_of(&"a1").unwrap();
    let vehicle = store.label_of(&"v1").unwrap();
    assert_ne!(animal, vehicle);
    assert!(animal >= 0 && vehicle >= 0);
    assert_eq!(store.label_of(&"a3"), Some(animal));
    assert_eq!(store.label_of(&"v3"), Some(vehicle));

    let stats = store.cluster_statistics();
    assert_eq!(stats.get(&UNCLUSTERED), Some(&1));
    assert_eq!(stats.get(&animal), Some(&3));
    assert_eq!(stats.get(&vehicle), Some(&3));

    let similar = store.similar_documents(&"a1", 10).unwrap();
    assert_eq!(similar, vec![&"a2", &"a3"]);
    assert_eq!(store.similar_documents(&"empty", 10), Some(Vec::new()));
}

#[test]
fn labels_are_overwritten_not_merged() {
    let mut store = library();
    recluster(&mut store, &pipeline(2)).unwrap();
    // a document that had a label loses it once its text is gone
    store.insert("a1", None);
    store.save_label(&"a1", 0);
    recluster(&mut store, &pipeline(2)).unwrap();
    assert_eq!(store.label_of(&"a1"), Some(UNCLUSTERED));
}

#[test]
fn noop_run_marks_everything_unclustered() {
    let mut store: MemoryStore<u32> = vec![Document::new(1, "a b c"), Document::new(2, "x y")]
        .into_iter()
        .collect();
    store.save_label(&1, 4);
    let report = recluster(&mut store, &pipeline(1)).unwrap();
    assert!(report.is_none());
    assert_eq!(store.label_of(&1), Some(UNCLUSTERED));
    assert_eq!(store.label_of(&2), Some(UNCLUSTERED));
}

#[test]
fn empty_store_is_a_noop() {
    let mut store: MemoryStore<u32> = MemoryStore::new();
    assert!(recluster(&mut store, &pipeline(1)).unwrap().is_none());
}

#[test]
fn invalid_cluster_count_writes_nothing() {
    let mut store = library();
    store.save_label(&"a1", 7);
    let err = recluster(&mut store, &pipeline(10)).unwrap_err();
    assert!(matches!(err, Error::InvalidClusterCount { requested: 10, n_items: 6 }));
    assert_eq!(store.label_of(&"a1"), Some(7));
    assert_eq!(store.label_of(&"v1"), Some(UNCLUSTERED));
}

#[test]
fn documents_past_the_cap_keep_their_label() {
    let mut store = library();
    store.save_label(&"v3", 9);
    let config = ClusteringConfig::default()
        .with_num_clusters(2)
        .with_min_term_freq(1)
        .with_max_documents(6)
        .with_seed(5);
    let report = recluster(&mut store, &ClusteringPipeline::new(config).unwrap())
        .unwrap()
        .unwrap();
    assert_eq!(report.assignments.len(), 5);
    assert_eq!(store.label_of(&"v3"), Some(9));
}
