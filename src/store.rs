//! Boundary to whatever persists documents and their cluster labels.
use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;

use indexmap::IndexMap;
use tracing::{debug, warn};

use crate::{
    document::Document,
    error::{Error, Result},
    pipeline::{ClusterReport, ClusteringPipeline},
};

/// Persisted cluster label. `[0, k)` or [`UNCLUSTERED`].
pub type ClusterLabel = i32;

/// Sentinel for a document that is not assigned to any cluster.
pub const UNCLUSTERED: ClusterLabel = -1;

/// Source of documents and sink of labels.
///
/// Runs against the same store must be serialized by the caller; the
/// pipeline holds no lock.
pub trait DocumentStore {
    type Id: Clone + Eq + Hash + Send + Sync;

    /// At most `limit` documents, in the store's natural order.
    fn load_documents(&self, limit: usize) -> Vec<Document<Self::Id>>;

    /// Overwrite the label of a document.
    fn save_label(&mut self, id: &Self::Id, label: ClusterLabel);
}

/// Recompute the clustering of `store` from scratch.
///
/// Every loaded document gets its new label, or [`UNCLUSTERED`] when it was
/// not part of the run (blank text). Labels from earlier runs are never kept.
///
/// Returns `Ok(None)` for a no-op run (nothing eligible, empty vocabulary);
/// all loaded documents are then marked unclustered. Any other failure
/// writes nothing.
pub fn recluster<S>(store: &mut S, pipeline: &ClusteringPipeline) -> Result<Option<ClusterReport<S::Id>>>
where
    S: DocumentStore,
{
    let documents = store.load_documents(pipeline.config().max_documents);
    match pipeline.run(&documents) {
        Ok(report) => {
            let mut labels: HashMap<&S::Id, ClusterLabel> = HashMap::with_capacity(report.assignments.len());
            for (id, label) in &report.assignments {
                let label = ClusterLabel::try_from(*label).map_err(|_| Error::InvalidParameter {
                    name: "num_clusters",
                    message: format!("label {label} does not fit a stored cluster label"),
                })?;
                labels.insert(id, label);
            }
            for doc in &documents {
                store.save_label(&doc.id, labels.get(&doc.id).copied().unwrap_or(UNCLUSTERED));
            }
            debug!(
                loaded = documents.len(),
                clustered = labels.len(),
                "labels saved"
            );
            Ok(Some(report))
        }
        Err(err) if err.is_noop() => {
            warn!(%err, loaded = documents.len(), "nothing to cluster");
            for doc in &documents {
                store.save_label(&doc.id, UNCLUSTERED);
            }
            Ok(None)
        }
        Err(err) => Err(err),
    }
}

/// Number of documents per label, ordered by label.
/// Unclustered documents are counted under [`UNCLUSTERED`].
pub fn cluster_statistics<I>(labels: I) -> BTreeMap<ClusterLabel, usize>
where
    I: IntoIterator<Item = ClusterLabel>,
{
    let mut stats = BTreeMap::new();
    for label in labels {
        *stats.entry(label).or_insert(0) += 1;
    }
    stats
}

#[derive(Debug, Clone)]
struct StoredDocument {
    text: Option<String>,
    title: Option<String>,
    category: Option<String>,
    label: ClusterLabel,
}

/// In-memory [`DocumentStore`], insertion ordered.
#[derive(Debug, Clone)]
pub struct MemoryStore<K>
where
    K: Eq + Hash,
{
    docs: IndexMap<K, StoredDocument>,
}

impl<K> Default for MemoryStore<K>
where
    K: Eq + Hash,
{
    fn default() -> Self {
        Self {
            docs: IndexMap::new(),
        }
    }
}

impl<K> MemoryStore<K>
where
    K: Clone + Eq + Hash,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a document. Its label starts as [`UNCLUSTERED`].
    pub fn insert(&mut self, id: K, text: Option<String>) {
        self.insert_document(Document {
            id,
            text,
            title: None,
            category: None,
        });
    }

    /// Like [`MemoryStore::insert`], keeping title and category.
    pub fn insert_document(&mut self, doc: Document<K>) {
        self.docs.insert(
            doc.id,
            StoredDocument {
                text: doc.text,
                title: doc.title,
                category: doc.category,
                label: UNCLUSTERED,
            },
        );
    }

    pub fn len(&self) -> usize {
        self.docs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }

    pub fn label_of(&self, id: &K) -> Option<ClusterLabel> {
        self.docs.get(id).map(|doc| doc.label)
    }

    pub fn title_of(&self, id: &K) -> Option<&str> {
        self.docs.get(id).and_then(|doc| doc.title.as_deref())
    }

    pub fn category_of(&self, id: &K) -> Option<&str> {
        self.docs.get(id).and_then(|doc| doc.category.as_deref())
    }

    pub fn cluster_statistics(&self) -> BTreeMap<ClusterLabel, usize> {
        cluster_statistics(self.docs.values().map(|doc| doc.label))
    }

    /// Ids carrying `label`, in store order.
    pub fn documents_in_cluster(&self, label: ClusterLabel) -> Vec<&K> {
        self.docs
            .iter()
            .filter(|(_, doc)| doc.label == label)
            .map(|(id, _)| id)
            .collect()
    }

    /// Up to `top_n` other documents from the cluster of `id`.
    ///
    /// Empty when `id` is unclustered, `None` when `id` is unknown.
    pub fn similar_documents(&self, id: &K, top_n: usize) -> Option<Vec<&K>> {
        let label = self.label_of(id)?;
        if label == UNCLUSTERED {
            return Some(Vec::new());
        }
        Some(
            self.docs
                .iter()
                .filter(|(other, doc)| doc.label == label && *other != id)
                .map(|(other, _)| other)
                .take(top_n)
                .collect(),
        )
    }
}

impl<K> DocumentStore for MemoryStore<K>
where
    K: Clone + Eq + Hash + Send + Sync,
{
    type Id = K;

    fn load_documents(&self, limit: usize) -> Vec<Document<K>> {
        self.docs
            .iter()
            .take(limit)
            .map(|(id, doc)| Document {
                id: id.clone(),
                text: doc.text.clone(),
                title: doc.title.clone(),
                category: doc.category.clone(),
            })
            .collect()
    }

    fn save_label(&mut self, id: &K, label: ClusterLabel) {
        if let Some(doc) = self.docs.get_mut(id) {
            doc.label = label;
        }
    }
}

impl<K> FromIterator<Document<K>> for MemoryStore<K>
where
    K: Clone + Eq + Hash,
{
    fn from_iter<T: IntoIterator<Item = Document<K>>>(iter: T) -> Self {
        let mut store = Self::new();
        for doc in iter {
            store.insert_document(doc);
        }
        store
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statistics_are_ordered_and_count_unclustered() {
        let stats = cluster_statistics([2, UNCLUSTERED, 0, 2, 0, 2]);
        let pairs: Vec<(ClusterLabel, usize)> = stats.into_iter().collect();
        assert_eq!(pairs, vec![(-1, 1), (0, 2), (2, 3)]);
    }

    #[test]
    fn new_documents_start_unclustered() {
        let mut store = MemoryStore::new();
        store.insert("a", Some("text".to_string()));
        assert_eq!(store.label_of(&"a"), Some(UNCLUSTERED));
        assert_eq!(store.label_of(&"b"), None);
    }

    #[test]
    fn similar_documents_share_the_cluster() {
        let mut store = MemoryStore::new();
        for id in ["a", "b", "c", "d"] {
            store.insert(id, Some(id.to_string()));
        }
        store.save_label(&"a", 0);
        store.save_label(&"b", 1);
        store.save_label(&"c", 0);
        assert_eq!(store.similar_documents(&"a", 10), Some(vec![&"c"]));
        assert_eq!(store.similar_documents(&"b", 10), Some(Vec::new()));
        assert_eq!(store.similar_documents(&"d", 10), Some(Vec::new()));
        assert_eq!(store.similar_documents(&"zz", 10), None);
        assert_eq!(store.documents_in_cluster(0), vec![&"a", &"c"]);
    }

    #[test]
    fn similar_documents_respects_top_n() {
        let mut store = MemoryStore::new();
        for id in 0..5u32 {
            store.insert(id, None);
            store.save_label(&id, 3);
        }
        assert_eq!(store.similar_documents(&0, 2), Some(vec![&1, &2]));
    }

    #[test]
    fn load_documents_honours_limit_and_order() {
        let store: MemoryStore<u32> = (0..4u32).map(|i| Document::new(i, format!("doc {i}"))).collect();
        let docs = store.load_documents(2);
        assert_eq!(docs.len(), 2);
        assert_eq!(docs[0].id, 0);
        assert_eq!(docs[1].id, 1);
    }

    #[test]
    fn metadata_survives_the_round_trip() {
        let store: MemoryStore<u32> = [Document::new(7, "orbit rocket")
            .with_title("Shuttle launch")
            .with_category("sci.space")]
        .into_iter()
        .collect();
        assert_eq!(store.title_of(&7), Some("Shuttle launch"));
        assert_eq!(store.category_of(&7), Some("sci.space"));
        assert_eq!(store.title_of(&8), None);
        let docs = store.load_documents(1);
        assert_eq!(docs[0].title.as_deref(), Some("Shuttle launch"));
    }
}
