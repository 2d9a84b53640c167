use serde::{Deserialize, Serialize};

/// A document handed to the pipeline.
///
/// `id` is opaque and only echoed back in the report. `text` may be absent,
/// like a stored row whose content column is null.
/// `title` and `category` are display metadata; clustering never reads them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document<K> {
    pub id: K,
    pub text: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

impl<K> Document<K> {
    pub fn new(id: K, text: impl Into<String>) -> Self {
        Self {
            id,
            text: Some(text.into()),
            title: None,
            category: None,
        }
    }

    pub fn without_text(id: K) -> Self {
        Self {
            id,
            text: None,
            title: None,
            category: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Eligible documents have text that is not blank.
    #[inline]
    pub fn is_eligible(&self) -> bool {
        self.text.as_deref().is_some_and(|text| !text.trim().is_empty())
    }

    /// Text, or `""` when absent.
    #[inline]
    pub fn text(&self) -> &str {
        self.text.as_deref().unwrap_or("")
    }
}
