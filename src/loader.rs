use std::fs;
use std::path::Path;

use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::{document::Document, error::Result};

/// Load every regular file under `root` as a document.
///
/// Files are visited in file-name order and read as ISO-8859-1, so any byte
/// sequence decodes. The id is the path relative to `root`. Loading stops
/// after `max_documents` files; files that cannot be read are skipped.
///
/// The title is the first `Subject:` header line, or the file name when
/// there is none. The category is the top-level directory below `root`;
/// files directly in `root` have no category.
///
/// # Errors
/// Fails when `root` itself (or a directory below it) cannot be walked.
pub fn load_corpus_dir(root: &Path, max_documents: usize) -> Result<Vec<Document<String>>> {
    let mut documents = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        if documents.len() >= max_documents {
            break;
        }
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        let bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(err) => {
                warn!(path = %path.display(), %err, "skipping unreadable file");
                continue;
            }
        };
        let relative = path.strip_prefix(root).unwrap_or(path);
        let text = decode_latin1(&bytes);
        let title = match extract_subject(&text) {
            Some(subject) => subject.to_string(),
            None => entry.file_name().to_string_lossy().into_owned(),
        };
        let mut doc = Document::new(relative.to_string_lossy().into_owned(), text).with_title(title);
        if let Some(category) = top_level_dir(relative) {
            doc = doc.with_category(category);
        }
        documents.push(doc);
    }
    debug!(root = %root.display(), loaded = documents.len(), "corpus loaded");
    Ok(documents)
}

/// ISO-8859-1 maps every byte to the code point of the same value.
fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}

/// Value of the first `Subject:` line, if it is not blank.
fn extract_subject(text: &str) -> Option<&str> {
    text.lines()
        .find_map(|line| line.strip_prefix("Subject:"))
        .map(str::trim)
        .filter(|subject| !subject.is_empty())
}

/// First component of `relative` when the file sits in a subdirectory.
fn top_level_dir(relative: &Path) -> Option<String> {
    let mut components = relative.components();
    let first = components.next()?;
    // ファイル自体はカテゴリではない
    components.next()?;
    Some(first.as_os_str().to_string_lossy().into_owned())
}
