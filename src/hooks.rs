//! Extension points of the extraction pipeline.
//!
//! A [`RecordTransformer`] rewrites or vetoes a page before it is written; a
//! [`RecordWriter`] persists it. Closures with the matching signature
//! implement both traits, so simple hooks need no wrapper type.

use crate::config::OUTPUT_EXTENSION;
use crate::error::{ExtractError, Result};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

pub trait RecordTransformer: Send + Sync {
    /// Returns the content to write for `page`, or `None` to skip it.
    /// An empty string is treated as `None`.
    fn transform(&self, page: String, title: &str) -> Option<String>;
}

/// Writes pages unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassThrough;

impl RecordTransformer for PassThrough {
    fn transform(&self, page: String, _title: &str) -> Option<String> {
        Some(page)
    }
}

impl<F> RecordTransformer for F
where
    F: Fn(String, &str) -> Option<String> + Send + Sync,
{
    fn transform(&self, page: String, title: &str) -> Option<String> {
        self(page, title)
    }
}

pub trait RecordWriter: Send + Sync {
    /// Persists one page. `safe_name` is the sanitized title without extension.
    fn write(&self, content: &str, title: &str, dest_dir: &Path, safe_name: &str) -> Result<()>;
}

/// Writes each page to `{dest_dir}/{safe_name}.xml`, overwriting any
/// existing file of that name.
///
/// Content goes to a temporary file in `dest_dir` that is renamed into place,
/// so concurrent writes to one name leave exactly one complete page.
#[derive(Debug, Clone, Copy, Default)]
pub struct XmlFileWriter;

impl RecordWriter for XmlFileWriter {
    fn write(&self, content: &str, _title: &str, dest_dir: &Path, safe_name: &str) -> Result<()> {
        let path = dest_dir.join(format!("{}.{}", safe_name, OUTPUT_EXTENSION));
        let mut tmp =
            NamedTempFile::new_in(dest_dir).map_err(|e| ExtractError::io(dest_dir, e))?;
        tmp.write_all(content.as_bytes())
            .map_err(|e| ExtractError::io(tmp.path(), e))?;
        tmp.persist(&path)
            .map_err(|e| ExtractError::io(&path, e.error))?;
        Ok(())
    }
}

impl<F> RecordWriter for F
where
    F: Fn(&str, &str, &Path, &str) -> Result<()> + Send + Sync,
{
    fn write(&self, content: &str, title: &str, dest_dir: &Path, safe_name: &str) -> Result<()> {
        self(content, title, dest_dir, safe_name)
    }
}
