use std::collections::BTreeMap;
use std::path::Path;

use anyhow::Context;

use crate::foundation::error::{BinderyError, BinderyResult};

/// Characters stripped from titles when deriving output file names.
const INVALID_FILENAME_CHARS: &[char] = &['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// A poetry book as stored in `book.json`.
///
/// Poem bodies live in `content`: the site exports a single map as the first
/// array element, keyed by the poem number rendered as a string, with HTML
/// fragment values. Use [`Book::poem_html`] for lookups.
pub struct Book {
    /// Book title, also the document title and output-name stem.
    pub book_title: String,
    /// Dedication target printed on the copyright page.
    pub dedicatee: String,
    /// Human-readable first-edition date.
    pub release_date: String,
    /// Collection URL printed in the back matter.
    pub url: String,
    /// Poems in reading order.
    pub poems: Vec<Poem>,
    /// Poem bodies keyed by poem number (as a string), wrapped in an array.
    #[serde(default)]
    pub content: Vec<BTreeMap<String, String>>,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// One table-of-contents entry.
pub struct Poem {
    /// Poem number used as the content key.
    pub number: u32,
    /// Poem title.
    pub title: String,
}

impl Book {
    /// Read and validate a book from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> BinderyResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read book '{}'", path.display()))?;
        Self::from_json(&text)
    }

    /// Parse and validate a book from JSON text.
    pub fn from_json(text: &str) -> BinderyResult<Self> {
        let book: Self = serde_json::from_str(text)
            .map_err(|e| BinderyError::serde(format!("parse book: {e}")))?;
        book.validate()?;
        Ok(book)
    }

    /// Check that the book is renderable.
    pub fn validate(&self) -> BinderyResult<()> {
        if self.book_title.trim().is_empty() {
            return Err(BinderyError::validation("bookTitle must be non-empty"));
        }
        Ok(())
    }

    /// HTML body of the poem with `number`, or `""` when absent.
    pub fn poem_html(&self, number: u32) -> &str {
        self.content
            .first()
            .and_then(|m| m.get(&number.to_string()))
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Book title with filename-invalid characters removed.
    pub fn safe_title(&self) -> String {
        self.book_title
            .chars()
            .filter(|c| !INVALID_FILENAME_CHARS.contains(c))
            .collect()
    }

    /// Default output file name for the rendered document.
    pub fn output_file_name(&self) -> String {
        format!("{} – KDP ready.pdf", self.safe_title())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/book/model.rs"]
mod tests;
