//! Document model representing one poem of the corpus.

use serde::{Deserialize, Serialize};

/// A poem with a title and an ordered sequence of lines.
///
/// Both `title` and `lines` are required when deserializing; a record
/// missing either is rejected instead of being skipped.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Document {
    /// Poem title (e.g. "Sonnet I")
    pub title: String,

    /// Poem author, when the supplier provides one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,

    /// Lines in order; line numbers are the 1-based index into this vector
    pub lines: Vec<String>,
}

impl Document {
    /// Create a new document with a title and lines.
    pub fn new<T, I, L>(title: T, lines: I) -> Self
    where
        T: Into<String>,
        I: IntoIterator<Item = L>,
        L: Into<String>,
    {
        Self {
            title: title.into(),
            author: None,
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// Iterate lines paired with their 1-based line number.
    pub fn numbered_lines(&self) -> impl Iterator<Item = (usize, &str)> {
        self.lines
            .iter()
            .enumerate()
            .map(|(idx, line)| (idx + 1, line.as_str()))
    }
}
