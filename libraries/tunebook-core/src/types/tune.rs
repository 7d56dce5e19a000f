/// Tune domain type
use serde::{Deserialize, Serialize};

/// One parsed tune from an ABC notation file.
///
/// A record corresponds to exactly one `X:` start-marker line in the source
/// text. `raw_text` preserves the tune verbatim from its start marker through
/// its last line; the header fields are extracted copies of the tagged lines
/// inside that span.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tune {
    /// Identifier of the source book, supplied by the caller (never parsed
    /// from the file content)
    pub book_number: i64,

    /// Free-form token following the `X:` start marker; not guaranteed
    /// unique or numeric
    pub tune_index: String,

    /// Title (`T:` line)
    pub title: Option<String>,

    /// Rhythm/category (`R:` line)
    pub tune_type: Option<String>,

    /// Time signature (`M:` line)
    pub meter: Option<String>,

    /// Default note length (`L:` line)
    pub unit_length: Option<String>,

    /// Key (`K:` line)
    pub key_signature: Option<String>,

    /// Verbatim text of the tune, newline-joined, from the start-marker line
    /// up to (but not including) the next start marker or end of input
    pub raw_text: String,
}

impl Tune {
    /// Create a new tune with no header fields set
    pub fn new(book_number: i64, tune_index: impl Into<String>) -> Self {
        Self {
            book_number,
            tune_index: tune_index.into(),
            title: None,
            tune_type: None,
            meter: None,
            unit_length: None,
            key_signature: None,
            raw_text: String::new(),
        }
    }

    /// Display name for listings: the title when present, otherwise the
    /// tune index
    pub fn display_name(&self) -> &str {
        self.title.as_deref().unwrap_or(&self.tune_index)
    }
}
