/// Book aggregation types
use serde::{Deserialize, Serialize};

/// Number of stored tunes for one source book
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookCount {
    /// Book identifier (numeric directory name of the source)
    pub book_number: i64,

    /// How many tunes that book contributed
    pub tunes: i64,
}
