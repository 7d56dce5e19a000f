//! Tunebook ABC
//!
//! Segmentation and header extraction for ABC notation files.
//!
//! An ABC file holds one or more tunes, each opened by an `X:` line. This
//! crate splits a raw text stream into [`Tune`](tunebook_core::Tune) records
//! in a single forward pass, extracting the header fields of interest
//! (`T:` title, `R:` rhythm, `M:` meter, `L:` unit note length, `K:` key)
//! and preserving each tune's text verbatim.
//!
//! Parsing is total: every line is either a start marker, a recognized
//! header line, opaque tune body, or pre-amble before the first marker.
//! There are no error paths.
//!
//! # Example
//!
//! ```rust
//! let text = "X:1\nT:The Blarney Pilgrim\nR:jig\nK:Dmaj\n|:d2A ABd:|\n";
//! let tunes = tunebook_abc::parse_text(text, 7);
//!
//! assert_eq!(tunes.len(), 1);
//! assert_eq!(tunes[0].book_number, 7);
//! assert_eq!(tunes[0].title.as_deref(), Some("The Blarney Pilgrim"));
//! ```

#![forbid(unsafe_code)]

mod parser;

pub use parser::{parse_lines, parse_text, ABC_EXTENSION};
