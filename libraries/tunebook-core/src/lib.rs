//! Tunebook Core
//!
//! Domain types and error handling shared across the Tunebook crates.
//!
//! The core crate defines:
//! - **Domain Types**: `Tune`, `BookCount`
//! - **Error Handling**: Unified `TunebookError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use tunebook_core::Tune;
//!
//! let tune = Tune::new(7, "1");
//! assert_eq!(tune.book_number, 7);
//! assert!(tune.title.is_none());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod types;

// Re-export commonly used types
pub use error::{Result, TunebookError};
pub use types::{BookCount, Tune};
