//! Folio Common - Shared Types and Utilities
//!
//! Foundational error handling shared by the document engine and the API
//! server. Keeps startup failures (unreadable source, bad syntax, invalid
//! configuration) in one taxonomy so the binary can report them uniformly.
//!
//! @version 0.1.0
//! @author AutomataNexus Development Team

pub mod error;

pub use error::{FolioError, Result};
