//! Folio Document - Read-Only Document Query Engine
//!
//! Holds a JSON document loaded once at startup and answers lookups over it:
//! listing top-level sections, fetching a section (optionally filtered by
//! id), and fetching one item of a list section by id.
//!
//! Key Features:
//! - Order-preserving JSON value model
//! - Id normalization so `"3"` in a URL matches `3` in the document
//! - Fail-fast document loading
//!
//! @version 0.1.0
//! @author AutomataNexus Development Team

pub mod engine;
pub mod error;
pub mod id;
pub mod loader;
pub mod types;

pub use engine::DocumentEngine;
pub use error::QueryError;
pub use id::{ids_equal, normalize_id, normalize_id_str};
pub use loader::{load_document, parse_document};
pub use types::{Map, Value};
