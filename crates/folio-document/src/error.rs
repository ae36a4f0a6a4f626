//! Folio Query Errors
//!
//! Failures raised by section and item lookups. Every variant is terminal:
//! the document never changes, so a retry would fail the same way.
//!
//! @version 0.1.0
//! @author AutomataNexus Development Team

use thiserror::Error;

/// Errors that can occur while answering a document query.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum QueryError {
    #[error("section not found: {0}")]
    SectionNotFound(String),

    #[error("item with id {id} not found in section {section}")]
    ItemNotFound { section: String, id: String },

    #[error("section {0} is not filterable by id")]
    NotFilterable(String),

    #[error("section {0} is not a list")]
    NotAList(String),
}

impl QueryError {
    /// The addressed section or item does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            QueryError::SectionNotFound(_) | QueryError::ItemNotFound { .. }
        )
    }

    /// The section exists but its shape does not support the request.
    pub fn is_bad_request(&self) -> bool {
        matches!(self, QueryError::NotFilterable(_) | QueryError::NotAList(_))
    }
}
