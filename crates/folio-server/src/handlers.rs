//! Folio Request Handlers
//!
//! HTTP request handlers for the document API. Handlers borrow straight from
//! the shared engine and serialize the borrowed value; nothing is cloned.
//!
//! @version 0.1.0
//! @author AutomataNexus Development Team

use crate::state::AppState;
use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use folio_document::{QueryError, Value};
use serde::{Deserialize, Serialize};

/// Routes advertised by the index endpoint.
pub const ROUTES: [&str; 4] = ["/all", "/sections", "/:section", "/:section/:id"];

// =============================================================================
// Health Check
// =============================================================================

/// Liveness response.
#[derive(Debug, Serialize)]
pub struct OkResponse {
    pub ok: bool,
}

/// Health check endpoint.
pub async fn health_check() -> Json<OkResponse> {
    Json(OkResponse { ok: true })
}

/// Index response listing the available routes.
#[derive(Debug, Serialize)]
pub struct IndexResponse {
    pub ok: bool,
    pub routes: Vec<&'static str>,
}

/// Index endpoint.
pub async fn index() -> Json<IndexResponse> {
    Json(IndexResponse {
        ok: true,
        routes: ROUTES.to_vec(),
    })
}

// =============================================================================
// Error Handling
// =============================================================================

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

impl ErrorResponse {
    pub fn new(error: &str, code: &str) -> Self {
        Self {
            error: error.to_string(),
            code: code.to_string(),
        }
    }
}

/// Not found handler.
pub async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse::new("Not found", "NOT_FOUND")),
    )
}

/// Which lookup produced an error; the two report a missing item differently.
#[derive(Debug, Clone, Copy)]
enum Lookup {
    Filter,
    Path,
}

fn query_error_response(err: &QueryError, lookup: Lookup) -> Response {
    let status = if err.is_bad_request() {
        StatusCode::BAD_REQUEST
    } else {
        StatusCode::NOT_FOUND
    };

    let (message, code) = match (err, lookup) {
        (QueryError::SectionNotFound(_), _) => ("Section not found", "SECTION_NOT_FOUND"),
        (QueryError::ItemNotFound { .. }, Lookup::Filter) => {
            ("Item with id not found", "ITEM_NOT_FOUND")
        }
        (QueryError::ItemNotFound { .. }, Lookup::Path) => ("Item not found", "ITEM_NOT_FOUND"),
        (QueryError::NotFilterable(_), _) => ("Section is not filterable by id", "NOT_FILTERABLE"),
        (QueryError::NotAList(_), _) => ("Section is not a list", "NOT_A_LIST"),
    };

    (status, Json(ErrorResponse::new(message, code))).into_response()
}

// =============================================================================
// Document Endpoints
// =============================================================================

/// Return the whole document.
pub async fn get_all(State(state): State<AppState>) -> Response {
    Json(state.engine.document()).into_response()
}

/// List section names in declaration order.
pub async fn list_sections(State(state): State<AppState>) -> Response {
    Json(state.engine.list_sections()).into_response()
}

/// Optional `?id=` filter for section requests.
#[derive(Debug, Deserialize)]
pub struct IdFilter {
    pub id: Option<String>,
}

/// Get a section, or the item of it matching `?id=`.
///
/// A query string that does not decode into a single `id` is a bad request.
pub async fn get_section(
    State(state): State<AppState>,
    Path(section): Path<String>,
    filter: Result<Query<IdFilter>, QueryRejection>,
) -> Response {
    let Query(filter) = match filter {
        Ok(filter) => filter,
        Err(rejection) => {
            tracing::debug!("Rejected query for section '{}': {}", section, rejection);
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::new("Invalid query string", "BAD_REQUEST")),
            )
                .into_response();
        }
    };

    let id = filter.id.map(Value::from);
    match state.engine.fetch_section(&section, id.as_ref()) {
        Ok(value) => Json(value).into_response(),
        Err(e) => query_error_response(&e, Lookup::Filter),
    }
}

/// Get one item of a list section by id.
pub async fn get_item(
    State(state): State<AppState>,
    Path((section, id)): Path<(String, String)>,
) -> Response {
    match state.engine.fetch_item(&section, &Value::from(id)) {
        Ok(value) => Json(value).into_response(),
        Err(e) => query_error_response(&e, Lookup::Path),
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_categories() {
        let cases = [
            (QueryError::SectionNotFound("s".into()), StatusCode::NOT_FOUND),
            (
                QueryError::ItemNotFound {
                    section: "s".into(),
                    id: "1".into(),
                },
                StatusCode::NOT_FOUND,
            ),
            (QueryError::NotFilterable("s".into()), StatusCode::BAD_REQUEST),
            (QueryError::NotAList("s".into()), StatusCode::BAD_REQUEST),
        ];
        for (err, status) in cases {
            assert_eq!(query_error_response(&err, Lookup::Filter).status(), status);
            assert_eq!(query_error_response(&err, Lookup::Path).status(), status);
        }
    }
}
