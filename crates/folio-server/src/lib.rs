//! Folio Server - Document API
//!
//! REST API serving a JSON document loaded once at startup. Exposes the
//! whole document, its section names, individual sections (optionally
//! filtered by id) and items of list sections by id.
//!
//! Key Features:
//! - Read-only, lock-free request handling over a shared document
//! - Distinct not-found and bad-request error responses
//! - Permissive CORS, request tracing and request IDs
//!
//! @version 0.1.0
//! @author AutomataNexus Development Team

pub mod config;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use config::ServerConfig;
pub use router::create_router;
pub use state::AppState;
