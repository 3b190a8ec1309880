//! HTTP collaborator for the spending API
//!
//! This module wraps the two upstream endpoints behind a typed client:
//! - POST spending-by-award search
//! - GET per-award detail
//!
//! Request failures are classified into transport, timeout, status, and
//! decode errors; non-2xx response bodies are captured for diagnostics.

mod http;

pub use http::{build_http_client, SpendingClient};
