//! API layer exposing HTTP endpoints.
//!
//! Controllers translate between HTTP (DTOs, status codes, headers) and the
//! service layer. They hold no business logic of their own.

pub mod api_key;
pub mod challenge;
