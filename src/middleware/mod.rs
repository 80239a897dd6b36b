//! Request middleware for authentication and rate limiting.

pub mod auth;
pub mod rate_limit;
