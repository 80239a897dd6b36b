//! Domain models, parameter types, and API DTOs.
//!
//! This module contains domain models used throughout the service layer, representing
//! business entities and operation parameters, plus the DTOs exchanged with API
//! clients. Domain models are converted from entity models at the repository boundary
//! and transformed to DTOs at the controller boundary.

pub mod api;
pub mod api_key;
pub mod challenge;
pub mod rate_limit;
