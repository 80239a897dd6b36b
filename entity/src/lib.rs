//! SeaORM entity models for the byteboard database schema.
//!
//! Entities are generated-style models kept deliberately thin: they describe the
//! database schema and relations only. Conversion to domain models happens at the
//! repository boundary in the main crate.

pub mod api_key;
pub mod api_key_usage;
pub mod prelude;
