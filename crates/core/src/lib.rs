//! Domain logic for the shinobi mission registry.
//!
//! Pure types and functions with no database or HTTP dependencies: the rank
//! policy, the export engine, and request-input validation.

pub mod error;
pub mod export;
pub mod rank;
pub mod types;
pub mod validation;
