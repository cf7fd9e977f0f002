//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for request bodies, with required fields as
//!   `Option` so their absence can be reported as invalid input
//! - Joined read models where a listing resolves related names

pub mod assignment;
pub mod jutsu;
pub mod mission;
pub mod ninja;
pub mod village;
