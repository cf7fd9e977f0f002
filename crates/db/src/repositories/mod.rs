//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod assignment_repo;
pub mod jutsu_repo;
pub mod mission_repo;
pub mod ninja_repo;
pub mod village_repo;

pub use assignment_repo::AssignmentRepo;
pub use jutsu_repo::JutsuRepo;
pub use mission_repo::MissionRepo;
pub use ninja_repo::NinjaRepo;
pub use village_repo::VillageRepo;
