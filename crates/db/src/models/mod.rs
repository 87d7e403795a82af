//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create/upsert DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) where the entity
//!   supports partial updates

pub mod card;
pub mod deck;
pub mod review;
pub mod study_session;
