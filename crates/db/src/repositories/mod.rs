//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Authorization is the
//! caller's responsibility; repositories only enforce the scoping
//! predicates baked into their queries.

pub mod card_repo;
pub mod deck_repo;
pub mod review_repo;
pub mod study_session_repo;

pub use card_repo::CardRepo;
pub use deck_repo::DeckRepo;
pub use review_repo::ReviewRepo;
pub use study_session_repo::StudySessionRepo;
