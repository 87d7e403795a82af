//! Study session entity model and DTOs.
//!
//! A study session is one practice run against a deck. It is created with
//! zeroed counters, mutated by the `complete` operation, and never deleted.

use flashdeck_core::types::{DbId, Timestamp, UserId};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `study_sessions` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct StudySession {
    pub id: DbId,
    pub deck_id: DbId,
    /// Absent for anonymous sessions (not produced by this API, but the
    /// schema permits them).
    pub user_id: Option<UserId>,
    pub started_at: Timestamp,
    pub completed_at: Option<Timestamp>,
    pub total_cards_seen: i32,
    pub correct_count: i32,
    pub wrong_count: i32,
    /// Opaque outcome payload supplied by the caller on completion.
    pub summary: Option<serde_json::Value>,
    pub created_at: Timestamp,
}

/// DTO for completing a study session.
///
/// Omitted counters and `summary` keep their stored values; an omitted
/// `completed_at` defaults to the time of the call.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CompleteStudySession {
    #[validate(range(min = 0, message = "total_cards_seen must be non-negative"))]
    pub total_cards_seen: Option<i32>,
    #[validate(range(min = 0, message = "correct_count must be non-negative"))]
    pub correct_count: Option<i32>,
    #[validate(range(min = 0, message = "wrong_count must be non-negative"))]
    pub wrong_count: Option<i32>,
    pub summary: Option<serde_json::Value>,
    pub completed_at: Option<Timestamp>,
}
