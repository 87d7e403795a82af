//! Repository for the `study_sessions` table.

use sqlx::PgPool;

use flashdeck_core::types::DbId;

use crate::models::study_session::{CompleteStudySession, StudySession};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, deck_id, user_id, started_at, completed_at, \
                        total_cards_seen, correct_count, wrong_count, summary, created_at";

/// Provides operations for study sessions. Sessions are created, completed
/// once, and never deleted.
pub struct StudySessionRepo;

impl StudySessionRepo {
    /// Insert a new session for `deck_id` started now, with zeroed counters.
    pub async fn create(
        pool: &PgPool,
        deck_id: DbId,
        user_id: &str,
    ) -> Result<StudySession, sqlx::Error> {
        let query = format!(
            "INSERT INTO study_sessions (deck_id, user_id) \
             VALUES ($1, $2) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, StudySession>(&query)
            .bind(deck_id)
            .bind(user_id)
            .fetch_one(pool)
            .await
    }

    /// Find a session by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<StudySession>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM study_sessions WHERE id = $1");
        sqlx::query_as::<_, StudySession>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Complete a session scoped to its owning user.
    ///
    /// Omitted counters and `summary` keep their stored values; an omitted
    /// `completed_at` is set to NOW(). The `user_id` predicate means a
    /// session owned by a different user is indistinguishable from a
    /// missing one: both return `None`.
    pub async fn complete(
        pool: &PgPool,
        id: DbId,
        user_id: &str,
        input: &CompleteStudySession,
    ) -> Result<Option<StudySession>, sqlx::Error> {
        let query = format!(
            "UPDATE study_sessions SET \
                total_cards_seen = COALESCE($3, total_cards_seen), \
                correct_count = COALESCE($4, correct_count), \
                wrong_count = COALESCE($5, wrong_count), \
                summary = COALESCE($6, summary), \
                completed_at = COALESCE($7, NOW()) \
             WHERE id = $1 AND user_id = $2 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, StudySession>(&query)
            .bind(id)
            .bind(user_id)
            .bind(input.total_cards_seen)
            .bind(input.correct_count)
            .bind(input.wrong_count)
            .bind(&input.summary)
            .bind(input.completed_at)
            .fetch_optional(pool)
            .await
    }
}
