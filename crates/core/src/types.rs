/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Opaque user identifier issued by the upstream identity provider.
///
/// The service never interprets this value; it is only compared for
/// equality against `decks.owner_id` / `study_sessions.user_id`.
pub type UserId = String;
