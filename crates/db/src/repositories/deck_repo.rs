//! Repository for the `decks` table.

use sqlx::PgPool;

use flashdeck_core::types::DbId;

use crate::models::deck::{CreateDeck, Deck, UpdateDeck};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, owner_id, title, description, from_language, to_language, \
                        level, tags, is_active, created_at, updated_at";

/// Provides CRUD operations for decks. No hard delete exists; decks are
/// soft-disabled through `is_active`.
pub struct DeckRepo;

impl DeckRepo {
    /// Insert a new deck owned by `owner_id`, returning the created row.
    ///
    /// Unsupplied optional fields take their documented defaults in SQL
    /// (`COALESCE` against the column default values).
    pub async fn create(
        pool: &PgPool,
        owner_id: &str,
        input: &CreateDeck,
    ) -> Result<Deck, sqlx::Error> {
        let query = format!(
            "INSERT INTO decks (owner_id, title, description, from_language, to_language, level, tags, is_active) \
             VALUES ($1, $2, $3, COALESCE($4, 'en'), COALESCE($5, 'en'), COALESCE($6, 'mixed'::deck_level), $7, COALESCE($8, true)) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Deck>(&query)
            .bind(owner_id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.from_language)
            .bind(&input.to_language)
            .bind(input.level)
            .bind(&input.tags)
            .bind(input.is_active)
            .fetch_one(pool)
            .await
    }

    /// Find a deck by its internal ID, regardless of owner or active flag.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Deck>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM decks WHERE id = $1");
        sqlx::query_as::<_, Deck>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all decks owned by `owner_id`, optionally including inactive
    /// ones. Ordered newest-first; callers must not rely on the order.
    pub async fn list_by_owner(
        pool: &PgPool,
        owner_id: &str,
        include_inactive: bool,
    ) -> Result<Vec<Deck>, sqlx::Error> {
        let query = if include_inactive {
            format!("SELECT {COLUMNS} FROM decks WHERE owner_id = $1 ORDER BY created_at DESC")
        } else {
            format!(
                "SELECT {COLUMNS} FROM decks \
                 WHERE owner_id = $1 AND is_active = true ORDER BY created_at DESC"
            )
        };
        sqlx::query_as::<_, Deck>(&query)
            .bind(owner_id)
            .fetch_all(pool)
            .await
    }

    /// Update a deck. Only non-`None` fields are applied; `owner_id` is
    /// immutable and `updated_at` is refreshed on every call.
    ///
    /// Returns `None` if no row with the given `id` exists. Ownership must
    /// be verified by the caller before invoking this.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateDeck,
    ) -> Result<Option<Deck>, sqlx::Error> {
        let query = format!(
            "UPDATE decks SET \
                title = COALESCE($2, title), \
                description = COALESCE($3, description), \
                from_language = COALESCE($4, from_language), \
                to_language = COALESCE($5, to_language), \
                level = COALESCE($6, level), \
                tags = COALESCE($7, tags), \
                is_active = COALESCE($8, is_active), \
                updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Deck>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.from_language)
            .bind(&input.to_language)
            .bind(input.level)
            .bind(&input.tags)
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }
}
