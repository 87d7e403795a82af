//! Repository for the `cards` table.

use sqlx::PgPool;

use flashdeck_core::types::DbId;

use crate::models::card::{Card, UpsertCard};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, deck_id, display_order, term, translation, transliteration, \
                        part_of_speech, gender, example_sentence, example_translation, \
                        phonetic, audio_url, tags, is_active, created_at, updated_at";

/// Provides CRUD operations for cards. Cards are only written through the
/// upsert operation; there is no hard delete.
pub struct CardRepo;

impl CardRepo {
    /// Insert a new card under `deck_id`, returning the created row.
    pub async fn insert(
        pool: &PgPool,
        deck_id: DbId,
        input: &UpsertCard,
    ) -> Result<Card, sqlx::Error> {
        let query = format!(
            "INSERT INTO cards (deck_id, display_order, term, translation, transliteration, \
                                part_of_speech, gender, example_sentence, example_translation, \
                                phonetic, audio_url, tags, is_active) \
             VALUES ($1, COALESCE($2, 0), $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, COALESCE($13, true)) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Card>(&query)
            .bind(deck_id)
            .bind(input.display_order)
            .bind(&input.term)
            .bind(&input.translation)
            .bind(&input.transliteration)
            .bind(&input.part_of_speech)
            .bind(&input.gender)
            .bind(&input.example_sentence)
            .bind(&input.example_translation)
            .bind(&input.phonetic)
            .bind(&input.audio_url)
            .bind(&input.tags)
            .bind(input.is_active)
            .fetch_one(pool)
            .await
    }

    /// Update a card scoped to `deck_id`.
    ///
    /// Descriptive fields are replaced with the supplied values outright
    /// (omitted optional fields are written as NULL); only `display_order`
    /// and `is_active` fall back to the stored value when omitted.
    ///
    /// Returns `None` when no card with `id` exists under `deck_id`, which
    /// also rejects ids belonging to a different deck.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        deck_id: DbId,
        input: &UpsertCard,
    ) -> Result<Option<Card>, sqlx::Error> {
        let query = format!(
            "UPDATE cards SET \
                term = $3, \
                translation = $4, \
                transliteration = $5, \
                part_of_speech = $6, \
                gender = $7, \
                example_sentence = $8, \
                example_translation = $9, \
                phonetic = $10, \
                audio_url = $11, \
                tags = $12, \
                display_order = COALESCE($13, display_order), \
                is_active = COALESCE($14, is_active), \
                updated_at = NOW() \
             WHERE id = $1 AND deck_id = $2 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Card>(&query)
            .bind(id)
            .bind(deck_id)
            .bind(&input.term)
            .bind(&input.translation)
            .bind(&input.transliteration)
            .bind(&input.part_of_speech)
            .bind(&input.gender)
            .bind(&input.example_sentence)
            .bind(&input.example_translation)
            .bind(&input.phonetic)
            .bind(&input.audio_url)
            .bind(&input.tags)
            .bind(input.display_order)
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }

    /// Find a card by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Card>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM cards WHERE id = $1");
        sqlx::query_as::<_, Card>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List cards for a deck, optionally including inactive ones.
    ///
    /// Ordered by display_order, then id for stable output.
    pub async fn list_by_deck(
        pool: &PgPool,
        deck_id: DbId,
        include_inactive: bool,
    ) -> Result<Vec<Card>, sqlx::Error> {
        let query = if include_inactive {
            format!("SELECT {COLUMNS} FROM cards WHERE deck_id = $1 ORDER BY display_order, id")
        } else {
            format!(
                "SELECT {COLUMNS} FROM cards \
                 WHERE deck_id = $1 AND is_active = true ORDER BY display_order, id"
            )
        };
        sqlx::query_as::<_, Card>(&query)
            .bind(deck_id)
            .fetch_all(pool)
            .await
    }
}
