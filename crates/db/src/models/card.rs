//! Card entity model and DTOs.

use flashdeck_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `cards` table: one term/translation entry within a deck.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Card {
    pub id: DbId,
    pub deck_id: DbId,
    pub display_order: i32,
    pub term: String,
    pub translation: String,
    pub transliteration: Option<String>,
    pub part_of_speech: Option<String>,
    pub gender: Option<String>,
    pub example_sentence: Option<String>,
    pub example_translation: Option<String>,
    pub phonetic: Option<String>,
    pub audio_url: Option<String>,
    pub tags: Option<String>,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for the card upsert operation.
///
/// With `id` absent this inserts a new card (`display_order` 0, `is_active`
/// true by default). With `id` present it updates the card with
/// full-replace semantics for the descriptive fields: an omitted
/// `transliteration`, `part_of_speech`, `gender`, `example_sentence`,
/// `example_translation`, `phonetic`, `audio_url` or `tags` is cleared to
/// NULL. Only `display_order` and `is_active` fall back to the stored value
/// when omitted. Callers updating a card must therefore resend every
/// descriptive field they want to keep.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpsertCard {
    pub id: Option<DbId>,
    #[validate(length(min = 1, message = "term must not be empty"))]
    pub term: String,
    #[validate(length(min = 1, message = "translation must not be empty"))]
    pub translation: String,
    pub transliteration: Option<String>,
    pub part_of_speech: Option<String>,
    pub gender: Option<String>,
    pub example_sentence: Option<String>,
    pub example_translation: Option<String>,
    pub phonetic: Option<String>,
    pub audio_url: Option<String>,
    pub tags: Option<String>,
    pub display_order: Option<i32>,
    pub is_active: Option<bool>,
}
