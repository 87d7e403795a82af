//! Deck entity model and DTOs.
//!
//! A deck is a named collection of vocabulary cards belonging to exactly
//! one owner. Decks are never hard-deleted; `is_active` soft-disables them.

use flashdeck_core::types::{DbId, Timestamp, UserId};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// CEFR proficiency level of a deck, or `mixed` for no single level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "deck_level")]
pub enum DeckLevel {
    A1,
    A2,
    B1,
    B2,
    C1,
    C2,
    #[serde(rename = "mixed")]
    #[sqlx(rename = "mixed")]
    Mixed,
}

/// A row from the `decks` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Deck {
    pub id: DbId,
    pub owner_id: UserId,
    pub title: String,
    pub description: Option<String>,
    pub from_language: String,
    pub to_language: String,
    pub level: DeckLevel,
    pub tags: Option<String>,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new deck.
///
/// Unsupplied optional fields take the documented defaults: languages `"en"`,
/// level `mixed`, `is_active` true. The owner is the authenticated caller,
/// never part of the request body.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateDeck {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
    pub description: Option<String>,
    pub from_language: Option<String>,
    pub to_language: Option<String>,
    pub level: Option<DeckLevel>,
    pub tags: Option<String>,
    pub is_active: Option<bool>,
}

/// DTO for updating an existing deck. All fields optional; omitted fields
/// keep their stored value. The owner is immutable.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateDeck {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: Option<String>,
    pub description: Option<String>,
    pub from_language: Option<String>,
    pub to_language: Option<String>,
    pub level: Option<DeckLevel>,
    pub tags: Option<String>,
    pub is_active: Option<bool>,
}

impl UpdateDeck {
    /// True when no mutable field is present in the request.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.from_language.is_none()
            && self.to_language.is_none()
            && self.level.is_none()
            && self.tags.is_none()
            && self.is_active.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_deck_is_empty_detects_absent_fields() {
        assert!(UpdateDeck::default().is_empty());

        let input = UpdateDeck {
            tags: Some("travel".into()),
            ..Default::default()
        };
        assert!(!input.is_empty());
    }

    #[test]
    fn deck_level_serde_uses_cefr_labels() {
        assert_eq!(serde_json::to_string(&DeckLevel::B2).unwrap(), "\"B2\"");
        assert_eq!(
            serde_json::to_string(&DeckLevel::Mixed).unwrap(),
            "\"mixed\""
        );
        let parsed: DeckLevel = serde_json::from_str("\"mixed\"").unwrap();
        assert_eq!(parsed, DeckLevel::Mixed);
    }
}
