//! HTTP-level integration tests for the card upsert/list endpoints.

mod common;

use axum::http::StatusCode;
use common::{auth_token, body_json, create_deck, get_auth, put_json_auth};
use serde_json::json;
use sqlx::PgPool;

/// Upsert a card through the API and return the response JSON.
async fn upsert_card(
    pool: &PgPool,
    token: &str,
    deck_id: i64,
    body: serde_json::Value,
    expected: StatusCode,
) -> serde_json::Value {
    let app = common::build_test_app(pool.clone());
    let response = put_json_auth(app, &format!("/api/v1/decks/{deck_id}/cards"), body, token).await;
    assert_eq!(response.status(), expected);
    body_json(response).await
}

// ---------------------------------------------------------------------------
// Insert path (no id)
// ---------------------------------------------------------------------------

/// Upsert without id inserts a new card with defaults, visible via list.
#[sqlx::test(migrations = "../../db/migrations")]
async fn upsert_without_id_inserts_card(pool: PgPool) {
    let token = auth_token("user-a");
    let deck = create_deck(common::build_test_app(pool.clone()), &token, "Travel").await;
    let deck_id = deck["data"]["id"].as_i64().unwrap();

    let json = upsert_card(
        &pool,
        &token,
        deck_id,
        json!({ "term": "book", "translation": "Buch" }),
        StatusCode::CREATED,
    )
    .await;
    let card = &json["data"];
    assert_eq!(card["deck_id"], deck_id);
    assert_eq!(card["term"], "book");
    assert_eq!(card["translation"], "Buch");
    assert_eq!(card["display_order"], 0);
    assert_eq!(card["is_active"], true);

    let response = get_auth(
        common::build_test_app(pool),
        &format!("/api/v1/decks/{deck_id}/cards"),
        &token,
    )
    .await;
    let listed = body_json(response).await;
    assert_eq!(listed["total"], 1);
    assert_eq!(listed["data"][0]["id"], card["id"]);
}

/// Upserting into someone else's deck is forbidden.
#[sqlx::test(migrations = "../../db/migrations")]
async fn upsert_into_foreign_deck_is_forbidden(pool: PgPool) {
    let owner = auth_token("user-a");
    let intruder = auth_token("user-b");
    let deck = create_deck(common::build_test_app(pool.clone()), &owner, "Travel").await;
    let deck_id = deck["data"]["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = put_json_auth(
        app,
        &format!("/api/v1/decks/{deck_id}/cards"),
        json!({ "term": "book", "translation": "Buch" }),
        &intruder,
    )
    .await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

// ---------------------------------------------------------------------------
// Update path (id supplied)
// ---------------------------------------------------------------------------

/// A card id belonging to a different deck is rejected with 404.
#[sqlx::test(migrations = "../../db/migrations")]
async fn upsert_with_cross_deck_id_is_not_found(pool: PgPool) {
    let token = auth_token("user-a");
    let deck_a = create_deck(common::build_test_app(pool.clone()), &token, "Deck A").await;
    let deck_b = create_deck(common::build_test_app(pool.clone()), &token, "Deck B").await;
    let deck_a_id = deck_a["data"]["id"].as_i64().unwrap();
    let deck_b_id = deck_b["data"]["id"].as_i64().unwrap();

    let created = upsert_card(
        &pool,
        &token,
        deck_a_id,
        json!({ "term": "book", "translation": "Buch" }),
        StatusCode::CREATED,
    )
    .await;
    let card_id = created["data"]["id"].as_i64().unwrap();

    // Reusing deck A's card id under deck B must not relocate the card.
    let json = upsert_card(
        &pool,
        &token,
        deck_b_id,
        json!({ "id": card_id, "term": "book", "translation": "Buch" }),
        StatusCode::NOT_FOUND,
    )
    .await;
    assert_eq!(json["code"], "NOT_FOUND");
}

/// Update-by-id clears omitted descriptive fields but keeps
/// display_order/is_active.
#[sqlx::test(migrations = "../../db/migrations")]
async fn upsert_update_replaces_descriptive_fields(pool: PgPool) {
    let token = auth_token("user-a");
    let deck = create_deck(common::build_test_app(pool.clone()), &token, "Travel").await;
    let deck_id = deck["data"]["id"].as_i64().unwrap();

    let created = upsert_card(
        &pool,
        &token,
        deck_id,
        json!({
            "term": "book",
            "translation": "Buch",
            "part_of_speech": "noun",
            "gender": "n",
            "example_sentence": "Das Buch liegt auf dem Tisch.",
            "display_order": 3,
        }),
        StatusCode::CREATED,
    )
    .await;
    let card_id = created["data"]["id"].as_i64().unwrap();

    // Resend only the required fields: descriptive fields are cleared,
    // display_order and is_active fall back to the stored values.
    let json = upsert_card(
        &pool,
        &token,
        deck_id,
        json!({ "id": card_id, "term": "book", "translation": "Buch" }),
        StatusCode::OK,
    )
    .await;
    let card = &json["data"];
    assert!(card["part_of_speech"].is_null());
    assert!(card["gender"].is_null());
    assert!(card["example_sentence"].is_null());
    assert_eq!(card["display_order"], 3);
    assert_eq!(card["is_active"], true);
}

/// Supplied display_order/is_active override the stored values.
#[sqlx::test(migrations = "../../db/migrations")]
async fn upsert_update_applies_supplied_order_and_active(pool: PgPool) {
    let token = auth_token("user-a");
    let deck = create_deck(common::build_test_app(pool.clone()), &token, "Travel").await;
    let deck_id = deck["data"]["id"].as_i64().unwrap();

    let created = upsert_card(
        &pool,
        &token,
        deck_id,
        json!({ "term": "book", "translation": "Buch" }),
        StatusCode::CREATED,
    )
    .await;
    let card_id = created["data"]["id"].as_i64().unwrap();

    let json = upsert_card(
        &pool,
        &token,
        deck_id,
        json!({
            "id": card_id,
            "term": "book",
            "translation": "Buch",
            "display_order": 7,
            "is_active": false,
        }),
        StatusCode::OK,
    )
    .await;
    assert_eq!(json["data"]["display_order"], 7);
    assert_eq!(json["data"]["is_active"], false);
}

// ---------------------------------------------------------------------------
// List
// ---------------------------------------------------------------------------

/// Inactive cards are hidden unless include_inactive is set.
#[sqlx::test(migrations = "../../db/migrations")]
async fn list_cards_filters_inactive(pool: PgPool) {
    let token = auth_token("user-a");
    let deck = create_deck(common::build_test_app(pool.clone()), &token, "Travel").await;
    let deck_id = deck["data"]["id"].as_i64().unwrap();

    upsert_card(
        &pool,
        &token,
        deck_id,
        json!({ "term": "book", "translation": "Buch" }),
        StatusCode::CREATED,
    )
    .await;
    upsert_card(
        &pool,
        &token,
        deck_id,
        json!({ "term": "old", "translation": "alt", "is_active": false }),
        StatusCode::CREATED,
    )
    .await;

    let response = get_auth(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/decks/{deck_id}/cards"),
        &token,
    )
    .await;
    let json = body_json(response).await;
    assert_eq!(json["total"], 1);
    assert_eq!(json["data"][0]["term"], "book");

    let response = get_auth(
        common::build_test_app(pool),
        &format!("/api/v1/decks/{deck_id}/cards?include_inactive=true"),
        &token,
    )
    .await;
    let json = body_json(response).await;
    assert_eq!(json["total"], 2);
}
