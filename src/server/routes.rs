//! Request handlers for the deck and score endpoints.
//!
//! Save bodies arrive as raw JSON and are checked field by field so that a
//! missing or mistyped field turns into a descriptive 400 instead of a
//! generic deserialization rejection.

use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;
use serde_json::Value;

use crate::models::ScoreRecord;
use crate::models::protocol::{
    DeckListResponse, LoadDeckResponse, SaveDeckResponse, SaveScoreResponse, ScoreListResponse,
};

use super::{error::ApiError, state::SharedState};

#[derive(Deserialize)]
pub struct LoadParams {
    name: Option<String>,
}

/// GET /api/list. Deck names in the order they were first saved.
pub async fn list(State(state): State<SharedState>) -> Json<DeckListResponse> {
    let decks = state.decks.lock().unwrap();
    Json(DeckListResponse {
        items: decks.names(),
    })
}

/// GET /api/load?name=. The stored cards of one deck.
pub async fn load(
    State(state): State<SharedState>,
    Query(params): Query<LoadParams>,
) -> Result<Json<LoadDeckResponse>, ApiError> {
    let name = params.name.ok_or(ApiError::MissingArgument("name"))?;

    let decks = state.decks.lock().unwrap();
    let cards = decks
        .load(&name)
        .ok_or_else(|| ApiError::DeckNotFound(name.clone()))?;

    Ok(Json(LoadDeckResponse {
        value: cards.to_vec(),
    }))
}

/// POST /api/save. Inserts or replaces a deck and reports which happened.
pub async fn save(
    State(state): State<SharedState>,
    Json(body): Json<Value>,
) -> Result<Json<SaveDeckResponse>, ApiError> {
    let name = required_str(&body, "name")?;
    let value = body.get("value").ok_or(ApiError::MissingArgument("value"))?;
    let cards = value
        .as_array()
        .and_then(|lines| {
            lines
                .iter()
                .map(|line| line.as_str().map(str::to_string))
                .collect::<Option<Vec<String>>>()
        })
        .ok_or(ApiError::InvalidArgument("value"))?;

    let replaced = state.decks.lock().unwrap().save(name, cards);
    Ok(Json(SaveDeckResponse { replaced }))
}

/// GET /api/listOfScores. Every submitted score, oldest first.
pub async fn list_of_scores(State(state): State<SharedState>) -> Json<ScoreListResponse> {
    let scores = state.scores.lock().unwrap();
    Json(ScoreListResponse {
        items: scores.records().to_vec(),
    })
}

/// POST /api/saveScore. Appends a quiz result; fields are only checked for
/// presence.
pub async fn save_score(
    State(state): State<SharedState>,
    Json(body): Json<Value>,
) -> Result<Json<SaveScoreResponse>, ApiError> {
    let name = required_str(&body, "name")?;
    let deck = required_str(&body, "deck")?;
    let score = required_str(&body, "score")?;

    state.scores.lock().unwrap().append(ScoreRecord {
        user_name: name.to_string(),
        deck: deck.to_string(),
        score: score.to_string(),
    });

    Ok(Json(SaveScoreResponse { added: true }))
}

fn required_str<'a>(body: &'a Value, field: &'static str) -> Result<&'a str, ApiError> {
    body.get(field)
        .and_then(Value::as_str)
        .ok_or(ApiError::MissingArgument(field))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::state::AppState;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use serde_json::json;

    async fn save_deck(state: &SharedState, name: &str, cards: &[&str]) {
        save(
            State(state.clone()),
            Json(json!({"name": name, "value": cards})),
        )
        .await
        .unwrap();
    }

    #[tokio::test]
    async fn test_list_starts_empty() {
        let state = AppState::new();
        let Json(body) = list(State(state)).await;
        assert!(body.items.is_empty());
    }

    #[tokio::test]
    async fn test_list_returns_names_in_insertion_order() {
        let state = AppState::new();
        save_deck(&state, "lock", &["bat|man"]).await;
        save_deck(&state, "lord", &["ru|ler"]).await;

        let Json(body) = list(State(state)).await;
        assert_eq!(body.items, ["lock", "lord"]);
    }

    #[tokio::test]
    async fn test_save_requires_name() {
        let state = AppState::new();
        let err = save(State(state), Json(json!({"value": ["a|b"]})))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "required argument \"name\" was missing");
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_save_requires_value() {
        let state = AppState::new();
        let err = save(State(state), Json(json!({"name": "A"})))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "required argument \"value\" was missing");
    }

    #[tokio::test]
    async fn test_save_rejects_non_string_cards() {
        let state = AppState::new();
        let err = save(State(state), Json(json!({"name": "A", "value": [1, 2]})))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "required argument \"value\" was invalid");
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_save_reports_replaced() {
        let state = AppState::new();

        let Json(first) = save(
            State(state.clone()),
            Json(json!({"name": "A", "value": ["some|stuff"]})),
        )
        .await
        .unwrap();
        assert!(!first.replaced);

        let Json(second) = save(
            State(state),
            Json(json!({"name": "A", "value": ["different|stuff"]})),
        )
        .await
        .unwrap();
        assert!(second.replaced);
    }

    #[tokio::test]
    async fn test_load_roundtrip() {
        let state = AppState::new();
        save_deck(&state, "key", &["front|back"]).await;

        let Json(body) = load(
            State(state),
            Query(LoadParams {
                name: Some("key".to_string()),
            }),
        )
        .await
        .unwrap();
        assert_eq!(body.value, ["front|back"]);
    }

    #[tokio::test]
    async fn test_load_requires_name() {
        let state = AppState::new();
        let err = load(State(state), Query(LoadParams { name: None }))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "required argument \"name\" was missing");
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_load_unknown_name_is_404() {
        let state = AppState::new();
        let err = load(
            State(state),
            Query(LoadParams {
                name: Some("missing".to_string()),
            }),
        )
        .await
        .unwrap_err();
        assert_eq!(err.to_string(), "no deck saved under \"missing\"");
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_save_score_requires_all_fields() {
        let state = AppState::new();

        let err = save_score(
            State(state.clone()),
            Json(json!({"deck": "polish", "score": "50"})),
        )
        .await
        .unwrap_err();
        assert_eq!(err.to_string(), "required argument \"name\" was missing");

        let err = save_score(
            State(state.clone()),
            Json(json!({"name": "ala", "score": "50"})),
        )
        .await
        .unwrap_err();
        assert_eq!(err.to_string(), "required argument \"deck\" was missing");

        let err = save_score(
            State(state),
            Json(json!({"name": "ala", "deck": "polish"})),
        )
        .await
        .unwrap_err();
        assert_eq!(err.to_string(), "required argument \"score\" was missing");
    }

    #[tokio::test]
    async fn test_scores_keep_append_order_and_literal_values() {
        let state = AppState::new();

        let Json(added) = save_score(
            State(state.clone()),
            Json(json!({"name": "ala", "deck": "polish", "score": "66"})),
        )
        .await
        .unwrap();
        assert!(added.added);

        save_score(
            State(state.clone()),
            Json(json!({"name": "ola", "deck": "polish", "score": "100"})),
        )
        .await
        .unwrap();

        let Json(body) = list_of_scores(State(state)).await;
        assert_eq!(body.items.len(), 2);
        assert_eq!(body.items[0].user_name, "ala");
        assert_eq!(body.items[0].score, "66");
        assert_eq!(body.items[1].user_name, "ola");
        assert_eq!(body.items[1].score, "100");
    }
}
