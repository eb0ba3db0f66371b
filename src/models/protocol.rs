//! Request and response payloads shared by the server routes and the
//! client wrapper, matching the JSON the endpoints speak.

use serde::{Deserialize, Serialize};

use super::ScoreRecord;

/// Response of GET /api/list: deck names in insertion order.
#[derive(Serialize, Deserialize)]
pub struct DeckListResponse {
    pub items: Vec<String>,
}

/// Response of GET /api/load: the stored card lines.
#[derive(Debug, Serialize, Deserialize)]
pub struct LoadDeckResponse {
    pub value: Vec<String>,
}

/// Body of POST /api/save.
#[derive(Serialize, Deserialize)]
pub struct SaveDeckRequest {
    pub name: String,
    pub value: Vec<String>,
}

/// Response of POST /api/save.
#[derive(Debug, Serialize, Deserialize)]
pub struct SaveDeckResponse {
    pub replaced: bool,
}

/// Response of GET /api/listOfScores: records in append order.
#[derive(Serialize, Deserialize)]
pub struct ScoreListResponse {
    pub items: Vec<ScoreRecord>,
}

/// Body of POST /api/saveScore. `name` is the quiz taker's name and
/// `score` a string-encoded integer percentage.
#[derive(Serialize, Deserialize)]
pub struct SaveScoreRequest {
    pub name: String,
    pub deck: String,
    pub score: String,
}

/// Response of POST /api/saveScore.
#[derive(Debug, Serialize, Deserialize)]
pub struct SaveScoreResponse {
    pub added: bool,
}
