//! Blocking HTTP wrapper around the server's REST endpoints, one method
//! per route. Calls run inline in the UI thread; the request/response
//! round trip is the only blocking work the client does.

use reqwest::{
    StatusCode,
    blocking::{Client, Response},
};
use thiserror::Error;

use crate::models::ScoreRecord;
use crate::models::protocol::{
    DeckListResponse, LoadDeckResponse, SaveDeckRequest, SaveDeckResponse, SaveScoreRequest,
    SaveScoreResponse, ScoreListResponse,
};

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx status; the body is the server's plain-text explanation.
    #[error("{status}: {body}")]
    Status { status: StatusCode, body: String },
}

pub struct ApiClient {
    base_url: String,
    http: Client,
}

impl ApiClient {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    pub fn list_decks(&self) -> Result<Vec<String>, ClientError> {
        let response = self.http.get(self.url("/api/list")).send()?;
        let body: DeckListResponse = check(response)?.json()?;
        Ok(body.items)
    }

    pub fn load_deck(&self, name: &str) -> Result<Vec<String>, ClientError> {
        let response = self
            .http
            .get(self.url("/api/load"))
            .query(&[("name", name)])
            .send()?;
        let body: LoadDeckResponse = check(response)?.json()?;
        Ok(body.value)
    }

    /// Saves a deck and returns whether an existing deck was replaced.
    pub fn save_deck(&self, name: &str, cards: &[String]) -> Result<bool, ClientError> {
        let request = SaveDeckRequest {
            name: name.to_string(),
            value: cards.to_vec(),
        };
        let response = self.http.post(self.url("/api/save")).json(&request).send()?;
        let body: SaveDeckResponse = check(response)?.json()?;
        Ok(body.replaced)
    }

    pub fn list_scores(&self) -> Result<Vec<ScoreRecord>, ClientError> {
        let response = self.http.get(self.url("/api/listOfScores")).send()?;
        let body: ScoreListResponse = check(response)?.json()?;
        Ok(body.items)
    }

    pub fn save_score(&self, name: &str, deck: &str, score: &str) -> Result<bool, ClientError> {
        let request = SaveScoreRequest {
            name: name.to_string(),
            deck: deck.to_string(),
            score: score.to_string(),
        };
        let response = self
            .http
            .post(self.url("/api/saveScore"))
            .json(&request)
            .send()?;
        let body: SaveScoreResponse = check(response)?.json()?;
        Ok(body.added)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

fn check(response: Response) -> Result<Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(ClientError::Status {
            status,
            body: response.text().unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let client = ApiClient::new("http://localhost:8088/".to_string());
        assert_eq!(client.url("/api/list"), "http://localhost:8088/api/list");
    }
}
