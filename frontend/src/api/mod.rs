//! Thin transport layer over the backend collection endpoint.
//!
//! Every function here wraps exactly one REST call and converts any failure
//! into an [`ApiError`]. No caching, no retries: callers decide what to do
//! with the result (the catalog component re-fetches the whole collection
//! after each successful mutation).

use std::fmt;

use gloo_net::http::{Request, Response};

use common::model::record::Record;
use common::requests::{CreateRecordRequest, UpdateRecordRequest};

/// Collection resource, mounted behind the dev proxy.
pub const COLLECTION_PATH: &str = "/api/records";

/// URL of a single record within the collection.
pub fn record_url(id: i64) -> String {
    format!("{}/{}", COLLECTION_PATH, id)
}

/// What went wrong with a request, split the way the UI reports it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The request never reached the server (network unreachable, refused).
    NoResponse,
    /// The server answered with an error status; the payload is the
    /// user-visible message built from the response.
    Rejected(String),
    /// The request could not be built or its response could not be read.
    Request(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::NoResponse => write!(f, "no response from server"),
            ApiError::Rejected(message) => write!(f, "{}", message),
            ApiError::Request(description) => write!(f, "{}", description),
        }
    }
}

/// Message for a non-2xx response: the JSON body's `message` field when
/// present, otherwise the transport's status text. Each tier is tried only
/// if the previous one is unavailable.
fn rejection_message(status_text: &str, body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            value
                .get("message")
                .and_then(|message| message.as_str().map(str::to_owned))
        })
        .unwrap_or_else(|| status_text.to_string())
}

async fn reject(response: Response) -> ApiError {
    let status_text = response.status_text();
    let body = response.text().await.unwrap_or_default();
    ApiError::Rejected(rejection_message(&status_text, &body))
}

/// GET the full collection, in backend order.
pub async fn fetch_records() -> Result<Vec<Record>, ApiError> {
    let response = Request::get(COLLECTION_PATH)
        .send()
        .await
        .map_err(|_| ApiError::NoResponse)?;
    if !response.ok() {
        return Err(reject(response).await);
    }
    response
        .json::<Vec<Record>>()
        .await
        .map_err(|err| ApiError::Request(err.to_string()))
}

/// POST a new record. The response body is ignored; the caller re-fetches.
pub async fn create_record(payload: &CreateRecordRequest) -> Result<(), ApiError> {
    let request = Request::post(COLLECTION_PATH)
        .json(payload)
        .map_err(|err| ApiError::Request(err.to_string()))?;
    let response = request.send().await.map_err(|_| ApiError::NoResponse)?;
    if response.ok() {
        Ok(())
    } else {
        Err(reject(response).await)
    }
}

/// PUT the staged edits for one record.
pub async fn update_record(id: i64, payload: &UpdateRecordRequest) -> Result<(), ApiError> {
    let request = Request::put(&record_url(id))
        .json(payload)
        .map_err(|err| ApiError::Request(err.to_string()))?;
    let response = request.send().await.map_err(|_| ApiError::NoResponse)?;
    if response.ok() {
        Ok(())
    } else {
        Err(reject(response).await)
    }
}

/// DELETE one record.
pub async fn delete_record(id: i64) -> Result<(), ApiError> {
    let response = Request::delete(&record_url(id))
        .send()
        .await
        .map_err(|_| ApiError::NoResponse)?;
    if response.ok() {
        Ok(())
    } else {
        Err(reject(response).await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_url_contains_the_id() {
        assert_eq!(record_url(7), "/api/records/7");
    }

    #[test]
    fn server_message_wins_over_status_text() {
        let message = rejection_message("Internal Server Error", r#"{"message": "name taken"}"#);
        assert_eq!(message, "name taken");
    }

    #[test]
    fn json_body_without_message_falls_back_to_status_text() {
        let message = rejection_message("Bad Request", r#"{"detail": "nope"}"#);
        assert_eq!(message, "Bad Request");
    }

    #[test]
    fn non_json_body_falls_back_to_status_text() {
        let message = rejection_message("Internal Server Error", "<html>boom</html>");
        assert_eq!(message, "Internal Server Error");
    }

    #[test]
    fn transport_failure_has_a_fixed_message() {
        assert_eq!(ApiError::NoResponse.to_string(), "no response from server");
    }
}
