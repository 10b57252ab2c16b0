use super::types::{AskRequest, AskResponse};
use crate::llm::GenerationClient;
use axum::{body::Bytes, extract::State, http::StatusCode, response::Json};
use std::sync::Arc;
use tracing::{error, info, warn};

pub const METHOD_NOT_ALLOWED_MESSAGE: &str = "Only POST method is allowed";
pub const INVALID_PAYLOAD_MESSAGE: &str = "Invalid request payload";
pub const QUESTION_REQUIRED_MESSAGE: &str = "Question is required";
pub const PARSE_ERROR_MESSAGE: &str = "Error parsing AI response";

type PlainTextError = (StatusCode, String);

#[derive(Clone)]
pub struct AppState {
    pub client: Arc<dyn GenerationClient>,
}

impl AppState {
    pub fn new(client: Arc<dyn GenerationClient>) -> Self {
        Self { client }
    }
}

/// `POST /ask`: forwards the question to the provider and returns the flattened answer.
///
/// The body is decoded by hand so that malformed JSON and a missing field both
/// answer 400, regardless of the request content type.
pub async fn ask(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<AskResponse>, PlainTextError> {
    let request: AskRequest = serde_json::from_slice(&body).map_err(|e| {
        warn!("Rejected request payload: {}", e);
        (StatusCode::BAD_REQUEST, INVALID_PAYLOAD_MESSAGE.to_string())
    })?;

    if request.question.is_empty() {
        warn!("Rejected request with empty question");
        return Err((StatusCode::BAD_REQUEST, QUESTION_REQUIRED_MESSAGE.to_string()));
    }

    info!(
        question_len = request.question.len(),
        "Received question"
    );

    let result = state
        .client
        .generate_content(&request.question)
        .await
        .map_err(|e| {
            if e.is_response_format() {
                error!("Failed to parse provider response: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, PARSE_ERROR_MESSAGE.to_string())
            } else {
                error!("Failed to generate response: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Error generating response: {}", e),
                )
            }
        })?;

    let response = result.text();
    info!(
        candidates = result.candidates.len(),
        response_len = response.len(),
        "Generated response"
    );

    Ok(Json(AskResponse { response }))
}

/// Fallback for every non-POST method on `/ask`.
pub async fn method_not_allowed() -> PlainTextError {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        METHOD_NOT_ALLOWED_MESSAGE.to_string(),
    )
}
