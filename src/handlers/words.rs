use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::state::AppState;
use crate::words::{is_valid_word, ApprovedWordStore};

/// GET /api/approved-words - the full approved list
pub async fn approved_words_get(State(state): State<AppState>) -> Json<Vec<String>> {
    let lists = state.words.lock().await;
    Json(lists.approved.words().to_vec())
}

/// GET /api/new-words - the current candidate queue
pub async fn new_words_get(State(state): State<AppState>) -> Json<Vec<String>> {
    let lists = state.words.lock().await;
    Json(lists.candidates.list().to_vec())
}

/// POST /api/new-word - player submits a candidate word
pub async fn new_word_post(
    State(state): State<AppState>,
    payload: Option<Json<Value>>,
) -> Result<impl IntoResponse, ApiError> {
    let payload = payload.map(|Json(v)| v).unwrap_or(Value::Null);
    let word = payload.get("word").unwrap_or(&Value::Null);

    if is_missing(word) {
        return Err(ApiError::bad_request("Word is required"));
    }
    let lower = match word.as_str() {
        Some(s) if is_valid_word(word) => s.to_lowercase(),
        _ => return Err(ApiError::bad_request("Word must be exactly 5 letters")),
    };

    let mut lists = state.words.lock().await;
    if lists.approved.contains(&lower) {
        return Err(ApiError::conflict("Word already exists"));
    }
    lists.candidates.add(lower.clone());

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Word added", "word": lower })),
    ))
}

/// POST /api/approve-words - moderator promotes candidates to the approved list
pub async fn approve_words_post(
    State(state): State<AppState>,
    payload: Option<Json<Value>>,
) -> Result<impl IntoResponse, ApiError> {
    let payload = payload.map(|Json(v)| v).unwrap_or(Value::Null);
    let Some(words) = payload.get("words").and_then(Value::as_array) else {
        return Err(ApiError::bad_request("Words must be a non-empty array"));
    };

    let mut lists = state.words.lock().await;

    // Invalid elements and already-approved words are excluded silently;
    // only an entirely-empty surviving set rejects the batch. Approval does
    // not lowercase unless the normalize flag is set, so a case-variant of
    // an approved word can pass the duplicate check.
    let mut surviving: Vec<String> = Vec::new();
    for value in words {
        if !is_valid_word(value) {
            continue;
        }
        let mut word = value.as_str().unwrap_or_default().to_string();
        if state.config.normalize_approvals {
            word = word.to_lowercase();
        }
        if lists.approved.contains(&word) || surviving.contains(&word) {
            continue;
        }
        surviving.push(word);
    }

    if surviving.is_empty() {
        return Err(ApiError::bad_request("No valid new words to approve"));
    }

    lists.approved.append(surviving.iter().cloned());
    lists.candidates.remove_all(&surviving);
    tracing::info!(count = surviving.len(), "approved new words");

    // Fire-and-forget persistence: the response does not wait on the write,
    // and a write failure is logged, never surfaced to the client.
    let path = lists.approved.path().to_path_buf();
    let snapshot = lists.approved.words().to_vec();
    tokio::task::spawn_blocking(move || {
        if let Err(err) = ApprovedWordStore::write(&path, &snapshot) {
            tracing::error!(error = %err, "failed to save approved words");
        }
    });

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Words approved",
            "count": surviving.len(),
            "words": surviving,
        })),
    ))
}

/// DELETE /api/reset - moderator clears the candidate queue
pub async fn reset_delete(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let mut lists = state.words.lock().await;
    lists.candidates.clear();
    Ok((StatusCode::OK, Json(json!({ "message": "New words cleared" }))))
}

/// Mirrors the submission contract's "word present" check: absent, null,
/// empty-string, false, and zero all count as missing rather than invalid.
fn is_missing(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        _ => false,
    }
}
