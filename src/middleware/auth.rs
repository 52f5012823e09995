use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};

use crate::error::ApiError;
use crate::state::AppState;

/// Shared-secret gate for moderator routes. The Authorization header must
/// equal `Bearer <secret>` exactly; anything else is rejected before the
/// handler runs, so no state is touched on failure.
pub async fn secret_key_middleware(
    State(state): State<AppState>,
    headers: HeaderMap,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let expected = format!("Bearer {}", state.config.secret_key);
    let authorized = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(|v| v == expected)
        .unwrap_or(false);

    if !authorized {
        return Err(ApiError::unauthorized(
            "Unauthorized: Invalid or missing secret key",
        ));
    }

    Ok(next.run(request).await)
}
