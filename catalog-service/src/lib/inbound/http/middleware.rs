use axum::extract::Request;
use axum::extract::State;
use axum::http::{self};
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;

use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

/// Extension type carrying the verified identity into handlers
#[derive(Debug, Clone)]
pub struct AuthenticatedClaims {
    pub username: String,
}

/// Authentication gate: validates the bearer token before any book handler
/// runs.
///
/// Missing, malformed, invalid, and expired tokens all produce the same
/// 401 response so the caller learns nothing about which check failed. The
/// actual reason is logged.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let token = extract_token_from_header(&req).ok_or_else(|| {
        tracing::warn!("Missing or malformed Authorization header");
        unauthorized()
    })?;

    let claims = state.authenticator.validate_token(token).map_err(|e| {
        tracing::warn!(error = %e, "Token validation failed");
        unauthorized()
    })?;

    req.extensions_mut().insert(AuthenticatedClaims {
        username: claims.sub,
    });

    Ok(next.run(req).await)
}

fn unauthorized() -> Response {
    ApiError::Unauthorized("Unauthorized".to_string()).into_response()
}

fn extract_token_from_header(req: &Request) -> Option<&str> {
    req.headers()
        .get(http::header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}
