use axum::extract::State;
use axum::http::StatusCode;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::inbound::http::router::AppState;

/// Destructive bulk delete. There is deliberately no confirmation step;
/// callers own the risk.
pub async fn delete_all_books(
    State(state): State<AppState>,
) -> Result<ApiSuccess<DeleteAllBooksResponseData>, ApiError> {
    state
        .book_service
        .delete_all_books()
        .await
        .map_err(ApiError::from)
        .map(|deleted| {
            ApiSuccess::new(
                StatusCode::OK,
                DeleteAllBooksResponseData {
                    message: "All books deleted".to_string(),
                    deleted,
                },
            )
        })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeleteAllBooksResponseData {
    pub message: String,
    pub deleted: u64,
}
