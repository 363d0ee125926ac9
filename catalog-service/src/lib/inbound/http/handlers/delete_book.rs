use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::book::errors::BookError;
use crate::book::models::BookId;
use crate::inbound::http::router::AppState;

pub async fn delete_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<ApiSuccess<DeleteBookResponseData>, ApiError> {
    let book_id = BookId::from_string(&id).map_err(BookError::from)?;

    state
        .book_service
        .delete_book(&book_id)
        .await
        .map_err(ApiError::from)
        .map(|()| {
            ApiSuccess::new(
                StatusCode::OK,
                DeleteBookResponseData {
                    message: "Deleted Book".to_string(),
                },
            )
        })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeleteBookResponseData {
    pub message: String,
}
