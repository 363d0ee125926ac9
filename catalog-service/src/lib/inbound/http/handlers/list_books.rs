use axum::extract::State;
use axum::http::StatusCode;

use super::ApiError;
use super::ApiSuccess;
use super::BookData;
use crate::inbound::http::router::AppState;

pub async fn list_books(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<BookData>>, ApiError> {
    state
        .book_service
        .list_books()
        .await
        .map_err(ApiError::from)
        .map(|books| {
            ApiSuccess::new(
                StatusCode::OK,
                books.iter().map(BookData::from).collect(),
            )
        })
}
