use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::ApiError;
use super::ApiSuccess;
use super::BookData;
use crate::book::errors::BookError;
use crate::book::models::BookId;
use crate::inbound::http::router::AppState;

pub async fn get_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<ApiSuccess<BookData>, ApiError> {
    let book_id = BookId::from_string(&id).map_err(BookError::from)?;

    state
        .book_service
        .get_book(&book_id)
        .await
        .map_err(ApiError::from)
        .map(|ref book| ApiSuccess::new(StatusCode::OK, book.into()))
}
