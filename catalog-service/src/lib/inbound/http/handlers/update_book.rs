use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use super::BookData;
use crate::book::errors::BookError;
use crate::book::models::BookId;
use crate::book::models::UpdateBookCommand;
use crate::inbound::http::router::AppState;

/// HTTP request body for a partial update: absent fields keep their stored
/// value.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UpdateBookRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub genre: Option<String>,
    pub author: Option<String>,
    pub isbn: Option<String>,
    pub status: Option<String>,
    pub category: Option<String>,
}

impl From<UpdateBookRequest> for UpdateBookCommand {
    fn from(req: UpdateBookRequest) -> Self {
        Self {
            title: req.title,
            description: req.description,
            genre: req.genre,
            author: req.author,
            isbn: req.isbn,
            status: req.status,
            category: req.category,
        }
    }
}

pub async fn update_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<UpdateBookRequest>,
) -> Result<ApiSuccess<BookData>, ApiError> {
    let book_id = BookId::from_string(&id).map_err(BookError::from)?;

    state
        .book_service
        .update_book(&book_id, body.into())
        .await
        .map_err(ApiError::from)
        .map(|ref book| ApiSuccess::new(StatusCode::OK, book.into()))
}
