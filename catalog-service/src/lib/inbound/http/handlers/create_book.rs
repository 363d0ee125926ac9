use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use thiserror::Error;

use super::ApiError;
use super::ApiSuccess;
use super::BookData;
use crate::book::models::CreateBookCommand;
use crate::inbound::http::router::AppState;

pub async fn create_book(
    State(state): State<AppState>,
    Json(body): Json<CreateBookRequest>,
) -> Result<ApiSuccess<BookData>, ApiError> {
    state
        .book_service
        .create_book(body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref book| ApiSuccess::new(StatusCode::CREATED, book.into()))
}

/// HTTP request body for creating a book (raw JSON).
///
/// Every field is optional at the JSON layer so that missing required
/// fields produce this API's own 400 instead of a deserialization error.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateBookRequest {
    title: Option<String>,
    description: Option<String>,
    genre: Option<String>,
    author: Option<String>,
    isbn: Option<String>,
    status: Option<String>,
    category: Option<String>,
}

#[derive(Debug, Clone, Error)]
enum ParseCreateBookRequestError {
    #[error("Field '{0}' is required and must be non-empty")]
    MissingField(&'static str),
}

fn required(
    field: &'static str,
    value: Option<String>,
) -> Result<String, ParseCreateBookRequestError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ParseCreateBookRequestError::MissingField(field)),
    }
}

impl CreateBookRequest {
    /// `title`, `description`, `author`, and `isbn` must be present and
    /// non-empty; `genre`, `status`, and `category` default to empty.
    fn try_into_command(self) -> Result<CreateBookCommand, ParseCreateBookRequestError> {
        Ok(CreateBookCommand {
            title: required("title", self.title)?,
            description: required("description", self.description)?,
            author: required("author", self.author)?,
            isbn: required("isbn", self.isbn)?,
            genre: self.genre.unwrap_or_default(),
            status: self.status.unwrap_or_default(),
            category: self.category.unwrap_or_default(),
        })
    }
}

impl From<ParseCreateBookRequestError> for ApiError {
    fn from(err: ParseCreateBookRequestError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_request() -> CreateBookRequest {
        CreateBookRequest {
            title: Some("Dune".to_string()),
            description: Some("Desert planet".to_string()),
            genre: Some("Sci-Fi".to_string()),
            author: Some("Herbert".to_string()),
            isbn: Some("9780441013593".to_string()),
            status: Some("available".to_string()),
            category: Some("fiction".to_string()),
        }
    }

    #[test]
    fn test_all_fields_accepted() {
        let command = full_request().try_into_command().unwrap();
        assert_eq!(command.title, "Dune");
        assert_eq!(command.category, "fiction");
    }

    #[test]
    fn test_missing_title_rejected() {
        let request = CreateBookRequest {
            title: None,
            ..full_request()
        };
        assert!(request.try_into_command().is_err());
    }

    #[test]
    fn test_blank_isbn_rejected() {
        let request = CreateBookRequest {
            isbn: Some("   ".to_string()),
            ..full_request()
        };
        assert!(request.try_into_command().is_err());
    }

    #[test]
    fn test_optional_fields_default_to_empty() {
        let request = CreateBookRequest {
            genre: None,
            status: None,
            category: None,
            ..full_request()
        };
        let command = request.try_into_command().unwrap();
        assert_eq!(command.genre, "");
        assert_eq!(command.status, "");
        assert_eq!(command.category, "");
    }
}
