use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::book::errors::BookIdError;

/// Book aggregate entity.
///
/// All seven catalog fields are stored as plain strings; `genre`, `status`,
/// and `category` may be empty when the client omitted them at creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub description: String,
    pub genre: String,
    pub author: String,
    pub isbn: String,
    pub status: String,
    pub category: String,
    pub created_at: DateTime<Utc>,
}

/// Book unique identifier, assigned by the service at creation and
/// immutable thereafter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BookId(pub Uuid);

impl BookId {
    /// Generate a new random book ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a book ID from its string form.
    ///
    /// # Errors
    /// * `InvalidFormat` - string is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, BookIdError> {
        Uuid::parse_str(s)
            .map(BookId)
            .map_err(|e| BookIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for BookId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Command to create a new book.
///
/// `title`, `description`, `author`, and `isbn` have already been checked
/// non-empty at the HTTP boundary; the remaining fields default to empty
/// strings when omitted.
#[derive(Debug, Clone)]
pub struct CreateBookCommand {
    pub title: String,
    pub description: String,
    pub genre: String,
    pub author: String,
    pub isbn: String,
    pub status: String,
    pub category: String,
}

/// Command to partially update an existing book.
///
/// Only `Some` fields replace the stored value; `None` fields are left
/// untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateBookCommand {
    pub title: Option<String>,
    pub description: Option<String>,
    pub genre: Option<String>,
    pub author: Option<String>,
    pub isbn: Option<String>,
    pub status: Option<String>,
    pub category: Option<String>,
}
