use async_trait::async_trait;

use crate::book::errors::BookError;
use crate::book::models::Book;
use crate::book::models::BookId;
use crate::book::models::CreateBookCommand;
use crate::book::models::UpdateBookCommand;

/// Port for book domain service operations.
///
/// All operations run behind the authentication gate; the service itself
/// performs no access checks.
#[async_trait]
pub trait BookServicePort: Send + Sync + 'static {
    /// Retrieve every book (full scan, no pagination).
    ///
    /// # Errors
    /// * `DatabaseError` - storage operation failed
    async fn list_books(&self) -> Result<Vec<Book>, BookError>;

    /// Retrieve a book by identifier.
    ///
    /// # Errors
    /// * `NotFound` - no book with this id
    /// * `DatabaseError` - storage operation failed
    async fn get_book(&self, id: &BookId) -> Result<Book, BookError>;

    /// Create a new book and return it with its assigned identifier.
    ///
    /// # Errors
    /// * `DatabaseError` - storage operation failed
    async fn create_book(&self, command: CreateBookCommand) -> Result<Book, BookError>;

    /// Partially update a book: only fields present in the command replace
    /// stored values.
    ///
    /// # Errors
    /// * `NotFound` - no book with this id
    /// * `DatabaseError` - storage operation failed
    async fn update_book(
        &self,
        id: &BookId,
        command: UpdateBookCommand,
    ) -> Result<Book, BookError>;

    /// Delete a single book.
    ///
    /// # Errors
    /// * `NotFound` - no book with this id (including a repeated delete)
    /// * `DatabaseError` - storage operation failed
    async fn delete_book(&self, id: &BookId) -> Result<(), BookError>;

    /// Delete every book unconditionally. Returns the number of records
    /// removed. Irreversible; there is no confirmation step.
    ///
    /// # Errors
    /// * `DatabaseError` - storage operation failed
    async fn delete_all_books(&self) -> Result<u64, BookError>;
}

/// Persistence operations for the book aggregate.
#[async_trait]
pub trait BookRepository: Send + Sync + 'static {
    /// Persist a new book.
    ///
    /// # Errors
    /// * `DatabaseError` - storage operation failed
    async fn create(&self, book: Book) -> Result<Book, BookError>;

    /// Retrieve a book by identifier (None if absent).
    ///
    /// # Errors
    /// * `DatabaseError` - storage operation failed
    async fn find_by_id(&self, id: &BookId) -> Result<Option<Book>, BookError>;

    /// Retrieve all books.
    ///
    /// # Errors
    /// * `DatabaseError` - storage operation failed
    async fn list_all(&self) -> Result<Vec<Book>, BookError>;

    /// Replace the stored record for an existing book.
    ///
    /// # Errors
    /// * `NotFound` - book does not exist
    /// * `DatabaseError` - storage operation failed
    async fn update(&self, book: Book) -> Result<Book, BookError>;

    /// Remove a single book.
    ///
    /// # Errors
    /// * `NotFound` - book does not exist
    /// * `DatabaseError` - storage operation failed
    async fn delete(&self, id: &BookId) -> Result<(), BookError>;

    /// Remove every book, returning the number removed.
    ///
    /// # Errors
    /// * `DatabaseError` - storage operation failed
    async fn delete_all(&self) -> Result<u64, BookError>;
}
