use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::book::errors::BookError;
use crate::book::models::Book;
use crate::book::models::BookId;
use crate::book::models::CreateBookCommand;
use crate::book::models::UpdateBookCommand;
use crate::book::ports::BookRepository;
use crate::book::ports::BookServicePort;

/// Domain service implementation for book operations.
///
/// The repository is the sole write path; no other component mutates book
/// records.
pub struct BookService<BR>
where
    BR: BookRepository,
{
    repository: Arc<BR>,
}

impl<BR> BookService<BR>
where
    BR: BookRepository,
{
    pub fn new(repository: Arc<BR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<BR> BookServicePort for BookService<BR>
where
    BR: BookRepository,
{
    async fn list_books(&self) -> Result<Vec<Book>, BookError> {
        self.repository.list_all().await
    }

    async fn get_book(&self, id: &BookId) -> Result<Book, BookError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(BookError::NotFound(id.to_string()))
    }

    async fn create_book(&self, command: CreateBookCommand) -> Result<Book, BookError> {
        let book = Book {
            id: BookId::new(),
            title: command.title,
            description: command.description,
            genre: command.genre,
            author: command.author,
            isbn: command.isbn,
            status: command.status,
            category: command.category,
            created_at: Utc::now(),
        };

        self.repository.create(book).await
    }

    async fn update_book(
        &self,
        id: &BookId,
        command: UpdateBookCommand,
    ) -> Result<Book, BookError> {
        let mut book = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(BookError::NotFound(id.to_string()))?;

        if let Some(title) = command.title {
            book.title = title;
        }
        if let Some(description) = command.description {
            book.description = description;
        }
        if let Some(genre) = command.genre {
            book.genre = genre;
        }
        if let Some(author) = command.author {
            book.author = author;
        }
        if let Some(isbn) = command.isbn {
            book.isbn = isbn;
        }
        if let Some(status) = command.status {
            book.status = status;
        }
        if let Some(category) = command.category {
            book.category = category;
        }

        self.repository.update(book).await
    }

    async fn delete_book(&self, id: &BookId) -> Result<(), BookError> {
        // Shared lookup keeps the NotFound contract identical to get_book
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(BookError::NotFound(id.to_string()))?;

        self.repository.delete(id).await
    }

    async fn delete_all_books(&self) -> Result<u64, BookError> {
        let removed = self.repository.delete_all().await?;
        tracing::info!(removed, "Deleted all books");
        Ok(removed)
    }
}
