use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::book::errors::BookError;
use crate::book::models::Book;
use crate::book::models::BookId;
use crate::book::ports::BookRepository;

pub struct PostgresBookRepository {
    pool: PgPool,
}

impl PostgresBookRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct BookRow {
    id: Uuid,
    title: String,
    description: String,
    genre: String,
    author: String,
    isbn: String,
    status: String,
    category: String,
    created_at: DateTime<Utc>,
}

impl From<BookRow> for Book {
    fn from(row: BookRow) -> Self {
        Book {
            id: BookId(row.id),
            title: row.title,
            description: row.description,
            genre: row.genre,
            author: row.author,
            isbn: row.isbn,
            status: row.status,
            category: row.category,
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl BookRepository for PostgresBookRepository {
    async fn create(&self, book: Book) -> Result<Book, BookError> {
        sqlx::query(
            r#"
            INSERT INTO books (id, title, description, genre, author, isbn, status, category, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(book.id.0)
        .bind(&book.title)
        .bind(&book.description)
        .bind(&book.genre)
        .bind(&book.author)
        .bind(&book.isbn)
        .bind(&book.status)
        .bind(&book.category)
        .bind(book.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| BookError::DatabaseError(e.to_string()))?;

        Ok(book)
    }

    async fn find_by_id(&self, id: &BookId) -> Result<Option<Book>, BookError> {
        let row = sqlx::query_as::<_, BookRow>(
            r#"
            SELECT id, title, description, genre, author, isbn, status, category, created_at
            FROM books
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| BookError::DatabaseError(e.to_string()))?;

        Ok(row.map(Book::from))
    }

    async fn list_all(&self) -> Result<Vec<Book>, BookError> {
        let rows = sqlx::query_as::<_, BookRow>(
            r#"
            SELECT id, title, description, genre, author, isbn, status, category, created_at
            FROM books
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| BookError::DatabaseError(e.to_string()))?;

        Ok(rows.into_iter().map(Book::from).collect())
    }

    async fn update(&self, book: Book) -> Result<Book, BookError> {
        let result = sqlx::query(
            r#"
            UPDATE books
            SET title = $2, description = $3, genre = $4, author = $5,
                isbn = $6, status = $7, category = $8
            WHERE id = $1
            "#,
        )
        .bind(book.id.0)
        .bind(&book.title)
        .bind(&book.description)
        .bind(&book.genre)
        .bind(&book.author)
        .bind(&book.isbn)
        .bind(&book.status)
        .bind(&book.category)
        .execute(&self.pool)
        .await
        .map_err(|e| BookError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(BookError::NotFound(book.id.to_string()));
        }

        Ok(book)
    }

    async fn delete(&self, id: &BookId) -> Result<(), BookError> {
        let result = sqlx::query(
            r#"
            DELETE FROM books
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .execute(&self.pool)
        .await
        .map_err(|e| BookError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(BookError::NotFound(id.to_string()));
        }

        Ok(())
    }

    async fn delete_all(&self) -> Result<u64, BookError> {
        let result = sqlx::query("DELETE FROM books")
            .execute(&self.pool)
            .await
            .map_err(|e| BookError::DatabaseError(e.to_string()))?;

        Ok(result.rows_affected())
    }
}
