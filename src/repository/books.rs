//! Books repository for database operations

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use super::BookRepository;
use crate::{
    error::{AppError, AppResult},
    models::book::{Book, CreateBook},
};

const BOOK_COLUMNS: &str = "id, title, author, isbn";

/// Build an `ILIKE` pattern matching `title` anywhere, with the wildcard
/// characters of the input escaped. `None` for a blank query.
pub fn title_pattern(title: &str) -> Option<String> {
    let title = title.trim();
    if title.is_empty() {
        return None;
    }

    let mut pattern = String::with_capacity(title.len() + 2);
    pattern.push('%');
    for c in title.chars() {
        if matches!(c, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    Some(pattern)
}

#[derive(Clone)]
pub struct BooksRepository {
    pool: Pool<Postgres>,
}

impl BooksRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookRepository for BooksRepository {
    async fn list(&self) -> AppResult<Vec<Book>> {
        let books = sqlx::query_as::<_, Book>(&format!(
            "SELECT {} FROM books ORDER BY id",
            BOOK_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(books)
    }

    async fn add(&self, book: &CreateBook) -> AppResult<Book> {
        let row = sqlx::query_as::<_, Book>(&format!(
            r#"
            INSERT INTO books (title, author, isbn)
            VALUES ($1, $2, $3)
            RETURNING {}
            "#,
            BOOK_COLUMNS
        ))
        .bind(&book.title)
        .bind(&book.author)
        .bind(&book.isbn)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    async fn get_by_id(&self, id: i32) -> AppResult<Option<Book>> {
        let book = sqlx::query_as::<_, Book>(&format!(
            "SELECT {} FROM books WHERE id = $1",
            BOOK_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(book)
    }

    async fn update(&self, book: &Book) -> AppResult<Book> {
        sqlx::query_as::<_, Book>(&format!(
            r#"
            UPDATE books SET title = $1, author = $2, isbn = $3
            WHERE id = $4
            RETURNING {}
            "#,
            BOOK_COLUMNS
        ))
        .bind(&book.title)
        .bind(&book.author)
        .bind(&book.isbn)
        .bind(book.id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(AppError::book_not_found)
    }

    async fn search_by_title(&self, title: &str) -> AppResult<Vec<Book>> {
        let Some(pattern) = title_pattern(title) else {
            return Ok(Vec::new());
        };

        let books = sqlx::query_as::<_, Book>(&format!(
            r#"SELECT {} FROM books WHERE title ILIKE $1 ESCAPE '\' ORDER BY id"#,
            BOOK_COLUMNS
        ))
        .bind(pattern)
        .fetch_all(&self.pool)
        .await?;

        Ok(books)
    }

    async fn ping(&self) -> AppResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
