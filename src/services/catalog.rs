//! Catalog service: books and the loans taken against them

use std::sync::Arc;

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::{
        book::{Book, CreateBook, UpdateBook},
        loan::Loan,
    },
    repository::{BookRepository, LoanRepository},
};

#[derive(Clone)]
pub struct CatalogService {
    books: Arc<dyn BookRepository>,
    loans: Arc<dyn LoanRepository>,
}

impl CatalogService {
    pub fn new(books: Arc<dyn BookRepository>, loans: Arc<dyn LoanRepository>) -> Self {
        Self { books, loans }
    }

    pub async fn list_books(&self) -> AppResult<Vec<Book>> {
        self.books.list().await
    }

    pub async fn create_book(&self, book: CreateBook) -> AppResult<Book> {
        book.validate()?;

        let created = self.books.add(&book).await?;
        tracing::info!(book_id = created.id, "Book created");
        Ok(created)
    }

    /// Get a book, failing with NotFound when the id does not resolve
    pub async fn get_book(&self, id: i32) -> AppResult<Book> {
        self.books
            .get_by_id(id)
            .await?
            .ok_or_else(AppError::book_not_found)
    }

    /// Merge the provided fields onto the stored book and persist the result
    pub async fn update_book(&self, id: i32, update: UpdateBook) -> AppResult<Book> {
        update.validate()?;

        let book = self.get_book(id).await?;
        if update.is_empty() {
            return Ok(book);
        }

        let updated = self.books.update(&book.merge(&update)).await?;
        tracing::info!(book_id = updated.id, "Book updated");
        Ok(updated)
    }

    /// Create a loan for an existing book.
    ///
    /// Availability is not checked: any number of open loans may reference
    /// the same book.
    pub async fn create_loan(&self, book_id: i32) -> AppResult<Loan> {
        self.get_book(book_id).await?;

        let loan = self.loans.create_loan(book_id).await?;
        tracing::info!(loan_id = loan.id, book_id, "Loan created");
        Ok(loan)
    }

    /// Books whose title contains `title`; empty when nothing matches
    pub async fn search_books(&self, title: &str) -> AppResult<Vec<Book>> {
        self.books.search_by_title(title).await
    }

    /// Check that the store answers
    pub async fn ping(&self) -> AppResult<()> {
        self.books.ping().await.map_err(|e| {
            tracing::warn!("Readiness check failed: {}", e);
            AppError::Unavailable("Database unreachable".to_string())
        })
    }
}
