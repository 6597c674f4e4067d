//! Repository layer for database operations

pub mod books;
pub mod loans;

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use crate::{
    error::AppResult,
    models::{
        book::{Book, CreateBook},
        loan::Loan,
    },
};

pub use books::BooksRepository;
pub use loans::LoansRepository;

/// Persistence operations on books
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// All books, ordered by id
    async fn list(&self) -> AppResult<Vec<Book>>;

    /// Insert a book and return it with its assigned id
    async fn add(&self, book: &CreateBook) -> AppResult<Book>;

    /// `Ok(None)` when no book has this id
    async fn get_by_id(&self, id: i32) -> AppResult<Option<Book>>;

    /// Persist every field of an existing book
    async fn update(&self, book: &Book) -> AppResult<Book>;

    /// Books whose title contains `title`, ignoring case
    async fn search_by_title(&self, title: &str) -> AppResult<Vec<Book>>;

    /// Round-trip the store
    async fn ping(&self) -> AppResult<()>;
}

/// Persistence operations on loans
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LoanRepository: Send + Sync {
    /// Insert a loan for `book_id`. The book is not checked here.
    async fn create_loan(&self, book_id: i32) -> AppResult<Loan>;
}

/// PostgreSQL-backed repositories sharing one connection pool
#[derive(Clone)]
pub struct Repository {
    pub books: BooksRepository,
    pub loans: LoansRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            books: BooksRepository::new(pool.clone()),
            loans: LoansRepository::new(pool),
        }
    }
}
