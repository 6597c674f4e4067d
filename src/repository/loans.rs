//! Loans repository for database operations

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use super::LoanRepository;
use crate::{error::AppResult, models::loan::Loan};

#[derive(Clone)]
pub struct LoansRepository {
    pool: Pool<Postgres>,
}

impl LoansRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LoanRepository for LoansRepository {
    async fn create_loan(&self, book_id: i32) -> AppResult<Loan> {
        let loan = sqlx::query_as::<_, Loan>(
            r#"
            INSERT INTO loans (book_id)
            VALUES ($1)
            RETURNING id, book_id, loan_date
            "#,
        )
        .bind(book_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(loan)
    }
}
