//! Business logic services

pub mod catalog;

use std::sync::Arc;

use crate::repository::{BookRepository, LoanRepository, Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub catalog: catalog::CatalogService,
}

impl Services {
    /// Create all services on top of the given repositories
    pub fn new(books: Arc<dyn BookRepository>, loans: Arc<dyn LoanRepository>) -> Self {
        Self {
            catalog: catalog::CatalogService::new(books, loans),
        }
    }

    /// Create all services backed by PostgreSQL
    pub fn from_repository(repository: Repository) -> Self {
        Self::new(Arc::new(repository.books), Arc::new(repository.loans))
    }
}
