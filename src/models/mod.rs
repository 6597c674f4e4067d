//! Data models for the library server

pub mod book;
pub mod loan;

// Re-export commonly used types
pub use book::{Book, CreateBook, UpdateBook};
pub use loan::Loan;
