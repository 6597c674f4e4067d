//! Book (catalog entry) model and its read/write shapes.
//!
//! `Book` is both the database row and the read shape returned to clients.
//! Clients never send an id: creation goes through `CreateBook` and partial
//! updates through `UpdateBook`, which are merged onto the stored row.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Book as stored and as returned by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Book {
    pub id: i32,
    pub title: String,
    pub author: Option<String>,
    pub isbn: Option<String>,
}

/// Create book request. Unknown keys, including `id`, are ignored.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateBook {
    #[validate(length(min = 1, max = 255, message = "Title must be between 1 and 255 characters"))]
    pub title: String,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub isbn: Option<String>,
}

/// Partial update request.
///
/// A missing key leaves the field untouched. For the nullable fields an
/// explicit `null` clears the stored value.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateBook {
    #[validate(length(min = 1, max = 255, message = "Title must be between 1 and 255 characters"))]
    pub title: Option<String>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[schema(value_type = Option<String>)]
    pub author: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[schema(value_type = Option<String>)]
    pub isbn: Option<Option<String>>,
}

impl UpdateBook {
    /// True when the request carries no field at all
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.author.is_none() && self.isbn.is_none()
    }
}

impl Book {
    /// Apply the fields present in `update`, keeping everything else.
    pub fn merge(self, update: &UpdateBook) -> Book {
        Book {
            id: self.id,
            title: update.title.clone().unwrap_or(self.title),
            author: update.author.clone().unwrap_or(self.author),
            isbn: update.isbn.clone().unwrap_or(self.isbn),
        }
    }
}

/// Title search query parameters
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct BookSearchQuery {
    /// Case-insensitive fragment of the title
    pub title: String,
}
