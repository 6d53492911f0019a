//! Application state shared across handlers

use std::sync::Arc;
use budgetd_db::Database;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Store handle
    pub db: Arc<Database>,
    /// Reject budget and expense writes that reference unknown categories
    pub strict_category_refs: bool,
}

impl AppState {
    /// Create a new application state
    pub fn new(db: Arc<Database>) -> Self {
        Self {
            db,
            strict_category_refs: false,
        }
    }

    pub fn with_strict_category_refs(mut self, strict: bool) -> Self {
        self.strict_category_refs = strict;
        self
    }
}
