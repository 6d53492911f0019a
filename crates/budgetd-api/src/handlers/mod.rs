//! API Handlers
//!
//! Request handlers for all API endpoints.
//! Each module handles one collection.

pub mod health;
pub mod category;
pub mod budget;
pub mod expense;
pub mod summary;

pub use health::*;
