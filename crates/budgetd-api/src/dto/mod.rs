//! Data Transfer Objects
//!
//! Request and response structures for the API.

pub mod category;
pub mod budget;
pub mod expense;
pub mod summary;
pub mod common;

pub use category::*;
pub use budget::*;
pub use expense::*;
pub use summary::*;
pub use common::*;
