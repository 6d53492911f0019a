//! Repository implementations

mod category;
mod budget;
mod expense;
mod summary;

pub use category::CategoryRepo;
pub use budget::BudgetRepo;
pub use expense::ExpenseRepo;
pub use summary::SummaryRepo;
