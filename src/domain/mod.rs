//! Value types shared by the generators, forecast builder and view layer.

pub mod event;
pub mod expense;
pub mod horizon;

pub use event::{EventKind, ForecastEvent, ForecastRow, INCOME_CATEGORY};
pub use expense::{Expense, ExpenseCategory, ExpenseSchedule, Repeat};
pub use horizon::Horizon;
