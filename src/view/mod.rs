//! Presentation-ready derivations over forecast rows.
//!
//! Each helper is independent and recomputed from rows on demand.

pub mod bands;
pub mod categories;
pub mod highlights;
pub mod status;
pub mod summary;

pub use bands::{banded_rows, BandedRow, MonthBand, SpendTrend};
pub use categories::{
    monthly_category_slices, CategorySlice, MonthlyCategoryBreakdown, CATEGORY_MONTHS,
};
pub use highlights::{finite_expense_ids, last_expense_date_by_source, last_expense_row_id_by_month};
pub use status::{expense_status, partition_expenses_by_status, ExpenseStatus, ExpenseStatusPartition};
pub use summary::{monthly_balance_summaries, MonthlySummary};
