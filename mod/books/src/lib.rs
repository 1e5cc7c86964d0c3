//! Books module — typed data access for the accounting surfaces.
//!
//! # Resources
//!
//! - **Account** — chart-of-accounts entry
//! - **Voucher** — journal voucher with balanced debit/credit entries
//! - **Trial balance / balance runs** — per-period balance views and
//!   server-side balance generation
//! - **Report** — financial report definitions and their rendered rows
//! - **GroupingRule** — account-category grouping for report lines
//! - **ExchangeRate** — per-period currency rates
//!
//! All business logic (posting, balance computation, report formulas)
//! lives server-side; these services validate inputs locally, call the
//! remote API, and decode the results.

pub mod model;
pub mod service;

pub use model::{
    Account, AccountCategory, BalanceRun, CreateVoucher, Direction, ExchangeRate, GroupingRule,
    NewVoucherEntry, Report, ReportKind, ReportTable, RunStatus, SetExchangeRate, TrialBalanceRow,
    Voucher, VoucherEntry, VoucherQuery,
};
pub use service::{BooksError, BooksService};
