//! Repositories over the four tables.
//!
//! Each repository is a zero-sized struct with associated async functions
//! taking the pool, so handlers call e.g. `CategoryRepo::list(&state.pool)`.

mod activity_repo;
mod category_repo;
mod entry_repo;
mod report_repo;
mod settings_repo;

pub use activity_repo::ActivityRepo;
pub use category_repo::CategoryRepo;
pub use entry_repo::EntryRepo;
pub use report_repo::ReportRepo;
pub use settings_repo::SettingsRepo;
