//! Request handlers.
//!
//! JSON API handlers live in the per-resource modules; server-rendered pages
//! and form posts live in [`pages`], [`manage`], [`export`] and [`charts`].

pub mod activities;
pub mod categories;
pub mod charts;
pub mod entries;
pub mod export;
pub mod manage;
pub mod pages;
pub mod reports;
pub mod settings;

use chrono::NaiveDate;

/// Today's date in the server's local time zone.
pub(crate) fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}
