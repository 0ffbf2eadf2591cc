pub mod activity;
pub mod category;
pub mod entry;
pub mod outcome;
pub mod report;
pub mod settings;
