//! The report sink: one analyzed record, one CSV row.

pub mod writer;

pub use writer::{write_report, COLUMNS};
