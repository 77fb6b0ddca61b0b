//! Domain models for generated financial reports.

pub mod report;

pub use report::{CellValue, GeneratedReport, Sheet};
