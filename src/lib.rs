pub mod aggregate;
pub mod cli;
pub mod commands;
pub mod error;
pub mod filters;
pub mod fits;
pub mod models;
pub mod profile;
pub mod reports;
pub mod scanner;

// Re-export commonly used items
pub use aggregate::CaptureSummary;
pub use error::CaptureError;
pub use models::{CaptureRecord, Exposure};
