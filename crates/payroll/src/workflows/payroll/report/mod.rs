mod render;
mod summary;
pub mod views;

pub use render::{RenderError, ReportFormat};
pub use summary::PayrollReport;
