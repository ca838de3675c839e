//! Run configuration: extraction pattern and classification token lists.

pub mod load;
pub mod model;

pub use model::{ConfigError, ReportConfig};
