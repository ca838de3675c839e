/// Record extraction and validation.
///
/// Converts raw access-log lines into structured records:
///
/// - `extract.rs`: configurable capture-group pattern applied per line
/// - `validate.rs`: date/method range checks on extracted records
/// - `model.rs`: record types and extraction errors
///
/// Failures are per-line and recoverable: a line the pattern rejects, or a
/// record that fails validation, is excluded from aggregation without
/// aborting the run.
pub mod extract;
pub mod model;
pub mod validate;

pub use extract::FieldExtractor;
pub use model::{ClassifiedRecord, PatternError, Record};
