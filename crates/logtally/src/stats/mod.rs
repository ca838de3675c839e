/// Aggregation pass over the collected record set.
///
/// - `count.rs`: order-preserving frequency counter (stable tie semantics)
/// - `aggregate.rs`: the three date-keyed report views
pub mod aggregate;
pub mod count;

pub use aggregate::{Aggregates, Ratio};
pub use count::Counter;
