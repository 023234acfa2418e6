//! Domain logic module containing the pure submit-time algorithms.
//!
//! Both functions take the current [`TableSetModel`](crate::model::TableSetModel)
//! and a [`ValueSnapshot`](crate::snapshot::ValueSnapshot) explicitly; neither
//! holds state between calls.

pub mod aggregate;
pub mod validation;

pub use aggregate::{aggregate, Aggregates, RowAggregates};
pub use validation::validate;
