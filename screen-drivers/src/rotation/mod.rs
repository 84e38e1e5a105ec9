//! Rotation sensor glue
//!
//! - [`ComparatorEdge`]: edge detector with Schmitt bias output

pub mod comparator;

pub use comparator::ComparatorEdge;
