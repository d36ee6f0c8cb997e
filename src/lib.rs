//! Read-only topological exploration of B-rep shapes.
//!
//! Shapes live in a [`topology::TopologyStore`] and are referenced through
//! copyable, oriented [`topology::Shape`] handles. [`explore`] answers
//! "which entities of kind X are inside or around this shape" queries, and
//! [`operations`] provides the builders and measures used to create and
//! inspect shapes.

pub mod error;
pub mod explore;
pub mod math;
pub mod operations;
pub mod topology;

pub use error::{Result, TopolisError};
