//! Leaf widgets for the data-heavy view nodes.
pub mod chart;
pub mod footer;
pub mod metrics;
pub mod table;
