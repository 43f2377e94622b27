//! State model and snapshot store for the clinical-indicators dashboard.
//!
//! The crate is deliberately free of I/O and async: it holds the single
//! application [`Snapshot`], merges [`Patch`]es into it, and broadcasts
//! private copies to subscribers through [`Store`].
pub mod model;
pub mod patch;
pub mod store;

pub use model::{
    AmbulatoryMetrics, Dataset, Filters, ProcedureRecord, Record, SeriesPoint, Snapshot,
    SurgicalMetrics, Summary, Theme, VisitRecord,
};
pub use patch::Patch;
pub use store::{Store, SubscriberId, Subscription};
