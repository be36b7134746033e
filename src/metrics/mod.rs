//! Operation counters for the cache, behind the `metrics` feature.
//!
//! Counters are recorded inline in cache operations and read through
//! [`snapshot::LruMetricsSnapshot`], a plain-data copy taken at a point in
//! time. There is no exporter layer; callers wire snapshots into whatever
//! reporting they already have.

pub mod cell;
pub mod metrics_impl;
pub mod snapshot;

pub use cell::MetricsCell;
pub use metrics_impl::LruMetrics;
pub use snapshot::LruMetricsSnapshot;
