//! Perfcompare - Compare benchmark latencies between two jobs
//!
//! This library flattens raw performance records from the runs of a "left"
//! and a "right" benchmark job into per-metric buckets keyed by test, verb,
//! resource, subresource and percentile, and computes mean, standard
//! deviation and max for both sides of every bucket.

pub mod cli;
pub mod comparison;
pub mod config;
pub mod perftype;
