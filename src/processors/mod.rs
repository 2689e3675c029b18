//! Batch operations built on the adapter

pub mod missing;
