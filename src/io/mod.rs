//! File export of dispatch results.

/// CSV allocation export.
pub mod export;
