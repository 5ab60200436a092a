//! Merit-order dispatch engine.

/// Marginal cost model.
pub mod cost;
/// Dispatcher running the passes over one scenario.
pub mod engine;
/// Merit-order pass with backtrack adjustment.
pub mod merit_order;
/// Cost ranking of dispatchable units.
pub mod ranking;
/// Wind pass.
pub mod renewable;
/// Post-hoc plan summary.
pub mod summary;
/// Allocations, plans and the load counter.
pub mod types;

pub use cost::CostModel;
pub use engine::Dispatcher;
pub use summary::DispatchSummary;
pub use types::{Allocation, BacktrackAdjustment, DispatchPlan};
