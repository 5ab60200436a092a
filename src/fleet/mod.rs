//! Generation fleet and scenario model.

/// Load target and prices for one dispatch.
pub mod scenario;
/// Generation unit records and kinds.
pub mod unit;

// Re-export the main types for convenience
pub use scenario::{Fuels, Scenario};
pub use unit::{GenerationUnit, UnitKind};
