//! Merit-order dispatch of a generation fleet against a single load.

/// REST API around the dispatcher.
#[cfg(feature = "api")]
pub mod api;
/// Command-line arguments of the binary.
pub mod cli;
/// TOML engine configuration and presets.
pub mod config;
/// Wind first, then thermal units in merit order.
pub mod dispatch;
/// Validation and infeasibility errors with reason codes.
pub mod error;
/// Generation units and dispatch scenarios.
pub mod fleet;
/// CSV export of allocations.
pub mod io;
/// JSON wire format of production-plan requests.
pub mod payload;
/// Logging setup.
pub mod telemetry;
