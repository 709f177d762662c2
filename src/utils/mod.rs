// ============================================================================
// Utilities Module
// Process-level helpers for hosts embedding the money API
// ============================================================================

#[cfg(feature = "logging")]
mod logging;

#[cfg(feature = "logging")]
pub use logging::init_logging;
