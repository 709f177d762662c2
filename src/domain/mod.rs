// ============================================================================
// Domain Models Module
// Configuration and the shipping quote value object
// ============================================================================

pub mod config;
pub mod quote;

pub use config::MoneyConfig;
pub use quote::Quote;
