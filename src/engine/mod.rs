// ============================================================================
// Engine Module
// Money operations wired to configuration and an observer
// ============================================================================

mod money_service;

pub mod factory;

pub use factory::{create_from_config, MoneyServiceBuilder};
pub use money_service::MoneyService;
