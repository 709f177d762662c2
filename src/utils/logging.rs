// ============================================================================
// Logging Initialisation
// Installs a tracing-subscriber fmt layer for hosts and demos
// ============================================================================

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install a global fmt subscriber.
///
/// `RUST_LOG` wins when set; otherwise `default_directives` is used
/// (e.g. `"info,boutique_money=debug"`).
///
/// # Errors
/// Returns an error if the directives are malformed or a global subscriber
/// is already installed.
pub fn init_logging(default_directives: &str) -> Result<(), String> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(default_directives).map_err(|e| e.to_string())?,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_fails() {
        // The first call may race with other tests; only the second must fail.
        let _ = init_logging("debug");
        assert!(init_logging("debug").is_err());
    }
}
