// ============================================================================
// Logging
// Installs a tracing subscriber for binaries and demos
// ============================================================================

use tracing::Level;

/// Install a formatted `tracing` subscriber writing to stdout.
///
/// Returns `false` if a global subscriber was already set, in which case the
/// existing one is left in place.
pub fn init(level: Level) -> bool {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        let _ = init(Level::DEBUG);
        assert!(!init(Level::INFO));
    }
}
