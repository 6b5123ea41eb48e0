//! Logging setup for the console programs.
//!
//! With the `logging` feature enabled, events are formatted to standard
//! error so they never mix with program output on standard out. Without it,
//! initialization is a no-op and events are discarded.

/// Maps a `-v` count to the most detailed level that will be logged.
pub fn level_for_verbosity(verbosity: u8) -> tracing::Level {
    match verbosity {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    }
}

#[cfg(feature = "logging")]
mod enabled {
    use std::sync::Once;

    use super::level_for_verbosity;

    /// Installs the global subscriber. Only the first call has any effect.
    pub fn init_tracing(verbosity: u8) {
        static INIT: Once = Once::new();
        INIT.call_once(|| {
            let _ = tracing_subscriber::fmt()
                .with_max_level(level_for_verbosity(verbosity))
                .with_writer(std::io::stderr)
                .with_target(false)
                .try_init();
        });
    }
}

#[cfg(not(feature = "logging"))]
mod disabled {
    pub fn init_tracing(_verbosity: u8) {
        // No-op when tracing is disabled
    }
}

#[cfg(feature = "logging")]
pub use enabled::*;

#[cfg(not(feature = "logging"))]
pub use disabled::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_levels() {
        assert_eq!(level_for_verbosity(0), tracing::Level::WARN);
        assert_eq!(level_for_verbosity(1), tracing::Level::INFO);
        assert_eq!(level_for_verbosity(2), tracing::Level::DEBUG);
        assert_eq!(level_for_verbosity(9), tracing::Level::TRACE);
    }

    #[test]
    fn test_init_twice() {
        init_tracing(0);
        init_tracing(3);
    }
}
