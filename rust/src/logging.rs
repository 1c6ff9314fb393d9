//! Logging macros with verbosity level control.
//!
//! Nothing is formatted when the configured verbosity is below the
//! message level. Levels:
//! - 0: SILENT (only errors)
//! - 1: CHANGES (matrix setup, constraint edges)
//! - 2: CHECKS (derived start times)
//! - 3: DEBUG (every improved matrix cell)

/// Verbosity level constants.
pub const VERBOSITY_SILENT: u8 = 0;
pub const VERBOSITY_CHANGES: u8 = 1;
pub const VERBOSITY_CHECKS: u8 = 2;
pub const VERBOSITY_DEBUG: u8 = 3;

/// Whether a message at `level` is emitted under `verbosity`.
#[inline]
pub fn enabled(verbosity: u8, level: u8) -> bool {
    level != VERBOSITY_SILENT && verbosity >= level
}

/// Emit a message at an explicit level.
#[macro_export]
macro_rules! log_at {
    ($level:expr, $verbosity:expr, $($arg:tt)*) => {
        if $crate::logging::enabled($verbosity, $level) {
            eprintln!("[tripel] {}", format_args!($($arg)*));
        }
    };
}

/// Log at CHANGES level (verbosity >= 1).
#[macro_export]
macro_rules! log_changes {
    ($verbosity:expr, $($arg:tt)*) => {
        $crate::log_at!($crate::logging::VERBOSITY_CHANGES, $verbosity, $($arg)*)
    };
}

/// Log at CHECKS level (verbosity >= 2).
#[macro_export]
macro_rules! log_checks {
    ($verbosity:expr, $($arg:tt)*) => {
        $crate::log_at!($crate::logging::VERBOSITY_CHECKS, $verbosity, $($arg)*)
    };
}

/// Log at DEBUG level (verbosity >= 3).
///
/// Fires inside the O(n^3) relaxation loop; keep it off for large networks.
#[macro_export]
macro_rules! log_debug {
    ($verbosity:expr, $($arg:tt)*) => {
        $crate::log_at!($crate::logging::VERBOSITY_DEBUG, $verbosity, $($arg)*)
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enabled_thresholds() {
        assert!(!enabled(VERBOSITY_SILENT, VERBOSITY_CHANGES));
        assert!(enabled(VERBOSITY_CHANGES, VERBOSITY_CHANGES));
        assert!(!enabled(VERBOSITY_CHANGES, VERBOSITY_CHECKS));
        assert!(enabled(VERBOSITY_DEBUG, VERBOSITY_CHECKS));
        assert!(enabled(VERBOSITY_DEBUG, VERBOSITY_DEBUG));
        // Level 0 is not a message level
        assert!(!enabled(VERBOSITY_DEBUG, VERBOSITY_SILENT));
    }

    #[test]
    fn test_disabled_level_skips_arguments() {
        let evaluated = std::cell::Cell::new(false);
        let touch = || {
            evaluated.set(true);
            0
        };
        log_debug!(VERBOSITY_CHECKS, "cell {}", touch());
        assert!(!evaluated.get());

        log_changes!(VERBOSITY_CHANGES, "nodes {}", touch());
        assert!(evaluated.get());
    }
}
