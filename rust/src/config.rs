//! Configuration for the longest-path engine.

use crate::logging::VERBOSITY_SILENT;

/// Engine settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TripleConfig {
    /// Verbosity level: 0=silent, 1=changes, 2=checks, 3=debug.
    pub verbosity: u8,
}

impl Default for TripleConfig {
    fn default() -> Self {
        Self {
            verbosity: VERBOSITY_SILENT,
        }
    }
}

impl TripleConfig {
    pub fn with_verbosity(verbosity: u8) -> Self {
        Self { verbosity }
    }
}
