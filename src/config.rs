use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::error::{LibraryError, Result};

/// Default number of reservations a single book accepts
pub const DEFAULT_RESERVATION_CAPACITY: usize = 10;

/// Default number of transaction records kept in memory
pub const DEFAULT_HISTORY_LIMIT: usize = 100;

/// Tunables for a [`crate::LibrarySystem`]
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct LibraryConfig {
    /// Reservations accepted per book; `None` leaves the queue unbounded
    pub reservation_capacity: Option<usize>,
    /// Maximum number of transaction records retained
    pub history_limit: usize,
    /// Load the default catalog at startup
    pub seed_catalog: bool,
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            reservation_capacity: Some(DEFAULT_RESERVATION_CAPACITY),
            history_limit: DEFAULT_HISTORY_LIMIT,
            seed_catalog: true,
        }
    }
}

impl LibraryConfig {
    /// Parse a configuration from JSON; missing fields take their defaults
    ///
    /// # Errors
    ///
    /// Returns `LibraryError::Config` if the text is not a valid configuration
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text)
            .map_err(|e| LibraryError::Config(format!("Failed to parse JSON: {e}")))
    }

    /// Load a configuration from a JSON file
    ///
    /// # Errors
    ///
    /// Returns `LibraryError::Config` if the file cannot be read or parsed
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| {
            LibraryError::Config(format!("Failed to read {}: {e}", path.display()))
        })?;
        Self::from_json(&contents)
    }
}
