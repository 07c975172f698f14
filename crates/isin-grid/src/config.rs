//! Configuration for the bin grid.

use serde::{Deserialize, Serialize};

/// Configuration for building a [`BinGrid`](crate::BinGrid).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridConfig {
    /// Number of latitude rows spanning pole to pole.
    pub num_rows: usize,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self { num_rows: 4320 }
    }
}

impl GridConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(val) = std::env::var("BIN_GRID_ROWS") {
            if let Ok(rows) = val.parse() {
                config.num_rows = rows;
            }
        }

        config
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.num_rows == 0 {
            return Err("num_rows must be > 0".to_string());
        }

        Ok(())
    }
}
