//! # Node Configuration
//!
//! Environment-driven configuration with sane defaults and an explicit
//! validation step.
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `REMIT_ADMIN` | demo address | Admin identity, 64 hex chars |
//! | `REMIT_FEE_BPS` | `50` | Fee in basis points (max 10000) |
//! | `REMIT_BUS_CAPACITY` | `1000` | Per-subscriber event buffer |
//! | `RUST_LOG` | `info` | Log filter (tracing-subscriber) |

use remit_types::Address;
use thiserror::Error;

/// Default admin for demo runs. Real deployments must set `REMIT_ADMIN`.
const DEMO_ADMIN: Address = [0xAD; 32];

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid fee: {bps} basis points (max 10000)")]
    InvalidFee { bps: u16 },

    #[error("Invalid {var}: expected 64 hex chars, got {value:?}")]
    InvalidAddress { var: String, value: String },

    #[error("Invalid {var}: {value:?} is not a number")]
    InvalidNumber { var: String, value: String },
}

/// Complete node configuration.
#[derive(Debug, Clone)]
pub struct NodeConfig {
    /// Administrator identity; receives transfer fees.
    pub admin: Address,
    /// Fee in basis points.
    pub fee_bps: u16,
    /// Event bus buffer size per subscriber.
    pub bus_capacity: usize,
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            admin: DEMO_ADMIN,
            fee_bps: 50,
            bus_capacity: 1000,
        }
    }
}

impl NodeConfig {
    /// Load configuration from the environment, falling back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Ok(value) = std::env::var("REMIT_ADMIN") {
            config.admin = parse_address("REMIT_ADMIN", &value)?;
        }
        if let Ok(value) = std::env::var("REMIT_FEE_BPS") {
            config.fee_bps = parse_number("REMIT_FEE_BPS", &value)?;
        }
        if let Ok(value) = std::env::var("REMIT_BUS_CAPACITY") {
            config.bus_capacity = parse_number("REMIT_BUS_CAPACITY", &value)?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Validate invariants that hold across all construction paths.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.fee_bps > 10_000 {
            return Err(ConfigError::InvalidFee { bps: self.fee_bps });
        }
        Ok(())
    }
}

fn parse_address(var: &str, value: &str) -> Result<Address, ConfigError> {
    let bytes = hex::decode(value).map_err(|_| ConfigError::InvalidAddress {
        var: var.to_string(),
        value: value.to_string(),
    })?;
    bytes.try_into().map_err(|_| ConfigError::InvalidAddress {
        var: var.to_string(),
        value: value.to_string(),
    })
}

fn parse_number<T: std::str::FromStr>(var: &str, value: &str) -> Result<T, ConfigError> {
    value.parse().map_err(|_| ConfigError::InvalidNumber {
        var: var.to_string(),
        value: value.to_string(),
    })
}
