//! # remit-node
//!
//! Runnable wiring for the Remit escrow engine.
//!
//! - `config` - environment-driven [`NodeConfig`](config::NodeConfig)
//! - `runtime` - adapter assembly and engine bootstrap
//!
//! The binary target tails engine events to the log until interrupted;
//! embedders use [`runtime::bootstrap`] directly and drive the engine
//! through its four operations.

pub mod config;
pub mod runtime;

pub use config::{ConfigError, NodeConfig};
pub use runtime::{bootstrap, Runtime};
