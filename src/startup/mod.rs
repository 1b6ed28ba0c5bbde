//! Startup for the demo binary and embedding applications.
//!
//! # Components
//!
//! - [`config`] - Controller configuration, builder and environment overrides
//! - [`logging`] - `tracing` subscriber installation
//! - [`wiring`] - Demo controller over the cache repository
//!
//! # Usage
//!
//! ```ignore
//! use game_discovery::startup::{init_tracing, wire_demo, DiscoveryConfig};
//!
//! init_tracing();
//! let demo = wire_demo(DiscoveryConfig::from_env(), false)?;
//! demo.controller.load_data();
//! ```

pub mod config;
pub mod logging;
pub mod wiring;

pub use config::DiscoveryConfig;
pub use logging::init_tracing;
pub use wiring::{wire_demo, DemoDiscovery};
