//! Game discovery - multi-category games aggregation with live fan-in and
//! bulk refresh.
//!
//! This library exposes modules for use in integration tests and the demo
//! binary.

pub mod adapters;
pub mod cli;
pub mod discovery;
pub mod error;
pub mod models;
pub mod prelude;
pub mod startup;
pub mod streams;
pub mod traits;
pub mod view_state;
