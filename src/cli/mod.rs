//! CLI for the discovery demo.
//!
//! - Argument parsing
//! - Version display
//! - The demo run loop
//!
//! # Usage
//!
//! ```ignore
//! use game_discovery::cli::{parse_args, CliCommand};
//!
//! match parse_args(std::env::args()) {
//!     CliCommand::Version => println!("{}", version_string()),
//!     CliCommand::Help => println!("{}", USAGE),
//!     CliCommand::Run(options) => { /* wire and run_demo */ }
//! }
//! ```

pub mod args;
pub mod run;
pub mod version;

pub use args::{parse_args, CliCommand, RunOptions, USAGE};
pub use run::{run_demo, RunSummary};
pub use version::{version_string, VERSION};
