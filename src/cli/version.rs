//! Version command for the discovery demo.

/// The current version, read from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Version line printed for `--version`.
pub fn version_string() -> String {
    format!("discovery {}", VERSION)
}
