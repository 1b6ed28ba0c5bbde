//! View state published to the presentation layer.
//!
//! The controller owns the state; renderers only ever see immutable
//! [`DiscoverySnapshot`] values received from a watch channel.
//!
//! ```text
//! ┌──────────────────────┐
//! │ DiscoveryController  │
//! │   (owns the state)   │
//! └──────────┬───────────┘
//!            │ watch::Receiver
//!            ▼
//! ┌──────────────────────┐
//! │  DiscoverySnapshot   │
//! │ (immutable, ordered) │
//! └──────────┬───────────┘
//!            ▼
//! ┌──────────────────────┐
//! │   renderer / CLI     │
//! └──────────────────────┘
//! ```

mod snapshot;

pub use snapshot::DiscoverySnapshot;
