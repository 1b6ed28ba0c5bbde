//! Stream combinators used by the controller's fan-in.

pub mod combine_latest;

pub use combine_latest::{combine_latest, CombineLatest};
