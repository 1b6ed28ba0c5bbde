//! Reentrancy guards for the two top-level operations.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// `is_loading_all` / `is_refreshing_all`, owned by one controller.
#[derive(Debug, Default)]
pub struct LoadingFlags {
    loading_all: AtomicBool,
    refreshing_all: AtomicBool,
}

impl LoadingFlags {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_loading_all(&self) -> bool {
        self.loading_all.load(Ordering::Acquire)
    }

    pub fn is_refreshing_all(&self) -> bool {
        self.refreshing_all.load(Ordering::Acquire)
    }

    /// Claim the load flag. `None` if a load is already running.
    pub fn try_begin_load(self: &Arc<Self>) -> Option<FlagGuard> {
        FlagGuard::acquire(Arc::clone(self), Flag::LoadingAll)
    }

    /// Claim the refresh flag. `None` if a refresh is already running.
    pub fn try_begin_refresh(self: &Arc<Self>) -> Option<FlagGuard> {
        FlagGuard::acquire(Arc::clone(self), Flag::RefreshingAll)
    }

    fn flag(&self, flag: Flag) -> &AtomicBool {
        match flag {
            Flag::LoadingAll => &self.loading_all,
            Flag::RefreshingAll => &self.refreshing_all,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flag {
    LoadingAll,
    RefreshingAll,
}

/// Holds one flag set; clears it when dropped.
///
/// Moving the guard into the operation's task ties the flag to the task's
/// lifetime, so it is released on completion, failure, or cancellation.
#[derive(Debug)]
#[must_use = "the flag is released as soon as the guard is dropped"]
pub struct FlagGuard {
    flags: Arc<LoadingFlags>,
    flag: Flag,
}

impl FlagGuard {
    fn acquire(flags: Arc<LoadingFlags>, flag: Flag) -> Option<Self> {
        flags
            .flag(flag)
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self { flags, flag })
    }
}

impl Drop for FlagGuard {
    fn drop(&mut self) {
        self.flags.flag(self.flag).store(false, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_start_cleared() {
        let flags = LoadingFlags::new();
        assert!(!flags.is_loading_all());
        assert!(!flags.is_refreshing_all());
    }

    #[test]
    fn test_second_claim_is_rejected() {
        let flags = Arc::new(LoadingFlags::new());

        let guard = flags.try_begin_load();
        assert!(guard.is_some());
        assert!(flags.is_loading_all());
        assert!(flags.try_begin_load().is_none());
    }

    #[test]
    fn test_drop_releases_flag() {
        let flags = Arc::new(LoadingFlags::new());

        let guard = flags.try_begin_refresh().unwrap();
        drop(guard);

        assert!(!flags.is_refreshing_all());
        assert!(flags.try_begin_refresh().is_some());
    }

    #[test]
    fn test_flags_are_independent() {
        let flags = Arc::new(LoadingFlags::new());

        let _load = flags.try_begin_load().unwrap();
        let refresh = flags.try_begin_refresh();

        assert!(refresh.is_some());
        assert!(flags.is_loading_all());
        assert!(flags.is_refreshing_all());
    }
}
