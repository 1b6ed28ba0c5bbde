//! Bulk refresh with progress indication.

use std::sync::Arc;

use tracing::{debug, info};

use super::{Core, DiscoveryCommand, DiscoveryController, FlagGuard, LOG_TAG};
use crate::error::DiscoveryError;
use crate::view_state::DiscoverySnapshot;

impl DiscoveryController {
    /// Refresh every category once.
    ///
    /// The progress bar of every item is shown before this returns and
    /// hidden once the refresh settles. A failure is logged and surfaced as
    /// a [`DiscoveryCommand::ShowMessage`]; it never touches the children.
    ///
    /// No-op while a refresh is already running or after dispose.
    pub fn refresh_all(&self) {
        if self.is_disposed() {
            return;
        }
        let Some(guard) = self.core.flags.try_begin_refresh() else {
            debug!("Refresh already in progress, ignoring");
            return;
        };

        info!("Refreshing all discovery categories");
        self.core
            .publisher
            .publish(DiscoverySnapshot::with_progress_visible);

        let core = Arc::clone(&self.core);
        self.runtime.spawn(run_refresh(core, guard));
    }
}

async fn run_refresh(core: Arc<Core>, guard: FlagGuard) {
    let cancel = core.publisher.cancellation();
    let refresh_all = Arc::clone(core.use_cases.refresh_all());

    let outcome = tokio::select! {
        _ = cancel.cancelled() => {
            debug!("Refresh cancelled");
            return;
        }
        outcome = refresh_all.execute(&core.config.refresh_params) => outcome,
    };

    match outcome {
        Ok(()) => info!("Discovery refresh completed"),
        Err(err) => {
            let message = core.error_mapper.map_to_message(&err);
            if !cancel.is_cancelled() {
                core.logger.error(
                    LOG_TAG,
                    "Failed to refresh games.",
                    &DiscoveryError::Refresh(err),
                );
            }
            core.emit(DiscoveryCommand::ShowMessage(message));
        }
    }

    // Hide under the guard so a follow-up refresh cannot show progress
    // before this one has hidden it.
    core.publisher.publish(DiscoverySnapshot::with_progress_hidden);
    drop(guard);
}
