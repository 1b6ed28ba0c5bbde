//! Combined observation of every category.

use std::sync::Arc;

use futures::{StreamExt, TryStreamExt};
use tracing::{debug, info};

use super::{Core, DiscoveryController, FlagGuard, LOG_TAG};
use crate::error::{DiscoveryError, SourceError};
use crate::models::DiscoveryItemChild;
use crate::streams::{combine_latest, CombineLatest};
use crate::view_state::DiscoverySnapshot;

impl DiscoveryController {
    /// Subscribe to every category and keep the snapshot's children in sync.
    ///
    /// Nothing is published until every category has emitted once. After
    /// that, each emission from any category republishes all children from
    /// the latest value of each. The first failure ends the whole load: it
    /// is logged and the last published children stay in place.
    ///
    /// No-op while a load is already running or after dispose.
    pub fn load_all(&self) {
        if self.is_disposed() {
            return;
        }
        let Some(guard) = self.core.flags.try_begin_load() else {
            debug!("Load already in progress, ignoring");
            return;
        };

        info!("Loading all discovery categories");
        let sources = self
            .core
            .use_cases
            .observers()
            .iter()
            .map(|(_, observer)| {
                let mapper = Arc::clone(&self.core.child_mapper);
                observer
                    .execute(&self.core.config.observe_params)
                    .map_ok(move |games| mapper.map_to_children(&games))
                    .boxed()
            })
            .collect();
        let combined = combine_latest::<Vec<DiscoveryItemChild>, SourceError>(sources);

        let core = Arc::clone(&self.core);
        self.runtime.spawn(run_load(core, combined, guard));
    }
}

async fn run_load(
    core: Arc<Core>,
    mut combined: CombineLatest<Vec<DiscoveryItemChild>, SourceError>,
    guard: FlagGuard,
) {
    let _guard = guard;
    let cancel = core.publisher.cancellation();

    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                debug!("Load cancelled");
                break;
            }
            next = combined.next() => match next {
                Some(Ok(children)) => {
                    core.publisher.publish(|snapshot: &DiscoverySnapshot| {
                        snapshot.with_children(children)
                    });
                }
                Some(Err(err)) => {
                    if !cancel.is_cancelled() {
                        core.logger.error(
                            LOG_TAG,
                            "Failed to load games.",
                            &DiscoveryError::Load(err),
                        );
                    }
                    break;
                }
                None => {
                    debug!("All category streams completed");
                    break;
                }
            }
        }
    }
}
