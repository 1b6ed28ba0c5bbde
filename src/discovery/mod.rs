//! Discovery controller.
//!
//! The controller owns the published [`DiscoverySnapshot`] and two entry
//! points that mutate it:
//! - [`DiscoveryController::load_all`] subscribes to every category and
//!   rewrites the children whenever any category emits
//! - [`DiscoveryController::refresh_all`] runs one bulk refresh and drives
//!   the per-item progress bars around it
//!
//! Both are guarded against re-entry and cancelled by
//! [`DiscoveryController::dispose`]. One-shot events (messages and
//! navigation) go out on the channel returned from
//! [`DiscoveryControllerBuilder::build`].
//!
//! ```text
//!   observers ──► combine_latest ──► with_children ──┐
//!                                                    ├──► SnapshotPublisher ──► watch
//!   refresh ──► progress visible / hidden ───────────┘
//! ```

mod guards;
mod load;
mod navigation;
mod publisher;
mod refresh;
mod types;
mod use_cases;

pub use guards::{FlagGuard, LoadingFlags};
pub use navigation::{route_for_category, route_for_game};
pub use publisher::SnapshotPublisher;
pub use types::{DiscoveryCommand, DiscoveryEvent, DiscoveryRoute};
pub use use_cases::{DiscoveryUseCases, DiscoveryUseCasesBuilder};

use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::sync::{mpsc, watch};
use tracing::debug;

use crate::adapters::{DefaultErrorMapper, DefaultGameChildMapper, TracingLogger};
use crate::error::{DiscoveryError, DiscoveryResult};
use crate::startup::DiscoveryConfig;
use crate::traits::{ErrorMapper, GameChildMapper, Logger};
use crate::view_state::DiscoverySnapshot;

/// Tag passed to the [`Logger`] for every controller failure.
pub const LOG_TAG: &str = "GamesDiscovery";

/// State shared between the controller and its spawned tasks.
struct Core {
    use_cases: DiscoveryUseCases,
    child_mapper: Arc<dyn GameChildMapper>,
    error_mapper: Arc<dyn ErrorMapper>,
    logger: Arc<dyn Logger>,
    config: DiscoveryConfig,
    publisher: SnapshotPublisher,
    flags: Arc<LoadingFlags>,
    events: mpsc::UnboundedSender<DiscoveryEvent>,
}

impl Core {
    /// Send an event unless the controller has been disposed.
    fn emit(&self, event: impl Into<DiscoveryEvent>) {
        let event = event.into();
        self.publisher.run_if_open(|| {
            // Receiver gone means nobody is listening anymore
            let _ = self.events.send(event);
        });
    }
}

/// Aggregates the discovery categories into one published snapshot.
///
/// Must be built inside a tokio runtime; operations spawn onto that runtime
/// and return immediately.
pub struct DiscoveryController {
    core: Arc<Core>,
    runtime: Handle,
}

impl DiscoveryController {
    pub fn builder(use_cases: DiscoveryUseCases) -> DiscoveryControllerBuilder {
        DiscoveryControllerBuilder::new(use_cases)
    }

    /// Start observing every category, then refresh them if configured to.
    pub fn load_data(&self) {
        self.load_all();
        if self.core.config.refresh_on_load {
            self.refresh_all();
        }
    }

    /// User pulled to refresh.
    pub fn on_refresh_requested(&self) {
        debug!("Refresh requested");
        self.refresh_all();
    }

    /// Current snapshot.
    pub fn snapshot(&self) -> DiscoverySnapshot {
        self.core.publisher.current()
    }

    /// Receiver observing every published snapshot.
    pub fn subscribe(&self) -> watch::Receiver<DiscoverySnapshot> {
        self.core.publisher.subscribe()
    }

    pub fn is_loading_all(&self) -> bool {
        self.core.flags.is_loading_all()
    }

    pub fn is_refreshing_all(&self) -> bool {
        self.core.flags.is_refreshing_all()
    }

    pub fn config(&self) -> &DiscoveryConfig {
        &self.core.config
    }

    pub fn is_disposed(&self) -> bool {
        self.core.publisher.is_closed()
    }

    /// Cancel everything in flight and stop publishing.
    ///
    /// No snapshot or event is emitted once this returns. Calling it more
    /// than once is a no-op.
    pub fn dispose(&self) {
        if self.core.publisher.is_closed() {
            return;
        }
        self.core.publisher.close();
        debug!("Discovery controller disposed");
    }
}

impl Drop for DiscoveryController {
    fn drop(&mut self) {
        self.dispose();
    }
}

impl std::fmt::Debug for DiscoveryController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiscoveryController")
            .field("is_loading_all", &self.is_loading_all())
            .field("is_refreshing_all", &self.is_refreshing_all())
            .field("is_disposed", &self.is_disposed())
            .finish()
    }
}

/// Builder for [`DiscoveryController`].
///
/// Mappers and the logger default to [`DefaultGameChildMapper`],
/// [`DefaultErrorMapper`] and [`TracingLogger`].
pub struct DiscoveryControllerBuilder {
    use_cases: DiscoveryUseCases,
    child_mapper: Option<Arc<dyn GameChildMapper>>,
    error_mapper: Option<Arc<dyn ErrorMapper>>,
    logger: Option<Arc<dyn Logger>>,
    config: DiscoveryConfig,
}

impl DiscoveryControllerBuilder {
    fn new(use_cases: DiscoveryUseCases) -> Self {
        Self {
            use_cases,
            child_mapper: None,
            error_mapper: None,
            logger: None,
            config: DiscoveryConfig::default(),
        }
    }

    pub fn child_mapper(mut self, mapper: Arc<dyn GameChildMapper>) -> Self {
        self.child_mapper = Some(mapper);
        self
    }

    pub fn error_mapper(mut self, mapper: Arc<dyn ErrorMapper>) -> Self {
        self.error_mapper = Some(mapper);
        self
    }

    pub fn logger(mut self, logger: Arc<dyn Logger>) -> Self {
        self.logger = Some(logger);
        self
    }

    pub fn config(mut self, config: DiscoveryConfig) -> Self {
        self.config = config;
        self
    }

    /// Build the controller and the receiving end of its event channel.
    ///
    /// Fails with [`DiscoveryError::Config`] when called outside a tokio
    /// runtime.
    pub fn build(
        self,
    ) -> DiscoveryResult<(DiscoveryController, mpsc::UnboundedReceiver<DiscoveryEvent>)> {
        let runtime = Handle::try_current().map_err(|err| DiscoveryError::Config {
            key: "runtime".to_string(),
            message: err.to_string(),
        })?;
        let (events, event_rx) = mpsc::unbounded_channel();

        let core = Core {
            use_cases: self.use_cases,
            child_mapper: self
                .child_mapper
                .unwrap_or_else(|| Arc::new(DefaultGameChildMapper)),
            error_mapper: self
                .error_mapper
                .unwrap_or_else(|| Arc::new(DefaultErrorMapper)),
            logger: self.logger.unwrap_or_else(|| Arc::new(TracingLogger)),
            config: self.config,
            publisher: SnapshotPublisher::new(DiscoverySnapshot::initial()),
            flags: Arc::new(LoadingFlags::new()),
            events,
        };

        let controller = DiscoveryController {
            core: Arc::new(core),
            runtime,
        };
        Ok((controller, event_rx))
    }
}
