//! Wiring of the demo controller.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tracing::info;

use super::DiscoveryConfig;
use crate::adapters::{CachedGamesRepository, DemoGamesDataStore};
use crate::discovery::{DiscoveryController, DiscoveryEvent, DiscoveryUseCases};
use crate::error::{DiscoveryResult, ErrorContext, ResultExt};
use crate::traits::RefreshAllGamesUseCase;

/// A controller wired to the demo catalogue through the cache repository.
pub struct DemoDiscovery {
    pub controller: DiscoveryController,
    pub events: mpsc::UnboundedReceiver<DiscoveryEvent>,
}

/// Wire a controller over [`DemoGamesDataStore`].
///
/// Must be called inside a tokio runtime.
pub fn wire_demo(config: DiscoveryConfig, fail_refresh: bool) -> DiscoveryResult<DemoDiscovery> {
    let fetch_timeout_ms = config.fetch_timeout_ms;
    let store = DemoGamesDataStore::new(Duration::from_millis(config.demo_latency_ms))
        .with_failure(fail_refresh);
    let repository = CachedGamesRepository::with_fetch_timeout(
        Arc::new(store),
        Duration::from_millis(fetch_timeout_ms),
    );

    let refresh: Arc<dyn RefreshAllGamesUseCase> = repository.clone();
    let use_cases = DiscoveryUseCases::builder()
        .observe_all(|category| repository.observer(category))
        .refresh_all(refresh)
        .build()
        .context(ErrorContext::new("wire_demo").with_component("startup"))?;

    let (controller, events) = DiscoveryController::builder(use_cases)
        .config(config)
        .build()
        .context(ErrorContext::new("wire_demo").with_component("startup"))?;

    info!(
        fail_refresh,
        fetch_timeout_ms,
        "Demo discovery controller wired"
    );
    Ok(DemoDiscovery { controller, events })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::discovery::DiscoveryCommand;

    #[test]
    fn test_wiring_requires_runtime() {
        let result = wire_demo(DiscoveryConfig::default(), false);
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_slow_demo_refresh_times_out() {
        let config = DiscoveryConfig::default()
            .with_demo_latency_ms(5_000)
            .with_fetch_timeout_ms(20)
            .with_refresh_on_load(false);
        let mut demo = wire_demo(config, false).unwrap();

        demo.controller.refresh_all();
        let event = tokio::time::timeout(Duration::from_secs(2), demo.events.recv())
            .await
            .unwrap();

        assert_eq!(
            event,
            Some(DiscoveryEvent::from(DiscoveryCommand::ShowMessage(
                "The games service took too long to respond.".to_string()
            )))
        );
    }

    #[tokio::test]
    async fn test_wiring_inside_runtime() {
        let demo = wire_demo(DiscoveryConfig::default().with_demo_latency_ms(0), false).unwrap();

        assert!(!demo.controller.is_loading_all());
        assert_eq!(demo.controller.snapshot().len(), 4);
    }
}
