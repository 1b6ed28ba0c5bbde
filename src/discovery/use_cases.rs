//! Use-case wiring for the controller.

use std::collections::HashMap;
use std::sync::Arc;

use crate::error::{DiscoveryError, DiscoveryResult};
use crate::models::{CategoryMap, DiscoveryCategory};
use crate::traits::{ObserveGamesUseCase, RefreshAllGamesUseCase};

/// Every use case the controller needs, resolved per category.
///
/// Built through [`DiscoveryUseCases::builder`], which refuses to produce a
/// value unless every category has an observer and a refresh use case is
/// present. A missing registration is a wiring error reported at
/// construction, never at load time.
#[derive(Clone)]
pub struct DiscoveryUseCases {
    observers: CategoryMap<Arc<dyn ObserveGamesUseCase>>,
    refresh_all: Arc<dyn RefreshAllGamesUseCase>,
}

impl DiscoveryUseCases {
    pub fn builder() -> DiscoveryUseCasesBuilder {
        DiscoveryUseCasesBuilder::default()
    }

    pub fn observers(&self) -> &CategoryMap<Arc<dyn ObserveGamesUseCase>> {
        &self.observers
    }

    pub fn refresh_all(&self) -> &Arc<dyn RefreshAllGamesUseCase> {
        &self.refresh_all
    }
}

impl std::fmt::Debug for DiscoveryUseCases {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiscoveryUseCases")
            .field("observers", &DiscoveryCategory::COUNT)
            .finish_non_exhaustive()
    }
}

/// Collects use-case registrations before they are resolved.
#[derive(Default)]
pub struct DiscoveryUseCasesBuilder {
    observers: HashMap<DiscoveryCategory, Arc<dyn ObserveGamesUseCase>>,
    refresh_all: Option<Arc<dyn RefreshAllGamesUseCase>>,
}

impl DiscoveryUseCasesBuilder {
    /// Register the observer for `category`. A later registration replaces
    /// an earlier one.
    pub fn observe(
        mut self,
        category: DiscoveryCategory,
        use_case: Arc<dyn ObserveGamesUseCase>,
    ) -> Self {
        self.observers.insert(category, use_case);
        self
    }

    /// Register one observer for every category.
    pub fn observe_all<F>(mut self, mut f: F) -> Self
    where
        F: FnMut(DiscoveryCategory) -> Arc<dyn ObserveGamesUseCase>,
    {
        for category in DiscoveryCategory::ALL {
            self.observers.insert(category, f(category));
        }
        self
    }

    pub fn refresh_all(mut self, use_case: Arc<dyn RefreshAllGamesUseCase>) -> Self {
        self.refresh_all = Some(use_case);
        self
    }

    /// Resolve the registrations, failing on the first unwired category
    /// in display order.
    pub fn build(mut self) -> DiscoveryResult<DiscoveryUseCases> {
        let observers = CategoryMap::try_from_fn(|category| {
            self.observers
                .remove(&category)
                .ok_or(DiscoveryError::MissingUseCase { category })
        })?;
        let refresh_all = self
            .refresh_all
            .ok_or(DiscoveryError::MissingRefreshUseCase)?;

        Ok(DiscoveryUseCases {
            observers,
            refresh_all,
        })
    }
}
