//! In-memory cache in front of a [`GamesDataStore`].
//!
//! Observers read from the cache and re-emit whenever it changes; the bulk
//! refresh queries the store for every category and replaces the cache in one
//! step. This gives the controller the "cached first, fresh later" sequence
//! it expects from an offline-first repository.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use futures::future::try_join_all;
use futures::stream::{self, StreamExt};
use tokio::sync::watch;
use tracing::{debug, info};

use crate::error::SourceError;
use crate::models::{
    CategoryMap, DiscoveryCategory, Game, ObserveGamesParams, Pagination, RefreshGamesParams,
};
use crate::traits::{GamesDataStore, GamesStream, ObserveGamesUseCase, RefreshAllGamesUseCase};

/// Per-category games cache filled from an upstream [`GamesDataStore`].
pub struct CachedGamesRepository {
    store: Arc<dyn GamesDataStore>,
    /// Upper bound for each upstream fetch during a refresh
    fetch_timeout: Option<Duration>,
    caches: CategoryMap<watch::Sender<Vec<Game>>>,
    last_refreshed: Mutex<Option<DateTime<Utc>>>,
}

impl CachedGamesRepository {
    pub fn new(store: Arc<dyn GamesDataStore>) -> Arc<Self> {
        Self::build(store, None)
    }

    /// Like [`CachedGamesRepository::new`], but a fetch that takes longer
    /// than `timeout` fails the refresh with [`SourceError::Timeout`].
    pub fn with_fetch_timeout(store: Arc<dyn GamesDataStore>, timeout: Duration) -> Arc<Self> {
        Self::build(store, Some(timeout))
    }

    fn build(store: Arc<dyn GamesDataStore>, fetch_timeout: Option<Duration>) -> Arc<Self> {
        Arc::new(Self {
            store,
            fetch_timeout,
            caches: CategoryMap::from_fn(|_| watch::channel(Vec::new()).0),
            last_refreshed: Mutex::new(None),
        })
    }

    /// Observe use case for one category.
    pub fn observer(self: &Arc<Self>, category: DiscoveryCategory) -> Arc<dyn ObserveGamesUseCase> {
        Arc::new(CategoryObserver {
            repository: Arc::clone(self),
            category,
        })
    }

    /// Replace a category's cached games without going upstream.
    pub fn seed(&self, category: DiscoveryCategory, games: Vec<Game>) {
        self.caches.get(category).send_replace(games);
    }

    /// Cached games of a category.
    pub fn cached(&self, category: DiscoveryCategory) -> Vec<Game> {
        self.caches.get(category).borrow().clone()
    }

    /// Time of the last successful refresh.
    pub fn last_refreshed(&self) -> Option<DateTime<Utc>> {
        self.last_refreshed.lock().ok().and_then(|guard| *guard)
    }

    async fn fetch(
        &self,
        category: DiscoveryCategory,
        pagination: Pagination,
    ) -> Result<Vec<Game>, SourceError> {
        let fetch = self.store.get_games(category, pagination);
        match self.fetch_timeout {
            Some(limit) => tokio::time::timeout(limit, fetch)
                .await
                .map_err(|_| SourceError::timeout(format!("refresh {category}")))?,
            None => fetch.await,
        }
    }

    fn subscribe(&self, category: DiscoveryCategory) -> watch::Receiver<Vec<Game>> {
        self.caches.get(category).subscribe()
    }
}

#[async_trait]
impl RefreshAllGamesUseCase for CachedGamesRepository {
    /// Fetch every category, then write them all. A single failed fetch
    /// leaves the whole cache untouched.
    async fn execute(&self, params: &RefreshGamesParams) -> Result<(), SourceError> {
        let pagination = params.pagination;
        let fetches = DiscoveryCategory::ALL
            .into_iter()
            .map(|category| self.fetch(category, pagination));
        let pages = try_join_all(fetches).await?;

        for (category, games) in DiscoveryCategory::ALL.into_iter().zip(pages) {
            debug!(%category, count = games.len(), "Caching refreshed games");
            self.seed(category, games);
        }
        if let Ok(mut last) = self.last_refreshed.lock() {
            *last = Some(Utc::now());
        }
        info!("Games cache refreshed");
        Ok(())
    }
}

/// Emits the cached page of one category, then again on every change.
struct CategoryObserver {
    repository: Arc<CachedGamesRepository>,
    category: DiscoveryCategory,
}

impl ObserveGamesUseCase for CategoryObserver {
    fn execute(&self, params: &ObserveGamesParams) -> GamesStream {
        let pagination = params.pagination;
        let rx = self.repository.subscribe(self.category);

        stream::unfold((rx, true), move |(mut rx, first)| async move {
            // Ends once the repository is gone
            if !first && rx.changed().await.is_err() {
                return None;
            }
            let page = {
                let cached = rx.borrow_and_update();
                pagination.apply(cached.as_slice())
            };
            Some((Ok(page), (rx, false)))
        })
        .boxed()
    }
}
