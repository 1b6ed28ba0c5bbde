//! Per-category data operations consumed by the controller.

use async_trait::async_trait;
use futures::stream::BoxStream;

use crate::error::SourceError;
use crate::models::{Game, ObserveGamesParams, RefreshGamesParams};

/// Live sequence of a category's games.
///
/// May emit any number of times (cached data first, refreshed data later)
/// and may end with an error.
pub type GamesStream = BoxStream<'static, Result<Vec<Game>, SourceError>>;

/// Observes the games of a single category.
///
/// `execute` must be lazy and restartable: every call returns a fresh,
/// independent stream, and nothing happens until that stream is polled.
///
/// # Example
///
/// ```ignore
/// use futures::StreamExt;
///
/// let mut games = use_case.execute(&ObserveGamesParams::default());
/// while let Some(page) = games.next().await {
///     println!("{} games", page?.len());
/// }
/// ```
pub trait ObserveGamesUseCase: Send + Sync {
    fn execute(&self, params: &ObserveGamesParams) -> GamesStream;
}

/// Re-populates every category from the upstream provider.
///
/// Treated as one unit of work with a single outcome, even if the
/// implementation refreshes categories separately.
#[async_trait]
pub trait RefreshAllGamesUseCase: Send + Sync {
    async fn execute(&self, params: &RefreshGamesParams) -> Result<(), SourceError>;
}
