//! Mock observe use case for testing.
//!
//! Every call to `execute` opens a fresh channel; tests push values into the
//! most recent one to drive a category's stream by hand.

use futures::channel::mpsc;
use futures::StreamExt;
use std::sync::{Arc, Mutex};

use crate::error::SourceError;
use crate::models::{Game, ObserveGamesParams};
use crate::traits::{GamesStream, ObserveGamesUseCase};

type GamesSender = mpsc::UnboundedSender<Result<Vec<Game>, SourceError>>;

/// Mock [`ObserveGamesUseCase`] driven from the test.
///
/// # Example
///
/// ```ignore
/// use game_discovery::adapters::mock::MockObserveGames;
///
/// let popular = MockObserveGames::new();
/// let mut stream = popular.execute(&ObserveGamesParams::default());
///
/// popular.emit(vec![Game::new(1, "Hades")]);
/// assert_eq!(stream.next().await.unwrap()?.len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockObserveGames {
    /// One sender per execution, oldest first
    senders: Arc<Mutex<Vec<GamesSender>>>,
    /// Parameters of every execution
    params: Arc<Mutex<Vec<ObserveGamesParams>>>,
    /// Emitted into every new execution before anything else
    initial: Arc<Mutex<Option<Vec<Game>>>>,
}

impl MockObserveGames {
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit `games` as soon as each execution starts.
    pub fn with_initial(self, games: Vec<Game>) -> Self {
        *self.initial.lock().unwrap() = Some(games);
        self
    }

    /// Emit `games` on the latest execution. Returns false if there is none
    /// or its stream was dropped.
    pub fn emit(&self, games: Vec<Game>) -> bool {
        self.send(Ok(games))
    }

    /// End the latest execution with `error`.
    pub fn fail(&self, error: SourceError) -> bool {
        self.send(Err(error))
    }

    /// Complete the latest execution.
    pub fn complete(&self) {
        if let Some(sender) = self.senders.lock().unwrap().last() {
            sender.close_channel();
        }
    }

    /// Number of times `execute` was called.
    pub fn execute_count(&self) -> usize {
        self.params.lock().unwrap().len()
    }

    /// Parameters of the latest execution.
    pub fn last_params(&self) -> Option<ObserveGamesParams> {
        self.params.lock().unwrap().last().copied()
    }

    /// Whether the latest execution's stream has been dropped.
    pub fn is_closed(&self) -> bool {
        self.senders
            .lock()
            .unwrap()
            .last()
            .map_or(true, |sender| sender.is_closed())
    }

    fn send(&self, item: Result<Vec<Game>, SourceError>) -> bool {
        match self.senders.lock().unwrap().last() {
            Some(sender) => sender.unbounded_send(item).is_ok(),
            None => false,
        }
    }
}

impl ObserveGamesUseCase for MockObserveGames {
    fn execute(&self, params: &ObserveGamesParams) -> GamesStream {
        let (tx, rx) = mpsc::unbounded();
        if let Some(games) = self.initial.lock().unwrap().clone() {
            let _ = tx.unbounded_send(Ok(games));
        }
        self.senders.lock().unwrap().push(tx);
        self.params.lock().unwrap().push(*params);
        rx.boxed()
    }
}
