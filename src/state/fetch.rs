//! Joke fetch lifecycle

use tokio::task::JoinHandle;

use crate::joke_api::{FetchError, Joke, JokeSource};
use crate::state::StateEvent;
use crate::task::drain_finished;

/// Message shown for every kind of fetch failure
pub const FETCH_ERROR_MESSAGE: &str = "Failed to fetch joke. Try again.";

/// Outcome of the most recent fetch attempt
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FetchState {
    #[default]
    Idle,
    Loading,
    Success(Joke),
    Error(String),
}

type FetchTask = JoinHandle<Result<Joke, FetchError>>;

/// Issues joke requests and tracks their outcome.
///
/// Requests are never cancelled. When several overlap, each completion
/// overwrites the state as it is harvested, so a slow early request can
/// replace the joke of a faster later one. Completions picked up by the same
/// `poll` are applied in request order. Sequence numbers are only used to log
/// when an older response replaces a newer one.
pub struct JokeFetcher<S: JokeSource> {
    source: S,
    state: FetchState,
    /// Outstanding requests tagged with their sequence number
    in_flight: Vec<(u64, FetchTask)>,
    next_seq: u64,
    /// Sequence number of the newest request whose outcome was applied
    newest_applied: Option<u64>,
}

impl<S: JokeSource> JokeFetcher<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            state: FetchState::Idle,
            in_flight: Vec::new(),
            next_seq: 0,
            newest_applied: None,
        }
    }

    pub fn state(&self) -> &FetchState {
        &self.state
    }

    /// The joke currently on display, if the last settled fetch succeeded
    pub fn joke(&self) -> Option<&Joke> {
        match &self.state {
            FetchState::Success(joke) => Some(joke),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.state == FetchState::Loading
    }

    pub fn error(&self) -> Option<&str> {
        match &self.state {
            FetchState::Error(message) => Some(message),
            _ => None,
        }
    }

    /// Whether any request is still outstanding
    pub fn has_pending(&self) -> bool {
        !self.in_flight.is_empty()
    }

    /// Start a new request. The previous joke or error is dropped immediately.
    pub fn fetch_joke(&mut self) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.state = FetchState::Loading;

        if !self.in_flight.is_empty() {
            tracing::debug!(
                "Fetch #{} issued with {} request(s) still outstanding",
                seq,
                self.in_flight.len()
            );
        }

        let source = self.source.clone();
        self.in_flight
            .push((seq, tokio::spawn(async move { source.random_joke().await })));
    }

    /// Apply every request that has finished since the last poll
    pub fn poll(&mut self) -> Vec<StateEvent> {
        let mut events = Vec::new();

        for (seq, result) in drain_finished(&mut self.in_flight) {
            let outcome = match result {
                Ok(outcome) => outcome,
                Err(e) => Err(FetchError::TaskFailed(e.to_string())),
            };
            if let Some(event) = self.settle(seq, outcome) {
                events.push(event);
            }
        }

        events
    }

    /// Move the state out of loading according to one request's outcome
    fn settle(&mut self, seq: u64, outcome: Result<Joke, FetchError>) -> Option<StateEvent> {
        if self.newest_applied.is_some_and(|newest| newest > seq) {
            tracing::warn!(
                "Response for fetch #{} arrived after a newer one and replaces it",
                seq
            );
        }
        self.newest_applied = Some(self.newest_applied.map_or(seq, |newest| newest.max(seq)));

        match outcome {
            Ok(joke) => {
                tracing::info!("Fetched joke #{} ({})", joke.id, joke.kind);
                let message = format!("Loaded joke #{}", joke.id);
                self.state = FetchState::Success(joke);
                Some(StateEvent::StatusMessage(message))
            }
            Err(e) => {
                tracing::error!("Failed to fetch joke (request #{}): {}", seq, e);
                self.state = FetchState::Error(FETCH_ERROR_MESSAGE.to_string());
                Some(StateEvent::StatusMessage(FETCH_ERROR_MESSAGE.to_string()))
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::collections::VecDeque;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;
    use tokio::sync::oneshot;

    pub fn joke(id: u64, setup: &str, punchline: &str) -> Joke {
        Joke {
            id,
            kind: "general".to_string(),
            setup: setup.to_string(),
            punchline: punchline.to_string(),
        }
    }

    /// Joke source whose responses are released by the test
    #[derive(Clone, Default)]
    pub struct ScriptedSource {
        pending: Arc<Mutex<VecDeque<oneshot::Receiver<Result<Joke, FetchError>>>>>,
        calls: Arc<Mutex<usize>>,
    }

    impl ScriptedSource {
        /// Queue a response for the next request; send on the returned handle to deliver it
        pub fn expect(&self) -> oneshot::Sender<Result<Joke, FetchError>> {
            let (tx, rx) = oneshot::channel();
            self.pending.lock().unwrap().push_back(rx);
            tx
        }

        /// Queue a response that is delivered as soon as it is requested
        pub fn respond(&self, outcome: Result<Joke, FetchError>) {
            let _ = self.expect().send(outcome);
        }

        pub fn calls(&self) -> usize {
            *self.calls.lock().unwrap()
        }
    }

    impl JokeSource for ScriptedSource {
        async fn random_joke(&self) -> Result<Joke, FetchError> {
            *self.calls.lock().unwrap() += 1;
            let rx = self.pending.lock().unwrap().pop_front();
            match rx {
                Some(rx) => rx
                    .await
                    .unwrap_or_else(|_| Err(FetchError::TaskFailed("response dropped".into()))),
                None => Err(FetchError::TaskFailed("no scripted response".into())),
            }
        }
    }

    /// Poll until nothing is outstanding
    pub async fn settle_all<S: JokeSource>(fetcher: &mut JokeFetcher<S>) -> Vec<StateEvent> {
        let mut events = Vec::new();
        for _ in 0..1000 {
            events.extend(fetcher.poll());
            if !fetcher.has_pending() {
                return events;
            }
            tokio::task::yield_now().await;
        }
        panic!("fetch never settled");
    }

    /// Poll until `count` more requests have been applied
    async fn settle_n<S: JokeSource>(fetcher: &mut JokeFetcher<S>, count: usize) {
        let mut applied = 0;
        for _ in 0..1000 {
            applied += fetcher.poll().len();
            if applied >= count {
                return;
            }
            tokio::task::yield_now().await;
        }
        panic!("fetch never settled");
    }

    #[test]
    fn test_starts_idle() {
        let fetcher = JokeFetcher::new(ScriptedSource::default());
        assert_eq!(fetcher.state(), &FetchState::Idle);
        assert!(!fetcher.is_loading());
        assert!(fetcher.joke().is_none());
        assert!(fetcher.error().is_none());
    }

    #[tokio::test]
    async fn test_success_sets_joke() {
        let source = ScriptedSource::default();
        source.respond(Ok(joke(1, "S", "P")));
        let mut fetcher = JokeFetcher::new(source.clone());

        fetcher.fetch_joke();
        assert!(fetcher.is_loading());

        let events = settle_all(&mut fetcher).await;
        assert_eq!(fetcher.state(), &FetchState::Success(joke(1, "S", "P")));
        assert!(!fetcher.is_loading());
        assert_eq!(events.len(), 1);
        assert_eq!(source.calls(), 1);
    }

    #[tokio::test]
    async fn test_http_error_discards_previous_joke() {
        let source = ScriptedSource::default();
        source.respond(Ok(joke(1, "S", "P")));
        source.respond(Err(FetchError::Status { status: 500 }));
        let mut fetcher = JokeFetcher::new(source);

        fetcher.fetch_joke();
        settle_all(&mut fetcher).await;
        assert!(fetcher.joke().is_some());

        fetcher.fetch_joke();
        settle_all(&mut fetcher).await;
        assert_eq!(
            fetcher.state(),
            &FetchState::Error(FETCH_ERROR_MESSAGE.to_string())
        );
        assert!(fetcher.joke().is_none());
    }

    #[tokio::test]
    async fn test_malformed_body_is_an_error() {
        let source = ScriptedSource::default();
        let parse_err = serde_json::from_str::<Joke>(r#"{"id":1}"#).unwrap_err();
        source.respond(Err(FetchError::Malformed(parse_err)));
        let mut fetcher = JokeFetcher::new(source);

        fetcher.fetch_joke();
        settle_all(&mut fetcher).await;
        assert_eq!(fetcher.error(), Some(FETCH_ERROR_MESSAGE));
    }

    #[tokio::test]
    async fn test_new_fetch_clears_joke_while_loading() {
        let source = ScriptedSource::default();
        source.respond(Ok(joke(1, "S", "P")));
        let second = source.expect();
        let mut fetcher = JokeFetcher::new(source);

        fetcher.fetch_joke();
        settle_all(&mut fetcher).await;

        fetcher.fetch_joke();
        assert!(fetcher.is_loading());
        assert!(fetcher.joke().is_none());

        second.send(Ok(joke(2, "S2", "P2"))).unwrap();
        settle_all(&mut fetcher).await;
        assert_eq!(fetcher.joke().map(|j| j.id), Some(2));
    }

    #[tokio::test]
    async fn test_overlapping_fetches_last_arrival_wins() {
        let source = ScriptedSource::default();
        let first = source.expect();
        let second = source.expect();
        let mut fetcher = JokeFetcher::new(source);

        fetcher.fetch_joke();
        fetcher.fetch_joke();

        // Newer request resolves first, older one afterwards.
        second.send(Ok(joke(2, "newer", "p"))).unwrap();
        settle_n(&mut fetcher, 1).await;
        assert_eq!(fetcher.joke().map(|j| j.id), Some(2));
        assert!(fetcher.has_pending());

        first.send(Ok(joke(1, "older", "p"))).unwrap();
        settle_all(&mut fetcher).await;
        assert_eq!(fetcher.joke().map(|j| j.id), Some(1));
    }

    #[test]
    fn test_repeated_fetches_from_blocking_ui_loop_always_settle() {
        let rt = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()
            .unwrap();

        // The window polls synchronously from inside one long block_on.
        rt.block_on(async {
            let source = ScriptedSource::default();
            let mut fetcher = JokeFetcher::new(source.clone());

            for id in 0..200 {
                source.respond(Ok(joke(id, "S", "P")));
                fetcher.fetch_joke();

                let mut spins = 0;
                while fetcher.has_pending() {
                    fetcher.poll();
                    spins += 1;
                    assert!(spins < 5000, "fetch #{} never settled", id);
                    std::thread::sleep(Duration::from_millis(1));
                }

                assert!(!fetcher.is_loading(), "fetch #{} stuck in loading", id);
                assert_eq!(fetcher.joke().map(|j| j.id), Some(id));
            }
        });
    }

    #[tokio::test]
    async fn test_panicking_source_settles_to_error() {
        #[derive(Clone)]
        struct PanicSource;

        impl JokeSource for PanicSource {
            async fn random_joke(&self) -> Result<Joke, FetchError> {
                panic!("source exploded");
            }
        }

        let mut fetcher = JokeFetcher::new(PanicSource);
        fetcher.fetch_joke();
        settle_all(&mut fetcher).await;
        assert_eq!(fetcher.error(), Some(FETCH_ERROR_MESSAGE));
    }
}
