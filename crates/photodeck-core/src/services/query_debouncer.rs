//! Debounces raw text-changed events into query submissions.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::debug;

use super::search_coordinator::SearchCoordinator;

/// Forwards typed text to [`SearchCoordinator::submit_query`] once the input
/// has been quiet for the configured window. Only the last text of a burst
/// is submitted.
///
/// Dropping the debouncer discards any pending text.
pub struct QueryDebouncer {
    tx: mpsc::UnboundedSender<String>,
    task: JoinHandle<()>,
}

impl QueryDebouncer {
    /// Start the debounce loop. Must be called from within a tokio runtime.
    pub fn spawn(coordinator: Arc<SearchCoordinator>, window: Duration) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let task = tokio::spawn(run(coordinator, window, rx));
        Self { tx, task }
    }

    /// Report a text change from the search field.
    pub fn text_changed(&self, text: impl Into<String>) {
        // Only fails once the loop is gone, at which point there is nothing to notify.
        let _ = self.tx.send(text.into());
    }
}

impl Drop for QueryDebouncer {
    fn drop(&mut self) {
        self.task.abort();
    }
}

async fn run(
    coordinator: Arc<SearchCoordinator>,
    window: Duration,
    mut rx: mpsc::UnboundedReceiver<String>,
) {
    let mut pending: Option<String> = None;
    loop {
        let Some(text) = pending.take() else {
            match rx.recv().await {
                Some(text) => pending = Some(text),
                None => break,
            }
            continue;
        };

        tokio::select! {
            next = rx.recv() => match next {
                Some(next) => pending = Some(next),
                None => break,
            },
            () = tokio::time::sleep(window) => {
                debug!(text = %text, "Input settled, submitting query");
                coordinator.submit_query(&text);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SearchConfig;
    use crate::domain::{PhotoPage, sample_photo};
    use crate::ports::MockPhotoApiPort;
    use crate::services::{PhotoService, SearchPhase};
    use crate::testing::MemoryStores;
    use std::sync::Mutex;

    const WINDOW: Duration = Duration::from_millis(500);

    fn recording_api(calls: Arc<Mutex<Vec<String>>>) -> MockPhotoApiPort {
        let mut api = MockPhotoApiPort::new();
        api.expect_search().returning(move |query, page, per_page| {
            calls.lock().unwrap().push(query.to_string());
            Ok(PhotoPage {
                page,
                per_page,
                photos: vec![sample_photo(1)],
            })
        });
        api
    }

    fn setup(calls: &Arc<Mutex<Vec<String>>>) -> (Arc<SearchCoordinator>, QueryDebouncer) {
        let stores = MemoryStores::new();
        let service = Arc::new(PhotoService::new(
            Arc::new(recording_api(calls.clone())),
            stores.repos(),
        ));
        let coordinator = Arc::new(SearchCoordinator::new(service, &SearchConfig::default()));
        let debouncer = QueryDebouncer::spawn(coordinator.clone(), WINDOW);
        (coordinator, debouncer)
    }

    #[tokio::test(start_paused = true)]
    async fn test_burst_submits_last_text_once() {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let (coordinator, debouncer) = setup(&calls);

        for text in ["c", "ca", "cat", "cats"] {
            debouncer.text_changed(text);
        }
        tokio::time::sleep(Duration::from_millis(600)).await;

        let state = coordinator.snapshot();
        assert_eq!(state.phase, SearchPhase::Loaded);
        assert_eq!(state.query.as_deref(), Some("cats"));
        assert_eq!(*calls.lock().unwrap(), vec!["cats".to_string()]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_typing_within_window_postpones_submission() {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let (coordinator, debouncer) = setup(&calls);

        debouncer.text_changed("sea");
        tokio::time::sleep(Duration::from_millis(300)).await;
        debouncer.text_changed("sunset");
        tokio::time::sleep(Duration::from_millis(300)).await;

        assert_eq!(coordinator.snapshot().phase, SearchPhase::Idle);
        assert!(calls.lock().unwrap().is_empty());

        tokio::time::sleep(Duration::from_millis(300)).await;
        assert_eq!(coordinator.snapshot().query.as_deref(), Some("sunset"));
        assert_eq!(calls.lock().unwrap().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_settled_blank_text_clears_results() {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let (coordinator, debouncer) = setup(&calls);

        debouncer.text_changed("forest");
        tokio::time::sleep(Duration::from_millis(600)).await;
        assert_eq!(coordinator.snapshot().photos.len(), 1);

        debouncer.text_changed("  ");
        tokio::time::sleep(Duration::from_millis(600)).await;

        assert_eq!(coordinator.snapshot().phase, SearchPhase::Idle);
        assert_eq!(calls.lock().unwrap().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropping_debouncer_discards_pending_text() {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let (coordinator, debouncer) = setup(&calls);

        debouncer.text_changed("mountain");
        drop(debouncer);
        tokio::time::sleep(Duration::from_secs(1)).await;

        assert_eq!(coordinator.snapshot().phase, SearchPhase::Idle);
        assert!(calls.lock().unwrap().is_empty());
    }
}
