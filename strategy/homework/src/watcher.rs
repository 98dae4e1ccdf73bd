//! Poll loop: fetch, validate, render, notify, sleep.

use chrono::{DateTime, Local};
use tracing::{debug, error, info};

use crate::config::WatcherConfig;
use crate::error::CycleError;
use crate::response::extract_latest;
use crate::traits::{Notifier, ReviewSource};
use crate::types::{CycleOutcome, PollState};
use crate::verdict::{render_failure, render_status};

/// Homework status watcher
///
/// Owns the only piece of cross-cycle state, the text of the last message it
/// tried to send, and uses it to suppress duplicates.
pub struct HomeworkWatcher<S, N> {
    /// Loop interval and reporting policy
    config: WatcherConfig,
    /// Review API client
    source: S,
    /// Chat client
    notifier: N,
    state: PollState,
}

impl<S, N> HomeworkWatcher<S, N>
where
    S: ReviewSource,
    N: Notifier,
{
    /// Creates a new `HomeworkWatcher` with empty state
    ///
    /// # Arguments
    /// * `config` - Loop interval and reporting policy
    /// * `source` - Where review responses come from
    /// * `notifier` - Where messages go
    pub fn new(config: WatcherConfig, source: S, notifier: N) -> Self {
        Self {
            config,
            source,
            notifier,
            state: PollState::default(),
        }
    }

    pub fn state(&self) -> &PollState {
        &self.state
    }

    /// Sends the "started" message and makes it the last notified text.
    ///
    /// A failed send is logged; the state is seeded either way.
    pub async fn announce_start(&mut self, started_at: DateTime<Local>) {
        let text = format!("Запущен: {}", utils::format_local_datetime(started_at));
        self.deliver(&text).await;
        self.state.record(text);
    }

    /// Runs one poll cycle without sleeping.
    ///
    /// # Arguments
    /// * `now` - Current Unix time in seconds; the request asks for changes since
    ///   `now - retry_interval`
    ///
    /// # Returns
    /// What the cycle did. Failures are reported and folded into the outcome, never returned.
    pub async fn run_cycle(&mut self, now: i64) -> CycleOutcome {
        let result = self.poll(now).await;
        match result {
            Ok(None) => {
                info!("no submissions changed since the last poll");
                CycleOutcome::NoSubmissions
            }
            Ok(Some(text)) if !self.state.is_new(&text) => {
                debug!("status unchanged, nothing to send");
                CycleOutcome::Unchanged
            }
            Ok(Some(text)) => {
                info!("homework status changed, sending notification");
                let delivered = self.deliver(&text).await;
                // Recorded even on failure so an unreachable chat is not retried every cycle.
                self.state.record(text.clone());
                CycleOutcome::Notified { text, delivered }
            }
            Err(error) => self.report_failure(error).await,
        }
    }

    /// Runs one cycle, then sleeps for the retry interval whatever the outcome.
    pub async fn tick(&mut self) -> CycleOutcome {
        let outcome = self.run_cycle(utils::unix_timestamp_secs()).await;
        tokio::time::sleep(self.config.retry_interval).await;
        outcome
    }

    /// Announces startup if configured, then polls until the process is killed.
    pub async fn run(mut self) {
        if self.config.announce_start {
            self.announce_start(Local::now()).await;
        }
        info!(
            interval_secs = self.config.retry_interval.as_secs(),
            "watching homework statuses"
        );
        loop {
            self.tick().await;
        }
    }

    async fn poll(&self, now: i64) -> Result<Option<String>, CycleError> {
        let lookback = i64::try_from(self.config.retry_interval.as_secs()).unwrap_or(i64::MAX);
        let from_date = now.saturating_sub(lookback);
        let response = self.source.fetch_answer(from_date).await?;
        match extract_latest(&response)? {
            Some(record) => render_status(&record).map(Some),
            None => Ok(None),
        }
    }

    async fn report_failure(&mut self, error: CycleError) -> CycleOutcome {
        let text = render_failure(&error);
        error!(error = %error, "poll cycle failed");

        if self.config.suppress_repeated_errors && !self.state.is_new(&text) {
            debug!("failure already reported, not sending again");
            return CycleOutcome::Failed {
                error,
                reported: false,
            };
        }

        let reported = self.deliver(&text).await;
        self.state.record(text);
        CycleOutcome::Failed { error, reported }
    }

    async fn deliver(&self, text: &str) -> bool {
        match self.notifier.notify(text).await {
            Ok(()) => {
                debug!("message delivered");
                true
            }
            Err(err) => {
                error!(error = %err, "failed to deliver message");
                false
            }
        }
    }
}
