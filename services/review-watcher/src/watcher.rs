//! Watcher: the poll-evaluate-notify loop

use std::time::Duration;

use tokio_util::sync::CancellationToken;

use crate::notifier::Notifier;
use crate::practicum::PracticumClient;
use crate::tracker::ChangeTracker;
use crate::{response, status, WatcherError};

/// What a single poll iteration did
#[derive(Debug)]
pub enum Iteration {
    /// A new status message was produced and handed to the notifier
    Notified(String),
    /// The latest homework still has the message that was already sent
    Unchanged(String),
    /// The response carried no homeworks
    NoHomeworks,
    /// Fetching or describing the homework failed
    Failed {
        error: WatcherError,
        reported: bool,
    },
}

/// Cursor for the first request: one interval before `now`
pub fn initial_cursor(now: i64, retry_interval: Duration) -> i64 {
    let interval = i64::try_from(retry_interval.as_secs()).unwrap_or(i64::MAX);
    now.saturating_sub(interval)
}

/// Polls the homework API on a fixed interval and notifies about status changes
#[derive(Debug)]
pub struct Watcher {
    client: PracticumClient,
    notifier: Notifier,
    tracker: ChangeTracker,
    cursor: i64,
    retry_interval: Duration,
    cancel: CancellationToken,
}

impl Watcher {
    pub fn new(
        client: PracticumClient,
        notifier: Notifier,
        cursor: i64,
        retry_interval: Duration,
        cancel: CancellationToken,
    ) -> Self {
        Self {
            client,
            notifier,
            tracker: ChangeTracker::new(),
            cursor,
            retry_interval,
            cancel,
        }
    }

    /// Start of the next query window
    pub fn cursor(&self) -> i64 {
        self.cursor
    }

    pub fn tracker(&self) -> &ChangeTracker {
        &self.tracker
    }

    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// Run one iteration: fetch, evaluate, and notify if anything changed.
    ///
    /// Never fails; errors are logged and reported through the notifier once
    /// per distinct failure.
    pub async fn poll_once(&mut self) -> Iteration {
        match self.evaluate().await {
            Ok(Some(message)) => {
                if self.tracker.should_emit(&message) {
                    tracing::info!("{}", message);
                    self.notifier.send(&message).await;
                    Iteration::Notified(message)
                } else {
                    tracing::debug!("Прежняя информация: {}", message);
                    Iteration::Unchanged(message)
                }
            }
            Ok(None) => {
                tracing::debug!("Новых статусов нет");
                Iteration::NoHomeworks
            }
            Err(error) => {
                let message = format!("Сбой в работе программы: {}", error);
                tracing::error!("{}", message);
                let reported = self.tracker.should_report(&error);
                if reported {
                    self.notifier.send(&message).await;
                } else {
                    tracing::debug!("Сбой уже был отправлен, повтор пропущен");
                }
                Iteration::Failed { error, reported }
            }
        }
    }

    async fn evaluate(&mut self) -> crate::Result<Option<String>> {
        let body = self.client.fetch(Some(self.cursor)).await?;
        let parsed = response::parse(&body);
        if let Some(current_date) = parsed.current_date {
            self.cursor = current_date;
        }

        let Some(latest) = parsed.homeworks.first() else {
            return Ok(None);
        };
        status::extract(latest).map(Some)
    }

    /// Poll forever, sleeping one retry interval after every iteration.
    /// Returns when the cancellation token is triggered.
    pub async fn run(&mut self) {
        loop {
            let iteration = self.poll_once().await;
            tracing::debug!(
                "Iteration finished: {:?}, next cursor {}",
                iteration,
                self.cursor
            );

            tokio::select! {
                _ = tokio::time::sleep(self.retry_interval) => {}
                _ = self.cancel.cancelled() => {
                    tracing::debug!("Polling loop cancelled");
                    break;
                }
            }
        }
    }

    /// Run until Ctrl-C or external cancellation
    pub async fn start(mut self) -> crate::Result<()> {
        let cancel_for_signal = self.cancel.clone();
        tokio::spawn(async move {
            match tokio::signal::ctrl_c().await {
                Ok(()) => tracing::info!("Shutdown signal received"),
                Err(e) => {
                    tracing::warn!("Failed to listen for ctrl-c: {}", e);
                    return;
                }
            }
            cancel_for_signal.cancel();
        });

        tracing::info!(
            "Watcher started, polling every {:?} from {}",
            self.retry_interval,
            self.cursor
        );
        self.run().await;
        tracing::info!("Watcher stopped");
        Ok(())
    }
}
