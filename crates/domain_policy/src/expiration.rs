//! Policy expiration scanning
//!
//! Each scan selects policies that have run out and are still pending,
//! flips them to notified in one batch write, and logs one line per policy.
//! A policy is reported at most once: the selection skips notified rows and
//! the batch write only changes rows that are still pending.
//!
//! [`ExpirationWorker`] runs the scan on a fixed cadence in its own tokio
//! task, independent of request traffic.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};
use tracing::{debug, error, info, warn};

use core_kernel::{Clock, PolicyId};

use crate::error::PolicyError;
use crate::policy::InsurancePolicy;
use crate::ports::PolicyPort;

const DEFAULT_INTERVAL: Duration = Duration::from_secs(10);

/// Which expired policies a scan picks up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpirationWindow {
    /// Only policies whose last day was yesterday
    ExactDay,
    /// Every pending policy whose last day is before today, so days missed
    /// while the service was down are picked up on the next scan
    #[default]
    CatchUp,
}

impl fmt::Display for ExpirationWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExpirationWindow::ExactDay => f.write_str("exact_day"),
            ExpirationWindow::CatchUp => f.write_str("catch_up"),
        }
    }
}

impl FromStr for ExpirationWindow {
    type Err = PolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "exact_day" => Ok(ExpirationWindow::ExactDay),
            "catch_up" => Ok(ExpirationWindow::CatchUp),
            other => Err(PolicyError::Validation(format!(
                "Unknown expiration window '{}', expected exact_day or catch_up",
                other
            ))),
        }
    }
}

/// Selection rule for one scan, evaluated against a fixed `today`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpirationCriteria {
    pub window: ExpirationWindow,
    pub today: NaiveDate,
}

impl ExpirationCriteria {
    pub fn new(window: ExpirationWindow, today: NaiveDate) -> Self {
        Self { window, today }
    }

    pub fn yesterday(&self) -> NaiveDate {
        self.today.checked_sub_days(Days::new(1)).unwrap_or(self.today)
    }

    /// Returns true if the policy is pending and expired under this rule
    pub fn matches(&self, policy: &InsurancePolicy) -> bool {
        if policy.notified {
            return false;
        }
        match self.window {
            ExpirationWindow::ExactDay => policy.end_date == self.yesterday(),
            ExpirationWindow::CatchUp => policy.end_date < self.today,
        }
    }
}

/// What a scan changed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpirationReport {
    pub as_of: NaiveDate,
    pub window: ExpirationWindow,
    /// Policies flipped to notified by this scan, in selection order
    pub transitioned: Vec<PolicyId>,
}

impl ExpirationReport {
    pub fn count(&self) -> usize {
        self.transitioned.len()
    }
}

/// Selects and marks expired policies
#[derive(Debug, Clone, Copy, Default)]
pub struct ExpirationScanner {
    window: ExpirationWindow,
}

impl ExpirationScanner {
    pub fn new(window: ExpirationWindow) -> Self {
        Self { window }
    }

    pub fn window(&self) -> ExpirationWindow {
        self.window
    }

    /// Runs one scan as of `today`
    ///
    /// A failed batch write is returned as an error and leaves every policy
    /// pending; the next scan selects them again.
    pub async fn scan(
        &self,
        port: &dyn PolicyPort,
        today: NaiveDate,
    ) -> Result<ExpirationReport, PolicyError> {
        let criteria = ExpirationCriteria::new(self.window, today);
        let expired = port.find_pending_expired(&criteria).await?;

        if expired.is_empty() {
            info!("No new policies expired.");
            return Ok(ExpirationReport {
                as_of: today,
                window: self.window,
                transitioned: Vec::new(),
            });
        }

        let ids: Vec<PolicyId> = expired.iter().map(|p| p.id).collect();
        let changed = port.mark_notified(&ids).await?;
        if changed.len() != ids.len() {
            debug!(
                selected = ids.len(),
                changed = changed.len(),
                "Some policies were already notified"
            );
        }

        let transitioned: Vec<PolicyId> =
            ids.into_iter().filter(|id| changed.contains(id)).collect();

        for policy in expired.iter().filter(|p| transitioned.contains(&p.id)) {
            warn!(
                "[EXPIRATION] Policy {} for car {} (Provider: {}) expired on {}.",
                policy.id,
                policy.car_id,
                policy.provider,
                policy.end_date.format("%Y-%m-%d")
            );
        }
        if transitioned.is_empty() {
            info!("No new policies expired.");
        } else {
            info!(
                "Processed and marked {} expired policies as notified.",
                transitioned.len()
            );
        }

        Ok(ExpirationReport {
            as_of: today,
            window: self.window,
            transitioned,
        })
    }
}

/// Settings for [`ExpirationWorker`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpirationWorkerConfig {
    pub interval: Duration,
    pub window: ExpirationWindow,
}

impl Default for ExpirationWorkerConfig {
    fn default() -> Self {
        Self {
            interval: DEFAULT_INTERVAL,
            window: ExpirationWindow::default(),
        }
    }
}

/// Periodic driver for [`ExpirationScanner`]
///
/// The first scan runs as soon as the worker starts. Ticks that fall behind
/// are delayed rather than bunched up.
pub struct ExpirationWorker {
    scanner: ExpirationScanner,
    interval: Duration,
    clock: Arc<dyn Clock>,
}

impl ExpirationWorker {
    /// A zero interval is treated as the default interval
    pub fn new(config: ExpirationWorkerConfig, clock: Arc<dyn Clock>) -> Self {
        let interval = if config.interval.is_zero() {
            DEFAULT_INTERVAL
        } else {
            config.interval
        };
        Self {
            scanner: ExpirationScanner::new(config.window),
            interval,
            clock,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Runs a single scan as of the clock's current date
    pub async fn run_once(&self, port: &dyn PolicyPort) -> Result<ExpirationReport, PolicyError> {
        self.scanner.scan(port, self.clock.today()).await
    }

    /// Spawns the worker task
    ///
    /// Shutdown is only observed between scans, so a batch write in flight
    /// always completes.
    pub fn start(self, port: Arc<dyn PolicyPort>) -> ExpirationWorkerHandle {
        let (shutdown_tx, mut shutdown_rx) = watch::channel(false);

        let task = tokio::spawn(async move {
            let mut ticker = interval(self.interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            info!(
                interval_secs = self.interval.as_secs_f64(),
                window = %self.scanner.window(),
                "Expiration worker started"
            );

            loop {
                tokio::select! {
                    _ = shutdown_rx.changed() => {
                        break;
                    }
                    _ = ticker.tick() => {
                        match self.run_once(port.as_ref()).await {
                            Ok(report) => {
                                debug!(as_of = %report.as_of, transitioned = report.count(), "Expiration scan completed");
                            }
                            Err(e) => {
                                error!(error = %e, "Expiration scan failed");
                            }
                        }
                    }
                }
            }

            info!("Expiration worker stopped");
        });

        ExpirationWorkerHandle {
            shutdown: shutdown_tx,
            task,
        }
    }
}

/// Handle to a running [`ExpirationWorker`]
pub struct ExpirationWorkerHandle {
    shutdown: watch::Sender<bool>,
    task: JoinHandle<()>,
}

impl ExpirationWorkerHandle {
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Signals shutdown and waits for the task to exit
    pub async fn stop(self) {
        let _ = self.shutdown.send(true);
        if let Err(e) = self.task.await {
            error!(error = %e, "Expiration worker task ended abnormally");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::NewPolicy;
    use core_kernel::CarId;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn ending_on(end: NaiveDate, notified: bool) -> InsurancePolicy {
        let start = end.checked_sub_days(Days::new(30)).unwrap();
        let mut policy =
            InsurancePolicy::register(CarId::new(), NewPolicy::new("Allianz", start, end).unwrap());
        policy.notified = notified;
        policy
    }

    #[test]
    fn test_exact_day_only_matches_yesterday() {
        let criteria = ExpirationCriteria::new(ExpirationWindow::ExactDay, date(2025, 6, 10));
        assert!(criteria.matches(&ending_on(date(2025, 6, 9), false)));
        assert!(!criteria.matches(&ending_on(date(2025, 6, 7), false)));
        assert!(!criteria.matches(&ending_on(date(2025, 6, 10), false)));
        assert!(!criteria.matches(&ending_on(date(2025, 6, 9), true)));
    }

    #[test]
    fn test_yesterday_crosses_month_boundary() {
        let criteria = ExpirationCriteria::new(ExpirationWindow::ExactDay, date(2025, 3, 1));
        assert_eq!(criteria.yesterday(), date(2025, 2, 28));
        assert!(criteria.matches(&ending_on(date(2025, 2, 28), false)));
    }

    #[test]
    fn test_catch_up_matches_anything_before_today() {
        let criteria = ExpirationCriteria::new(ExpirationWindow::CatchUp, date(2025, 6, 10));
        assert!(criteria.matches(&ending_on(date(2025, 6, 9), false)));
        assert!(criteria.matches(&ending_on(date(2025, 6, 7), false)));
        assert!(!criteria.matches(&ending_on(date(2025, 6, 10), false)));
        assert!(!criteria.matches(&ending_on(date(2025, 6, 7), true)));
    }

    #[test]
    fn test_window_parsing() {
        assert_eq!("exact_day".parse::<ExpirationWindow>().unwrap(), ExpirationWindow::ExactDay);
        assert_eq!("Catch-Up".parse::<ExpirationWindow>().unwrap(), ExpirationWindow::CatchUp);
        assert!("weekly".parse::<ExpirationWindow>().is_err());
        assert_eq!(ExpirationWindow::default(), ExpirationWindow::CatchUp);
    }

    #[test]
    fn test_zero_interval_falls_back_to_default() {
        let config = ExpirationWorkerConfig {
            interval: Duration::ZERO,
            window: ExpirationWindow::ExactDay,
        };
        let worker = ExpirationWorker::new(config, Arc::new(core_kernel::SystemClock));
        assert_eq!(worker.interval(), DEFAULT_INTERVAL);
    }
}
