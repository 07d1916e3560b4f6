//! Inactivity supervisor for Connectify.
//!
//! Watches the last-activity marker while a session is active and raises
//! an [`IdleTimeout`] exactly once when the user has been idle past the
//! threshold (5 minutes by default, swept every 60 seconds). The caller
//! decides what a timeout means — in practice, logging the session out.
//!
//! # Integration
//!
//! The supervisor runs as a spawned task behind an [`IdleHandle`]. Wire
//! interaction events into [`IdleHandle::record`], await the returned
//! timeout signal somewhere, and shut the handle down on logout:
//!
//! ```ignore
//! let (handle, timed_out) = IdleSupervisor::spawn(IdleConfig::default(), store);
//! handle.record(ActivitySignal::Click);
//! if timed_out.await.is_ok() {
//!     // idle past the threshold — force a logout
//! }
//! handle.shutdown().await;
//! ```
//!
//! This is a level-triggered supervisor: one idle episode produces one
//! timeout, after which the task stops until a new session spawns a new
//! supervisor. Shutting down (or just dropping every handle) releases the
//! sweep timer — nothing leaks across repeated login/logout cycles.

use std::fmt;
use std::time::Duration;

use chrono::Utc;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tokio::time::{self, Instant as TokioInstant, MissedTickBehavior};
use tracing::{debug, info, trace, warn};

use connectify_storage::{KeyValueMedium, SessionStore};

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Timing for the idle supervisor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdleConfig {
    /// How long the user may be inactive before the session is cut.
    pub idle_after: Duration,
    /// How often the supervisor compares the clock against the
    /// last-activity marker. Idle is detected at sweep granularity, not
    /// the instant the threshold passes.
    pub check_interval: Duration,
}

impl IdleConfig {
    /// Default idle threshold: five minutes.
    pub const DEFAULT_IDLE_AFTER: Duration = Duration::from_secs(5 * 60);

    /// Default sweep interval: one minute.
    pub const DEFAULT_CHECK_INTERVAL: Duration = Duration::from_secs(60);

    /// Clamp and fix any unusable values so the config is safe to run.
    ///
    /// Called automatically by [`IdleSupervisor::spawn`]. Rules:
    /// - a zero `check_interval` becomes one second (a zero-period timer
    ///   cannot be scheduled);
    /// - a zero `idle_after` becomes one second;
    /// - `check_interval` is forced ≤ `idle_after`, so an idle episode is
    ///   detected within one threshold of when it began.
    pub fn validated(mut self) -> Self {
        if self.check_interval.is_zero() {
            warn!("idle check_interval of zero — clamping to 1s");
            self.check_interval = Duration::from_secs(1);
        }
        if self.idle_after.is_zero() {
            warn!("idle_after of zero — clamping to 1s");
            self.idle_after = Duration::from_secs(1);
        }
        if self.check_interval > self.idle_after {
            warn!(
                check_secs = self.check_interval.as_secs(),
                idle_secs = self.idle_after.as_secs(),
                "idle check_interval exceeds idle_after — clamping"
            );
            self.check_interval = self.idle_after;
        }
        self
    }
}

impl Default for IdleConfig {
    fn default() -> Self {
        Self {
            idle_after: Self::DEFAULT_IDLE_AFTER,
            check_interval: Self::DEFAULT_CHECK_INTERVAL,
        }
    }
}

// ---------------------------------------------------------------------------
// Activity signals
// ---------------------------------------------------------------------------

/// A user-interaction event that counts as activity.
///
/// Any one of these, observed anywhere in the client, resets the idle
/// clock. The supervisor does not care which kind it was beyond logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivitySignal {
    /// The pointer moved.
    PointerMove,
    /// A key went down.
    KeyDown,
    /// A click or tap.
    Click,
    /// The page scrolled.
    Scroll,
}

impl fmt::Display for ActivitySignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::PointerMove => "pointer-move",
            Self::KeyDown => "key-down",
            Self::Click => "click",
            Self::Scroll => "scroll",
        };
        write!(f, "{name}")
    }
}

// ---------------------------------------------------------------------------
// Timeout notification
// ---------------------------------------------------------------------------

/// Sent exactly once when an idle episode crosses the threshold.
#[derive(Debug, Clone, Copy)]
pub struct IdleTimeout {
    /// How long the session had been idle when the sweep caught it.
    /// At least `idle_after`; sweeps are periodic, so usually more.
    pub idle_for: Duration,
}

/// The receiving end of the one-shot timeout notification.
///
/// Resolves to `Ok(IdleTimeout)` when the idle threshold is crossed, or
/// to an error when the supervisor shuts down without ever timing out.
pub type IdleTimeoutSignal = oneshot::Receiver<IdleTimeout>;

// ---------------------------------------------------------------------------
// Handle
// ---------------------------------------------------------------------------

/// Commands sent from the handle to the supervisor task.
enum IdleCommand {
    Activity(ActivitySignal),
    Shutdown,
}

/// Handle to a running idle supervisor.
///
/// Dropping the handle stops the supervisor too (the command channel
/// closes and the task exits at its next wakeup); [`shutdown`](Self::shutdown)
/// does the same thing deterministically by waiting for the task to finish.
pub struct IdleHandle {
    sender: mpsc::UnboundedSender<IdleCommand>,
    task: JoinHandle<()>,
}

impl IdleHandle {
    /// Reports a user-interaction signal. Fire-and-forget: signals sent
    /// after the supervisor has stopped are silently dropped.
    pub fn record(&self, signal: ActivitySignal) {
        let _ = self.sender.send(IdleCommand::Activity(signal));
    }

    /// Stops the supervisor and waits for its task to finish.
    ///
    /// Safe to call after a timeout has already stopped the task.
    pub async fn shutdown(self) {
        let _ = self.sender.send(IdleCommand::Shutdown);
        let _ = self.task.await;
    }

    /// Whether the supervisor task has stopped (timed out or shut down).
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

// ---------------------------------------------------------------------------
// Supervisor
// ---------------------------------------------------------------------------

/// The supervisor actor. Runs inside a Tokio task; owns the sweep timer.
pub struct IdleSupervisor<M: KeyValueMedium> {
    config: IdleConfig,
    activity: SessionStore<M>,
    commands: mpsc::UnboundedReceiver<IdleCommand>,
    /// Consumed by the first (and only) timeout notification.
    timeout: Option<oneshot::Sender<IdleTimeout>>,
}

impl<M: KeyValueMedium> IdleSupervisor<M> {
    /// Starts a supervisor over the given activity store.
    ///
    /// Stamps the activity marker once immediately — activation itself
    /// counts as activity, so a fresh session never starts half-idle.
    /// Returns the control handle and the one-shot timeout signal.
    pub fn spawn(config: IdleConfig, activity: SessionStore<M>) -> (IdleHandle, IdleTimeoutSignal) {
        let config = config.validated();
        let (cmd_tx, cmd_rx) = mpsc::unbounded_channel();
        let (timeout_tx, timeout_rx) = oneshot::channel();

        activity.touch_activity();

        let actor = IdleSupervisor {
            config,
            activity,
            commands: cmd_rx,
            timeout: Some(timeout_tx),
        };
        let task = tokio::spawn(actor.run());

        debug!(
            idle_secs = config.idle_after.as_secs(),
            check_secs = config.check_interval.as_secs(),
            "idle supervisor started"
        );

        (
            IdleHandle {
                sender: cmd_tx,
                task,
            },
            timeout_rx,
        )
    }

    /// The actor loop: interaction signals refresh the marker, the sweep
    /// compares the clock against it, and the first crossing of the
    /// threshold ends the task.
    async fn run(mut self) {
        let mut sweep = time::interval_at(
            TokioInstant::now() + self.config.check_interval,
            self.config.check_interval,
        );
        // A late sweep should not be followed by a burst of make-up
        // sweeps; one fresh comparison carries the same information.
        sweep.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                // Commands take priority over a due sweep: a signal that
                // arrived before the sweep must count as activity.
                biased;

                cmd = self.commands.recv() => match cmd {
                    Some(IdleCommand::Activity(signal)) => {
                        trace!(%signal, "activity observed");
                        self.activity.touch_activity();
                    }
                    Some(IdleCommand::Shutdown) | None => {
                        debug!("idle supervisor shutting down");
                        break;
                    }
                },

                _ = sweep.tick() => {
                    if self.check_idle() {
                        break;
                    }
                }
            }
        }
    }

    /// One sweep: returns true when the idle threshold was crossed and
    /// the timeout notification has been sent.
    fn check_idle(&mut self) -> bool {
        let last = self.activity.last_activity();
        // A marker from the future (clock skew) reads as zero idle time.
        let idle_for = Utc::now()
            .signed_duration_since(last)
            .to_std()
            .unwrap_or_default();

        if idle_for <= self.config.idle_after {
            trace!(idle_secs = idle_for.as_secs(), "idle sweep: within threshold");
            return false;
        }

        info!(
            idle_secs = idle_for.as_secs(),
            threshold_secs = self.config.idle_after.as_secs(),
            "idle threshold crossed"
        );
        if let Some(tx) = self.timeout.take() {
            // The receiver may already be gone; the episode still ends.
            let _ = tx.send(IdleTimeout { idle_for });
        }
        true
    }
}

// =========================================================================
// Tests
// =========================================================================
