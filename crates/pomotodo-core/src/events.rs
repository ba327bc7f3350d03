use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::timer::Mode;

/// Every effective timer state change produces an Event.
/// Hosts print or forward these; no-op commands produce none.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    TimerStarted {
        mode: Mode,
        remaining_secs: u64,
        at: DateTime<Utc>,
    },
    TimerPaused {
        mode: Mode,
        remaining_secs: u64,
        at: DateTime<Utc>,
    },
    TimerReset {
        mode: Mode,
        remaining_secs: u64,
        at: DateTime<Utc>,
    },
    /// A work session or break finished, either naturally (countdown hit
    /// zero) or via skip.
    SessionCompleted {
        completed: Mode,
        next: Mode,
        /// Whether the next session started automatically per the
        /// auto-start settings.
        auto_started: bool,
        completed_work_sessions: u64,
        session_count: u64,
        at: DateTime<Utc>,
    },
    StateSnapshot {
        mode: Mode,
        mode_label: String,
        is_running: bool,
        remaining_secs: u64,
        total_secs: u64,
        progress_pct: f64,
        completed_work_sessions: u64,
        session_count: u64,
        at: DateTime<Utc>,
    },
}
