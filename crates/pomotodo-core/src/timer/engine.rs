//! Timer engine implementation.
//!
//! The engine is a one-second-granularity state machine. It does not own a
//! clock or a thread - the host drives it by calling `tick()` once per
//! elapsed second while the timer is running, and calls `reconcile()`
//! whenever the persisted settings may have changed underneath it.
//!
//! ## Mode transitions
//!
//! ```text
//! Work -> ShortBreak   (completed work count not on the long-break cadence)
//! Work -> LongBreak    (every `long_break_interval`-th completed work session)
//! ShortBreak -> Work
//! LongBreak  -> Work
//! ```
//!
//! The cycle is infinite; there is no terminal state. Durations are read
//! fresh from settings at every transition, never cached from session start.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::mode::{Mode, ModeDurations};
use crate::events::Event;
use crate::settings::PomodoroSettings;

/// Core Pomodoro timer state machine.
///
/// One instance per active timer view; transient state is not persisted by
/// the engine itself (a host may serialize a snapshot if its view outlives
/// the process).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimerEngine {
    mode: Mode,
    /// Remaining time in the current session, in whole seconds.
    time_left_secs: u64,
    is_running: bool,
    /// Total completed work sessions. Monotonic for the engine's lifetime.
    completed_work_sessions: u64,
    /// Completed work sessions counted toward the long-break cadence.
    session_count: u64,
    /// Per-mode durations in effect at the last reconciliation.
    last_durations: ModeDurations,
}

impl TimerEngine {
    /// Create a new engine: Work mode, full work duration, not running.
    pub fn new(settings: &PomodoroSettings) -> Self {
        let durations = ModeDurations::from_settings(settings);
        Self {
            mode: Mode::Work,
            time_left_secs: durations.work_secs,
            is_running: false,
            completed_work_sessions: 0,
            session_count: 0,
            last_durations: durations,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn time_left_secs(&self) -> u64 {
        self.time_left_secs
    }

    pub fn is_running(&self) -> bool {
        self.is_running
    }

    pub fn completed_work_sessions(&self) -> u64 {
        self.completed_work_sessions
    }

    pub fn session_count(&self) -> u64 {
        self.session_count
    }

    /// Full duration of the current mode, read fresh from settings.
    pub fn total_secs(&self, settings: &PomodoroSettings) -> u64 {
        self.mode.duration_secs(settings)
    }

    /// 0.0 .. 1.0 progress within the current session.
    pub fn progress(&self, settings: &PomodoroSettings) -> f64 {
        let total = self.total_secs(settings);
        if total == 0 {
            return 0.0;
        }
        1.0 - (self.time_left_secs as f64 / total as f64)
    }

    /// Build a full state snapshot event.
    pub fn snapshot(&self, settings: &PomodoroSettings) -> Event {
        Event::StateSnapshot {
            mode: self.mode,
            mode_label: self.mode.label().to_string(),
            is_running: self.is_running,
            remaining_secs: self.time_left_secs,
            total_secs: self.total_secs(settings),
            progress_pct: self.progress(settings) * 100.0,
            completed_work_sessions: self.completed_work_sessions,
            session_count: self.session_count,
            at: Utc::now(),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Start the countdown. No-op if already running; never resets the
    /// remaining time.
    pub fn start(&mut self) -> Option<Event> {
        if self.is_running {
            return None;
        }
        self.is_running = true;
        Some(Event::TimerStarted {
            mode: self.mode,
            remaining_secs: self.time_left_secs,
            at: Utc::now(),
        })
    }

    /// Pause the countdown. No-op if already paused.
    pub fn pause(&mut self) -> Option<Event> {
        if !self.is_running {
            return None;
        }
        self.is_running = false;
        Some(Event::TimerPaused {
            mode: self.mode,
            remaining_secs: self.time_left_secs,
            at: Utc::now(),
        })
    }

    /// Stop and restore the current mode's full duration, read fresh from
    /// settings at call time.
    pub fn reset(&mut self, settings: &PomodoroSettings) -> Option<Event> {
        self.is_running = false;
        self.last_durations = ModeDurations::from_settings(settings);
        self.time_left_secs = self.last_durations.for_mode(self.mode);
        Some(Event::TimerReset {
            mode: self.mode,
            remaining_secs: self.time_left_secs,
            at: Utc::now(),
        })
    }

    /// Stop and complete the current session immediately, as if the
    /// countdown had reached zero.
    pub fn skip(&mut self, settings: &PomodoroSettings) -> Option<Event> {
        self.is_running = false;
        Some(self.complete_session(settings))
    }

    /// Advance the countdown by one elapsed second.
    ///
    /// Only has an effect while running. Returns the completion event when
    /// the session finishes.
    pub fn tick(&mut self, settings: &PomodoroSettings) -> Option<Event> {
        if !self.is_running {
            return None;
        }
        self.time_left_secs = self.time_left_secs.saturating_sub(1);
        if self.time_left_secs == 0 {
            return Some(self.complete_session(settings));
        }
        None
    }

    // ── Reconciliation ───────────────────────────────────────────────

    /// Re-derive transient state after settings changed underneath us.
    ///
    /// While running, the remaining time is only ever clamped down to the
    /// new duration - a shrunken setting cannot leave the countdown above
    /// it, and a grown setting never jumps the countdown up. While idle,
    /// the remaining time snaps to the new duration when the current
    /// mode's configured duration actually changed, so a paused timer
    /// never keeps showing a stale duration.
    ///
    /// Returns true if the remaining time changed.
    pub fn reconcile(&mut self, settings: &PomodoroSettings) -> bool {
        let durations = ModeDurations::from_settings(settings);
        let new_duration = durations.for_mode(self.mode);
        let before = self.time_left_secs;

        if self.is_running {
            self.time_left_secs = self.time_left_secs.min(new_duration);
        } else if new_duration != self.last_durations.for_mode(self.mode) {
            self.time_left_secs = new_duration;
        } else if self.time_left_secs > new_duration {
            self.time_left_secs = new_duration;
        }

        self.last_durations = durations;
        self.time_left_secs != before
    }

    // ── Internal ─────────────────────────────────────────────────────

    /// Completion transition for the current mode.
    ///
    /// Durations for the next mode are read fresh from settings here, not
    /// cached from session start. `long_break_interval` is guaranteed
    /// non-zero by the clamp at every settings-write entry point; this
    /// read path does not re-validate it.
    fn complete_session(&mut self, settings: &PomodoroSettings) -> Event {
        debug_assert!(settings.long_break_interval > 0);
        let completed = self.mode;

        let (next, auto_started) = match self.mode {
            Mode::Work => {
                self.completed_work_sessions += 1;
                self.session_count += 1;
                let next = if self.session_count % u64::from(settings.long_break_interval) == 0 {
                    Mode::LongBreak
                } else {
                    Mode::ShortBreak
                };
                (next, settings.auto_start_breaks)
            }
            Mode::ShortBreak | Mode::LongBreak => (Mode::Work, settings.auto_start_pomodoros),
        };

        self.mode = next;
        self.last_durations = ModeDurations::from_settings(settings);
        self.time_left_secs = self.last_durations.for_mode(next);
        self.is_running = auto_started;

        Event::SessionCompleted {
            completed,
            next,
            auto_started,
            completed_work_sessions: self.completed_work_sessions,
            session_count: self.session_count,
            at: Utc::now(),
        }
    }
}
