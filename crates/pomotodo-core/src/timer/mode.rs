use serde::{Deserialize, Serialize};

use crate::settings::PomodoroSettings;

/// Timer session mode. Serialized as `"work"`, `"shortBreak"`,
/// `"longBreak"` to match the original persisted vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Mode {
    Work,
    ShortBreak,
    LongBreak,
}

impl Mode {
    /// Configured duration for this mode, in seconds, read fresh from
    /// settings at call time.
    pub fn duration_secs(&self, settings: &PomodoroSettings) -> u64 {
        let minutes = match self {
            Mode::Work => settings.work_duration,
            Mode::ShortBreak => settings.short_break,
            Mode::LongBreak => settings.long_break,
        };
        u64::from(minutes).saturating_mul(60)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Mode::Work => "Work Session",
            Mode::ShortBreak => "Short Break",
            Mode::LongBreak => "Long Break",
        }
    }

    pub fn is_break(&self) -> bool {
        matches!(self, Mode::ShortBreak | Mode::LongBreak)
    }
}

/// Per-mode duration snapshot, in seconds.
///
/// The engine records one of these at every reconciliation so the next
/// pass can tell whether a mode's configured duration actually changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModeDurations {
    pub work_secs: u64,
    pub short_secs: u64,
    pub long_secs: u64,
}

impl ModeDurations {
    pub fn from_settings(settings: &PomodoroSettings) -> Self {
        Self {
            work_secs: Mode::Work.duration_secs(settings),
            short_secs: Mode::ShortBreak.duration_secs(settings),
            long_secs: Mode::LongBreak.duration_secs(settings),
        }
    }

    pub fn for_mode(&self, mode: Mode) -> u64 {
        match mode {
            Mode::Work => self.work_secs,
            Mode::ShortBreak => self.short_secs,
            Mode::LongBreak => self.long_secs,
        }
    }
}
