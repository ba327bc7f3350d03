//! Pomodoro settings model.
//!
//! The persisted layout is a single JSON object with exactly eight fields,
//! camelCase keys. Every numeric field carries a `#[serde(default)]` so a
//! partially-written or older payload rehydrates field by field over the
//! defaults instead of failing wholesale. Unknown extra fields are ignored.

use serde::{Deserialize, Serialize};

/// Valid range for each numeric settings field, in the field's own unit
/// (minutes, count, or percent).
pub const WORK_DURATION_RANGE: (u32, u32) = (1, 60);
pub const SHORT_BREAK_RANGE: (u32, u32) = (1, 30);
pub const LONG_BREAK_RANGE: (u32, u32) = (1, 60);
pub const LONG_BREAK_INTERVAL_RANGE: (u32, u32) = (2, 10);
pub const VOLUME_RANGE: (u32, u32) = (0, 100);

/// User-facing Pomodoro configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PomodoroSettings {
    /// Work session length in minutes.
    #[serde(default = "default_work_duration")]
    pub work_duration: u32,
    /// Short break length in minutes.
    #[serde(default = "default_short_break")]
    pub short_break: u32,
    /// Long break length in minutes.
    #[serde(default = "default_long_break")]
    pub long_break: u32,
    /// Completed work sessions between long breaks.
    #[serde(default = "default_long_break_interval")]
    pub long_break_interval: u32,
    #[serde(default)]
    pub auto_start_breaks: bool,
    #[serde(default)]
    pub auto_start_pomodoros: bool,
    #[serde(default = "default_true")]
    pub sound_enabled: bool,
    /// Notification volume percent.
    #[serde(default = "default_volume")]
    pub volume: u32,
}

fn default_work_duration() -> u32 {
    25
}
fn default_short_break() -> u32 {
    5
}
fn default_long_break() -> u32 {
    15
}
fn default_long_break_interval() -> u32 {
    4
}
fn default_volume() -> u32 {
    70
}
fn default_true() -> bool {
    true
}

impl Default for PomodoroSettings {
    fn default() -> Self {
        Self {
            work_duration: default_work_duration(),
            short_break: default_short_break(),
            long_break: default_long_break(),
            long_break_interval: default_long_break_interval(),
            auto_start_breaks: false,
            auto_start_pomodoros: false,
            sound_enabled: true,
            volume: default_volume(),
        }
    }
}

fn clamp(value: u32, (lo, hi): (u32, u32)) -> u32 {
    value.clamp(lo, hi)
}

impl PomodoroSettings {
    /// Merge a partial update over these settings.
    ///
    /// Field-wise overwrite, no validation: clamping is the responsibility
    /// of the apply path ([`SettingsPatch::clamped`]), not of the store.
    pub fn merge(&mut self, patch: &SettingsPatch) {
        if let Some(v) = patch.work_duration {
            self.work_duration = v;
        }
        if let Some(v) = patch.short_break {
            self.short_break = v;
        }
        if let Some(v) = patch.long_break {
            self.long_break = v;
        }
        if let Some(v) = patch.long_break_interval {
            self.long_break_interval = v;
        }
        if let Some(v) = patch.auto_start_breaks {
            self.auto_start_breaks = v;
        }
        if let Some(v) = patch.auto_start_pomodoros {
            self.auto_start_pomodoros = v;
        }
        if let Some(v) = patch.sound_enabled {
            self.sound_enabled = v;
        }
        if let Some(v) = patch.volume {
            self.volume = v;
        }
    }

    /// Clamp every numeric field into its valid domain.
    ///
    /// Applied to rehydrated settings so out-of-range values in persisted
    /// data never reach the timer engine.
    pub fn clamped(mut self) -> Self {
        self.work_duration = clamp(self.work_duration, WORK_DURATION_RANGE);
        self.short_break = clamp(self.short_break, SHORT_BREAK_RANGE);
        self.long_break = clamp(self.long_break, LONG_BREAK_RANGE);
        self.long_break_interval = clamp(self.long_break_interval, LONG_BREAK_INTERVAL_RANGE);
        self.volume = clamp(self.volume, VOLUME_RANGE);
        self
    }

    /// A patch that would overwrite every field with these settings.
    pub fn as_patch(&self) -> SettingsPatch {
        SettingsPatch {
            work_duration: Some(self.work_duration),
            short_break: Some(self.short_break),
            long_break: Some(self.long_break),
            long_break_interval: Some(self.long_break_interval),
            auto_start_breaks: Some(self.auto_start_breaks),
            auto_start_pomodoros: Some(self.auto_start_pomodoros),
            sound_enabled: Some(self.sound_enabled),
            volume: Some(self.volume),
        }
    }
}

/// Partial settings update. `None` fields are left untouched by
/// [`PomodoroSettings::merge`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub work_duration: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_break: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub long_break: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub long_break_interval: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_start_breaks: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_start_pomodoros: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sound_enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume: Option<u32>,
}

impl SettingsPatch {
    /// Clamp every present numeric field into its valid domain.
    ///
    /// This is the single designated validation point for user-facing
    /// duration edits: both the quick-settings editor and the full settings
    /// screen funnel through here before the store persists anything.
    pub fn clamped(mut self) -> Self {
        self.work_duration = self.work_duration.map(|v| clamp(v, WORK_DURATION_RANGE));
        self.short_break = self.short_break.map(|v| clamp(v, SHORT_BREAK_RANGE));
        self.long_break = self.long_break.map(|v| clamp(v, LONG_BREAK_RANGE));
        self.long_break_interval = self
            .long_break_interval
            .map(|v| clamp(v, LONG_BREAK_INTERVAL_RANGE));
        self.volume = self.volume.map(|v| clamp(v, VOLUME_RANGE));
        self
    }
}
