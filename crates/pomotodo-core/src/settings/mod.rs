mod model;
mod store;

pub use model::{
    PomodoroSettings, SettingsPatch, LONG_BREAK_INTERVAL_RANGE, LONG_BREAK_RANGE,
    SHORT_BREAK_RANGE, VOLUME_RANGE, WORK_DURATION_RANGE,
};
pub use store::{SettingsStore, SETTINGS_KEY};
