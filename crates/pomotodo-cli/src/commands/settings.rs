use clap::Subcommand;
use pomotodo_core::{SettingsError, SettingsPatch, SettingsStore, SqliteStore};

#[derive(Subcommand)]
pub enum SettingsAction {
    /// Get a settings value
    Get {
        /// Settings key (e.g. "workDuration", "autoStartBreaks")
        key: String,
    },
    /// Set a settings value (clamped to its valid range)
    Set {
        /// Settings key
        key: String,
        /// New value
        value: String,
    },
    /// List all settings as JSON
    List,
    /// Reset settings to defaults
    Reset,
}

fn parse_u32(key: &str, value: &str) -> Result<u32, SettingsError> {
    value.parse().map_err(|_| SettingsError::InvalidValue {
        key: key.to_string(),
        message: format!("expected an integer, got '{value}'"),
    })
}

fn parse_bool(key: &str, value: &str) -> Result<bool, SettingsError> {
    value.parse().map_err(|_| SettingsError::InvalidValue {
        key: key.to_string(),
        message: format!("expected true or false, got '{value}'"),
    })
}

/// Build a one-field patch from a camelCase key and its string value.
fn patch_for_key(key: &str, value: &str) -> Result<SettingsPatch, SettingsError> {
    let mut patch = SettingsPatch::default();
    match key {
        "workDuration" => patch.work_duration = Some(parse_u32(key, value)?),
        "shortBreak" => patch.short_break = Some(parse_u32(key, value)?),
        "longBreak" => patch.long_break = Some(parse_u32(key, value)?),
        "longBreakInterval" => patch.long_break_interval = Some(parse_u32(key, value)?),
        "autoStartBreaks" => patch.auto_start_breaks = Some(parse_bool(key, value)?),
        "autoStartPomodoros" => patch.auto_start_pomodoros = Some(parse_bool(key, value)?),
        "soundEnabled" => patch.sound_enabled = Some(parse_bool(key, value)?),
        "volume" => patch.volume = Some(parse_u32(key, value)?),
        _ => return Err(SettingsError::UnknownKey(key.to_string())),
    }
    Ok(patch)
}

pub fn run(action: SettingsAction) -> Result<(), Box<dyn std::error::Error>> {
    let store = SqliteStore::open()?;
    let mut settings = SettingsStore::load(&store);

    match action {
        SettingsAction::Get { key } => {
            let json = serde_json::to_value(settings.get())?;
            match json.get(&key) {
                Some(value) => println!("{value}"),
                None => {
                    eprintln!("unknown key: {key}");
                    std::process::exit(1);
                }
            }
        }
        SettingsAction::Set { key, value } => {
            let patch = patch_for_key(&key, &value)?;
            settings.apply(patch);
            let json = serde_json::to_value(settings.get())?;
            println!("{key} = {}", json[&key]);
        }
        SettingsAction::List => {
            println!("{}", serde_json::to_string_pretty(&settings.get())?);
        }
        SettingsAction::Reset => {
            settings.reset_to_defaults();
            println!("settings reset to defaults");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patch_for_known_numeric_key() {
        let patch = patch_for_key("workDuration", "30").unwrap();
        assert_eq!(patch.work_duration, Some(30));
        assert!(patch.short_break.is_none());
    }

    #[test]
    fn patch_for_known_bool_key() {
        let patch = patch_for_key("autoStartBreaks", "true").unwrap();
        assert_eq!(patch.auto_start_breaks, Some(true));
    }

    #[test]
    fn unknown_key_is_rejected() {
        assert!(matches!(
            patch_for_key("theme", "dark"),
            Err(SettingsError::UnknownKey(_))
        ));
    }

    #[test]
    fn non_numeric_value_for_numeric_key_is_rejected() {
        assert!(matches!(
            patch_for_key("volume", "loud"),
            Err(SettingsError::InvalidValue { .. })
        ));
    }

    #[test]
    fn non_bool_value_for_bool_key_is_rejected() {
        assert!(matches!(
            patch_for_key("soundEnabled", "yes"),
            Err(SettingsError::InvalidValue { .. })
        ));
    }

    #[test]
    fn every_settings_field_is_reachable_by_key() {
        for (key, value) in [
            ("workDuration", "25"),
            ("shortBreak", "5"),
            ("longBreak", "15"),
            ("longBreakInterval", "4"),
            ("autoStartBreaks", "false"),
            ("autoStartPomodoros", "false"),
            ("soundEnabled", "true"),
            ("volume", "70"),
        ] {
            assert!(patch_for_key(key, value).is_ok(), "key {key} should parse");
        }
    }
}
