//! # Pomotodo Core Library
//!
//! Core business logic for the Pomotodo focus timer: the Pomodoro timer
//! state machine and the persisted settings it derives its behavior from.
//! All host surfaces (the CLI binary, a future GUI shell) are thin layers
//! over this crate.
//!
//! ## Architecture
//!
//! - **Timer Engine**: a one-second-granularity state machine cycling
//!   Work / ShortBreak / LongBreak; the host drives it by calling `tick()`
//!   once per elapsed second and `reconcile()` after settings changes
//! - **Settings**: a JSON-persisted settings object with a dumb store and
//!   a single clamped apply path for user-facing edits
//! - **Storage**: a key-value abstraction backed by SQLite on disk, with
//!   an in-memory substitute for tests
//!
//! ## Key Components
//!
//! - [`TimerEngine`]: core timer state machine
//! - [`SettingsStore`]: persisted Pomodoro configuration
//! - [`KeyValueStore`]: injected storage backend

pub mod error;
pub mod events;
pub mod settings;
pub mod storage;
pub mod timer;

pub use error::{CoreError, Result, SettingsError, StorageError};
pub use events::Event;
pub use settings::{PomodoroSettings, SettingsPatch, SettingsStore};
pub use storage::{KeyValueStore, MemoryStore, SqliteStore};
pub use timer::{Mode, ModeDurations, TimerEngine};
