use std::time::Duration;

use clap::Subcommand;
use pomotodo_core::storage::{KeyValueStore, SqliteStore};
use pomotodo_core::{PomodoroSettings, SettingsStore, TimerEngine};

/// Key the timer view's engine snapshot is stored under.
///
/// The snapshot is a host convenience so consecutive CLI invocations act
/// as one mounted timer view; the engine itself never persists anything.
const ENGINE_KEY: &str = "timer-engine";

#[derive(Subcommand)]
pub enum TimerAction {
    /// Start the countdown
    Start,
    /// Pause the countdown
    Pause,
    /// Stop and restore the current mode's full duration
    Reset,
    /// Complete the current session immediately
    Skip,
    /// Print current timer state as JSON
    Status,
    /// Run the countdown in the foreground, ticking once per second
    Run {
        /// Stop after this many seconds even if still running
        #[arg(long)]
        seconds: Option<u64>,
    },
}

fn load_engine(store: &dyn KeyValueStore, settings: &PomodoroSettings) -> TimerEngine {
    if let Ok(Some(json)) = store.get(ENGINE_KEY) {
        if let Ok(engine) = serde_json::from_str::<TimerEngine>(&json) {
            return engine;
        }
    }
    TimerEngine::new(settings)
}

fn save_engine(
    store: &dyn KeyValueStore,
    engine: &TimerEngine,
) -> Result<(), Box<dyn std::error::Error>> {
    let json = serde_json::to_string(engine)?;
    store.set(ENGINE_KEY, &json)?;
    Ok(())
}

pub fn run(action: TimerAction) -> Result<(), Box<dyn std::error::Error>> {
    let store = SqliteStore::open()?;
    let settings = SettingsStore::load(&store).get();
    let mut engine = load_engine(&store, &settings);

    // Settings may have been edited since the snapshot was written.
    engine.reconcile(&settings);

    match action {
        TimerAction::Start => {
            if let Some(event) = engine.start() {
                println!("{}", serde_json::to_string_pretty(&event)?);
            } else {
                println!("{}", serde_json::to_string_pretty(&engine.snapshot(&settings))?);
            }
        }
        TimerAction::Pause => {
            if let Some(event) = engine.pause() {
                println!("{}", serde_json::to_string_pretty(&event)?);
            } else {
                println!("{}", serde_json::to_string_pretty(&engine.snapshot(&settings))?);
            }
        }
        TimerAction::Reset => {
            if let Some(event) = engine.reset(&settings) {
                println!("{}", serde_json::to_string_pretty(&event)?);
            }
        }
        TimerAction::Skip => {
            if let Some(event) = engine.skip(&settings) {
                println!("{}", serde_json::to_string_pretty(&event)?);
            }
        }
        TimerAction::Status => {
            println!("{}", serde_json::to_string_pretty(&engine.snapshot(&settings))?);
        }
        TimerAction::Run { seconds } => {
            if let Some(event) = engine.start() {
                println!("{}", serde_json::to_string_pretty(&event)?);
            }
            let mut elapsed = 0u64;
            // One loop, one outstanding tick source: stops as soon as the
            // engine pauses itself (session completed, auto-start off).
            while engine.is_running() {
                if seconds.is_some_and(|limit| elapsed >= limit) {
                    break;
                }
                std::thread::sleep(Duration::from_secs(1));
                elapsed += 1;
                if let Some(event) = engine.tick(&settings) {
                    println!("{}", serde_json::to_string_pretty(&event)?);
                }
            }
            println!("{}", serde_json::to_string_pretty(&engine.snapshot(&settings))?);
        }
    }

    save_engine(&store, &engine)?;
    Ok(())
}
