//! Property tests for clamping and countdown behavior.

use proptest::prelude::*;

use pomotodo_core::{Mode, PomodoroSettings, SettingsPatch, TimerEngine};

fn arb_settings() -> impl Strategy<Value = PomodoroSettings> {
    (1u32..=60, 1u32..=30, 1u32..=60, 2u32..=10, any::<bool>(), any::<bool>()).prop_map(
        |(work, short, long, interval, breaks, pomos)| PomodoroSettings {
            work_duration: work,
            short_break: short,
            long_break: long,
            long_break_interval: interval,
            auto_start_breaks: breaks,
            auto_start_pomodoros: pomos,
            ..PomodoroSettings::default()
        },
    )
}

proptest! {
    #[test]
    fn clamped_patch_always_lands_in_domain(
        work in any::<u32>(),
        short in any::<u32>(),
        long in any::<u32>(),
        interval in any::<u32>(),
        volume in any::<u32>(),
    ) {
        let patch = SettingsPatch {
            work_duration: Some(work),
            short_break: Some(short),
            long_break: Some(long),
            long_break_interval: Some(interval),
            volume: Some(volume),
            ..Default::default()
        }
        .clamped();

        prop_assert!((1..=60).contains(&patch.work_duration.unwrap()));
        prop_assert!((1..=30).contains(&patch.short_break.unwrap()));
        prop_assert!((1..=60).contains(&patch.long_break.unwrap()));
        prop_assert!((2..=10).contains(&patch.long_break_interval.unwrap()));
        prop_assert!(patch.volume.unwrap() <= 100);
    }

    #[test]
    fn reset_always_restores_the_active_modes_duration(settings in arb_settings(), ticks in 0usize..200) {
        let mut engine = TimerEngine::new(&settings);
        engine.start();
        for _ in 0..ticks {
            engine.tick(&settings);
        }
        engine.reset(&settings);
        prop_assert!(!engine.is_running());
        prop_assert_eq!(
            engine.time_left_secs(),
            engine.mode().duration_secs(&settings)
        );
    }

    #[test]
    fn tick_never_increases_remaining_time_within_a_session(
        settings in arb_settings(),
        ticks in 1usize..500,
    ) {
        let mut engine = TimerEngine::new(&settings);
        engine.start();
        let mut prev = engine.time_left_secs();
        for _ in 0..ticks {
            let completed = engine.tick(&settings).is_some();
            if completed {
                // Completion jumps to the next mode's full duration.
                prev = engine.time_left_secs();
                prop_assert_eq!(prev, engine.mode().duration_secs(&settings));
                if !engine.is_running() {
                    break;
                }
            } else {
                prop_assert!(engine.time_left_secs() <= prev);
                prev = engine.time_left_secs();
            }
        }
    }

    #[test]
    fn remaining_time_never_exceeds_current_mode_duration_after_reconcile(
        settings in arb_settings(),
        edited in arb_settings(),
        ticks in 0usize..300,
        running in any::<bool>(),
    ) {
        let mut engine = TimerEngine::new(&settings);
        engine.start();
        for _ in 0..ticks {
            engine.tick(&settings);
        }
        if !running {
            engine.pause();
        }
        engine.reconcile(&edited);
        prop_assert!(engine.time_left_secs() <= engine.mode().duration_secs(&edited));
    }

    #[test]
    fn cadence_produces_long_break_exactly_on_the_interval(settings in arb_settings()) {
        let mut engine = TimerEngine::new(&settings);
        let interval = u64::from(settings.long_break_interval);
        for n in 1..=(interval * 2) {
            engine.skip(&settings); // complete work session n
            let expected = if n % interval == 0 {
                Mode::LongBreak
            } else {
                Mode::ShortBreak
            };
            prop_assert_eq!(engine.mode(), expected);
            engine.skip(&settings); // complete the break
            prop_assert_eq!(engine.mode(), Mode::Work);
        }
    }
}
