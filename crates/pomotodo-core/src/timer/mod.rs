mod engine;
mod mode;

pub use engine::TimerEngine;
pub use mode::{Mode, ModeDurations};
