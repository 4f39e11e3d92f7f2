use std::time::Instant;

use crate::traits::DeltaClock;

/// Wall clock - tracks delta time between queries
#[derive(Debug)]
pub struct Clock {
    last_tick: Instant,
}

impl Clock {
    /// Create new clock starting now
    pub fn new() -> Self {
        Self {
            last_tick: Instant::now(),
        }
    }

    /// Reset clock to current time
    pub fn reset(&mut self) {
        self.last_tick = Instant::now();
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}

impl DeltaClock for Clock {
    fn delta(&mut self) -> f32 {
        let now = Instant::now();
        let delta = now.duration_since(self.last_tick).as_secs_f32();
        self.last_tick = now;
        delta
    }
}

/// Clock that reports the same step every query, for headless runs
#[derive(Debug, Clone, Copy)]
pub struct FixedStepClock {
    step: f32,
}

impl FixedStepClock {
    pub fn new(step: f32) -> Self {
        Self {
            step: step.max(0.0),
        }
    }

    /// 60 Hz step
    pub fn sixty_hz() -> Self {
        Self::new(1.0 / 60.0)
    }
}

impl DeltaClock for FixedStepClock {
    fn delta(&mut self) -> f32 {
        self.step
    }
}
