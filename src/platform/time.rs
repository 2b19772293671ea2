//! Frame clocks

use std::thread;
use std::time::{Duration, Instant};

/// Supplies elapsed time once per frame
pub trait FrameClock {
    /// Wait out the rest of the frame budget for `fps_cap`, then return the
    /// seconds elapsed since the previous call
    fn tick(&mut self, fps_cap: u32) -> f32;
}

/// Always reports the same `dt`; never sleeps
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    pub dt: f32,
}

impl FixedClock {
    pub fn new(dt: f32) -> Self {
        Self { dt }
    }

    pub fn at_fps(fps: u32) -> Self {
        Self::new(1.0 / fps.max(1) as f32)
    }
}

impl FrameClock for FixedClock {
    fn tick(&mut self, _fps_cap: u32) -> f32 {
        self.dt
    }
}

/// Wall clock throttled to a frame rate cap, reporting whole milliseconds
#[derive(Debug)]
pub struct RealClock {
    last: Instant,
}

impl Default for RealClock {
    fn default() -> Self {
        Self::new()
    }
}

impl RealClock {
    pub fn new() -> Self {
        Self {
            last: Instant::now(),
        }
    }
}

impl FrameClock for RealClock {
    fn tick(&mut self, fps_cap: u32) -> f32 {
        if fps_cap > 0 {
            let budget = Duration::from_secs_f64(1.0 / f64::from(fps_cap));
            let spent = self.last.elapsed();
            if spent < budget {
                thread::sleep(budget - spent);
            }
        }
        let now = Instant::now();
        let elapsed = now.duration_since(self.last);
        self.last = now;
        elapsed.as_millis() as f32 / 1000.0
    }
}
