/// Frame pacing and the windowed frame-rate counter
use std::thread;
use std::time::{Duration, Instant};

use crate::config::RenderConfig;

/// Paces frames to a target interval and reports the frame rate of the
/// last complete refresh window.
#[derive(Debug, Clone)]
pub struct FrameClock {
    target_interval: Duration,
    refresh_period: Duration,
    window_time: Duration,
    window_frames: u32,
    frame_rate: u32,
    total_time: Duration,
}

impl FrameClock {
    pub fn new(target_interval: Duration, refresh_period: Duration) -> Self {
        Self {
            target_interval,
            refresh_period,
            window_time: Duration::ZERO,
            window_frames: 0,
            frame_rate: 0,
            total_time: Duration::ZERO,
        }
    }

    pub fn from_config(config: &RenderConfig) -> Self {
        Self::new(config.frame_interval, config.refresh_period)
    }

    /// Frames per second measured over the previous full window
    pub fn frame_rate(&self) -> u32 {
        self.frame_rate
    }

    /// Wall time covered by every recorded frame, sleeps included
    pub fn total_time(&self) -> Duration {
        self.total_time
    }

    /// Account for a frame that took `elapsed` and return how long to sleep.
    pub fn record(&mut self, elapsed: Duration) -> Duration {
        let sleep = self.target_interval.saturating_sub(elapsed);
        let cycle = elapsed + sleep;

        self.window_frames += 1;
        self.window_time += cycle;
        self.total_time += cycle;

        if self.window_time >= self.refresh_period {
            self.frame_rate =
                (f64::from(self.window_frames) / self.refresh_period.as_secs_f64()) as u32;
            tracing::trace!(frame_rate = self.frame_rate, "frame rate window closed");
            self.window_time = Duration::ZERO;
            self.window_frames = 0;
        }

        sleep
    }

    /// Run one frame, then sleep off the rest of the target interval.
    pub fn run_frame<F: FnOnce(u32)>(&mut self, frame: F) {
        let start = Instant::now();
        frame(self.frame_rate);
        let sleep = self.record(start.elapsed());
        if !sleep.is_zero() {
            thread::sleep(sleep);
        }
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::from_config(&RenderConfig::default())
    }
}
