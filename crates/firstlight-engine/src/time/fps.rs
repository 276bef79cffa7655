use std::time::{Duration, Instant};

/// Minimum time between two FPS reports.
pub const REPORT_INTERVAL: Duration = Duration::from_millis(250);

/// One FPS measurement, produced when a reporting interval has elapsed.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FpsReport {
    /// Frames counted since the previous report.
    pub frames: u32,
    /// Seconds elapsed since the previous report.
    pub elapsed: f64,
    pub fps: f64,
    pub ms_per_frame: f64,
}

impl FpsReport {
    /// Formats the window title label, e.g. `"App [FPS: 60.00] [ms/frame: 16.67]"`.
    pub fn title(&self, app: &str) -> String {
        format!(
            "{app} [FPS: {:.2}] [ms/frame: {:.2}]",
            self.fps, self.ms_per_frame
        )
    }
}

/// Frames-per-second accumulator.
///
/// Counts frames and reports once more than [`REPORT_INTERVAL`] has passed
/// since the previous report. The frame count restarts at zero after every
/// report.
#[derive(Debug, Clone)]
pub struct FpsCounter {
    last_report: Instant,
    frames: u32,
    interval: Duration,
}

impl FpsCounter {
    pub fn new(start: Instant) -> Self {
        Self::with_interval(start, REPORT_INTERVAL)
    }

    pub fn with_interval(start: Instant, interval: Duration) -> Self {
        Self {
            last_report: start,
            frames: 0,
            interval,
        }
    }

    /// Frames counted since the last report.
    pub fn frames(&self) -> u32 {
        self.frames
    }

    /// Records one frame presented at `now`.
    ///
    /// Returns a report when the elapsed time since the previous report exceeds
    /// the interval.
    pub fn tick(&mut self, now: Instant) -> Option<FpsReport> {
        self.frames = self.frames.saturating_add(1);

        let elapsed = now.saturating_duration_since(self.last_report);
        if elapsed <= self.interval {
            return None;
        }

        let elapsed = elapsed.as_secs_f64();
        let fps = f64::from(self.frames) / elapsed;
        let report = FpsReport {
            frames: self.frames,
            elapsed,
            fps,
            ms_per_frame: 1000.0 / fps,
        };

        self.frames = 0;
        self.last_report = now;

        Some(report)
    }
}
