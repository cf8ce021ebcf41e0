//! Frame rate logging for the per-frame update loop.

use crate::float::Float;

/// Averaging window used by [`FpsLogger::default`], in seconds.
pub const DEFAULT_AVERAGE_DURATION: f32 = 5.0;

/// Frame statistics over one averaging window.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FpsReport<F: Float> {
    /// Average frames per second over the window.
    pub fps: F,
    /// Shortest frame in milliseconds.
    pub shortest_frame_ms: F,
    /// Longest frame in milliseconds.
    pub longest_frame_ms: F,
    pub frames: u32,
}

/// Update handler that logs the average frame rate at `info` level every
/// `average_duration` seconds.
///
/// # Usage
/// Call [`on_update`](FpsLogger::on_update) once per frame with the elapsed
/// seconds. It returns the report whenever a window completes.
#[derive(Clone, Debug)]
pub struct FpsLogger<F: Float> {
    average_duration: F,
    seconds_elapsed: F,
    frames: u32,
    shortest_frame: Option<F>,
    longest_frame: F,
}

impl<F: Float> Default for FpsLogger<F> {
    fn default() -> Self {
        FpsLogger::new(F::from_f32(DEFAULT_AVERAGE_DURATION))
    }
}

impl<F: Float> FpsLogger<F> {
    pub fn new(average_duration: F) -> Self {
        debug_assert!(average_duration > F::zero(), "averaging window must be positive");
        FpsLogger {
            average_duration,
            seconds_elapsed: F::zero(),
            frames: 0,
            shortest_frame: None,
            longest_frame: F::zero(),
        }
    }

    pub fn on_update(&mut self, seconds_elapsed: F) -> Option<FpsReport<F>> {
        self.frames += 1;
        self.seconds_elapsed = self.seconds_elapsed + seconds_elapsed;
        self.shortest_frame = Some(match self.shortest_frame {
            Some(shortest) => shortest.min(seconds_elapsed),
            None => seconds_elapsed,
        });
        self.longest_frame = self.longest_frame.max(seconds_elapsed);

        if self.seconds_elapsed < self.average_duration {
            return None;
        }

        let report = self.report();
        log::info!(
            "FPS: {:.2} (MIN: {:.0} ms | MAX: {:.0} ms)",
            report.fps.to_f32(),
            report.shortest_frame_ms.to_f32(),
            report.longest_frame_ms.to_f32(),
        );
        self.reset();
        Some(report)
    }

    /// Statistics of the current, possibly incomplete window.
    pub fn report(&self) -> FpsReport<F> {
        let ms = F::from_f32(1000.0);
        let fps = if self.seconds_elapsed > F::zero() {
            F::from_f32(self.frames as f32) / self.seconds_elapsed
        } else {
            F::zero()
        };
        FpsReport {
            fps,
            shortest_frame_ms: self.shortest_frame.unwrap_or_else(F::zero) * ms,
            longest_frame_ms: self.longest_frame * ms,
            frames: self.frames,
        }
    }

    pub fn reset(&mut self) {
        self.seconds_elapsed = F::zero();
        self.frames = 0;
        self.shortest_frame = None;
        self.longest_frame = F::zero();
    }
}
