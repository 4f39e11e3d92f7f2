pub const FPS_UPDATE_INTERVAL: f32 = 1.0;

/// Frames-per-second counter averaged over a fixed window
#[derive(Debug, Clone, Copy)]
pub struct FrameStats {
    interval: f32,
    frame_count: u32,
    elapsed: f32,
    fps: f32,
}

impl FrameStats {
    pub fn new(interval: f32) -> Self {
        Self {
            interval,
            frame_count: 0,
            elapsed: 0.0,
            fps: 0.0,
        }
    }

    /// Count one frame; returns the new fps once per interval
    pub fn record(&mut self, delta: f32) -> Option<f32> {
        self.frame_count += 1;
        self.elapsed += delta;

        if self.elapsed >= self.interval {
            self.fps = self.frame_count as f32 / self.elapsed;
            self.frame_count = 0;
            self.elapsed = 0.0;
            Some(self.fps)
        } else {
            None
        }
    }

    /// Last computed fps, zero until the first interval completes
    pub fn fps(&self) -> f32 {
        self.fps
    }
}

impl Default for FrameStats {
    fn default() -> Self {
        Self::new(FPS_UPDATE_INTERVAL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_after_interval() {
        let mut stats = FrameStats::new(1.0);

        for _ in 0..59 {
            assert_eq!(stats.record(1.0 / 60.0), None);
        }
        assert_eq!(stats.fps(), 0.0);

        // 60 frames over ~1s
        let fps = stats.record(1.0 / 60.0 + 0.001).unwrap();
        assert!((fps - 60.0).abs() < 0.5);
        assert_eq!(stats.fps(), fps);
    }

    #[test]
    fn window_restarts_after_report() {
        let mut stats = FrameStats::new(0.5);
        assert!(stats.record(0.5).is_some());
        assert!(stats.record(0.25).is_none());
        assert_eq!(stats.record(0.25), Some(4.0));
    }
}
