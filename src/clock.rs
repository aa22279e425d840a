/// A monotonic millisecond counter.
pub trait TimeSource {
    fn now_ms(&self) -> u64;
}

/// Gates ticks to a fixed frame interval.
#[derive(Debug)]
pub struct FrameClock<T> {
    time: T,
    last_frame_ms: u64,
    frame_interval_ms: u64,
}

impl<T: TimeSource> FrameClock<T> {
    /// The interval is `1000 / frames_per_second` with integer division.
    pub fn new(time: T, frames_per_second: u32) -> Self {
        assert!(frames_per_second > 0, "frames_per_second must be > 0");
        let last_frame_ms = time.now_ms();
        Self {
            time,
            last_frame_ms,
            frame_interval_ms: 1000 / u64::from(frames_per_second),
        }
    }

    pub fn has_frame_elapsed(&self) -> bool {
        let elapsed = self.time.now_ms().saturating_sub(self.last_frame_ms);
        elapsed >= self.frame_interval_ms
    }

    /// Must be called once per executed frame and never on a skipped one.
    pub fn finish_frame(&mut self) {
        self.last_frame_ms = self.time.now_ms();
    }

    pub fn frame_interval_ms(&self) -> u64 {
        self.frame_interval_ms
    }

    #[cfg(test)]
    pub fn last_frame_ms(&self) -> u64 {
        self.last_frame_ms
    }
}
