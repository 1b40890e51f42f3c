//! Frame timing.

use web_time::Instant;

/// Timing information for one frame, in seconds.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct FrameTime {
    /// Time since the clock started.
    pub elapsed: f32,
    /// Time since the previous frame.
    pub dt: f32,
}

impl FrameTime {
    /// The time of the frame that follows this one after `dt` seconds.
    #[inline]
    pub fn next(self, dt: f32) -> FrameTime {
        FrameTime {
            elapsed: self.elapsed + dt,
            dt,
        }
    }
}

/// A monotonic clock producing one [`FrameTime`] per tick.
#[derive(Clone, Debug)]
pub struct Clock {
    start: Instant,
    last: Instant,
}

impl Clock {
    /// Starts a clock now.
    pub fn start() -> Self {
        let now = Instant::now();
        Clock {
            start: now,
            last: now,
        }
    }

    /// Samples the clock. The first tick after [`Clock::start`] has a `dt`
    /// close to zero.
    pub fn tick(&mut self) -> FrameTime {
        let now = Instant::now();
        let dt = now.duration_since(self.last).as_secs_f32();
        self.last = now;

        FrameTime {
            elapsed: now.duration_since(self.start).as_secs_f32(),
            dt,
        }
    }
}

impl Default for Clock {
    fn default() -> Self {
        Clock::start()
    }
}
