//! Frame clock for driving the animator.
//!
//! Supplies the two clock values a tick needs: seconds since the session
//! started and seconds since the previous frame. Wall-clock mode reads
//! `std::time::Instant`; fixed-step mode advances simulated time by a
//! constant step per frame, which keeps headless runs reproducible.
//!
//! # Example
//!
//! ```ignore
//! use arbor::time::Time;
//!
//! let mut time = Time::new();
//!
//! // Once per frame:
//! let (elapsed, delta) = time.update();
//! animator.tick(state, delta, elapsed)?;
//! ```

use std::time::Instant;

/// Where a [`Time`] gets its frame timing from.
#[derive(Debug, Clone, Copy)]
enum Source {
    /// Real time between `update` calls.
    Wall { start: Instant, last_frame: Instant },
    /// Constant simulated step per `update`.
    Fixed { step: f64 },
}

/// Elapsed/delta time source.
#[derive(Debug)]
pub struct Time {
    source: Source,
    /// Total elapsed time in seconds.
    elapsed_secs: f32,
    /// Time since last frame in seconds.
    delta_secs: f32,
    /// Total frames since start.
    frame_count: u64,
}

impl Time {
    /// Create a wall-clock timer starting from now.
    pub fn new() -> Self {
        let now = Instant::now();
        Self::with_source(Source::Wall {
            start: now,
            last_frame: now,
        })
    }

    /// Create a timer that advances by `step` seconds every frame,
    /// regardless of how much real time passes. Negative steps clamp to 0.
    pub fn fixed(step: f32) -> Self {
        Self::with_source(Source::Fixed {
            step: f64::from(step.max(0.0)),
        })
    }

    fn with_source(source: Source) -> Self {
        Self {
            source,
            elapsed_secs: 0.0,
            delta_secs: 0.0,
            frame_count: 0,
        }
    }

    /// Update timing values. Call once per frame.
    ///
    /// Returns `(elapsed_time, delta_time)` for convenience.
    pub fn update(&mut self) -> (f32, f32) {
        self.frame_count += 1;

        match &mut self.source {
            Source::Wall { start, last_frame } => {
                let now = Instant::now();
                self.delta_secs = now.duration_since(*last_frame).as_secs_f32();
                self.elapsed_secs = now.duration_since(*start).as_secs_f32();
                *last_frame = now;
            }
            Source::Fixed { step } => {
                // Derived from the frame count so rounding never accumulates
                self.delta_secs = *step as f32;
                self.elapsed_secs = (self.frame_count as f64 * *step) as f32;
            }
        }

        (self.elapsed_secs, self.delta_secs)
    }

    /// Total elapsed time in seconds since start.
    #[inline]
    pub fn elapsed(&self) -> f32 {
        self.elapsed_secs
    }

    /// Time since last frame in seconds (delta time).
    #[inline]
    pub fn delta(&self) -> f32 {
        self.delta_secs
    }

    /// Total frames since start.
    #[inline]
    pub fn frame(&self) -> u64 {
        self.frame_count
    }
}

impl Default for Time {
    fn default() -> Self {
        Self::new()
    }
}
