use std::time::Instant;

use crate::foundation::error::{BorderError, BorderResult};

/// Time elapsed since the previous frame, as reported by a frame scheduler.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FrameDelta {
    /// Delta in seconds.
    Seconds(f64),
    /// Delta in milliseconds.
    Millis(f64),
}

impl FrameDelta {
    /// The delta in seconds. Negative or non-finite deltas count as 0.
    pub fn as_secs(self) -> f64 {
        let secs = match self {
            Self::Seconds(s) => s,
            Self::Millis(ms) => ms / 1000.0,
        };
        if secs.is_finite() && secs > 0.0 {
            secs
        } else {
            0.0
        }
    }
}

/// Per-instance animation time, advanced by `delta * speed` on every frame.
///
/// Never decreases.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationClock {
    elapsed: f64,
    speed: f64,
}

impl AnimationClock {
    /// Clock at time 0 with a speed multiplier (negative or NaN speed freezes the clock).
    pub fn new(speed: f64) -> Self {
        let speed = if speed.is_finite() { speed.max(0.0) } else { 0.0 };
        Self {
            elapsed: 0.0,
            speed,
        }
    }

    /// Current animation time.
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Speed multiplier.
    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Advance by one frame and return the new time.
    pub fn advance(&mut self, delta: FrameDelta) -> f64 {
        self.elapsed += delta.as_secs() * self.speed;
        self.elapsed
    }

    /// Back to time 0.
    pub fn reset(&mut self) {
        self.elapsed = 0.0;
    }
}

/// Source of inter-frame deltas (display refresh callback, fixed-step offline driver, ...).
pub trait FrameTicker {
    /// Delta since the previous frame, or `None` when this frame was skipped.
    fn next_delta(&mut self) -> Option<FrameDelta>;
}

/// Frame rate as a rational number.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Fps {
    /// Numerator.
    pub num: u32,
    /// Denominator (must be > 0).
    pub den: u32,
}

impl Fps {
    /// Validated frame rate.
    pub fn new(num: u32, den: u32) -> BorderResult<Self> {
        if den == 0 {
            return Err(BorderError::validation("Fps den must be > 0"));
        }
        if num == 0 {
            return Err(BorderError::validation("Fps num must be > 0"));
        }
        Ok(Self { num, den })
    }

    /// Frames per second as a float.
    pub fn as_f64(self) -> f64 {
        f64::from(self.num) / f64::from(self.den)
    }

    /// Seconds per frame.
    pub fn frame_duration_secs(self) -> f64 {
        f64::from(self.den) / f64::from(self.num)
    }
}

/// Emits a constant delta every frame.
#[derive(Clone, Copy, Debug)]
pub struct FixedStepTicker {
    step: FrameDelta,
}

impl FixedStepTicker {
    /// One frame per `1 / fps` seconds.
    pub fn new(fps: Fps) -> Self {
        Self {
            step: FrameDelta::Seconds(fps.frame_duration_secs()),
        }
    }

    /// Explicit step.
    pub fn with_step(step: FrameDelta) -> Self {
        Self { step }
    }
}

impl FrameTicker for FixedStepTicker {
    fn next_delta(&mut self) -> Option<FrameDelta> {
        Some(self.step)
    }
}

/// Wall-clock ticker; the first call only starts the clock.
#[derive(Clone, Copy, Debug, Default)]
pub struct InstantTicker {
    last: Option<Instant>,
}

impl InstantTicker {
    /// Ticker that has not seen a frame yet.
    pub fn new() -> Self {
        Self::default()
    }
}

impl FrameTicker for InstantTicker {
    fn next_delta(&mut self) -> Option<FrameDelta> {
        let now = Instant::now();
        let prev = self.last.replace(now)?;
        Some(FrameDelta::Seconds(now.duration_since(prev).as_secs_f64()))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/clock.rs"]
mod tests;
