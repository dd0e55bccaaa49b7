use crate::foundation::core::Vec2;
use crate::noise::hash::noise_2d;

/// One of the two independent displacement channels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NoiseChannel {
    /// Horizontal displacement (seed 0).
    X,
    /// Vertical displacement (seed 1).
    Y,
}

impl NoiseChannel {
    /// Seed fed into the noise domain offset.
    pub fn seed(self) -> f64 {
        match self {
            Self::X => 0.0,
            Self::Y => 1.0,
        }
    }
}

/// Multi-octave value noise (fractal sum) used to displace the outline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FractalNoise {
    /// Amplitude of the first octave (the style's `chaos`).
    pub amplitude: f64,
    /// Number of summed octaves.
    pub octaves: u32,
    /// Frequency multiplier between octaves.
    pub lacunarity: f64,
    /// Amplitude multiplier between octaves.
    pub gain: f64,
    /// Frequency of the first octave.
    pub base_frequency: f64,
    /// Extra scale applied to the first octave only.
    pub base_flatness: f64,
    /// Scale from `time * frequency` to the noise `y` coordinate.
    pub time_scale: f64,
    /// Domain offset per unit of seed.
    pub seed_offset: f64,
}

impl FractalNoise {
    /// Default octave count.
    pub const OCTAVES: u32 = 10;
    /// Default lacunarity.
    pub const LACUNARITY: f64 = 1.6;
    /// Default gain.
    pub const GAIN: f64 = 0.7;
    /// Default base frequency.
    pub const BASE_FREQUENCY: f64 = 10.0;
    /// Default first-octave flatness. Zero removes octave 0 entirely.
    pub const BASE_FLATNESS: f64 = 0.0;

    /// Default tuning with the given first-octave amplitude.
    ///
    /// Negative or non-finite `chaos` is clamped to 0.
    pub fn with_chaos(chaos: f64) -> Self {
        let amplitude = if chaos.is_finite() { chaos.max(0.0) } else { 0.0 };
        Self {
            amplitude,
            octaves: Self::OCTAVES,
            lacunarity: Self::LACUNARITY,
            gain: Self::GAIN,
            base_frequency: Self::BASE_FREQUENCY,
            base_flatness: Self::BASE_FLATNESS,
            time_scale: 0.3,
            seed_offset: 100.0,
        }
    }

    /// Fractal noise value at position `x`, time `t` for the given seed.
    pub fn sample(&self, x: f64, t: f64, seed: f64) -> f64 {
        let mut y = 0.0;
        let mut amp = self.amplitude;
        let mut freq = self.base_frequency;

        for octave in 0..self.octaves {
            let mut octave_amp = amp;
            if octave == 0 {
                octave_amp *= self.base_flatness;
            }
            let nx = freq * x + seed * self.seed_offset;
            let ny = t * freq * self.time_scale;
            y += octave_amp * noise_2d(nx, ny);
            freq *= self.lacunarity;
            amp *= self.gain;
        }
        y
    }

    /// Sample a single channel.
    pub fn channel(&self, x: f64, t: f64, channel: NoiseChannel) -> f64 {
        self.sample(x, t, channel.seed())
    }

    /// Both channels as a displacement vector (before the displacement scale).
    pub fn displacement(&self, x: f64, t: f64) -> Vec2 {
        Vec2::new(
            self.channel(x, t, NoiseChannel::X),
            self.channel(x, t, NoiseChannel::Y),
        )
    }
}

impl Default for FractalNoise {
    fn default() -> Self {
        Self::with_chaos(0.5)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/noise/fractal.rs"]
mod tests;
