//! Fruit Slice - A falling-fruit slicing arcade simulation
//!
//! Core modules:
//! - `sim`: Simulation (spawning, physics, slicing, game state)
//! - `input`: Pointer input boundary (swipe segment generation)
//! - `render`: Render sink boundary (what to draw, not how)
//! - `driver`: Frame driver tying timing, input, simulation and rendering together
//! - `settings`: Data-driven configuration (quality, seed, field size)

pub mod driver;
pub mod input;
pub mod render;
pub mod settings;
pub mod sim;

pub use driver::{FieldSize, FrameDriver, FrameStatus};
pub use settings::{QualityPreset, Settings};

use rand::Rng;

/// Game configuration constants
pub mod consts {
    /// Upper bound on a single frame step (seconds) to prevent spiral of death
    pub const MAX_FRAME_DT: f32 = 0.034;

    /// Downward acceleration for fruits (pixels/s²); particles use a fraction of it
    pub const GRAVITY: f32 = 1500.0;
    /// Horizontal velocity multiplier applied to fruits every frame
    pub const DRAG: f32 = 0.995;
    /// Horizontal velocity kept (and inverted) after hitting a side wall
    pub const WALL_RESTITUTION: f32 = 0.8;
    /// Distance past the bottom edge a fruit's top must fall before it is removed
    pub const BOTTOM_MARGIN: f32 = 40.0;

    /// Particle gravity as a fraction of `GRAVITY`
    pub const PARTICLE_GRAVITY_SCALE: f32 = 0.75;
    /// Horizontal velocity multiplier applied to particles every frame
    pub const PARTICLE_DRAG: f32 = 0.99;
    /// Longest possible particle lifetime (ms), used for fade-out
    pub const PARTICLE_MAX_LIFE_MS: f32 = 420.0;
    /// Shortest possible particle lifetime (ms)
    pub const PARTICLE_MIN_LIFE_MS: f32 = 220.0;

    /// Slash trail segment time-to-live (ms)
    pub const SLASH_TTL_MS: f64 = 120.0;
    /// Minimum squared pointer displacement for a move to produce a slash
    pub const MIN_SWIPE_DIST_SQ: f32 = 36.0;

    /// Lives at the start of every game
    pub const STARTING_LIVES: u32 = 3;
    /// Settle-in delay before the first spawn of a game (ms)
    pub const START_DELAY_MS: f64 = 300.0;

    /// Particles emitted when a fruit is sliced
    pub const FRUIT_BURST: usize = 18;
    /// Particles emitted when a bomb is sliced
    pub const BOMB_BURST: usize = 28;
}

/// Clamp a value into the inclusive range [min, max]
#[inline]
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    value.max(min).min(max)
}

/// Uniform random value in [min, max)
///
/// Returns `min` for an empty or inverted range instead of panicking, so a
/// play field narrower than a fruit still spawns deterministically.
#[inline]
pub fn random_between<R: Rng + ?Sized>(rng: &mut R, min: f32, max: f32) -> f32 {
    if max > min {
        min + rng.random::<f32>() * (max - min)
    } else {
        min
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_clamp() {
        assert_eq!(clamp(5.0, 0.0, 1.0), 1.0);
        assert_eq!(clamp(-5.0, 0.0, 1.0), 0.0);
        assert_eq!(clamp(0.25, 0.0, 1.0), 0.25);
    }

    #[test]
    fn test_random_between_range() {
        let mut rng = Pcg32::seed_from_u64(7);
        for _ in 0..1000 {
            let v = random_between(&mut rng, -220.0, 220.0);
            assert!((-220.0..220.0).contains(&v));
        }
    }

    #[test]
    fn test_random_between_empty_range() {
        let mut rng = Pcg32::seed_from_u64(7);
        assert_eq!(random_between(&mut rng, 10.0, 10.0), 10.0);
        assert_eq!(random_between(&mut rng, 10.0, 4.0), 10.0);
    }
}
