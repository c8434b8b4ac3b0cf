//! Render sink boundary
//!
//! The simulation decides *what* is on screen; a `RenderSink` decides how to
//! draw it. `build_draw_list` flattens the state into sprites with their fade
//! already applied, so a sink never has to know gameplay rules.

use glam::Vec2;

use crate::clamp;
use crate::consts::PARTICLE_MAX_LIFE_MS;
use crate::sim::SimulationState;

/// Colors for field elements (0xRRGGBB)
pub mod colors {
    pub const BACKGROUND_TOP: u32 = 0x020617;
    pub const BACKGROUND_BOTTOM: u32 = 0x0b1220;
    pub const SLASH: u32 = 0xe0e7ff;
}

/// Peak opacity of a fresh slash stroke
pub const SLASH_ALPHA: f32 = 0.9;
/// Stroke width of slash segments
pub const SLASH_WIDTH: f32 = 3.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FruitSprite {
    pub id: u64,
    pub pos: Vec2,
    pub radius: f32,
    pub color: u32,
    /// Bombs get the dark body, fuse and warning light instead of a highlight
    pub is_bomb: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleSprite {
    pub pos: Vec2,
    pub size: f32,
    pub color: u32,
    pub alpha: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlashStroke {
    pub a: Vec2,
    pub b: Vec2,
    pub color: u32,
    pub alpha: f32,
    pub width: f32,
}

/// Everything a sink needs for one frame, in back-to-front order
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    pub field: Vec2,
    /// Vertical gradient, top then bottom
    pub background: [u32; 2],
    pub now: f64,
    pub fruits: Vec<FruitSprite>,
    pub particles: Vec<ParticleSprite>,
    pub slashes: Vec<SlashStroke>,
}

impl DrawList {
    pub fn is_empty(&self) -> bool {
        self.fruits.is_empty() && self.particles.is_empty() && self.slashes.is_empty()
    }
}

/// Snapshot the state into a draw list
pub fn build_draw_list(state: &SimulationState, field: Vec2, now: f64) -> DrawList {
    let fruits = state
        .fruits
        .iter()
        .map(|f| FruitSprite {
            id: f.id,
            pos: f.pos,
            radius: f.radius,
            color: f.kind.color(),
            is_bomb: f.is_bomb,
        })
        .collect();

    let particles = state
        .particles
        .iter()
        .map(|p| ParticleSprite {
            pos: p.pos,
            size: p.size,
            color: p.color,
            alpha: clamp(p.life / PARTICLE_MAX_LIFE_MS, 0.0, 1.0),
        })
        .collect();

    let slashes = state
        .slashes
        .iter()
        .map(|s| SlashStroke {
            a: s.a,
            b: s.b,
            color: colors::SLASH,
            alpha: SLASH_ALPHA * s.remaining(now),
            width: SLASH_WIDTH,
        })
        .collect();

    DrawList {
        field,
        background: [colors::BACKGROUND_TOP, colors::BACKGROUND_BOTTOM],
        now,
        fruits,
        particles,
        slashes,
    }
}

/// Something that can put a frame on screen (or anywhere else)
pub trait RenderSink {
    fn render(&mut self, frame: &DrawList);
}

/// Discards every frame (headless runs)
#[derive(Debug, Default)]
pub struct NullSink;

impl RenderSink for NullSink {
    fn render(&mut self, _frame: &DrawList) {}
}

/// Logs a one-line summary per frame at trace level
#[derive(Debug, Default)]
pub struct LogSink {
    pub frames: u64,
    /// Frames with nothing on the field
    pub empty_frames: u64,
}

impl RenderSink for LogSink {
    fn render(&mut self, frame: &DrawList) {
        self.frames += 1;
        if frame.is_empty() {
            self.empty_frames += 1;
            log::trace!("frame {} @ {:.1}ms: empty", self.frames, frame.now);
            return;
        }
        log::trace!(
            "frame {} @ {:.1}ms: {} fruit(s), {} bomb(s), {} particle(s), {} slash(es)",
            self.frames,
            frame.now,
            frame.fruits.iter().filter(|f| !f.is_bomb).count(),
            frame.fruits.iter().filter(|f| f.is_bomb).count(),
            frame.particles.len(),
            frame.slashes.len(),
        );
    }
}
