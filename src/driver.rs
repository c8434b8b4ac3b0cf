//! Frame driver
//!
//! Owns one game session: the simulation state, the pointer, the RNG and
//! frame timing. The host calls `pointer` for every input sample and `frame`
//! once per display refresh; everything runs on the caller's thread.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::input::{PointerEvent, PointerState};
use crate::render::{RenderSink, build_draw_list};
use crate::settings::Settings;
use crate::sim::{
    FrameContext, GameEvent, HudSnapshot, SimulationState, SliceOutcome, advance, frame_dt,
    slice_segment,
};

/// Play field dimensions in field-local pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldSize {
    pub width: f32,
    pub height: f32,
}

impl FieldSize {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Responsive sizing for a host viewport: fill the container width (at
    /// least 320) and use 62% of the viewport height, kept within [420, 640]
    pub fn fit_viewport(container_width: f32, viewport_height: f32) -> Self {
        Self {
            width: container_width.floor().max(320.0),
            height: crate::clamp((viewport_height * 0.62).floor(), 420.0, 640.0),
        }
    }

    pub fn as_vec2(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Usable for simulation (positive and finite)
    pub fn is_valid(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

/// What a call to `frame` did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameStatus {
    /// State advanced and handed to the sink
    Rendered,
    /// Field geometry or render sink missing; nothing changed
    Skipped,
    /// Driver stopped; no further frames are processed
    Stopped,
}

/// Drives one game session frame by frame
pub struct FrameDriver<R = Pcg32> {
    state: SimulationState,
    pointer: PointerState,
    rng: R,
    field: Option<FieldSize>,
    last_frame_at: Option<f64>,
    stopped: bool,
}

impl FrameDriver<Pcg32> {
    /// Driver with a seeded PCG generator and the settings' field and particle cap
    pub fn new(settings: &Settings, seed: u64) -> Self {
        let mut driver = Self::with_rng(settings.max_particles(), Pcg32::seed_from_u64(seed));
        driver.set_field(FieldSize::new(settings.field_width, settings.field_height));
        log::info!(
            "Frame driver ready (seed {}, quality {}, {}x{})",
            seed,
            settings.quality.as_str(),
            settings.field_width,
            settings.field_height
        );
        driver
    }
}

impl<R: Rng> FrameDriver<R> {
    /// Driver with a caller-supplied random source and no field yet
    pub fn with_rng(max_particles: usize, rng: R) -> Self {
        Self {
            state: SimulationState::new(max_particles),
            pointer: PointerState::default(),
            rng,
            field: None,
            last_frame_at: None,
            stopped: false,
        }
    }

    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    pub fn pointer_state(&self) -> &PointerState {
        &self.pointer
    }

    pub fn hud(&self) -> HudSnapshot {
        self.state.hud()
    }

    pub fn field(&self) -> Option<FieldSize> {
        self.field
    }

    /// Report the current field size (on resize or every frame)
    ///
    /// Invalid sizes are treated as a missing field.
    pub fn set_field(&mut self, field: FieldSize) {
        if field.is_valid() {
            self.field = Some(field);
        } else {
            log::warn!("Ignoring invalid field size {}x{}", field.width, field.height);
            self.field = None;
        }
    }

    pub fn clear_field(&mut self) {
        self.field = None;
    }

    /// Start or restart a game at `now` (ms)
    pub fn start(&mut self, now: f64) {
        self.state.start(now);
        self.pointer.release();
        self.last_frame_at = Some(now);
    }

    /// Feed one pointer sample
    ///
    /// A qualifying drag step is always added to the trail; it is also sliced
    /// against the fruits while the game is running.
    pub fn pointer(&mut self, event: PointerEvent, now: f64) -> Option<SliceOutcome> {
        if self.stopped {
            return None;
        }
        let slash = self.pointer.handle(event, now)?;
        self.state.slashes.push(slash);
        if !self.state.running() {
            return None;
        }
        Some(slice_segment(&mut self.state, slash.a, slash.b, &mut self.rng))
    }

    /// Advance the simulation to `now` without rendering
    ///
    /// Returns `None` (and leaves the state untouched) if stopped or the field
    /// size is unknown.
    pub fn advance(&mut self, now: f64) -> Option<&SimulationState> {
        if self.stopped {
            return None;
        }
        let field = self.field?;

        let last = self.last_frame_at.unwrap_or(now);
        let dt = frame_dt(last, now);
        self.last_frame_at = Some(last.max(now));

        let ctx = FrameContext {
            now,
            dt,
            field: field.as_vec2(),
        };
        advance(&mut self.state, &ctx, &mut self.rng);
        Some(&self.state)
    }

    /// One update-and-render pass
    pub fn frame(&mut self, now: f64, sink: Option<&mut dyn RenderSink>) -> FrameStatus {
        if self.stopped {
            return FrameStatus::Stopped;
        }
        let (Some(sink), Some(field)) = (sink, self.field) else {
            return FrameStatus::Skipped;
        };
        if self.advance(now).is_none() {
            return FrameStatus::Skipped;
        }

        let list = build_draw_list(&self.state, field.as_vec2(), now);
        sink.render(&list);
        FrameStatus::Rendered
    }

    /// Take the events recorded since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.state.drain_events()
    }

    /// Stop processing frames (teardown)
    pub fn stop(&mut self) {
        if !self.stopped {
            log::info!("Frame driver stopped");
        }
        self.stopped = true;
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }
}
