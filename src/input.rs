//! Pointer input boundary
//!
//! Turns pointer down/move/up samples (already in field-local coordinates)
//! into swipe segments. Coordinate translation from the host surface is the
//! caller's job.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::MIN_SWIPE_DIST_SQ;
use crate::sim::Slash;

/// A pointer sample from the host
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down(Vec2),
    Move(Vec2),
    Up,
    Cancel,
    Leave,
}

/// Last known pointer state
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PointerState {
    pub down: bool,
    /// Most recent sample position
    pub pos: Vec2,
    /// Timestamp (ms) of the last move that produced a segment
    pub last_move_at: f64,
}

impl PointerState {
    /// Feed one event; returns the swipe segment it produced, if any
    ///
    /// Moves only count while pressed. The tracked position follows every
    /// move, but a segment is only emitted when the step from the previous
    /// sample is at least `sqrt(MIN_SWIPE_DIST_SQ)` long.
    pub fn handle(&mut self, event: PointerEvent, now: f64) -> Option<Slash> {
        match event {
            PointerEvent::Down(p) => {
                self.down = true;
                self.pos = p;
                self.last_move_at = now;
                None
            }
            PointerEvent::Move(p) => {
                if !self.down {
                    return None;
                }
                let a = self.pos;
                self.pos = p;
                if a.distance_squared(p) < MIN_SWIPE_DIST_SQ {
                    return None;
                }
                self.last_move_at = now;
                Some(Slash::new(a, p, now))
            }
            PointerEvent::Up | PointerEvent::Cancel | PointerEvent::Leave => {
                self.down = false;
                None
            }
        }
    }

    /// Release the pointer (used on game start)
    pub fn release(&mut self) {
        self.down = false;
    }
}
