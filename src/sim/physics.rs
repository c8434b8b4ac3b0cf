//! Per-frame integration for fruits, particles and the swipe trail

use glam::Vec2;

use super::state::SimulationState;
use crate::consts::*;

/// Integrate fruits and bombs, bounce them off the side walls and retire the
/// ones that fell past the bottom margin
///
/// Every retired non-bomb counts as a miss; `register_miss` ignores it unless
/// the game is running. Returns the number of fruits retired.
pub fn integrate_fruits(state: &mut SimulationState, field: Vec2, dt: f32) -> usize {
    let mut fallen = Vec::new();

    for fruit in &mut state.fruits {
        fruit.vel.y += GRAVITY * dt;
        fruit.vel.x *= DRAG;
        fruit.pos += fruit.vel * dt;

        if fruit.pos.x < fruit.radius {
            fruit.pos.x = fruit.radius;
            fruit.vel.x *= -WALL_RESTITUTION;
        } else if fruit.pos.x > field.x - fruit.radius {
            fruit.pos.x = field.x - fruit.radius;
            fruit.vel.x *= -WALL_RESTITUTION;
        }
    }

    // Newest first, matching slice order
    for i in (0..state.fruits.len()).rev() {
        let fruit = &state.fruits[i];
        if fruit.pos.y - fruit.radius > field.y + BOTTOM_MARGIN {
            fallen.push(state.fruits.remove(i));
        }
    }

    for fruit in &fallen {
        if !fruit.is_bomb {
            state.register_miss(fruit.id);
        }
    }

    fallen.len()
}

/// Integrate particles under reduced gravity and age them out
pub fn integrate_particles(state: &mut SimulationState, dt: f32) {
    for particle in state.particles.iter_mut() {
        particle.vel.y += GRAVITY * PARTICLE_GRAVITY_SCALE * dt;
        particle.vel.x *= PARTICLE_DRAG;
        particle.pos += particle.vel * dt;
        particle.life -= dt * 1000.0;
    }
    state.particles.retain(|p| p.life > 0.0);
}

/// Drop trail segments older than their time-to-live
pub fn age_slashes(state: &mut SimulationState, now: f64) {
    state.slashes.retain(|s| !s.expired(now));
}
