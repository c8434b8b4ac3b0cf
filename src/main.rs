//! Fruit Slice headless entry point
//!
//! Runs the simulation without a display: an autopilot swipes through falling
//! fruit while steering clear of bombs, and frames go to a logging sink.
//! `RUST_LOG=debug` shows every spawn, slice and miss.

use glam::Vec2;

use fruit_slice::input::PointerEvent;
use fruit_slice::render::LogSink;
use fruit_slice::sim::{GameEvent, SimulationState, segment_intersects_circle};
use fruit_slice::{FrameDriver, FrameStatus, Settings};

/// Frame length of the simulated display (ms)
const FRAME_MS: f64 = 1000.0 / 60.0;
/// Half-length of an autopilot swipe
const SWIPE_REACH: f32 = 40.0;
/// Frames to linger on the game-over screen before restarting
const RESTART_DELAY_FRAMES: u32 = 90;

/// Pick a swipe through the lowest visible fruit that touches no bomb
fn plan_swipe(state: &SimulationState, field_height: f32) -> Option<(Vec2, Vec2)> {
    let mut targets: Vec<_> = state
        .fruits
        .iter()
        .filter(|f| !f.is_bomb && f.pos.y < field_height)
        .collect();
    targets.sort_by(|a, b| b.pos.y.total_cmp(&a.pos.y));

    let offsets = [Vec2::X, Vec2::Y, Vec2::new(0.7, 0.7), Vec2::new(0.7, -0.7)];
    for fruit in targets {
        for dir in offsets {
            let a = fruit.pos - dir * SWIPE_REACH;
            let b = fruit.pos + dir * SWIPE_REACH;
            let hits_bomb = state
                .fruits
                .iter()
                .filter(|f| f.is_bomb)
                .any(|bomb| segment_intersects_circle(a, b, bomb.pos, bomb.radius));
            if !hits_bomb {
                return Some((a, b));
            }
        }
    }
    None
}

fn main() {
    env_logger::init();
    log::info!("Fruit Slice (headless) starting...");

    let settings = Settings::from_env();
    let seed = settings.seed.unwrap_or_else(|| {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0)
    });

    let mut driver = FrameDriver::new(&settings, seed);
    let mut sink = LogSink::default();
    let field_height = settings.field_height;

    let mut now = 0.0;
    driver.start(now);

    let mut games = 1u32;
    let mut best_score = 0u32;
    let mut slices = 0u32;
    let mut misses = 0u32;
    let mut game_over_frames = 0u32;

    for _ in 0..settings.demo_frames {
        now += FRAME_MS;

        if driver.state().running() {
            if let Some((a, b)) = plan_swipe(driver.state(), field_height) {
                driver.pointer(PointerEvent::Down(a), now);
                driver.pointer(PointerEvent::Move(b), now);
                driver.pointer(PointerEvent::Up, now);
            }
        }

        if driver.frame(now, Some(&mut sink)) != FrameStatus::Rendered {
            break;
        }

        for event in driver.drain_events() {
            match event {
                GameEvent::Sliced { .. } => slices += 1,
                GameEvent::Missed { .. } => misses += 1,
                GameEvent::GameOver { score } => best_score = best_score.max(score),
                _ => {}
            }
        }

        if driver.state().game_over() {
            game_over_frames += 1;
            if game_over_frames >= RESTART_DELAY_FRAMES {
                game_over_frames = 0;
                games += 1;
                driver.start(now);
            }
        }
    }

    let hud = driver.hud();
    best_score = best_score.max(hud.score);
    driver.stop();

    log::info!(
        "Ran {} frames ({} empty) over {} game(s): {} slicing swipe(s), {} miss(es), best {}",
        sink.frames,
        sink.empty_frames,
        games,
        slices,
        misses,
        best_score
    );
    println!(
        "score={} lives={} running={} game_over={} best={}",
        hud.score, hud.lives, hud.running, hud.game_over, best_score
    );
}
