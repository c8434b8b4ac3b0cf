use fruit_slice::input::PointerEvent;
use fruit_slice::render::{DrawList, RenderSink};
use fruit_slice::sim::{GameEvent, SliceOutcome};
use fruit_slice::{FieldSize, FrameDriver, FrameStatus, Settings};

use glam::Vec2;

const FRAME_MS: f64 = 1000.0 / 60.0;

#[derive(Default)]
struct CountingSink {
    frames: usize,
    max_fruits: usize,
}

impl RenderSink for CountingSink {
    fn render(&mut self, frame: &DrawList) {
        self.frames += 1;
        self.max_fruits = self.max_fruits.max(frame.fruits.len());
        for p in &frame.particles {
            assert!((0.0..=1.0).contains(&p.alpha));
        }
        for s in &frame.slashes {
            assert!((0.0..=0.9).contains(&s.alpha));
        }
    }
}

fn settings() -> Settings {
    Settings {
        seed: Some(2024),
        ..Settings::default()
    }
}

// ── Unattended play ─────────────────────────────────────────────────────────

#[test]
fn unattended_game_runs_out_of_lives() {
    let mut driver = FrameDriver::new(&settings(), 2024);
    let mut sink = CountingSink::default();
    driver.start(0.0);

    let mut now = 0.0;
    let mut misses = 0;
    for _ in 0..60 * 120 {
        now += FRAME_MS;
        assert_eq!(driver.frame(now, Some(&mut sink)), FrameStatus::Rendered);
        misses += driver
            .drain_events()
            .iter()
            .filter(|e| matches!(e, GameEvent::Missed { .. }))
            .count();
        if driver.hud().game_over {
            break;
        }
    }

    let hud = driver.hud();
    assert!(hud.game_over);
    assert!(!hud.running);
    assert_eq!(hud.lives, 0);
    assert_eq!(hud.score, 0);
    assert_eq!(misses, 3);
    assert!(sink.max_fruits > 0);

    // Frozen after game over: nothing new spawns
    let spawned_before = driver.state().fruits.len();
    for _ in 0..120 {
        now += FRAME_MS;
        driver.frame(now, Some(&mut sink));
    }
    assert!(driver.state().fruits.len() <= spawned_before);
    assert_eq!(driver.hud().lives, 0);
}

// ── Swiping ─────────────────────────────────────────────────────────────────

#[test]
fn swiping_every_fruit_scores() {
    let mut driver = FrameDriver::new(&settings(), 7);
    let mut sink = CountingSink::default();
    driver.start(0.0);

    let mut now = 0.0;
    let mut best = 0;
    for _ in 0..60 * 20 {
        now += FRAME_MS;
        driver.frame(now, Some(&mut sink));

        // Cut the first on-screen fruit with a short vertical stroke
        let target = driver
            .state()
            .fruits
            .iter()
            .find(|f| !f.is_bomb && f.pos.y < 540.0)
            .map(|f| f.pos);
        if let Some(pos) = target {
            driver.pointer(PointerEvent::Down(pos - Vec2::new(0.0, 10.0)), now);
            let outcome = driver.pointer(PointerEvent::Move(pos + Vec2::new(0.0, 10.0)), now);
            assert!(matches!(
                outcome,
                Some(SliceOutcome::Sliced { .. }) | Some(SliceOutcome::BombHit) | None
            ));
            driver.pointer(PointerEvent::Up, now);
        }
        best = best.max(driver.hud().score);
        if driver.hud().game_over {
            break;
        }
    }

    assert!(best > 0);
}

#[test]
fn restart_after_game_over() {
    let mut driver = FrameDriver::new(&settings(), 11);
    driver.start(0.0);
    driver.pointer(PointerEvent::Down(Vec2::new(0.0, 0.0)), 1.0);
    driver.pointer(PointerEvent::Move(Vec2::new(100.0, 0.0)), 2.0);
    assert_eq!(driver.state().slashes.len(), 1);

    driver.start(500.0);
    let hud = driver.hud();
    assert_eq!((hud.score, hud.lives, hud.running, hud.game_over), (0, 3, true, false));
    assert!(driver.state().slashes.is_empty());
    assert_eq!(driver.state().spawn.next_spawn_at, 800.0);
}

#[test]
fn resize_is_respected() {
    let mut driver = FrameDriver::new(&settings(), 3);
    driver.set_field(FieldSize::fit_viewport(400.0, 700.0));
    driver.start(0.0);

    let mut sink = CountingSink::default();
    let mut now = 0.0;
    for _ in 0..600 {
        now += FRAME_MS;
        driver.frame(now, Some(&mut sink));
        for fruit in &driver.state().fruits {
            assert!(fruit.pos.x >= fruit.radius - 1e-3);
            assert!(fruit.pos.x <= 400.0 - fruit.radius + 1e-3);
        }
    }
}
