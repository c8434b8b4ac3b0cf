//! Simulation state and core entity types
//!
//! Everything one game session mutates lives in `SimulationState`, owned by
//! the frame driver and handed to each system by reference.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Current phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Before the first start command
    #[default]
    Idle,
    /// Active gameplay
    Running,
    /// Run ended (bomb sliced or out of lives)
    GameOver,
}

/// Fruit kinds, plus the bomb
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FruitKind {
    Apple,
    Orange,
    Lime,
    Blueberry,
    Grape,
    Peach,
    Bomb,
}

impl FruitKind {
    /// Spawnable fruit (bomb excluded)
    pub const PALETTE: [FruitKind; 6] = [
        FruitKind::Apple,
        FruitKind::Orange,
        FruitKind::Lime,
        FruitKind::Blueberry,
        FruitKind::Grape,
        FruitKind::Peach,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            FruitKind::Apple => "Apple",
            FruitKind::Orange => "Orange",
            FruitKind::Lime => "Lime",
            FruitKind::Blueberry => "Blueberry",
            FruitKind::Grape => "Grape",
            FruitKind::Peach => "Peach",
            FruitKind::Bomb => "Bomb",
        }
    }

    /// Body color as 0xRRGGBB
    pub fn color(&self) -> u32 {
        match self {
            FruitKind::Apple => 0xef4444,
            FruitKind::Orange => 0xf97316,
            FruitKind::Lime => 0x84cc16,
            FruitKind::Blueberry => 0x3b82f6,
            FruitKind::Grape => 0xa855f7,
            FruitKind::Peach => 0xfb7185,
            FruitKind::Bomb => 0x111827,
        }
    }
}

/// Color of the burst emitted when a bomb is sliced
pub const BOMB_BURST_COLOR: u32 = 0xef4444;

/// A fruit or bomb flying across the field
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fruit {
    pub id: u64,
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub kind: FruitKind,
    /// Timestamp (ms) at which the fruit entered the field
    pub spawned_at: f64,
    pub is_bomb: bool,
}

/// A particle for slice feedback (not gameplay-affecting)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
    pub color: u32,
    /// Remaining lifetime (ms)
    pub life: f32,
}

/// One segment of the swipe trail
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Slash {
    pub a: Vec2,
    pub b: Vec2,
    pub born_at: f64,
    pub ttl: f64,
}

impl Slash {
    pub fn new(a: Vec2, b: Vec2, born_at: f64) -> Self {
        Self {
            a,
            b,
            born_at,
            ttl: SLASH_TTL_MS,
        }
    }

    /// Remaining fraction of the time-to-live in [0, 1]
    pub fn remaining(&self, now: f64) -> f32 {
        let age = now - self.born_at;
        crate::clamp((1.0 - age / self.ttl) as f32, 0.0, 1.0)
    }

    pub fn expired(&self, now: f64) -> bool {
        now - self.born_at > self.ttl
    }
}

/// Spawn scheduler bookkeeping
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SpawnState {
    /// Timestamp (ms) of the next scheduled spawn
    pub next_spawn_at: f64,
    /// Accumulated active play time (ms), drives the difficulty ramp
    pub level_time: f64,
}

/// Notable things that happened during an update, drained by the driver
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    Started,
    Spawned { id: u64, kind: FruitKind },
    Sliced { count: u32 },
    BombHit { id: u64 },
    Missed { id: u64, lives_left: u32 },
    GameOver { score: u32 },
}

/// Read-only HUD values exposed once per frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HudSnapshot {
    pub score: u32,
    pub lives: u32,
    pub running: bool,
    pub game_over: bool,
}

/// Complete state of one game session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationState {
    pub phase: GamePhase,
    pub score: u32,
    pub lives: u32,
    /// Live fruits and bombs, in spawn order
    pub fruits: Vec<Fruit>,
    /// Visual particles (not gameplay-affecting)
    pub particles: Vec<Particle>,
    /// Swipe trail
    pub slashes: Vec<Slash>,
    pub spawn: SpawnState,
    /// Particle cap; the oldest particle is evicted when full
    pub max_particles: usize,
    /// Events recorded since the last drain or restart; the host drains them
    #[serde(skip)]
    pub events: Vec<GameEvent>,
    /// Next entity ID
    next_id: u64,
}

impl Default for SimulationState {
    fn default() -> Self {
        Self::new(usize::MAX)
    }
}

impl SimulationState {
    /// Create an idle state with the given particle cap
    pub fn new(max_particles: usize) -> Self {
        Self {
            phase: GamePhase::Idle,
            score: 0,
            lives: STARTING_LIVES,
            fruits: Vec::new(),
            particles: Vec::new(),
            slashes: Vec::new(),
            spawn: SpawnState::default(),
            max_particles,
            events: Vec::new(),
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    pub fn game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Start (or restart) a game at time `now` (ms)
    ///
    /// Valid from any phase. Entity IDs keep counting up across restarts.
    pub fn start(&mut self, now: f64) {
        self.fruits.clear();
        self.particles.clear();
        self.slashes.clear();
        self.events.clear();
        self.score = 0;
        self.lives = STARTING_LIVES;
        self.spawn = SpawnState {
            next_spawn_at: now + START_DELAY_MS,
            level_time: 0.0,
        };
        self.phase = GamePhase::Running;
        self.events.push(GameEvent::Started);
        log::info!("Game started");
    }

    /// End the current run; no-op unless running
    pub fn end_game(&mut self) {
        if self.phase != GamePhase::Running {
            return;
        }
        self.phase = GamePhase::GameOver;
        self.events.push(GameEvent::GameOver { score: self.score });
        log::info!("Game over with score {}", self.score);
    }

    /// A fruit fell off the field unsliced
    ///
    /// Only counts while running. Losing the last life ends the game in the
    /// same update.
    pub fn register_miss(&mut self, fruit_id: u64) {
        if self.phase != GamePhase::Running {
            return;
        }
        self.lives = self.lives.saturating_sub(1);
        self.events.push(GameEvent::Missed {
            id: fruit_id,
            lives_left: self.lives,
        });
        log::debug!("Missed fruit {} ({} lives left)", fruit_id, self.lives);
        if self.lives == 0 {
            self.end_game();
        }
    }

    /// Award points; ignored outside of a run
    pub fn add_score(&mut self, points: u32) {
        if self.phase == GamePhase::Running {
            self.score = self.score.saturating_add(points);
        }
    }

    /// Add a particle, evicting the oldest one when at the cap
    pub fn push_particle(&mut self, particle: Particle) {
        if self.max_particles == 0 {
            return;
        }
        if self.particles.len() >= self.max_particles {
            self.particles.remove(0);
        }
        self.particles.push(particle);
    }

    pub fn hud(&self) -> HudSnapshot {
        HudSnapshot {
            score: self.score,
            lives: self.lives,
            running: self.running(),
            game_over: self.game_over(),
        }
    }

    /// Take all events recorded since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
