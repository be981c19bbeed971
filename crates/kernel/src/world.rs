use boxfield_common::{BALL_SIZE, Bounds, ENEMY_SIZE, GameObject};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// Seed derived from wall-clock seconds, for placement that differs per run.
pub fn wall_clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// An event record produced by every mutation to the world.
///
/// The log is enough to rebuild the world with [`World::replay`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum WorldEvent {
    /// Objects were sized and placed using this seed.
    Setup { seed: u64 },
    /// Ball velocity was replaced.
    VelocityChanged { velocity: Vec2 },
    /// Ball was moved back to the center of the window.
    BallReset { position: Vec2 },
    /// Simulation advanced one update step.
    Stepped { tick: u64, delta_time: f32 },
}

/// The authoritative game state: the player ball, the static enemy, and the
/// window bounds they live in.
///
/// All mutations go through explicit operations. The enemy is never exposed
/// mutably, so it keeps its setup position and zero velocity for the lifetime
/// of the world.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct World {
    bounds: Bounds,
    ball: GameObject,
    enemy: GameObject,
    tick: u64,
    seed: u64,
    #[serde(skip)]
    event_log: Vec<WorldEvent>,
}

impl World {
    /// A world with both objects zeroed. Call [`World::setup`] before use.
    pub fn new(bounds: Bounds) -> Self {
        Self {
            bounds,
            ball: GameObject::default(),
            enemy: GameObject::default(),
            tick: 0,
            seed: 0,
            event_log: Vec::new(),
        }
    }

    /// Create and set up a world in one go.
    pub fn with_seed(bounds: Bounds, seed: u64) -> Self {
        let mut world = Self::new(bounds);
        world.setup(seed);
        world
    }

    /// Size and place both objects.
    ///
    /// The ball sits at the window center with zero velocity. The enemy is
    /// placed uniformly at random, fully inside the window, from `seed`.
    pub fn setup(&mut self, seed: u64) {
        self.place_objects(seed);
        tracing::debug!(
            seed,
            ball = ?self.ball.position,
            enemy = ?self.enemy.position,
            "world set up"
        );
        self.event_log.push(WorldEvent::Setup { seed });
    }

    fn place_objects(&mut self, seed: u64) {
        self.seed = seed;
        self.ball = GameObject::new(self.bounds.center(), Vec2::splat(BALL_SIZE));

        let enemy_size = Vec2::splat(ENEMY_SIZE);
        let max = self.bounds.max_position(enemy_size);
        let mut rng = StdRng::seed_from_u64(seed);
        let position = Vec2::new(rng.gen_range(0.0..=max.x), rng.gen_range(0.0..=max.y));
        self.enemy = GameObject::new(position, enemy_size);
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn ball(&self) -> &GameObject {
        &self.ball
    }

    pub fn enemy(&self) -> &GameObject {
        &self.enemy
    }

    /// Number of update steps taken.
    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Seed the enemy placement was derived from.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Read-only access to the event log.
    pub fn events(&self) -> &[WorldEvent] {
        &self.event_log
    }

    /// Drain and return the event log.
    pub fn drain_events(&mut self) -> Vec<WorldEvent> {
        std::mem::take(&mut self.event_log)
    }

    /// Replace the horizontal ball velocity.
    pub fn set_ball_velocity_x(&mut self, vel_x: f32) {
        self.set_ball_velocity(Vec2::new(vel_x, self.ball.velocity.y));
    }

    /// Replace the vertical ball velocity.
    pub fn set_ball_velocity_y(&mut self, vel_y: f32) {
        self.set_ball_velocity(Vec2::new(self.ball.velocity.x, vel_y));
    }

    fn set_ball_velocity(&mut self, velocity: Vec2) {
        self.ball.velocity = velocity;
        self.event_log.push(WorldEvent::VelocityChanged { velocity });
    }

    /// Move the ball back to the window center. Velocity is kept.
    pub fn reset_ball(&mut self) {
        let position = self.bounds.center();
        self.ball.position = position;
        tracing::debug!(?position, "ball reset");
        self.event_log.push(WorldEvent::BallReset { position });
    }

    /// Advance the ball by `delta_time` seconds and clamp it to the window.
    ///
    /// The enemy is static and never stepped.
    pub fn step(&mut self, delta_time: f32) {
        self.ball.integrate(delta_time, self.bounds);
        self.tick += 1;
        tracing::trace!(tick = self.tick, delta_time, ball = ?self.ball.position, "step");
        self.event_log.push(WorldEvent::Stepped {
            tick: self.tick,
            delta_time,
        });
    }

    /// Rebuild a world from a sequence of events.
    pub fn replay(bounds: Bounds, events: &[WorldEvent]) -> Self {
        let mut world = Self::new(bounds);
        for event in events {
            match event {
                WorldEvent::Setup { seed } => world.place_objects(*seed),
                WorldEvent::VelocityChanged { velocity } => world.ball.velocity = *velocity,
                WorldEvent::BallReset { position } => world.ball.position = *position,
                WorldEvent::Stepped { tick, delta_time } => {
                    world.ball.integrate(*delta_time, world.bounds);
                    world.tick = *tick;
                }
            }
        }
        world
    }

    /// Deterministic FNV-1a hash of tick, seed and both objects.
    pub fn state_hash(&self) -> u64 {
        let mut h: u64 = 0xcbf2_9ce4_8422_2325;
        let mix = |h: &mut u64, bytes: &[u8]| {
            for &b in bytes {
                *h ^= b as u64;
                *h = h.wrapping_mul(0x0100_0000_01b3);
            }
        };
        mix(&mut h, &self.tick.to_le_bytes());
        mix(&mut h, &self.seed.to_le_bytes());
        for obj in [&self.ball, &self.enemy] {
            for v in [obj.position, obj.velocity, obj.size()] {
                mix(&mut h, &v.x.to_le_bytes());
                mix(&mut h, &v.y.to_le_bytes());
            }
        }
        h
    }
}
