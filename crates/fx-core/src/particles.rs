use crate::config::{Color, FxConfig, SparkShape};
use crate::constants::*;
use glam::Vec2;
use rand::prelude::*;
use std::f32::consts::TAU;

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    pub life: f32,
    pub max_life: f32,
    pub color: Color,
    pub size: f32,
    pub shape: SparkShape,
}

impl Particle {
    pub fn new(position: Vec2, velocity: Vec2, life: f32, config: &FxConfig, size: f32) -> Self {
        Self {
            position,
            velocity,
            life,
            max_life: life,
            color: config.spark_color,
            size,
            shape: config.spark_shape,
        }
    }

    /// Opacity follows remaining life.
    #[inline]
    pub fn alpha(&self) -> f32 {
        if self.max_life > 0.0 {
            (self.life / self.max_life).clamp(0.0, 1.0)
        } else {
            0.0
        }
    }

    #[inline]
    pub fn is_spent(&self) -> bool {
        self.life <= LIFE_EPSILON
    }

    fn integrate(&mut self) {
        self.position += self.velocity;
        self.velocity.y += GRAVITY;
        self.life = (self.life - LIFE_DECAY).max(0.0);
    }
}

/// Spark particles in canvas pixel space.
///
/// Spawns from the observation side land in a pending buffer; [`step`] is the
/// only place the live list is filtered, and it adopts pending sparks first,
/// so nothing spawned between two render ticks can be dropped by the cull.
///
/// [`step`]: ParticleSystem::step
pub struct ParticleSystem {
    live: Vec<Particle>,
    pending: Vec<Particle>,
    rng: StdRng,
}

impl ParticleSystem {
    pub fn new(seed: u64) -> Self {
        Self {
            live: Vec::new(),
            pending: Vec::new(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn push(&mut self, particle: Particle) {
        self.pending.push(particle);
    }

    /// Radial burst fired by a snap release.
    pub fn spawn_burst(&mut self, at: Vec2, config: &FxConfig) {
        self.pending.reserve(PARTICLE_COUNT);
        for _ in 0..PARTICLE_COUNT {
            let angle = self.rng.gen::<f32>() * TAU;
            let speed = self.rng.gen::<f32>() * BURST_SPEED_SPAN + BURST_SPEED_MIN;
            let size = self.rng.gen::<f32>() * config.spark_size + 1.0;
            let velocity = Vec2::new(angle.cos(), angle.sin()) * speed;
            self.pending.push(Particle::new(at, velocity, 1.0, config, size));
        }
    }

    /// A couple of falling sparks under a rubbing fingertip cluster.
    pub fn spawn_rain(&mut self, at: Vec2, config: &FxConfig) {
        for _ in 0..RAIN_PARTICLES_PER_FRAME {
            let x = at.x + (self.rng.gen::<f32>() - 0.5) * RAIN_SPREAD_PX;
            let velocity = Vec2::new(
                (self.rng.gen::<f32>() - 0.5) * RAIN_DRIFT_SPAN,
                self.rng.gen::<f32>() * RAIN_FALL_SPEED_SPAN + RAIN_FALL_SPEED_MIN,
            );
            let size = self.rng.gen::<f32>() * config.spark_size + 2.0;
            self.pending
                .push(Particle::new(Vec2::new(x, at.y), velocity, 1.0, config, size));
        }
    }

    /// One large, slow-rising spark at a winking eye.
    pub fn spawn_wink(&mut self, at: Vec2, config: &FxConfig) {
        self.pending.push(Particle::new(
            at,
            Vec2::new(0.0, -WINK_RISE_SPEED),
            WINK_PARTICLE_LIFE,
            config,
            config.spark_size * WINK_SIZE_MULTIPLIER,
        ));
    }

    /// Advance one render tick: adopt pending spawns, integrate, cull.
    pub fn step(&mut self) {
        self.live.append(&mut self.pending);
        for p in &mut self.live {
            p.integrate();
        }
        self.live.retain(|p| !p.is_spent());
    }

    pub fn live(&self) -> &[Particle] {
        &self.live
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    pub fn len(&self) -> usize {
        self.live.len() + self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
