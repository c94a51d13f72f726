//! Garden animation state and the per-frame loop.
//!
//! A [`Garden`] starts [`RunState::Idle`] with empty entity lists. A single
//! [`Garden::trigger`] seeds the flower bed and switches it to
//! [`RunState::Running`]; from then on every [`Garden::frame`] clears the
//! viewport, advances and paints each entity, drops faded hearts and
//! butterflies, and rolls the spawn dice. There is no way back to idle.
//!
//! Randomness and time are always passed in, so a seeded `StdRng` and a
//! synthetic clock reproduce a run exactly.

mod butterfly;
mod flower;
mod heart;

pub use butterfly::{Butterfly, VELOCITY_LIMIT as BUTTERFLY_VELOCITY_LIMIT};
pub use flower::{Flower, GrowthPhase};
pub use heart::{Heart, fade};

use rand::Rng;

use crate::color::{Hsl, Rgb};
use crate::constants::*;
use crate::paint::Painter;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunState {
    Idle,
    Running,
}

/// Drawing surface size in canvas pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

/// Spawn counters since the trigger.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SpawnStats {
    pub hearts: u64,
    pub butterflies: u64,
}

pub struct Garden {
    state: RunState,
    viewport: Viewport,
    flowers: Vec<Flower>,
    hearts: Vec<Heart>,
    butterflies: Vec<Butterfly>,
    stats: SpawnStats,
    frames: u64,
}

impl Garden {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            state: RunState::Idle,
            viewport: Viewport { width, height },
            flowers: Vec::new(),
            hearts: Vec::new(),
            butterflies: Vec::new(),
            stats: SpawnStats::default(),
            frames: 0,
        }
    }

    /// Track a new surface size. Entities keep their positions; only future
    /// spawns and the per-frame clear use the new bounds.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.viewport = Viewport { width, height };
    }

    /// Idle -> Running, planting the initial flower bed. Returns `false` (and
    /// changes nothing) if the garden is already running.
    pub fn trigger<R: Rng + ?Sized>(&mut self, rng: &mut R) -> bool {
        if self.state == RunState::Running {
            log::warn!("garden already running; ignoring repeated trigger");
            return false;
        }
        self.state = RunState::Running;
        self.plant_flowers(rng);
        log::info!(
            "garden started: {} flowers on {}x{}",
            self.flowers.len(),
            self.viewport.width,
            self.viewport.height
        );
        true
    }

    fn plant_flowers<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let Viewport { width, height } = self.viewport;
        let slot = width / (FLOWER_COUNT + 1) as f64;
        for i in 0..FLOWER_COUNT {
            let x = slot * (i + 1) as f64 + between(rng, -FLOWER_JITTER_X, FLOWER_JITTER_X);
            let y = height - between(rng, FLOWER_BASE_LIFT_MIN, FLOWER_BASE_LIFT_MAX);
            let max_stem = between(
                rng,
                height * FLOWER_STEM_MIN_FRACTION,
                height * FLOWER_STEM_MAX_FRACTION,
            );
            let max_bloom = between(rng, FLOWER_BLOOM_MIN, FLOWER_BLOOM_MAX);
            let petal = Hsl::new(between(rng, PETAL_HUE_MIN, PETAL_HUE_MAX), 70, 70);
            let stem = Hsl::new(between(rng, STEM_HUE_MIN, STEM_HUE_MAX), 60, 40);
            self.flowers
                .push(Flower::new(x, y, max_stem, max_bloom, petal, stem, rng));
        }
    }

    /// Run one animation frame. Does nothing while idle.
    pub fn frame<P, R>(&mut self, painter: &mut P, now_ms: f64, rng: &mut R)
    where
        P: Painter + ?Sized,
        R: Rng + ?Sized,
    {
        if self.state == RunState::Idle {
            return;
        }
        let Viewport { width, height } = self.viewport;
        painter.clear_rect(0.0, 0.0, width, height);

        for flower in &mut self.flowers {
            flower.update(now_ms);
            flower.draw(painter);
        }

        self.hearts.retain_mut(|heart| {
            heart.update();
            heart.draw(painter);
            heart.is_visible()
        });

        self.butterflies.retain_mut(|butterfly| {
            butterfly.update(rng);
            butterfly.draw(painter);
            butterfly.is_visible()
        });

        self.spawn(rng);

        self.frames += 1;
        if self.frames % STATS_LOG_INTERVAL == 0 {
            log::debug!(
                "frame {}: {} hearts, {} butterflies alive; spawned {:?}",
                self.frames,
                self.hearts.len(),
                self.butterflies.len(),
                self.stats
            );
        }
    }

    /// Independent per-frame draws for a new heart and a new butterfly, both
    /// entering from the bottom edge.
    fn spawn<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let Viewport { width, height } = self.viewport;

        if rng.gen_bool(HEART_SPAWN_CHANCE) {
            let color = Rgb::new(
                255,
                rng.gen_range(HEART_GREEN_MIN..=HEART_GREEN_MAX),
                rng.gen_range(HEART_BLUE_MIN..=HEART_BLUE_MAX),
            );
            let x = between(rng, 0.0, width);
            let size = between(rng, HEART_SIZE_MIN, HEART_SIZE_MAX);
            self.hearts.push(Heart::new(x, height, size, color, rng));
            self.stats.hearts += 1;
            log::trace!("heart spawned at x={x:.1}");
        }

        if rng.gen_bool(BUTTERFLY_SPAWN_CHANCE) {
            let x = between(rng, 0.0, width);
            self.butterflies.push(Butterfly::new(x, height, rng));
            self.stats.butterflies += 1;
            log::trace!("butterfly spawned at x={x:.1}");
        }
    }

    pub fn state(&self) -> RunState {
        self.state
    }
    pub fn is_running(&self) -> bool {
        self.state == RunState::Running
    }
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }
    pub fn flowers(&self) -> &[Flower] {
        &self.flowers
    }
    pub fn hearts(&self) -> &[Heart] {
        &self.hearts
    }
    pub fn butterflies(&self) -> &[Butterfly] {
        &self.butterflies
    }
    pub fn stats(&self) -> SpawnStats {
        self.stats
    }
    /// Frames run since the trigger.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Add a heart directly (host demos and tests).
    pub fn push_heart(&mut self, heart: Heart) {
        self.hearts.push(heart);
    }
    pub fn push_butterfly(&mut self, butterfly: Butterfly) {
        self.butterflies.push(butterfly);
    }
}

/// Uniform draw in `[min, max)`; collapses to `min` for an empty range.
pub fn between<R: Rng + ?Sized>(rng: &mut R, min: f64, max: f64) -> f64 {
    if max > min {
        rng.gen_range(min..max)
    } else {
        min
    }
}
