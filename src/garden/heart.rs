// Heart: drifts upward on a fixed velocity, spins, and fades out linearly over
// its lifetime.

use std::f64::consts::TAU;

use rand::Rng;

use super::between;
use crate::color::Rgb;
use crate::constants::FADE_REMOVAL_THRESHOLD;
use crate::paint::Painter;

#[derive(Clone, Debug)]
pub struct Heart {
    x: f64,
    y: f64,
    size: f64,
    color: Rgb,
    opacity: f64,
    vx: f64,
    vy: f64,
    rotation: f64,
    rotation_speed: f64,
    age: u32,      // frames
    lifetime: f64, // frames until fully transparent
}

impl Heart {
    pub fn new<R: Rng + ?Sized>(x: f64, y: f64, size: f64, color: Rgb, rng: &mut R) -> Self {
        Self {
            x,
            y,
            size,
            color,
            opacity: 1.0,
            vx: between(rng, -0.8, 0.8),
            vy: between(rng, -1.5, -0.5),
            rotation: between(rng, 0.0, TAU),
            rotation_speed: between(rng, -0.02, 0.02),
            age: 0,
            lifetime: between(rng, 100.0, 250.0),
        }
    }

    pub fn with_lifetime(mut self, frames: f64) -> Self {
        self.lifetime = frames;
        self
    }

    pub fn update(&mut self) {
        self.x += self.vx;
        self.y += self.vy;
        self.rotation += self.rotation_speed;
        self.age += 1;
        self.opacity = fade(self.age, self.lifetime);
    }

    pub fn draw<P: Painter + ?Sized>(&self, p: &mut P) {
        let s = self.size;
        p.save();
        p.translate(self.x, self.y);
        p.rotate(self.rotation);
        p.set_fill_style(&self.color.css_with_alpha(self.opacity));

        p.begin_path();
        p.move_to(0.0, s / 4.0);
        p.bezier_curve_to(s / 2.0, -s / 2.0, s, 0.0, 0.0, s);
        p.bezier_curve_to(-s, 0.0, -s / 2.0, -s / 2.0, 0.0, s / 4.0);
        p.fill();
        p.restore();
    }

    /// Still worth drawing; the garden drops hearts once this turns false.
    pub fn is_visible(&self) -> bool {
        self.opacity > FADE_REMOVAL_THRESHOLD
    }

    pub fn position(&self) -> (f64, f64) {
        (self.x, self.y)
    }
    pub fn velocity(&self) -> (f64, f64) {
        (self.vx, self.vy)
    }
    pub fn size(&self) -> f64 {
        self.size
    }
    pub fn color(&self) -> Rgb {
        self.color
    }
    pub fn opacity(&self) -> f64 {
        self.opacity
    }
    pub fn age(&self) -> u32 {
        self.age
    }
    pub fn lifetime(&self) -> f64 {
        self.lifetime
    }
}

/// Linear fade: `max(0, 1 - age / lifetime)`.
pub fn fade(age: u32, lifetime: f64) -> f64 {
    if lifetime <= 0.0 {
        return 0.0;
    }
    (1.0 - age as f64 / lifetime).max(0.0)
}
