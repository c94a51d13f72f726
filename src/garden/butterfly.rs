// Butterfly: erratic flight with flapping wings, fading at a fixed rate.

use rand::Rng;

use super::between;
use crate::color::Rgb;
use crate::constants::FADE_REMOVAL_THRESHOLD;
use crate::paint::Painter;

pub const VELOCITY_LIMIT: f64 = 2.0;
const VELOCITY_JITTER: f64 = 0.05;
const FADE_PER_FRAME: f64 = 0.005;
const WING_COLOR: Rgb = Rgb::new(200, 150, 255);

#[derive(Clone, Debug)]
pub struct Butterfly {
    x: f64,
    y: f64,
    size: f64,
    vx: f64,
    vy: f64,
    flap: f64,
    flap_speed: f64,
    // Unclamped; may dip below zero on the frame it is removed
    opacity: f64,
}

impl Butterfly {
    pub fn new<R: Rng + ?Sized>(x: f64, y: f64, rng: &mut R) -> Self {
        Self {
            x,
            y,
            size: between(rng, 20.0, 40.0),
            vx: between(rng, -1.0, 1.0),
            vy: between(rng, -1.5, -0.5),
            flap: 0.0,
            flap_speed: between(rng, 0.1, 0.3),
            opacity: 1.0,
        }
    }

    pub fn update<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.x += self.vx;
        self.y += self.vy;
        self.flap += self.flap_speed;

        self.vx += between(rng, -VELOCITY_JITTER, VELOCITY_JITTER);
        self.vy += between(rng, -VELOCITY_JITTER, VELOCITY_JITTER);
        self.vx = self.vx.clamp(-VELOCITY_LIMIT, VELOCITY_LIMIT);
        self.vy = self.vy.clamp(-VELOCITY_LIMIT, VELOCITY_LIMIT);

        self.opacity -= FADE_PER_FRAME;
    }

    pub fn draw<P: Painter + ?Sized>(&self, p: &mut P) {
        let s = self.size;
        p.save();
        p.translate(self.x, self.y);
        p.set_fill_style(&WING_COLOR.css_with_alpha(self.opacity));

        // body
        p.fill_rect(-s * 0.1, -s * 0.5, s * 0.2, s);

        let wing_w = s * 0.6;
        let wing_h = s * 0.8;
        let lift = -wing_h * self.flap.sin() * 0.5;
        for side in [-1.0, 1.0] {
            p.begin_path();
            p.move_to(0.0, 0.0);
            p.bezier_curve_to(
                side * wing_w,
                lift,
                side * wing_w * 0.5,
                -wing_h,
                side * s * 0.1,
                -s * 0.2,
            );
            p.line_to(side * s * 0.1, s * 0.2);
            p.close_path();
            p.fill();
        }
        p.restore();
    }

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
    pub fn flap(&self) -> f64 {
        self.flap
    }
    pub fn opacity(&self) -> f64 {
        self.opacity
    }
}
