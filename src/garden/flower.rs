// Flower: stem grows out of the ground, the bloom opens, then it sways forever.

use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, TAU};

use rand::Rng;

use super::between;
use crate::color::Hsl;
use crate::paint::Painter;

const STEM_GROWTH_PER_FRAME: f64 = 3.0;
const BLOOM_GROWTH_PER_FRAME: f64 = 1.0;
const MAX_START_DELAY: u32 = 100; // frames
const SWAY_TIME_SCALE: f64 = 0.1;
const PETALS: usize = 5;

/// One-directional growth stages. Ordering follows the lifecycle so phases can
/// be compared (`GrowingStem < GrowingFlower < Swaying`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum GrowthPhase {
    GrowingStem,
    GrowingFlower,
    Swaying,
}

#[derive(Clone, Debug)]
pub struct Flower {
    base_x: f64,
    base_y: f64,
    stem_height: f64,
    max_stem_height: f64,
    flower_size: f64,
    max_flower_size: f64,
    petal_color: Hsl,
    stem_color: Hsl,
    stem_width: f64,
    phase: GrowthPhase,
    sway_angle: f64,
    sway_speed: f64,
    sway_magnitude: f64,
    delay: u32, // frames left before growth starts
}

impl Flower {
    pub fn new<R: Rng + ?Sized>(
        base_x: f64,
        base_y: f64,
        max_stem_height: f64,
        max_flower_size: f64,
        petal_color: Hsl,
        stem_color: Hsl,
        rng: &mut R,
    ) -> Self {
        Self {
            base_x,
            base_y,
            stem_height: 0.0,
            max_stem_height: max_stem_height.max(0.0),
            flower_size: 0.0,
            max_flower_size: max_flower_size.max(0.0),
            petal_color,
            stem_color,
            stem_width: between(rng, 3.0, 5.0),
            phase: GrowthPhase::GrowingStem,
            sway_angle: 0.0,
            sway_speed: between(rng, 0.01, 0.03),
            sway_magnitude: between(rng, 0.05, 0.1),
            delay: rng.gen_range(0..MAX_START_DELAY),
        }
    }

    /// Override the randomized start delay (in frames).
    pub fn with_delay(mut self, frames: u32) -> Self {
        self.delay = frames;
        self
    }

    /// Advance one frame. `now_ms` only drives the sway oscillation.
    pub fn update(&mut self, now_ms: f64) {
        if self.delay > 0 {
            self.delay -= 1;
            return;
        }

        match self.phase {
            GrowthPhase::GrowingStem => {
                self.stem_height += STEM_GROWTH_PER_FRAME;
                if self.stem_height >= self.max_stem_height {
                    self.stem_height = self.max_stem_height;
                    self.phase = GrowthPhase::GrowingFlower;
                }
            }
            GrowthPhase::GrowingFlower => {
                self.flower_size += BLOOM_GROWTH_PER_FRAME;
                if self.flower_size >= self.max_flower_size {
                    self.flower_size = self.max_flower_size;
                    self.phase = GrowthPhase::Swaying;
                }
            }
            GrowthPhase::Swaying => {
                self.sway_angle =
                    (self.sway_speed * now_ms * SWAY_TIME_SCALE).sin() * self.sway_magnitude;
            }
        }
    }

    pub fn draw<P: Painter + ?Sized>(&self, p: &mut P) {
        p.save();
        // Sway pivots the whole plant around its base
        p.translate(self.base_x, self.base_y);
        p.rotate(self.sway_angle);
        p.translate(-self.base_x, -self.base_y);

        self.draw_stem(p);
        self.draw_leaves(p);
        self.draw_bloom(p);
        p.restore();
    }

    fn draw_stem<P: Painter + ?Sized>(&self, p: &mut P) {
        p.set_stroke_style(&self.stem_color.to_string());
        p.set_line_width(self.stem_width);
        p.begin_path();
        p.move_to(self.base_x, self.base_y);
        p.line_to(self.base_x, self.base_y - self.stem_height);
        p.stroke();
    }

    fn draw_leaves<P: Painter + ?Sized>(&self, p: &mut P) {
        let h = self.stem_height;
        p.set_fill_style(&self.stem_color.to_string());

        p.begin_path();
        p.ellipse(
            self.base_x - h * 0.05,
            self.base_y - h * 0.3,
            h * 0.05,
            h * 0.15,
            -FRAC_PI_4,
            0.0,
            TAU,
        );
        p.fill();

        p.begin_path();
        p.ellipse(
            self.base_x + h * 0.05,
            self.base_y - h * 0.5,
            h * 0.05,
            h * 0.15,
            FRAC_PI_4,
            0.0,
            TAU,
        );
        p.fill();
    }

    fn draw_bloom<P: Painter + ?Sized>(&self, p: &mut P) {
        let s = self.flower_size;
        let top_y = self.base_y - self.stem_height;
        let color = self.petal_color.to_string();
        p.set_fill_style(&color);
        p.set_stroke_style(&color);
        p.set_line_width(1.0);

        p.begin_path();
        p.arc(self.base_x, top_y, s * 0.4, 0.0, TAU);
        p.fill();

        for i in 0..PETALS {
            p.save();
            p.translate(self.base_x, top_y);
            p.rotate(TAU / PETALS as f64 * i as f64);
            p.begin_path();
            p.ellipse(0.0, -s * 0.8, s * 0.4, s * 0.9, FRAC_PI_2, 0.0, TAU);
            p.fill();
            p.restore();
        }
    }

    pub fn base(&self) -> (f64, f64) {
        (self.base_x, self.base_y)
    }
    pub fn stem_height(&self) -> f64 {
        self.stem_height
    }
    pub fn max_stem_height(&self) -> f64 {
        self.max_stem_height
    }
    pub fn flower_size(&self) -> f64 {
        self.flower_size
    }
    pub fn max_flower_size(&self) -> f64 {
        self.max_flower_size
    }
    pub fn phase(&self) -> GrowthPhase {
        self.phase
    }
    pub fn sway_angle(&self) -> f64 {
        self.sway_angle
    }
    pub fn sway_magnitude(&self) -> f64 {
        self.sway_magnitude
    }
    pub fn delay(&self) -> u32 {
        self.delay
    }
    pub fn petal_color(&self) -> Hsl {
        self.petal_color
    }
    pub fn stem_color(&self) -> Hsl {
        self.stem_color
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::{CommandRecorder, DrawCommand};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn flower(max_stem: f64, max_bloom: f64) -> Flower {
        let mut rng = StdRng::seed_from_u64(7);
        Flower::new(
            100.0,
            500.0,
            max_stem,
            max_bloom,
            Hsl::new(320.0, 70, 70),
            Hsl::new(100.0, 60, 40),
            &mut rng,
        )
        .with_delay(0)
    }

    #[test]
    fn test_construction_ranges() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..200 {
            let f = Flower::new(
                0.0,
                0.0,
                300.0,
                40.0,
                Hsl::new(300.0, 70, 70),
                Hsl::new(80.0, 60, 40),
                &mut rng,
            );
            assert!(f.delay() < MAX_START_DELAY);
            assert!((0.05..0.1).contains(&f.sway_magnitude()));
            assert!((3.0..5.0).contains(&f.stem_width));
            assert_eq!(f.phase(), GrowthPhase::GrowingStem);
            assert_eq!(f.stem_height(), 0.0);
        }
    }

    #[test]
    fn test_stem_then_bloom_then_sway() {
        let mut f = flower(10.0, 3.0);
        f.update(0.0);
        assert_eq!(f.stem_height(), 3.0);
        f.update(0.0);
        f.update(0.0);
        assert_eq!(f.stem_height(), 9.0);
        assert_eq!(f.phase(), GrowthPhase::GrowingStem);
        // 12 overshoots the cap, clamped on the transition frame
        f.update(0.0);
        assert_eq!(f.stem_height(), 10.0);
        assert_eq!(f.phase(), GrowthPhase::GrowingFlower);

        for _ in 0..3 {
            f.update(0.0);
        }
        assert_eq!(f.flower_size(), 3.0);
        assert_eq!(f.phase(), GrowthPhase::Swaying);
    }

    #[test]
    fn test_sway_is_bounded_by_magnitude() {
        let mut f = flower(3.0, 1.0);
        f.update(0.0);
        f.update(0.0);
        assert_eq!(f.phase(), GrowthPhase::Swaying);
        for t in 0..500 {
            f.update(t as f64 * 16.7);
            assert!(f.sway_angle().abs() <= f.sway_magnitude() + 1e-12);
            assert_eq!(f.stem_height(), 3.0);
            assert_eq!(f.flower_size(), 1.0);
        }
    }

    #[test]
    fn test_sway_depends_only_on_time() {
        let mut a = flower(3.0, 1.0);
        let mut b = a.clone();
        for f in [&mut a, &mut b] {
            f.update(0.0);
            f.update(0.0);
        }
        a.update(12_345.0);
        b.update(99.0);
        b.update(12_345.0);
        assert_eq!(a.sway_angle(), b.sway_angle());
    }

    #[test]
    fn test_delay_holds_growth() {
        let mut f = flower(100.0, 10.0).with_delay(3);
        for _ in 0..3 {
            f.update(0.0);
            assert_eq!(f.stem_height(), 0.0);
        }
        assert_eq!(f.delay(), 0);
        f.update(0.0);
        assert_eq!(f.stem_height(), 3.0);
    }

    #[test]
    fn test_draw_emits_leaves_petals_and_center() {
        let mut f = flower(30.0, 10.0);
        for _ in 0..30 {
            f.update(0.0);
        }
        let mut rec = CommandRecorder::new();
        f.draw(&mut rec);

        assert!(rec.is_balanced());
        // 2 leaves + 5 petals
        assert_eq!(
            rec.count(|c| matches!(c, DrawCommand::Ellipse { .. })),
            2 + PETALS
        );
        assert_eq!(rec.count(|c| matches!(c, DrawCommand::Arc { .. })), 1);
        assert_eq!(rec.count(|c| matches!(c, DrawCommand::Stroke)), 1);

        let petal_rotations: Vec<f64> = rec
            .commands
            .windows(2)
            .filter_map(|w| match (&w[0], &w[1]) {
                (DrawCommand::Translate(..), DrawCommand::Rotate(a)) => Some(*a),
                _ => None,
            })
            .skip(1) // sway pivot
            .collect();
        assert_eq!(petal_rotations.len(), PETALS);
        for (i, a) in petal_rotations.iter().enumerate() {
            assert!((a - i as f64 * TAU / 5.0).abs() < 1e-9);
        }
    }
}
