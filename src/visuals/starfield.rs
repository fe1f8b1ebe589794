use std::f32::consts::TAU;

use glam::{Mat4, Vec3};
use rand::Rng;
use web_sys::CanvasRenderingContext2d;

use super::{project, Camera};
use crate::effects::{weighted_choice, WeightedTable};

pub const STAR_COUNT: usize = 6000;
pub const FIELD_RADIUS: f32 = 15.0;
/// Radians per frame around the vertical axis.
pub const ROTATION_PER_FRAME: f32 = 0.0001;
const TWINKLE_ODDS: f64 = 0.01;
const TWINKLE_RECOVERY: f32 = 0.02;
const CAMERA_DISTANCE: f32 = 5.0;
const FOV_DEGREES: f32 = 60.0;

/// Star colours with their share of the sky.
const COLOR_TIERS: [([f32; 3], f64); 4] = [
    ([0.9, 0.9, 1.0], 0.60),
    ([1.0, 1.0, 0.8], 0.20),
    ([0.8, 0.8, 1.0], 0.15),
    ([1.0, 0.8, 0.8], 0.05),
];

/// Size ranges: a few bright giants among many small stars.
const SIZE_TIERS: [((f32, f32), f64); 2] = [((2.0, 5.0), 0.05), ((0.5, 2.0), 0.95)];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Star {
    pub position: Vec3,
    pub color: [f32; 3],
    pub size: f32,
    /// Brightness multiplier, 1.0 when steady.
    pub twinkle: f32,
}

pub struct Starfield {
    stars: Vec<Star>,
    rotation: f32,
}

impl Starfield {
    pub fn generate<R: Rng + ?Sized>(rng: &mut R, count: usize, radius: f32) -> Self {
        let colors = WeightedTable::new(&COLOR_TIERS);
        let stars = (0..count)
            .map(|_| {
                let r = rng.gen::<f32>() * radius;
                let theta = rng.gen::<f32>() * TAU;
                let phi = rng.gen_range(-1.0f32..1.0).acos();
                let position = Vec3::new(
                    r * phi.sin() * theta.cos(),
                    r * phi.sin() * theta.sin(),
                    r * phi.cos(),
                );
                let (low, high) = weighted_choice(rng, &SIZE_TIERS)
                    .copied()
                    .unwrap_or(SIZE_TIERS[1].0);
                let size = rng.gen_range(low..high);
                Star {
                    position,
                    color: colors.sample(rng).copied().unwrap_or(COLOR_TIERS[0].0),
                    size,
                    twinkle: 1.0,
                }
            })
            .collect();
        Self {
            stars,
            rotation: 0.0,
        }
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    #[cfg(test)]
    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    /// One frame of drift and twinkle. `seconds` is the page clock.
    pub fn advance<R: Rng + ?Sized>(&mut self, rng: &mut R, seconds: f64) {
        self.rotation = (self.rotation + ROTATION_PER_FRAME) % TAU;
        for (i, star) in self.stars.iter_mut().enumerate() {
            if rng.gen_bool(TWINKLE_ODDS) {
                star.twinkle = 0.5 + ((seconds * 10.0 + i as f64).sin() as f32) * 0.5;
            } else {
                star.twinkle = (star.twinkle + TWINKLE_RECOVERY).min(1.0);
            }
        }
    }

    pub fn camera(aspect: f32) -> Camera {
        Camera::looking_at_origin(Vec3::new(0.0, 0.0, CAMERA_DISTANCE), FOV_DEGREES, aspect)
    }

    pub fn draw(&self, ctx: &CanvasRenderingContext2d, width: f64, height: f64) {
        ctx.set_fill_style_str("#000");
        ctx.fill_rect(0.0, 0.0, width, height);
        let _ = ctx.set_global_composite_operation("lighter");

        let aspect = (width / height.max(1.0)) as f32;
        let camera = Self::camera(aspect);
        let view_proj = camera.build_view_projection_matrix() * Mat4::from_rotation_y(self.rotation);
        let focal = height * 0.5 / (camera.fovy as f64 * 0.5).tan();

        for star in &self.stars {
            let Some(point) = project(view_proj, star.position, width, height) else {
                continue;
            };
            if point.x < 0.0 || point.x > width || point.y < 0.0 || point.y > height {
                continue;
            }
            // world-space size attenuated by distance
            let radius = (star.size as f64 * 0.05 * focal / point.w as f64).max(0.3);
            let [r, g, b] = star.color.map(|c| (c * star.twinkle * 255.0) as u8);
            ctx.set_fill_style_str(&format!("rgba({r}, {g}, {b}, 0.8)"));
            ctx.fill_rect(point.x - radius, point.y - radius, radius * 2.0, radius * 2.0);
        }

        let _ = ctx.set_global_composite_operation("source-over");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn stars_fill_a_ball_of_the_given_radius() {
        let mut rng = StdRng::seed_from_u64(12);
        let field = Starfield::generate(&mut rng, 500, FIELD_RADIUS);
        assert_eq!(field.stars().len(), 500);
        for star in field.stars() {
            assert!(star.position.length() <= FIELD_RADIUS + 1e-4);
            assert!((0.5..5.0).contains(&star.size));
            assert!(COLOR_TIERS.iter().any(|(c, _)| *c == star.color));
        }
    }

    #[test]
    fn common_colour_dominates() {
        let mut rng = StdRng::seed_from_u64(31);
        let field = Starfield::generate(&mut rng, STAR_COUNT, FIELD_RADIUS);
        let common = field
            .stars()
            .iter()
            .filter(|s| s.color == COLOR_TIERS[0].0)
            .count();
        let share = common as f64 / STAR_COUNT as f64;
        assert!((0.55..0.65).contains(&share), "share {share}");
    }

    #[test]
    fn advance_rotates_and_keeps_twinkle_in_range() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut field = Starfield::generate(&mut rng, 200, FIELD_RADIUS);
        for frame in 0..300 {
            field.advance(&mut rng, frame as f64 / 60.0);
        }
        assert!((field.rotation() - 300.0 * ROTATION_PER_FRAME).abs() < 1e-4);
        for star in field.stars() {
            assert!((0.0..=1.0).contains(&star.twinkle));
        }
    }
}
