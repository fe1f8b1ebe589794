use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI, TAU};

use glam::{Mat4, Vec3};
use web_sys::CanvasRenderingContext2d;

use super::{project, Camera, ScreenPoint};

pub const MIN_POLAR: f32 = FRAC_PI_4;
pub const MAX_POLAR: f32 = PI / 1.5;
pub const MIN_DISTANCE: f32 = 2.5;
pub const MAX_DISTANCE: f32 = 10.0;
const ORBIT_SPEED: f32 = 0.01;
const ZOOM_SPEED: f32 = 0.001;
const SPIN_PER_FRAME: f32 = 0.005;
const FOV_DEGREES: f32 = 45.0;

const BODY_HEIGHT: f32 = 1.8;
const BODY_RADIUS: f32 = 1.0;

/// Orbit controls around the origin: drag to rotate, wheel to zoom.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitCamera {
    pub azimuth: f32,
    pub polar: f32,
    pub distance: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            azimuth: 0.0,
            polar: FRAC_PI_2,
            distance: 5.0,
        }
    }
}

impl OrbitCamera {
    pub fn eye(&self) -> Vec3 {
        let (sin_polar, cos_polar) = self.polar.sin_cos();
        let (sin_az, cos_az) = self.azimuth.sin_cos();
        Vec3::new(sin_polar * sin_az, cos_polar, sin_polar * cos_az) * self.distance
    }

    pub fn drag(&mut self, dx: f64, dy: f64) {
        self.azimuth = (self.azimuth - dx as f32 * ORBIT_SPEED) % TAU;
        self.polar = (self.polar - dy as f32 * ORBIT_SPEED).clamp(MIN_POLAR, MAX_POLAR);
    }

    pub fn zoom(&mut self, delta_y: f64) {
        let factor = 1.0 + delta_y as f32 * ZOOM_SPEED;
        self.distance = (self.distance * factor.max(0.1)).clamp(MIN_DISTANCE, MAX_DISTANCE);
    }

    pub fn camera(&self, aspect: f32) -> Camera {
        Camera::looking_at_origin(self.eye(), FOV_DEGREES, aspect)
    }
}

/// The triangle demon: a pyramid body with an eye, hat and limbs.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CipherModel {
    pub spin: f32,
    pub wobble: f32,
    pub hovered: bool,
    pub clicked: bool,
    elapsed: f32,
}

impl CipherModel {
    pub fn advance(&mut self, dt_seconds: f32) {
        self.spin = (self.spin + SPIN_PER_FRAME) % TAU;
        self.elapsed += dt_seconds;
        self.wobble = if self.clicked {
            (self.elapsed * 2.0).sin() * 0.2
        } else {
            0.0
        };
    }

    pub fn toggle(&mut self) {
        self.clicked = !self.clicked;
    }

    pub fn scale(&self) -> f32 {
        if self.clicked {
            1.2
        } else {
            1.0
        }
    }

    pub fn transform(&self) -> Mat4 {
        Mat4::from_rotation_y(self.spin)
            * Mat4::from_rotation_z(self.wobble)
            * Mat4::from_scale(Vec3::splat(self.scale()))
    }

    /// Apex first, then the three base corners.
    pub fn body_vertices() -> [Vec3; 4] {
        let base_y = -BODY_HEIGHT / 2.0;
        let corner = |i: f32| {
            let theta = i * TAU / 3.0;
            Vec3::new(BODY_RADIUS * theta.sin(), base_y, BODY_RADIUS * theta.cos())
        };
        [
            Vec3::new(0.0, BODY_HEIGHT / 2.0, 0.0),
            corner(0.0),
            corner(1.0),
            corner(2.0),
        ]
    }

    const FACES: [[usize; 3]; 4] = [[0, 1, 2], [0, 2, 3], [0, 3, 1], [1, 3, 2]];

    fn projected_body(&self, camera: &OrbitCamera, width: f64, height: f64) -> Option<[ScreenPoint; 4]> {
        let mvp = camera
            .camera((width / height.max(1.0)) as f32)
            .build_view_projection_matrix()
            * self.transform();
        let [a, b, c, d] = Self::body_vertices();
        Some([
            project(mvp, a, width, height)?,
            project(mvp, b, width, height)?,
            project(mvp, c, width, height)?,
            project(mvp, d, width, height)?,
        ])
    }

    /// Whether the canvas point lands on the body.
    pub fn hit_test(&self, camera: &OrbitCamera, width: f64, height: f64, x: f64, y: f64) -> bool {
        let Some(points) = self.projected_body(camera, width, height) else {
            return false;
        };
        Self::FACES
            .iter()
            .any(|[a, b, c]| in_triangle((x, y), &points[*a], &points[*b], &points[*c]))
    }

    pub fn draw(&self, ctx: &CanvasRenderingContext2d, camera: &OrbitCamera, width: f64, height: f64) {
        ctx.clear_rect(0.0, 0.0, width, height);
        let aspect = (width / height.max(1.0)) as f32;
        let view_proj = camera.camera(aspect).build_view_projection_matrix();
        let mvp = view_proj * self.transform();
        let Some(body) = self.projected_body(camera, width, height) else {
            return;
        };

        let fill = if self.hovered { "#ffcc00" } else { "#f9b72b" };
        if self.clicked {
            ctx.set_shadow_color("rgba(249, 183, 43, 0.8)");
            ctx.set_shadow_blur(30.0);
        }

        // painter's order, farthest face first
        let mut faces = Self::FACES;
        faces.sort_by(|l, r| {
            let depth = |f: &[usize; 3]| f.iter().map(|i| body[*i].depth).sum::<f32>();
            depth(r).total_cmp(&depth(l))
        });
        ctx.set_stroke_style_str("#000");
        ctx.set_line_width(2.0);
        for face in faces {
            let [a, b, c] = face.map(|i| body[i]);
            ctx.begin_path();
            ctx.move_to(a.x, a.y);
            ctx.line_to(b.x, b.y);
            ctx.line_to(c.x, c.y);
            ctx.close_path();
            ctx.set_fill_style_str(fill);
            ctx.fill();
            ctx.stroke();
        }
        ctx.set_shadow_blur(0.0);

        self.draw_hat(ctx, mvp, width, height);
        self.draw_limbs(ctx, mvp, width, height);
        self.draw_eye(ctx, mvp, width, height);
    }

    fn draw_eye(&self, ctx: &CanvasRenderingContext2d, mvp: Mat4, width: f64, height: f64) {
        let (Some(eye), Some(pupil)) = (
            project(mvp, Vec3::new(0.0, 0.0, 0.7), width, height),
            project(mvp, Vec3::new(0.0, 0.0, 0.8), width, height),
        ) else {
            return;
        };
        let pixels = |world: f32, at: &ScreenPoint| {
            world as f64 * self.scale() as f64 * height * 1.2 / at.w as f64
        };
        ctx.set_fill_style_str("#ffffff");
        ctx.begin_path();
        let _ = ctx.arc(eye.x, eye.y, pixels(0.2, &eye), 0.0, std::f64::consts::TAU);
        ctx.fill();
        ctx.set_fill_style_str("#000000");
        ctx.begin_path();
        let _ = ctx.arc(pupil.x, pupil.y, pixels(0.1, &pupil), 0.0, std::f64::consts::TAU);
        ctx.fill();
    }

    fn draw_hat(&self, ctx: &CanvasRenderingContext2d, mvp: Mat4, width: f64, height: f64) {
        let corners = [
            Vec3::new(-0.3, 0.7, 0.0),
            Vec3::new(0.3, 0.7, 0.0),
            Vec3::new(0.3, 0.9, 0.0),
            Vec3::new(-0.3, 0.9, 0.0),
        ];
        let projected: Option<Vec<ScreenPoint>> = corners
            .iter()
            .map(|c| project(mvp, *c + Vec3::Y * 0.15, width, height))
            .collect();
        let Some(points) = projected else {
            return;
        };
        ctx.set_fill_style_str("#000000");
        ctx.begin_path();
        ctx.move_to(points[0].x, points[0].y);
        for point in &points[1..] {
            ctx.line_to(point.x, point.y);
        }
        ctx.close_path();
        ctx.fill();
    }

    fn draw_limbs(&self, ctx: &CanvasRenderingContext2d, mvp: Mat4, width: f64, height: f64) {
        // arms at mid height, legs below the base
        let limbs = [
            (Vec3::new(-0.55, 0.0, 0.0), Vec3::new(-1.1, 0.25, 0.0)),
            (Vec3::new(0.55, 0.0, 0.0), Vec3::new(1.1, 0.25, 0.0)),
            (Vec3::new(-0.3, -0.9, 0.0), Vec3::new(-0.3, -1.4, 0.0)),
            (Vec3::new(0.3, -0.9, 0.0), Vec3::new(0.3, -1.4, 0.0)),
        ];
        ctx.set_stroke_style_str("#000000");
        ctx.set_line_width(3.0);
        for (from, to) in limbs {
            if let (Some(a), Some(b)) = (
                project(mvp, from, width, height),
                project(mvp, to, width, height),
            ) {
                ctx.begin_path();
                ctx.move_to(a.x, a.y);
                ctx.line_to(b.x, b.y);
                ctx.stroke();
            }
        }
    }
}

fn in_triangle(p: (f64, f64), a: &ScreenPoint, b: &ScreenPoint, c: &ScreenPoint) -> bool {
    let sign = |(px, py): (f64, f64), q: &ScreenPoint, r: &ScreenPoint| {
        (px - r.x) * (q.y - r.y) - (q.x - r.x) * (py - r.y)
    };
    let d1 = sign(p, a, b);
    let d2 = sign(p, b, c);
    let d3 = sign(p, c, a);
    let has_neg = d1 < 0.0 || d2 < 0.0 || d3 < 0.0;
    let has_pos = d1 > 0.0 || d2 > 0.0 || d3 > 0.0;
    !(has_neg && has_pos)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn polar_angle_is_clamped() {
        let mut camera = OrbitCamera::default();
        camera.drag(0.0, 10_000.0);
        assert_eq!(camera.polar, MIN_POLAR);
        camera.drag(0.0, -10_000.0);
        assert_eq!(camera.polar, MAX_POLAR);
    }

    #[test]
    fn zoom_is_clamped() {
        let mut camera = OrbitCamera::default();
        for _ in 0..50 {
            camera.zoom(500.0);
        }
        assert_eq!(camera.distance, MAX_DISTANCE);
        for _ in 0..50 {
            camera.zoom(-500.0);
        }
        assert_eq!(camera.distance, MIN_DISTANCE);
    }

    #[test]
    fn default_eye_sits_on_positive_z() {
        let eye = OrbitCamera::default().eye();
        assert!(eye.x.abs() < 1e-5);
        assert!(eye.y.abs() < 1e-5);
        assert!((eye.z - 5.0).abs() < 1e-5);
    }

    #[test]
    fn click_scales_and_wobbles() {
        let mut model = CipherModel::default();
        model.advance(0.5);
        assert_eq!(model.wobble, 0.0);
        assert_eq!(model.scale(), 1.0);

        model.toggle();
        model.advance(0.5);
        assert!(model.wobble.abs() <= 0.2);
        assert!(model.wobble != 0.0);
        assert_eq!(model.scale(), 1.2);

        model.toggle();
        model.advance(0.1);
        assert_eq!(model.wobble, 0.0);
    }

    #[test]
    fn spin_advances_each_frame() {
        let mut model = CipherModel::default();
        for _ in 0..10 {
            model.advance(1.0 / 60.0);
        }
        assert!((model.spin - 10.0 * SPIN_PER_FRAME).abs() < 1e-5);
    }

    #[test]
    fn centre_of_canvas_hits_the_body() {
        let model = CipherModel::default();
        let camera = OrbitCamera::default();
        assert!(model.hit_test(&camera, 400.0, 400.0, 200.0, 200.0));
        assert!(!model.hit_test(&camera, 400.0, 400.0, 5.0, 5.0));
    }
}
