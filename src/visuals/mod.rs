//! Canvas renderers. Each keeps its simulation in plain structs that take
//! an injected rng, and only touches the 2D context in `draw`.

pub mod model;
pub mod noise;
pub mod starfield;

use glam::{Mat4, Vec3};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    pub fn looking_at_origin(eye: Vec3, fovy_degrees: f32, aspect: f32) -> Self {
        Self {
            eye,
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect,
            fovy: fovy_degrees.to_radians(),
            znear: 0.1,
            zfar: 1000.0,
        }
    }

    pub fn build_view_projection_matrix(&self) -> Mat4 {
        let view = Mat4::look_at_rh(self.eye, self.target, self.up);
        let proj = Mat4::perspective_rh(self.fovy, self.aspect, self.znear, self.zfar);
        proj * view
    }
}

/// A world point after projection, in canvas pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
    /// Normalised depth, 0 at the near plane and 1 at the far plane.
    pub depth: f32,
    /// Clip-space w, the distance along the view axis.
    pub w: f32,
}

/// `None` for points behind the camera or outside the depth range.
pub fn project(view_proj: Mat4, point: Vec3, width: f64, height: f64) -> Option<ScreenPoint> {
    let clip = view_proj * point.extend(1.0);
    if clip.w <= f32::EPSILON {
        return None;
    }
    let ndc = clip.truncate() / clip.w;
    if !(0.0..=1.0).contains(&ndc.z) {
        return None;
    }
    Some(ScreenPoint {
        x: (ndc.x as f64 + 1.0) * 0.5 * width,
        y: (1.0 - ndc.y as f64) * 0.5 * height,
        depth: ndc.z,
        w: clip.w,
    })
}

pub fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    canvas.get_context("2d").ok().flatten()?.dyn_into().ok()
}

/// Matches the canvas backing store to its laid-out size and returns it.
pub fn fit_canvas(canvas: &HtmlCanvasElement) -> (f64, f64) {
    let width = canvas.client_width().max(1) as u32;
    let height = canvas.client_height().max(1) as u32;
    if canvas.width() != width {
        canvas.set_width(width);
    }
    if canvas.height() != height {
        canvas.set_height(height);
    }
    (width as f64, height as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera() -> Camera {
        Camera::looking_at_origin(Vec3::new(0.0, 0.0, 5.0), 60.0, 1.0)
    }

    #[test]
    fn origin_projects_to_canvas_centre() {
        let vp = camera().build_view_projection_matrix();
        let p = project(vp, Vec3::ZERO, 800.0, 600.0).unwrap();
        assert!((p.x - 400.0).abs() < 1e-3);
        assert!((p.y - 300.0).abs() < 1e-3);
        assert!((p.w - 5.0).abs() < 1e-4);
    }

    #[test]
    fn up_is_up_on_screen() {
        let vp = camera().build_view_projection_matrix();
        let above = project(vp, Vec3::new(0.0, 1.0, 0.0), 100.0, 100.0).unwrap();
        let right = project(vp, Vec3::new(1.0, 0.0, 0.0), 100.0, 100.0).unwrap();
        assert!(above.y < 50.0);
        assert!(right.x > 50.0);
    }

    #[test]
    fn points_behind_camera_are_culled() {
        let vp = camera().build_view_projection_matrix();
        assert_eq!(project(vp, Vec3::new(0.0, 0.0, 9.0), 100.0, 100.0), None);
    }
}
