use rand::Rng;
use web_sys::CanvasRenderingContext2d;

/// Specks per square pixel.
pub const DENSITY: f64 = 0.05;
/// Cap so large screens keep a steady frame rate.
pub const MAX_SPECKS: usize = 40_000;
const SPECK_SIZE: f64 = 2.0;
const LINE_ODDS: f64 = 0.05;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Speck {
    pub x: f64,
    pub y: f64,
    pub gray: u8,
    pub alpha: f64,
}

/// Full-width cyan band drawn on roughly one frame in twenty.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlitchLine {
    pub y: f64,
    pub height: f64,
    pub alpha: f64,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct NoiseFrame {
    pub specks: Vec<Speck>,
    pub line: Option<GlitchLine>,
}

impl NoiseFrame {
    pub fn speck_count(width: f64, height: f64) -> usize {
        if width <= 0.0 || height <= 0.0 {
            return 0;
        }
        ((width * height * DENSITY) as usize).min(MAX_SPECKS)
    }

    pub fn generate<R: Rng + ?Sized>(rng: &mut R, width: f64, height: f64) -> Self {
        let count = Self::speck_count(width, height);
        if count == 0 {
            return Self::default();
        }
        let specks = (0..count)
            .map(|_| Speck {
                x: rng.gen_range(0.0..width),
                y: rng.gen_range(0.0..height),
                gray: rng.gen(),
                alpha: rng.gen_range(0.05..0.10),
            })
            .collect();
        let line = rng.gen_bool(LINE_ODDS).then(|| GlitchLine {
            y: rng.gen_range(0.0..height),
            height: rng.gen_range(2.0..12.0),
            alpha: rng.gen_range(0.0..0.2),
        });
        Self { specks, line }
    }

    pub fn draw(&self, ctx: &CanvasRenderingContext2d, width: f64, height: f64) {
        // translucent wash so earlier frames fade rather than vanish
        ctx.set_fill_style_str("rgba(0, 0, 0, 0.4)");
        ctx.fill_rect(0.0, 0.0, width, height);

        for speck in &self.specks {
            ctx.set_fill_style_str(&format!(
                "rgba({g}, {g}, {g}, {a:.3})",
                g = speck.gray,
                a = speck.alpha
            ));
            ctx.fill_rect(speck.x, speck.y, SPECK_SIZE, SPECK_SIZE);
        }

        if let Some(line) = self.line {
            ctx.set_fill_style_str(&format!("rgba(0, 255, 255, {:.3})", line.alpha));
            ctx.fill_rect(0.0, line.y, width, line.height);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn speck_count_scales_with_area_and_is_capped() {
        assert_eq!(NoiseFrame::speck_count(100.0, 100.0), 500);
        assert_eq!(NoiseFrame::speck_count(3840.0, 2160.0), MAX_SPECKS);
        assert_eq!(NoiseFrame::speck_count(0.0, 500.0), 0);
    }

    #[test]
    fn specks_stay_inside_canvas_and_subtle() {
        let mut rng = StdRng::seed_from_u64(4);
        let frame = NoiseFrame::generate(&mut rng, 120.0, 80.0);
        assert_eq!(frame.specks.len(), 480);
        for speck in &frame.specks {
            assert!((0.0..120.0).contains(&speck.x));
            assert!((0.0..80.0).contains(&speck.y));
            assert!((0.05..0.10).contains(&speck.alpha));
        }
    }

    #[test]
    fn empty_canvas_yields_empty_frame() {
        let mut rng = StdRng::seed_from_u64(4);
        assert_eq!(NoiseFrame::generate(&mut rng, 0.0, 0.0), NoiseFrame::default());
    }

    #[test]
    fn glitch_lines_are_occasional() {
        let mut rng = StdRng::seed_from_u64(99);
        let lines = (0..4000)
            .filter_map(|_| NoiseFrame::generate(&mut rng, 10.0, 10.0).line)
            .inspect(|line| {
                assert!((2.0..12.0).contains(&line.height));
                assert!(line.alpha < 0.2);
            })
            .count();
        assert!((120..300).contains(&lines), "{lines} lines");
    }
}
