// File: crates/chart-render-skia/src/surface.rs
// Summary: Skia CPU raster surface implementing the chart-core drawing API, with PNG and RGBA readback.
// Notes:
// - Coordinates are logical pixels; the canvas is pre-scaled by the device pixel ratio.
// - Arcs follow canvas semantics and are emitted to Skia in pieces of at most 180 degrees.

use std::f64::consts::TAU;

use anyhow::Result;
use chart_core::{Color, Font, Point, Rect, Surface, TextAlign, TextBaseline, TextMeasure};
use skia_safe as skia;

use crate::text::TextShaper;

/// Signed sweep of a canvas `arc(start, end, counter_clockwise)` call, in radians.
///
/// A difference of a whole turn or more (in the drawing direction) is a full circle;
/// an end angle on the wrong side wraps around.
pub fn canvas_sweep(start: f64, end: f64, counter_clockwise: bool) -> f64 {
    let diff = end - start;
    if !counter_clockwise {
        if diff >= TAU {
            TAU
        } else if diff < 0.0 {
            TAU - (-diff).rem_euclid(TAU)
        } else {
            diff
        }
    } else if -diff >= TAU {
        -TAU
    } else if diff > 0.0 {
        -(TAU - diff.rem_euclid(TAU))
    } else {
        diff
    }
}

pub(crate) fn to_sk(c: Color) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

fn sk_rect(r: Rect) -> skia::Rect {
    skia::Rect::from_xywh(r.x as f32, r.y as f32, r.width as f32, r.height as f32)
}

struct DrawState {
    fill: Color,
    stroke: Color,
    line_width: f64,
    font: Font,
    align: TextAlign,
    baseline: TextBaseline,
    alpha: f64,
}

impl Default for DrawState {
    fn default() -> Self {
        Self {
            fill: Color::BLACK,
            stroke: Color::BLACK,
            line_width: 1.0,
            font: Font::default(),
            align: TextAlign::Start,
            baseline: TextBaseline::Alphabetic,
            alpha: 1.0,
        }
    }
}

pub struct SkiaSurface {
    surface: skia::Surface,
    width: f64,
    height: f64,
    dpr: f32,
    background: Color,
    path: skia::Path,
    state: DrawState,
    shaper: TextShaper,
    attached: bool,
}

impl SkiaSurface {
    /// Raster surface of `width` x `height` logical pixels at `dpr` device pixels each.
    pub fn new(width: u32, height: u32, dpr: f32, background: Color) -> Result<Self> {
        let dpr = if dpr.is_finite() && dpr > 0.0 { dpr } else { 1.0 };
        let px_w = ((width as f32) * dpr).ceil().max(1.0) as i32;
        let px_h = ((height as f32) * dpr).ceil().max(1.0) as i32;
        let mut surface = skia::surfaces::raster_n32_premul((px_w, px_h))
            .ok_or_else(|| anyhow::anyhow!("failed to create {px_w}x{px_h} raster surface"))?;
        surface.canvas().scale((dpr, dpr));
        tracing::trace!(width, height, dpr, "raster surface created");
        Ok(Self {
            surface,
            width: width as f64,
            height: height as f64,
            dpr,
            background,
            path: skia::Path::new(),
            state: DrawState::default(),
            shaper: TextShaper::new(),
            attached: true,
        })
    }

    /// Device pixel dimensions.
    pub fn pixel_size(&self) -> (i32, i32) {
        (self.surface.width(), self.surface.height())
    }

    pub fn dpr(&self) -> f32 {
        self.dpr
    }

    /// Mark the surface as gone; the next frame fails with `SurfaceUnavailable`.
    pub fn detach(&mut self) {
        self.attached = false;
    }

    /// Encode the current pixels as PNG.
    pub fn encode_png(&mut self) -> Result<Vec<u8>> {
        let image = self.surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Read the current pixels as unpremultiplied RGBA8: `(pixels, width, height, row_bytes)`.
    pub fn read_rgba8(&mut self) -> Result<(Vec<u8>, i32, i32, usize)> {
        let (w, h) = self.pixel_size();
        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let row_bytes = w as usize * 4;
        let mut pixels = vec![0u8; row_bytes * h as usize];
        if !self.surface.read_pixels(&info, &mut pixels, row_bytes, (0, 0)) {
            anyhow::bail!("read_pixels failed for {w}x{h} surface");
        }
        Ok((pixels, w, h, row_bytes))
    }

    fn paint(&self, color: Color, style: skia::paint::Style) -> skia::Paint {
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_style(style);
        paint.set_color(to_sk(color));
        paint.set_alpha_f((color.alpha_f() * self.state.alpha.clamp(0.0, 1.0)) as f32);
        if style == skia::paint::Style::Stroke {
            paint.set_stroke_width(self.state.line_width as f32);
        }
        paint
    }
}

impl TextMeasure for SkiaSurface {
    fn measure_text(&self, text: &str, font: &Font) -> f64 {
        self.shaper.measure_width(text, font) as f64
    }
}

impl Surface for SkiaSurface {
    fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    fn is_attached(&self) -> bool {
        self.attached
    }

    fn clear_rect(&mut self, rect: Rect) {
        let mut paint = skia::Paint::default();
        paint.set_color(to_sk(self.background));
        paint.set_blend_mode(skia::BlendMode::Src);
        self.surface.canvas().draw_rect(sk_rect(rect), &paint);
    }

    fn begin_path(&mut self) {
        self.path.reset();
    }

    fn move_to(&mut self, p: Point) {
        self.path.move_to((p.x as f32, p.y as f32));
    }

    fn line_to(&mut self, p: Point) {
        self.path.line_to((p.x as f32, p.y as f32));
    }

    fn bezier_curve_to(&mut self, c1: Point, c2: Point, to: Point) {
        self.path.cubic_to((c1.x as f32, c1.y as f32), (c2.x as f32, c2.y as f32), (to.x as f32, to.y as f32));
    }

    fn arc(&mut self, center: Point, radius: f64, start_angle: f64, end_angle: f64, counter_clockwise: bool) {
        if radius <= 0.0 {
            self.line_to(center);
            return;
        }
        let oval = skia::Rect::from_ltrb(
            (center.x - radius) as f32,
            (center.y - radius) as f32,
            (center.x + radius) as f32,
            (center.y + radius) as f32,
        );
        let sweep = canvas_sweep(start_angle, end_angle, counter_clockwise).to_degrees();
        let pieces = (sweep.abs() / 180.0).ceil().max(1.0);
        let step = sweep / pieces;
        let mut at = start_angle.to_degrees();
        for _ in 0..pieces as usize {
            self.path.arc_to(oval, at as f32, step as f32, false);
            at += step;
        }
    }

    fn close_path(&mut self) {
        self.path.close();
    }

    fn fill(&mut self) {
        let paint = self.paint(self.state.fill, skia::paint::Style::Fill);
        self.surface.canvas().draw_path(&self.path, &paint);
    }

    fn stroke(&mut self) {
        let paint = self.paint(self.state.stroke, skia::paint::Style::Stroke);
        self.surface.canvas().draw_path(&self.path, &paint);
    }

    fn fill_rect(&mut self, rect: Rect) {
        let paint = self.paint(self.state.fill, skia::paint::Style::Fill);
        self.surface.canvas().draw_rect(sk_rect(rect), &paint);
    }

    fn fill_text(&mut self, text: &str, at: Point) {
        let color = self.state.fill.scale_alpha(self.state.alpha);
        let canvas = self.surface.canvas();
        self.shaper.draw_aligned(
            canvas,
            text,
            at.x as f32,
            at.y as f32,
            &self.state.font,
            to_sk(color),
            self.state.align,
            self.state.baseline,
        );
    }

    fn set_fill_color(&mut self, color: Color) {
        self.state.fill = color;
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.state.stroke = color;
    }

    fn set_line_width(&mut self, width: f64) {
        if width.is_finite() && width >= 0.0 {
            self.state.line_width = width;
        }
    }

    fn set_font(&mut self, font: &Font) {
        self.state.font = font.clone();
    }

    fn set_text_align(&mut self, align: TextAlign) {
        self.state.align = align;
    }

    fn set_text_baseline(&mut self, baseline: TextBaseline) {
        self.state.baseline = baseline;
    }

    fn set_global_alpha(&mut self, alpha: f64) {
        if alpha.is_finite() {
            self.state.alpha = alpha.clamp(0.0, 1.0);
        }
    }
}
