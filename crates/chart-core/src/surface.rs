// File: crates/chart-core/src/surface.rs
// Summary: Drawing-surface capability (immediate-mode 2D API) and a command-recording implementation.

use crate::color::Color;
use crate::geometry::{Point, Rect};
use crate::types::{Font, TextAlign, TextBaseline};

/// Text measurement, needed by layout to reserve room for axis labels.
pub trait TextMeasure {
    /// Advance width of `text` in pixels when drawn with `font`.
    fn measure_text(&self, text: &str, font: &Font) -> f64;
}

/// Immediate-mode 2D drawing API, modelled on an HTML canvas context.
///
/// Path commands accumulate into a current path that `fill`/`stroke` paint with the
/// current style. `arc` connects from the current point with a straight line, as on a canvas.
pub trait Surface: TextMeasure {
    /// Logical size in pixels.
    fn size(&self) -> (f64, f64);

    /// Whether the surface can still be drawn to. A detached surface ends the render cycle.
    fn is_attached(&self) -> bool {
        true
    }

    fn clear_rect(&mut self, rect: Rect);

    fn begin_path(&mut self);
    fn move_to(&mut self, p: Point);
    fn line_to(&mut self, p: Point);
    fn bezier_curve_to(&mut self, c1: Point, c2: Point, to: Point);
    /// Angles in radians; clockwise unless `counter_clockwise`.
    fn arc(&mut self, center: Point, radius: f64, start_angle: f64, end_angle: f64, counter_clockwise: bool);
    fn close_path(&mut self);
    fn fill(&mut self);
    fn stroke(&mut self);

    fn fill_rect(&mut self, rect: Rect);
    fn fill_text(&mut self, text: &str, at: Point);

    fn set_fill_color(&mut self, color: Color);
    fn set_stroke_color(&mut self, color: Color);
    fn set_line_width(&mut self, width: f64);
    fn set_font(&mut self, font: &Font);
    fn set_text_align(&mut self, align: TextAlign);
    fn set_text_baseline(&mut self, baseline: TextBaseline);
    fn set_global_alpha(&mut self, alpha: f64);
}

/// One primitive operation issued against a surface.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Clear(Rect),
    BeginPath,
    MoveTo(Point),
    LineTo(Point),
    BezierCurveTo { c1: Point, c2: Point, to: Point },
    Arc { center: Point, radius: f64, start: f64, end: f64, counter_clockwise: bool },
    ClosePath,
    Fill,
    Stroke,
    FillRect(Rect),
    FillText { text: String, at: Point },
    FillColor(Color),
    StrokeColor(Color),
    LineWidth(f64),
    Font(Font),
    TextAlign(TextAlign),
    TextBaseline(TextBaseline),
    GlobalAlpha(f64),
}

impl DrawCommand {
    /// Every numeric operand of the command is finite.
    pub fn is_finite(&self) -> bool {
        let rect_ok = |r: &Rect| r.x.is_finite() && r.y.is_finite() && r.width.is_finite() && r.height.is_finite();
        match self {
            DrawCommand::Clear(r) | DrawCommand::FillRect(r) => rect_ok(r),
            DrawCommand::MoveTo(p) | DrawCommand::LineTo(p) => p.is_finite(),
            DrawCommand::BezierCurveTo { c1, c2, to } => c1.is_finite() && c2.is_finite() && to.is_finite(),
            DrawCommand::Arc { center, radius, start, end, .. } => {
                center.is_finite() && radius.is_finite() && start.is_finite() && end.is_finite()
            }
            DrawCommand::FillText { at, .. } => at.is_finite(),
            DrawCommand::LineWidth(v) | DrawCommand::GlobalAlpha(v) => v.is_finite(),
            _ => true,
        }
    }
}

/// Headless surface that records every command. Text is measured with a fixed advance
/// of `advance_ratio * font.size` per character, so layouts are deterministic.
#[derive(Clone, Debug)]
pub struct RecordingSurface {
    width: f64,
    height: f64,
    attached: bool,
    pub advance_ratio: f64,
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height, attached: true, advance_ratio: 0.5, commands: Vec::new() }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Simulate the host tearing the surface down.
    pub fn detach(&mut self) {
        self.attached = false;
    }

    /// Commands issued since the most recent clear (the last painted frame).
    pub fn last_frame(&self) -> &[DrawCommand] {
        let start = self
            .commands
            .iter()
            .rposition(|c| matches!(c, DrawCommand::Clear(_)))
            .unwrap_or(0);
        &self.commands[start..]
    }

    fn push(&mut self, cmd: DrawCommand) {
        self.commands.push(cmd);
    }
}

impl TextMeasure for RecordingSurface {
    fn measure_text(&self, text: &str, font: &Font) -> f64 {
        text.chars().count() as f64 * font.size * self.advance_ratio
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> (f64, f64) { (self.width, self.height) }
    fn is_attached(&self) -> bool { self.attached }

    fn clear_rect(&mut self, rect: Rect) { self.push(DrawCommand::Clear(rect)); }
    fn begin_path(&mut self) { self.push(DrawCommand::BeginPath); }
    fn move_to(&mut self, p: Point) { self.push(DrawCommand::MoveTo(p)); }
    fn line_to(&mut self, p: Point) { self.push(DrawCommand::LineTo(p)); }
    fn bezier_curve_to(&mut self, c1: Point, c2: Point, to: Point) {
        self.push(DrawCommand::BezierCurveTo { c1, c2, to });
    }
    fn arc(&mut self, center: Point, radius: f64, start: f64, end: f64, counter_clockwise: bool) {
        self.push(DrawCommand::Arc { center, radius, start, end, counter_clockwise });
    }
    fn close_path(&mut self) { self.push(DrawCommand::ClosePath); }
    fn fill(&mut self) { self.push(DrawCommand::Fill); }
    fn stroke(&mut self) { self.push(DrawCommand::Stroke); }
    fn fill_rect(&mut self, rect: Rect) { self.push(DrawCommand::FillRect(rect)); }
    fn fill_text(&mut self, text: &str, at: Point) {
        self.push(DrawCommand::FillText { text: text.to_string(), at });
    }

    fn set_fill_color(&mut self, color: Color) { self.push(DrawCommand::FillColor(color)); }
    fn set_stroke_color(&mut self, color: Color) { self.push(DrawCommand::StrokeColor(color)); }
    fn set_line_width(&mut self, width: f64) { self.push(DrawCommand::LineWidth(width)); }
    fn set_font(&mut self, font: &Font) { self.push(DrawCommand::Font(font.clone())); }
    fn set_text_align(&mut self, align: TextAlign) { self.push(DrawCommand::TextAlign(align)); }
    fn set_text_baseline(&mut self, baseline: TextBaseline) { self.push(DrawCommand::TextBaseline(baseline)); }
    fn set_global_alpha(&mut self, alpha: f64) { self.push(DrawCommand::GlobalAlpha(alpha)); }
}
