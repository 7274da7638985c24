// File: crates/chart-render-skia/src/text.rs
// Summary: Label shaping with Skia textlayout; measures advance widths and draws aligned to canvas anchors.

use chart_core::{Font, FontStyle, TextAlign, TextBaseline};
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};
use skia_safe as skia;

/// Families tried after the requested one.
const FALLBACK_FAMILIES: [&str; 5] = ["Arial", "Helvetica", "Roboto", "DejaVu Sans", "sans-serif"];

pub struct TextShaper {
    fonts: FontCollection,
}

impl Default for TextShaper {
    fn default() -> Self {
        Self::new()
    }
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(font: &Font, color: skia::Color) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size((font.size as f32).max(1.0));
        ts.set_color(color);
        let mut families: Vec<&str> = vec![font.family.as_str()];
        families.extend(FALLBACK_FAMILIES.iter().filter(|f| **f != font.family));
        ts.set_font_families(&families);
        ts.set_font_style(match font.style {
            FontStyle::Normal => skia::FontStyle::normal(),
            FontStyle::Italic => skia::FontStyle::italic(),
            FontStyle::Bold => skia::FontStyle::bold(),
        });
        ts
    }

    pub fn layout(&self, text: &str, font: &Font, color: skia::Color) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        builder.push_style(&Self::make_style(font, color));
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    pub fn measure_width(&self, text: &str, font: &Font) -> f32 {
        self.layout(text, font, skia::Color::TRANSPARENT).longest_line()
    }

    /// Draw `text` so that `(x, y)` is its anchor under `align` and `baseline`,
    /// the way a canvas `fillText` positions it.
    #[allow(clippy::too_many_arguments)]
    pub fn draw_aligned(
        &self,
        canvas: &skia::Canvas,
        text: &str,
        x: f32,
        y: f32,
        font: &Font,
        color: skia::Color,
        align: TextAlign,
        baseline: TextBaseline,
    ) {
        let mut p = self.layout(text, font, color);
        let width = p.longest_line();
        let left = match align {
            TextAlign::Start => x,
            TextAlign::Center => x - width / 2.0,
            TextAlign::Right => x - width,
        };
        let top = match baseline {
            TextBaseline::Alphabetic => y - p.alphabetic_baseline(),
            TextBaseline::Middle => y - p.height() / 2.0,
        };
        p.paint(canvas, (left, top));
    }
}
