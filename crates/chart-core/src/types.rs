// File: crates/chart-core/src/types.rs
// Summary: Shared constants (sizes, paddings, animation timing) and text style types.

/// Default surface width in pixels.
pub const WIDTH: u32 = 300;
/// Default surface height in pixels.
pub const HEIGHT: u32 = 300;

/// Padding around cartesian plots, in pixels.
pub const PADDING: f64 = 20.0;
/// Extra room under x labels for descenders.
pub const DESCENDER_PAD: f64 = 3.0;
/// Gap between y labels and the plot's left edge.
pub const Y_LABEL_GAP: f64 = 5.0;
/// Distance kept between a radial chart's outer radius and the canvas edge.
pub const RADIAL_INSET: f64 = 20.0;
/// Radar labels sit this far above their vertex.
pub const RADAR_LABEL_LIFT: f64 = 10.0;
/// Number of concentric radar grid polygons.
pub const RADAR_RINGS: usize = 5;

/// Wall-clock seconds a full animation takes at a rate of 60.
pub const ANIMATION_DURATION_SECS: f64 = 2.0;
/// Frame-rate baseline the progress rate is normalised against.
pub const BASELINE_FPS: f64 = 60.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TextAlign {
    #[default]
    Start,
    Center,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TextBaseline {
    #[default]
    Alphabetic,
    Middle,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum FontStyle {
    #[default]
    Normal,
    Italic,
    Bold,
}

/// Font used for axis and segment labels.
#[derive(Clone, Debug, PartialEq)]
pub struct Font {
    pub family: String,
    pub size: f64,
    pub style: FontStyle,
}

impl Font {
    pub fn new(family: impl Into<String>, size: f64) -> Self {
        Self { family: family.into(), size, style: FontStyle::Normal }
    }

    /// CSS shorthand, e.g. `normal 12px Arial`.
    pub fn css(&self) -> String {
        let style = match self.style {
            FontStyle::Normal => "normal",
            FontStyle::Italic => "italic",
            FontStyle::Bold => "bold",
        };
        format!("{} {}px {}", style, self.size, self.family)
    }
}

impl Default for Font {
    fn default() -> Self {
        Self::new("Arial", 12.0)
    }
}
