// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; exports configuration, layout, animation and the chart driver.

pub mod animation;
pub mod chart;
pub mod color;
pub mod config;
pub mod easing;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod render;
pub mod scheduler;
pub mod surface;
pub mod theme;
pub mod types;

pub use animation::{AnimationState, FrameProgress, Phase};
pub use chart::{drive_to_completion, Chart};
pub use color::Color;
pub use config::{
    AnimationMode, AnimationOptions, AxisLabels, AxisStyle, BarOptions, ChartConfig, ChartKind, ChartType,
    DoughnutOptions, LineOptions, PieOptions, PolarOptions, RadarOptions, SegmentStyle,
};
pub use easing::Easing;
pub use error::{ChartError, Result};
pub use geometry::{Point, Rect};
pub use layout::Layout;
pub use render::render_frame;
pub use scheduler::{FrameScheduler, FrameToken, ManualScheduler};
pub use surface::{DrawCommand, RecordingSurface, Surface, TextMeasure};
pub use theme::Theme;
pub use types::{Font, FontStyle, TextAlign, TextBaseline};
