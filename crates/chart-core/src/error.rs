// File: crates/chart-core/src/error.rs
// Summary: Error taxonomy for chart configuration and rendering.

use thiserror::Error;

/// Errors raised by the chart engine.
///
/// Configuration variants surface from [`crate::ChartConfig::validate`] before any
/// animation starts. Degenerate geometry (all-zero data) is not an error; layout
/// absorbs it and renders empty shapes.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ChartError {
    #[error("chart data is empty")]
    EmptyData,

    #[error("data value at index {index} is not finite")]
    NonFiniteData { index: usize },

    #[error("{colors} colors supplied for {data} data segments")]
    MissingColors { colors: usize, data: usize },

    #[error("{labels} labels supplied for {data} data points")]
    MissingLabels { labels: usize, data: usize },

    #[error("cutout percentage {0} is outside 0..=100")]
    InvalidCutout(f64),

    #[error("cannot parse color `{0}`")]
    InvalidColor(String),

    #[error("unknown easing function `{0}`")]
    UnknownEasing(String),

    #[error("drawing surface is no longer attached")]
    SurfaceUnavailable,
}

pub type Result<T, E = ChartError> = std::result::Result<T, E>;
