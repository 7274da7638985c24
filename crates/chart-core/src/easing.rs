// File: crates/chart-core/src/easing.rs
// Summary: Easing curves mapping linear progress to eased progress.

use crate::error::{ChartError, Result};

/// Quadratic ease-in/ease-out.
#[inline]
pub fn ease_in_out_quad(t: f64) -> f64 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
    }
}

/// Four-piece quadratic bounce settling at 1.
pub fn ease_out_bounce(t: f64) -> f64 {
    const N1: f64 = 7.5625;
    const D1: f64 = 2.75;

    if t < 1.0 / D1 {
        N1 * t * t
    } else if t < 2.0 / D1 {
        let t = t - 1.5 / D1;
        N1 * t * t + 0.75
    } else if t < 2.5 / D1 {
        let t = t - 2.25 / D1;
        N1 * t * t + 0.9375
    } else {
        let t = t - 2.625 / D1;
        N1 * t * t + 0.984375
    }
}

/// Easing selection carried by a chart configuration.
#[derive(Clone, Copy, Debug, Default)]
pub enum Easing {
    Linear,
    #[default]
    EaseInOutQuad,
    EaseOutBounce,
    Custom(fn(f64) -> f64),
}

impl Easing {
    /// Apply the easing to `t`. Values outside `[0, 1]` are extrapolated, not clamped.
    pub fn apply(&self, t: f64) -> f64 {
        match self {
            Easing::Linear => t,
            Easing::EaseInOutQuad => ease_in_out_quad(t),
            Easing::EaseOutBounce => ease_out_bounce(t),
            Easing::Custom(f) => f(t),
        }
    }

    /// Look up an easing by its camelCase or snake_case name.
    pub fn from_name(name: &str) -> Result<Self> {
        match name.trim() {
            "linear" => Ok(Easing::Linear),
            "easeInOutQuad" | "ease_in_out_quad" => Ok(Easing::EaseInOutQuad),
            "easeOutBounce" | "ease_out_bounce" => Ok(Easing::EaseOutBounce),
            other => Err(ChartError::UnknownEasing(other.to_string())),
        }
    }
}

impl PartialEq for Easing {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Easing::Linear, Easing::Linear)
            | (Easing::EaseInOutQuad, Easing::EaseInOutQuad)
            | (Easing::EaseOutBounce, Easing::EaseOutBounce) => true,
            (Easing::Custom(a), Easing::Custom(b)) => std::ptr::eq(*a as *const (), *b as *const ()),
            _ => false,
        }
    }
}
