// Copyright 2025 the Orrery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use orrery_view2d::{DEFAULT_ZOOM_STEP, ZoomLimits, ZoomLimitsError};

/// Default multiplicative zoom per wheel notch.
pub const DEFAULT_WHEEL_ZOOM_STEP: f64 = 1.1;

/// Default distance, in pixels, a press must travel before it becomes a drag.
pub const DEFAULT_DRAG_THRESHOLD_PX: f64 = 8.0;

/// Default pan multiplier for mouse and pen drags.
pub const DEFAULT_SENSITIVITY: f64 = 0.7;

/// Default pan multiplier for touch drags.
pub const DEFAULT_TOUCH_SENSITIVITY: f64 = 0.6;

/// Default hold time before a touch press counts as a long press.
pub const DEFAULT_LONG_PRESS_MS: u64 = 500;

/// Tunable constants for viewport interaction.
///
/// [`Default`] carries the canonical values. Tunables loaded from
/// configuration should be checked with [`Tunables::validate`] before use.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct Tunables {
    /// Scale bounds enforced by the viewport controller.
    pub zoom_limits: ZoomLimits,
    /// Factor applied by toolbar zoom in/out. Must be greater than `1.0`.
    pub zoom_step: f64,
    /// Factor applied per wheel event. Must be greater than `1.0`.
    pub wheel_zoom_step: f64,
    /// Distance in pixels a press must exceed to become a drag.
    pub drag_threshold_px: f64,
    /// Pan multiplier for mouse and pen drags, typically in `(0, 1]`.
    pub sensitivity: f64,
    /// Pan multiplier for touch drags, typically in `(0, 1]`.
    pub touch_sensitivity: f64,
    /// Extra speed-dependent damping for touch drags; `None` disables it.
    pub fling_damping: Option<FlingDamping>,
    /// Hold time in milliseconds before a touch press fires a long press.
    pub long_press_ms: u64,
}

impl Default for Tunables {
    fn default() -> Self {
        Self {
            zoom_limits: ZoomLimits::default(),
            zoom_step: DEFAULT_ZOOM_STEP,
            wheel_zoom_step: DEFAULT_WHEEL_ZOOM_STEP,
            drag_threshold_px: DEFAULT_DRAG_THRESHOLD_PX,
            sensitivity: DEFAULT_SENSITIVITY,
            touch_sensitivity: DEFAULT_TOUCH_SENSITIVITY,
            fling_damping: Some(FlingDamping::default()),
            long_press_ms: DEFAULT_LONG_PRESS_MS,
        }
    }
}

impl Tunables {
    /// Checks every field, returning the first problem found.
    pub fn validate(&self) -> Result<(), TunablesError> {
        ZoomLimits::new(self.zoom_limits.min(), self.zoom_limits.max())
            .map_err(TunablesError::ZoomLimits)?;
        if !is_step(self.zoom_step) {
            return Err(TunablesError::ZoomStep(self.zoom_step));
        }
        if !is_step(self.wheel_zoom_step) {
            return Err(TunablesError::WheelZoomStep(self.wheel_zoom_step));
        }
        if !(self.drag_threshold_px.is_finite() && self.drag_threshold_px >= 0.0) {
            return Err(TunablesError::DragThreshold(self.drag_threshold_px));
        }
        if !is_positive(self.sensitivity) {
            return Err(TunablesError::Sensitivity(self.sensitivity));
        }
        if !is_positive(self.touch_sensitivity) {
            return Err(TunablesError::TouchSensitivity(self.touch_sensitivity));
        }
        if let Some(fling) = self.fling_damping
            && !fling.is_valid()
        {
            return Err(TunablesError::FlingDamping(fling));
        }
        Ok(())
    }
}

fn is_step(step: f64) -> bool {
    step.is_finite() && step > 1.0
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

/// Speed-dependent damping for touch drags.
///
/// Fast flicks are damped more than slow, deliberate drags. The multiplier is
/// `floor + span * (1 - min(v, max_velocity) / max_velocity)`, so it ranges
/// from `floor + span` for a still finger down to `floor` at or above
/// `max_velocity`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FlingDamping {
    /// Speed, in pixels per millisecond, at which damping saturates.
    pub max_velocity: f64,
    /// Multiplier at or above `max_velocity`.
    pub floor: f64,
    /// Additional multiplier granted to slow drags.
    pub span: f64,
}

impl Default for FlingDamping {
    fn default() -> Self {
        Self {
            max_velocity: 5.0,
            floor: 0.5,
            span: 0.3,
        }
    }
}

impl FlingDamping {
    /// Multiplier for a drag moving at `velocity` pixels per millisecond.
    #[must_use]
    pub fn factor(&self, velocity: f64) -> f64 {
        let speed = if velocity.is_finite() {
            velocity.clamp(0.0, self.max_velocity)
        } else {
            self.max_velocity
        };
        self.floor + self.span * (1.0 - speed / self.max_velocity)
    }

    fn is_valid(&self) -> bool {
        is_positive(self.max_velocity)
            && is_positive(self.floor)
            && self.span.is_finite()
            && self.span >= 0.0
    }
}

/// A rejected [`Tunables`] field.
#[derive(Clone, Copy, PartialEq)]
pub enum TunablesError {
    /// The scale bounds are unusable.
    ZoomLimits(ZoomLimitsError),
    /// The toolbar zoom step is not a finite value above `1.0`.
    ZoomStep(f64),
    /// The wheel zoom step is not a finite value above `1.0`.
    WheelZoomStep(f64),
    /// The drag threshold is negative or not finite.
    DragThreshold(f64),
    /// The mouse sensitivity is not a finite positive value.
    Sensitivity(f64),
    /// The touch sensitivity is not a finite positive value.
    TouchSensitivity(f64),
    /// The fling damping parameters are out of range.
    FlingDamping(FlingDamping),
}

impl fmt::Debug for TunablesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZoomLimits(err) => write!(f, "TunablesError::ZoomLimits({err:?})"),
            Self::ZoomStep(v) => write!(f, "TunablesError::ZoomStep({v:?})"),
            Self::WheelZoomStep(v) => write!(f, "TunablesError::WheelZoomStep({v:?})"),
            Self::DragThreshold(v) => write!(f, "TunablesError::DragThreshold({v:?})"),
            Self::Sensitivity(v) => write!(f, "TunablesError::Sensitivity({v:?})"),
            Self::TouchSensitivity(v) => write!(f, "TunablesError::TouchSensitivity({v:?})"),
            Self::FlingDamping(v) => write!(f, "TunablesError::FlingDamping({v:?})"),
        }
    }
}

impl fmt::Display for TunablesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZoomLimits(err) => write!(f, "invalid zoom limits: {err}"),
            Self::ZoomStep(v) => write!(f, "zoom step {v} must be finite and greater than 1"),
            Self::WheelZoomStep(v) => {
                write!(f, "wheel zoom step {v} must be finite and greater than 1")
            }
            Self::DragThreshold(v) => {
                write!(f, "drag threshold {v} must be finite and non-negative")
            }
            Self::Sensitivity(v) => write!(f, "sensitivity {v} must be finite and positive"),
            Self::TouchSensitivity(v) => {
                write!(f, "touch sensitivity {v} must be finite and positive")
            }
            Self::FlingDamping(v) => write!(
                f,
                "fling damping (max_velocity {}, floor {}, span {}) is out of range",
                v.max_velocity, v.floor, v.span
            ),
        }
    }
}

impl core::error::Error for TunablesError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::ZoomLimits(err) => Some(err),
            _ => None,
        }
    }
}
