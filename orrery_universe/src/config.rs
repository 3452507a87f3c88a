// Copyright 2025 the Orrery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use kurbo::Size;
use orrery_hit::HitParams;
use orrery_input::{DeviceCaps, Tunables, TunablesError};
use orrery_projection::{GridSpec, ProjectionParams};

/// Everything a [`Universe`](crate::Universe) is configured with.
///
/// With the `serde` feature this loads from partial configuration; missing
/// fields keep their defaults.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct UniverseConfig {
    /// Interaction constants.
    pub tunables: Tunables,
    /// Starting device capabilities.
    pub device: DeviceCaps,
    /// View size, cull margin and detail thresholds.
    pub projection: ProjectionParams,
    /// Debug grid.
    pub grid: GridSpec,
    /// Whether frames carry debug grid lines.
    pub show_grid: bool,
    /// Hit-test slack.
    pub hit: HitParams,
}

impl Default for UniverseConfig {
    fn default() -> Self {
        Self {
            tunables: Tunables::default(),
            device: DeviceCaps::default(),
            projection: ProjectionParams::default(),
            grid: GridSpec::default(),
            show_grid: true,
            hit: HitParams::default(),
        }
    }
}

impl UniverseConfig {
    /// Checks every part of the configuration.
    ///
    /// A zero view size is accepted; the host sets the real size once it
    /// knows it.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.tunables.validate()?;
        let tolerance = self.hit.tolerance;
        if !(tolerance.is_finite() && tolerance >= 0.0) {
            return Err(ConfigError::HitTolerance(tolerance));
        }
        let size = self.projection.view_size;
        if !(size.is_finite() && size.width >= 0.0 && size.height >= 0.0) {
            return Err(ConfigError::ViewSize(size));
        }
        let margin = self.projection.margin;
        if !(margin.is_finite() && margin >= 0.0) {
            return Err(ConfigError::CullMargin(margin));
        }
        let detail = self.projection.detail;
        for scale in [detail.label_scale, detail.rating_scale] {
            if !(scale.is_finite() && scale >= 0.0) {
                return Err(ConfigError::DetailScale(scale));
            }
        }
        if !(self.grid.spacing.is_finite() && self.grid.spacing > 0.0) {
            return Err(ConfigError::GridSpacing(self.grid.spacing));
        }
        if !(self.grid.min_scale.is_finite() && self.grid.min_scale >= 0.0) {
            return Err(ConfigError::GridMinScale(self.grid.min_scale));
        }
        Ok(())
    }
}

/// A [`UniverseConfig`] that cannot be used.
#[derive(Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// The interaction constants are invalid.
    Tunables(TunablesError),
    /// Hit tolerance is negative or not finite.
    HitTolerance(f64),
    /// View size is negative or not finite.
    ViewSize(Size),
    /// Cull margin is negative or not finite.
    CullMargin(f64),
    /// A detail threshold scale is negative or not finite.
    DetailScale(f64),
    /// Grid spacing is not finite and positive.
    GridSpacing(f64),
    /// Grid minimum scale is negative or not finite.
    GridMinScale(f64),
}

impl From<TunablesError> for ConfigError {
    fn from(err: TunablesError) -> Self {
        Self::Tunables(err)
    }
}

impl fmt::Debug for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tunables(err) => write!(f, "ConfigError::Tunables({err:?})"),
            Self::HitTolerance(v) => write!(f, "ConfigError::HitTolerance({v:?})"),
            Self::ViewSize(v) => write!(f, "ConfigError::ViewSize({v:?})"),
            Self::CullMargin(v) => write!(f, "ConfigError::CullMargin({v:?})"),
            Self::DetailScale(v) => write!(f, "ConfigError::DetailScale({v:?})"),
            Self::GridSpacing(v) => write!(f, "ConfigError::GridSpacing({v:?})"),
            Self::GridMinScale(v) => write!(f, "ConfigError::GridMinScale({v:?})"),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tunables(err) => write!(f, "invalid tunables: {err}"),
            Self::HitTolerance(v) => {
                write!(f, "hit tolerance {v} must be finite and non-negative")
            }
            Self::ViewSize(v) => write!(
                f,
                "view size {}x{} must be finite and non-negative",
                v.width, v.height
            ),
            Self::CullMargin(v) => write!(f, "cull margin {v} must be finite and non-negative"),
            Self::DetailScale(v) => {
                write!(f, "detail scale {v} must be finite and non-negative")
            }
            Self::GridSpacing(v) => write!(f, "grid spacing {v} must be finite and positive"),
            Self::GridMinScale(v) => {
                write!(f, "grid minimum scale {v} must be finite and non-negative")
            }
        }
    }
}

impl core::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Tunables(err) => Some(err),
            _ => None,
        }
    }
}
