// Copyright 2025 the Orrery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// Smallest scale the default [`ZoomLimits`] allow.
pub const SCALE_MIN: f64 = 0.1;

/// Largest scale the default [`ZoomLimits`] allow.
pub const SCALE_MAX: f64 = 5.0;

/// Inclusive bounds on a viewport's scale.
///
/// Both bounds are finite and strictly positive, and `min <= max`. Use
/// [`ZoomLimits::new`] to build custom limits; [`Default`] yields
/// `[SCALE_MIN, SCALE_MAX]`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawZoomLimits"))]
pub struct ZoomLimits {
    min: f64,
    max: f64,
}

impl ZoomLimits {
    /// Creates limits from a `min`/`max` pair.
    ///
    /// Unlike the viewport's own scale handling this does not normalize a
    /// reversed pair: configuration mistakes are reported, not hidden.
    pub fn new(min: f64, max: f64) -> Result<Self, ZoomLimitsError> {
        if !(min.is_finite() && max.is_finite()) || min <= 0.0 || min > max {
            return Err(ZoomLimitsError { min, max });
        }
        Ok(Self { min, max })
    }

    /// Lower bound.
    #[must_use]
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Upper bound.
    #[must_use]
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Clamps `scale` into the limits.
    #[must_use]
    pub fn clamp(&self, scale: f64) -> f64 {
        scale.clamp(self.min, self.max)
    }

    /// Returns `true` if `scale` lies within the limits.
    #[must_use]
    pub fn contains(&self, scale: f64) -> bool {
        scale >= self.min && scale <= self.max
    }
}

impl Default for ZoomLimits {
    fn default() -> Self {
        Self {
            min: SCALE_MIN,
            max: SCALE_MAX,
        }
    }
}

/// Error returned by [`ZoomLimits::new`] for an unusable pair.
#[derive(Clone, Copy, PartialEq)]
pub struct ZoomLimitsError {
    /// The rejected lower bound.
    pub min: f64,
    /// The rejected upper bound.
    pub max: f64,
}

impl fmt::Debug for ZoomLimitsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ZoomLimitsError {{ min: {:?}, max: {:?} }}",
            self.min, self.max
        )
    }
}

impl fmt::Display for ZoomLimitsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "zoom limits [{}, {}] must be finite, positive and ordered",
            self.min, self.max
        )
    }
}

impl core::error::Error for ZoomLimitsError {}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawZoomLimits {
    min: f64,
    max: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<RawZoomLimits> for ZoomLimits {
    type Error = ZoomLimitsError;

    fn try_from(raw: RawZoomLimits) -> Result<Self, Self::Error> {
        Self::new(raw.min, raw.max)
    }
}
