// Copyright 2025 the Orrery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Planets and their display metadata.

use alloc::string::{String, ToString};
use core::fmt;

use kurbo::Point;
use orrery_hit::HitArea;

/// Colours planets are tinted with, indexed by [`palette_index`].
pub const PALETTE: [&str; 8] = [
    "#ff6b6b", "#4ecdc4", "#45b7d1", "#f7b801", "#6c5ce7", "#fd79a8", "#00b894", "#e17055",
];

/// Stable identifier of a planet within a universe.
///
/// Displays as `planet_<n>`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlanetId(pub u64);

impl fmt::Display for PlanetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "planet_{}", self.0)
    }
}

/// Everything about a planet except its identity.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct PlanetData {
    /// Display name.
    pub name: String,
    /// Id of the user who created the planet.
    pub created_by: u64,
    /// Creation time as supplied by the backend.
    pub created_time: String,
    /// Center in world units.
    pub position: Point,
    /// Radius in world units; must be positive.
    pub radius: f64,
    /// Image drawn inside the planet, if any.
    pub image_url: Option<String>,
    /// Number of likes.
    pub likes: u32,
    /// Number of dislikes.
    pub dislikes: u32,
    /// The viewing user liked this planet.
    pub is_liked: bool,
    /// The viewing user disliked this planet.
    pub is_disliked: bool,
}

impl PlanetData {
    /// A planet with only a name and geometry.
    #[must_use]
    pub fn new(name: impl Into<String>, position: Point, radius: f64) -> Self {
        Self {
            name: name.into(),
            position,
            radius,
            ..Self::default()
        }
    }

    /// Checks that the geometry can be hit-tested and projected.
    pub fn validate(&self) -> Result<(), PlanetError> {
        if !self.position.is_finite() {
            return Err(PlanetError::InvalidPosition(self.position));
        }
        if !(self.radius.is_finite() && self.radius > 0.0) {
            return Err(PlanetError::InvalidRadius(self.radius));
        }
        Ok(())
    }

    /// Share of likes among all votes as a whole percentage, rounded half up.
    /// Zero when there are no votes.
    #[must_use]
    #[allow(
        clippy::cast_possible_truncation,
        reason = "the quotient is at most 100"
    )]
    pub fn rating(&self) -> u8 {
        let likes = u64::from(self.likes);
        let total = likes + u64::from(self.dislikes);
        if total == 0 {
            return 0;
        }
        // floor(100 * likes / total + 1/2), never above 100.
        ((200 * likes + total) / (2 * total)) as u8
    }
}

/// A planet in a universe.
///
/// With the `serde` feature, deserializing checks the data the same way
/// [`PlanetData::validate`] does.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawPlanet")
)]
pub struct Planet {
    id: PlanetId,
    data: PlanetData,
}

impl Planet {
    pub(crate) fn new(id: PlanetId, data: PlanetData) -> Self {
        Self { id, data }
    }

    /// Identifier.
    #[must_use]
    pub fn id(&self) -> PlanetId {
        self.id
    }

    /// Metadata and geometry.
    #[must_use]
    pub fn data(&self) -> &PlanetData {
        &self.data
    }

    pub(crate) fn set_data(&mut self, data: PlanetData) {
        self.data = data;
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.data.name
    }

    /// Center in world units.
    #[must_use]
    pub fn position(&self) -> Point {
        self.data.position
    }

    /// Radius in world units.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.data.radius
    }

    /// See [`PlanetData::rating`].
    #[must_use]
    pub fn rating(&self) -> u8 {
        self.data.rating()
    }

    /// Index into [`PALETTE`], derived from the id.
    #[must_use]
    pub fn palette_index(&self) -> usize {
        palette_index(&self.id.to_string())
    }

    /// Tint colour as a `#rrggbb` string.
    #[must_use]
    pub fn color(&self) -> &'static str {
        PALETTE[self.palette_index()]
    }
}

impl HitArea for Planet {
    fn hit_center(&self) -> Point {
        self.data.position
    }

    fn hit_radius(&self) -> f64 {
        self.data.radius
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawPlanet {
    id: PlanetId,
    data: PlanetData,
}

#[cfg(feature = "serde")]
impl TryFrom<RawPlanet> for Planet {
    type Error = PlanetError;

    fn try_from(raw: RawPlanet) -> Result<Self, Self::Error> {
        raw.data.validate()?;
        Ok(Self::new(raw.id, raw.data))
    }
}

/// Maps a key to a [`PALETTE`] slot with a 32-bit string hash over UTF-16
/// code units, so that keys keep their colour across sessions and platforms.
#[must_use]
pub fn palette_index(key: &str) -> usize {
    let hash = key.encode_utf16().fold(0_i32, |hash, unit| {
        (hash << 5).wrapping_sub(hash).wrapping_add(i32::from(unit))
    });
    hash.unsigned_abs() as usize % PALETTE.len()
}

/// A planet rejected by the collection.
#[derive(Clone, Copy, PartialEq)]
pub enum PlanetError {
    /// No planet has this id.
    Unknown(PlanetId),
    /// The center is not finite.
    InvalidPosition(Point),
    /// The radius is not finite and positive.
    InvalidRadius(f64),
}

impl fmt::Debug for PlanetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown(id) => write!(f, "PlanetError::Unknown({id})"),
            Self::InvalidPosition(p) => write!(f, "PlanetError::InvalidPosition({p:?})"),
            Self::InvalidRadius(r) => write!(f, "PlanetError::InvalidRadius({r:?})"),
        }
    }
}

impl fmt::Display for PlanetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown(id) => write!(f, "no planet with id {id}"),
            Self::InvalidPosition(p) => write!(f, "planet position ({}, {}) is not finite", p.x, p.y),
            Self::InvalidRadius(r) => write!(f, "planet radius {r} must be finite and positive"),
        }
    }
}

impl core::error::Error for PlanetError {}
