// Copyright 2025 the Orrery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use kurbo::Size;
use orrery_hit::HitArea;
use orrery_view2d::Viewport;

use crate::{DetailLevel, GridLines, GridSpec, Projected, ProjectionParams, project_into};

/// Reusable projection state for a render loop.
///
/// Holds the parameters and a scratch buffer so that per-frame projection
/// does not allocate once the buffer has grown. Nothing is cached between
/// calls: every [`Projector::project`] recomputes from the viewport and
/// entities it is given.
#[derive(Clone, Debug, Default)]
pub struct Projector {
    params: ProjectionParams,
    grid: GridSpec,
    buffer: Vec<Projected>,
}

impl Projector {
    /// Creates a projector.
    #[must_use]
    pub fn new(params: ProjectionParams, grid: GridSpec) -> Self {
        Self {
            params,
            grid,
            buffer: Vec::new(),
        }
    }

    /// Current projection parameters.
    #[must_use]
    pub fn params(&self) -> &ProjectionParams {
        &self.params
    }

    /// Replaces the projection parameters.
    pub fn set_params(&mut self, params: ProjectionParams) {
        self.params = params;
    }

    /// Updates the view size, for example after a window resize.
    pub fn set_view_size(&mut self, view_size: Size) {
        self.params.view_size = view_size;
    }

    /// Current grid configuration.
    #[must_use]
    pub fn grid_spec(&self) -> &GridSpec {
        &self.grid
    }

    /// Replaces the grid configuration.
    pub fn set_grid_spec(&mut self, grid: GridSpec) {
        self.grid = grid;
    }

    /// Projects the visible entities.
    ///
    /// The returned slice is valid until the next call.
    pub fn project<T: HitArea>(&mut self, viewport: &Viewport, entities: &[T]) -> &[Projected] {
        project_into(viewport, &self.params, entities, &mut self.buffer);
        log::trace!(
            "projected {} of {} entities",
            self.buffer.len(),
            entities.len()
        );
        &self.buffer
    }

    /// Detail to draw for every entity at the viewport's scale.
    #[must_use]
    pub fn detail_level(&self, viewport: &Viewport) -> DetailLevel {
        self.params.detail_level(viewport.scale)
    }

    /// Debug grid for the viewport.
    #[must_use]
    pub fn grid_lines(&self, viewport: &Viewport) -> GridLines {
        self.grid.lines(viewport, self.params.view_size)
    }
}
