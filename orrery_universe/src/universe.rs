// Copyright 2025 the Orrery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Point, Size};
use orrery_event_state::hover::{HoverEvent, HoverState};
use orrery_hit::{HitParams, hit_test_indexed};
use orrery_input::{DeviceCaps, InputEvent, Intent, Reconciler};
use orrery_projection::{GridLines, GridSpec, ProjectionParams, project};
use orrery_selection::Selection;
use orrery_view2d::{Viewport, ViewportController, ViewportDebugInfo};
use smallvec::SmallVec;

use crate::{
    ConfigError, Frame, Planet, PlanetData, PlanetError, PlanetId, Sprite, Status, UniverseConfig,
};

/// Something the host should react to after feeding input.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum UniverseEvent {
    /// The viewport moved or zoomed.
    ViewportChanged,
    /// The selection changed to this planet, or was cleared.
    SelectionChanged(Option<PlanetId>),
    /// The pointer started hovering this planet.
    HoverEnter(PlanetId),
    /// The pointer stopped hovering this planet.
    HoverLeave(PlanetId),
    /// A touch was held still.
    LongPress {
        /// Planet under the press, if any.
        planet: Option<PlanetId>,
        /// Press position in world units.
        world: Point,
    },
}

/// Events from one call, in order.
pub type UniverseEvents = SmallVec<[UniverseEvent; 4]>;

/// A pannable, zoomable universe of planets.
///
/// Owns the viewport, the planet collection (in draw order), the selection,
/// the hover state and the input reconciler. Feed it raw input with
/// [`Universe::handle`] and read a [`Frame`] from [`Universe::tick`] once per
/// display refresh.
#[derive(Clone, Debug)]
pub struct Universe {
    view: ViewportController,
    input: Reconciler,
    planets: Vec<Planet>,
    selection: Selection<PlanetId>,
    hover: HoverState<PlanetId>,
    projection: ProjectionParams,
    grid: GridSpec,
    show_grid: bool,
    hit: HitParams,
    next_id: u64,
}

impl Default for Universe {
    fn default() -> Self {
        Self::build(UniverseConfig::default())
    }
}

impl Universe {
    /// Creates an empty universe with default configuration and the given
    /// view size.
    #[must_use]
    pub fn new(view_size: Size) -> Self {
        let mut universe = Self::default();
        universe.set_view_size(view_size);
        universe
    }

    /// Creates an empty universe from validated configuration.
    pub fn with_config(config: UniverseConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: UniverseConfig) -> Self {
        let tunables = config.tunables;
        Self {
            view: ViewportController::new(tunables.zoom_limits)
                .with_zoom_step(tunables.zoom_step),
            input: Reconciler::new(tunables, config.device),
            planets: Vec::new(),
            selection: Selection::new(),
            hover: HoverState::new(),
            projection: config.projection,
            grid: config.grid,
            show_grid: config.show_grid,
            hit: config.hit,
            next_id: 1,
        }
    }

    /// Current viewport.
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.view.viewport()
    }

    /// Read access to the viewport controller.
    #[must_use]
    pub fn controller(&self) -> &ViewportController {
        &self.view
    }

    /// Snapshot of the viewport controller.
    #[must_use]
    pub fn debug_info(&self) -> ViewportDebugInfo {
        self.view.debug_info()
    }

    /// Size of the drawing surface in pixels.
    #[must_use]
    pub fn view_size(&self) -> Size {
        self.projection.view_size
    }

    /// Updates the size of the drawing surface.
    pub fn set_view_size(&mut self, view_size: Size) {
        self.projection.view_size = view_size;
    }

    /// Toolbar zoom in, about the screen origin.
    pub fn zoom_in(&mut self) -> bool {
        self.view.zoom_in()
    }

    /// Toolbar zoom out, about the screen origin.
    pub fn zoom_out(&mut self) -> bool {
        self.view.zoom_out()
    }

    /// Restores the identity viewport.
    pub fn reset_view(&mut self) -> bool {
        self.view.reset()
    }

    /// Pans so that the planet sits at the center of the view.
    pub fn center_on_planet(&mut self, id: PlanetId) -> Result<bool, PlanetError> {
        let position = self.planet(id).ok_or(PlanetError::Unknown(id))?.position();
        Ok(self.view.center_on(position, self.projection.view_size))
    }

    /// Current device capabilities.
    #[must_use]
    pub fn device_caps(&self) -> DeviceCaps {
        self.input.device_caps()
    }

    /// Switches device capabilities. Hover is cleared on touch devices.
    pub fn set_device_caps(&mut self, caps: DeviceCaps) -> UniverseEvents {
        self.input.set_device_caps(caps);
        let mut events = UniverseEvents::new();
        if caps.has_touch {
            push_hover(&mut events, self.hover.clear());
        }
        events
    }

    /// Feeds one raw input event and applies the resulting intents.
    pub fn handle(&mut self, event: InputEvent) -> UniverseEvents {
        let mut events = UniverseEvents::new();
        for intent in self.input.handle(event) {
            self.apply(intent, &mut events);
        }
        events
    }

    /// Advances the long-press clock.
    pub fn advance(&mut self, now_ms: u64) -> UniverseEvents {
        let mut events = UniverseEvents::new();
        if let Some(intent) = self.input.advance(now_ms) {
            self.apply(intent, &mut events);
        }
        events
    }

    fn apply(&mut self, intent: Intent, events: &mut UniverseEvents) {
        match intent {
            Intent::Pan(delta) => {
                if self.view.pan_by(delta) {
                    events.push(UniverseEvent::ViewportChanged);
                }
            }
            Intent::ZoomAt { anchor, factor } => {
                if self.view.zoom_at_point(anchor, factor) {
                    events.push(UniverseEvent::ViewportChanged);
                }
            }
            Intent::Select(at) => {
                let hit = self.planet_at(at).map(Planet::id);
                if self.set_selection(hit) {
                    events.push(UniverseEvent::SelectionChanged(hit));
                }
            }
            Intent::Hover(at) => {
                let hit = self.planet_at(at).map(Planet::id);
                push_hover(events, self.hover.update(hit));
            }
            Intent::ClearHover => push_hover(events, self.hover.clear()),
            Intent::LongPress(at) => {
                let world = self.view.viewport().screen_to_world(at);
                let planet = self.planet_at(at).map(Planet::id);
                events.push(UniverseEvent::LongPress { planet, world });
            }
        }
    }

    /// The top-most planet under a screen position.
    #[must_use]
    pub fn planet_at(&self, screen: Point) -> Option<&Planet> {
        let world = self.view.viewport().screen_to_world(screen);
        hit_test_indexed(world, &self.planets, &self.hit).map(|hit| hit.entity)
    }

    /// Id of the selected planet.
    #[must_use]
    pub fn selected_id(&self) -> Option<PlanetId> {
        self.selection.selected().copied()
    }

    /// The selected planet.
    #[must_use]
    pub fn selected(&self) -> Option<&Planet> {
        self.selected_id().and_then(|id| self.planet(id))
    }

    /// Selection revision; bumps whenever the selection changes.
    #[must_use]
    pub fn selection_revision(&self) -> u64 {
        self.selection.revision()
    }

    /// Selects a planet programmatically, or clears with `None`.
    ///
    /// Returns `Ok(true)` if the selection changed.
    pub fn select(&mut self, id: Option<PlanetId>) -> Result<bool, PlanetError> {
        if let Some(id) = id
            && self.planet(id).is_none()
        {
            return Err(PlanetError::Unknown(id));
        }
        Ok(self.set_selection(id))
    }

    fn set_selection(&mut self, id: Option<PlanetId>) -> bool {
        let before = self.selection.revision();
        self.selection.set(id);
        before != self.selection.revision()
    }

    /// Id of the hovered planet.
    #[must_use]
    pub fn hovered_id(&self) -> Option<PlanetId> {
        self.hover.current().copied()
    }

    /// Planets in draw order; later planets are drawn on top.
    #[must_use]
    pub fn planets(&self) -> &[Planet] {
        &self.planets
    }

    /// Looks up a planet.
    #[must_use]
    pub fn planet(&self, id: PlanetId) -> Option<&Planet> {
        self.planets.iter().find(|p| p.id() == id)
    }

    /// Adds a planet on top of the others and returns its new id.
    pub fn add_planet(&mut self, data: PlanetData) -> Result<PlanetId, PlanetError> {
        data.validate()?;
        let id = PlanetId(self.next_id);
        self.next_id += 1;
        log::debug!("adding {id} ({:?})", data.name);
        self.planets.push(Planet::new(id, data));
        Ok(id)
    }

    /// Removes a planet. Selection and hover on it are cleared.
    pub fn remove_planet(&mut self, id: PlanetId) -> Result<Planet, PlanetError> {
        let index = self
            .planets
            .iter()
            .position(|p| p.id() == id)
            .ok_or(PlanetError::Unknown(id))?;
        log::debug!("removing {id}");
        self.selection.remove(&id);
        self.hover.forget(&id);
        Ok(self.planets.remove(index))
    }

    /// Edits a planet's metadata and geometry.
    ///
    /// The edit is applied to a copy and only committed if the result is
    /// valid; the draw order is unchanged.
    pub fn update_planet(
        &mut self,
        id: PlanetId,
        edit: impl FnOnce(&mut PlanetData),
    ) -> Result<(), PlanetError> {
        let planet = self
            .planets
            .iter_mut()
            .find(|p| p.id() == id)
            .ok_or(PlanetError::Unknown(id))?;
        let mut data = planet.data().clone();
        edit(&mut data);
        data.validate()?;
        planet.set_data(data);
        Ok(())
    }

    /// Produces everything needed to draw one frame.
    ///
    /// Never mutates the universe; calling it twice without intervening input
    /// yields identical frames.
    #[must_use]
    pub fn tick(&self, timestamp_ms: u64) -> Frame {
        let viewport = self.view.viewport();
        let selected = self.selected_id();
        let hovered = self.hovered_id();
        let sprites = project(&viewport, &self.projection, &self.planets)
            .into_iter()
            .map(|projected| {
                let id = self.planets[projected.index].id();
                Sprite {
                    id,
                    projected,
                    selected: selected == Some(id),
                    hovered: hovered == Some(id),
                }
            })
            .collect();
        let grid = if self.show_grid {
            self.grid.lines(&viewport, self.projection.view_size)
        } else {
            GridLines::default()
        };
        Frame {
            timestamp_ms,
            viewport,
            detail: self.projection.detail_level(viewport.scale),
            sprites,
            grid,
            status: self.status(),
        }
    }

    /// Summary for a status panel.
    #[must_use]
    pub fn status(&self) -> Status {
        let viewport = self.view.viewport();
        Status {
            scale: viewport.scale,
            offset: viewport.offset,
            planet_count: self.planets.len(),
            selected_name: self.selected().map(|p| String::from(p.name())),
        }
    }
}

fn push_hover(events: &mut UniverseEvents, hover: impl IntoIterator<Item = HoverEvent<PlanetId>>) {
    events.extend(hover.into_iter().map(|event| match event {
        HoverEvent::Enter(id) => UniverseEvent::HoverEnter(id),
        HoverEvent::Leave(id) => UniverseEvent::HoverLeave(id),
    }));
}
