// Copyright 2025 the Orrery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Culling and projector behavior across viewport changes.

use kurbo::{Circle, Point, Size, Vec2};
use orrery_projection::{GridSpec, ProjectionParams, Projector, project};
use orrery_view2d::Viewport;

fn view() -> ProjectionParams {
    ProjectionParams::new(Size::new(800.0, 600.0))
}

#[test]
fn entity_fully_outside_margin_is_culled() {
    // Right edge of the box at x = -60, beyond the 50 px margin.
    let far_left = Circle::new((-80.0, 300.0), 20.0);
    assert!(project(&Viewport::IDENTITY, &view(), &[far_left]).is_empty());

    // Below the bottom margin.
    let far_down = Circle::new((400.0, 700.0), 20.0);
    assert!(project(&Viewport::IDENTITY, &view(), &[far_down]).is_empty());
}

#[test]
fn entity_straddling_the_boundary_is_kept() {
    let straddling = Circle::new((-10.0, 300.0), 20.0);
    let out = project(&Viewport::IDENTITY, &view(), &[straddling]);
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].center, Point::new(-10.0, 300.0));
}

#[test]
fn entity_inside_margin_only_is_kept() {
    // Wholly offscreen but within the margin band.
    let near = Circle::new((830.0, 300.0), 10.0);
    assert_eq!(project(&Viewport::IDENTITY, &view(), &[near]).len(), 1);
}

#[test]
fn panning_brings_entities_into_view() {
    let planet = [Circle::new((2_000.0, 300.0), 25.0)];
    assert!(project(&Viewport::IDENTITY, &view(), &planet).is_empty());
    let panned = Viewport::new(Vec2::new(-1_600.0, 0.0), 1.0);
    let out = project(&panned, &view(), &planet);
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].center, Point::new(400.0, 300.0));
}

#[test]
fn zooming_out_grows_visible_set() {
    let planets: Vec<Circle> = (0..20)
        .map(|i| Circle::new((f64::from(i) * 500.0, 0.0), 20.0))
        .collect();
    let at_one = project(&Viewport::IDENTITY, &view(), &planets).len();
    let zoomed_out = Viewport::IDENTITY.with_scale(0.1);
    let at_tenth = project(&zoomed_out, &view(), &planets).len();
    assert!(at_tenth > at_one);
}

#[test]
fn projector_reuses_buffer_and_tracks_resizes() {
    let planets = [
        Circle::new((100.0, 100.0), 10.0),
        Circle::new((1_000.0, 100.0), 10.0),
    ];
    let mut projector = Projector::new(view(), GridSpec::default());
    assert_eq!(projector.project(&Viewport::IDENTITY, &planets).len(), 1);

    projector.set_view_size(Size::new(1_200.0, 600.0));
    let out = projector.project(&Viewport::IDENTITY, &planets);
    assert_eq!(out.len(), 2);
    assert_eq!(out[1].index, 1);

    // The collection may shrink between frames.
    assert_eq!(projector.project(&Viewport::IDENTITY, &planets[..1]).len(), 1);
}

#[test]
fn projector_reports_detail_and_grid() {
    let projector = Projector::new(view(), GridSpec::default());
    let near = Viewport::IDENTITY;
    let far = Viewport::IDENTITY.with_scale(0.2);
    assert!(projector.detail_level(&near).rating);
    assert!(!projector.detail_level(&far).label);
    assert!(!projector.grid_lines(&near).is_empty());
    assert!(projector.grid_lines(&far).is_empty());
}

#[cfg(feature = "serde")]
#[test]
fn params_load_from_partial_json() {
    let params: ProjectionParams =
        serde_json::from_str(r#"{"view_size":{"width":640.0,"height":480.0}}"#).unwrap();
    assert_eq!(params.view_size, Size::new(640.0, 480.0));
    assert_eq!(params.margin, 50.0);
}
