// SPDX-License-Identifier: MPL-2.0
//! Pointer tracking and magnifier lifecycle, driven through the public
//! viewer API against a host that records every call.

use approx::assert_abs_diff_eq;
use iced::{Point, Size, Vector};
use product_zoom::error::{Error, GeometryError};
use product_zoom::media::ProductImage;
use product_zoom::ui::zoom_viewer::{
    geometry, Message, MountRequest, OverlayHandle, OverlayHost, SurfaceId, ZoomViewer,
    ZoomViewerConfig,
};
use std::collections::HashSet;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, PartialEq)]
enum HostCall {
    Mount(SurfaceId, MountRequest),
    Redraw(SurfaceId),
    Unmount(SurfaceId),
}

#[derive(Debug, Default)]
struct RecordingHost {
    calls: Vec<HostCall>,
    live: HashSet<u64>,
    next_id: u64,
}

impl RecordingHost {
    fn mounts(&self) -> usize {
        self.calls
            .iter()
            .filter(|call| matches!(call, HostCall::Mount(..)))
            .count()
    }

    fn unmounts(&self) -> usize {
        self.calls
            .iter()
            .filter(|call| matches!(call, HostCall::Unmount(..)))
            .count()
    }

    fn redraws(&self) -> usize {
        self.calls
            .iter()
            .filter(|call| matches!(call, HostCall::Redraw(..)))
            .count()
    }
}

impl OverlayHost for RecordingHost {
    fn mount(&mut self, request: MountRequest) -> OverlayHandle {
        self.next_id += 1;
        let id = SurfaceId::new(self.next_id);
        self.live.insert(id.value());
        self.calls.push(HostCall::Mount(id, request));
        OverlayHandle::new(id)
    }

    fn mark_needs_redraw(&mut self, handle: &OverlayHandle) {
        assert!(
            self.live.contains(&handle.id().value()),
            "redraw of a surface that is not mounted"
        );
        self.calls.push(HostCall::Redraw(handle.id()));
    }

    fn unmount(&mut self, handle: OverlayHandle) {
        assert!(
            self.live.remove(&handle.id().value()),
            "unmount of a surface that is not mounted"
        );
        self.calls.push(HostCall::Unmount(handle.id()));
    }
}

const FADE: Duration = Duration::from_millis(200);

fn viewer() -> ZoomViewer {
    ZoomViewer::new(ZoomViewerConfig::default(), ProductImage::Unavailable)
        .expect("default geometry is valid")
}

fn at(start: Instant, millis: u64) -> Instant {
    start + Duration::from_millis(millis)
}

#[test]
fn preview_origin_stays_in_clamp_range_for_any_pointer() {
    let mut host = RecordingHost::default();
    let mut viewer = viewer();
    let now = Instant::now();
    let max = viewer.config().max_preview_origin();

    let samples = [
        f32::NEG_INFINITY,
        -1.0e6,
        -1.0,
        0.0,
        74.9,
        75.0,
        200.0,
        325.0,
        399.9,
        400.0,
        401.0,
        1.0e6,
        f32::INFINITY,
        f32::NAN,
    ];

    for &x in &samples {
        for &y in &samples {
            viewer.update(Message::PointerMoved(Point::new(x, y)), now, &mut host);
            let hover = viewer.state().hover();
            assert!((0.0..=max).contains(&hover.x), "x={x} gave {}", hover.x);
            assert!((0.0..=max).contains(&hover.y), "y={y} gave {}", hover.y);
        }
    }
}

#[test]
fn normalized_position_spans_unit_range_over_thumbnail() {
    let mut host = RecordingHost::default();
    let mut viewer = viewer();
    let now = Instant::now();

    for step in 0..=40 {
        #[allow(clippy::cast_precision_loss)]
        let local = step as f32 * 10.0;
        viewer.update(Message::PointerMoved(Point::new(local, local)), now, &mut host);
        let zoom = viewer.state().zoom_hover();
        assert!((-1.0..=1.0).contains(&zoom.x));
        assert!((-1.0..=1.0).contains(&zoom.y));
    }

    viewer.update(Message::PointerMoved(Point::new(200.0, 200.0)), now, &mut host);
    assert_abs_diff_eq!(viewer.state().zoom_hover().x, 0.0);
    assert_abs_diff_eq!(viewer.state().zoom_hover().y, 0.0);
}

#[test]
fn boundary_positions_match_reference_values() {
    let mut host = RecordingHost::default();
    let mut viewer = viewer();
    let now = Instant::now();

    let cases = [
        (0.0, 0.0, -1.0),
        (400.0, 250.0, 1.0),
        (200.0, 125.0, 0.0),
    ];
    for (local, origin, normalized) in cases {
        viewer.update(Message::PointerMoved(Point::new(local, local)), now, &mut host);
        assert_eq!(viewer.state().hover(), Point::new(origin, origin));
        assert_abs_diff_eq!(viewer.state().zoom_hover().x, normalized);
        assert_abs_diff_eq!(viewer.state().zoom_hover().y, normalized);
    }
}

#[test]
fn magnified_offset_is_guarded_on_the_trailing_edge_only() {
    let left = geometry::magnified_offset(Point::new(-1.0, 0.0), 400.0, 400.0);
    assert_abs_diff_eq!(left.x, 0.0);

    let right = geometry::magnified_offset(Point::new(1.0, 0.0), 400.0, 400.0);
    assert_abs_diff_eq!(right.x, -400.0);

    // Vertical offset is never guarded
    let top = geometry::magnified_offset(Point::new(0.0, -1.0), 400.0, 400.0);
    assert_abs_diff_eq!(top.y, 400.0);

    // A narrower region pulls the image further left
    let narrow = geometry::magnified_offset(Point::new(-1.0, 0.0), 400.0, 300.0);
    assert_eq!(narrow, Vector::new(-100.0, 0.0));
}

#[test]
fn enter_mounts_a_trailing_surface_and_fades_in() {
    let mut host = RecordingHost::default();
    let mut viewer = viewer();
    let start = Instant::now();

    viewer.update(Message::PointerEntered, start, &mut host);

    assert_eq!(host.mounts(), 1);
    match &host.calls[0] {
        HostCall::Mount(_, request) => {
            assert_eq!(request.origin, Vector::new(400.0, 0.0));
            assert_eq!(request.size, Size::new(400.0, 400.0));
        }
        other => panic!("expected a mount first, got {other:?}"),
    }
    assert!(viewer.state().is_preview_visible());
    assert!(viewer.state().overlay().is_some());

    let mut previous = viewer.state().animation_progress();
    for millis in [50, 100, 150, 200, 250] {
        viewer.update(Message::Tick, at(start, millis), &mut host);
        let progress = viewer.state().animation_progress();
        assert!(progress >= previous);
        previous = progress;
    }
    assert_abs_diff_eq!(previous, 1.0);
    assert!(!viewer.is_animating());
}

#[test]
fn exit_keeps_surface_until_fade_out_completes() {
    let mut host = RecordingHost::default();
    let mut viewer = viewer();
    let start = Instant::now();

    viewer.update(Message::PointerEntered, start, &mut host);
    viewer.update(Message::Tick, at(start, 250), &mut host);
    viewer.update(Message::PointerExited, at(start, 300), &mut host);

    viewer.update(Message::Tick, at(start, 400), &mut host);
    assert!(viewer.state().overlay().is_some());
    assert!(viewer.state().is_preview_visible());
    assert_abs_diff_eq!(viewer.state().animation_progress(), 0.5, epsilon = 1e-4);

    viewer.update(Message::Tick, at(start, 300) + FADE, &mut host);
    assert!(viewer.state().overlay().is_none());
    assert!(!viewer.state().is_preview_visible());
    assert_abs_diff_eq!(viewer.state().animation_progress(), 0.0);
    assert_eq!(host.unmounts(), 1);
    assert!(host.live.is_empty());
}

#[test]
fn reentering_during_fade_out_reuses_the_surface() {
    let mut host = RecordingHost::default();
    let mut viewer = viewer();
    let start = Instant::now();

    viewer.update(Message::PointerEntered, start, &mut host);
    viewer.update(Message::Tick, at(start, 250), &mut host);
    viewer.update(Message::PointerExited, at(start, 300), &mut host);
    viewer.update(Message::Tick, at(start, 350), &mut host);
    viewer.update(Message::PointerEntered, at(start, 360), &mut host);

    assert_eq!(host.mounts(), 1);
    assert_eq!(host.unmounts(), 0);

    // Well past when the abandoned fade-out would have finished
    viewer.update(Message::Tick, at(start, 600), &mut host);
    assert!(viewer.state().overlay().is_some());
    assert_abs_diff_eq!(viewer.state().animation_progress(), 1.0);
    assert_eq!(host.live.len(), 1);
}

#[test]
fn repeated_hover_cycles_never_leak_surfaces() {
    let mut host = RecordingHost::default();
    let mut viewer = viewer();
    let start = Instant::now();
    let mut clock = 0;

    for cycle in 0..5 {
        viewer.update(Message::PointerEntered, at(start, clock), &mut host);
        clock += 50;
        viewer.update(Message::PointerExited, at(start, clock), &mut host);
        if cycle % 2 == 0 {
            // Interrupt the fade-out once before letting it finish
            clock += 20;
            viewer.update(Message::PointerEntered, at(start, clock), &mut host);
            clock += 20;
            viewer.update(Message::PointerExited, at(start, clock), &mut host);
        }
        clock += 1000;
        viewer.update(Message::Tick, at(start, clock), &mut host);
        assert!(host.live.is_empty(), "cycle {cycle} left a surface mounted");
    }

    assert_eq!(host.mounts(), 5);
    assert_eq!(host.unmounts(), 5);
}

#[test]
fn repeated_moves_to_the_same_point_do_not_drift() {
    let mut host = RecordingHost::default();
    let mut viewer = viewer();
    let now = Instant::now();
    let point = Point::new(123.4, 321.0);

    viewer.update(Message::PointerMoved(point), now, &mut host);
    let hover = viewer.state().hover();
    let zoom = viewer.state().zoom_hover();

    for _ in 0..100 {
        viewer.update(Message::PointerMoved(point), now, &mut host);
    }

    assert_eq!(viewer.state().hover(), hover);
    assert_eq!(viewer.state().zoom_hover(), zoom);
}

#[test]
fn moves_redraw_only_while_mounted() {
    let mut host = RecordingHost::default();
    let mut viewer = viewer();
    let now = Instant::now();

    viewer.update(Message::PointerMoved(Point::new(10.0, 10.0)), now, &mut host);
    assert_eq!(host.redraws(), 0);

    viewer.update(Message::PointerEntered, now, &mut host);
    viewer.update(Message::PointerMoved(Point::new(20.0, 20.0)), now, &mut host);
    assert_eq!(host.redraws(), 1);
}

#[test]
fn zero_duration_fade_shows_and_hides_immediately() {
    let config = ZoomViewerConfig {
        zoom_animation_duration: Duration::ZERO,
        ..ZoomViewerConfig::default()
    };
    let mut viewer = ZoomViewer::new(config, ProductImage::Unavailable).expect("valid config");
    let mut host = RecordingHost::default();
    let now = Instant::now();

    viewer.update(Message::PointerEntered, now, &mut host);
    assert_abs_diff_eq!(viewer.state().animation_progress(), 1.0);
    assert!(!viewer.is_animating());

    viewer.update(Message::PointerExited, now, &mut host);
    assert!(viewer.state().overlay().is_none());
    assert!(host.live.is_empty());
}

#[test]
fn teardown_releases_surface_mid_fade() {
    let mut host = RecordingHost::default();
    let mut viewer = viewer();
    let start = Instant::now();

    viewer.update(Message::PointerEntered, start, &mut host);
    viewer.update(Message::Tick, at(start, 80), &mut host);
    viewer.teardown(&mut host);
    viewer.update(Message::Tick, at(start, 500), &mut host);

    assert!(host.live.is_empty());
    assert_eq!(host.unmounts(), 1);
}

#[test]
fn oversized_preview_is_rejected_at_construction() {
    let config = ZoomViewerConfig {
        dimension: 120.0,
        preview_size: 150.0,
        ..ZoomViewerConfig::default()
    };

    match ZoomViewer::new(config, ProductImage::Unavailable) {
        Err(Error::Geometry(GeometryError::PreviewLargerThanDimension {
            preview_size,
            dimension,
        })) => {
            assert_abs_diff_eq!(preview_size, 150.0);
            assert_abs_diff_eq!(dimension, 120.0);
        }
        other => panic!("expected a geometry error, got {other:?}"),
    }
}
