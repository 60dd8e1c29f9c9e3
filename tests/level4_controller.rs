//! Level 4: Controller Lifecycle
//!
//! Tests the mount/teardown pair, the deferred cancellable fit-to-view, and
//! the zoom and lock operations over a mock engine.

mod common;

use blueprint_canvas::{
    DeleteKey, EngineController, InteractionAction, MountOptions, Rect, Viewport, ZOOM_MAX,
    ZOOM_MIN,
};
use common::harness::ControllerHarness;
use common::pipeline_blueprint;

#[test]
fn test_initialize_installs_the_standard_interactions() {
    let h = ControllerHarness::mounted(&pipeline_blueprint());

    let actions = h.probe.actions.borrow();
    assert_eq!(
        *actions,
        vec![
            InteractionAction::PanAndZoom { inverse_zoom: true },
            InteractionAction::WheelZoom { inverse_zoom: true },
            InteractionAction::DeleteSelection {
                keys: vec![DeleteKey::Delete, DeleteKey::Backspace],
            },
        ]
    );
}

#[test]
fn test_initialize_applies_identity_viewport_and_paints() {
    let h = ControllerHarness::mounted(&pipeline_blueprint());

    assert!(h.ctrl.is_initialized());
    assert_eq!(h.probe.repaint_count(), 1);
    assert_eq!(h.probe.last_viewport(), Some(Viewport::default()));
}

#[test]
fn test_controller_exposes_the_mounted_graph() {
    let h = ControllerHarness::mounted(&pipeline_blueprint());

    let graph = h.ctrl.graph().unwrap();
    assert_eq!(graph.borrow().nodes.len(), 3);
    assert!(graph.borrow().is_locked());
}

// ============================================================================
// Deferred fit-to-view
// ============================================================================

#[test]
fn test_fit_waits_for_the_surface_to_mount() {
    let h = ControllerHarness::mounted(&pipeline_blueprint());
    h.probe.set_content_bounds(Rect::new(0.0, 100.0, 480.0, 1.0));

    for _ in 0..5 {
        h.ctrl.on_frame();
    }
    assert!(h.ctrl.has_pending_fit());
    assert_eq!(h.probe.repaint_count(), 1);
}

#[test]
fn test_fit_runs_exactly_once_after_mount() {
    let h = ControllerHarness::mounted(&pipeline_blueprint());
    h.probe.set_content_bounds(Rect::new(0.0, 0.0, 400.0, 200.0));
    h.probe.mount_surface(800.0, 600.0);

    h.ctrl.on_frame();
    assert!(!h.ctrl.has_pending_fit());
    assert_eq!(h.probe.repaint_count(), 2);
    assert_eq!(h.ctrl.zoom(), 160.0);

    // Later frames are inert.
    h.ctrl.on_frame();
    h.ctrl.on_frame();
    assert_eq!(h.probe.repaint_count(), 2);
}

#[test]
fn test_teardown_cancels_a_pending_fit() {
    let h = ControllerHarness::mounted(&pipeline_blueprint());
    h.ctrl.teardown();

    h.probe.mount_surface(800.0, 600.0);
    h.ctrl.on_frame();

    assert!(!h.ctrl.is_initialized());
    assert_eq!(h.probe.repaint_count(), 1);
}

#[test]
fn test_suppressed_fit_never_fires() {
    let h = ControllerHarness::with_options(
        &pipeline_blueprint(),
        MountOptions {
            zoom_to_fit: false,
            ..MountOptions::default()
        },
    );
    h.probe.mount_surface(800.0, 600.0);

    h.ctrl.on_frame();
    assert_eq!(h.probe.repaint_count(), 1);
    assert_eq!(h.ctrl.zoom(), 100.0);
}

#[test]
fn test_custom_fit_margin_is_honored() {
    let h = ControllerHarness::with_options(
        &pipeline_blueprint(),
        MountOptions {
            fit_margin: 120.0,
            ..MountOptions::default()
        },
    );
    // 800 - 2*120 = 560 available for 400 wide content: factor 1.4.
    h.probe.set_content_bounds(Rect::new(0.0, 0.0, 400.0, 200.0));
    h.probe.mount_surface(800.0, 600.0);

    h.ctrl.on_frame();
    assert_eq!(h.ctrl.zoom(), 140.0);
}

// ============================================================================
// Zoom and reset
// ============================================================================

#[test]
fn test_zoom_steps_and_clamps() {
    let h = ControllerHarness::mounted(&pipeline_blueprint());

    h.ctrl.zoom_in();
    assert_eq!(h.ctrl.zoom(), 115.0);

    for _ in 0..20 {
        h.ctrl.zoom_in();
    }
    assert_eq!(h.ctrl.zoom(), ZOOM_MAX);

    for _ in 0..20 {
        h.ctrl.zoom_out();
    }
    assert_eq!(h.ctrl.zoom(), ZOOM_MIN);
}

#[test]
fn test_manual_zoom_to_fit_recenters() {
    let h = ControllerHarness::mounted(&pipeline_blueprint());
    h.probe.mount_surface(800.0, 600.0);
    h.probe.set_content_bounds(Rect::new(0.0, 0.0, 400.0, 200.0));
    h.ctrl.on_frame();

    h.ctrl.zoom_in();
    h.ctrl.zoom_to_fit(80.0);

    assert_eq!(h.ctrl.zoom(), 160.0);
    let viewport = h.probe.last_viewport().unwrap();
    assert_eq!(viewport.offset, (80.0, 140.0));
}

#[test]
fn test_reset_view_restores_identity() {
    let h = ControllerHarness::mounted(&pipeline_blueprint());
    h.ctrl.zoom_out();
    h.ctrl.zoom_out();

    h.ctrl.reset_view();

    assert_eq!(h.ctrl.viewport(), Viewport::default());
}

// ============================================================================
// Lock handling and the unmounted state
// ============================================================================

#[test]
fn test_toggle_lock_round_trips_through_the_graph() {
    let h = ControllerHarness::mounted(&pipeline_blueprint());
    assert!(h.ctrl.is_locked());

    assert!(!h.ctrl.toggle_lock());
    assert!(!h.ctrl.is_locked());
    let graph = h.ctrl.graph().unwrap();
    assert!(graph.borrow().nodes.iter().all(|n| !n.locked));

    assert!(h.ctrl.toggle_lock());
    assert!(graph.borrow().connections.iter().all(|c| c.locked));
}

#[test]
fn test_unmounted_controller_reports_locked_and_noops() {
    let ctrl = EngineController::new();

    assert!(ctrl.is_locked());
    assert!(ctrl.toggle_lock());
    ctrl.zoom_in();
    ctrl.zoom_to_fit(80.0);
    ctrl.reset_view();
    ctrl.on_frame();
    assert_eq!(ctrl.zoom(), 100.0);
    assert!(ctrl.graph().is_none());
}

#[test]
fn test_remount_after_teardown_starts_fresh() {
    let h = ControllerHarness::mounted(&pipeline_blueprint());
    h.ctrl.zoom_in();
    h.ctrl.teardown();

    let fresh = ControllerHarness::mounted(&pipeline_blueprint());
    assert_eq!(fresh.ctrl.zoom(), 100.0);
    assert!(fresh.ctrl.has_pending_fit());
}
