//! High-level controller for one mounted diagram.
//!
//! The [`EngineController`] owns the lifecycle of one rendering-engine
//! instance bound to one [`Graph`]: it configures interaction handling on
//! [`initialize`](EngineController::initialize), schedules the deferred
//! fit-to-view, and exposes the zoom/lock operations the viewport control
//! strip binds to. Every operation is a safe no-op while no engine is
//! mounted — the surrounding UI simply shows a placeholder until
//! initialization completes.
//!
//! # Example
//!
//! ```ignore
//! use blueprint_canvas::controller::{EngineController, MountOptions};
//!
//! let ctrl = EngineController::new();
//! ctrl.initialize(Box::new(engine), graph, MountOptions::default());
//!
//! // Host animation loop: pump until the deferred fit has run.
//! loop_handle.on_frame({
//!     let ctrl = ctrl.clone();
//!     move || ctrl.on_frame()
//! });
//!
//! // Control strip bindings.
//! zoom_in_button.on_clicked({ let ctrl = ctrl.clone(); move || ctrl.zoom_in() });
//! lock_button.on_clicked({ let ctrl = ctrl.clone(); move || { ctrl.toggle_lock(); } });
//!
//! // On unmount:
//! ctrl.teardown();
//! ```

use crate::engine::{DeleteKey, InteractionAction, Rect, RenderEngine, Viewport};
use crate::graph::Graph;
use std::cell::RefCell;
use std::rc::Rc;

/// Zoom change applied by one `zoom_in`/`zoom_out` step, in percent units.
pub const ZOOM_STEP: f32 = 15.0;
/// Lower zoom clamp.
pub const ZOOM_MIN: f32 = 30.0;
/// Upper zoom clamp.
pub const ZOOM_MAX: f32 = 300.0;
/// Pixel margin used by fit-to-view when none is given.
pub const DEFAULT_FIT_MARGIN: f32 = 80.0;

/// Options for mounting a graph onto an engine.
#[derive(Clone, Debug)]
pub struct MountOptions {
    /// Schedule a deferred fit-to-view after mount. Defaults to `true`.
    pub zoom_to_fit: bool,
    /// Margin for the deferred fit and [`EngineController::zoom_to_fit`].
    pub fit_margin: f32,
    /// Invert scroll direction for the zoom gestures.
    pub inverse_zoom: bool,
}

impl Default for MountOptions {
    fn default() -> Self {
        Self {
            zoom_to_fit: true,
            fit_margin: DEFAULT_FIT_MARGIN,
            inverse_zoom: true,
        }
    }
}

struct ControllerState {
    engine: Option<Box<dyn RenderEngine>>,
    graph: Option<Rc<RefCell<Graph>>>,
    viewport: Viewport,
    fit_margin: f32,
    /// A deferred fit-to-view is waiting for the surface to mount.
    pending_fit: bool,
}

impl ControllerState {
    fn new() -> Self {
        Self {
            engine: None,
            graph: None,
            viewport: Viewport::default(),
            fit_margin: DEFAULT_FIT_MARGIN,
            pending_fit: false,
        }
    }
}

/// Stateful adapter around one rendering engine and its active graph.
///
/// Clone the controller to share it across UI callbacks; clones refer to the
/// same mounted state. The controller is single-threaded by design — the
/// graph is exclusively owned by one mounted controller at a time.
#[derive(Clone)]
pub struct EngineController {
    inner: Rc<RefCell<ControllerState>>,
}

impl Default for EngineController {
    fn default() -> Self {
        Self::new()
    }
}

impl EngineController {
    /// Create a controller with nothing mounted. All operations no-op until
    /// [`initialize`](Self::initialize) runs.
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(ControllerState::new())),
        }
    }

    /// Mount a graph onto a freshly created engine.
    ///
    /// Registers the standard interaction set (pan+zoom, wheel zoom, and
    /// delete/backspace deletion), assigns the graph as the active model and
    /// paints once. Unless `options.zoom_to_fit` is `false`, a deferred
    /// fit-to-view is scheduled: [`on_frame`](Self::on_frame) polls until
    /// the surface reports itself mounted, then fits exactly once.
    ///
    /// Mounting replaces any previously mounted engine and graph.
    pub fn initialize(&self, mut engine: Box<dyn RenderEngine>, graph: Graph, options: MountOptions) {
        engine.register_action(InteractionAction::PanAndZoom {
            inverse_zoom: options.inverse_zoom,
        });
        engine.register_action(InteractionAction::WheelZoom {
            inverse_zoom: options.inverse_zoom,
        });
        engine.register_action(InteractionAction::DeleteSelection {
            keys: vec![DeleteKey::Delete, DeleteKey::Backspace],
        });

        let viewport = Viewport::default();
        engine.apply_viewport(&viewport);
        engine.repaint();

        let mut state = self.inner.borrow_mut();
        state.engine = Some(engine);
        state.graph = Some(Rc::new(RefCell::new(graph)));
        state.viewport = viewport;
        state.fit_margin = options.fit_margin;
        state.pending_fit = options.zoom_to_fit;
    }

    /// Host-pumped once per animation frame.
    ///
    /// While a deferred fit is pending and the surface is not yet mounted,
    /// this keeps waiting. Once the surface reports a size, it performs
    /// exactly one fit-and-repaint and stops; subsequent frames do nothing.
    pub fn on_frame(&self) {
        let mut state = self.inner.borrow_mut();
        if !state.pending_fit {
            return;
        }
        let margin = state.fit_margin;
        let Some(engine) = state.engine.as_mut() else {
            return;
        };
        let Some(surface) = engine.surface_size() else {
            return;
        };

        let bounds = engine.content_bounds().unwrap_or_default();
        let viewport = fit_viewport(surface, bounds, margin);
        engine.apply_viewport(&viewport);
        engine.repaint();
        state.viewport = viewport;
        state.pending_fit = false;
    }

    /// Increase zoom by one step, clamped to [`ZOOM_MIN`]..=[`ZOOM_MAX`].
    pub fn zoom_in(&self) {
        self.change_zoom(ZOOM_STEP);
    }

    /// Decrease zoom by one step, clamped to [`ZOOM_MIN`]..=[`ZOOM_MAX`].
    pub fn zoom_out(&self) {
        self.change_zoom(-ZOOM_STEP);
    }

    fn change_zoom(&self, delta: f32) {
        let mut state = self.inner.borrow_mut();
        let zoom = (state.viewport.zoom + delta).clamp(ZOOM_MIN, ZOOM_MAX);
        let viewport = Viewport {
            zoom,
            ..state.viewport
        };
        let Some(engine) = state.engine.as_mut() else {
            return;
        };
        engine.apply_viewport(&viewport);
        engine.repaint();
        state.viewport = viewport;
    }

    /// Rescale and recenter so the rendered content fits inside the surface
    /// with the given pixel margin. No-op while the surface is unmounted.
    pub fn zoom_to_fit(&self, margin: f32) {
        let mut state = self.inner.borrow_mut();
        let Some(engine) = state.engine.as_mut() else {
            return;
        };
        let Some(surface) = engine.surface_size() else {
            return;
        };

        let bounds = engine.content_bounds().unwrap_or_default();
        let viewport = fit_viewport(surface, bounds, margin);
        engine.apply_viewport(&viewport);
        engine.repaint();
        state.viewport = viewport;
    }

    /// Zero offset, 100% zoom.
    pub fn reset_view(&self) {
        let mut state = self.inner.borrow_mut();
        let viewport = Viewport::default();
        let Some(engine) = state.engine.as_mut() else {
            return;
        };
        engine.apply_viewport(&viewport);
        engine.repaint();
        state.viewport = viewport;
    }

    /// Flip the graph-wide lock flag, cascading to every node and
    /// connection, and return the new state.
    ///
    /// Before initialization this returns `true` — the placeholder state is
    /// treated as locked.
    pub fn toggle_lock(&self) -> bool {
        let mut state = self.inner.borrow_mut();
        let Some(graph) = state.graph.as_ref() else {
            return true;
        };
        let locked = graph.borrow_mut().toggle_locked();
        if let Some(engine) = state.engine.as_mut() {
            engine.repaint();
        }
        locked
    }

    /// Current graph-wide lock flag; `true` while nothing is mounted.
    pub fn is_locked(&self) -> bool {
        self.inner
            .borrow()
            .graph
            .as_ref()
            .map(|g| g.borrow().is_locked())
            .unwrap_or(true)
    }

    /// Current zoom level in percent.
    pub fn zoom(&self) -> f32 {
        self.inner.borrow().viewport.zoom
    }

    /// Current viewport state.
    pub fn viewport(&self) -> Viewport {
        self.inner.borrow().viewport
    }

    /// Shared handle to the active graph, if one is mounted.
    pub fn graph(&self) -> Option<Rc<RefCell<Graph>>> {
        self.inner.borrow().graph.clone()
    }

    /// Whether an engine is currently mounted.
    pub fn is_initialized(&self) -> bool {
        self.inner.borrow().engine.is_some()
    }

    /// Whether a deferred fit-to-view is still waiting for the surface.
    pub fn has_pending_fit(&self) -> bool {
        self.inner.borrow().pending_fit
    }

    /// Cancel any pending deferred fit and detach the engine and graph.
    ///
    /// Call on unmount. After teardown the controller behaves as freshly
    /// created; a disposed engine is never touched again.
    pub fn teardown(&self) {
        let mut state = self.inner.borrow_mut();
        state.pending_fit = false;
        state.engine = None;
        state.graph = None;
        state.viewport = Viewport::default();
    }
}

/// Compute the viewport that centers `bounds` inside `surface` with the
/// given margin on every side. The resulting zoom is clamped to the same
/// [`ZOOM_MIN`]..=[`ZOOM_MAX`] range as the step operations; degenerate
/// bounds (zero extent) keep 100% zoom and center the content point.
pub fn fit_viewport(surface: (f32, f32), bounds: Rect, margin: f32) -> Viewport {
    let avail_w = (surface.0 - 2.0 * margin).max(1.0);
    let avail_h = (surface.1 - 2.0 * margin).max(1.0);

    let fx = if bounds.width > 0.0 {
        avail_w / bounds.width
    } else {
        f32::INFINITY
    };
    let fy = if bounds.height > 0.0 {
        avail_h / bounds.height
    } else {
        f32::INFINITY
    };

    let factor = fx.min(fy);
    let zoom = if factor.is_finite() {
        (factor * 100.0).clamp(ZOOM_MIN, ZOOM_MAX)
    } else {
        100.0
    };
    let scale = zoom / 100.0;

    Viewport {
        zoom,
        offset: (
            (surface.0 - bounds.width * scale) / 2.0 - bounds.x * scale,
            (surface.1 - bounds.height * scale) / 2.0 - bounds.y * scale,
        ),
    }
}
