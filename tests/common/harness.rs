//! Engine mock and mounted-controller harness shared by the suites.

use blueprint_canvas::{
    build, DiagramBlueprint, EngineController, InteractionAction, MountOptions, Rect,
    RenderEngine, Viewport,
};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Shared observation point for a [`MockEngine`]. Clones see the same
/// recorded calls, so tests keep one while the controller owns the engine.
#[derive(Clone, Default)]
pub struct EngineProbe {
    surface: Rc<Cell<Option<(f32, f32)>>>,
    bounds: Rc<Cell<Option<Rect>>>,
    pub actions: Rc<RefCell<Vec<InteractionAction>>>,
    pub viewports: Rc<RefCell<Vec<Viewport>>>,
    pub repaints: Rc<Cell<usize>>,
}

impl EngineProbe {
    /// Simulate the canvas finishing its layout pass.
    pub fn mount_surface(&self, width: f32, height: f32) {
        self.surface.set(Some((width, height)));
    }

    pub fn set_content_bounds(&self, rect: Rect) {
        self.bounds.set(Some(rect));
    }

    pub fn repaint_count(&self) -> usize {
        self.repaints.get()
    }

    pub fn last_viewport(&self) -> Option<Viewport> {
        self.viewports.borrow().last().copied()
    }
}

/// A recording engine backend driven entirely by its probe.
pub struct MockEngine {
    probe: EngineProbe,
}

impl MockEngine {
    pub fn new(probe: &EngineProbe) -> Box<Self> {
        Box::new(Self {
            probe: probe.clone(),
        })
    }
}

impl RenderEngine for MockEngine {
    fn surface_size(&self) -> Option<(f32, f32)> {
        self.probe.surface.get()
    }

    fn content_bounds(&self) -> Option<Rect> {
        self.probe.bounds.get()
    }

    fn register_action(&mut self, action: InteractionAction) {
        self.probe.actions.borrow_mut().push(action);
    }

    fn apply_viewport(&mut self, viewport: &Viewport) {
        self.probe.viewports.borrow_mut().push(*viewport);
    }

    fn repaint(&mut self) {
        self.probe.repaints.set(self.probe.repaints.get() + 1);
    }
}

/// A controller mounted over a mock engine, plus the probe watching it.
pub struct ControllerHarness {
    pub ctrl: EngineController,
    pub probe: EngineProbe,
}

impl ControllerHarness {
    /// Build the blueprint's graph and mount it with default options.
    pub fn mounted(blueprint: &DiagramBlueprint) -> Self {
        Self::with_options(blueprint, MountOptions::default())
    }

    pub fn with_options(blueprint: &DiagramBlueprint, options: MountOptions) -> Self {
        let probe = EngineProbe::default();
        let ctrl = EngineController::new();
        ctrl.initialize(MockEngine::new(&probe), build(blueprint), options);
        Self { ctrl, probe }
    }
}
