//! The rendering-engine contract.
//!
//! The crate never renders anything itself. A concrete canvas backend
//! implements [`RenderEngine`], and the [`crate::controller::EngineController`]
//! drives it: registering interaction actions on initialize, pushing
//! viewport changes, asking for repaints, and reading back surface and
//! content geometry for fit-to-view math.
//!
//! # Example
//!
//! ```
//! use blueprint_canvas::engine::{InteractionAction, RenderEngine, Rect, Viewport};
//!
//! /// A backend that renders nothing; useful as a placeholder.
//! struct Headless;
//!
//! impl RenderEngine for Headless {
//!     fn surface_size(&self) -> Option<(f32, f32)> { None }
//!     fn content_bounds(&self) -> Option<Rect> { None }
//!     fn register_action(&mut self, _action: InteractionAction) {}
//!     fn apply_viewport(&mut self, _viewport: &Viewport) {}
//!     fn repaint(&mut self) {}
//! }
//! ```

/// Keyboard keys that trigger deletion of the current selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeleteKey {
    Delete,
    Backspace,
}

/// Interaction behaviors the controller installs on a freshly created
/// engine. A closed set: backends match on the variant and wire up their
/// own gesture handling.
#[derive(Clone, Debug, PartialEq)]
pub enum InteractionAction {
    /// Drag-to-pan combined with pinch/ctrl-scroll zoom.
    PanAndZoom { inverse_zoom: bool },
    /// Plain wheel zoom.
    WheelZoom { inverse_zoom: bool },
    /// Delete the current selection on any of the given keys.
    DeleteSelection { keys: Vec<DeleteKey> },
}

/// Viewport state pushed to the engine: zoom level in percent and a pixel
/// offset of the canvas origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    /// Zoom level in percent; 100.0 is 1:1.
    pub zoom: f32,
    /// Canvas origin offset in surface pixels.
    pub offset: (f32, f32),
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            zoom: 100.0,
            offset: (0.0, 0.0),
        }
    }
}

/// An axis-aligned rectangle in canvas coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Contract a canvas backend must satisfy to be driven by the controller.
///
/// Engines are single-threaded resources: one engine instance belongs to one
/// mounted controller and is dropped on teardown.
pub trait RenderEngine {
    /// Size of the rendering surface in pixels, or `None` while the canvas
    /// is not yet mounted. Initial mount may race the canvas's own layout
    /// pass, so the controller polls this once per animation frame before
    /// the deferred fit-to-view.
    fn surface_size(&self) -> Option<(f32, f32)>;

    /// Bounding box of all rendered nodes in canvas coordinates, or `None`
    /// when nothing has been laid out yet.
    fn content_bounds(&self) -> Option<Rect>;

    /// Install one interaction behavior. Called once per action during
    /// controller initialization.
    fn register_action(&mut self, action: InteractionAction);

    /// Push a new viewport state. The engine must not repaint on its own;
    /// the controller follows up with [`repaint`](Self::repaint).
    fn apply_viewport(&mut self, viewport: &Viewport);

    /// Redraw the canvas with the current model and viewport.
    fn repaint(&mut self);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_viewport_is_identity() {
        let viewport = Viewport::default();
        assert_eq!(viewport.zoom, 100.0);
        assert_eq!(viewport.offset, (0.0, 0.0));
    }

    #[test]
    fn test_interaction_actions_compare_by_value() {
        assert_eq!(
            InteractionAction::PanAndZoom { inverse_zoom: true },
            InteractionAction::PanAndZoom { inverse_zoom: true },
        );
        assert_ne!(
            InteractionAction::WheelZoom { inverse_zoom: true },
            InteractionAction::WheelZoom { inverse_zoom: false },
        );
    }
}
