//! Surface sizing helpers.
//!
//! Hosts embed the diagram canvas in a surface whose height either comes
//! from a fixed preset or adapts to the blueprint's canvas hint. The
//! adaptive rule gives the canvas breathing room while keeping small
//! diagrams from collapsing: the hinted height plus padding, with a hard
//! minimum, clamped to the host's available height by the caller.

/// Message shown in place of the canvas while no engine is mounted.
pub const PLACEHOLDER_MESSAGE: &str = "Generando vista del diagrama...";

/// Canvas height assumed when the blueprint gives no hint.
pub const DEFAULT_CANVAS_HEIGHT: f32 = 720.0;
/// Vertical padding added around the hinted canvas height.
pub const SURFACE_PADDING: f32 = 120.0;
/// Surfaces never shrink below this, whatever the host reports.
pub const MIN_SURFACE_HEIGHT: f32 = 480.0;
/// Adaptive surfaces never compute less than this.
pub const BASE_SURFACE_HEIGHT: f32 = 840.0;

/// Fixed height presets for surfaces that do not adapt to their blueprint.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SurfaceHeight {
    #[default]
    Standard,
    Spacious,
    Compact,
    /// No preset; the host supplies the height.
    None,
}

impl SurfaceHeight {
    /// Preset height in pixels, or `None` for [`SurfaceHeight::None`].
    pub fn pixels(self) -> Option<f32> {
        match self {
            SurfaceHeight::Standard => Some(700.0),
            SurfaceHeight::Spacious => Some(800.0),
            SurfaceHeight::Compact => Some(600.0),
            SurfaceHeight::None => None,
        }
    }
}

/// Adaptive surface height for a blueprint canvas hint: the hinted height
/// plus padding, never less than [`BASE_SURFACE_HEIGHT`].
pub fn surface_height_px(canvas_height: Option<f32>) -> f32 {
    let canvas = canvas_height.unwrap_or(DEFAULT_CANVAS_HEIGHT);
    (canvas + SURFACE_PADDING).max(BASE_SURFACE_HEIGHT)
}

/// Clamp the host's available height between [`MIN_SURFACE_HEIGHT`] and the
/// adaptive maximum for the given canvas hint.
pub fn clamp_surface_height(available: f32, canvas_height: Option<f32>) -> f32 {
    available.clamp(MIN_SURFACE_HEIGHT, surface_height_px(canvas_height))
}
