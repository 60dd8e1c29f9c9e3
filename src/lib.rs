//! # Blueprint Canvas
//!
//! The reusable core of a content-driven diagram application: declarative
//! diagram blueprints, deterministic resolution into renderable graphs, an
//! engine-agnostic viewport controller, and a small read-only HTTP API for
//! the content catalog.
//!
//! ## Features
//!
//! - **Declarative Blueprints** - Nodes, ports and links authored as plain
//!   data with diagram-level styling defaults
//! - **Best-Effort Resolution** - Broken link references are dropped, never
//!   errors; nodes are always materialized
//! - **Engine-Agnostic Controller** - Zoom, fit-to-view and lock handling
//!   over any backend implementing the [`RenderEngine`] trait
//! - **Deferred Fit** - Fit-to-view waits for the surface to mount and runs
//!   exactly once, cancellable on teardown
//! - **Content API** - Three cache-friendly GET endpoints over a slug-keyed
//!   content catalog
//!
//! ## Quick Start
//!
//! ```ignore
//! use blueprint_canvas::{build, journey_blueprint, EngineController, MountOptions};
//!
//! let graph = build(&journey_blueprint());
//! let controller = EngineController::new();
//! controller.initialize(Box::new(my_engine), graph, MountOptions::default());
//!
//! // Pump once per animation frame until the deferred fit has run.
//! controller.on_frame();
//! ```
//!
//! ## Core Components
//!
//! - [`DiagramBlueprint`] - Authored diagram description
//! - [`build`] - Blueprint-to-graph resolution
//! - [`Graph`] - Resolved nodes, ports and connections
//! - [`EngineController`] - Lifecycle and viewport operations
//! - [`RenderEngine`] - The contract a canvas backend implements
//! - [`StaticCatalog`] - The built-in content catalog
//! - [`http::router`] - The content API

pub mod blueprint;
pub mod builder;
pub mod content;
pub mod controller;
pub mod engine;
pub mod graph;
pub mod http;
pub mod viewport;

pub use blueprint::{
    CanvasHints, DiagramBlueprint, LinkBlueprint, LinkDefaults, NodeBlueprint, Position,
};
pub use builder::build;
pub use content::{
    journey_blueprint, ContentEnvelope, ContentPayload, ContentProvider, StaticCatalog,
};
pub use controller::{
    EngineController, MountOptions, DEFAULT_FIT_MARGIN, ZOOM_MAX, ZOOM_MIN, ZOOM_STEP,
};
pub use engine::{DeleteKey, InteractionAction, Rect, RenderEngine, Viewport};
pub use graph::{Connection, Graph, Node, Port, PortDirection};
pub use http::{ApiError, SharedProvider};
