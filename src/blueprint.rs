//! Declarative diagram descriptions.
//!
//! A [`DiagramBlueprint`] is authored data: nodes with port name lists,
//! links that reference nodes (and optionally ports) by name, and diagram
//! level styling defaults. Blueprints serialize to the camelCase wire
//! format served by the content API and are resolved into renderable
//! graphs by [`crate::builder::build`].
//!
//! Per-link styling and lock fields are all optional; unset fields fall
//! back to the diagram defaults at build time, so a blueprint only states
//! what deviates.
//!
//! # Example
//!
//! ```
//! use blueprint_canvas::blueprint::{DiagramBlueprint, LinkBlueprint, NodeBlueprint, Position};
//!
//! let blueprint = DiagramBlueprint {
//!     id: "two-step".into(),
//!     nodes: vec![
//!         NodeBlueprint::new("a", "Inicio", "#0ea5e9", Position::new(0.0, 0.0))
//!             .with_out_ports(["salida"]),
//!         NodeBlueprint::new("b", "Fin", "#10b981", Position::new(240.0, 0.0))
//!             .with_in_ports(["entrada"]),
//!     ],
//!     links: vec![LinkBlueprint::new("a-b", "a", "b").with_label("siguiente")],
//!     ..DiagramBlueprint::default()
//! };
//! assert!(blueprint.locked());
//! ```

use serde::{Deserialize, Serialize};

/// Link color applied when neither the link nor the diagram sets one.
pub const DEFAULT_LINK_COLOR: &str = "#38bdf8";
/// Link stroke width applied when neither the link nor the diagram sets one.
pub const DEFAULT_LINK_WIDTH: f32 = 2.0;
/// Link curvyness applied when neither the link nor the diagram sets one.
pub const DEFAULT_CURVYNESS: f32 = 50.0;

/// A point in canvas coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// One authored node: identity, presentation, and its declared port names.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeBlueprint {
    pub id: String,
    pub label: String,
    pub color: String,
    pub position: Position,
    /// Names of ports that accept incoming links, in declaration order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub in_ports: Vec<String>,
    /// Names of ports that source outgoing links, in declaration order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub out_ports: Vec<String>,
    /// Per-node lock override; unset falls back to the diagram-wide lock.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locked: Option<bool>,
}

impl NodeBlueprint {
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        color: impl Into<String>,
        position: Position,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            color: color.into(),
            position,
            in_ports: Vec::new(),
            out_ports: Vec::new(),
            locked: None,
        }
    }

    pub fn with_in_ports<I, S>(mut self, ports: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.in_ports = ports.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_out_ports<I, S>(mut self, ports: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.out_ports = ports.into_iter().map(Into::into).collect();
        self
    }
}

/// One authored link between two nodes, referencing them by id.
///
/// Port references are optional; when absent the builder falls back to the
/// first declared port of the matching direction. Styling fields are
/// optional per-link overrides of the diagram defaults.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkBlueprint {
    pub id: String,
    pub from: String,
    pub to: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_port: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_port: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub curvyness: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locked: Option<bool>,
}

impl LinkBlueprint {
    pub fn new(id: impl Into<String>, from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            from: from.into(),
            to: to.into(),
            ..Self::default()
        }
    }

    pub fn with_ports(mut self, from_port: impl Into<String>, to_port: impl Into<String>) -> Self {
        self.from_port = Some(from_port.into());
        self.to_port = Some(to_port.into());
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

/// Layout hints for the surface hosting the diagram.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanvasHints {
    /// Preferred canvas height in pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f32>,
}

/// Resolved diagram-level link styling, every field concrete.
#[derive(Clone, Debug, PartialEq)]
pub struct LinkDefaults {
    pub color: String,
    pub width: f32,
    pub curvyness: f32,
}

/// A complete authored diagram.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagramBlueprint {
    pub id: String,
    #[serde(default)]
    pub nodes: Vec<NodeBlueprint>,
    #[serde(default)]
    pub links: Vec<LinkBlueprint>,
    /// Diagram-wide lock flag; unset means locked.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lock_diagram: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_link_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_link_width: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_curvyness: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub canvas: Option<CanvasHints>,
}

impl DiagramBlueprint {
    /// Diagram-level link styling with the crate-wide fallbacks applied.
    pub fn defaults(&self) -> LinkDefaults {
        LinkDefaults {
            color: self
                .default_link_color
                .clone()
                .unwrap_or_else(|| DEFAULT_LINK_COLOR.to_string()),
            width: self.default_link_width.unwrap_or(DEFAULT_LINK_WIDTH),
            curvyness: self.default_curvyness.unwrap_or(DEFAULT_CURVYNESS),
        }
    }

    /// Diagram-wide lock flag. An unset flag means locked: published
    /// diagrams are read-only unless explicitly opened for editing.
    pub fn locked(&self) -> bool {
        self.lock_diagram.unwrap_or(true)
    }

    /// Preferred canvas height, if the blueprint states one.
    pub fn canvas_height(&self) -> Option<f32> {
        self.canvas.and_then(|c| c.height)
    }
}
