//! Resolved, renderable diagram graphs.
//!
//! A [`Graph`] is what [`crate::builder::build`] produces from a
//! [`crate::blueprint::DiagramBlueprint`]: node entities with materialized
//! directional ports, and one [`Connection`] per link that survived endpoint
//! and port resolution. The graph is owned by one mounted
//! [`crate::controller::EngineController`] at a time and is fully replaced
//! (never patched) when its source blueprint changes.

use crate::blueprint::Position;

/// Direction of a port relative to its node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PortDirection {
    /// Accepts incoming connections.
    In,
    /// Produces outgoing connections.
    Out,
}

/// A named, directional attachment point on a node.
#[derive(Clone, Debug, PartialEq)]
pub struct Port {
    pub name: String,
    pub direction: PortDirection,
}

/// A materialized diagram node.
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    pub id: String,
    pub label: String,
    pub color: String,
    pub position: Position,
    pub locked: bool,
    /// Declared in-ports followed by declared out-ports, in blueprint order.
    pub ports: Vec<Port>,
}

impl Node {
    /// Look up a port by name, regardless of direction.
    ///
    /// Port names are direction-agnostic for lookup purposes: an explicit
    /// `fromPort`/`toPort` reference matches whichever port carries the name.
    pub fn port(&self, name: &str) -> Option<&Port> {
        self.ports.iter().find(|p| p.name == name)
    }

    /// The first declared port of the given direction, if any.
    pub fn first_port(&self, direction: PortDirection) -> Option<&Port> {
        self.ports.iter().find(|p| p.direction == direction)
    }

    /// Iterator over ports of one direction, in declaration order.
    pub fn ports_of(&self, direction: PortDirection) -> impl Iterator<Item = &Port> {
        self.ports.iter().filter(move |p| p.direction == direction)
    }
}

/// One rendered connection between two resolved ports.
#[derive(Clone, Debug, PartialEq)]
pub struct Connection {
    pub id: String,
    pub from_node: String,
    pub from_port: String,
    pub to_node: String,
    pub to_port: String,
    pub label: Option<String>,
    pub color: String,
    pub width: f32,
    pub curvyness: f32,
    pub locked: bool,
}

/// The fully resolved, renderable structure produced from a blueprint.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Graph {
    pub id: String,
    pub nodes: Vec<Node>,
    pub connections: Vec<Connection>,
    locked: bool,
}

impl Graph {
    pub fn new(id: impl Into<String>, nodes: Vec<Node>, connections: Vec<Connection>) -> Self {
        Self {
            id: id.into(),
            nodes,
            connections,
            locked: false,
        }
    }

    /// Set only the graph-wide flag, leaving per-entity lock states as
    /// constructed. The builder uses this after applying per-entity
    /// fallbacks; [`set_locked`](Self::set_locked) is the cascading variant.
    pub fn with_locked(mut self, locked: bool) -> Self {
        self.locked = locked;
        self
    }

    /// Look up a node by id.
    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Graph-wide lock flag.
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Set the graph-wide lock flag and cascade it to every node and
    /// connection.
    pub fn set_locked(&mut self, locked: bool) {
        self.locked = locked;
        for node in &mut self.nodes {
            node.locked = locked;
        }
        for connection in &mut self.connections {
            connection.locked = locked;
        }
    }

    /// Flip the graph-wide lock flag, cascading, and return the new state.
    pub fn toggle_locked(&mut self) -> bool {
        self.set_locked(!self.locked);
        self.locked
    }
}
