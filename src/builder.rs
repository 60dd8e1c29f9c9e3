//! Blueprint-to-graph resolution.
//!
//! [`build`] is the pure transform at the heart of the crate: it consumes a
//! [`DiagramBlueprint`] and produces a renderable [`Graph`]. Resolution is
//! deterministic and best-effort — a link whose endpoints or ports cannot be
//! resolved is dropped from the output, never an error. Nodes are always
//! materialized, one entity per blueprint node.
//!
//! Drops are reported at `debug` level so an authoring typo (a misspelled
//! port name, a dangling node id) is visible in development logs without
//! changing the production contract.

use std::collections::HashMap;

use crate::blueprint::{DiagramBlueprint, LinkBlueprint, LinkDefaults, NodeBlueprint};
use crate::graph::{Connection, Graph, Node, Port, PortDirection};

/// Resolve a blueprint into a renderable graph.
///
/// Every blueprint node becomes exactly one [`Node`]. Every link becomes at
/// most one [`Connection`]:
///
/// 1. `from`/`to` must both name existing nodes, else the link is dropped.
/// 2. The source port is the port named by `fromPort` when the node has it,
///    otherwise the first declared out-port; no resolvable port drops the
///    link. The target port resolves analogously against `toPort` and the
///    in-ports.
/// 3. Styling falls back per-field to the diagram defaults.
/// 4. Lock state falls back to the diagram-wide lock.
pub fn build(blueprint: &DiagramBlueprint) -> Graph {
    let diagram_locked = blueprint.locked();
    let defaults = blueprint.defaults();

    let nodes: Vec<Node> = blueprint
        .nodes
        .iter()
        .map(|def| materialize_node(def, diagram_locked))
        .collect();

    let index: HashMap<&str, &Node> = nodes.iter().map(|n| (n.id.as_str(), n)).collect();

    let connections: Vec<Connection> = blueprint
        .links
        .iter()
        .filter_map(|link| {
            let connection = resolve_link(link, &index, &defaults, diagram_locked);
            if connection.is_none() {
                tracing::debug!(
                    diagram = %blueprint.id,
                    link = %link.id,
                    from = %link.from,
                    to = %link.to,
                    "dropping unresolvable link"
                );
            }
            connection
        })
        .collect();

    Graph::new(&blueprint.id, nodes, connections).with_locked(diagram_locked)
}

fn materialize_node(def: &NodeBlueprint, diagram_locked: bool) -> Node {
    let mut ports = Vec::with_capacity(def.in_ports.len() + def.out_ports.len());
    ports.extend(def.in_ports.iter().map(|name| Port {
        name: name.clone(),
        direction: PortDirection::In,
    }));
    ports.extend(def.out_ports.iter().map(|name| Port {
        name: name.clone(),
        direction: PortDirection::Out,
    }));

    Node {
        id: def.id.clone(),
        label: def.label.clone(),
        color: def.color.clone(),
        position: def.position,
        locked: def.locked.unwrap_or(diagram_locked),
        ports,
    }
}

/// Resolve an endpoint port: the named port when present on the node,
/// otherwise the first declared port of the matching direction.
fn resolve_port<'a>(
    node: &'a Node,
    preferred: Option<&str>,
    direction: PortDirection,
) -> Option<&'a Port> {
    if let Some(name) = preferred {
        if let Some(port) = node.port(name) {
            return Some(port);
        }
    }
    node.first_port(direction)
}

fn resolve_link(
    link: &LinkBlueprint,
    index: &HashMap<&str, &Node>,
    defaults: &LinkDefaults,
    diagram_locked: bool,
) -> Option<Connection> {
    let from = index.get(link.from.as_str())?;
    let to = index.get(link.to.as_str())?;

    let source = resolve_port(from, link.from_port.as_deref(), PortDirection::Out)?;
    let target = resolve_port(to, link.to_port.as_deref(), PortDirection::In)?;

    Some(Connection {
        id: link.id.clone(),
        from_node: from.id.clone(),
        from_port: source.name.clone(),
        to_node: to.id.clone(),
        to_port: target.name.clone(),
        label: link.label.clone(),
        color: link.color.clone().unwrap_or_else(|| defaults.color.clone()),
        width: link.width.unwrap_or(defaults.width),
        curvyness: link.curvyness.unwrap_or(defaults.curvyness),
        locked: link.locked.unwrap_or(diagram_locked),
    })
}
