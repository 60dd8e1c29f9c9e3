//! Common test utilities for integration tests.

#![allow(dead_code)]

pub mod harness;

use blueprint_canvas::{DiagramBlueprint, LinkBlueprint, NodeBlueprint, Position};

/// A small three-stage pipeline: source -> transform -> sink, with an extra
/// out-port on the transform for branch tests.
pub fn pipeline_blueprint() -> DiagramBlueprint {
    DiagramBlueprint {
        id: "pipeline".into(),
        nodes: vec![
            NodeBlueprint::new("source", "Fuente", "#0ea5e9", Position::new(0.0, 100.0))
                .with_out_ports(["salida"]),
            NodeBlueprint::new("transform", "Transformación", "#9333ea", Position::new(240.0, 100.0))
                .with_in_ports(["entrada"])
                .with_out_ports(["principal", "errores"]),
            NodeBlueprint::new("sink", "Destino", "#10b981", Position::new(480.0, 100.0))
                .with_in_ports(["entrada"]),
        ],
        links: vec![
            LinkBlueprint::new("source-transform", "source", "transform").with_label("datos"),
            LinkBlueprint::new("transform-sink", "transform", "sink"),
        ],
        ..DiagramBlueprint::default()
    }
}
