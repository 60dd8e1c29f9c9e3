//! Static content catalog.
//!
//! Page content lives server-side and is fetched by slug through the HTTP
//! API. [`ContentProvider`] is the lookup seam; [`StaticCatalog`] is the
//! built-in implementation carrying the published pages, plus the journey
//! diagram blueprint served on its own endpoint.
//!
//! Payload shapes are page-specific. The wire envelope is always
//! `{ "slug": ..., "data": ... }` with the payload serialized untagged, so
//! clients see plain page data rather than an enum wrapper.

use crate::blueprint::{CanvasHints, DiagramBlueprint, LinkBlueprint, NodeBlueprint, Position};
use serde::{Deserialize, Serialize};

// === payload shapes ===

/// Icon identifiers shared between content entries and the client's icon set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum IconName {
    Route,
    Workflow,
    Network,
    Share2,
    GitBranch,
    CalendarCheck,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagramLinkItem {
    pub href: String,
    pub label: String,
    pub icon: IconName,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HighlightSection {
    pub title: String,
    pub description: String,
    pub href: String,
    pub icon: IconName,
    pub accent: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeContent {
    pub diagram_links: Vec<DiagramLinkItem>,
    pub highlights: Vec<String>,
    pub sections: Vec<HighlightSection>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArchitectureLayer {
    pub name: String,
    pub detail: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArchitectureContent {
    pub layers: Vec<ArchitectureLayer>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BpmnLegendItem {
    pub label: String,
    pub detail: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BpmnContent {
    pub legend: Vec<BpmnLegendItem>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JourneyPhase {
    pub title: String,
    pub description: String,
    pub color: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JourneyContent {
    pub phases: Vec<JourneyPhase>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    pub title: String,
    pub day: u8,
    pub color: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarContent {
    pub events: Vec<CalendarEvent>,
    pub month_title: String,
    pub mode_label: String,
    pub summary: String,
    pub cta_label: String,
}

/// The payload of one content entry. Serialized untagged: each variant has
/// a distinct top-level field set, which also keeps untagged deserialization
/// unambiguous.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ContentPayload {
    Home(HomeContent),
    Architecture(ArchitectureContent),
    Bpmn(BpmnContent),
    Journey(JourneyContent),
    Calendar(CalendarContent),
}

/// The wire envelope for one content entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentEnvelope {
    pub slug: String,
    pub data: ContentPayload,
}

// === provider ===

/// Slug-keyed content lookup.
pub trait ContentProvider {
    /// The entry published under `slug`, or `None` for unknown slugs.
    fn get(&self, slug: &str) -> Option<ContentEnvelope>;

    /// Every published slug, in catalog order.
    fn slugs(&self) -> Vec<String>;
}

/// The built-in catalog of published pages.
#[derive(Clone, Copy, Debug, Default)]
pub struct StaticCatalog;

impl StaticCatalog {
    const SLUGS: [&'static str; 5] = ["home", "journey", "bpmn", "arquitectura", "calendario"];
}

impl ContentProvider for StaticCatalog {
    fn get(&self, slug: &str) -> Option<ContentEnvelope> {
        let data = match slug {
            "home" => ContentPayload::Home(home_content()),
            "journey" => ContentPayload::Journey(journey_content()),
            "bpmn" => ContentPayload::Bpmn(bpmn_content()),
            "arquitectura" => ContentPayload::Architecture(architecture_content()),
            "calendario" => ContentPayload::Calendar(calendar_content()),
            _ => return None,
        };
        Some(ContentEnvelope {
            slug: slug.to_string(),
            data,
        })
    }

    fn slugs(&self) -> Vec<String> {
        Self::SLUGS.iter().map(|s| s.to_string()).collect()
    }
}

// === catalog data ===

fn diagram_link(href: &str, label: &str, icon: IconName) -> DiagramLinkItem {
    DiagramLinkItem {
        href: href.to_string(),
        label: label.to_string(),
        icon,
    }
}

fn section(
    title: &str,
    description: &str,
    href: &str,
    icon: IconName,
    accent: &str,
) -> HighlightSection {
    HighlightSection {
        title: title.to_string(),
        description: description.to_string(),
        href: href.to_string(),
        icon,
        accent: accent.to_string(),
    }
}

pub fn home_content() -> HomeContent {
    HomeContent {
        diagram_links: vec![
            diagram_link("/journey", "Journey conversacional", IconName::Route),
            diagram_link("/bpmn", "Mapa BPMN", IconName::Workflow),
            diagram_link("/arquitectura", "Arquitectura técnica", IconName::Network),
            diagram_link("/uml", "Modelo de clases", IconName::Share2),
            diagram_link("/secuencia", "Secuencia tiempo real", IconName::GitBranch),
            diagram_link("/calendario", "Agenda de agentes", IconName::CalendarCheck),
        ],
        highlights: [
            "Bots Next.js",
            "Flows Meta",
            "Orquestación n8n",
            "Persistencia Supabase",
            "Dashboards métricos",
            "Atención humana",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect(),
        sections: vec![
            section(
                "Journey conversacional",
                "Secuencia de contacto desde el primer mensaje hasta la respuesta del agente, destacando a cada plataforma involucrada.",
                "/journey",
                IconName::Route,
                "from-sky-500/10 via-transparent to-transparent",
            ),
            section(
                "Mapa operativo BPMN",
                "Tareas automatizadas y manuales que conforman el flujo entre WhatsApp, n8n y Supabase con ramificaciones claras.",
                "/bpmn",
                IconName::Workflow,
                "from-indigo-500/10 via-transparent to-transparent",
            ),
            section(
                "Arquitectura de nodos",
                "Componentes esenciales del stack con conexiones bloqueadas para comprender el paso de datos entre servicios.",
                "/arquitectura",
                IconName::Network,
                "from-cyan-500/10 via-transparent to-transparent",
            ),
            section(
                "Modelo de clases",
                "Relaciones entre usuarios, conversaciones, flujos y cotizaciones para respaldar la automatización en producción.",
                "/uml",
                IconName::Share2,
                "from-emerald-500/10 via-transparent to-transparent",
            ),
            section(
                "Secuencia de mensajes",
                "Intercambios ordenados en el tiempo entre WhatsApp, el bot, n8n y el agente humano para auditar interacciones.",
                "/secuencia",
                IconName::GitBranch,
                "from-amber-500/10 via-transparent to-transparent",
            ),
            section(
                "Agenda y productividad",
                "Resumen mensual con eventos clave y accesos rápidos para coordinar el seguimiento de los casos en el CRM.",
                "/calendario",
                IconName::CalendarCheck,
                "from-rose-500/10 via-transparent to-transparent",
            ),
        ],
    }
}

pub fn architecture_content() -> ArchitectureContent {
    let layer = |name: &str, detail: &str| ArchitectureLayer {
        name: name.to_string(),
        detail: detail.to_string(),
    };
    ArchitectureContent {
        layers: vec![
            layer(
                "Canal de entrada",
                "WhatsApp Business y plantillas oficiales activan el viaje conversacional del viajero.",
            ),
            layer(
                "Gateway web",
                "Next.js recibe webhooks, limpia datos y coordina con el orquestador de automatizaciones.",
            ),
            layer(
                "Orquestación",
                "n8n enruta casos entre flows, bases de datos y agentes disponibles con reglas dinámicas.",
            ),
            layer(
                "Persistencia",
                "Supabase almacena clientes, cotizaciones y métricas con funciones para reportes.",
            ),
            layer(
                "Experiencia del agente",
                "Panel en React que muestra agenda, historial de mensajes y atajos para plantillas.",
            ),
            layer(
                "Analítica",
                "Dashboards consolidan SLAs, conversiones y productividad por agente.",
            ),
        ],
    }
}

pub fn bpmn_content() -> BpmnContent {
    let item = |label: &str, detail: &str| BpmnLegendItem {
        label: label.to_string(),
        detail: detail.to_string(),
    };
    BpmnContent {
        legend: vec![
            item(
                "Entrada",
                "Eventos que nacen del webhook de WhatsApp y disparan la automatización.",
            ),
            item(
                "Tareas automáticas",
                "Pasos ejecutados por n8n para consultar datos, decidir ramas y notificar.",
            ),
            item(
                "Subprocesos",
                "WhatsApp Flows y n8n encapsulan formularios para recolectar datos confiables.",
            ),
            item(
                "Intervención humana",
                "Asignación del caso al agente cuando se requiere respuesta personalizada.",
            ),
        ],
    }
}

pub fn journey_content() -> JourneyContent {
    let phase = |title: &str, description: &str, color: &str| JourneyPhase {
        title: title.to_string(),
        description: description.to_string(),
        color: color.to_string(),
    };
    JourneyContent {
        phases: vec![
            phase(
                "Descubrimiento",
                "El viajero inicia chat y recibe respuestas automáticas con opciones guiadas.",
                "border-sky-400/30",
            ),
            phase(
                "Calificación",
                "Flows y n8n recopilan los datos necesarios para clasificar la solicitud.",
                "border-emerald-400/30",
            ),
            phase(
                "Producción",
                "Supabase y el panel del agente generan cotizaciones listas para enviar.",
                "border-indigo-400/30",
            ),
            phase(
                "Seguimiento",
                "El equipo monitorea métricas y agenda para asegurar tiempos de respuesta.",
                "border-amber-400/30",
            ),
        ],
    }
}

pub fn calendar_content() -> CalendarContent {
    let event = |title: &str, day: u8, color: &str| CalendarEvent {
        title: title.to_string(),
        day,
        color: color.to_string(),
    };
    CalendarContent {
        events: vec![
            event("Reunión con aerolínea", 3, "border-sky-400/50 bg-sky-500/15"),
            event(
                "Entrega cotizaciones grupales",
                9,
                "border-emerald-400/40 bg-emerald-500/15",
            ),
            event(
                "Capacitación agentes",
                17,
                "border-indigo-400/40 bg-indigo-500/15",
            ),
            event("Cierre KPI mensual", 28, "border-amber-400/40 bg-amber-500/15"),
        ],
        month_title: "Octubre 2024".to_string(),
        mode_label: "Modo colaborativo".to_string(),
        summary: "Consolida hitos comerciales, capacitaciones y entregables críticos para coordinar la atención en WhatsApp.".to_string(),
        cta_label: "Crear nuevo evento".to_string(),
    }
}

// === journey diagram ===

/// The published journey diagram: the conversational CRM pipeline from the
/// first WhatsApp message to the agent's reply.
pub fn journey_blueprint() -> DiagramBlueprint {
    DiagramBlueprint {
        id: "crm-journey-blueprint".into(),
        lock_diagram: Some(true),
        default_link_color: Some("#38bdf8".into()),
        default_link_width: Some(2.0),
        default_curvyness: Some(45.0),
        canvas: Some(CanvasHints {
            height: Some(760.0),
        }),
        nodes: vec![
            NodeBlueprint::new("contact", "Cliente en WhatsApp", "#0ea5e9", Position::new(40.0, 220.0))
                .with_out_ports(["mensaje"]),
            NodeBlueprint::new("webhook", "Webhook Next.js", "#2563eb", Position::new(260.0, 160.0))
                .with_in_ports(["webhook"])
                .with_out_ports(["evento limpio"]),
            NodeBlueprint::new("router", "n8n Router", "#9333ea", Position::new(500.0, 160.0))
                .with_in_ports(["evento"])
                .with_out_ports(["visa", "vuelo", "crm"]),
            NodeBlueprint::new("visa-flow", "WhatsApp Flow Visa", "#0891b2", Position::new(740.0, 40.0))
                .with_in_ports(["activar"])
                .with_out_ports(["resumen"]),
            NodeBlueprint::new("flight-flow", "Formulario Vuelo", "#0ea5e9", Position::new(740.0, 240.0))
                .with_in_ports(["activar"])
                .with_out_ports(["solicitud"]),
            NodeBlueprint::new("supabase", "Supabase CRM", "#10b981", Position::new(980.0, 200.0))
                .with_in_ports(["guardar"])
                .with_out_ports(["expediente", "metricas"]),
            NodeBlueprint::new("agent", "Panel de agentes", "#6366f1", Position::new(1220.0, 200.0))
                .with_in_ports(["caso"])
                .with_out_ports(["respuesta"]),
            NodeBlueprint::new("customer-done", "Cliente informado", "#f97316", Position::new(1460.0, 200.0))
                .with_in_ports(["mensaje"]),
            NodeBlueprint::new("metrics", "Panel métricas", "#facc15", Position::new(980.0, 420.0))
                .with_in_ports(["evento"]),
        ],
        links: vec![
            LinkBlueprint::new("contact-webhook", "contact", "webhook").with_label("Mensaje entrante"),
            LinkBlueprint::new("webhook-router", "webhook", "router").with_label("Evento normalizado"),
            LinkBlueprint {
                from_port: Some("visa".into()),
                ..LinkBlueprint::new("router-visa", "router", "visa-flow").with_label("Requiere visa")
            },
            LinkBlueprint {
                from_port: Some("vuelo".into()),
                ..LinkBlueprint::new("router-flight", "router", "flight-flow").with_label("Busca vuelo")
            },
            LinkBlueprint::new("visa-supabase", "visa-flow", "supabase").with_label("Datos validados"),
            LinkBlueprint::new("flight-supabase", "flight-flow", "supabase")
                .with_label("Solicitud completa"),
            LinkBlueprint {
                from_port: Some("crm".into()),
                ..LinkBlueprint::new("router-supabase", "router", "supabase").with_label("Actualiza CRM")
            },
            LinkBlueprint {
                from_port: Some("expediente".into()),
                ..LinkBlueprint::new("supabase-agent", "supabase", "agent").with_label("Caso asignado")
            },
            LinkBlueprint::new("agent-customer", "agent", "customer-done")
                .with_label("Respuesta humana"),
            LinkBlueprint {
                from_port: Some("metricas".into()),
                ..LinkBlueprint::new("supabase-metrics", "supabase", "metrics")
                    .with_label("Evento registrado")
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder;

    // ========================================================================
    // Catalog lookup
    // ========================================================================

    #[test]
    fn test_catalog_serves_every_published_slug() {
        let catalog = StaticCatalog;
        for slug in catalog.slugs() {
            let envelope = catalog.get(&slug).unwrap();
            assert_eq!(envelope.slug, slug);
        }
        assert_eq!(catalog.slugs().len(), 5);
    }

    #[test]
    fn test_unknown_slug_yields_none() {
        assert!(StaticCatalog.get("uml").is_none());
        assert!(StaticCatalog.get("").is_none());
        assert!(StaticCatalog.get("HOME").is_none());
    }

    #[test]
    fn test_payload_variants_match_their_slugs() {
        let catalog = StaticCatalog;
        assert!(matches!(
            catalog.get("home").unwrap().data,
            ContentPayload::Home(_)
        ));
        assert!(matches!(
            catalog.get("arquitectura").unwrap().data,
            ContentPayload::Architecture(_)
        ));
        assert!(matches!(
            catalog.get("calendario").unwrap().data,
            ContentPayload::Calendar(_)
        ));
    }

    // ========================================================================
    // Wire shape
    // ========================================================================

    #[test]
    fn test_envelope_serializes_payload_untagged() {
        let envelope = StaticCatalog.get("journey").unwrap();
        let value = serde_json::to_value(&envelope).unwrap();

        assert_eq!(value["slug"], "journey");
        // The payload appears as plain page data, no enum wrapper.
        assert!(value["data"]["phases"].is_array());
        assert_eq!(value["data"]["phases"][0]["title"], "Descubrimiento");
    }

    #[test]
    fn test_icon_names_use_camel_case_on_wire() {
        let value = serde_json::to_value(&StaticCatalog.get("home").unwrap()).unwrap();
        let icons: Vec<&str> = value["data"]["diagramLinks"]
            .as_array()
            .unwrap()
            .iter()
            .map(|l| l["icon"].as_str().unwrap())
            .collect();
        assert_eq!(
            icons,
            vec!["route", "workflow", "network", "share2", "gitBranch", "calendarCheck"]
        );
    }

    #[test]
    fn test_calendar_fields_use_camel_case_on_wire() {
        let value = serde_json::to_value(&StaticCatalog.get("calendario").unwrap()).unwrap();
        assert_eq!(value["data"]["monthTitle"], "Octubre 2024");
        assert_eq!(value["data"]["modeLabel"], "Modo colaborativo");
        assert_eq!(value["data"]["ctaLabel"], "Crear nuevo evento");
    }

    // ========================================================================
    // Journey blueprint
    // ========================================================================

    #[test]
    fn test_journey_blueprint_shape() {
        let blueprint = journey_blueprint();
        assert_eq!(blueprint.id, "crm-journey-blueprint");
        assert!(blueprint.locked());
        assert_eq!(blueprint.nodes.len(), 9);
        assert_eq!(blueprint.links.len(), 10);
        assert_eq!(blueprint.canvas_height(), Some(760.0));

        let defaults = blueprint.defaults();
        assert_eq!(defaults.color, "#38bdf8");
        assert_eq!(defaults.width, 2.0);
        assert_eq!(defaults.curvyness, 45.0);
    }

    #[test]
    fn test_journey_blueprint_resolves_without_drops() {
        let graph = builder::build(&journey_blueprint());
        assert_eq!(graph.nodes.len(), 9);
        assert_eq!(graph.connections.len(), 10);
        assert!(graph.is_locked());
    }

    #[test]
    fn test_journey_router_fans_out_through_named_ports() {
        let graph = builder::build(&journey_blueprint());

        let visa = graph
            .connections
            .iter()
            .find(|c| c.id == "router-visa")
            .unwrap();
        assert_eq!(visa.from_port, "visa");
        assert_eq!(visa.to_port, "activar");

        // Unnamed source falls back to the first declared out-port.
        let incoming = graph
            .connections
            .iter()
            .find(|c| c.id == "contact-webhook")
            .unwrap();
        assert_eq!(incoming.from_port, "mensaje");
        assert_eq!(incoming.to_port, "webhook");
    }
}
