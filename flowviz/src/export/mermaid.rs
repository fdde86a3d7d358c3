//! Mermaid flowchart markup.
//!
//! Layout: direction line, four `classDef` lines, one declaration per node in
//! render order, one `-->` line per edge in render order, then one `linkStyle`
//! per edge whose index is the edge's position in that sequence.

use std::collections::{HashMap, HashSet};

use crate::render::RenderGraph;
use crate::style::{EdgeStyle, NodeRole, NodeStyle, StyleTable};

/// Mermaid reserves `end`, so the END class gets a different name.
const END_CLASS: &str = "endClass";

pub fn render_mermaid(graph: &RenderGraph, style: &StyleTable) -> String {
    let ids = MermaidIds::new(graph.nodes.iter().map(|n| n.id.as_str()));

    let mut parts = vec![
        format!("flowchart {}", style.graph.rank_dir.mermaid()),
        class_def("start", &style.start),
        class_def(END_CLASS, &style.end),
        class_def("node", &style.node),
        class_def("highlight", &style.highlight),
    ];

    for node in &graph.nodes {
        parts.push(format!(
            "{}([\"{}\"]):::{}",
            ids.get(&node.id),
            escape_label(&node.id),
            class_name(node.role)
        ));
    }

    for edge in &graph.edges {
        parts.push(format!("    {} --> {}", ids.get(&edge.from), ids.get(&edge.to)));
    }

    for (index, edge) in graph.edges.iter().enumerate() {
        parts.push(format!(
            "linkStyle {} {}",
            index,
            link_style(style.edge_style(edge.role))
        ));
    }

    parts.join("\n")
}

fn class_name(role: NodeRole) -> &'static str {
    match role {
        NodeRole::Start => "start",
        NodeRole::End => END_CLASS,
        NodeRole::Node => "node",
    }
}

fn class_def(name: &str, style: &NodeStyle) -> String {
    format!(
        "classDef {} fill:{},stroke:{},stroke-width:{}px,color:{},rx:{r},ry:{r};",
        name,
        style.fill.to_lowercase(),
        style.stroke.to_lowercase(),
        style.stroke_width,
        style.font_color.to_lowercase(),
        r = style.corner_radius
    )
}

fn link_style(style: &EdgeStyle) -> String {
    let mut spec = format!(
        "stroke:{},stroke-width:{}px",
        style.stroke.to_lowercase(),
        style.stroke_width
    );
    if let Some(dash) = style.line.dash_array() {
        spec.push_str(",stroke-dasharray:");
        spec.push_str(dash);
    }
    spec
}

fn escape_label(label: &str) -> String {
    label.replace('"', "#quot;")
}

/// Stable, collision-free Mermaid identifiers for node ids.
struct MermaidIds {
    by_node: HashMap<String, String>,
}

impl MermaidIds {
    fn new<'a>(node_ids: impl IntoIterator<Item = &'a str>) -> Self {
        let mut by_node = HashMap::new();
        let mut taken = HashSet::new();
        for id in node_ids {
            if by_node.contains_key(id) {
                continue;
            }
            let base = sanitize(id);
            let mut candidate = base.clone();
            let mut suffix = 2;
            while !taken.insert(candidate.clone()) {
                candidate = format!("{base}_{suffix}");
                suffix += 1;
            }
            by_node.insert(id.to_string(), candidate);
        }
        Self { by_node }
    }

    fn get(&self, id: &str) -> String {
        self.by_node
            .get(id)
            .cloned()
            .unwrap_or_else(|| sanitize(id))
    }
}

fn sanitize(id: &str) -> String {
    let body: String = id
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect();
    format!("n_{body}")
}
