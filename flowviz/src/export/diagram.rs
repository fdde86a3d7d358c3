//! Styled diagram backend: one SVG document per render, rasterised on demand.

use resvg::tiny_skia::{Pixmap, Transform};

use crate::error::VizError;
use crate::render::{EdgeRoute, RenderGraph};
use crate::style::{EdgeRole, EdgeStyle, NodeRole, NodeStyle, Shape, StyleTable};

/// Vector document built from a render graph; the raster image is derived from it.
#[derive(Debug, Clone)]
pub struct StyledDiagram {
    svg: String,
    font_family: String,
}

impl StyledDiagram {
    pub fn new(graph: &RenderGraph, style: &StyleTable) -> Self {
        Self {
            svg: build_svg(graph, style),
            font_family: style.node.font_name.clone(),
        }
    }

    pub fn svg(&self) -> &str {
        &self.svg
    }

    /// Rasterises the SVG at `scale` and encodes it as PNG.
    pub fn png(&self, scale: f32) -> Result<Vec<u8>, VizError> {
        if !scale.is_finite() || scale <= 0.0 {
            return Err(VizError::Raster(format!(
                "scale must be a positive number, got {scale}"
            )));
        }

        let mut options = resvg::usvg::Options::default();
        options.font_family = self.font_family.clone();
        options.fontdb_mut().load_system_fonts();

        let tree = resvg::usvg::Tree::from_str(&self.svg, &options)
            .map_err(|e| VizError::Svg(e.to_string()))?;

        let size = tree.size().to_int_size();
        let width = (size.width() as f32 * scale).ceil() as u32;
        let height = (size.height() as f32 * scale).ceil() as u32;
        let mut pixmap = Pixmap::new(width.max(1), height.max(1)).ok_or_else(|| {
            VizError::Raster(format!("failed to allocate {width}x{height} pixmap"))
        })?;

        resvg::render(&tree, Transform::from_scale(scale, scale), &mut pixmap.as_mut());

        pixmap
            .encode_png()
            .map_err(|e| VizError::Raster(e.to_string()))
    }
}

fn build_svg(graph: &RenderGraph, style: &StyleTable) -> String {
    let layout = graph.layout(style);
    let mut svg = String::new();

    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w:.0}\" height=\"{h:.0}\" viewBox=\"0 0 {w:.0} {h:.0}\">\n",
        w = layout.width.ceil(),
        h = layout.height.ceil()
    ));
    svg.push_str("<defs>\n");
    for role in [EdgeRole::Edge, EdgeRole::ConditionalEdge] {
        write_marker(&mut svg, role, style.edge_style(role));
    }
    svg.push_str("</defs>\n");
    svg.push_str(&format!(
        "<rect width=\"100%\" height=\"100%\" fill=\"{}\"/>\n",
        escape_xml(&style.graph.background)
    ));

    svg.push_str("<g class=\"edges\">\n");
    for (index, (edge, route)) in graph.edges.iter().zip(&layout.edges).enumerate() {
        write_edge(&mut svg, index, edge.role, route, style.edge_style(edge.role));
    }
    svg.push_str("</g>\n");

    svg.push_str("<g class=\"nodes\">\n");
    for (node, node_box) in graph.nodes.iter().zip(&layout.nodes) {
        let node_style = style.node_style(node.role);
        svg.push_str(&format!(
            "<g class=\"node {}\" data-id=\"{}\">\n",
            role_class(node.role),
            escape_xml(&node.id)
        ));
        write_shape(&mut svg, node_box, node_style);
        let center = node_box.center();
        svg.push_str(&format!(
            "<text x=\"{:.1}\" y=\"{:.1}\" text-anchor=\"middle\" dominant-baseline=\"central\" font-family=\"{}\" font-size=\"{}\" fill=\"{}\">{}</text>\n",
            center.x,
            center.y,
            escape_xml(&node_style.font_name),
            node_style.font_size,
            escape_xml(&node_style.font_color),
            escape_xml(&node.id)
        ));
        svg.push_str("</g>\n");
    }
    svg.push_str("</g>\n</svg>\n");
    svg
}

fn role_class(role: NodeRole) -> &'static str {
    match role {
        NodeRole::Start => "start",
        NodeRole::End => "end",
        NodeRole::Node => "node",
    }
}

fn edge_class(role: EdgeRole) -> &'static str {
    match role {
        EdgeRole::Edge => "edge",
        EdgeRole::ConditionalEdge => "conditional_edge",
    }
}

fn write_marker(svg: &mut String, role: EdgeRole, style: &EdgeStyle) {
    let size = 5.0 * style.arrow_size;
    svg.push_str(&format!(
        "<marker id=\"arrow-{}\" viewBox=\"0 0 10 10\" refX=\"9\" refY=\"5\" markerWidth=\"{size}\" markerHeight=\"{size}\" orient=\"auto\"><path d=\"M 0 0 L 10 5 L 0 10 z\" fill=\"{}\"/></marker>\n",
        edge_class(role),
        escape_xml(&style.stroke)
    ));
}

fn write_edge(svg: &mut String, index: usize, role: EdgeRole, route: &EdgeRoute, style: &EdgeStyle) {
    let dash = style
        .line
        .dash_array()
        .map(|d| format!(r#" stroke-dasharray="{d}""#))
        .unwrap_or_default();
    svg.push_str(&format!(
        "<path class=\"{class}\" data-index=\"{index}\" d=\"{d}\" fill=\"none\" stroke=\"{stroke}\" stroke-width=\"{width}\"{dash} marker-end=\"url(#arrow-{class})\"/>\n",
        class = edge_class(role),
        d = route.path_data(),
        stroke = escape_xml(&style.stroke),
        width = style.stroke_width,
    ));
}

fn write_shape(svg: &mut String, node_box: &crate::render::NodeBox, style: &NodeStyle) {
    let paint = format!(
        r#"fill="{}" stroke="{}" stroke-width="{}""#,
        escape_xml(&style.fill),
        escape_xml(&style.stroke),
        style.stroke_width
    );
    let shape = match style.shape {
        Shape::Rect => format!(
            "<rect x=\"{:.1}\" y=\"{:.1}\" width=\"{:.1}\" height=\"{:.1}\" rx=\"{r}\" ry=\"{r}\" {paint}/>\n",
            node_box.x,
            node_box.y,
            node_box.width,
            node_box.height,
            r = style.corner_radius,
        ),
        Shape::Ellipse => {
            let c = node_box.center();
            format!(
                "<ellipse cx=\"{:.1}\" cy=\"{:.1}\" rx=\"{:.1}\" ry=\"{:.1}\" {paint}/>\n",
                c.x,
                c.y,
                node_box.width / 2.0,
                node_box.height / 2.0,
            )
        }
    };
    svg.push_str(&shape);
}

pub(crate) fn escape_xml(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::StateGraph;

    fn conditional_graph() -> RenderGraph {
        let mut g = StateGraph::new();
        g.add_edge("check", "indoor", true);
        g.add_edge("check", "outdoor", true);
        g.add_edge("indoor", "done", false);
        g.add_edge("outdoor", "done", false);
        RenderGraph::from_graph(&g)
    }

    /// **Scenario**: only conditional edges carry a dash pattern in the SVG.
    #[test]
    fn svg_dashes_conditional_edges_only() {
        let d = StyledDiagram::new(&conditional_graph(), &StyleTable::default());
        let paths: Vec<&str> = d
            .svg()
            .lines()
            .filter(|l| l.starts_with("<path class="))
            .collect();
        assert_eq!(paths.len(), 6);
        for line in paths {
            let dashed = line.contains("stroke-dasharray=\"6 4\"");
            let conditional = line.starts_with("<path class=\"conditional_edge\"");
            assert_eq!(dashed, conditional, "line: {}", line);
        }
    }

    /// **Scenario**: every render node appears once with its role class.
    #[test]
    fn svg_contains_one_group_per_node() {
        let d = StyledDiagram::new(&conditional_graph(), &StyleTable::default());
        let svg = d.svg();
        assert_eq!(svg.matches("<g class=\"node ").count(), 6);
        assert!(svg.contains(r#"<g class="node start" data-id="START">"#));
        assert!(svg.contains(r#"<g class="node end" data-id="END">"#));
        assert!(svg.contains(r#"data-id="outdoor""#));
    }

    /// **Scenario**: node labels are XML-escaped.
    #[test]
    fn svg_escapes_labels() {
        let mut g = StateGraph::new();
        g.add_node("a<b>&\"c\"");
        let d = StyledDiagram::new(&RenderGraph::from_graph(&g), &StyleTable::default());
        assert!(d.svg().contains("a&lt;b&gt;&amp;&quot;c&quot;"));
        assert!(!d.svg().contains("a<b>"));
    }

    /// **Scenario**: rasterising produces a PNG byte stream.
    #[test]
    fn png_has_signature() {
        let d = StyledDiagram::new(&conditional_graph(), &StyleTable::default());
        let bytes = d.png(1.0).unwrap();
        assert!(bytes.starts_with(&[0x89, b'P', b'N', b'G']));
    }

    /// **Scenario**: a non-positive scale is rejected.
    #[test]
    fn png_rejects_zero_scale() {
        let d = StyledDiagram::new(&conditional_graph(), &StyleTable::default());
        match d.png(0.0) {
            Err(VizError::Raster(msg)) => assert!(msg.contains("scale")),
            other => panic!("expected Raster error, got {:?}", other.map(|b| b.len())),
        }
    }
}
