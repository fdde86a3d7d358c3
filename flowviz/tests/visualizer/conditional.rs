//! Conditional edges: dashed in both the markup and the SVG backend, never anything else.

use flowviz::{EdgeRole, RenderGraph, StyleTable, StyledDiagram};

use crate::common::{conditional_workflow, connections, link_styles, visualizer_in};

#[test]
fn markup_dashes_exactly_the_conditional_edges() {
    let dir = tempfile::tempdir().unwrap();
    let graph = conditional_workflow();
    let out = visualizer_in(dir.path(), "Conditional", &graph)
        .render_all()
        .unwrap();
    let markup = std::fs::read_to_string(&out.mermaid).unwrap();

    let conns = connections(&markup);
    let styles = link_styles(&markup);
    assert_eq!(conns.len(), styles.len());
    for (i, (conn, style)) in conns.iter().zip(&styles).enumerate() {
        assert!(style.starts_with(&format!("linkStyle {} ", i)));
        let conditional = *conn == "n_check_weather --> n_plan_indoor"
            || *conn == "n_check_weather --> n_plan_outdoor";
        assert_eq!(
            style.contains("stroke-dasharray"),
            conditional,
            "{} / {}",
            conn,
            style
        );
    }
}

#[test]
fn svg_dashes_exactly_the_conditional_edges() {
    let render = RenderGraph::from_graph(&conditional_workflow());
    let diagram = StyledDiagram::new(&render, &StyleTable::default());
    let paths: Vec<&str> = diagram
        .svg()
        .lines()
        .filter(|l| l.starts_with("<path class="))
        .collect();
    assert_eq!(paths.len(), render.edges.len());
    for (edge, line) in render.edges.iter().zip(paths) {
        let dashed = line.contains("stroke-dasharray");
        assert_eq!(dashed, edge.role == EdgeRole::ConditionalEdge, "{}", line);
    }
}

#[test]
fn duplicate_pair_shares_conditional_styling() {
    let mut g = flowviz::StateGraph::new();
    g.add_edge("a", "b", false);
    g.add_edge("a", "b", true);
    let render = RenderGraph::from_graph(&g);
    assert_eq!(render.edges[0].role, EdgeRole::ConditionalEdge);
    assert_eq!(render.edges[1].role, EdgeRole::ConditionalEdge);
}
