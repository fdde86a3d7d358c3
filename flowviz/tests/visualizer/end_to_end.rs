//! End-to-end scenarios: linear workflow, parallel workflow, cycles, empty graph.

use flowviz::{GraphSummary, StateGraph, Visualizer};

use crate::common::{
    connections, linear_workflow, link_styles, node_declarations, parallel_workflow,
    visualizer_in,
};

#[test]
fn linear_workflow_summary_and_markup() {
    let dir = tempfile::tempdir().unwrap();
    let viz = visualizer_in(dir.path(), "Linear", &linear_workflow());

    assert_eq!(
        viz.analyze(),
        GraphSummary {
            nodes: 3,
            edges: 2,
            has_cycles: false,
            dead_ends: vec!["n3".to_string()],
            longest_path: 2,
        }
    );

    let out = viz.render_all().unwrap();
    let markup = std::fs::read_to_string(&out.mermaid).unwrap();
    assert_eq!(node_declarations(&markup).len(), 5);
    let mut conns = connections(&markup);
    conns.sort_unstable();
    assert_eq!(
        conns,
        [
            "n_START --> n_n1",
            "n_n1 --> n_n2",
            "n_n2 --> n_n3",
            "n_n3 --> n_END"
        ]
    );
    assert_eq!(link_styles(&markup).len(), 4);
}

#[test]
fn linear_workflow_writes_every_artifact() {
    let dir = tempfile::tempdir().unwrap();
    let out = visualizer_in(dir.path(), "Linear", &linear_workflow())
        .render_all()
        .unwrap();

    let png = std::fs::read(&out.png).unwrap();
    assert!(png.starts_with(&[0x89, b'P', b'N', b'G']));
    let svg = std::fs::read_to_string(&out.svg).unwrap();
    assert!(svg.starts_with("<svg "));
    let html = std::fs::read_to_string(&out.html).unwrap();
    assert!(html.contains("mermaid@11"));
    assert!(html.contains("n_n1 --> n_n2"));
}

#[test]
fn rendering_again_overwrites_previous_artifacts() {
    let dir = tempfile::tempdir().unwrap();
    visualizer_in(dir.path(), "Same", &linear_workflow())
        .render_all()
        .unwrap();
    let out = visualizer_in(dir.path(), "Same", &parallel_workflow())
        .render_all()
        .unwrap();
    let markup = std::fs::read_to_string(&out.mermaid).unwrap();
    assert!(markup.contains("n_weather_search"));
    assert!(!markup.contains("n_n1"));
}

#[test]
fn parallel_workflow_has_single_root_and_sink() {
    let dir = tempfile::tempdir().unwrap();
    let viz = visualizer_in(dir.path(), "Parallel", &parallel_workflow());
    let summary = viz.analyze();
    assert_eq!(summary.longest_path, 2);
    assert_eq!(summary.dead_ends, vec!["final_response".to_string()]);

    let out = viz.render_all().unwrap();
    let markup = std::fs::read_to_string(&out.mermaid).unwrap();
    let conns = connections(&markup);
    assert_eq!(conns.len(), 6);
    assert_eq!(conns[4], "n_START --> n_extract_destination");
    assert_eq!(conns[5], "n_final_response --> n_END");
}

#[test]
fn self_loop_is_reported_as_cycle() {
    let mut g = StateGraph::new();
    g.add_edge("n1", "n1", false);
    assert!(Visualizer::from_graph("Loop", &g).analyze().has_cycles);
}

#[test]
fn cyclic_workflow_still_renders() {
    let dir = tempfile::tempdir().unwrap();
    let mut g = linear_workflow();
    g.add_edge("n3", "n1", false);
    let viz = visualizer_in(dir.path(), "Cyclic", &g);
    assert!(viz.analyze().has_cycles);
    let out = viz.render_all().unwrap();
    let markup = std::fs::read_to_string(&out.mermaid).unwrap();
    // No roots or sinks: START → first node and last node → END.
    assert!(markup.contains("    n_START --> n_n1"));
    assert!(markup.contains("    n_n3 --> n_END"));
}

#[test]
fn empty_workflow_renders_markers_only() {
    let dir = tempfile::tempdir().unwrap();
    let viz = visualizer_in(dir.path(), "Empty", &StateGraph::new());
    let summary = viz.analyze();
    assert_eq!(summary.nodes, 0);
    assert_eq!(summary.longest_path, 0);

    let out = viz.render_all().unwrap();
    let markup = std::fs::read_to_string(&out.mermaid).unwrap();
    assert_eq!(
        node_declarations(&markup),
        ["n_START([\"START\"]):::start", "n_END([\"END\"]):::endClass"]
    );
    assert!(connections(&markup).is_empty());
}

#[test]
fn unwritable_output_dir_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("file");
    std::fs::write(&blocker, "not a dir").unwrap();
    let result = visualizer_in(&blocker, "Linear", &linear_workflow()).render_all();
    assert!(matches!(result, Err(flowviz::VizError::CreateDir { .. })));
}

#[test]
fn workflow_name_cannot_leave_the_output_dir() {
    let dir = tempfile::tempdir().unwrap();
    let out_dir = dir.path().join("outputs");
    for name in ["../escaped", "team/flow"] {
        let result = visualizer_in(&out_dir, name, &linear_workflow()).render_all();
        assert!(
            matches!(&result, Err(flowviz::VizError::InvalidName(n)) if n == name),
            "{name}: {result:?}"
        );
    }
    assert!(!dir.path().join("escaped.html").exists());
    assert!(!dir.path().join("escaped.svg").exists());
    assert!(!out_dir.exists());
}
