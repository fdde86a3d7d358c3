//! Loading a JSON workflow description from disk and rendering it.

use flowviz::{Visualizer, WorkflowSpec};

use crate::common::connections;

#[test]
fn workflow_file_renders_like_the_built_graph() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sample_workflow.json");
    std::fs::write(
        &path,
        r#"{
            "name": "Sample",
            "nodes": ["n1", "n2", "n3"],
            "edges": [["n1", "n2"], {"from": "n2", "to": "n3", "conditional": true}]
        }"#,
    )
    .unwrap();

    let spec = WorkflowSpec::from_path(&path).unwrap();
    let viz = Visualizer::from_graph(&spec.name, &spec.to_graph()).with_config(
        flowviz::ExportConfig {
            output_dir: dir.path().join("outputs"),
            png_scale: 1.0,
        },
    );
    let out = viz.render_all().unwrap();
    assert_eq!(out.mermaid, dir.path().join("outputs/Sample.mmd"));

    let markup = std::fs::read_to_string(&out.mermaid).unwrap();
    assert_eq!(connections(&markup).len(), 4);
    assert!(markup.contains("linkStyle 1 stroke:#7c3aed,stroke-width:2.5px,stroke-dasharray:6 4"));
    assert_eq!(viz.analyze().longest_path, 2);
}
