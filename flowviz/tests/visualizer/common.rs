//! Shared workflow builders and output helpers.

use std::path::Path;

use flowviz::{ExportConfig, StateGraph, Visualizer};

pub fn linear_workflow() -> StateGraph {
    let mut g = StateGraph::new();
    g.add_node("n1").add_node("n2").add_node("n3");
    g.add_edge("n1", "n2", false);
    g.add_edge("n2", "n3", false);
    g
}

pub fn parallel_workflow() -> StateGraph {
    let mut g = StateGraph::new();
    g.add_node("extract_destination")
        .add_node("weather_search")
        .add_node("attractions_search")
        .add_node("final_response");
    g.add_edge("extract_destination", "weather_search", false);
    g.add_edge("extract_destination", "attractions_search", false);
    g.add_edge("weather_search", "final_response", false);
    g.add_edge("attractions_search", "final_response", false);
    g
}

pub fn conditional_workflow() -> StateGraph {
    let mut g = StateGraph::new();
    g.add_node("extract_destination")
        .add_node("check_weather")
        .add_node("plan_indoor")
        .add_node("plan_outdoor")
        .add_node("final_response");
    g.add_edge("extract_destination", "check_weather", false);
    g.add_conditional_edge("check_weather", "plan_indoor");
    g.add_conditional_edge("check_weather", "plan_outdoor");
    g.add_edge("plan_indoor", "final_response", false);
    g.add_edge("plan_outdoor", "final_response", false);
    g
}

pub fn visualizer_in(dir: &Path, name: &str, graph: &StateGraph) -> Visualizer {
    Visualizer::from_graph(name, graph).with_config(ExportConfig {
        output_dir: dir.to_path_buf(),
        png_scale: 1.0,
    })
}

pub fn node_declarations(markup: &str) -> Vec<&str> {
    markup.lines().filter(|l| l.contains("([\"")).collect()
}

pub fn connections(markup: &str) -> Vec<&str> {
    markup
        .lines()
        .filter(|l| l.contains(" --> "))
        .map(str::trim)
        .collect()
}

pub fn link_styles(markup: &str) -> Vec<&str> {
    markup
        .lines()
        .filter(|l| l.starts_with("linkStyle "))
        .collect()
}
