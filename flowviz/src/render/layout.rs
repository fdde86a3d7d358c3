//! Layered top-to-bottom layout for the SVG backend.
//!
//! Ranks are longest-path distances after dropping depth-first back edges, so
//! cyclic workflows still get a finite layering. START sits on the first rank and
//! END on the last. Nodes within a rank keep render order and are centred.

use std::collections::{HashSet, VecDeque};

use crate::graph::traversal::Adjacency;
use crate::style::{NodeRole, StyleTable};

use super::RenderGraph;

const PX_PER_INCH: f32 = 72.0;
const MARGIN: f32 = 24.0;
const NODE_HEIGHT: f32 = 36.0;
const MIN_NODE_WIDTH: f32 = 80.0;
const LABEL_PADDING: f32 = 32.0;
/// Average glyph width as a fraction of font size.
const GLYPH_WIDTH: f32 = 0.6;
const LOOP_SIZE: f32 = 24.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

/// Placed node; `x`/`y` is the top-left corner.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeBox {
    pub rank: usize,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl NodeBox {
    fn top(&self) -> Point {
        Point {
            x: self.x + self.width / 2.0,
            y: self.y,
        }
    }

    fn bottom(&self) -> Point {
        Point {
            x: self.x + self.width / 2.0,
            y: self.y + self.height,
        }
    }

    fn right(&self) -> Point {
        Point {
            x: self.x + self.width,
            y: self.y + self.height / 2.0,
        }
    }

    pub fn center(&self) -> Point {
        Point {
            x: self.x + self.width / 2.0,
            y: self.y + self.height / 2.0,
        }
    }
}

/// Geometry of one edge; forward edges are straight, everything else curves to the right.
#[derive(Debug, Clone, PartialEq)]
pub enum EdgeRoute {
    Line { from: Point, to: Point },
    Curve { from: Point, c1: Point, c2: Point, to: Point },
}

impl EdgeRoute {
    /// SVG path data.
    pub fn path_data(&self) -> String {
        match self {
            EdgeRoute::Line { from, to } => {
                format!("M {:.1} {:.1} L {:.1} {:.1}", from.x, from.y, to.x, to.y)
            }
            EdgeRoute::Curve { from, c1, c2, to } => format!(
                "M {:.1} {:.1} C {:.1} {:.1} {:.1} {:.1} {:.1} {:.1}",
                from.x, from.y, c1.x, c1.y, c2.x, c2.y, to.x, to.y
            ),
        }
    }
}

/// Node boxes (indexed like `RenderGraph::nodes`), edge routes (indexed like
/// `RenderGraph::edges`) and canvas size.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    pub nodes: Vec<NodeBox>,
    pub edges: Vec<EdgeRoute>,
    pub width: f32,
    pub height: f32,
}

pub(super) fn compute(graph: &RenderGraph, style: &StyleTable) -> Layout {
    let ids = graph.node_ids();
    let ranks = assign_ranks(graph, &ids);
    let rank_count = ranks.iter().copied().max().map_or(0, |r| r + 1);

    let node_sep = style.graph.node_sep * PX_PER_INCH;
    let rank_sep = style.graph.rank_sep * PX_PER_INCH;

    let widths: Vec<f32> = graph
        .nodes
        .iter()
        .map(|n| {
            let font_size = style.node_style(n.role).font_size;
            let label = n.id.chars().count() as f32 * font_size * GLYPH_WIDTH + LABEL_PADDING;
            label.max(MIN_NODE_WIDTH)
        })
        .collect();

    let mut rows: Vec<Vec<usize>> = vec![Vec::new(); rank_count];
    for (i, &r) in ranks.iter().enumerate() {
        rows[r].push(i);
    }
    let row_width = |row: &[usize]| -> f32 {
        let boxes: f32 = row.iter().map(|&i| widths[i]).sum();
        boxes + node_sep * row.len().saturating_sub(1) as f32
    };
    let content_width = rows.iter().map(|r| row_width(r)).fold(0.0f32, f32::max);
    let width = content_width + 2.0 * MARGIN + LOOP_SIZE;

    let mut boxes = vec![
        NodeBox {
            rank: 0,
            x: 0.0,
            y: 0.0,
            width: 0.0,
            height: NODE_HEIGHT,
        };
        graph.nodes.len()
    ];
    for (rank, row) in rows.iter().enumerate() {
        let y = MARGIN + rank as f32 * (NODE_HEIGHT + rank_sep);
        let mut x = MARGIN + (content_width - row_width(row)) / 2.0;
        for &i in row {
            boxes[i] = NodeBox {
                rank,
                x,
                y,
                width: widths[i],
                height: NODE_HEIGHT,
            };
            x += widths[i] + node_sep;
        }
    }
    let height = 2.0 * MARGIN
        + rank_count as f32 * NODE_HEIGHT
        + rank_count.saturating_sub(1) as f32 * rank_sep;

    let index_of = |id: &str| ids.iter().position(|n| n == id);
    let edges = graph
        .edges
        .iter()
        .filter_map(|e| Some((index_of(&e.from)?, index_of(&e.to)?)))
        .map(|(u, v)| route(&boxes[u], &boxes[v], u == v))
        .collect();

    Layout {
        nodes: boxes,
        edges,
        width,
        height,
    }
}

/// Longest-path rank per node, ignoring back edges. END is pushed below everything else.
fn assign_ranks(graph: &RenderGraph, ids: &[String]) -> Vec<usize> {
    let pairs: Vec<(&str, &str)> = graph
        .edges
        .iter()
        .map(|e| (e.from.as_str(), e.to.as_str()))
        .collect();
    let back: HashSet<usize> = Adjacency::new(ids, pairs.iter().copied())
        .back_edges(false)
        .into_iter()
        .collect();
    let forward = Adjacency::new(
        ids,
        pairs
            .iter()
            .enumerate()
            .filter(|(i, _)| !back.contains(i))
            .map(|(_, &p)| p),
    );

    let n = forward.len();
    let mut indegree = forward.in_degrees();
    let mut rank = vec![0usize; n];
    let mut queue: VecDeque<usize> = (0..n).filter(|&i| indegree[i] == 0).collect();
    while let Some(u) = queue.pop_front() {
        for v in forward.successors(u) {
            rank[v] = rank[v].max(rank[u] + 1);
            indegree[v] -= 1;
            if indegree[v] == 0 {
                queue.push_back(v);
            }
        }
    }

    let end = graph.nodes.iter().position(|n| n.role == NodeRole::End);
    if let Some(end) = end {
        let deepest = rank
            .iter()
            .enumerate()
            .filter(|&(i, _)| i != end)
            .map(|(_, &r)| r)
            .max()
            .unwrap_or(0);
        rank[end] = deepest + 1;
    }
    rank
}

fn route(from: &NodeBox, to: &NodeBox, self_loop: bool) -> EdgeRoute {
    if self_loop {
        let start = from.right();
        let out = start.x + LOOP_SIZE;
        return EdgeRoute::Curve {
            from: Point {
                x: start.x,
                y: start.y - from.height / 4.0,
            },
            c1: Point {
                x: out,
                y: from.y - LOOP_SIZE / 2.0,
            },
            c2: Point {
                x: out,
                y: from.y + from.height + LOOP_SIZE / 2.0,
            },
            to: Point {
                x: start.x,
                y: start.y + from.height / 4.0,
            },
        };
    }
    if to.rank > from.rank {
        return EdgeRoute::Line {
            from: from.bottom(),
            to: to.top(),
        };
    }
    let (a, b) = (from.right(), to.right());
    let bulge = a.x.max(b.x) + LOOP_SIZE;
    EdgeRoute::Curve {
        from: a,
        c1: Point { x: bulge, y: a.y },
        c2: Point { x: bulge, y: b.y },
        to: b,
    }
}
