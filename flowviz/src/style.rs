//! Visual attributes per diagram element role.
//!
//! One [`StyleTable`] is consulted by both the SVG backend and the Mermaid
//! generator, so the two outputs cannot drift apart. The process-wide table is
//! initialised once by [`StyleTable::global`] and never mutated afterwards.

use std::sync::OnceLock;

/// Role of a node in the rendered diagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeRole {
    Start,
    End,
    Node,
}

/// Role of an edge in the rendered diagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeRole {
    Edge,
    ConditionalEdge,
}

impl EdgeRole {
    pub fn for_conditional(conditional: bool) -> Self {
        if conditional {
            EdgeRole::ConditionalEdge
        } else {
            EdgeRole::Edge
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Rect,
    Ellipse,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    Solid,
    Dashed,
}

impl LineStyle {
    /// Dash pattern shared by SVG `stroke-dasharray` and Mermaid `linkStyle`.
    pub fn dash_array(self) -> Option<&'static str> {
        match self {
            LineStyle::Solid => None,
            LineStyle::Dashed => Some("6 4"),
        }
    }
}

/// Rank direction of the layered layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankDir {
    TopBottom,
}

impl RankDir {
    /// Mermaid flowchart direction keyword.
    pub fn mermaid(self) -> &'static str {
        match self {
            RankDir::TopBottom => "TD",
        }
    }
}

/// Box style for START, END and workflow nodes.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeStyle {
    pub shape: Shape,
    /// Corner radius in px; 0 draws square corners.
    pub corner_radius: f32,
    pub fill: String,
    pub stroke: String,
    pub stroke_width: f32,
    pub font_color: String,
    pub font_name: String,
    pub font_size: f32,
}

/// Line style for model and synthesized edges.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeStyle {
    pub stroke: String,
    pub stroke_width: f32,
    pub line: LineStyle,
    pub arrow_size: f32,
}

/// Diagram-wide layout attributes. Separations are in inches, as Graphviz uses them.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphStyle {
    pub rank_dir: RankDir,
    pub node_sep: f32,
    pub rank_sep: f32,
    pub background: String,
}

/// Style per element role.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleTable {
    pub graph: GraphStyle,
    pub start: NodeStyle,
    pub end: NodeStyle,
    pub node: NodeStyle,
    /// Emitted as a Mermaid class; no node is assigned to it by the renderer.
    pub highlight: NodeStyle,
    pub edge: EdgeStyle,
    pub conditional_edge: EdgeStyle,
}

impl StyleTable {
    /// Process-wide table, built on first use.
    pub fn global() -> &'static StyleTable {
        static STYLE: OnceLock<StyleTable> = OnceLock::new();
        STYLE.get_or_init(StyleTable::default)
    }

    pub fn node_style(&self, role: NodeRole) -> &NodeStyle {
        match role {
            NodeRole::Start => &self.start,
            NodeRole::End => &self.end,
            NodeRole::Node => &self.node,
        }
    }

    pub fn edge_style(&self, role: EdgeRole) -> &EdgeStyle {
        match role {
            EdgeRole::Edge => &self.edge,
            EdgeRole::ConditionalEdge => &self.conditional_edge,
        }
    }
}

impl Default for StyleTable {
    fn default() -> Self {
        let marker = NodeStyle {
            shape: Shape::Rect,
            corner_radius: 12.0,
            fill: "#EDE9FE".into(),
            stroke: "#8B5CF6".into(),
            stroke_width: 2.0,
            font_color: "#1F2937".into(),
            font_name: "Inter".into(),
            font_size: 12.0,
        };
        let node = NodeStyle {
            stroke: "#A78BFA".into(),
            font_size: 11.0,
            ..marker.clone()
        };
        let highlight = NodeStyle {
            stroke: "#6D28D9".into(),
            ..node.clone()
        };
        let edge = EdgeStyle {
            stroke: "#7C3AED".into(),
            stroke_width: 2.5,
            line: LineStyle::Solid,
            arrow_size: 0.8,
        };
        let conditional_edge = EdgeStyle {
            line: LineStyle::Dashed,
            ..edge.clone()
        };
        Self {
            graph: GraphStyle {
                rank_dir: RankDir::TopBottom,
                node_sep: 0.6,
                rank_sep: 0.7,
                background: "white".into(),
            },
            start: marker.clone(),
            end: marker,
            node,
            highlight,
            edge,
            conditional_edge,
        }
    }
}
