use adjacency::{AdjacencyMatrix, MatrixError};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;

use crate::draw::{ArrowHead, Color, LineCap, Point, Surface};
use crate::layout_triangle::DEFAULT_PANEL_SIZE;

/// Node appearance: filled circle plus a centred index label.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NodeStyle {
    pub radius: f64,
    pub fill: Color,
    pub outline: Color,
    pub outline_width: f64,
    pub label_size: f64,
    pub label_color: Color,
}

impl Default for NodeStyle {
    fn default() -> Self {
        Self {
            radius: 22.0,
            fill: Color::GREEN,
            outline: Color::BLACK,
            outline_width: 2.0,
            label_size: 12.0,
            label_color: Color::BLACK,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EdgeStyle {
    pub width: f64,
    pub color: Color,
    /// End-point clearance for directed edges, in node radii
    pub arrow_clearance: f64,
    pub arrow: ArrowHead,
    pub cap: LineCap,
}

impl Default for EdgeStyle {
    fn default() -> Self {
        Self {
            width: 3.0,
            color: Color::BLACK,
            arrow_clearance: 1.25,
            arrow: ArrowHead::default(),
            cap: LineCap::Round,
        }
    }
}

/// What a single `draw_graph` call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RenderStats {
    pub edges_drawn: usize,
    /// Reverse-direction cells skipped in undirected mode
    pub duplicates_skipped: usize,
    /// Diagonal cells set to 1; these are not drawn
    pub self_loops: usize,
    pub nodes_drawn: usize,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    #[error(transparent)]
    Matrix(#[from] MatrixError),
    #[error("{positions} positions for a graph with {nodes} nodes")]
    PositionCount { positions: usize, nodes: usize },
}

/// Draws one graph panel onto a [`Surface`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GraphRenderer {
    pub node: NodeStyle,
    pub edge: EdgeStyle,
    pub panel_size: f64,
    /// Caption baseline distance above the panel's bottom
    pub caption_offset: f64,
    pub caption_size: f64,
}

impl Default for GraphRenderer {
    fn default() -> Self {
        Self {
            node: NodeStyle::default(),
            edge: EdgeStyle::default(),
            panel_size: DEFAULT_PANEL_SIZE,
            caption_offset: 15.0,
            caption_size: 17.0,
        }
    }
}

impl GraphRenderer {
    /// Moves `p` toward `q` by `distance`. Coincident points return `p`.
    pub fn shift(p: Point, q: Point, distance: f64) -> Point {
        let length = p.distance(q);
        if length == 0.0 {
            return p;
        }
        p.lerp(q, distance / length)
    }

    pub fn draw_node(&self, surface: &mut impl Surface, center: Point, label: &str) {
        let style = &self.node;
        surface.circle(
            center,
            style.radius,
            style.fill,
            style.outline,
            style.outline_width,
        );
        surface.text(center, label, style.label_size, style.label_color);
    }

    /// Edge between two node centres, clipped to the node circles.
    pub fn draw_edge(&self, surface: &mut impl Surface, from: Point, to: Point, directed: bool) {
        let radius = self.node.radius;
        let end_clearance = if directed {
            radius * self.edge.arrow_clearance
        } else {
            radius
        };
        let start = Self::shift(from, to, radius);
        let end = Self::shift(to, from, end_clearance);
        surface.line(
            start,
            end,
            self.edge.width,
            self.edge.color,
            directed.then_some(self.edge.arrow),
            self.edge.cap,
        );
    }

    /// Renders edges, then nodes, then the caption for one panel.
    ///
    /// Nothing is drawn if the matrix is not square or the positions do not
    /// match it.
    pub fn draw_graph(
        &self,
        surface: &mut impl Surface,
        positions: &[Point],
        matrix: &AdjacencyMatrix,
        offset_x: f64,
        directed: bool,
    ) -> Result<RenderStats, RenderError> {
        matrix.ensure_square()?;
        if positions.len() != matrix.size() {
            return Err(RenderError::PositionCount {
                positions: positions.len(),
                nodes: matrix.size(),
            });
        }

        let mut stats = RenderStats::default();
        let mut drawn: HashSet<(usize, usize)> = HashSet::new();

        for (i, j) in matrix.edges() {
            if i == j {
                stats.self_loops += 1;
                continue;
            }
            if directed {
                if drawn.insert((i, j)) {
                    self.draw_edge(surface, positions[i], positions[j], true);
                    stats.edges_drawn += 1;
                }
            } else {
                if drawn.contains(&(j, i)) || drawn.contains(&(i, j)) {
                    stats.duplicates_skipped += 1;
                    continue;
                }
                self.draw_edge(surface, positions[i], positions[j], false);
                drawn.insert((i, j));
                stats.edges_drawn += 1;
            }
        }

        for (idx, &center) in positions.iter().enumerate() {
            self.draw_node(surface, center, &(idx + 1).to_string());
        }
        stats.nodes_drawn = positions.len();

        let caption = if directed { "Directed" } else { "Undirected" };
        surface.text(
            Point::new(
                offset_x + self.panel_size / 2.0,
                self.panel_size - self.caption_offset,
            ),
            caption,
            self.caption_size,
            Color::BLACK,
        );

        debug!(caption, offset_x, ?stats, "panel rendered");
        Ok(stats)
    }
}

/// Renders one panel with the default styles.
pub fn draw_graph(
    surface: &mut impl Surface,
    positions: &[Point],
    matrix: &AdjacencyMatrix,
    offset_x: f64,
    directed: bool,
) -> Result<RenderStats, RenderError> {
    GraphRenderer::default().draw_graph(surface, positions, matrix, offset_x, directed)
}

/// Writes the matrix as a grid of centred digits whose top-left cell corner
/// sits at `origin`.
pub fn draw_matrix_grid(
    surface: &mut impl Surface,
    matrix: &AdjacencyMatrix,
    origin: Point,
    cell: f64,
    font_size: f64,
) {
    for (i, row) in matrix.to_rows().iter().enumerate() {
        for (j, value) in row.iter().enumerate() {
            let center = Point::new(
                origin.x + (j as f64 + 0.5) * cell,
                origin.y + (i as f64 + 0.5) * cell,
            );
            surface.text(center, &value.to_string(), font_size, Color::BLACK);
        }
    }
}
