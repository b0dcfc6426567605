use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::draw::Point;

pub const DEFAULT_PANEL_SIZE: f64 = 600.0;
pub const DEFAULT_RADIUS_FRACTION: f64 = 0.40;

/// Places nodes along the perimeter of an equilateral triangle centred in a
/// square panel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TriangleLayout {
    /// Side of the square panel
    pub panel_size: f64,
    /// Circumradius of the triangle as a fraction of the panel size
    pub radius_fraction: f64,
}

impl Default for TriangleLayout {
    fn default() -> Self {
        Self {
            panel_size: DEFAULT_PANEL_SIZE,
            radius_fraction: DEFAULT_RADIUS_FRACTION,
        }
    }
}

impl TriangleLayout {
    pub fn with_panel_size(mut self, size: f64) -> Self {
        self.panel_size = size;
        self
    }

    pub fn with_radius_fraction(mut self, fraction: f64) -> Self {
        self.radius_fraction = fraction;
        self
    }

    pub fn radius(&self) -> f64 {
        self.radius_fraction * self.panel_size
    }

    pub fn center(&self, offset_x: f64) -> Point {
        Point::new(offset_x + self.panel_size / 2.0, self.panel_size / 2.0)
    }

    /// Triangle corners: top first, then clockwise on screen.
    pub fn vertices(&self, offset_x: f64) -> [Point; 3] {
        let c = self.center(offset_x);
        let r = self.radius();
        std::array::from_fn(|k| {
            let angle = std::f64::consts::FRAC_PI_2
                + k as f64 * 2.0 * std::f64::consts::PI / 3.0;
            // screen y grows downward
            Point::new(c.x + r * angle.cos(), c.y - r * angle.sin())
        })
    }

    /// Points each edge receives: `count / 3`, plus one on the first
    /// `count % 3` edges.
    pub fn points_per_edge(count: usize) -> [usize; 3] {
        let (base, extra) = (count / 3, count % 3);
        std::array::from_fn(|k| base + usize::from(k < extra))
    }

    /// `count` positions in perimeter order starting at the top corner.
    ///
    /// Edge `k` runs from corner `k` to corner `k + 1` and contains its start
    /// corner but never its end corner.
    pub fn positions(&self, count: usize, offset_x: f64) -> Vec<Point> {
        let verts = self.vertices(offset_x);
        let per_edge = Self::points_per_edge(count);

        let mut points = Vec::with_capacity(count);
        for (k, &n) in per_edge.iter().enumerate() {
            points.extend(points_on_edge(verts[k], verts[(k + 1) % 3], n));
        }
        points.truncate(count);

        debug!(count, offset_x, ?per_edge, "triangle layout");
        points
    }
}

fn points_on_edge(start: Point, end: Point, n: usize) -> impl Iterator<Item = Point> {
    (0..n).map(move |i| start.lerp(end, i as f64 / n as f64))
}

/// Triangle layout with the default panel geometry.
pub fn node_positions_triangle(count: usize, offset_x: f64) -> Vec<Point> {
    TriangleLayout::default().positions(count, offset_x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const EPS: f64 = 1e-9;

    fn cross(a: Point, b: Point, p: Point) -> f64 {
        (b.x - a.x) * (p.y - a.y) - (b.y - a.y) * (p.x - a.x)
    }

    #[test]
    fn test_ten_nodes_start_at_top_vertex() {
        let layout = TriangleLayout::default();
        let points = node_positions_triangle(10, 0.0);
        assert_eq!(points.len(), 10);
        assert_eq!(points[0], layout.vertices(0.0)[0]);
    }

    #[test]
    fn test_vertices_geometry() {
        let [top, lower_left, lower_right] =
            TriangleLayout::default().vertices(0.0);
        assert!((top.x - 300.0).abs() < EPS);
        assert!((top.y - 60.0).abs() < EPS);
        assert!(lower_left.x < 300.0 && lower_left.y > 300.0);
        assert!(lower_right.x > 300.0 && lower_right.y > 300.0);
        assert!((lower_left.y - lower_right.y).abs() < EPS);
        let side = top.distance(lower_left);
        assert!((side - lower_left.distance(lower_right)).abs() < EPS);
        assert!((side - 240.0 * 3f64.sqrt()).abs() < EPS);
    }

    #[test]
    fn test_points_per_edge_distribution() {
        assert_eq!(TriangleLayout::points_per_edge(10), [4, 3, 3]);
        assert_eq!(TriangleLayout::points_per_edge(11), [4, 4, 3]);
        assert_eq!(TriangleLayout::points_per_edge(2), [1, 1, 0]);
        assert_eq!(TriangleLayout::points_per_edge(0), [0, 0, 0]);
    }

    #[test]
    fn test_small_counts() {
        let verts = TriangleLayout::default().vertices(0.0);
        assert!(node_positions_triangle(0, 0.0).is_empty());
        assert_eq!(node_positions_triangle(1, 0.0), vec![verts[0]]);
        assert_eq!(node_positions_triangle(2, 0.0), vec![verts[0], verts[1]]);
        assert_eq!(node_positions_triangle(3, 0.0), verts.to_vec());
    }

    #[test]
    fn test_offset_shifts_only_x() {
        let a = node_positions_triangle(7, 0.0);
        let b = node_positions_triangle(7, 640.0);
        for (p, q) in a.iter().zip(&b) {
            assert!((q.x - p.x - 640.0).abs() < EPS);
            assert_eq!(p.y, q.y);
        }
    }

    #[test]
    fn test_edge_points_are_collinear_and_monotone() {
        let layout = TriangleLayout::default();
        let verts = layout.vertices(0.0);
        let points = layout.positions(13, 0.0);
        let per_edge = TriangleLayout::points_per_edge(13);

        let mut start = 0;
        for (k, &n) in per_edge.iter().enumerate() {
            let (a, b) = (verts[k], verts[(k + 1) % 3]);
            let edge = &points[start..start + n];
            let mut last = -1.0;
            for p in edge {
                assert!(cross(a, b, *p).abs() < 1e-6);
                let travelled = a.distance(*p);
                assert!(travelled > last);
                assert!(travelled < a.distance(b));
                last = travelled;
            }
            start += n;
        }
    }

    proptest! {
        #[test]
        fn prop_layout_returns_exact_count(count in 0usize..200, offset in 0.0f64..2000.0) {
            prop_assert_eq!(node_positions_triangle(count, offset).len(), count);
        }
    }
}
