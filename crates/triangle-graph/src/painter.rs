use eframe::egui::{self, Align2, Color32, FontFamily, FontId, Pos2, Shape, Stroke};

use crate::draw::{ArrowHead, Color, DrawCommand, LineCap, Point, Scene};

/// Arrowhead corners in panel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArrowGeometry {
    pub tip: Point,
    /// Where the shaft stops
    pub neck: Point,
    pub wings: [Point; 2],
}

/// Places `head` at `to`, pointing away from `from`.
///
/// Returns `None` for a zero-length line since it has no direction.
pub fn arrow_geometry(from: Point, to: Point, head: &ArrowHead) -> Option<ArrowGeometry> {
    let length = from.distance(to);
    if length == 0.0 {
        return None;
    }
    let (ux, uy) = ((to.x - from.x) / length, (to.y - from.y) / length);
    let back = |d: f64| Point::new(to.x - ux * d, to.y - uy * d);

    let base = back(head.length);
    let (px, py) = (-uy * head.half_width, ux * head.half_width);
    Some(ArrowGeometry {
        tip: to,
        neck: back(head.neck),
        wings: [
            Point::new(base.x + px, base.y + py),
            Point::new(base.x - px, base.y - py),
        ],
    })
}

fn color32(c: Color) -> Color32 {
    Color32::from_rgb(c.r, c.g, c.b)
}

fn pos(origin: Pos2, p: Point) -> Pos2 {
    Pos2::new(origin.x + p.x as f32, origin.y + p.y as f32)
}

/// Paints every command of `scene`, in order, with panel-space `(0, 0)` at
/// `origin`.
pub fn paint_scene(painter: &egui::Painter, scene: &Scene, origin: Pos2) {
    for command in scene.commands() {
        paint_command(painter, command, origin);
    }
}

fn paint_command(painter: &egui::Painter, command: &DrawCommand, origin: Pos2) {
    match command {
        DrawCommand::Circle {
            center,
            radius,
            fill,
            outline,
            outline_width,
        } => {
            painter.circle(
                pos(origin, *center),
                *radius as f32,
                color32(*fill),
                Stroke::new(*outline_width as f32, color32(*outline)),
            );
        }
        DrawCommand::Text {
            position,
            text,
            size,
            color,
        } => {
            painter.text(
                pos(origin, *position),
                Align2::CENTER_CENTER,
                text,
                FontId::new(*size as f32, FontFamily::Proportional),
                color32(*color),
            );
        }
        DrawCommand::Line {
            from,
            to,
            width,
            color,
            arrow,
            cap,
        } => {
            let color = color32(*color);
            let stroke = Stroke::new(*width as f32, color);
            let head = arrow.as_ref().and_then(|h| arrow_geometry(*from, *to, h));
            let shaft_end = head.map_or(*to, |g| g.neck);

            painter.line_segment([pos(origin, *from), pos(origin, shaft_end)], stroke);
            // egui strokes have butt ends; round caps are end discs
            if *cap == LineCap::Round {
                let r = *width as f32 / 2.0;
                painter.circle_filled(pos(origin, *from), r, color);
                painter.circle_filled(pos(origin, shaft_end), r, color);
            }
            if let Some(g) = head {
                // the head outline is concave, so paint it as two triangles
                for wing in g.wings {
                    painter.add(Shape::convex_polygon(
                        vec![pos(origin, g.tip), pos(origin, wing), pos(origin, g.neck)],
                        color,
                        Stroke::NONE,
                    ));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_arrow_along_x_axis() {
        let g = arrow_geometry(
            Point::new(0.0, 0.0),
            Point::new(100.0, 0.0),
            &ArrowHead::default(),
        )
        .unwrap();
        assert_eq!(g.tip, Point::new(100.0, 0.0));
        assert!((g.neck.x - 88.0).abs() < EPS);
        assert!((g.wings[0].x - 86.0).abs() < EPS);
        assert!((g.wings[0].y - 6.0).abs() < EPS);
        assert!((g.wings[1].y + 6.0).abs() < EPS);
    }

    #[test]
    fn test_zero_length_line_has_no_arrow() {
        let p = Point::new(5.0, 5.0);
        assert_eq!(arrow_geometry(p, p, &ArrowHead::default()), None);
    }

    #[test]
    fn test_wings_symmetric_about_shaft() {
        let from = Point::new(10.0, 10.0);
        let to = Point::new(40.0, 50.0);
        let g = arrow_geometry(from, to, &ArrowHead::default()).unwrap();
        let [a, b] = g.wings;
        assert!((a.distance(to) - b.distance(to)).abs() < EPS);
        let mid = a.lerp(b, 0.5);
        assert!((mid.distance(to) - 14.0).abs() < EPS);
    }
}
