//! Draw commands produced by the renderer.
//!
//! Geometry and graph logic only ever append to a [`Surface`]; turning the
//! commands into pixels is left to a back end such as [`crate::painter`].

use serde::{Deserialize, Serialize};

/// Panel-space position. Screen convention: y grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(self, other: Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Point at fraction `t` of the way from `self` to `other`.
    pub fn lerp(self, other: Point, t: f64) -> Point {
        Point::new(
            self.x + (other.x - self.x) * t,
            self.y + (other.y - self.y) * t,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const GREEN: Color = Color::rgb(0, 128, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Line cap style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineCap {
    /// Flat cap at endpoint
    Butt,
    /// Rounded cap
    Round,
}

/// Arrowhead drawn at the end point of a line.
///
/// `neck` is the distance from the tip back to where the shaft meets the
/// head, `length` the distance from the tip to the trailing corners, and
/// `half_width` how far each corner sits from the shaft.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArrowHead {
    pub neck: f64,
    pub length: f64,
    pub half_width: f64,
}

impl Default for ArrowHead {
    fn default() -> Self {
        Self {
            neck: 12.0,
            length: 14.0,
            half_width: 6.0,
        }
    }
}

/// A single primitive, in the order it must be painted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    /// Filled circle with an outline
    Circle {
        center: Point,
        radius: f64,
        fill: Color,
        outline: Color,
        outline_width: f64,
    },
    /// Straight segment, optionally arrowed at `to`
    Line {
        from: Point,
        to: Point,
        width: f64,
        color: Color,
        arrow: Option<ArrowHead>,
        cap: LineCap,
    },
    /// Text centred on `position`
    Text {
        position: Point,
        text: String,
        size: f64,
        color: Color,
    },
}

/// The primitives the renderer needs from a drawing target.
pub trait Surface {
    fn circle(
        &mut self,
        center: Point,
        radius: f64,
        fill: Color,
        outline: Color,
        outline_width: f64,
    );

    fn text(&mut self, position: Point, text: &str, size: f64, color: Color);

    fn line(
        &mut self,
        from: Point,
        to: Point,
        width: f64,
        color: Color,
        arrow: Option<ArrowHead>,
        cap: LineCap,
    );
}

/// Ordered, append-only list of draw commands.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    commands: Vec<DrawCommand>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    pub fn lines(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Line { .. }))
    }

    pub fn circles(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Circle { .. }))
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

impl Surface for Scene {
    fn circle(
        &mut self,
        center: Point,
        radius: f64,
        fill: Color,
        outline: Color,
        outline_width: f64,
    ) {
        self.push(DrawCommand::Circle {
            center,
            radius,
            fill,
            outline,
            outline_width,
        });
    }

    fn text(&mut self, position: Point, text: &str, size: f64, color: Color) {
        self.push(DrawCommand::Text {
            position,
            text: text.to_string(),
            size,
            color,
        });
    }

    fn line(
        &mut self,
        from: Point,
        to: Point,
        width: f64,
        color: Color,
        arrow: Option<ArrowHead>,
        cap: LineCap,
    ) {
        self.push(DrawCommand::Line {
            from,
            to,
            width,
            color,
            arrow,
            cap,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp_endpoints() {
        let a = Point::new(1.0, 2.0);
        let b = Point::new(5.0, -2.0);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 0.5), Point::new(3.0, 0.0));
        assert!((a.distance(b) - 32f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_scene_keeps_insertion_order() {
        let mut scene = Scene::new();
        scene.line(
            Point::new(0.0, 0.0),
            Point::new(1.0, 1.0),
            3.0,
            Color::BLACK,
            None,
            LineCap::Round,
        );
        scene.circle(Point::default(), 2.0, Color::GREEN, Color::BLACK, 1.0);
        scene.text(Point::default(), "1", 12.0, Color::BLACK);

        assert_eq!(scene.len(), 3);
        assert!(matches!(scene.commands()[0], DrawCommand::Line { .. }));
        assert!(matches!(scene.commands()[1], DrawCommand::Circle { .. }));
        assert_eq!(scene.texts().collect::<Vec<_>>(), vec!["1"]);
        assert_eq!(scene.lines().count(), 1);
        assert_eq!(scene.circles().count(), 1);
    }
}
