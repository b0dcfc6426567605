pub mod app;
pub mod draw;
pub mod layout_triangle;
pub mod native;
pub mod painter;
pub mod renderer;
pub mod scene;
pub mod scene_file;
pub mod settings;

pub use draw::{ArrowHead, Color, DrawCommand, LineCap, Point, Scene, Surface};
pub use layout_triangle::{TriangleLayout, node_positions_triangle};
pub use renderer::{
    EdgeStyle, GraphRenderer, NodeStyle, RenderError, RenderStats, draw_graph,
    draw_matrix_grid,
};
pub use scene::{LabScene, Panel, SceneError, build_lab_scene};
pub use settings::LabSettings;
