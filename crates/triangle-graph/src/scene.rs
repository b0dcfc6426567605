use adjacency::{
    AdjacencyMatrix, MatrixError, Variant, VariantError, generate_directed_matrix,
};
use tracing::{error, info};

use crate::draw::Scene;
use crate::renderer::{RenderError, RenderStats, draw_matrix_grid};
use crate::settings::LabSettings;

pub const DIRECTED_TITLE: &str = "Directed adjacency matrix";
pub const UNDIRECTED_TITLE: &str = "Undirected adjacency matrix";

/// One graph's slot on the shared canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Panel {
    pub offset_x: f64,
    pub directed: bool,
}

/// Everything one run produces: both matrices and the combined scene.
#[derive(Debug, Clone)]
pub struct LabScene {
    pub variant: Variant,
    pub directed: AdjacencyMatrix,
    pub undirected: AdjacencyMatrix,
    pub scene: Scene,
    pub panels: [Panel; 2],
    /// Per-panel result; `None` when the panel was aborted
    pub stats: [Option<RenderStats>; 2],
    pub errors: Vec<String>,
}

impl LabScene {
    pub fn node_count(&self) -> usize {
        self.directed.size()
    }

    /// Both matrices in console dump format.
    pub fn console_dump(&self) -> String {
        format!(
            "{}{}",
            self.directed.dump(DIRECTED_TITLE),
            self.undirected.dump(UNDIRECTED_TITLE)
        )
    }
}

/// Generates both graphs for the configured variant and renders them side
/// by side, each with its matrix grid underneath.
///
/// A panel that fails to render is left blank; the failure is logged and kept
/// in [`LabScene::errors`].
pub fn build_lab_scene(settings: &LabSettings) -> Result<LabScene, SceneError> {
    let variant = Variant::new(settings.variant)?;
    let directed = generate_directed_matrix(
        variant.node_count(),
        variant.seed(),
        variant.n3(),
        variant.n4(),
    );
    let undirected = directed.to_undirected()?;
    info!(
        variant = variant.value(),
        nodes = variant.node_count(),
        directed_edges = directed.edge_count(),
        "graphs generated"
    );

    let [left, right] = settings.panel_offsets();
    let panels = [
        Panel {
            offset_x: left,
            directed: true,
        },
        Panel {
            offset_x: right,
            directed: false,
        },
    ];

    let mut scene = Scene::new();
    let mut stats = [None, None];
    let mut errors = Vec::new();
    for (slot, (panel, matrix)) in panels.iter().zip([&directed, &undirected]).enumerate() {
        match render_panel(settings, &mut scene, panel, matrix) {
            Ok(s) => stats[slot] = Some(s),
            Err(e) => {
                error!(offset_x = panel.offset_x, error = %e, "panel aborted");
                errors.push(format!("{} panel: {e}", panel_name(panel)));
            }
        }
    }

    Ok(LabScene {
        variant,
        directed,
        undirected,
        scene,
        panels,
        stats,
        errors,
    })
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SceneError {
    #[error(transparent)]
    Variant(#[from] VariantError),
    #[error(transparent)]
    Matrix(#[from] MatrixError),
}

fn panel_name(panel: &Panel) -> &'static str {
    if panel.directed { "Directed" } else { "Undirected" }
}

fn render_panel(
    settings: &LabSettings,
    scene: &mut Scene,
    panel: &Panel,
    matrix: &AdjacencyMatrix,
) -> Result<RenderStats, RenderError> {
    let positions = settings.layout().positions(matrix.rows(), panel.offset_x);
    let stats = settings.renderer().draw_graph(
        scene,
        &positions,
        matrix,
        panel.offset_x,
        panel.directed,
    )?;
    if settings.matrix_grid.visible {
        draw_matrix_grid(
            scene,
            matrix,
            settings.grid_origin(panel.offset_x),
            settings.matrix_grid.cell,
            settings.matrix_grid.font_size,
        );
    }
    Ok(stats)
}
