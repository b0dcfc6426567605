use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{info, warn};

use crate::draw::Point;
use crate::layout_triangle::{DEFAULT_PANEL_SIZE, DEFAULT_RADIUS_FRACTION, TriangleLayout};
use crate::renderer::{EdgeStyle, GraphRenderer, NodeStyle};

/// File picked up from the working directory when present.
pub const SETTINGS_FILE: &str = "triangle_graph.json";

/// Bounds for a tunable value, kept in one place.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SettingsRange {
    pub min: f64,
    pub max: f64,
}

impl SettingsRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }
}

// Panel ranges
pub const PANEL_SIZE_RANGE: SettingsRange = SettingsRange::new(200.0, 1600.0);
pub const PANEL_GAP_RANGE: SettingsRange = SettingsRange::new(0.0, 400.0);
pub const RADIUS_FRACTION_RANGE: SettingsRange = SettingsRange::new(0.1, 0.5);
pub const CAPTION_OFFSET_RANGE: SettingsRange = SettingsRange::new(0.0, 100.0);

// Visual ranges
pub const NODE_RADIUS_RANGE: SettingsRange = SettingsRange::new(4.0, 60.0);
pub const EDGE_WIDTH_RANGE: SettingsRange = SettingsRange::new(0.5, 12.0);
pub const FONT_SIZE_RANGE: SettingsRange = SettingsRange::new(6.0, 48.0);
pub const OUTLINE_WIDTH_RANGE: SettingsRange = SettingsRange::new(0.0, 10.0);
pub const GRID_CELL_RANGE: SettingsRange = SettingsRange::new(8.0, 64.0);
pub const GRID_EXTRA_HEIGHT_RANGE: SettingsRange = SettingsRange::new(0.0, 2000.0);

// Arrow ranges; clearance is in node radii
pub const ARROW_CLEARANCE_RANGE: SettingsRange = SettingsRange::new(1.0, 3.0);
pub const ARROW_LENGTH_RANGE: SettingsRange = SettingsRange::new(2.0, 60.0);
pub const ARROW_HALF_WIDTH_RANGE: SettingsRange = SettingsRange::new(1.0, 30.0);

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelSettings {
    pub size: f64,
    /// Horizontal space between the two panels
    pub gap: f64,
    pub radius_fraction: f64,
    pub caption_offset: f64,
    pub caption_size: f64,
}

impl Default for PanelSettings {
    fn default() -> Self {
        Self {
            size: DEFAULT_PANEL_SIZE,
            gap: 40.0,
            radius_fraction: DEFAULT_RADIUS_FRACTION,
            caption_offset: 15.0,
            caption_size: 17.0,
        }
    }
}

/// The adjacency grid printed under each panel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatrixGridSettings {
    pub visible: bool,
    pub cell: f64,
    pub font_size: f64,
    /// Canvas height reserved below the panels
    pub extra_height: f64,
}

impl Default for MatrixGridSettings {
    fn default() -> Self {
        Self {
            visible: true,
            cell: 24.0,
            font_size: 12.0,
            extra_height: 330.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabSettings {
    pub variant: u32,
    pub panel: PanelSettings,
    pub node: NodeStyle,
    pub edge: EdgeStyle,
    pub matrix_grid: MatrixGridSettings,
}

impl Default for LabSettings {
    fn default() -> Self {
        Self {
            variant: 4104,
            panel: PanelSettings::default(),
            node: NodeStyle::default(),
            edge: EdgeStyle::default(),
            matrix_grid: MatrixGridSettings::default(),
        }
    }
}

impl LabSettings {
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: LabSettings = serde_json::from_str(json)?;
        Ok(settings.sanitized())
    }

    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Reads `path` if it exists, falling back to defaults on any failure.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match Self::load(path) {
            Ok(settings) => {
                info!(path = %path.display(), "loaded settings");
                settings
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "using default settings");
                Self::default()
            }
        }
    }

    /// Copy with every tunable clamped into its range.
    pub fn sanitized(mut self) -> Self {
        self.panel.size = PANEL_SIZE_RANGE.clamp(self.panel.size);
        self.panel.gap = PANEL_GAP_RANGE.clamp(self.panel.gap);
        self.panel.radius_fraction = RADIUS_FRACTION_RANGE.clamp(self.panel.radius_fraction);
        self.panel.caption_offset = CAPTION_OFFSET_RANGE.clamp(self.panel.caption_offset);
        self.panel.caption_size = FONT_SIZE_RANGE.clamp(self.panel.caption_size);
        self.node.radius = NODE_RADIUS_RANGE.clamp(self.node.radius);
        self.node.outline_width = OUTLINE_WIDTH_RANGE.clamp(self.node.outline_width);
        self.node.label_size = FONT_SIZE_RANGE.clamp(self.node.label_size);
        self.edge.width = EDGE_WIDTH_RANGE.clamp(self.edge.width);
        self.edge.arrow_clearance = ARROW_CLEARANCE_RANGE.clamp(self.edge.arrow_clearance);
        let arrow = &mut self.edge.arrow;
        arrow.length = ARROW_LENGTH_RANGE.clamp(arrow.length);
        // the neck sits between the tip and the trailing corners
        arrow.neck = arrow.neck.clamp(0.0, arrow.length);
        arrow.half_width = ARROW_HALF_WIDTH_RANGE.clamp(arrow.half_width);
        self.matrix_grid.cell = GRID_CELL_RANGE.clamp(self.matrix_grid.cell);
        self.matrix_grid.font_size = FONT_SIZE_RANGE.clamp(self.matrix_grid.font_size);
        self.matrix_grid.extra_height =
            GRID_EXTRA_HEIGHT_RANGE.clamp(self.matrix_grid.extra_height);
        self
    }

    pub fn layout(&self) -> TriangleLayout {
        TriangleLayout::default()
            .with_panel_size(self.panel.size)
            .with_radius_fraction(self.panel.radius_fraction)
    }

    pub fn renderer(&self) -> GraphRenderer {
        GraphRenderer {
            node: self.node,
            edge: self.edge,
            panel_size: self.panel.size,
            caption_offset: self.panel.caption_offset,
            caption_size: self.panel.caption_size,
        }
    }

    /// Horizontal offsets of the directed and undirected panels.
    pub fn panel_offsets(&self) -> [f64; 2] {
        [0.0, self.panel.size + self.panel.gap]
    }

    /// Top-left corner of the matrix grid under the panel at `offset_x`.
    pub fn grid_origin(&self, offset_x: f64) -> Point {
        Point::new(offset_x + self.panel.size / 4.0, self.panel.size + 10.0)
    }

    pub fn canvas_size(&self) -> (f64, f64) {
        let width = 2.0 * self.panel.size + self.panel.gap;
        let height = if self.matrix_grid.visible {
            self.panel.size + self.matrix_grid.extra_height
        } else {
            self.panel.size
        };
        (width, height)
    }
}

#[derive(thiserror::Error, Debug)]
pub enum SettingsError {
    #[error("cannot read settings: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid settings: {0}")]
    Json(#[from] serde_json::Error),
}
