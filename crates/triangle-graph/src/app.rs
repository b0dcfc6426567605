use eframe::egui;
use std::path::Path;
use tracing::{info, warn};

use crate::painter::paint_scene;
use crate::scene::LabScene;
use crate::scene_file::{SceneFile, save_scene};
use crate::settings::LabSettings;

// Margin around the canvas inside the scroll area
const CANVAS_MARGIN: f32 = 10.0;

/// Read-only viewer for a built [`LabScene`].
pub struct TriangleGraphApp {
    lab: LabScene,
    canvas_size: egui::Vec2,
    error_message: Option<String>,
}

impl TriangleGraphApp {
    pub fn new(lab: LabScene, settings: &LabSettings) -> Self {
        let (width, height) = settings.canvas_size();
        // aborted panels are reported in the status line
        let error_message = (!lab.errors.is_empty()).then(|| lab.errors.join("; "));
        Self {
            lab,
            canvas_size: egui::vec2(width as f32, height as f32),
            error_message,
        }
    }

    fn export_to(&mut self, path: &Path) {
        match save_scene(path, &SceneFile::from(&self.lab)) {
            Ok(()) => info!(path = %path.display(), "scene exported"),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "scene export failed");
                self.error_message = Some(format!("Export failed: {e}"));
            }
        }
    }
}

impl eframe::App for TriangleGraphApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Export scene…").clicked() {
                        ui.close();
                        if let Some(path) = rfd::FileDialog::new()
                            .add_filter("JSON", &["json"])
                            .set_file_name("scene.json")
                            .save_file()
                        {
                            self.export_to(&path);
                        }
                    }
                    if ui.button("Quit").clicked() {
                        ui.close();
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
            });
        });

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(format!(
                    "Variant {} · {} nodes · {} directed edges",
                    self.lab.variant.value(),
                    self.lab.node_count(),
                    self.lab.directed.edge_count(),
                ));
                if let Some(msg) = &self.error_message {
                    ui.separator();
                    ui.colored_label(egui::Color32::from_rgb(200, 60, 70), msg);
                }
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::both().show(ui, |ui| {
                let (rect, _response) = ui.allocate_exact_size(
                    self.canvas_size + egui::vec2(2.0, 2.0) * CANVAS_MARGIN,
                    egui::Sense::hover(),
                );
                let painter = ui.painter_at(rect);
                painter.rect_filled(rect, 0.0, egui::Color32::WHITE);
                paint_scene(
                    &painter,
                    &self.lab.scene,
                    rect.min + egui::vec2(CANVAS_MARGIN, CANVAS_MARGIN),
                );
            });
        });
    }
}
