use std::sync::Arc;

use pocketcube_core::{CubeEngine, FRAME_HEIGHT, FRAME_WIDTH, OrientationId, TurnId};
use pocketcube_view::{FaceletMesh, ViewController, ViewPreferences};
use strum::VariantArray;

use crate::app::App;

/// Side length of one mesh cell, in points.
const MESH_CELL_SIZE: f32 = 22.0;

pub struct AppUi {
    pub app: App,
    frame_texture: Option<egui::TextureHandle>,
}

impl AppUi {
    pub(crate) fn new(
        cc: &eframe::CreationContext<'_>,
        engine: Box<dyn CubeEngine>,
        prefs: ViewPreferences,
    ) -> Self {
        let app = App::new(&cc.egui_ctx, engine, prefs);
        AppUi {
            app,
            frame_texture: None,
        }
    }

    pub fn build(&mut self, ctx: &egui::Context) {
        let controller = Arc::clone(self.app.controller());
        let mut controller = controller.lock();

        self.update_frame_texture(ctx, &controller);

        if let Some(error) = controller.error() {
            egui::TopBottomPanel::top("error_banner").show(ctx, |ui| {
                ui.colored_label(
                    ui.visuals().error_fg_color,
                    format!("Engine error: {error}"),
                );
            });
        }

        egui::TopBottomPanel::bottom("solution_bar").show(ctx, |ui| {
            ui.add_space(4.0);
            ui.horizontal_wrapped(|ui| {
                ui.add_enabled_ui(controller.error().is_none(), |ui| {
                    let mut solve = controller.is_solve_enabled();
                    if ui.checkbox(&mut solve, "Solve").changed() {
                        let _ = controller.set_solve_enabled(solve);
                    }
                });
                ui.label(controller.solution_text());
            });
            ui.add_space(4.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal_top(|ui| {
                self.show_canvas(ui, &mut controller);
                ui.separator();
                ui.vertical(|ui| {
                    show_mesh(ui, controller.mesh());
                    ui.add_space(8.0);
                    show_controls(ui, &mut controller);
                });
            });
        });
    }

    /// The 3D canvas: shows the latest composited frame and feeds pointer
    /// gestures to the controller. Dragging rotates the viewpoint;
    /// double-clicking resets it.
    fn show_canvas(&self, ui: &mut egui::Ui, controller: &mut ViewController) {
        let size = egui::vec2(FRAME_WIDTH as f32, FRAME_HEIGHT as f32);
        let (rect, r) = ui.allocate_exact_size(size, egui::Sense::click_and_drag());

        if r.drag_started() {
            controller.on_press();
        }
        if r.dragged() {
            let delta = r.drag_delta();
            controller.on_move(f64::from(delta.x), f64::from(delta.y));
        }
        if r.drag_stopped() {
            controller.on_release();
        }
        if r.double_clicked() {
            controller.on_reset();
        }

        if let Some(texture) = &self.frame_texture {
            egui::Image::new((texture.id(), rect.size())).paint_at(ui, rect);
        }
    }

    fn update_frame_texture(&mut self, ctx: &egui::Context, controller: &ViewController) {
        let frame = controller.frame();
        let image = egui::ColorImage::from_rgba_unmultiplied(
            [frame.width() as usize, frame.height() as usize],
            frame.as_raw(),
        );
        match &mut self.frame_texture {
            Some(texture) => texture.set(image, egui::TextureOptions::LINEAR),
            None => {
                self.frame_texture =
                    Some(ctx.load_texture("cube_frame", image, egui::TextureOptions::LINEAR));
            }
        }
    }
}

/// Paints the unfolded sticker mesh as a fixed grid of colored cells.
fn show_mesh(ui: &mut egui::Ui, mesh: &FaceletMesh) {
    let cols = FaceletMesh::GRID_COLS as f32;
    let rows = FaceletMesh::GRID_ROWS as f32;
    let (rect, _response) =
        ui.allocate_exact_size(egui::vec2(cols, rows) * MESH_CELL_SIZE, egui::Sense::hover());

    let painter = ui.painter_at(rect);
    for cell in mesh.cells() {
        let min = rect.min + egui::vec2(cell.col as f32, cell.row as f32) * MESH_CELL_SIZE;
        let cell_rect = egui::Rect::from_min_size(min, egui::Vec2::splat(MESH_CELL_SIZE));
        painter.rect_filled(cell_rect.shrink(1.0), 2.0, cell.color.to_egui_color32());
    }
}

/// Turn, orientation, and scramble controls. Everything here funnels
/// through [`ViewController`], so the mesh and solution text stay in sync.
fn show_controls(ui: &mut egui::Ui, controller: &mut ViewController) {
    ui.add_enabled_ui(controller.error().is_none(), |ui| {
        for row in TurnId::VARIANTS.chunks(6) {
            ui.horizontal(|ui| {
                for &turn in row {
                    if ui.button(turn.to_string()).clicked() {
                        let _ = controller.turn(turn);
                    }
                }
            });
        }

        ui.add_space(6.0);
        ui.horizontal(|ui| {
            for &orientation in OrientationId::VARIANTS {
                if ui.button(orientation.to_string()).clicked() {
                    let _ = controller.orient(orientation);
                }
            }
        });

        ui.add_space(6.0);
        if ui.button("Scramble").clicked() {
            let _ = controller.scramble();
        }
    });
}
