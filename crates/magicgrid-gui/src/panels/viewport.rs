use crate::app::MagicGridApp;

const DROP_TARGET_MARGIN: f32 = 24.0;

pub fn show(ctx: &egui::Context, app: &mut MagicGridApp) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let rect = ui.available_rect_before_wrap();
        let pixels_per_point = ctx.pixels_per_point();
        app.viewport.container_width = rect.width() * pixels_per_point;
        paint_background(ui, rect);

        let layers = match (
            app.session.display_size(),
            app.viewport.image_texture.as_ref(),
            app.viewport.grid_texture.as_ref(),
        ) {
            (Some(size), Some(image), Some(grid)) => Some((size.pixel_dims(), image.id(), grid.id())),
            _ => None,
        };

        if let Some(((w, h), image_id, grid_id)) = layers {
            egui::ScrollArea::both().show(ui, |ui| {
                let (layer_rect, _) = ui.allocate_exact_size(
                    layer_size_points((w, h), pixels_per_point),
                    egui::Sense::hover(),
                );
                // Image beneath grid.
                draw_layer(ui, image_id, layer_rect);
                draw_layer(ui, grid_id, layer_rect);
            });
            if app.ui_state.drag_hover {
                paint_drop_highlight(ui, rect);
            }
        } else if show_drop_target(ui, rect, app.ui_state.drag_hover).clicked() {
            super::menu_bar::open_file(app);
        }
    });
}

/// Layer surfaces are sized in physical pixels; egui lays out in points.
fn layer_size_points((width, height): (u32, u32), pixels_per_point: f32) -> egui::Vec2 {
    egui::vec2(width as f32, height as f32) / pixels_per_point
}

fn paint_background(ui: &egui::Ui, rect: egui::Rect) {
    ui.painter()
        .rect_filled(rect, 0.0, egui::Color32::from_gray(30));
}

fn draw_layer(ui: &egui::Ui, texture_id: egui::TextureId, rect: egui::Rect) {
    ui.painter().image(
        texture_id,
        rect,
        egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
        egui::Color32::WHITE,
    );
}

/// Clickable placeholder shown until an image is loaded.
fn show_drop_target(ui: &mut egui::Ui, rect: egui::Rect, hovering: bool) -> egui::Response {
    let target = rect.shrink(DROP_TARGET_MARGIN);
    let response = ui.allocate_rect(target, egui::Sense::click());

    let stroke_color = if hovering || response.hovered() {
        egui::Color32::from_rgb(120, 170, 255)
    } else {
        egui::Color32::from_gray(90)
    };
    if hovering {
        ui.painter()
            .rect_filled(target, 8.0, egui::Color32::from_rgba_unmultiplied(120, 170, 255, 24));
    }
    ui.painter().rect_stroke(
        target,
        8.0,
        egui::Stroke::new(2.0, stroke_color),
        egui::StrokeKind::Inside,
    );
    ui.painter().text(
        target.center(),
        egui::Align2::CENTER_CENTER,
        "Drop an image here or click to browse",
        egui::FontId::proportional(18.0),
        egui::Color32::from_gray(140),
    );

    response
}

fn paint_drop_highlight(ui: &egui::Ui, rect: egui::Rect) {
    ui.painter().rect_stroke(
        rect.shrink(2.0),
        0.0,
        egui::Stroke::new(2.0, egui::Color32::from_rgb(120, 170, 255)),
        egui::StrokeKind::Inside,
    );
}
