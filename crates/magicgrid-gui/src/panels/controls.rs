use crate::app::MagicGridApp;

const LEFT_PANEL_WIDTH: f32 = 240.0;

pub fn show(ctx: &egui::Context, app: &mut MagicGridApp) {
    egui::SidePanel::left("controls")
        .default_width(LEFT_PANEL_WIDTH)
        .resizable(true)
        .show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.set_min_width(LEFT_PANEL_WIDTH - 20.0);

                file_section(ui, app);
                ui.separator();
                grid_section(ctx, ui, app);
                ui.separator();
                opacity_section(ctx, ui, app);
            });
        });
}

fn file_section(ui: &mut egui::Ui, app: &mut MagicGridApp) {
    let status = app.ui_state.is_loading().then_some("loading...");
    super::section_header(ui, "File", status);
    ui.add_space(4.0);

    if ui.button("Open...").clicked() {
        super::menu_bar::open_file(app);
    }

    if let Some(ref name) = app.ui_state.file_name {
        ui.label(name);
    }

    if let Some(image) = app.session.image() {
        ui.small(format!("{}x{}, {}", image.width(), image.height(), image.media_type()));
    }
}

fn grid_section(ctx: &egui::Context, ui: &mut egui::Ui, app: &mut MagicGridApp) {
    super::section_header(ui, "Grid", None);
    ui.add_space(4.0);

    let max = app.config.controls.grid_spacing_max.max(1);
    let mut spacing = app.session.grid().spacing();
    let response = ui.add(
        egui::Slider::new(&mut spacing, 1..=max)
            .text("px")
            .clamping(egui::SliderClamping::Always),
    );
    if response.changed() {
        app.set_grid_spacing(ctx, spacing);
    }
}

fn opacity_section(ctx: &egui::Context, ui: &mut egui::Ui, app: &mut MagicGridApp) {
    super::section_header(ui, "Opacity", None);
    ui.add_space(4.0);

    let mut opacity = app.session.opacity().value();
    let response = ui.add(
        egui::Slider::new(&mut opacity, 0.0..=1.0)
            .step_by(0.01)
            .fixed_decimals(2)
            .clamping(egui::SliderClamping::Always),
    );
    if response.changed() {
        app.set_opacity(ctx, opacity);
    }
}
