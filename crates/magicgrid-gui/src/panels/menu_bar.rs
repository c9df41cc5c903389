use crate::app::MagicGridApp;
use crate::messages::{WorkerCommand, WorkerResult};
use magicgrid_core::config::GridConfig;

pub fn show(ctx: &egui::Context, app: &mut MagicGridApp) {
    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                let open_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::O);
                if ui.add(egui::Button::new("Open...").shortcut_text(ctx.format_shortcut(&open_shortcut))).clicked() {
                    ui.close();
                    open_file(app);
                }

                let save_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::S);
                let has_image = app.session.has_image();
                if ui
                    .add_enabled(
                        has_image,
                        egui::Button::new("Export Composite...").shortcut_text(ctx.format_shortcut(&save_shortcut)),
                    )
                    .clicked()
                {
                    ui.close();
                    export_composite(app);
                }

                ui.separator();

                if ui.button("Import Config...").clicked() {
                    ui.close();
                    import_config(app);
                }

                if ui.button("Export Config...").clicked() {
                    ui.close();
                    export_config(app);
                }

                ui.separator();

                let quit_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Q);
                if ui.add(egui::Button::new("Quit").shortcut_text(ctx.format_shortcut(&quit_shortcut))).clicked() {
                    ui.close();
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });

            ui.menu_button("Edit", |ui| {
                if ui.button("Reset Defaults").clicked() {
                    ui.close();
                    app.apply_config(ctx, GridConfig::default());
                    app.ui_state.add_log("Config reset to defaults".into());
                }
            });

            ui.menu_button("Help", |ui| {
                if ui.button("About").clicked() {
                    ui.close();
                    app.show_about = true;
                }
            });
        });

        // Keyboard shortcuts (consumed outside menus)
        if ctx.input_mut(|i| i.consume_shortcut(&egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::O))) {
            open_file(app);
        }
        if ctx.input_mut(|i| i.consume_shortcut(&egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::S))) {
            export_composite(app);
        }
        if ctx.input_mut(|i| i.consume_shortcut(&egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Q))) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    });
}

pub(crate) fn open_file(app: &MagicGridApp) {
    let result_tx = app.result_tx.clone();
    std::thread::spawn(move || {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter(
                "Images",
                &["png", "jpg", "jpeg", "gif", "bmp", "webp", "tif", "tiff", "tga", "ico"],
            )
            .add_filter("All files", &["*"])
            .pick_file()
        {
            let _ = result_tx.send(WorkerResult::FilePicked { path });
        }
    });
}

fn export_composite(app: &MagicGridApp) {
    let Some(image) = app.session.composite() else {
        return;
    };
    let cmd_tx = app.cmd_tx.clone();
    std::thread::spawn(move || {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("PNG", &["png"])
            .add_filter("TIFF", &["tiff", "tif"])
            .set_file_name("grid.png")
            .save_file()
        {
            let _ = cmd_tx.send(WorkerCommand::SaveComposite { path, image });
        }
    });
}

fn import_config(app: &MagicGridApp) {
    let result_tx = app.result_tx.clone();
    std::thread::spawn(move || {
        let Some(path) = rfd::FileDialog::new().add_filter("TOML", &["toml"]).pick_file() else {
            return;
        };
        let result = std::fs::read_to_string(&path)
            .map_err(anyhow::Error::from)
            .and_then(|content| Ok(toml::from_str::<GridConfig>(&content)?))
            .and_then(|config| {
                config.validate()?;
                Ok(config)
            });
        let _ = match result {
            Ok(config) => result_tx.send(WorkerResult::ConfigImported { config }),
            Err(e) => result_tx.send(WorkerResult::Error {
                message: format!("Invalid config {}: {e}", path.display()),
            }),
        };
    });
}

fn export_config(app: &MagicGridApp) {
    let config = app.current_config();
    let result_tx = app.result_tx.clone();

    std::thread::spawn(move || {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("TOML", &["toml"])
            .set_file_name("magicgrid.toml")
            .save_file()
        {
            let written = toml::to_string_pretty(&config)
                .map_err(anyhow::Error::from)
                .and_then(|content| Ok(std::fs::write(&path, content)?));
            if let Err(e) = written {
                let _ = result_tx.send(WorkerResult::Error {
                    message: format!("Failed to write config {}: {e}", path.display()),
                });
            }
        }
    });
}
