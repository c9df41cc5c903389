use std::path::{Path, PathBuf};
use std::sync::mpsc;

use magicgrid_core::config::GridConfig;
use magicgrid_core::render::{GridSpec, LayerKind, OpacitySpec};
use magicgrid_core::session::{LoadOutcome, Session};
use magicgrid_core::source::{is_image_media_type, media_type_for_path};
use tracing::debug;

use crate::messages::{DecodeSource, WorkerCommand, WorkerResult};
use crate::panels;
use crate::states::{UIState, ViewportState};
use crate::worker;

pub struct MagicGridApp {
    pub cmd_tx: mpsc::Sender<WorkerCommand>,
    pub result_tx: mpsc::Sender<WorkerResult>,
    pub result_rx: mpsc::Receiver<WorkerResult>,
    pub session: Session,
    pub config: GridConfig,
    pub ui_state: UIState,
    pub viewport: ViewportState,
    pub show_about: bool,
}

impl MagicGridApp {
    pub fn new(ctx: &egui::Context) -> Self {
        let (result_tx, result_rx) = mpsc::channel();
        let cmd_tx = worker::spawn_worker(result_tx.clone(), ctx.clone());

        let config = GridConfig::default();
        let session = Session::new(
            config.grid_spec().unwrap_or_default(),
            config.opacity_spec().unwrap_or_default(),
        );

        Self {
            cmd_tx,
            result_tx,
            result_rx,
            session,
            config,
            ui_state: UIState::default(),
            viewport: ViewportState::default(),
            show_about: false,
        }
    }

    /// Drain all pending results from the worker.
    fn poll_results(&mut self, ctx: &egui::Context) {
        while let Ok(result) = self.result_rx.try_recv() {
            match result {
                WorkerResult::Decoded {
                    ticket,
                    name,
                    result,
                } => {
                    if self.ui_state.pending_load == Some(ticket) {
                        self.ui_state.pending_load = None;
                    }
                    let bounds = self
                        .config
                        .layout
                        .bounds_for_container(self.viewport.container_width as f64);
                    if let LoadOutcome::Displayed(size) = self.session.finish_load(ticket, result, bounds) {
                        let (w, h) = size.pixel_dims();
                        self.ui_state.add_log(format!("Opened: {name} ({w}x{h})"));
                        self.ui_state.file_name = Some(name);
                        self.upload_layer(ctx, LayerKind::Image);
                        self.upload_layer(ctx, LayerKind::Grid);
                    }
                }
                WorkerResult::FilePicked { path } => {
                    self.open_path(path);
                }
                WorkerResult::ConfigImported { config } => {
                    self.apply_config(ctx, config);
                    self.ui_state.add_log("Config imported".into());
                }
                WorkerResult::CompositeSaved { path } => {
                    self.ui_state.add_log(format!("Saved: {}", path.display()));
                }
                WorkerResult::Error { message } => {
                    self.ui_state.add_log(format!("ERROR: {message}"));
                }
            }
        }
    }

    fn handle_file_drop(&mut self, ctx: &egui::Context) {
        let (hovering, dropped) = ctx.input(|i| {
            (
                !i.raw.hovered_files.is_empty(),
                i.raw.dropped_files.first().cloned(),
            )
        });
        self.ui_state.drag_hover = hovering;

        // Only the first file of a multi-file drop is used.
        let Some(file) = dropped else {
            return;
        };

        let media_type = if file.mime.is_empty() {
            file.path
                .as_deref()
                .and_then(media_type_for_path)
                .or_else(|| media_type_for_path(Path::new(&file.name)))
                .map(str::to_string)
        } else {
            Some(file.mime.clone())
        };

        let name = file
            .path
            .as_deref()
            .and_then(Path::file_name)
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| file.name.clone());

        let source = match (file.path, file.bytes) {
            (Some(path), _) => DecodeSource::Path(path),
            (None, Some(bytes)) => DecodeSource::Bytes(bytes),
            (None, None) => return,
        };

        if let Some(media_type) = media_type {
            self.start_load(name, source, media_type);
        } else {
            debug!("ignoring drop with unknown media type: {name}");
        }
    }

    /// Load a file chosen on disk. Non-image files are ignored.
    pub fn open_path(&mut self, path: PathBuf) {
        let Some(media_type) = media_type_for_path(&path) else {
            debug!("ignoring non-image file {}", path.display());
            return;
        };
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        self.start_load(name, DecodeSource::Path(path), media_type.to_string());
    }

    fn start_load(&mut self, name: String, source: DecodeSource, media_type: String) {
        if !is_image_media_type(&media_type) {
            debug!(%media_type, "ignoring non-image file {name}");
            return;
        }
        let ticket = self.session.begin_load();
        self.ui_state.pending_load = Some(ticket);
        self.send_command(WorkerCommand::Decode {
            ticket,
            name,
            source,
            media_type,
        });
    }

    /// Slider input for the image layer. Redraws that layer only.
    pub fn set_opacity(&mut self, ctx: &egui::Context, opacity: f32) {
        if self.session.set_opacity(OpacitySpec::clamped(opacity)) {
            self.upload_layer(ctx, LayerKind::Image);
        }
    }

    /// Slider input for the grid layer. Redraws that layer only.
    pub fn set_grid_spacing(&mut self, ctx: &egui::Context, spacing: u32) {
        let Ok(grid) = GridSpec::new(spacing) else {
            return;
        };
        if self.session.set_grid_spacing(grid) {
            self.upload_layer(ctx, LayerKind::Grid);
        }
    }

    pub fn apply_config(&mut self, ctx: &egui::Context, config: GridConfig) {
        let spacing = config.controls.grid_spacing;
        let opacity = config.controls.opacity;
        self.config = config;
        self.set_grid_spacing(ctx, spacing);
        self.set_opacity(ctx, opacity);
    }

    /// The active config with the current control values written back.
    pub fn current_config(&self) -> GridConfig {
        let mut config = self.config.clone();
        config.controls.grid_spacing = self.session.grid().spacing();
        config.controls.opacity = self.session.opacity().value();
        config
    }

    fn upload_layer(&mut self, ctx: &egui::Context, kind: LayerKind) {
        if let Some(surface) = self.session.renderer().layer(kind).surface() {
            self.viewport.upload_layer(ctx, kind, surface);
        }
    }

    pub fn send_command(&self, cmd: WorkerCommand) {
        let _ = self.cmd_tx.send(cmd);
    }
}

impl eframe::App for MagicGridApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_results(ctx);
        self.handle_file_drop(ctx);

        panels::menu_bar::show(ctx, self);
        panels::status::show(ctx, self);
        panels::controls::show(ctx, self);
        panels::viewport::show(ctx, self);

        // About dialog
        if self.show_about {
            egui::Window::new("About Magic Grid")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.heading("Magic Grid");
                        ui.label("Grid overlay for reference images");
                        ui.add_space(8.0);
                        ui.label(format!("Version {}", env!("CARGO_PKG_VERSION")));
                        ui.add_space(8.0);
                        if ui.button("Close").clicked() {
                            self.show_about = false;
                        }
                    });
                });
        }
    }
}
