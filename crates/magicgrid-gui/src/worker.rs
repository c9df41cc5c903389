use std::sync::mpsc;

use magicgrid_core::error::Result;
use magicgrid_core::io::image_io::save_image;
use magicgrid_core::source::SourceImage;
use tracing::debug;

use crate::messages::{DecodeSource, WorkerCommand, WorkerResult};

/// Spawn the worker thread. Returns the command sender.
pub fn spawn_worker(
    result_tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
) -> mpsc::Sender<WorkerCommand> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<WorkerCommand>();

    std::thread::Builder::new()
        .name("magicgrid-worker".into())
        .spawn(move || {
            worker_loop(cmd_rx, result_tx, ctx);
        })
        .expect("Failed to spawn worker thread");

    cmd_tx
}

fn send(tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context, result: WorkerResult) {
    let _ = tx.send(result);
    ctx.request_repaint();
}

fn worker_loop(
    cmd_rx: mpsc::Receiver<WorkerCommand>,
    tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
) {
    while let Ok(cmd) = cmd_rx.recv() {
        match cmd {
            WorkerCommand::Decode {
                ticket,
                name,
                source,
                media_type,
            } => {
                debug!(generation = ticket.generation(), %media_type, "decoding {name}");
                let result = decode(&source, &media_type);
                send(&tx, &ctx, WorkerResult::Decoded { ticket, name, result });
            }
            WorkerCommand::SaveComposite { path, image } => match save_image(&image, &path) {
                Ok(()) => send(&tx, &ctx, WorkerResult::CompositeSaved { path }),
                Err(e) => send(
                    &tx,
                    &ctx,
                    WorkerResult::Error {
                        message: format!("Failed to save {}: {e}", path.display()),
                    },
                ),
            },
        }
    }
}

fn decode(source: &DecodeSource, media_type: &str) -> Result<SourceImage> {
    match source {
        DecodeSource::Path(path) => {
            let bytes = std::fs::read(path)?;
            SourceImage::decode(&bytes, Some(media_type))
        }
        DecodeSource::Bytes(bytes) => SourceImage::decode(bytes, Some(media_type)),
    }
}
