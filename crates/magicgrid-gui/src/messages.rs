use std::path::PathBuf;
use std::sync::Arc;

use image::RgbaImage;
use magicgrid_core::config::GridConfig;
use magicgrid_core::error::Result;
use magicgrid_core::session::LoadTicket;
use magicgrid_core::source::SourceImage;

/// Where the bytes of a load come from.
pub enum DecodeSource {
    /// A file on disk (file picker, native drop).
    Path(PathBuf),
    /// Bytes already in memory (drop without a path).
    Bytes(Arc<[u8]>),
}

/// Commands sent from UI thread to worker thread.
pub enum WorkerCommand {
    /// Decode a file for the load tagged with `ticket`.
    Decode {
        ticket: LoadTicket,
        name: String,
        source: DecodeSource,
        media_type: String,
    },

    /// Write the flattened layers to disk.
    SaveComposite { path: PathBuf, image: RgbaImage },
}

/// Results sent back to the UI thread.
pub enum WorkerResult {
    /// A decode finished, successfully or not.
    Decoded {
        ticket: LoadTicket,
        name: String,
        result: Result<SourceImage>,
    },

    /// The user picked a file in the open dialog.
    FilePicked { path: PathBuf },

    ConfigImported { config: GridConfig },
    CompositeSaved { path: PathBuf },
    Error { message: String },
}
