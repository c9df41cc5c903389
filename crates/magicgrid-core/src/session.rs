use image::RgbaImage;
use tracing::{debug, info, warn};

use crate::error::{MagicGridError, Result};
use crate::layout::{DisplaySize, ViewportBounds};
use crate::render::{GridSpec, LayeredRenderer, OpacitySpec};
use crate::source::SourceImage;

/// Generation tag handed out when a load starts.
///
/// Only the most recent ticket may replace the displayed image; completions
/// carrying an older ticket are dropped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct LoadTicket(u64);

impl LoadTicket {
    pub fn generation(self) -> u64 {
        self.0
    }
}

/// What [`Session::finish_load`] did with a completed load.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LoadOutcome {
    /// The image replaced the previous one and both layers were redrawn.
    Displayed(DisplaySize),
    /// A newer load was started since this one; nothing changed.
    Stale,
    /// The file was not a usable image; nothing changed.
    Ignored,
}

/// The owned state behind one overlay view: the current image, the two
/// control values and the layers they drive.
#[derive(Debug)]
pub struct Session {
    grid: GridSpec,
    opacity: OpacitySpec,
    image: Option<SourceImage>,
    size: Option<DisplaySize>,
    renderer: LayeredRenderer,
    next_generation: u64,
    latest: Option<LoadTicket>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(GridSpec::default(), OpacitySpec::default())
    }
}

impl Session {
    pub fn new(grid: GridSpec, opacity: OpacitySpec) -> Self {
        Self {
            grid,
            opacity,
            image: None,
            size: None,
            renderer: LayeredRenderer::new(),
            next_generation: 0,
            latest: None,
        }
    }

    /// Start a load and return the ticket its completion must present.
    pub fn begin_load(&mut self) -> LoadTicket {
        let ticket = LoadTicket(self.next_generation);
        self.next_generation += 1;
        self.latest = Some(ticket);
        ticket
    }

    /// Apply a completed decode.
    ///
    /// Stale tickets and failed decodes leave every piece of state untouched.
    /// A successful, current decode fits the image into `bounds`, resizes both
    /// layers and redraws them with the current control values.
    pub fn finish_load(
        &mut self,
        ticket: LoadTicket,
        decoded: Result<SourceImage>,
        bounds: ViewportBounds,
    ) -> LoadOutcome {
        if self.latest != Some(ticket) {
            debug!(generation = ticket.0, "dropping stale load");
            return LoadOutcome::Stale;
        }

        let image = match decoded {
            Ok(image) => image,
            Err(MagicGridError::UnsupportedMediaType(media_type)) => {
                debug!(%media_type, "ignoring non-image file");
                return LoadOutcome::Ignored;
            }
            Err(e) => {
                warn!("ignoring undecodable file: {e}");
                return LoadOutcome::Ignored;
            }
        };

        let size = bounds.fit(image.width() as f64, image.height() as f64);
        info!(
            natural_width = image.width(),
            natural_height = image.height(),
            display_width = size.width,
            display_height = size.height,
            "image loaded"
        );

        self.renderer.initialize(size);
        self.renderer.draw_image_layer(&image, size, self.opacity);
        self.renderer.draw_grid_layer(size, self.grid);
        self.image = Some(image);
        self.size = Some(size);
        LoadOutcome::Displayed(size)
    }

    /// Load synchronously: begin, decode, finish.
    pub fn load_bytes(&mut self, bytes: &[u8], media_type: Option<&str>, bounds: ViewportBounds) -> LoadOutcome {
        let ticket = self.begin_load();
        self.finish_load(ticket, SourceImage::decode(bytes, media_type), bounds)
    }

    /// Change the opacity. Redraws the image layer only; returns whether a
    /// redraw happened.
    pub fn set_opacity(&mut self, opacity: OpacitySpec) -> bool {
        self.opacity = opacity;
        match (&self.image, self.size) {
            (Some(image), Some(size)) => {
                self.renderer.draw_image_layer(image, size, opacity);
                true
            }
            _ => false,
        }
    }

    /// Change the grid spacing. Redraws the grid layer only; returns whether
    /// a redraw happened.
    pub fn set_grid_spacing(&mut self, grid: GridSpec) -> bool {
        self.grid = grid;
        match self.size {
            Some(size) => {
                self.renderer.draw_grid_layer(size, grid);
                true
            }
            None => false,
        }
    }

    pub fn grid(&self) -> GridSpec {
        self.grid
    }

    pub fn opacity(&self) -> OpacitySpec {
        self.opacity
    }

    pub fn image(&self) -> Option<&SourceImage> {
        self.image.as_ref()
    }

    /// `None` until an image has been displayed; the drop target shows instead.
    pub fn display_size(&self) -> Option<DisplaySize> {
        self.size
    }

    pub fn has_image(&self) -> bool {
        self.image.is_some()
    }

    pub fn renderer(&self) -> &LayeredRenderer {
        &self.renderer
    }

    pub fn composite(&self) -> Option<RgbaImage> {
        self.renderer.composite()
    }
}
