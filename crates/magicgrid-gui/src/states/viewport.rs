use image::RgbaImage;
use magicgrid_core::render::LayerKind;

use crate::convert::rgba_to_color_image;

/// GPU copies of the two render layers plus the container they live in.
#[derive(Default)]
pub struct ViewportState {
    pub image_texture: Option<egui::TextureHandle>,
    pub grid_texture: Option<egui::TextureHandle>,
    /// Width of the central panel in physical pixels, measured every frame.
    pub container_width: f32,
}

impl ViewportState {
    /// Upload one layer, replacing its previous texture in place.
    pub fn upload_layer(&mut self, ctx: &egui::Context, kind: LayerKind, surface: &RgbaImage) {
        let image = rgba_to_color_image(surface);
        let slot = match kind {
            LayerKind::Image => &mut self.image_texture,
            LayerKind::Grid => &mut self.grid_texture,
        };
        let options = texture_options(kind);
        if let Some(texture) = slot.as_mut() {
            texture.set(image, options);
        } else {
            *slot = Some(ctx.load_texture(kind.to_string(), image, options));
        }
    }
}

/// Grid lines are one pixel wide and must not be smeared by filtering.
pub fn texture_options(kind: LayerKind) -> egui::TextureOptions {
    match kind {
        LayerKind::Image => egui::TextureOptions::LINEAR,
        LayerKind::Grid => egui::TextureOptions::NEAREST,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_layer_is_sampled_nearest() {
        assert_eq!(texture_options(LayerKind::Grid), egui::TextureOptions::NEAREST);
        assert_eq!(texture_options(LayerKind::Image), egui::TextureOptions::LINEAR);
    }
}
