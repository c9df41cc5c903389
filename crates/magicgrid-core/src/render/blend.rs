use image::RgbaImage;
use rayon::prelude::*;

use crate::consts::PARALLEL_PIXEL_THRESHOLD;

/// Source-over blend of one straight-alpha RGBA pixel onto another.
pub fn blend_over(dst: [u8; 4], src: [u8; 4]) -> [u8; 4] {
    let sa = src[3] as f32 / 255.0;
    if sa >= 1.0 {
        return src;
    }
    if sa <= 0.0 {
        return dst;
    }

    let da = dst[3] as f32 / 255.0;
    let out_a = sa + da * (1.0 - sa);
    let channel = |s: u8, d: u8| -> u8 {
        let c = (s as f32 * sa + d as f32 * da * (1.0 - sa)) / out_a;
        c.round().clamp(0.0, 255.0) as u8
    };

    [
        channel(src[0], dst[0]),
        channel(src[1], dst[1]),
        channel(src[2], dst[2]),
        (out_a * 255.0).round() as u8,
    ]
}

/// Blend `top` over `bottom` in place. Both images must share dimensions.
pub fn composite_over(bottom: &mut RgbaImage, top: &RgbaImage) {
    debug_assert_eq!(bottom.dimensions(), top.dimensions());

    let blend_chunk = |(dst, src): (&mut [u8], &[u8])| {
        let out = blend_over([dst[0], dst[1], dst[2], dst[3]], [src[0], src[1], src[2], src[3]]);
        dst.copy_from_slice(&out);
    };

    let pixels = bottom.width() as usize * bottom.height() as usize;
    if pixels >= PARALLEL_PIXEL_THRESHOLD {
        bottom
            .par_chunks_mut(4)
            .zip(top.par_chunks(4))
            .for_each(blend_chunk);
    } else {
        bottom.chunks_mut(4).zip(top.chunks(4)).for_each(blend_chunk);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opaque_source_replaces() {
        assert_eq!(blend_over([1, 2, 3, 255], [9, 9, 9, 255]), [9, 9, 9, 255]);
    }

    #[test]
    fn transparent_source_keeps_destination() {
        assert_eq!(blend_over([1, 2, 3, 200], [9, 9, 9, 0]), [1, 2, 3, 200]);
    }

    #[test]
    fn half_alpha_over_opaque_mixes() {
        let out = blend_over([0, 0, 0, 255], [255, 255, 255, 128]);
        assert_eq!(out[3], 255);
        assert!((out[0] as i32 - 128).abs() <= 1);
    }

    #[test]
    fn over_transparent_keeps_source_colour() {
        assert_eq!(blend_over([0, 0, 0, 0], [200, 100, 50, 64]), [200, 100, 50, 64]);
    }
}
