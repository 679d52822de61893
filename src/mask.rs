//! Rounded-rectangle opacity mask used to cut the square image into the icon shape.
//!
//! Coverage is estimated by sampling each pixel on a 4x4 grid. Sample positions
//! are kept in integer eighths of a pixel so the mask is exact and symmetric.

use image::{GrayImage, Luma, Rgba, RgbaImage};

const SUBPIXEL: i64 = 8;
const SAMPLES: [i64; 4] = [1, 3, 5, 7];

/// Builds a `size`x`size` mask: 255 inside the rounded rectangle, 0 outside,
/// anti-aliased along the corner arcs.
pub fn rounded_rect_mask(size: u32, radius: u32) -> GrayImage {
    let radius = radius.min(size / 2);
    let s = i64::from(size) * SUBPIXEL;
    let r = i64::from(radius) * SUBPIXEL;
    let r2 = r * r;

    let covered = |sx: i64, sy: i64| {
        let dx = sx - sx.clamp(r, s - r);
        let dy = sy - sy.clamp(r, s - r);
        dx * dx + dy * dy <= r2
    };

    GrayImage::from_fn(size, size, |x, y| {
        if in_straight_region(x, y, size, radius) {
            return Luma([255]);
        }

        let x0 = i64::from(x) * SUBPIXEL;
        let y0 = i64::from(y) * SUBPIXEL;
        let hits = SAMPLES
            .iter()
            .flat_map(|&oy| SAMPLES.iter().map(move |&ox| (x0 + ox, y0 + oy)))
            .filter(|&(sx, sy)| covered(sx, sy))
            .count() as u32;
        let total = (SAMPLES.len() * SAMPLES.len()) as u32;

        Luma([((hits * 255 + total / 2) / total) as u8])
    })
}

/// Pixels outside the four corner squares are always fully covered.
fn in_straight_region(x: u32, y: u32, size: u32, radius: u32) -> bool {
    let inner = |v: u32| v >= radius && v + radius < size;
    inner(x) || inner(y)
}

/// Pastes `img` onto a transparent canvas through `mask`: RGB is copied, alpha
/// becomes the mask value. Both buffers must have the same dimensions.
pub fn apply_mask(img: &RgbaImage, mask: &GrayImage) -> RgbaImage {
    let (w, h) = img.dimensions();
    assert_eq!((w, h), mask.dimensions(), "mask size must match image size");
    let mut out = RgbaImage::new(w, h);

    for (x, y, pixel) in out.enumerate_pixels_mut() {
        let [r, g, b, _] = img.get_pixel(x, y).0;
        let alpha = mask.get_pixel(x, y)[0];
        *pixel = Rgba([r, g, b, alpha]);
    }

    out
}
