//! Pixel-level conversions backing [`crate::FrameHandler`].

use image::{GrayImage, Luma, RgbImage};

use crate::frame_handler::ChannelOrder;

/// ITU-R BT.601 luma weights for red, green and blue.
const LUMA_WEIGHTS: [f64; 3] = [0.299, 0.587, 0.114];

/// Collapse three color channels into one luma channel.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn to_gray(frame: &RgbImage, order: ChannelOrder) -> GrayImage {
    let [wr, wg, wb] = LUMA_WEIGHTS;
    GrayImage::from_fn(frame.width(), frame.height(), |x, y| {
        let [a, g, c] = frame.get_pixel(x, y).0;
        let (r, b) = match order {
            ChannelOrder::Bgr => (c, a),
            ChannelOrder::Rgb => (a, c),
        };
        let luma = wr * f64::from(r) + wg * f64::from(g) + wb * f64::from(b);
        Luma([luma.round().clamp(0.0, 255.0) as u8])
    })
}

/// Downsample by pixel-area averaging.
///
/// Each output pixel is the mean of the source pixels it covers, weighted by
/// how much of each source pixel falls inside it. Only meant for shrinking.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::similar_names
)]
pub fn resize_area(src: &GrayImage, width: u32, height: u32) -> GrayImage {
    let scale_x = f64::from(src.width()) / f64::from(width);
    let scale_y = f64::from(src.height()) / f64::from(height);

    GrayImage::from_fn(width, height, |ox, oy| {
        let (x0, x1) = (f64::from(ox) * scale_x, f64::from(ox + 1) * scale_x);
        let (y0, y1) = (f64::from(oy) * scale_y, f64::from(oy + 1) * scale_y);
        let sx_end = (x1.ceil() as u32).min(src.width());
        let sy_end = (y1.ceil() as u32).min(src.height());

        let mut sum = 0.0;
        let mut weight = 0.0;
        for sy in (y0.floor() as u32)..sy_end {
            let wy = coverage(y0, y1, sy);
            for sx in (x0.floor() as u32)..sx_end {
                let w = coverage(x0, x1, sx) * wy;
                sum += w * f64::from(src.get_pixel(sx, sy)[0]);
                weight += w;
            }
        }
        let value = if weight > 0.0 { sum / weight } else { 0.0 };
        Luma([value.round().clamp(0.0, 255.0) as u8])
    })
}

/// Upsample by copying each source pixel into the output block it covers.
///
/// Output pixels take the source pixel under their center, so an integer
/// factor replicates every pixel into a `factor x factor` block. Only meant
/// for enlarging.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn enlarge_area(src: &GrayImage, width: u32, height: u32) -> GrayImage {
    GrayImage::from_fn(width, height, |ox, oy| {
        let sx = center_source(ox, src.width(), width);
        let sy = center_source(oy, src.height(), height);
        *src.get_pixel(sx, sy)
    })
}

#[allow(clippy::cast_possible_truncation)]
fn center_source(out: u32, src_len: u32, out_len: u32) -> u32 {
    let index = (2 * u64::from(out) + 1) * u64::from(src_len) / (2 * u64::from(out_len));
    (index as u32).min(src_len.saturating_sub(1))
}

/// Length of `[lo, hi)` that overlaps source cell `[cell, cell + 1)`.
fn coverage(lo: f64, hi: f64, cell: u32) -> f64 {
    let start = lo.max(f64::from(cell));
    let end = hi.min(f64::from(cell + 1));
    (end - start).max(0.0)
}
