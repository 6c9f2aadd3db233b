//! Fixed-point HSL to RGB conversion
//!
//! All arithmetic is integer math scaled by 100 (percent units) and 256
//! (channel units) to avoid fractional loss on targets without an FPU.

/// Convert an HSL triple to a packed u32 color (0xRRGGBB format)
///
/// `h` is taken modulo 360 degrees, `s` and `l` are clamped to 0..=99.
/// Output channels are masked with `& 0xFF` rather than saturated; an
/// out-of-range sector intermediate wraps. This matches the wire-format
/// codec the buffer contents are compared against.
#[allow(clippy::cast_sign_loss)]
pub fn hsl_to_rgb(h: i32, s: i32, l: i32) -> u32 {
    let h = h.rem_euclid(360);
    let s = s.clamp(0, 99);
    let l = l.clamp(0, 99);

    // Chroma in channel units, 0..=255
    let c = ((100 - (2 * l - 100).abs()) * s) * 256 / 10_000;
    // Hue sector 0..=5 and position within the sector, 0..=255
    let h1 = h / 60;
    let h2 = (h - h1 * 60) * 256 / 60;
    let temp = (((h1 % 2) << 8) + h2 - 256).abs();
    // Second largest component of the color
    let x = (c * (256 - temp)) >> 8;

    let (r1, g1, b1) = match h1 {
        0 => (c, x, 0),
        1 => (x, c, 0),
        2 => (0, c, x),
        3 => (0, x, c),
        4 => (x, 0, c),
        _ => (c, 0, x),
    };

    // Lightness offset added to every channel
    let m = (((l * 2) << 8) / 100 - c) / 2;
    let r = r1 + m;
    let g = g1 + m;
    let b = b1 + m;

    (((r & 0xFF) as u32) << 16) | (((g & 0xFF) as u32) << 8) | ((b & 0xFF) as u32)
}
