use crate::color::Rgb;

/// Pack RGB channels into a u32 color (0xRRGGBB format)
#[allow(clippy::cast_lossless)]
pub const fn pack_rgb(r: u8, g: u8, b: u8) -> u32 {
    ((r as u32) << 16) | ((g as u32) << 8) | (b as u32)
}

/// Create an RGB color from a u32 value (0xRRGGBB format)
pub const fn rgb_from_u32(color: u32) -> Rgb {
    Rgb {
        r: ((color >> 16) & 0xFF) as u8,
        g: ((color >> 8) & 0xFF) as u8,
        b: (color & 0xFF) as u8,
    }
}

/// Scale a u32 color by a brightness factor (0-255 = 0.0-1.0)
///
/// Each channel is multiplied by `brightness / 255` and rounded to the
/// nearest integer. Exact halves cannot occur because 255 is odd, so no
/// tie-breaking rule is needed.
pub const fn scale(color: u32, brightness: u8) -> Rgb {
    let unpacked = rgb_from_u32(color);
    Rgb {
        r: scale_channel(unpacked.r, brightness),
        g: scale_channel(unpacked.g, brightness),
        b: scale_channel(unpacked.b, brightness),
    }
}

#[inline]
#[allow(clippy::cast_lossless, clippy::cast_possible_truncation)]
const fn scale_channel(value: u8, brightness: u8) -> u8 {
    ((value as u32 * brightness as u32 + 127) / 255) as u8
}
