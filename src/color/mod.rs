mod hsl;
mod utils;

pub use hsl::hsl_to_rgb;
use smart_leds::RGB8;
pub use utils::{pack_rgb, rgb_from_u32, scale};

pub type Rgb = RGB8;
