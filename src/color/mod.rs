mod packed;
mod wheel;

use smart_leds::RGB8;

pub use packed::{Color, pack, unpack};
pub use wheel::wheel;

pub type Rgb = RGB8;
