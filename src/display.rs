//! Display controller identity and panel geometry
//!
//! The CYD panel is an ILI9341 behind an SPI interface, 240x320 in its
//! native portrait orientation.

use esp_idf_svc::hal::gpio::Level;
use mipidsi::models::ILI9341Rgb565;
use mipidsi::options::Rotation;

/// The one display controller variant this board carries
pub const MODEL: ILI9341Rgb565 = ILI9341Rgb565;

/// Panel width in pixels, native portrait orientation
pub const WIDTH: u16 = 240;
/// Panel height in pixels, native portrait orientation
pub const HEIGHT: u16 = 320;

/// Rotation applied by default; firmware may override per screen
pub const ROTATION: Rotation = Rotation::Deg0;

/// Level on [`crate::Pins::BL`] that turns the backlight on
pub const BACKLIGHT_ON: Level = Level::High;

/// Pixels in a full frame
pub const FRAME_PIXELS: usize = WIDTH as usize * HEIGHT as usize;
