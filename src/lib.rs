//! Board configuration for the ESP32-2432S028R "Cheap Yellow Display"
//!
//! The CYD is an ESP32 dev board with an [ILI9341 240x320 TFT and an XPT2046
//! resistive touch controller](https://github.com/witnessmenow/ESP32-Cheap-Yellow-Display)
//! sharing the HSPI bus. This crate is the single place the wiring and bus
//! settings live: pin numbers, clock rates, driver identity, and the
//! font/feature toggles, all fixed at build time.
//!
//! There is no driver code here. The values are consumed by whatever display
//! stack the firmware uses, e.g. `mipidsi` for the panel.
//!
//! ### Usage
//!
//! 1. take [`Pins`] and the [`spi`] configs when bringing up the SPI bus,
//! 1. hand [`display::MODEL`], [`display::WIDTH`] and [`display::HEIGHT`]
//!    to the display driver builder,
//! 1. optionally call [`validate`] once at startup to catch a bad edit to
//!    this table before it turns into silent garbage on the panel.

pub mod display;
pub mod fonts;
pub mod pins;
pub mod spi;

pub use crate::pins::Pins;
pub use crate::spi::SpiPort;

use anyhow::{ensure, Result};

/// Tag naming this configuration, for boot logs and bug reports
pub const SETUP_INFO: &str = "CYD_ILI9341";

// GPIO 34-39 are input-only on the ESP32.
const LAST_OUTPUT_CAPABLE: u8 = 33;
const LAST_GPIO: u8 = 39;

/// Checks the constant table against what the ESP32 and the attached
/// controllers can actually do. A failure here means this file was edited
/// for a different board revision and left inconsistent.
pub fn validate() -> Result<()> {
    for (name, pin) in [
        ("MOSI", Pins::MOSI),
        ("SCLK", Pins::SCLK),
        ("CS", Pins::CS),
        ("DC", Pins::DC),
        ("BL", Pins::BL),
        ("TOUCH_CS", Pins::TOUCH_CS),
    ] {
        ensure!(
            pin <= LAST_OUTPUT_CAPABLE,
            "{name} pin {pin} is not output-capable on the ESP32"
        );
    }
    ensure!(
        Pins::MISO <= LAST_GPIO,
        "MISO pin {} is not an ESP32 GPIO",
        Pins::MISO
    );
    if let Some(rst) = Pins::RST {
        ensure!(
            rst <= LAST_OUTPUT_CAPABLE,
            "RST pin {rst} is not output-capable on the ESP32"
        );
    }
    ensure!(
        Pins::CS != Pins::TOUCH_CS,
        "display and touch chip-selects share GPIO {}",
        Pins::CS
    );

    ensure!(
        spi::SPI_FREQUENCY.0 > 0 && spi::SPI_FREQUENCY.0 <= 80_000_000,
        "display clock {} Hz outside the ESP32 SPI master range",
        spi::SPI_FREQUENCY.0
    );
    ensure!(
        spi::SPI_READ_FREQUENCY.0 > 0 && spi::SPI_READ_FREQUENCY.0 <= spi::SPI_FREQUENCY.0,
        "read clock {} Hz exceeds the write clock",
        spi::SPI_READ_FREQUENCY.0
    );
    ensure!(
        spi::SPI_TOUCH_FREQUENCY.0 > 0 && spi::SPI_TOUCH_FREQUENCY.0 <= 2_500_000,
        "touch clock {} Hz exceeds the XPT2046 ceiling",
        spi::SPI_TOUCH_FREQUENCY.0
    );

    Ok(())
}

/// Logs the active configuration once, the firmware's boot banner for this
/// board. Bind a logger (e.g. `EspLogger`) before calling.
pub fn log_configuration() {
    log::info!("Board setup: {SETUP_INFO}");
    log::info!(
        "Display: ILI9341 {}x{} on {:?} @ {} Hz (read {} Hz), DMA {}",
        display::WIDTH,
        display::HEIGHT,
        spi::SPI_PORT,
        spi::SPI_FREQUENCY.0,
        spi::SPI_READ_FREQUENCY.0,
        if spi::DMA_ENABLED { "on" } else { "off" },
    );
    log::info!(
        "Pins: MISO={} MOSI={} SCLK={} CS={} DC={} RST={:?} BL={}",
        Pins::MISO,
        Pins::MOSI,
        Pins::SCLK,
        Pins::CS,
        Pins::DC,
        Pins::RST,
        Pins::BL,
    );
    log::info!(
        "Touch: XPT2046 CS={} @ {} Hz",
        Pins::TOUCH_CS,
        spi::SPI_TOUCH_FREQUENCY.0,
    );
    log::info!(
        "Fonts: glcd={} 16px={} 26px={} 48px-num={} 7seg={} 75px={} free={} smooth={}",
        fonts::GLCD,
        fonts::FONT_16PX,
        fonts::FONT_26PX,
        fonts::FONT_48PX_NUMERIC,
        fonts::FONT_7SEG,
        fonts::FONT_75PX,
        fonts::FREE_FONTS,
        fonts::SMOOTH_FONT,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shipped_table_passes_validation() {
        validate().unwrap();
    }
}
