//! Pin definitions for the CYD's ILI9341 panel and XPT2046 touch controller
//!
//! This module contains all GPIO pin assignments used in the hardware configuration.
//! The display and touch controllers share the HSPI bus and are selected by
//! their individual chip-select lines.

/// Pin configuration constants for the display and touch peripherals
pub struct Pins;

impl Pins {
    // SPI Display pins
    /// SPI Master In Slave Out
    pub const MISO: u8 = 12;
    /// SPI Master Out Slave In
    pub const MOSI: u8 = 13;
    /// SPI Clock pin
    pub const SCLK: u8 = 14;
    /// Chip Select pin for the display
    pub const CS: u8 = 15;
    /// Data/Command control pin (High for data, Low for command)
    pub const DC: u8 = 2;
    /// Reset pin. `None`: the panel reset is tied to the board EN line,
    /// so there is no GPIO to drive.
    pub const RST: Option<u8> = None;

    // Backlight
    /// Backlight control pin
    pub const BL: u8 = 21;

    // Touch controller (XPT2046)
    /// Touch controller Chip Select
    pub const TOUCH_CS: u8 = 33;
}

#[cfg(test)]
mod tests {
    use super::Pins;

    // GPIO 34-39 are input-only on the ESP32.
    const LAST_OUTPUT_CAPABLE: u8 = 33;
    const LAST_GPIO: u8 = 39;

    #[test]
    fn driven_pins_are_output_capable() {
        for pin in [
            Pins::MOSI,
            Pins::SCLK,
            Pins::CS,
            Pins::DC,
            Pins::BL,
            Pins::TOUCH_CS,
        ] {
            assert!(pin <= LAST_OUTPUT_CAPABLE, "pin {pin} cannot be an output");
        }
        if let Some(rst) = Pins::RST {
            assert!(rst <= LAST_OUTPUT_CAPABLE);
        }
    }

    #[test]
    fn miso_is_a_legal_gpio() {
        assert!(Pins::MISO <= LAST_GPIO);
    }

    #[test]
    fn chip_selects_are_distinct() {
        assert_ne!(Pins::CS, Pins::TOUCH_CS);
    }
}
