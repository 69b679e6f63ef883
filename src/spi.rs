//! SPI bus selection, clock rates and transfer settings
//!
//! The panel is stable at 40 MHz on the CYD; reads run at half that because
//! the ILI9341 cannot source data as fast as it sinks it. The XPT2046 has a
//! much lower conversion-clock ceiling.

use esp_idf_svc::hal::spi::{Dma, SpiConfig, SpiDriverConfig};
use esp_idf_svc::hal::units::Hertz;

/// Write clock for display transfers
pub const SPI_FREQUENCY: Hertz = Hertz(40_000_000);
/// Clock used when reading back from the display controller
pub const SPI_READ_FREQUENCY: Hertz = Hertz(20_000_000);
/// Clock for the XPT2046 touch controller
pub const SPI_TOUCH_FREQUENCY: Hertz = Hertz(2_500_000);

/// Whether transfers go through a DMA channel (`spi-dma` feature)
pub const DMA_ENABLED: bool = cfg!(feature = "spi-dma");

// Largest transfer the driver hands to a DMA channel in one descriptor.
const DMA_BUFFER_SIZE: usize = 4096;

/// Hardware SPI peripheral the display and touch controllers hang off
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SpiPort {
    /// SPI2 host
    Hspi,
    /// SPI3 host
    Vspi,
}

impl SpiPort {
    /// esp-idf host id (`spi_host_device_t`) for this port
    pub const fn host_id(self) -> u8 {
        match self {
            SpiPort::Hspi => 1,
            SpiPort::Vspi => 2,
        }
    }
}

/// Port both controllers are wired to on the CYD
pub const SPI_PORT: SpiPort = SpiPort::Hspi;

/// Bus-level driver settings shared by every device on the port
pub fn driver_config() -> SpiDriverConfig {
    let dma = if DMA_ENABLED {
        Dma::Auto(DMA_BUFFER_SIZE)
    } else {
        Dma::Disabled
    };
    SpiDriverConfig::new().dma(dma)
}

/// Device settings for display writes
/// (Mode0 is the esp-idf-hal default, no need to set it explicitly)
pub fn display_config() -> SpiConfig {
    SpiConfig::new().baudrate(SPI_FREQUENCY)
}

/// Device settings for display read-backs; esp-idf has no split read clock,
/// so consumers reconfigure the device with this before reading
pub fn read_config() -> SpiConfig {
    SpiConfig::new().baudrate(SPI_READ_FREQUENCY)
}

/// Device settings for the touch controller
pub fn touch_config() -> SpiConfig {
    SpiConfig::new().baudrate(SPI_TOUCH_FREQUENCY)
}

#[cfg(test)]
mod tests {
    use super::*;

    // ESP32 SPI master ceiling.
    const MAX_MASTER_HZ: u32 = 80_000_000;
    // XPT2046 conversion-clock ceiling.
    const MAX_TOUCH_HZ: u32 = 2_500_000;

    #[test]
    fn clocks_are_within_supported_ranges() {
        assert!(SPI_FREQUENCY.0 > 0 && SPI_FREQUENCY.0 <= MAX_MASTER_HZ);
        assert!(SPI_READ_FREQUENCY.0 > 0 && SPI_READ_FREQUENCY.0 <= SPI_FREQUENCY.0);
        assert!(SPI_TOUCH_FREQUENCY.0 > 0 && SPI_TOUCH_FREQUENCY.0 <= MAX_TOUCH_HZ);
    }

    #[test]
    fn hspi_maps_to_spi2_host() {
        assert_eq!(SPI_PORT.host_id(), 1);
        assert_eq!(SpiPort::Vspi.host_id(), 2);
    }
}
