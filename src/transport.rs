//! Serial transport abstraction
//!
//! The strip is clocked out over a two-wire serial bus (data + clock). The
//! driver only needs a blocking byte writer plus a one-time setup.

/// Default data (MOSI) pin
pub const DEFAULT_DATA_PIN: u8 = 15;
/// Default clock (SCK) pin
pub const DEFAULT_CLOCK_PIN: u8 = 13;
/// Bits per transmitted frame
pub const DEFAULT_FRAME_BITS: u8 = 8;
/// Default bus clock (1 MHz)
pub const DEFAULT_FREQUENCY_HZ: u32 = 1_000_000;

/// Serial bus clock polarity/phase mode
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[repr(u8)]
pub enum SpiMode {
    Mode0 = 0,
    Mode1 = 1,
    Mode2 = 2,
    #[default]
    Mode3 = 3,
}

/// Transport setup applied once when a strip is created
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TransportConfig {
    pub data_pin: u8,
    pub clock_pin: u8,
    pub frame_bits: u8,
    pub mode: SpiMode,
    pub frequency_hz: u32,
}

impl TransportConfig {
    pub const fn new() -> Self {
        Self {
            data_pin: DEFAULT_DATA_PIN,
            clock_pin: DEFAULT_CLOCK_PIN,
            frame_bits: DEFAULT_FRAME_BITS,
            mode: SpiMode::Mode3,
            frequency_hz: DEFAULT_FREQUENCY_HZ,
        }
    }
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Abstract serial transport
///
/// Implement this trait to support different hardware platforms.
/// The strip is generic over this trait.
pub trait Transport {
    /// Transmit one byte, blocking until it is sent
    fn write_byte(&mut self, value: u8);

    /// Route the bus to the given pins
    fn set_pins(&mut self, _data_pin: u8, _clock_pin: u8) {}

    /// Set bits per frame and clock mode
    fn set_frame_format(&mut self, _bits: u8, _mode: SpiMode) {}

    /// Set the bus clock frequency
    fn set_frequency(&mut self, _hz: u32) {}

    /// Apply a full transport setup
    fn configure(&mut self, config: &TransportConfig) {
        self.set_pins(config.data_pin, config.clock_pin);
        self.set_frame_format(config.frame_bits, config.mode);
        self.set_frequency(config.frequency_hz);
    }
}
