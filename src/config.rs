use crate::channel_order::ChannelOrder;
use crate::transport::TransportConfig;

/// Brightness applied to a freshly created strip
pub const DEFAULT_BRIGHTNESS: u8 = 1;

/// Configuration for a root strip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StripConfig {
    /// Number of pixels, capped at the store capacity
    pub pixel_count: usize,
    /// Wire order of the color channels
    pub order: ChannelOrder,
    /// Initial global brightness (0-31)
    pub brightness: u8,
    /// One-time transport setup
    pub transport: TransportConfig,
}

impl StripConfig {
    pub const fn new(pixel_count: usize, order: ChannelOrder) -> Self {
        Self {
            pixel_count,
            order,
            brightness: DEFAULT_BRIGHTNESS,
            transport: TransportConfig::new(),
        }
    }

    #[must_use]
    pub const fn with_brightness(mut self, brightness: u8) -> Self {
        self.brightness = brightness;
        self
    }

    #[must_use]
    pub const fn with_transport(mut self, transport: TransportConfig) -> Self {
        self.transport = transport;
        self
    }
}
