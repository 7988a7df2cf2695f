#![allow(dead_code)]

use myrtio_apa102::{SpiMode, Transport};

/// Transport that records every byte and setup call
#[derive(Debug, Default)]
pub struct RecordingTransport {
    pub bytes: Vec<u8>,
    pub pins: Option<(u8, u8)>,
    pub frame_format: Option<(u8, SpiMode)>,
    pub frequency: Option<u32>,
}

impl RecordingTransport {
    /// Drain the recorded bytes
    pub fn take(&mut self) -> Vec<u8> {
        core::mem::take(&mut self.bytes)
    }
}

impl Transport for RecordingTransport {
    fn write_byte(&mut self, value: u8) {
        self.bytes.push(value);
    }

    fn set_pins(&mut self, data_pin: u8, clock_pin: u8) {
        self.pins = Some((data_pin, clock_pin));
    }

    fn set_frame_format(&mut self, bits: u8, mode: SpiMode) {
        self.frame_format = Some((bits, mode));
    }

    fn set_frequency(&mut self, hz: u32) {
        self.frequency = Some(hz);
    }
}
