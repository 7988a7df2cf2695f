//! Channel order of the LED strip wiring
//!
//! Strips from different vendors expect the three color bytes of a frame in
//! different orders. The mapping is a fixed table from mode to byte offsets.

const ORDER_NAME_RGB: &str = "rgb";
const ORDER_NAME_RBG: &str = "rbg";
const ORDER_NAME_GRB: &str = "grb";
const ORDER_NAME_GBR: &str = "gbr";
const ORDER_NAME_BRG: &str = "brg";
const ORDER_NAME_BGR: &str = "bgr";

const ORDER_ID_RGB: u8 = 0;
const ORDER_ID_RBG: u8 = 1;
const ORDER_ID_GRB: u8 = 2;
const ORDER_ID_GBR: u8 = 3;
const ORDER_ID_BRG: u8 = 4;
const ORDER_ID_BGR: u8 = 5;

/// Offsets of the red, green and blue bytes within a frame, indexed by mode.
///
/// Byte 0 of a frame is the brightness byte, so offsets are in `1..=3`.
const CHANNEL_OFFSETS: [[usize; 3]; 6] = [
    [1, 2, 3], // RGB
    [1, 3, 2], // RBG
    [2, 1, 3], // GRB
    [3, 1, 2], // GBR
    [2, 3, 1], // BRG
    [3, 2, 1], // BGR
];

/// Wire order of the color channels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[repr(u8)]
pub enum ChannelOrder {
    Rgb = ORDER_ID_RGB,
    Rbg = ORDER_ID_RBG,
    Grb = ORDER_ID_GRB,
    Gbr = ORDER_ID_GBR,
    Brg = ORDER_ID_BRG,
    #[default]
    Bgr = ORDER_ID_BGR,
}

impl ChannelOrder {
    pub const ALL: [Self; 6] = [
        Self::Rgb,
        Self::Rbg,
        Self::Grb,
        Self::Gbr,
        Self::Brg,
        Self::Bgr,
    ];

    pub const fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            ORDER_ID_RGB => Self::Rgb,
            ORDER_ID_RBG => Self::Rbg,
            ORDER_ID_GRB => Self::Grb,
            ORDER_ID_GBR => Self::Gbr,
            ORDER_ID_BRG => Self::Brg,
            ORDER_ID_BGR => Self::Bgr,
            _ => return None,
        })
    }

    /// Byte offsets of red, green and blue within a frame
    pub const fn offsets(self) -> [usize; 3] {
        CHANNEL_OFFSETS[self as usize]
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Rgb => ORDER_NAME_RGB,
            Self::Rbg => ORDER_NAME_RBG,
            Self::Grb => ORDER_NAME_GRB,
            Self::Gbr => ORDER_NAME_GBR,
            Self::Brg => ORDER_NAME_BRG,
            Self::Bgr => ORDER_NAME_BGR,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            ORDER_NAME_RGB => Some(Self::Rgb),
            ORDER_NAME_RBG => Some(Self::Rbg),
            ORDER_NAME_GRB => Some(Self::Grb),
            ORDER_NAME_GBR => Some(Self::Gbr),
            ORDER_NAME_BRG => Some(Self::Brg),
            ORDER_NAME_BGR => Some(Self::Bgr),
            _ => None,
        }
    }
}
