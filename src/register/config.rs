//! ### CONFIG - Standby time and IIR filter (`0xF5`, 1 byte, R/W)
//!
//! | Bits | Field | Meaning |
//! |---|---|---|
//! | 7:5 | `t_sb` | inactive duration in normal mode |
//! | 4:2 | `filter` | IIR filter time constant |
//! | 0 | `spi3w_en` | 3-wire SPI, always 0 here |
#![doc(alias = "CONFIG")]
use crate::register::{Reg, Writable};

/// Marker type for CONFIG (0xF5) register
pub struct Config;
impl Reg for Config { const ADDR: u8 = 0xF5; }

/// The payload for the CONFIG (0xF5) register.
#[derive(Copy, Clone, Debug)]
pub struct ConfigFields {
    pub standby_time: StandbyTime,
    pub filter: Filter,
}

impl Writable for Config {
    type In = ConfigFields;

    fn encode(v: &Self::In) -> u8 {
        let t_sb: u8 = v.standby_time.into();
        let filter: u8 = v.filter.into();
        (t_sb << 5) | (filter << 2)
    }
}

/// IIR filter coefficient.
///
/// Smooths short-term pressure and temperature disturbances. Humidity is not filtered.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Filter {
    Off,
    X2,
    X4,
    X8,
    X16,
}

impl From<Filter> for u8 {
    fn from(value: Filter) -> Self {
        match value {
            Filter::Off => 0b000,
            Filter::X2 => 0b001,
            Filter::X4 => 0b010,
            Filter::X8 => 0b011,
            Filter::X16 => 0b100,
        }
    }
}

/// Inactive duration between two measurements in normal mode.
///
/// Note that the codes are not ordered by duration: 10 ms and 20 ms come last.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum StandbyTime {
    Ms0_5,
    Ms62_5,
    Ms125,
    Ms250,
    Ms500,
    Ms1000,
    Ms10,
    Ms20,
}

impl From<StandbyTime> for u8 {
    fn from(value: StandbyTime) -> Self {
        match value {
            StandbyTime::Ms0_5 => 0b000,
            StandbyTime::Ms62_5 => 0b001,
            StandbyTime::Ms125 => 0b010,
            StandbyTime::Ms250 => 0b011,
            StandbyTime::Ms500 => 0b100,
            StandbyTime::Ms1000 => 0b101,
            StandbyTime::Ms10 => 0b110,
            StandbyTime::Ms20 => 0b111,
        }
    }
}
