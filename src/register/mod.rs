//! Register catalog of the BME280.
//!
//! Every register (or fixed-size register block) the driver touches has a marker type here.
//! Markers carry their address and transfer length, and know how to decode the bytes read
//! from, or encode the byte written to, that register.
//!
//! | Marker | Address | Length | Access |
//! |---|---|---|---|
//! | [`calibration::TempPressCalib`] | 0x88 | 24 | R |
//! | [`calibration::HumidityCalibH1`] | 0xA1 | 1 | R |
//! | [`chip_id::ChipId`] | 0xD0 | 1 | R |
//! | [`reset::Reset`] | 0xE0 | 1 | W |
//! | [`calibration::HumidityCalib`] | 0xE1 | 7 | R |
//! | [`ctrl_hum::CtrlHum`] | 0xF2 | 1 | W |
//! | [`status::Status`] | 0xF3 | 1 | R |
//! | [`ctrl_meas::CtrlMeas`] | 0xF4 | 1 | W |
//! | [`config::Config`] | 0xF5 | 1 | W |
//! | [`data::Data`] | 0xF7 | 8 | R |

pub mod calibration;
pub mod chip_id;
pub mod config;
pub mod ctrl_hum;
pub mod ctrl_meas;
pub mod data;
pub mod reset;
pub mod status;

pub trait Reg { const ADDR: u8; }

pub trait Readable: Reg {
    type Out;
    /// Transfer length in bytes, `1..=`[`MAX_REG_BYTES`](crate::bus::MAX_REG_BYTES). Reading a
    /// marker outside that range is rejected at compile time.
    const N: usize = 1;
    fn decode(b: &[u8]) -> Self::Out;
}

pub trait Writable: Reg {
    type In;
    fn encode(v: &Self::In) -> u8;
}
