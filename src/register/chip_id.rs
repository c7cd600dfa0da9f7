//! ### CHIP_ID - Chip identification number (`0xD0`, 1 byte, R)
//!
//! Contains the chip identification code, which will always be 0x60 for BME280.
//!
//! ### Examples
//! ```rust,no_run
//! # use bme280_rs::{Bme280, Bme280Result};
//! # use bme280_rs::bus::Bus;
//! # fn demo<B: Bus>(device: Bme280<B>) -> Bme280Result<(), B::Error> {
//! use bme280_rs::register::chip_id::ChipId;
//!
//! let id = device.read::<ChipId>()?;
//! println!("{:#x}", id);
//! # Ok(()) }
//! ```
#![doc(alias = "CHIP_ID")]
use crate::register::{Readable, Reg};

/// The value of CHIP_ID on every BME280.
pub const BME280_CHIP_ID: u8 = 0x60;

/// Marker struct for the CHIP_ID (0xD0) register
pub struct ChipId;
impl Reg for ChipId { const ADDR: u8 = 0xD0; }

impl Readable for ChipId {
    type Out = u8;
    fn decode(b: &[u8]) -> Self::Out {
        b[0]
    }
}
