//! Factory calibration coefficients.
//!
//! The 18 coefficients are read once per [`Bme280::open`](crate::Bme280::open) and kept as an
//! immutable snapshot for as long as the device stays open.

use crate::bus::Bus;
use crate::protocol::RegisterProtocol;
use crate::register::calibration::{HumidityCalib, HumidityCalibH1, TempPressCalib};
use crate::Bme280Result;

/// Little-endian unsigned 16 bit value at `offset`. Both bytes are zero-extended.
pub fn unsigned_16_bits(data: &[u8], offset: usize) -> u16 {
    let byte0 = data[offset] as u16;
    let byte1 = data[offset + 1] as u16;

    (byte1 << 8) | byte0
}

/// Little-endian signed 16 bit value at `offset`.
///
/// The low byte is zero-extended, the high byte is sign-extended.
pub fn signed_16_bits(data: &[u8], offset: usize) -> i16 {
    let byte0 = data[offset] as i16;
    let byte1 = data[offset + 1] as i8 as i16;

    (byte1 << 8) | byte0
}

/// Factory-trimmed compensation coefficients (`dig_T*`, `dig_P*`, `dig_H*`).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct CalibrationCoefficients {
    pub dig_t1: u16,
    pub dig_t2: i16,
    pub dig_t3: i16,

    pub dig_p1: u16,
    pub dig_p2: i16,
    pub dig_p3: i16,
    pub dig_p4: i16,
    pub dig_p5: i16,
    pub dig_p6: i16,
    pub dig_p7: i16,
    pub dig_p8: i16,
    pub dig_p9: i16,

    pub dig_h1: u8,
    pub dig_h2: i16,
    pub dig_h3: u8,
    /// 12 bit, assembled from 0xE4 and the low nibble of 0xE5
    pub dig_h4: i16,
    /// 12 bit, assembled from 0xE6 and the high nibble of 0xE5
    pub dig_h5: i16,
    pub dig_h6: i8,
}

impl CalibrationCoefficients {
    /// Reads the three calibration regions:
    /// 1. one 24 byte burst from 0x88 (temperature and pressure)
    /// 2. one single-byte read of 0xA1 (`dig_H1`)
    /// 3. one 7 byte burst from 0xE1 (`dig_H2..H6`)
    pub fn load<B: Bus>(protocol: &mut RegisterProtocol<B>) -> Bme280Result<Self, B::Error> {
        let tp = protocol.read::<TempPressCalib>()?;
        let dig_h1 = protocol.read::<HumidityCalibH1>()?;
        let h = protocol.read::<HumidityCalib>()?;

        Ok(Self {
            dig_t1: tp.dig_t1,
            dig_t2: tp.dig_t2,
            dig_t3: tp.dig_t3,
            dig_p1: tp.dig_p1,
            dig_p2: tp.dig_p2,
            dig_p3: tp.dig_p3,
            dig_p4: tp.dig_p4,
            dig_p5: tp.dig_p5,
            dig_p6: tp.dig_p6,
            dig_p7: tp.dig_p7,
            dig_p8: tp.dig_p8,
            dig_p9: tp.dig_p9,
            dig_h1,
            dig_h2: h.dig_h2,
            dig_h3: h.dig_h3,
            dig_h4: h.dig_h4,
            dig_h5: h.dig_h5,
            dig_h6: h.dig_h6,
        })
    }
}
