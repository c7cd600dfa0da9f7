//! ### Calibration NVM (`0x88..0xA1` and `0xE1..0xE7`, R)
//!
//! The factory trimming values are spread over three regions:
//!
//! | Marker | Address | Length | Coefficients |
//! |---|---|---|---|
//! | [`TempPressCalib`] | 0x88 | 24 | `dig_T1..T3`, `dig_P1..P9`, little-endian 16 bit |
//! | [`HumidityCalibH1`] | 0xA1 | 1 | `dig_H1` |
//! | [`HumidityCalib`] | 0xE1 | 7 | `dig_H2..H6`, H4/H5 packed as 12 bit |
//!
//! Most users never read these directly; [`CalibrationCoefficients::load`](crate::calibration::CalibrationCoefficients::load)
//! combines them.
use crate::calibration::{signed_16_bits, unsigned_16_bits};
use crate::register::{Readable, Reg};

pub struct TempPressCalib;
impl Reg for TempPressCalib { const ADDR: u8 = 0x88; }

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TempPressNvm {
    pub(crate) dig_t1: u16,
    pub(crate) dig_t2: i16,
    pub(crate) dig_t3: i16,
    pub(crate) dig_p1: u16,
    pub(crate) dig_p2: i16,
    pub(crate) dig_p3: i16,
    pub(crate) dig_p4: i16,
    pub(crate) dig_p5: i16,
    pub(crate) dig_p6: i16,
    pub(crate) dig_p7: i16,
    pub(crate) dig_p8: i16,
    pub(crate) dig_p9: i16,
}

impl Readable for TempPressCalib {
    type Out = TempPressNvm;

    const N: usize = 24;
    fn decode(b: &[u8]) -> Self::Out {
        TempPressNvm {
            dig_t1: unsigned_16_bits(b, 0),
            dig_t2: signed_16_bits(b, 2),
            dig_t3: signed_16_bits(b, 4),
            dig_p1: unsigned_16_bits(b, 6),
            dig_p2: signed_16_bits(b, 8),
            dig_p3: signed_16_bits(b, 10),
            dig_p4: signed_16_bits(b, 12),
            dig_p5: signed_16_bits(b, 14),
            dig_p6: signed_16_bits(b, 16),
            dig_p7: signed_16_bits(b, 18),
            dig_p8: signed_16_bits(b, 20),
            dig_p9: signed_16_bits(b, 22),
        }
    }
}

pub struct HumidityCalibH1;
impl Reg for HumidityCalibH1 { const ADDR: u8 = 0xA1; }

impl Readable for HumidityCalibH1 {
    type Out = u8;
    fn decode(b: &[u8]) -> Self::Out {
        b[0]
    }
}

pub struct HumidityCalib;
impl Reg for HumidityCalib { const ADDR: u8 = 0xE1; }

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HumidityNvm {
    pub(crate) dig_h2: i16,
    pub(crate) dig_h3: u8,
    pub(crate) dig_h4: i16,
    pub(crate) dig_h5: i16,
    pub(crate) dig_h6: i8,
}

impl Readable for HumidityCalib {
    type Out = HumidityNvm;

    const N: usize = 7;
    fn decode(b: &[u8]) -> Self::Out {
        // 0xE4 holds H4[11:4], 0xE5 holds H5[3:0] | H4[3:0], 0xE6 holds H5[11:4]
        HumidityNvm {
            dig_h2: signed_16_bits(b, 0),
            dig_h3: b[2],
            dig_h4: ((b[3] as i16) << 4) | (b[4] & 0x0F) as i16,
            dig_h5: ((b[5] as i16) << 4) | (b[4] >> 4) as i16,
            dig_h6: b[6] as i8,
        }
    }
}
