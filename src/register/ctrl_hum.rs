//! ### CTRL_HUM - Humidity oversampling (`0xF2`, 1 byte, R/W)
//!
//! Only bits 2:0 are used. Changes become effective after the next write to
//! [`CtrlMeas`](super::ctrl_meas::CtrlMeas).
#![doc(alias = "CTRL_HUM")]
use crate::register::ctrl_meas::Oversampling;
use crate::register::{Reg, Writable};

/// Marker type for CTRL_HUM (0xF2) register
pub struct CtrlHum;
impl Reg for CtrlHum { const ADDR: u8 = 0xF2; }

impl Writable for CtrlHum {
    type In = Oversampling;

    fn encode(v: &Self::In) -> u8 {
        let osrs_h: u8 = (*v).into();
        osrs_h & 0b111
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ctrl_hum_encode() {
        assert_eq!(0x00, CtrlHum::encode(&Oversampling::Skipped));
        assert_eq!(0x01, CtrlHum::encode(&Oversampling::X1));
        assert_eq!(0x05, CtrlHum::encode(&Oversampling::X16));
    }
}
