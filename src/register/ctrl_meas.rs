//! ### CTRL_MEAS - Temperature/pressure oversampling and mode (`0xF4`, 1 byte, R/W)
//!
//! | Bits | Field | Meaning |
//! |---|---|---|
//! | 7:5 | `osrs_t` | temperature oversampling |
//! | 4:2 | `osrs_p` | pressure oversampling |
//! | 1:0 | `mode` | sleep / forced / normal |
//!
//! Writing this register is what makes a pending [`CtrlHum`](super::ctrl_hum::CtrlHum) write
//! effective, so it always comes after it.
#![doc(alias = "CTRL_MEAS")]
use crate::register::{Reg, Writable};

/// Marker type for CTRL_MEAS (0xF4) register
pub struct CtrlMeas;
impl Reg for CtrlMeas { const ADDR: u8 = 0xF4; }

/// The payload for the CTRL_MEAS (0xF4) register.
#[derive(Copy, Clone, Debug)]
pub struct CtrlMeasFields {
    pub osrs_t: Oversampling,
    pub osrs_p: Oversampling,
    pub mode: Mode,
}

impl Writable for CtrlMeas {
    type In = CtrlMeasFields;

    fn encode(v: &Self::In) -> u8 {
        let osrs_t: u8 = v.osrs_t.into();
        let osrs_p: u8 = v.osrs_p.into();
        let mode: u8 = v.mode.into();
        (osrs_t << 5) | (osrs_p << 2) | mode
    }
}

/// Oversampling of one measurement channel.
///
/// The same 3-bit code is used by `osrs_h`, `osrs_t` and `osrs_p`.
/// A skipped channel reads back as 0x80000 (0x8000 for humidity).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Oversampling {
    Skipped,
    X1,
    X2,
    X4,
    X8,
    X16,
}

impl From<Oversampling> for u8 {
    fn from(value: Oversampling) -> Self {
        match value {
            Oversampling::Skipped => 0b000,
            Oversampling::X1 => 0b001,
            Oversampling::X2 => 0b010,
            Oversampling::X4 => 0b011,
            Oversampling::X8 => 0b100,
            Oversampling::X16 => 0b101,
        }
    }
}

/// Sensor power mode.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Mode {
    /// No measurements are performed.
    Sleep,
    /// One measurement cycle, then back to sleep.
    Forced,
    /// Continuous cycling between measurement and standby.
    Normal,
}

impl From<Mode> for u8 {
    fn from(value: Mode) -> Self {
        match value {
            Mode::Sleep => 0b00,
            Mode::Forced => 0b01,
            Mode::Normal => 0b11,
        }
    }
}
