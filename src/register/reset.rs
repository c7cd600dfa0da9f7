//! ### RESET - Soft reset (`0xE0`, 1 byte, W)
//!
//! Writing 0xB6 runs the complete power-on-reset procedure. Any other value has no effect.
//! The calibration NVM is not affected.
#![doc(alias = "RESET")]
use crate::register::{Reg, Writable};

const SOFT_RESET_COMMAND: u8 = 0xB6;

/// Marker type for RESET (0xE0) register
pub struct Reset;
impl Reg for Reset { const ADDR: u8 = 0xE0; }

/// The only command the RESET register accepts.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SoftReset;

impl Writable for Reset {
    type In = SoftReset;

    fn encode(_v: &Self::In) -> u8 {
        SOFT_RESET_COMMAND
    }
}
