use crate::register::{Readable, Reg};

/// Marker struct for the STATUS (0xF3) register
///
/// - **Length:** 1 byte
/// - **Access:** Read-only
///
/// Used with [`Bme280::read::<Status>()`](crate::Bme280::read) or the convenience method
/// [`Bme280::status`](crate::Bme280::status).
pub struct Status;

impl Reg for Status { const ADDR: u8 = 0xF3; }

const MEASURING_BIT: u8 = 0b0000_1000;
const IM_UPDATE_BIT: u8 = 0b0000_0001;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct StatusFlags {
    measuring: bool,
    im_update: bool,
}

impl StatusFlags {
    pub fn new(measuring: bool, im_update: bool) -> Self {
        Self { measuring, im_update }
    }

    /// Is a conversion running?
    ///
    /// Goes back to [`false`] once the results have been transferred to the data registers.
    pub fn measuring(&self) -> bool { self.measuring }

    /// Is the NVM data being copied to the image registers?
    ///
    /// Happens at power-on-reset and before every conversion.
    pub fn im_update(&self) -> bool { self.im_update }
}

impl Readable for Status {
    type Out = StatusFlags;
    fn decode(b: &[u8]) -> Self::Out {
        StatusFlags {
            measuring: (b[0] & MEASURING_BIT) != 0,
            im_update: (b[0] & IM_UPDATE_BIT) != 0,
        }
    }
}
