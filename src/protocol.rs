//! Register-level framing on top of a [`Bus`].
//!
//! Every transfer is dumped at `trace` level as `register payload...` in hex, and every bus
//! failure is wrapped into [`Bme280Error::Bus`] together with the device identity.

use core::fmt::{Display, Formatter};
use core::marker::PhantomData;

use log::{trace, warn};

use crate::bus::{Bus, MAX_REG_BYTES};
use crate::device::DeviceId;
use crate::error::{Bme280Error, Operation};
use crate::register::{Readable, Writable};
use crate::Bme280Result;

/// Lazily formatted hex dump of one transfer.
struct HexDump<'a> {
    reg: u8,
    data: &'a [u8],
}

impl Display for HexDump<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:02x}", self.reg)?;
        for byte in self.data {
            write!(f, " {:02x}", byte)?;
        }

        Ok(())
    }
}

/// Transfer length of the marker `R`, checked against the scratch buffer when `read::<R>` is
/// instantiated. A marker with `N == 0` or `N > MAX_REG_BYTES` does not build.
struct BlockLen<R>(PhantomData<R>);

impl<R: Readable> BlockLen<R> {
    const N: usize = {
        assert!(
            R::N >= 1 && R::N <= MAX_REG_BYTES,
            "register block must be 1..=MAX_REG_BYTES bytes long"
        );
        R::N
    };
}

pub struct RegisterProtocol<B> {
    bus: B,
    device: DeviceId,
}

impl<B> RegisterProtocol<B>
where
    B: Bus,
{
    pub fn new(bus: B, device: DeviceId) -> Self {
        Self { bus, device }
    }

    fn fail(&self, operation: Operation, source: B::Error) -> Bme280Error<B::Error> {
        warn!("[{}] {}", self.device, operation);

        Bme280Error::Bus {
            device: self.device,
            operation,
            source,
        }
    }

    pub fn write_register(&mut self, reg: u8, value: u8) -> Bme280Result<(), B::Error> {
        trace!("[{}] write: {}", self.device, HexDump { reg, data: &[value] });
        self.bus
            .write_register(reg, value)
            .map_err(|e| self.fail(Operation::Write, e))
    }

    pub fn read_register(&mut self, reg: u8) -> Bme280Result<u8, B::Error> {
        let value = self
            .bus
            .read_register(reg)
            .map_err(|e| self.fail(Operation::Read, e))?;
        trace!("[{}] read:  {}", self.device, HexDump { reg, data: &[value] });

        Ok(value)
    }

    /// Burst read of `data.len()` consecutive registers starting at `reg`.
    pub fn read_registers(&mut self, reg: u8, data: &mut [u8]) -> Bme280Result<(), B::Error> {
        self.bus
            .read_registers(reg, data)
            .map_err(|e| self.fail(Operation::Read, e))?;
        trace!("[{}] read:  {}", self.device, HexDump { reg, data });

        Ok(())
    }

    /// Reads and decodes the register (block) described by the marker `R`.
    ///
    /// Single-byte registers are read with a single-register transfer, everything else with
    /// one burst read of `R::N` bytes.
    pub fn read<R: Readable>(&mut self) -> Bme280Result<R::Out, B::Error> {
        let len = BlockLen::<R>::N;
        if len == 1 {
            let value = self.read_register(R::ADDR)?;
            return Ok(R::decode(&[value]));
        }

        let mut scratch = [0u8; MAX_REG_BYTES];
        let data = &mut scratch[..len];
        self.read_registers(R::ADDR, data)?;

        Ok(R::decode(data))
    }

    /// Encodes `v` and writes it to the register described by the marker `W`.
    pub fn write<W: Writable>(&mut self, v: &W::In) -> Bme280Result<(), B::Error> {
        self.write_register(W::ADDR, W::encode(v))
    }

    pub fn release(&mut self) -> Bme280Result<(), B::Error> {
        self.bus
            .release()
            .map_err(|e| self.fail(Operation::Release, e))
    }

    pub fn into_inner(self) -> B {
        self.bus
    }
}
