//! Errors that can occur when using the BME280 device.
//!
//! This module provides an error type that encapsulates all possible errors that can occur during communication with BME280.
//! It is generic over the underlying bus error type.

use core::fmt::{Debug, Display, Formatter};

use crate::device::DeviceId;

/// The bus operation that failed.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Operation {
    /// Reading one or more registers
    Read,
    /// Writing a register
    Write,
    /// Opening the bus handle for a device
    Connect,
    /// Releasing the bus handle on close
    Release,
}

impl Display for Operation {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Operation::Read => f.write_str("failed to read"),
            Operation::Write => f.write_str("failed to write"),
            Operation::Connect => f.write_str("failed to open bus"),
            Operation::Release => f.write_str("failed to close bus"),
        }
    }
}

/// This represents all possible errors that can occur when using the BME280 device.
#[derive(Debug)]
pub enum Bme280Error<BusError> {
    /// The bus number is neither 0 nor 1.
    InvalidBusNumber { bus_number: u8 },

    /// The I2C address is neither 0x76 nor 0x77.
    InvalidAddress { address: u8 },

    /// An error has occurred in the I2C driver.
    ///
    /// The device is not retried; any retry policy belongs to the caller.
    Bus {
        device: DeviceId,
        operation: Operation,
        source: BusError,
    },

    /// The CHIP_ID register did not contain 0x60.
    ///
    /// Could possibly indicate that another chip (e.g. a BMP280, 0x58) answers on this address.
    ChipIdMismatch { device: DeviceId, chip_id: u8 },

    /// The device has to be opened before it can be measured.
    NotOpen { device: DeviceId },
}

impl<BusError> Bme280Error<BusError> {
    /// Returns true for errors raised while validating the device identity.
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            Bme280Error::InvalidBusNumber { .. } | Bme280Error::InvalidAddress { .. }
        )
    }
}

impl<BusError: Debug> Display for Bme280Error<BusError> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Bme280Error::InvalidBusNumber { bus_number } => {
                write!(f, "bus number {} is not 0 or 1", bus_number)
            }
            Bme280Error::InvalidAddress { address } => {
                write!(f, "address {:#x} is not 0x76 or 0x77", address)
            }
            Bme280Error::Bus {
                device,
                operation,
                source,
            } => write!(f, "[{}] {}: {:?}", device, operation, source),
            Bme280Error::ChipIdMismatch { device, chip_id } => {
                write!(f, "[{}] chip id {:#04x} is not 0x60", device, chip_id)
            }
            Bme280Error::NotOpen { device } => write!(f, "[{}] device is not open", device),
        }
    }
}

impl<BusError: Debug> std::error::Error for Bme280Error<BusError> {}
