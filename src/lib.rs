//! Blocking driver for the Bosch BME280 combined temperature, humidity and pressure sensor.
//!
//! The driver talks to the sensor through any [`embedded_hal::i2c::I2c`] implementation and
//! converts the raw readings with the vendor's fixed-point compensation formulas, bit for bit.
//!
//! A device starts closed. [`Bme280::open`] identifies the chip and loads the factory
//! calibration, [`Bme280::sensor_values`] triggers a forced conversion and [`Bme280::close`]
//! releases the bus again.
//!
//! ```rust
//! # use embedded_hal::i2c::I2c;
//! use bme280_rs::{Bme280, Bme280Result};
//! # fn demo<I: I2c>(i2c: I) -> Bme280Result<(), I::Error> {
//!
//! let device = Bme280::new_i2c(1, 0x76, i2c)?;
//! device.open()?;
//!
//! let sample = device.sensor_values()?;
//! println!("{:.2} °C, {:.1} %RH, {:.2} hPa", sample.temperature, sample.humidity, sample.pressure);
//!
//! device.close()?;
//! # Ok(())
//! # }
//! ```
//!
//! All diagnostics go through the [`log`] facade, prefixed with the device name
//! (`[I2C_1_76]`). Enable `trace` to see a hex dump of every register transfer.

pub mod bus;
pub mod calibration;
pub mod compensation;
pub mod config;
mod device;
pub mod error;
pub mod protocol;
pub mod register;
mod registry;

#[cfg(test)]
mod testing;

pub use compensation::CompensatedSample;
pub use config::Configuration;
pub use device::{Address, Bme280, Bme280I2c, BusNumber, DeviceId};
pub use error::Bme280Error;
pub use registry::Registry;

/// Type alias used to simplify return types throughout the driver
pub type Bme280Result<T, BusError> = Result<T, Bme280Error<BusError>>;
