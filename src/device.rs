use core::fmt::{Display, Formatter};
use std::sync::{Mutex, MutexGuard, PoisonError};

use embedded_hal::i2c::SevenBitAddress;
use log::{debug, info, warn};

use crate::bus::{Bus, I2c};
use crate::calibration::CalibrationCoefficients;
use crate::compensation::{compensate, CompensatedSample};
use crate::config::Configuration;
use crate::error::Bme280Error;
use crate::protocol::RegisterProtocol;
use crate::register::chip_id::{ChipId, BME280_CHIP_ID};
use crate::register::config::Config;
use crate::register::ctrl_hum::CtrlHum;
use crate::register::ctrl_meas::CtrlMeas;
use crate::register::data::Data;
use crate::register::reset::{Reset, SoftReset};
use crate::register::status::{Status, StatusFlags};
use crate::register::{Readable, Writable};
use crate::Bme280Result;

/// Type alias for a Bme280 chip communicating over I2C
pub type Bme280I2c<T> = Bme280<I2c<T>>;

/// Logical I2C bus the sensor is attached to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BusNumber {
    Bus0,
    Bus1,
}

impl TryFrom<u8> for BusNumber {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(BusNumber::Bus0),
            1 => Ok(BusNumber::Bus1),
            other => Err(other),
        }
    }
}

impl From<BusNumber> for u8 {
    fn from(value: BusNumber) -> Self {
        match value {
            BusNumber::Bus0 => 0,
            BusNumber::Bus1 => 1,
        }
    }
}

/// The two I2C addresses a BME280 can answer on, selected by the SDO pin.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Address {
    /// SDO is connected to GND (0x76)
    Primary,
    /// SDO is connected to VDDIO (0x77)
    Secondary,
}

impl TryFrom<u8> for Address {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0x76 => Ok(Address::Primary),
            0x77 => Ok(Address::Secondary),
            other => Err(other),
        }
    }
}

impl From<Address> for SevenBitAddress {
    fn from(value: Address) -> Self {
        match value {
            Address::Primary => 0x76,
            Address::Secondary => 0x77,
        }
    }
}

/// Identity of one sensor: bus number and address. Rendered as `I2C_<bus>_<hex address>`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DeviceId {
    bus: BusNumber,
    address: Address,
}

impl DeviceId {
    pub const fn new(bus: BusNumber, address: Address) -> Self {
        Self { bus, address }
    }

    /// Validates a raw bus number and address.
    ///
    /// The bus number is checked first, so `(7, 0x10)` reports the bus number.
    pub fn from_raw<E>(bus_number: u8, address: u8) -> Bme280Result<Self, E> {
        let bus = BusNumber::try_from(bus_number)
            .map_err(|bus_number| Bme280Error::InvalidBusNumber { bus_number })?;
        let address =
            Address::try_from(address).map_err(|address| Bme280Error::InvalidAddress { address })?;

        Ok(Self { bus, address })
    }

    pub fn bus(&self) -> BusNumber {
        self.bus
    }

    pub fn address(&self) -> Address {
        self.address
    }
}

impl Display for DeviceId {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "I2C_{}_{:x}",
            u8::from(self.bus),
            SevenBitAddress::from(self.address)
        )
    }
}

/// Open/Closed guard. Coefficients exist exactly while the device is open.
#[derive(Copy, Clone, Debug)]
enum State {
    Closed,
    Open(CalibrationCoefficients),
}

impl State {
    fn name(&self) -> &'static str {
        match self {
            State::Closed => "closed",
            State::Open(_) => "open",
        }
    }
}

struct Inner<B> {
    protocol: RegisterProtocol<B>,
    state: State,
}

/// Main Bme280 driver struct
///
/// All methods take `&self`: a single lock per device serializes `open`, `close` and every
/// bus transfer, so one instance can be shared between threads behind an `Arc` (see
/// [`Registry`](crate::Registry)).
pub struct Bme280<B> {
    id: DeviceId,
    configuration: Configuration,
    inner: Mutex<Inner<B>>,
}

impl<T> Bme280I2c<T>
where
    T: embedded_hal::i2c::I2c,
{
    /// Constructs a new, closed, Bme280 driver instance that communicates over I2C
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use embedded_hal::i2c::I2c;
    /// # use bme280_rs::Bme280Result;
    ///  use bme280_rs::Bme280;
    /// # fn demo<I: I2c>(i2c: I) -> Bme280Result<(), I::Error> {
    ///
    ///  let device = Bme280::new_i2c(1, 0x76, i2c)?;
    ///  device.open()?;
    ///  let sample = device.sensor_values()?;
    ///  println!("{} °C {} %RH {} hPa", sample.temperature, sample.humidity, sample.pressure);
    /// # Ok(())
    /// # }
    /// ```
    pub fn new_i2c(bus_number: u8, address: u8, i2c: T) -> Bme280Result<Self, T::Error> {
        let id = DeviceId::from_raw(bus_number, address)?;

        Ok(Self::with_configuration(
            id,
            I2c::new(i2c, id.address.into()),
            Configuration::default(),
        ))
    }
}

impl<B> Bme280<B>
where
    B: Bus,
{
    /// Creates a closed device after validating the bus number and the address.
    ///
    /// Fails with [`Bme280Error::InvalidBusNumber`] or [`Bme280Error::InvalidAddress`]; the bus
    /// is not touched.
    pub fn new(bus_number: u8, address: u8, bus: B) -> Bme280Result<Self, B::Error> {
        let id = DeviceId::from_raw(bus_number, address)?;

        Ok(Self::with_configuration(id, bus, Configuration::default()))
    }

    /// Creates a closed device with the given measurement settings.
    pub fn with_configuration(id: DeviceId, bus: B, configuration: Configuration) -> Self {
        Self {
            id,
            configuration,
            inner: Mutex::new(Inner {
                protocol: RegisterProtocol::new(bus, id),
                state: State::Closed,
            }),
        }
    }

    // Every state transition is a single assignment, so a poisoned guard is still consistent.
    fn lock(&self) -> MutexGuard<'_, Inner<B>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    #[allow(clippy::type_complexity)]
    fn lock_open(
        &self,
    ) -> Bme280Result<(MutexGuard<'_, Inner<B>>, CalibrationCoefficients), B::Error> {
        let inner = self.lock();
        let state = inner.state;
        match state {
            State::Open(calibration) => Ok((inner, calibration)),
            State::Closed => Err(Bme280Error::NotOpen { device: self.id }),
        }
    }

    /// Identifies the chip and loads the calibration coefficients.
    ///
    /// Only the Closed to Open transition does any bus traffic; calling this on an open device
    /// returns `Ok(())` immediately. If the chip ID is not 0x60 or loading fails, the device
    /// stays closed.
    pub fn open(&self) -> Bme280Result<(), B::Error> {
        let mut inner = self.lock();
        debug!("[{}] before open - state: {}", self.id, inner.state.name());

        let result = Self::transition_open(&mut inner, self.id);

        debug!("[{}] after open - state: {}", self.id, inner.state.name());
        result
    }

    fn transition_open(inner: &mut Inner<B>, id: DeviceId) -> Bme280Result<(), B::Error> {
        if let State::Open(_) = inner.state {
            return Ok(());
        }

        let chip_id = inner.protocol.read::<ChipId>()?;
        if chip_id != BME280_CHIP_ID {
            warn!("[{}] unexpected chip id {:#04x}", id, chip_id);
            return Err(Bme280Error::ChipIdMismatch { device: id, chip_id });
        }

        let calibration = CalibrationCoefficients::load(&mut inner.protocol)?;
        debug!("[{}] {:?}", id, calibration);

        inner.state = State::Open(calibration);
        info!("[{}] opened", id);

        Ok(())
    }

    /// Drops the calibration coefficients and releases the bus handle.
    ///
    /// Only the Open to Closed transition releases the bus; closing a closed device is a no-op.
    /// The device counts as closed even if the release itself fails.
    pub fn close(&self) -> Bme280Result<(), B::Error> {
        let mut inner = self.lock();
        debug!("[{}] before close - state: {}", self.id, inner.state.name());

        let state = inner.state;
        let result = match state {
            State::Closed => Ok(()),
            State::Open(_) => {
                inner.state = State::Closed;
                inner.protocol.release().map(|_| info!("[{}] closed", self.id))
            }
        };

        debug!("[{}] after close - state: {}", self.id, inner.state.name());
        result
    }

    /// Triggers one forced conversion and returns the compensated result.
    ///
    /// Writes CTRL_HUM, CTRL_MEAS (forced mode) and CONFIG, in that order, then reads the 8
    /// data bytes in one burst. The whole sequence holds the device lock, so concurrent callers
    /// never interleave their transfers.
    ///
    /// Returns [`Bme280Error::NotOpen`] without touching the bus if the device is closed.
    pub fn sensor_values(&self) -> Bme280Result<CompensatedSample, B::Error> {
        let (mut inner, calibration) = self.lock_open()?;
        let protocol = &mut inner.protocol;

        protocol.write::<CtrlHum>(&self.configuration.humidity_oversampling)?;
        protocol.write::<CtrlMeas>(&self.configuration.ctrl_meas())?;
        protocol.write::<Config>(&self.configuration.config())?;

        let raw = protocol.read::<Data>()?;
        debug!(
            "[{}] adc_T: {} adc_P: {} adc_H: {}",
            self.id, raw.temperature, raw.pressure, raw.humidity
        );

        Ok(compensate(raw, &calibration))
    }

    /// Reads the STATUS (0xF3) register.
    pub fn status(&self) -> Bme280Result<StatusFlags, B::Error> {
        self.read::<Status>()
    }

    /// Runs the power-on-reset procedure by writing 0xB6 to RESET (0xE0).
    ///
    /// The calibration NVM is unaffected, so the device stays open. The measurement settings are
    /// rewritten by the next [`sensor_values`](Self::sensor_values) anyway.
    pub fn soft_reset(&self) -> Bme280Result<(), B::Error> {
        self.write::<Reset>(&SoftReset)
    }

    /// Read a register (or fixed-size register block) using a **typed marker**.
    ///
    /// You pass a marker type from [`crate::register`] (e.g. `register::status::Status`) and
    /// get back its decoded output type (`R::Out`). Requires an open device.
    pub fn read<R: Readable>(&self) -> Bme280Result<R::Out, B::Error> {
        let (mut inner, _) = self.lock_open()?;

        inner.protocol.read::<R>()
    }

    /// Write a register using a **typed marker**. Requires an open device.
    ///
    /// This performs a direct write of the provided fields, there is no read-modify-write.
    pub fn write<W: Writable>(&self, v: &W::In) -> Bme280Result<(), B::Error> {
        let (mut inner, _) = self.lock_open()?;

        inner.protocol.write::<W>(v)
    }

    /// Snapshot of the coefficients loaded by the last [`open`](Self::open), `None` while closed.
    pub fn calibration(&self) -> Option<CalibrationCoefficients> {
        match self.lock().state {
            State::Open(calibration) => Some(calibration),
            State::Closed => None,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self.lock().state, State::Open(_))
    }

    /// Consumes the driver and hands the bus back, whatever state the device is in.
    pub fn free(self) -> B {
        self.inner
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
            .protocol
            .into_inner()
    }
}

impl<B> Bme280<B> {
    pub fn id(&self) -> DeviceId {
        self.id
    }

    pub fn bus_number(&self) -> u8 {
        self.id.bus.into()
    }

    pub fn address(&self) -> SevenBitAddress {
        self.id.address.into()
    }

    /// `I2C_<bus>_<hex address>`, e.g. `I2C_1_76`.
    pub fn name(&self) -> String {
        self.id.to_string()
    }

    pub fn log_prefix(&self) -> String {
        format!("[{}] ", self.id)
    }

    pub fn configuration(&self) -> &Configuration {
        &self.configuration
    }
}
