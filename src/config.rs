//! Measurement settings written before every forced conversion.
//!
//! ```
//! use bme280_rs::config::{Configuration, Filter, Oversampling};
//!
//! let config = Configuration::default()
//!     .pressure_oversampling(Oversampling::X4)
//!     .filter(Filter::X4);
//! ```

pub use crate::register::config::{Filter, StandbyTime};
pub use crate::register::ctrl_meas::Oversampling;

use crate::register::config::ConfigFields;
use crate::register::ctrl_meas::{CtrlMeasFields, Mode};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Configuration {
    pub(crate) humidity_oversampling: Oversampling,
    pub(crate) temperature_oversampling: Oversampling,
    pub(crate) pressure_oversampling: Oversampling,
    pub(crate) standby_time: StandbyTime,
    pub(crate) filter: Filter,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            humidity_oversampling: Oversampling::X1,
            temperature_oversampling: Oversampling::X1,
            pressure_oversampling: Oversampling::X1,
            standby_time: StandbyTime::Ms0_5,
            filter: Filter::Off,
        }
    }
}

impl Configuration {
    pub fn humidity_oversampling(mut self, humidity_oversampling: Oversampling) -> Self {
        self.humidity_oversampling = humidity_oversampling;

        self
    }

    /// Temperature is needed to compensate pressure and humidity, so skipping it makes both of
    /// them meaningless.
    pub fn temperature_oversampling(mut self, temperature_oversampling: Oversampling) -> Self {
        self.temperature_oversampling = temperature_oversampling;

        self
    }

    pub fn pressure_oversampling(mut self, pressure_oversampling: Oversampling) -> Self {
        self.pressure_oversampling = pressure_oversampling;

        self
    }

    /// Only relevant in normal mode. Forced conversions ignore it, but the register is still
    /// written with this value.
    pub fn standby_time(mut self, standby_time: StandbyTime) -> Self {
        self.standby_time = standby_time;

        self
    }

    pub fn filter(mut self, filter: Filter) -> Self {
        self.filter = filter;

        self
    }

    /// Recommended settings from the BME280 datasheet, section 3.5.
    pub fn from_preset(p: Preset) -> Self {
        match p {
            Preset::WeatherMonitoring => Configuration::default(),
            Preset::HumiditySensing => Configuration::default()
                .pressure_oversampling(Oversampling::Skipped),
            Preset::IndoorNavigation => Configuration::default()
                .pressure_oversampling(Oversampling::X16)
                .temperature_oversampling(Oversampling::X2)
                .filter(Filter::X16),
            Preset::Gaming => Configuration::default()
                .pressure_oversampling(Oversampling::X4)
                .humidity_oversampling(Oversampling::Skipped)
                .filter(Filter::X16),
        }
    }

    pub fn humidity(&self) -> Oversampling {
        self.humidity_oversampling
    }

    pub fn temperature(&self) -> Oversampling {
        self.temperature_oversampling
    }

    pub fn pressure(&self) -> Oversampling {
        self.pressure_oversampling
    }

    pub(crate) fn ctrl_meas(&self) -> CtrlMeasFields {
        CtrlMeasFields {
            osrs_t: self.temperature_oversampling,
            osrs_p: self.pressure_oversampling,
            mode: Mode::Forced,
        }
    }

    pub(crate) fn config(&self) -> ConfigFields {
        ConfigFields {
            standby_time: self.standby_time,
            filter: self.filter,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Preset {
    WeatherMonitoring,
    HumiditySensing,
    IndoorNavigation,
    Gaming,
}
