use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, PoisonError};

use log::debug;

use crate::bus::Bus;
use crate::config::Configuration;
use crate::device::{Bme280, DeviceId};
use crate::error::{Bme280Error, Operation};
use crate::Bme280Result;

/// Process-wide table of devices, one shared instance per bus number and address.
///
/// ```rust
/// # use embedded_hal::i2c::I2c;
/// # use bme280_rs::{bus, Bme280Result, Registry};
/// # fn demo<I: I2c>(registry: &Registry<bus::I2c<I>>, i2c: I) -> Bme280Result<(), I::Error> {
/// let device = registry.get_or_connect(1, 0x76, |id| Ok(bus::I2c::new(i2c, id.address().into())))?;
/// device.open()?;
/// # Ok(()) }
/// ```
pub struct Registry<B> {
    devices: Mutex<BTreeMap<DeviceId, Arc<Bme280<B>>>>,
}

impl<B> Registry<B>
where
    B: Bus,
{
    pub const fn new() -> Self {
        Self {
            devices: Mutex::new(BTreeMap::new()),
        }
    }

    /// Returns the device registered for `(bus_number, address)`, creating it on first use.
    ///
    /// The identity is validated before anything else. `connect` is only called when no device
    /// exists yet; its failure is reported as [`Operation::Connect`] and nothing is registered.
    /// New devices start closed.
    pub fn get_or_connect<F>(
        &self,
        bus_number: u8,
        address: u8,
        connect: F,
    ) -> Bme280Result<Arc<Bme280<B>>, B::Error>
    where
        F: FnOnce(DeviceId) -> Result<B, B::Error>,
    {
        let id = DeviceId::from_raw(bus_number, address)?;

        let mut devices = self.devices.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(device) = devices.get(&id) {
            return Ok(Arc::clone(device));
        }

        let bus = connect(id).map_err(|source| Bme280Error::Bus {
            device: id,
            operation: Operation::Connect,
            source,
        })?;
        debug!("[{}] registered", id);

        let device = Arc::new(Bme280::with_configuration(id, bus, Configuration::default()));
        devices.insert(id, Arc::clone(&device));

        Ok(device)
    }

    /// Returns the device registered for `id`, if any.
    pub fn get(&self, id: DeviceId) -> Option<Arc<Bme280<B>>> {
        self.devices
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&id)
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.devices.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<B> Default for Registry<B>
where
    B: Bus,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::{Address, BusNumber};
    use crate::testing::{reference_bus, FakeBus};
    use std::cell::Cell;
    use test_log::test;

    #[test]
    fn same_identity_returns_same_instance() {
        let registry = Registry::new();
        let connects = Cell::new(0);
        let connect = |_: DeviceId| -> Result<FakeBus, ()> {
            connects.set(connects.get() + 1);
            Ok(reference_bus())
        };

        let first = registry.get_or_connect(1, 0x76, connect).unwrap();
        let second = registry.get_or_connect(1, 0x76, connect).unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(1, connects.get());
        assert_eq!(1, registry.len());
    }

    #[test]
    fn shared_instance_shares_state() {
        let registry = Registry::new();

        let first = registry.get_or_connect(0, 0x77, |_| Ok(reference_bus())).unwrap();
        first.open().unwrap();

        let second = registry.get_or_connect(0, 0x77, |_| Ok(reference_bus())).unwrap();
        assert!(second.is_open());
    }

    #[test]
    fn addresses_on_the_same_bus_are_distinct() {
        let registry = Registry::new();

        let primary = registry.get_or_connect(1, 0x76, |_| Ok(FakeBus::new())).unwrap();
        let secondary = registry.get_or_connect(1, 0x77, |_| Ok(FakeBus::new())).unwrap();

        assert!(!Arc::ptr_eq(&primary, &secondary));
        assert_eq!(0x76, primary.address());
        assert_eq!(0x77, secondary.address());
        assert_eq!(2, registry.len());
    }

    #[test]
    fn connect_receives_identity() {
        let registry = Registry::new();

        registry
            .get_or_connect(0, 0x77, |id| {
                assert_eq!(DeviceId::new(BusNumber::Bus0, Address::Secondary), id);
                Ok(FakeBus::new())
            })
            .unwrap();

        assert!(registry
            .get(DeviceId::new(BusNumber::Bus0, Address::Secondary))
            .is_some());
        assert!(registry
            .get(DeviceId::new(BusNumber::Bus0, Address::Primary))
            .is_none());
    }

    #[test]
    fn invalid_identity_does_not_connect() {
        let registry: Registry<FakeBus> = Registry::new();

        let err = registry
            .get_or_connect(2, 0x76, |_| panic!("must not connect"))
            .err()
            .unwrap();
        assert!(matches!(err, Bme280Error::InvalidBusNumber { bus_number: 2 }));

        let err = registry
            .get_or_connect(0, 0x42, |_| panic!("must not connect"))
            .err()
            .unwrap();
        assert!(matches!(err, Bme280Error::InvalidAddress { address: 0x42 }));
        assert!(registry.is_empty());
    }

    #[test]
    fn connect_failure_is_reported_and_not_registered() {
        let registry: Registry<FakeBus> = Registry::new();

        let err = registry.get_or_connect(1, 0x77, |_| Err(())).err().unwrap();
        assert!(matches!(err, Bme280Error::Bus { operation: Operation::Connect, .. }));
        assert_eq!("[I2C_1_77] failed to open bus: ()", err.to_string());
        assert!(registry.is_empty());

        let device = registry.get_or_connect(1, 0x77, |_| Ok(FakeBus::new())).unwrap();
        assert_eq!("I2C_1_77", device.name());
    }

    #[test]
    fn static_registry() {
        static REGISTRY: Registry<FakeBus> = Registry::new();

        let device = REGISTRY.get_or_connect(0, 0x76, |_| Ok(FakeBus::new())).unwrap();
        assert_eq!(0, device.bus_number());
    }
}
