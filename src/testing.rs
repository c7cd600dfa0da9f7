use crate::bus::{Bus, MAX_REG_BYTES};
use crate::calibration::CalibrationCoefficients;
use heapless::LinearMap;

/// Temperature/pressure block of the Bosch worked example.
pub const TEMP_PRESS_CALIB: [u8; 24] = [
    0x70, 0x6B, 0x43, 0x67, 0x18, 0xFC, 0x7D, 0x8E, 0x43, 0xD6, 0xD0, 0x0B, 0x27, 0x0B, 0x8C,
    0x00, 0xF9, 0xFF, 0x8C, 0x3C, 0xF8, 0xC6, 0x70, 0x17,
];
pub const HUMIDITY_CALIB_H1: u8 = 0x4B;
pub const HUMIDITY_CALIB: [u8; 7] = [0x6A, 0x01, 0x00, 0x13, 0x29, 0x03, 0x1E];

/// adc_P = 415148, adc_T = 519888, adc_H = 30000
pub const REFERENCE_DATA: [u8; 8] = [0x65, 0x5A, 0xC0, 0x7E, 0xED, 0x00, 0x75, 0x30];

#[derive(Debug)]
struct RegisterValue {
    bytes: [u8; MAX_REG_BYTES],
    len: usize,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Transfer {
    Read { reg: u8, len: usize },
    Write { reg: u8, value: u8 },
}

pub struct FakeBus {
    regs: LinearMap<(u8, usize), RegisterValue, 16>,
    once: heapless::Vec<((u8, usize), RegisterValue), 4>,
    transfers: Vec<Transfer>,
    releases: usize,
    fail_reads: bool,
    fail_writes: bool,
    fail_release: bool,
}

impl FakeBus {
    pub fn new() -> Self {
        FakeBus {
            regs: LinearMap::new(),
            once: heapless::Vec::new(),
            transfers: Vec::new(),
            releases: 0,
            fail_reads: false,
            fail_writes: false,
            fail_release: false,
        }
    }

    /// Answers reads of `data.len()` bytes at `reg` with `data`.
    pub fn with_response(&mut self, reg: u8, data: &[u8]) {
        let mut bytes = [0u8; MAX_REG_BYTES];
        bytes[..data.len()].copy_from_slice(data);
        self.regs
            .insert((reg, data.len()), RegisterValue { bytes, len: data.len() })
            .unwrap();
    }

    /// Answers the next read of `data.len()` bytes at `reg` with `data`, before any
    /// [`with_response`](Self::with_response) value for the same register.
    pub fn with_response_once(&mut self, reg: u8, data: &[u8]) {
        let mut bytes = [0u8; MAX_REG_BYTES];
        bytes[..data.len()].copy_from_slice(data);
        self.once
            .push(((reg, data.len()), RegisterValue { bytes, len: data.len() }))
            .unwrap();
    }

    pub fn fail_reads(&mut self) {
        self.fail_reads = true;
    }

    pub fn fail_writes(&mut self) {
        self.fail_writes = true;
    }

    /// Makes [`Bus::release`] fail. The attempt is still counted.
    pub fn fail_release(&mut self) {
        self.fail_release = true;
    }

    pub fn transfers(&self) -> &[Transfer] {
        &self.transfers
    }

    pub fn releases(&self) -> usize {
        self.releases
    }

    pub fn reads_of(&self, reg: u8) -> usize {
        self.transfers
            .iter()
            .filter(|t| matches!(t, Transfer::Read { reg: r, .. } if *r == reg))
            .count()
    }

    pub fn writes(&self) -> Vec<(u8, u8)> {
        self.transfers
            .iter()
            .filter_map(|t| match t {
                Transfer::Write { reg, value } => Some((*reg, *value)),
                Transfer::Read { .. } => None,
            })
            .collect()
    }
}

impl Bus for FakeBus {
    type Error = ();

    fn write_register(&mut self, reg: u8, value: u8) -> Result<(), Self::Error> {
        if self.fail_writes {
            return Err(());
        }
        self.transfers.push(Transfer::Write { reg, value });

        Ok(())
    }

    fn read_registers(&mut self, reg: u8, data: &mut [u8]) -> Result<(), Self::Error> {
        if self.fail_reads {
            return Err(());
        }
        self.transfers.push(Transfer::Read { reg, len: data.len() });

        if let Some(index) = self.once.iter().position(|(key, _)| *key == (reg, data.len())) {
            let (_, value) = self.once.remove(index);
            data.copy_from_slice(&value.bytes[..value.len]);
            return Ok(());
        }

        if let Some(value) = self.regs.get(&(reg, data.len())) {
            data.copy_from_slice(&value.bytes[..value.len]);
            return Ok(());
        }

        panic!("No mocked value for register 0x{:x} and length {}", reg, data.len())
    }

    fn release(&mut self) -> Result<(), Self::Error> {
        self.releases += 1;
        if self.fail_release {
            return Err(());
        }

        Ok(())
    }
}

/// Registers the three calibration regions of the worked example.
pub fn with_calibration(bus: &mut FakeBus) {
    bus.with_response(0x88, &TEMP_PRESS_CALIB);
    bus.with_response(0xA1, &[HUMIDITY_CALIB_H1]);
    bus.with_response(0xE1, &HUMIDITY_CALIB);
}

/// A bus that identifies as a BME280 and delivers the worked example on every conversion.
pub fn reference_bus() -> FakeBus {
    let mut bus = FakeBus::new();
    bus.with_response(0xD0, &[0x60]);
    with_calibration(&mut bus);
    bus.with_response(0xF7, &REFERENCE_DATA);

    bus
}

/// The coefficients encoded in [`TEMP_PRESS_CALIB`], [`HUMIDITY_CALIB_H1`] and [`HUMIDITY_CALIB`].
pub fn reference_calibration() -> CalibrationCoefficients {
    CalibrationCoefficients {
        dig_t1: 27504,
        dig_t2: 26435,
        dig_t3: -1000,
        dig_p1: 36477,
        dig_p2: -10685,
        dig_p3: 3024,
        dig_p4: 2855,
        dig_p5: 140,
        dig_p6: -7,
        dig_p7: 15500,
        dig_p8: -14600,
        dig_p9: 6000,
        dig_h1: 75,
        dig_h2: 362,
        dig_h3: 0,
        dig_h4: 313,
        dig_h5: 50,
        dig_h6: 30,
    }
}
