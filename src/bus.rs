use embedded_hal::i2c::SevenBitAddress;

/// Largest single transfer issued by the driver (the temperature/pressure calibration block).
pub const MAX_REG_BYTES: usize = 24;

/// Register-addressed byte transport to one BME280.
///
/// Implementations only move bytes; framing, tracing and error wrapping happen in
/// [`RegisterProtocol`](crate::protocol::RegisterProtocol).
pub trait Bus {
    type Error;

    fn write_register(&mut self, reg: u8, value: u8) -> Result<(), Self::Error>;

    fn read_register(&mut self, reg: u8) -> Result<u8, Self::Error> {
        let mut buf = [0u8; 1];
        self.read_registers(reg, &mut buf)?;

        Ok(buf[0])
    }

    /// Burst read starting at `reg`. The BME280 auto-increments the register address.
    fn read_registers(&mut self, reg: u8, data: &mut [u8]) -> Result<(), Self::Error>;

    /// Releases the underlying bus handle. Called once per Open to Closed transition.
    fn release(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

pub struct I2c<I2cType> {
    i2c: I2cType,
    address: SevenBitAddress,
}

impl<I2cType> I2c<I2cType>
where
    I2cType: embedded_hal::i2c::I2c,
{
    pub fn new(i2c: I2cType, address: SevenBitAddress) -> Self {
        Self { i2c, address }
    }

    /// Gives the wrapped I2C peripheral back.
    pub fn into_inner(self) -> I2cType {
        self.i2c
    }
}

impl<I2cType> Bus for I2c<I2cType>
where
    I2cType: embedded_hal::i2c::I2c,
{
    type Error = <I2cType as embedded_hal::i2c::ErrorType>::Error;

    fn write_register(&mut self, reg: u8, value: u8) -> Result<(), Self::Error> {
        self.i2c.write(self.address, &[reg, value])?;

        Ok(())
    }

    fn read_registers(&mut self, reg: u8, data: &mut [u8]) -> Result<(), Self::Error> {
        self.i2c.write_read(self.address, &[reg], data)?;

        Ok(())
    }
}
