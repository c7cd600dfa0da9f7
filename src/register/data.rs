use crate::compensation::RawSample;
use crate::register::{Readable, Reg};

/// Marker struct for the measurement data registers (0xF7 - 0xFE).
///
/// Reading all 8 bytes in one burst guarantees that pressure, temperature and humidity belong
/// to the same conversion (datasheet section 4). The layout is big-endian per channel:
///
/// | Bytes | Channel | Width |
/// |---|---|---|
/// | 0..3 | pressure `msb lsb xlsb[7:4]` | 20 bit |
/// | 3..6 | temperature `msb lsb xlsb[7:4]` | 20 bit |
/// | 6..8 | humidity `msb lsb` | 16 bit |
///
/// This returns the raw uncompensated ADC values. For most use cases
/// [`Bme280::sensor_values()`](crate::Bme280::sensor_values) is what you want.
pub struct Data;
impl Reg for Data { const ADDR: u8 = 0xF7; }

fn adc_20_bits(b: &[u8]) -> u32 {
    ((b[0] as u32) << 16 | (b[1] as u32) << 8 | b[2] as u32) >> 4
}

impl Readable for Data {
    type Out = RawSample;

    const N: usize = 8;

    fn decode(b: &[u8]) -> Self::Out {
        RawSample {
            pressure: adc_20_bits(&b[0..3]),
            temperature: adc_20_bits(&b[3..6]),
            humidity: (b[6] as u32) << 8 | b[7] as u32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_decode() {
        let raw = Data::decode(&[0x65, 0x5A, 0xC0, 0x7E, 0xED, 0x00, 0x75, 0x30]);

        assert_eq!(415148, raw.pressure);
        assert_eq!(519888, raw.temperature);
        assert_eq!(30000, raw.humidity);
    }

    #[test]
    fn data_decode_drops_low_nibble_of_xlsb() {
        let raw = Data::decode(&[0xFF, 0xFF, 0xFF, 0x80, 0x00, 0x0F, 0xFF, 0xFF]);

        assert_eq!(0xFFFFF, raw.pressure);
        assert_eq!(0x80000, raw.temperature);
        assert_eq!(0xFFFF, raw.humidity);
    }
}
