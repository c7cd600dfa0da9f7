//! Fixed-point compensation of raw ADC values (BME280 datasheet section 4.2.3).
//!
//! Temperature and humidity use 32 bit integer arithmetic, pressure uses 64 bit. All
//! intermediate results wrap like two's-complement machine integers, so every value matches
//! the vendor reference bit for bit, including the overflowing corner cases.

use crate::calibration::CalibrationCoefficients;

/// Upper bound of the humidity intermediate, 100 %RH in Q22.10 shifted left by 12.
pub const HUMIDITY_FIXED_MAX: i32 = 419_430_400;

/// Uncompensated ADC readings of one conversion.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RawSample {
    /// 20 bit
    pub pressure: u32,
    /// 20 bit
    pub temperature: u32,
    /// 16 bit
    pub humidity: u32,
}

/// Compensated values in physical units.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CompensatedSample {
    /// °C, resolution 0.01
    pub temperature: f32,
    /// %RH
    pub humidity: f32,
    /// hPa, exactly 0 if the pressure calibration is degenerate
    pub pressure: f32,
}

#[cfg(feature = "uom")]
impl CompensatedSample {
    pub fn temperature_uom(&self) -> uom::si::f32::ThermodynamicTemperature {
        use uom::si::thermodynamic_temperature::{degree_celsius, ThermodynamicTemperature};
        ThermodynamicTemperature::new::<degree_celsius>(self.temperature)
    }

    pub fn pressure_uom(&self) -> uom::si::f32::Pressure {
        use uom::si::pressure::{hectopascal, Pressure};
        Pressure::new::<hectopascal>(self.pressure)
    }

    pub fn humidity_uom(&self) -> uom::si::f32::Ratio {
        use uom::si::ratio::{percent, Ratio};
        Ratio::new::<percent>(self.humidity)
    }
}

/// Compensates one conversion. Pure: no I/O, no state.
pub fn compensate(raw: RawSample, cal: &CalibrationCoefficients) -> CompensatedSample {
    let (t_fine, temperature) = compensate_temperature(raw.temperature as i32, cal);

    CompensatedSample {
        temperature,
        humidity: compensate_humidity(raw.humidity as i32, t_fine, cal),
        pressure: compensate_pressure(raw.pressure as i32, t_fine, cal),
    }
}

/// Returns `(t_fine, temperature in °C)`.
///
/// `t_fine` is the fine resolution temperature shared with the pressure and humidity formulas.
pub fn compensate_temperature(adc_t: i32, cal: &CalibrationCoefficients) -> (i32, f32) {
    let t1 = cal.dig_t1 as i32;
    let t2 = cal.dig_t2 as i32;
    let t3 = cal.dig_t3 as i32;

    let var1 = ((adc_t >> 3).wrapping_sub(t1 << 1)).wrapping_mul(t2) >> 11;
    let delta = (adc_t >> 4).wrapping_sub(t1);
    let var2 = ((delta.wrapping_mul(delta) >> 12).wrapping_mul(t3)) >> 14;

    let t_fine = var1.wrapping_add(var2);
    let centi_celsius = t_fine.wrapping_mul(5).wrapping_add(128) >> 8;

    (t_fine, centi_celsius as f32 / 100.0)
}

/// Returns the pressure in hPa, or exactly 0 when the calibration denominator is 0.
pub fn compensate_pressure(adc_p: i32, t_fine: i32, cal: &CalibrationCoefficients) -> f32 {
    let p1 = cal.dig_p1 as i64;
    let p2 = cal.dig_p2 as i64;
    let p3 = cal.dig_p3 as i64;
    let p4 = cal.dig_p4 as i64;
    let p5 = cal.dig_p5 as i64;
    let p6 = cal.dig_p6 as i64;
    let p7 = cal.dig_p7 as i64;
    let p8 = cal.dig_p8 as i64;
    let p9 = cal.dig_p9 as i64;

    let mut var1 = (t_fine as i64) - 128_000;
    let mut var2 = var1.wrapping_mul(var1).wrapping_mul(p6);
    var2 = var2.wrapping_add(var1.wrapping_mul(p5).wrapping_shl(17));
    var2 = var2.wrapping_add(p4.wrapping_shl(35));
    var1 = (var1.wrapping_mul(var1).wrapping_mul(p3) >> 8)
        .wrapping_add(var1.wrapping_mul(p2).wrapping_shl(12));
    var1 = ((1i64 << 47).wrapping_add(var1)).wrapping_mul(p1) >> 33;

    if var1 == 0 {
        return 0.0;
    }

    let p = 1_048_576 - adc_p as i64;
    let p = p
        .wrapping_shl(31)
        .wrapping_sub(var2)
        .wrapping_mul(3125)
        .wrapping_div(var1);
    let var1 = p9.wrapping_mul(p >> 13).wrapping_mul(p >> 13) >> 25;
    let var2 = p8.wrapping_mul(p) >> 19;

    // Q24.8 Pa
    let pressure = (p.wrapping_add(var1).wrapping_add(var2) >> 8).wrapping_add(p7 << 4);

    pressure as f32 / 256.0 / 100.0
}

/// Returns the humidity intermediate clamped to `[0, HUMIDITY_FIXED_MAX]`.
///
/// Values outside the range are normal for inputs near 0 %RH or 100 %RH and are not errors.
pub fn compensate_humidity_fixed(adc_h: i32, t_fine: i32, cal: &CalibrationCoefficients) -> i32 {
    let h1 = cal.dig_h1 as i32;
    let h2 = cal.dig_h2 as i32;
    let h3 = cal.dig_h3 as i32;
    let h4 = cal.dig_h4 as i32;
    let h5 = cal.dig_h5 as i32;
    let h6 = cal.dig_h6 as i32;

    let v = t_fine.wrapping_sub(76_800);

    let offset = adc_h
        .wrapping_shl(14)
        .wrapping_sub(h4.wrapping_shl(20))
        .wrapping_sub(h5.wrapping_mul(v))
        .wrapping_add(16_384)
        >> 15;
    let h6_term = v.wrapping_mul(h6) >> 10;
    let h3_term = (v.wrapping_mul(h3) >> 11).wrapping_add(32_768);
    let scale = (h6_term.wrapping_mul(h3_term) >> 10)
        .wrapping_add(2_097_152)
        .wrapping_mul(h2)
        .wrapping_add(8_192)
        >> 14;

    let v = offset.wrapping_mul(scale);
    let v = v.wrapping_sub(((v >> 15).wrapping_mul(v >> 15) >> 7).wrapping_mul(h1) >> 4);

    v.clamp(0, HUMIDITY_FIXED_MAX)
}

/// Returns the relative humidity in %RH.
pub fn compensate_humidity(adc_h: i32, t_fine: i32, cal: &CalibrationCoefficients) -> f32 {
    (compensate_humidity_fixed(adc_h, t_fine, cal) >> 12) as f32 / 1024.0
}
