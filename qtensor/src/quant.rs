use crate::buffer::try_with_len;
use crate::error::{Result, TensorError};

/// Largest magnitude an int8 value may take. The range is symmetric, so -128
/// is never produced.
pub const QMAX: i8 = 127;

/// Maximum absolute value over the buffer. NaN elements are skipped.
pub fn max_abs(x: &[f32]) -> f32 {
    let mut max = 0.0f32;
    for &val in x.iter() {
        let a = val.abs();
        if a > max {
            max = a;
        }
    }
    max
}

/// Symmetric scale `QMAX / max_abs` mapping the buffer onto [-127, 127].
pub fn symmetric_scale(x: &[f32]) -> Result<f32> {
    let max = max_abs(x);
    if max == 0.0 {
        return Err(TensorError::DegenerateScale);
    }
    Ok(QMAX as f32 / max)
}

/// Round to nearest, ties away from zero: shift by 0.5 toward the sign, then
/// truncate.
pub fn round_half_away(x: f32) -> i32 {
    let shifted = x + if x >= 0.0 { 0.5 } else { -0.5 };
    shifted as i32
}

pub fn saturate_i8(x: i32) -> i8 {
    x.clamp(-(QMAX as i32), QMAX as i32) as i8
}

/// Quantize one element with a precomputed scale.
pub fn quantize_value(x: f32, scale: f32) -> i8 {
    saturate_i8(round_half_away(x * scale))
}

/// Quantize a whole buffer into a freshly allocated int8 buffer.
///
/// Returns the buffer together with its scale. The input is only read, so a
/// failure leaves the caller's data as it was.
pub fn quantize_symmetric(x: &[f32]) -> Result<(Vec<i8>, f32)> {
    let scale = symmetric_scale(x)?;
    log::debug!("quantize: {} elements, scale {}", x.len(), scale);

    let mut out = try_with_len::<i8>(x.len())?;
    for (q, &val) in out.iter_mut().zip(x.iter()) {
        *q = quantize_value(val, scale);
    }
    Ok((out, scale))
}
