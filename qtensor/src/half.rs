//! IEEE-754 half precision bit conversions
//!
//! Half values are carried as raw `u16` bit patterns. Both directions are
//! total over their input domain and never allocate.

const F16_EXP_MAX: u32 = 0x1F;
const F16_MANT_MASK: u32 = 0x3FF;
const F32_MANT_MASK: u32 = 0x7F_FFFF;

/// Convert an `f32` to half precision bits.
///
/// Mantissa bits below the ten that fit are dropped, not rounded. Any finite
/// value past the half range with a nonzero mantissa encodes as NaN, while an
/// exact power of two past the range encodes as infinity.
pub fn f32_to_f16(value: f32) -> u16 {
    let bits = value.to_bits();

    let sign = (bits >> 31) & 0x1;
    let exp = ((bits >> 23) & 0xFF) as i32 - 127 + 15;
    let mant = (bits >> 13) & F16_MANT_MASK;

    let out = if exp <= 0 {
        if exp < -10 {
            sign << 15
        } else {
            // Subnormal: restore the implicit 1 and shift it into the 10-bit field
            let mantissa = (bits & F32_MANT_MASK) | 0x80_0000;
            let shift = (14 - exp) as u32;
            (sign << 15) | ((mantissa >> shift) & F16_MANT_MASK)
        }
    } else if exp >= F16_EXP_MAX as i32 {
        let mut inf = (sign << 15) | (F16_EXP_MAX << 10);
        if bits & F32_MANT_MASK != 0 {
            inf |= 0x1;
        }
        inf
    } else {
        (sign << 15) | ((exp as u32) << 10) | mant
    };

    out as u16
}

/// Convert half precision bits to an `f32`. Exact for every non-NaN input.
pub fn f16_to_f32(half: u16) -> f32 {
    let half = half as u32;
    let sign = (half >> 15) & 0x1;
    let exp = (half >> 10) & F16_EXP_MAX;
    let mant = half & F16_MANT_MASK;

    let (out_exp, out_mant) = if exp == 0 {
        if mant == 0 {
            (0, 0)
        } else {
            // Subnormal: shift until the hidden bit appears at position 10
            let mut e = 0i32;
            let mut m = mant;
            while m & 0x400 == 0 {
                m <<= 1;
                e -= 1;
            }
            ((127 - 15 + 1 + e) as u32, (m & F16_MANT_MASK) << 13)
        }
    } else if exp == F16_EXP_MAX {
        (0xFF, mant << 13)
    } else {
        (exp + 127 - 15, mant << 13)
    };

    f32::from_bits((sign << 31) | (out_exp << 23) | out_mant)
}

/// Returns true if the half bit pattern is a NaN.
pub fn is_f16_nan(half: u16) -> bool {
    (half >> 10) & 0x1F == 0x1F && half & 0x3FF != 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_values_roundtrip() {
        for &x in &[1.0f32, -2.5, 0.0, 0.5, -0.0, 65504.0, 0.099975586, -1024.0] {
            let back = f16_to_f32(f32_to_f16(x));
            assert_eq!(back.to_bits(), x.to_bits(), "value {}", x);
        }
    }

    #[test]
    fn test_known_encodings() {
        assert_eq!(f32_to_f16(1.0), 0x3C00);
        assert_eq!(f32_to_f16(-2.0), 0xC000);
        assert_eq!(f32_to_f16(0.5), 0x3800);
        assert_eq!(f32_to_f16(65504.0), 0x7BFF);
        assert_eq!(f32_to_f16(-0.0), 0x8000);
    }

    #[test]
    fn test_infinity_and_nan() {
        assert_eq!(f32_to_f16(f32::INFINITY), 0x7C00);
        assert_eq!(f32_to_f16(f32::NEG_INFINITY), 0xFC00);
        assert!(is_f16_nan(f32_to_f16(f32::NAN)));

        assert_eq!(f16_to_f32(0x7C00), f32::INFINITY);
        assert_eq!(f16_to_f32(0xFC00), f32::NEG_INFINITY);
        assert!(f16_to_f32(0x7E00).is_nan());
    }

    #[test]
    fn test_overflow_keeps_mantissa_rule() {
        // 65536 is a power of two, 70000 is not
        assert_eq!(f32_to_f16(65536.0), 0x7C00);
        assert_eq!(f32_to_f16(70000.0), 0x7C01);
        assert_eq!(f32_to_f16(-1.0e10), 0xFC01);
    }

    #[test]
    fn test_truncates_instead_of_rounding() {
        // 1 + 2^-10 + 2^-11 would round up to 0x3C02 under round-to-nearest
        let x = 1.0 + 1.0 / 1024.0 + 1.0 / 2048.0;
        assert_eq!(f32_to_f16(x), 0x3C01);
        // Largest f32 below 2.0 truncates to the largest half below 2.0
        assert_eq!(f32_to_f16(f32::from_bits(0x3FFF_FFFF)), 0x3FFF);
    }

    #[test]
    fn test_subnormals() {
        let smallest = 2.0f32.powi(-24);
        assert_eq!(f32_to_f16(smallest), 0x0001);
        assert_eq!(f16_to_f32(0x0001), smallest);

        let largest_sub = 1023.0 * 2.0f32.powi(-24);
        assert_eq!(f32_to_f16(largest_sub), 0x03FF);
        assert_eq!(f16_to_f32(0x03FF), largest_sub);

        // Smallest normal half
        assert_eq!(f32_to_f16(2.0f32.powi(-14)), 0x0400);
        assert_eq!(f32_to_f16(-(2.0f32.powi(-15))), 0x8200);
    }

    #[test]
    fn test_underflow_to_signed_zero() {
        assert_eq!(f32_to_f16(1.0e-10), 0x0000);
        assert_eq!(f32_to_f16(-1.0e-10), 0x8000);
        assert_eq!(f32_to_f16(f32::MIN_POSITIVE), 0x0000);
        assert_eq!(f16_to_f32(0x8000).to_bits(), (-0.0f32).to_bits());
    }

    #[test]
    fn test_every_half_roundtrips() {
        for bits in 0..=u16::MAX {
            if is_f16_nan(bits) {
                continue;
            }
            assert_eq!(f32_to_f16(f16_to_f32(bits)), bits, "pattern {:#06x}", bits);
        }
    }
}
