use log::{debug, trace};

use super::WideFloat;
use crate::constants::{Limb, WIDEFLOAT_OVERHEAD};
use crate::limbs::{is_zero, leading_zeros, shift_left};
use crate::size::{add_len, alloc_limbs, copy_limbs, fill_limbs};

impl WideFloat {
    /// Set to `(-1)^sign * 2^e * m`, truncating the mantissa to this value's
    /// precision.
    ///
    /// An exponent above `i32::MAX` after normalization gives a signed
    /// infinity, one below `i32::MIN` a signed zero. A value with a 0-limb
    /// mantissa has no room for any bits and always becomes a signed zero.
    #[track_caller]
    pub fn set_from_scaled_integer(&mut self, sign: bool, e: i64, m: &[Limb]) {
        let dst_len = self.mantissa_size();
        let n = m.len();
        if dst_len == 0 || n == 0 || is_zero(m) {
            self.set_zero(sign);
            return;
        }

        // One spare limb so the normalizing shift is always to the left.
        let wide = add_len(n, 1);
        let mut t = alloc_limbs(wide);
        copy_limbs(&mut t, m);
        let shift = leading_zeros(&t) - WIDEFLOAT_OVERHEAD;
        shift_left(&mut t, shift);

        let ee = i128::from(e) - shift as i128 + Self::fraction_bits(wide);
        let exponent = match i32::try_from(ee) {
            Ok(x) => x,
            Err(_) if ee > 0 => {
                debug!("exponent {ee} overflows, rounding to infinity");
                self.set_infinity(sign);
                return;
            }
            Err(_) => {
                debug!("exponent {ee} underflows, rounding to zero");
                self.set_zero(sign);
                return;
            }
        };
        trace!("normalized {n} limbs by {shift} bits into {dst_len}, exponent {exponent}");

        self.class = super::FloatClass::Number;
        self.sign = sign;
        self.exponent = exponent;
        let dst = self.mantissa_mut();
        if dst_len >= wide {
            let (low, high) = dst.split_at_mut(dst_len - wide);
            fill_limbs(low, 0);
            copy_limbs(high, &t);
        } else {
            copy_limbs(dst, &t[wide - dst_len..]);
        }
    }

    /// Set to the unsigned integer `m`.
    #[track_caller]
    pub fn set_from_integer(&mut self, m: &[Limb]) {
        self.set_from_scaled_integer(false, 0, m);
    }
}
