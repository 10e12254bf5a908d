use core::cmp::Ordering;

use super::add::adc;
use super::compare::compare;
use crate::constants::Limb;

/// s = (a - b) mod 2^(64 * max(m, n)).
///
/// Computed as `a + !b + 1` over the zero-extended operands, so a negative
/// difference wraps to its two's-complement pattern. No borrow is reported.
pub fn sub(s: &mut [Limb], a: &[Limb], b: &[Limb]) {
    let k = a.len().max(b.len());
    assert!(s.len() >= k, "difference needs {} limbs, got {}", k, s.len());

    let mut carry = 1;
    for (i, s_i) in s[..k].iter_mut().enumerate() {
        let x = a.get(i).copied().unwrap_or(0);
        let y = !b.get(i).copied().unwrap_or(0);
        let (sum, cout) = adc(x, y, carry);
        *s_i = sum;
        carry = cout;
    }
}

/// a -= b in place, b zero-extended; returns 1 if the result wrapped.
pub fn sub_assign(a: &mut [Limb], b: &[Limb]) -> Limb {
    debug_assert!(a.len() >= b.len(), "expected {} >= {}", a.len(), b.len());
    let mut carry = 1;
    for (i, a_i) in a.iter_mut().enumerate() {
        let y = !b.get(i).copied().unwrap_or(0);
        let (sum, cout) = adc(*a_i, y, carry);
        *a_i = sum;
        carry = cout;
    }
    1 - carry
}

/// dst = |x - y| for equal-length `x`, `y`; returns true when `x < y`.
pub fn abs_diff(dst: &mut [Limb], x: &[Limb], y: &[Limb]) -> bool {
    debug_assert!(dst.len() == x.len() && x.len() == y.len());
    match compare(x, y) {
        Ordering::Less => {
            sub(dst, y, x);
            true
        }
        _ => {
            sub(dst, x, y);
            false
        }
    }
}
