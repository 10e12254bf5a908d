//! Karatsuba multiplication on power-of-two sizes.
//!
//! With `a = ah * B + al` and `b = bh * B + bl` for `B = 2^(64h)`:
//!
//! ```text
//! a * b = z2 * B^2 + z1 * B + z0
//! z0 = al * bl
//! z2 = ah * bh
//! z1 = al * bh + ah * bl = z0 + z2 - (ah - al)(bh - bl)
//! ```
//!
//! `(ah - al)(bh - bl)` is formed from absolute differences, so it is added
//! when exactly one of the differences is negative and subtracted otherwise.

use crate::constants::Limb;
use crate::limbs::{abs_diff, add_assign, add_assign_at, sub_assign};
use crate::scratch::ScratchStack;
use crate::size::copy_limbs;

use super::digit::mul_digits;

/// p = a * b for `t`-limb operands, `t` a power of two; `p` has 2t limbs.
///
/// `stack` must hold at least `karatsuba_scratch_len(t)` limbs.
pub fn karatsuba_square(p: &mut [Limb], a: &[Limb], b: &[Limb], stack: ScratchStack<'_>) {
    let t = a.len();
    debug_assert!(t.is_power_of_two(), "karatsuba needs a power of two, got {t}");
    debug_assert!(b.len() == t && p.len() == 2 * t);

    if t == 1 {
        let (hi, lo) = mul_digits(a[0], b[0]);
        p[0] = lo;
        p[1] = hi;
        return;
    }

    let h = t / 2;
    let (al, ah) = a.split_at(h);
    let (bl, bh) = b.split_at(h);

    let (s1, stack) = stack.take(h);
    let (s2, stack) = stack.take(h);
    let (w, stack) = stack.take(t);
    let (mid, mut stack) = stack.take(t + 1);

    let a_neg = abs_diff(s1, ah, al);
    let b_neg = abs_diff(s2, bh, bl);

    {
        let (z0, z2) = p.split_at_mut(t);
        karatsuba_square(z0, al, bl, stack.reborrow());
        karatsuba_square(z2, ah, bh, stack.reborrow());
    }
    karatsuba_square(w, s1, s2, stack.reborrow());

    // mid = z0 + z2 -/+ w; fits in t + 1 limbs and is never negative.
    copy_limbs(mid, &p[..t]);
    add_assign(mid, &p[t..]);
    if a_neg != b_neg {
        add_assign(mid, w);
    } else {
        sub_assign(mid, w);
    }

    let carry = add_assign_at(p, h, mid);
    debug_assert_eq!(carry, 0);
}
