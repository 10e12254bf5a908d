use core::cmp::Ordering;

use log::trace;

use crate::constants::{Limb, RECIP_TEN_LOW, RECIP_TEN_TOP};
use crate::limbs::{add_assign, add_limb_assign, compare, is_zero, shift_left, sub, sub_assign};
use crate::mul::multiply;
use crate::scratch::Scratch;
use crate::size::{add_len, alloc_limbs, copy_limbs, fill_limbs};

/// floor(2^(64(n+2)) / 10) as n + 2 limbs.
pub fn reciprocal_of_ten(n: usize) -> Vec<Limb> {
    let len = add_len(n, 2);
    let mut r = alloc_limbs(len);
    fill_limbs(&mut r, RECIP_TEN_LOW);
    r[len - 1] = RECIP_TEN_TOP;
    r
}

/// Split `a` into `10 * q + r` with `r` in 0..=9; returns `r`.
///
/// `q` is first estimated as the high n limbs of `a * R`, `R` the
/// fixed-point reciprocal from [`reciprocal_of_ten`], then nudged up or down
/// until the remainder is a single digit.
pub fn divide_by_ten(q: &mut [Limb], a: &[Limb]) -> u32 {
    let n = a.len();
    assert!(n >= 1, "cannot divide an empty vector");
    assert_eq!(q.len(), n, "quotient needs {n} limbs");

    let recip = reciprocal_of_ten(n);
    let wide = add_len(n, 1);
    let prod_len = add_len(n, recip.len());
    let temps = add_len(add_len(wide, wide), add_len(wide, wide));

    let mut scratch = Scratch::new(add_len(prod_len, temps));
    let stack = scratch.stack();
    let (prod, stack) = stack.take(prod_len);
    let (a_ext, stack) = stack.take(wide);
    let (tenfold, stack) = stack.take(wide);
    let (diff, stack) = stack.take(wide);
    let (twofold, _) = stack.take(wide);

    multiply(prod, a, &recip);
    copy_limbs(q, &prod[n + 2..]);
    copy_limbs(a_ext, a);

    let mut corrections = 0usize;
    loop {
        // 10q = 8q + 2q, one limb wider than q so it cannot wrap.
        fill_limbs(tenfold, 0);
        copy_limbs(tenfold, q);
        copy_limbs(twofold, tenfold);
        shift_left(tenfold, 3);
        shift_left(twofold, 1);
        add_assign(tenfold, twofold);

        if compare(tenfold, a_ext) == Ordering::Greater {
            sub_assign(q, &[1]);
            corrections += 1;
            continue;
        }

        sub(diff, a_ext, tenfold);
        if !is_zero(&diff[1..]) || diff[0] > 9 {
            add_limb_assign(q, 1);
            corrections += 1;
            continue;
        }

        if corrections > 0 {
            trace!("divide_by_ten on {n} limbs took {corrections} corrections");
        }
        return diff[0] as u32;
    }
}
