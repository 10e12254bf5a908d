use crate::constants::{Limb, LIMB_BITS};
use crate::size::{fill_limbs, move_limbs, try_size_multiply};

/// True when shifting by `k` bits clears all of `n` limbs.
fn clears_all(n: usize, k: usize) -> bool {
    // If 64n is not representable then k < 64n.
    try_size_multiply(n, LIMB_BITS).map_or(false, |width| k >= width)
}

/// a = (a * 2^k) mod 2^(64n), in place.
pub fn shift_left(a: &mut [Limb], k: usize) {
    if k == 0 {
        return;
    }
    if clears_all(a.len(), k) {
        fill_limbs(a, 0);
        return;
    }

    let n = a.len();
    let w = k / LIMB_BITS;
    let u = k % LIMB_BITS;

    if w > 0 {
        move_limbs(a, 0, w, n - w);
        fill_limbs(&mut a[..w], 0);
    }

    if u > 0 {
        let mut carry = 0;
        for limb in a[w..].iter_mut() {
            let out = *limb >> (LIMB_BITS - u);
            *limb = (*limb << u) | carry;
            carry = out;
        }
    }
}

/// a = floor(a / 2^k), in place, zero-filling from the top.
pub fn shift_right(a: &mut [Limb], k: usize) {
    if k == 0 {
        return;
    }
    if clears_all(a.len(), k) {
        fill_limbs(a, 0);
        return;
    }

    let n = a.len();
    let w = k / LIMB_BITS;
    let u = k % LIMB_BITS;

    if w > 0 {
        move_limbs(a, w, 0, n - w);
        fill_limbs(&mut a[n - w..], 0);
    }

    if u > 0 {
        let mut carry = 0;
        for limb in a[..n - w].iter_mut().rev() {
            let out = *limb << (LIMB_BITS - u);
            *limb = (*limb >> u) | carry;
            carry = out;
        }
    }
}
