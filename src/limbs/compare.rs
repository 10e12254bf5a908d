use core::cmp::Ordering;

use itertools::Itertools;

use crate::constants::{Limb, LIMB_BITS};

/// Compare two vectors of the same declared length, most significant limb
/// first.
///
/// Panics if the lengths differ.
#[track_caller]
pub fn compare(a: &[Limb], b: &[Limb]) -> Ordering {
    assert_eq!(a.len(), b.len(), "comparing limb vectors of different lengths");
    for (x, y) in a.iter().rev().zip_eq(b.iter().rev()) {
        match x.cmp(y) {
            Ordering::Equal => continue,
            other => return other,
        }
    }
    Ordering::Equal
}

/// [`compare`] as -1 / 0 / 1.
pub fn comparison(a: &[Limb], b: &[Limb]) -> i32 {
    match compare(a, b) {
        Ordering::Less => -1,
        Ordering::Equal => 0,
        Ordering::Greater => 1,
    }
}

/// True iff every limb is zero; an empty vector is zero.
pub fn is_zero(a: &[Limb]) -> bool {
    a.iter().all(|&x| x == 0)
}

/// Leading zero bits from the top limb down. An all-zero vector of `n`
/// limbs has `64n`, an empty one has 0.
pub fn leading_zeros(a: &[Limb]) -> usize {
    let mut count = 0;
    for &limb in a.iter().rev() {
        if limb == 0 {
            count += LIMB_BITS;
        } else {
            count += limb.leading_zeros() as usize;
            break;
        }
    }
    count
}
