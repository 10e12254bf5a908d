use crate::constants::Limb;

const LO32: Limb = 0xFFFF_FFFF;

/// Widening 64×64→128 multiply built from four 32-bit partial products;
/// returns `(hi, lo)` with `hi * 2^64 + lo = a * b`.
#[inline]
pub fn mul_digits(a: Limb, b: Limb) -> (Limb, Limb) {
    let (ah, al) = (a >> 32, a & LO32);
    let (bh, bl) = (b >> 32, b & LO32);

    let hh = ah * bh;
    let hl = ah * bl;
    let lh = al * bh;
    let ll = al * bl;

    // Middle column: three 32-bit quantities, at most 3 * (2^32 - 1).
    let mid = (ll >> 32) + (hl & LO32) + (lh & LO32);

    let lo = (ll & LO32) | (mid << 32);
    let hi = hh + (hl >> 32) + (lh >> 32) + (mid >> 32);
    (hi, lo)
}

/// p = a * b for an n-limb `a` and a single limb `b`; `p` has n + 1 limbs.
pub fn mul_rectangular(p: &mut [Limb], a: &[Limb], b: Limb) {
    assert_eq!(p.len(), a.len() + 1, "rectangular product needs n + 1 limbs");

    let mut carry = 0;
    for (p_i, &a_i) in p.iter_mut().zip(a) {
        let (hi, lo) = mul_digits(a_i, b);
        let (sum, c) = lo.overflowing_add(carry);
        *p_i = sum;
        // hi <= 2^64 - 2, so this never wraps.
        carry = hi + c as Limb;
    }
    p[a.len()] = carry;
}
