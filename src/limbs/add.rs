use crate::constants::Limb;

/// Full adder on limbs: `(s, cout)` with `cout * 2^64 + s = a + b + cin`.
#[inline(always)]
pub(crate) fn adc(a: Limb, b: Limb, carry: Limb) -> (Limb, Limb) {
    let (s1, c1) = a.overflowing_add(b);
    let (s2, c2) = s1.overflowing_add(carry);
    (s2, c1 as Limb + c2 as Limb)
}

/// s = (a + b) mod 2^(64 * max(m, n)).
///
/// The shorter operand is read as if zero-extended. Limbs of `s` beyond
/// `max(m, n)` are left as they are.
pub fn add(s: &mut [Limb], a: &[Limb], b: &[Limb]) {
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    assert!(
        s.len() >= long.len(),
        "sum needs {} limbs, got {}",
        long.len(),
        s.len()
    );

    let mut carry = 0;
    for (i, (s_i, &x)) in s.iter_mut().zip(long).enumerate() {
        let y = short.get(i).copied().unwrap_or(0);
        let (sum, cout) = adc(x, y, carry);
        *s_i = sum;
        carry = cout;
    }
}

/// a += b in place, with b zero-extended to a's length; returns the carry
/// out of the top limb of `a`.
pub fn add_assign(a: &mut [Limb], b: &[Limb]) -> Limb {
    debug_assert!(a.len() >= b.len(), "expected {} >= {}", a.len(), b.len());
    let mut carry = 0;
    let (lo, hi) = a.split_at_mut(b.len());
    for (a_i, &b_i) in lo.iter_mut().zip(b) {
        let (sum, cout) = adc(*a_i, b_i, carry);
        *a_i = sum;
        carry = cout;
    }
    propagate_carry(hi, carry)
}

/// acc += b * 2^(64 * offset), truncated to `acc`; returns the lost carry.
pub fn add_assign_at(acc: &mut [Limb], offset: usize, b: &[Limb]) -> Limb {
    debug_assert!(offset + b.len() <= acc.len());
    add_assign(&mut acc[offset..], b)
}

/// a += d for a single limb `d`; returns the carry out.
pub fn add_limb_assign(a: &mut [Limb], d: Limb) -> Limb {
    propagate_carry(a, d)
}

fn propagate_carry(a: &mut [Limb], mut carry: Limb) -> Limb {
    for a_i in a.iter_mut() {
        if carry == 0 {
            break;
        }
        let (sum, cout) = a_i.overflowing_add(carry);
        *a_i = sum;
        carry = cout as Limb;
    }
    carry
}
