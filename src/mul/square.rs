use log::{debug, trace};

use crate::config::MulConfig;
use crate::constants::Limb;
use crate::limbs::add_assign;
use crate::scratch::{karatsuba_scratch_len, Scratch};
use crate::size::{add_len, copy_limbs, fill_limbs};

use super::digit::mul_digits;
use super::karatsuba::karatsuba_square;
use super::multiply_with_config;

/// floor(log2(x)) for x >= 1.
#[inline]
pub(crate) fn floor_log2(x: usize) -> u32 {
    debug_assert!(x != 0);
    usize::BITS - 1 - x.leading_zeros()
}

/// r = sum of `x * 2^(64 * offset)` over `terms`, mod 2^(64 * r.len()).
pub fn sum_positional(r: &mut [Limb], terms: &[(&[Limb], usize)]) {
    fill_limbs(r, 0);
    for &(x, offset) in terms {
        if offset >= r.len() {
            continue;
        }
        let room = r.len() - offset;
        let x = &x[..x.len().min(room)];
        add_assign(&mut r[offset..], x);
    }
}

/// p = a * b for two m-limb operands; `p` has 2m limbs.
///
/// Power-of-two sizes go straight to Karatsuba. Other sizes are padded to
/// the next power of two, unless that size would reach past
/// `config.split_boundary`, in which case the operands are cut there.
pub(crate) fn multiply_square(p: &mut [Limb], a: &[Limb], b: &[Limb], config: &MulConfig) {
    let m = a.len();
    debug_assert!(b.len() == m && p.len() == 2 * m);

    match m {
        0 => return,
        1 => {
            let (hi, lo) = mul_digits(a[0], b[0]);
            p[0] = lo;
            p[1] = hi;
            return;
        }
        _ => {}
    }

    let t = 1usize << floor_log2(m);
    if m == t {
        trace!("karatsuba on {m} limbs");
        let mut scratch = Scratch::new(karatsuba_scratch_len(t));
        karatsuba_square(p, a, b, scratch.stack());
        return;
    }

    if t < config.split_boundary {
        trace!("padding {m} limbs to {}", 2 * t);
        multiply_square_padded(p, a, b, 2 * t);
        return;
    }

    debug!("splitting {m} limbs at boundary {}", config.split_boundary);
    multiply_square_split(p, a, b, config.split_boundary, config);
}

/// Zero-extend both operands to `tt` limbs (a power of two above m), run
/// Karatsuba, keep the low 2m limbs.
fn multiply_square_padded(p: &mut [Limb], a: &[Limb], b: &[Limb], tt: usize) {
    let m = a.len();
    debug_assert!(tt.is_power_of_two() && tt > m);

    let operands = add_len(tt, tt);
    let len = add_len(add_len(operands, operands), karatsuba_scratch_len(tt));
    let mut scratch = Scratch::new(len);
    let stack = scratch.stack();

    let (aa, stack) = stack.take(tt);
    let (bb, stack) = stack.take(tt);
    let (r, stack) = stack.take(operands);
    copy_limbs(aa, a);
    copy_limbs(bb, b);

    karatsuba_square(r, aa, bb, stack);
    copy_limbs(p, &r[..2 * m]);
}

/// Cut at the power-of-two boundary `big_t < m` into unequal parts and
/// combine the four partial products positionally. Only needed when padding
/// would overflow a length.
fn multiply_square_split(
    p: &mut [Limb],
    a: &[Limb],
    b: &[Limb],
    big_t: usize,
    config: &MulConfig,
) {
    let m = a.len();
    debug_assert!(m > big_t);

    let (al, ah) = a.split_at(big_t);
    let (bl, bh) = b.split_at(big_t);
    let hi = m - big_t;

    let len = add_len(add_len(hi, hi), add_len(m, m));
    let len = add_len(add_len(len, big_t), add_len(big_t, add_len(m, 1)));
    let mut scratch = Scratch::new(len);
    let stack = scratch.stack();

    let (hh, stack) = stack.take(hi + hi);
    let (hl, stack) = stack.take(m);
    let (lh, stack) = stack.take(m);
    let (ll, stack) = stack.take(big_t + big_t);
    let (mid, _) = stack.take(m + 1);

    multiply_with_config(hh, ah, bh, config);
    multiply_with_config(hl, ah, bl, config);
    multiply_with_config(lh, al, bh, config);
    multiply_with_config(ll, al, bl, config);

    copy_limbs(mid, hl);
    add_assign(mid, lh);

    sum_positional(p, &[(&hh[..], 2 * big_t), (&mid[..], big_t), (&ll[..], 0)]);
}
