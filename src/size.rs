//! Overflow-checked size arithmetic for buffer sizing.
//!
//! Every length × element-size product that sizes a copy, a fill or a
//! scratch allocation goes through [`try_size_multiply`].

use log::error;

use crate::constants::{Limb, LIMB_BYTES};

/// Return `a * b` if the product is representable in a `usize`.
pub fn try_size_multiply(a: usize, b: usize) -> Option<usize> {
    if a == 0 || b == 0 {
        return Some(0);
    }

    // Both factors below 2^(w/2): the product cannot wrap.
    let half = 1usize << (usize::BITS / 2);
    if a < half && b < half {
        return Some(a * b);
    }

    // Euclidean check on the possibly wrapped product: t = a*q + r.
    let t = a.wrapping_mul(b);
    let q = t / a;
    let r = t % a;
    if r != 0 || q != b {
        return None;
    }
    Some(t)
}

/// Number of bytes covered by `len` limbs, if representable.
pub fn limb_bytes(len: usize) -> Option<usize> {
    try_size_multiply(len, LIMB_BYTES)
}

/// Copy `src` into the low `src.len()` limbs of `dst`.
pub fn copy_limbs(dst: &mut [Limb], src: &[Limb]) {
    assert!(
        dst.len() >= src.len(),
        "expected {} >= {}",
        dst.len(),
        src.len()
    );
    match limb_bytes(src.len()) {
        Some(_) => dst[..src.len()].copy_from_slice(src),
        None => {
            for (d, &s) in dst.iter_mut().zip(src) {
                *d = s;
            }
        }
    }
}

/// Move `len` limbs inside `a` from offset `src` to offset `dst`. The two
/// ranges may overlap.
pub fn move_limbs(a: &mut [Limb], src: usize, dst: usize, len: usize) {
    assert!(
        add_len(src.max(dst), len) <= a.len(),
        "moving {len} limbs from {src} to {dst} overruns {}",
        a.len()
    );
    match limb_bytes(len) {
        Some(_) => a.copy_within(src..src + len, dst),
        None if dst <= src => {
            for i in 0..len {
                a[dst + i] = a[src + i];
            }
        }
        None => {
            for i in (0..len).rev() {
                a[dst + i] = a[src + i];
            }
        }
    }
}

/// Set every limb of `dst` to `value`.
pub fn fill_limbs(dst: &mut [Limb], value: Limb) {
    match limb_bytes(dst.len()) {
        Some(_) => dst.fill(value),
        None => {
            for d in dst.iter_mut() {
                *d = value;
            }
        }
    }
}

/// Allocate `len` zeroed limbs of scratch space.
///
/// Running out of memory here is not recoverable: a size that cannot even
/// be expressed in bytes aborts the process, as does allocator exhaustion.
pub fn alloc_limbs(len: usize) -> Vec<Limb> {
    match limb_bytes(len) {
        Some(bytes) if bytes <= isize::MAX as usize => vec![0; len],
        _ => {
            error!("cannot allocate {len} limbs: size overflows the address space");
            std::process::abort();
        }
    }
}

/// `a + b` for buffer lengths, aborting like [`alloc_limbs`] on overflow.
pub(crate) fn add_len(a: usize, b: usize) -> usize {
    match a.checked_add(b) {
        Some(len) => len,
        None => {
            error!("length {a} + {b} overflows usize");
            std::process::abort();
        }
    }
}

/// `a * b` for buffer sizes, aborting like [`alloc_limbs`] on overflow.
pub(crate) fn mul_len(a: usize, b: usize) -> usize {
    match try_size_multiply(a, b) {
        Some(len) => len,
        None => {
            error!("length {a} * {b} overflows usize");
            std::process::abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_products_use_fast_path() {
        assert_eq!(try_size_multiply(0, usize::MAX), Some(0));
        assert_eq!(try_size_multiply(usize::MAX, 0), Some(0));
        assert_eq!(try_size_multiply(3, 7), Some(21));
        assert_eq!(try_size_multiply(1 << 20, 1 << 20), Some(1 << 40));
    }

    #[test]
    fn large_exact_products_pass() {
        assert_eq!(try_size_multiply(usize::MAX, 1), Some(usize::MAX));
        assert_eq!(try_size_multiply(1, usize::MAX), Some(usize::MAX));
        let half = usize::MAX / 2;
        assert_eq!(try_size_multiply(half, 2), Some(half * 2));
    }

    #[test]
    fn overflowing_products_fail() {
        assert_eq!(try_size_multiply(usize::MAX, 2), None);
        assert_eq!(try_size_multiply(usize::MAX / 2 + 1, 2), None);
        let half = 1usize << (usize::BITS / 2);
        assert_eq!(try_size_multiply(half, half), None);
        assert_eq!(try_size_multiply(half + 1, half - 1), Some((half + 1) * (half - 1)));
    }

    #[test]
    fn limb_byte_sizes() {
        assert_eq!(limb_bytes(4), Some(32));
        assert_eq!(limb_bytes(usize::MAX), None);
    }

    #[test]
    fn copy_and_fill() {
        let mut dst = [7u64; 5];
        copy_limbs(&mut dst, &[1, 2, 3]);
        assert_eq!(dst, [1, 2, 3, 7, 7]);
        fill_limbs(&mut dst[1..], 0);
        assert_eq!(dst, [1, 0, 0, 0, 0]);
    }

    #[test]
    fn move_overlapping_ranges() {
        let mut a = [1u64, 2, 3, 4, 5];
        move_limbs(&mut a, 0, 2, 3);
        assert_eq!(a, [1, 2, 1, 2, 3]);

        let mut a = [1u64, 2, 3, 4, 5];
        move_limbs(&mut a, 2, 0, 3);
        assert_eq!(a, [3, 4, 5, 4, 5]);

        move_limbs(&mut a, 4, 1, 0);
        assert_eq!(a, [3, 4, 5, 4, 5]);
    }

    #[test]
    #[should_panic(expected = "overruns")]
    fn move_out_of_bounds() {
        let mut a = [0u64; 4];
        move_limbs(&mut a, 1, 2, 3);
    }

    #[test]
    fn length_products() {
        assert_eq!(mul_len(3, LIMB_BYTES), 24);
        assert_eq!(mul_len(0, usize::MAX), 0);
    }

    #[test]
    fn alloc_is_zeroed() {
        let v = alloc_limbs(9);
        assert_eq!(v.len(), 9);
        assert!(v.iter().all(|&x| x == 0));
    }
}
