//! Exact multi-limb multiplication.
//!
//! `multiply` picks between a single-limb schoolbook pass and the square
//! multiplier, zero-extending the shorter operand when the sizes differ.

pub mod digit;
pub mod karatsuba;
pub mod square;

use log::trace;

pub use digit::{mul_digits, mul_rectangular};
pub use karatsuba::karatsuba_square;
pub use square::sum_positional;

use crate::config::MulConfig;
use crate::constants::Limb;
use crate::scratch::Scratch;
use crate::size::{add_len, copy_limbs};
use square::multiply_square;

/// p = a * b exactly; `p` must have `a.len() + b.len()` limbs.
///
/// With an empty operand nothing is written.
pub fn multiply(p: &mut [Limb], a: &[Limb], b: &[Limb]) {
    multiply_with_config(p, a, b, &MulConfig::standard());
}

pub fn multiply_with_config(p: &mut [Limb], a: &[Limb], b: &[Limb], config: &MulConfig) {
    let (m, n) = (a.len(), b.len());
    if m == 0 || n == 0 {
        return;
    }
    assert_eq!(p.len(), add_len(m, n), "product of {m} and {n} limbs");

    if m > n {
        multiply_with_config(p, b, a, config);
        return;
    }

    if m == 1 {
        trace!("schoolbook 1 x {n}");
        mul_rectangular(p, b, a[0]);
        return;
    }

    if m == n {
        multiply_square(p, a, b, config);
        return;
    }

    trace!("extending {m} x {n} to square");
    multiply_extended(p, a, b, config);
}

/// 2 <= m < n: widen `a` to n limbs, square-multiply, keep m + n limbs.
fn multiply_extended(p: &mut [Limb], a: &[Limb], b: &[Limb], config: &MulConfig) {
    let (m, n) = (a.len(), b.len());
    debug_assert!(2 <= m && m < n);

    let wide = add_len(n, n);
    let mut scratch = Scratch::new(add_len(n, wide));
    let (t, stack) = scratch.stack().take(n);
    let (r, _) = stack.take(wide);

    copy_limbs(t, a);
    multiply_square(r, t, b, config);
    copy_limbs(p, &r[..m + n]);
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    use super::*;
    use crate::utils::{biguint_to_limbs, limbs_to_biguint, random_limbs};

    fn product(a: &[Limb], b: &[Limb], config: &MulConfig) -> Vec<Limb> {
        let mut p = vec![0; a.len() + b.len()];
        multiply_with_config(&mut p, a, b, config);
        p
    }

    fn check(a: &[Limb], b: &[Limb], config: &MulConfig) {
        let expected = limbs_to_biguint(a) * limbs_to_biguint(b);
        assert_eq!(
            product(a, b, config),
            biguint_to_limbs(&expected, a.len() + b.len()),
            "{} x {} limbs",
            a.len(),
            b.len()
        );
    }

    #[test]
    fn test_simple_mul() {
        let mut p = [0u64; 2];
        multiply(&mut p, &[100], &[200]);
        assert_eq!(p, [20000, 0]);
    }

    #[test]
    fn test_empty_operand_is_noop() {
        let mut p = [7u64; 3];
        multiply(&mut p, &[], &[1, 2, 3]);
        assert_eq!(p, [7, 7, 7]);
        multiply(&mut p, &[1, 2, 3], &[]);
        assert_eq!(p, [7, 7, 7]);
    }

    #[test]
    #[should_panic(expected = "product of 2 and 3 limbs")]
    fn test_wrong_output_length() {
        let mut p = [0u64; 4];
        multiply(&mut p, &[1, 2], &[3, 4, 5]);
    }

    #[test]
    fn test_mul_matches_biguint_all_shapes() {
        let mut rng = ChaCha8Rng::seed_from_u64(21);
        let config = MulConfig::standard();
        for (m, n) in (1..=12).cartesian_product(1..=12) {
            let a = random_limbs(&mut rng, m);
            let b = random_limbs(&mut rng, n);
            check(&a, &b, &config);
        }
    }

    #[test]
    fn test_mul_larger_sizes() {
        let mut rng = ChaCha8Rng::seed_from_u64(22);
        let config = MulConfig::standard();
        for (m, n) in [(33, 33), (64, 64), (17, 100), (100, 3), (65, 127)] {
            let a = random_limbs(&mut rng, m);
            let b = random_limbs(&mut rng, n);
            check(&a, &b, &config);
        }
    }

    #[test]
    fn test_split_path_matches_padding() {
        let mut rng = ChaCha8Rng::seed_from_u64(23);
        for boundary in [1, 2, 4] {
            let config = MulConfig::with_split_boundary(boundary);
            for m in 2..=20 {
                let n = m + rng.gen_range(0..3);
                let a = random_limbs(&mut rng, m);
                let b = random_limbs(&mut rng, n);
                check(&a, &b, &config);
                assert_eq!(
                    product(&a, &b, &config),
                    product(&a, &b, &MulConfig::standard())
                );
            }
        }
    }

    #[test]
    fn test_mul_commutative() {
        let mut rng = ChaCha8Rng::seed_from_u64(24);
        for _ in 0..50 {
            let m = rng.gen_range(1..10);
            let n = rng.gen_range(1..10);
            let a = random_limbs(&mut rng, m);
            let b = random_limbs(&mut rng, n);
            let config = MulConfig::standard();
            assert_eq!(product(&a, &b, &config), product(&b, &a, &config));
        }
    }

    #[test]
    fn test_schoolbook_agrees_with_square_path() {
        let mut rng = ChaCha8Rng::seed_from_u64(25);
        let config = MulConfig::standard();
        for n in 2..16 {
            let b = random_limbs(&mut rng, n);

            // 7 * b through the single-limb pass.
            let by_digit = product(&[7], &b, &config);

            // 7 * b through the square multiplier, then truncated.
            let mut seven = vec![0; n];
            seven[0] = 7;
            let wide = product(&seven, &b, &config);
            assert_eq!(by_digit[..], wide[..n + 1]);
            assert!(wide[n + 1..].iter().all(|&x| x == 0));

            // And a manual positional sum of per-limb products.
            let mut manual = vec![0; n + 1];
            for (i, &limb) in b.iter().enumerate() {
                let (hi, lo) = mul_digits(7, limb);
                sum_positional_into(&mut manual, &[lo, hi], i);
            }
            assert_eq!(by_digit, manual);
        }
    }

    fn sum_positional_into(acc: &mut [Limb], x: &[Limb], offset: usize) {
        let room = acc.len() - offset;
        crate::limbs::add_assign(&mut acc[offset..], &x[..x.len().min(room)]);
    }
}
