use crate::constants::Limb;
use crate::error::{Error, Result};
use crate::limbs::{add_assign, add_limb_assign, is_zero, shift_left};
use crate::scratch::Scratch;
use crate::size::{alloc_limbs, copy_limbs, fill_limbs};

use super::div10::divide_by_ten;

/// a = value of the decimal string `s` mod 2^(64n), n = a.len().
///
/// Horner's rule with `10a = 8a + 2a`, so only shifts and additions are
/// used. On error the contents of `a` are unspecified.
pub fn decimal_to_limbs(a: &mut [Limb], s: &str) -> Result<()> {
    if s.is_empty() {
        return Err(Error::InvalidDigit { position: 0 });
    }

    let n = a.len();
    let mut scratch = Scratch::new(n);
    let (twofold, _) = scratch.stack().take(n);

    fill_limbs(a, 0);
    for (position, byte) in s.bytes().enumerate() {
        if !byte.is_ascii_digit() {
            return Err(Error::InvalidDigit { position });
        }

        copy_limbs(twofold, a);
        shift_left(a, 3);
        shift_left(twofold, 1);
        add_assign(a, twofold);
        add_limb_assign(a, (byte - b'0') as Limb);
    }
    Ok(())
}

/// Decimal digits of `a`, most significant first.
///
/// An empty vector gives the empty string and zero gives `"0"`.
pub fn limbs_to_decimal(a: &[Limb]) -> String {
    if a.is_empty() {
        return String::new();
    }
    if is_zero(a) {
        return "0".to_string();
    }

    let mut current = alloc_limbs(a.len());
    copy_limbs(&mut current, a);
    let mut quotient = alloc_limbs(a.len());
    let mut digits = Vec::new();
    while !is_zero(&current) {
        let r = divide_by_ten(&mut quotient, &current);
        digits.push(b'0' + r as u8);
        core::mem::swap(&mut current, &mut quotient);
    }
    digits.iter().rev().map(|&d| d as char).collect()
}

#[cfg(test)]
mod tests {
    use num_bigint::BigUint;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    use super::*;
    use crate::limbs::comparison;
    use crate::utils::{biguint_to_limbs, limb_modulus, limbs_to_biguint, random_limbs};

    #[test]
    fn test_parse_simple() -> anyhow::Result<()> {
        let mut a = [0u64; 1];
        decimal_to_limbs(&mut a, "12345")?;
        assert_eq!(a, [12345]);

        decimal_to_limbs(&mut a, "0")?;
        assert_eq!(a, [0]);

        decimal_to_limbs(&mut a, "000042")?;
        assert_eq!(a, [42]);
        Ok(())
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        let mut a = [0u64; 2];
        assert_eq!(
            decimal_to_limbs(&mut a, ""),
            Err(Error::InvalidDigit { position: 0 })
        );
        assert_eq!(
            decimal_to_limbs(&mut a, "12a4"),
            Err(Error::InvalidDigit { position: 2 })
        );
        assert_eq!(
            decimal_to_limbs(&mut a, "-1"),
            Err(Error::InvalidDigit { position: 0 })
        );
        assert_eq!(
            decimal_to_limbs(&mut a, " 1"),
            Err(Error::InvalidDigit { position: 0 })
        );
        assert_eq!(
            decimal_to_limbs(&mut a, "1٣"),
            Err(Error::InvalidDigit { position: 1 })
        );
    }

    #[test]
    fn test_parse_wraps_modulo() -> anyhow::Result<()> {
        // 2^64 + 5 in one limb is 5.
        let mut a = [0u64; 1];
        decimal_to_limbs(&mut a, "18446744073709551621")?;
        assert_eq!(a, [5]);
        Ok(())
    }

    #[test]
    fn test_known_value_roundtrip() -> anyhow::Result<()> {
        let s = "12345678901234567890";
        let mut a = [0u64; 2];
        decimal_to_limbs(&mut a, s)?;
        assert_eq!(a, [12345678901234567890, 0]);
        assert_eq!(limbs_to_decimal(&a), s);

        let mut zero = [0u64; 2];
        decimal_to_limbs(&mut zero, "0")?;
        assert_eq!(comparison(&a, &zero), 1);
        Ok(())
    }

    #[test]
    fn test_format_edges() {
        assert_eq!(limbs_to_decimal(&[]), "");
        assert_eq!(limbs_to_decimal(&[0, 0]), "0");
        assert_eq!(limbs_to_decimal(&[7]), "7");
        assert_eq!(limbs_to_decimal(&[u64::MAX]), "18446744073709551615");
        assert_eq!(
            limbs_to_decimal(&[u64::MAX, u64::MAX]),
            "340282366920938463463374607431768211455"
        );
    }

    #[test]
    fn test_roundtrip_random() -> anyhow::Result<()> {
        let mut rng = ChaCha8Rng::seed_from_u64(41);
        for _ in 0..100 {
            let n = rng.gen_range(1..6);
            let a = random_limbs(&mut rng, n);
            let s = limbs_to_decimal(&a);
            assert_eq!(s, limbs_to_biguint(&a).to_str_radix(10));

            let mut back = vec![0; n];
            decimal_to_limbs(&mut back, &s)?;
            assert_eq!(back, a);
        }
        Ok(())
    }

    #[test]
    fn test_parse_matches_biguint_mod() -> anyhow::Result<()> {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        for _ in 0..50 {
            let len = rng.gen_range(1..80);
            let s: String = (0..len)
                .map(|_| char::from(b'0' + rng.gen_range(0..10u8)))
                .collect();
            let n = rng.gen_range(1..4);
            let mut a = vec![0; n];
            decimal_to_limbs(&mut a, &s)?;

            let expected = BigUint::parse_bytes(s.as_bytes(), 10).unwrap() % limb_modulus(n);
            assert_eq!(a, biguint_to_limbs(&expected, n));
        }
        Ok(())
    }
}
