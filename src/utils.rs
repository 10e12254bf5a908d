use byteorder::{ByteOrder, LittleEndian};
use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::constants::{Limb, LIMB_BITS, LIMB_BYTES};
use crate::size::{alloc_limbs, mul_len};

pub fn limbs_to_bytes_le(limbs: &[Limb]) -> Vec<u8> {
    let mut bytes = vec![0u8; mul_len(limbs.len(), LIMB_BYTES)];
    LittleEndian::write_u64_into(limbs, &mut bytes);
    bytes
}

/// Read `n` limbs from little-endian bytes, zero-padding a short input and
/// dropping whatever does not fit.
pub fn limbs_from_bytes_le(bytes: &[u8], n: usize) -> Vec<Limb> {
    let mut padded = vec![0u8; mul_len(n, LIMB_BYTES)];
    let len = bytes.len().min(padded.len());
    padded[..len].copy_from_slice(&bytes[..len]);
    let mut limbs = alloc_limbs(n);
    LittleEndian::read_u64_into(&padded, &mut limbs);
    limbs
}

pub fn limbs_to_biguint(limbs: &[Limb]) -> BigUint {
    if limbs.iter().all(|&x| x == 0) {
        return BigUint::zero();
    }
    BigUint::from_bytes_le(&limbs_to_bytes_le(limbs))
}

/// `x mod 2^(64n)` as `n` limbs.
pub fn biguint_to_limbs(x: &BigUint, n: usize) -> Vec<Limb> {
    let mut limbs = alloc_limbs(n);
    for (limb, digit) in limbs.iter_mut().zip(x.iter_u64_digits()) {
        *limb = digit;
    }
    limbs
}

/// 2^(64n), the modulus of an `n`-limb vector.
pub fn limb_modulus(n: usize) -> BigUint {
    BigUint::one() << mul_len(n, LIMB_BITS)
}

/// Random limbs biased towards 0 and `u64::MAX` so carry chains get long.
#[cfg(test)]
pub(crate) fn random_limbs<R: rand::Rng>(rng: &mut R, n: usize) -> Vec<Limb> {
    (0..n)
        .map(|_| match rng.gen_range(0..8) {
            0 => 0,
            1 => u64::MAX,
            _ => rng.gen(),
        })
        .collect()
}
