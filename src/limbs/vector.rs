use core::cmp::Ordering;
use core::fmt;

use crate::constants::Limb;
use crate::decimal::{decimal_to_limbs, divide_by_ten, limbs_to_decimal};
use crate::error::Result;
use crate::mul::multiply;
use crate::size::{add_len, alloc_limbs};

use super::{add, compare, is_zero, leading_zeros, shift_left, shift_right, sub};

/// An owned limb vector whose length is fixed at construction.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct LimbVec {
    /// Limbs in little-endian order; limbs[0] is least significant.
    limbs: Vec<Limb>,
}

impl LimbVec {
    pub fn zeroed(n: usize) -> Self {
        Self {
            limbs: alloc_limbs(n),
        }
    }

    pub fn from_limbs(limbs: Vec<Limb>) -> Self {
        Self { limbs }
    }

    /// `value mod 2^(64n)` on n limbs.
    pub fn from_u64(value: u64, n: usize) -> Self {
        let mut v = Self::zeroed(n);
        if let Some(low) = v.limbs.first_mut() {
            *low = value;
        }
        v
    }

    /// Parse an unsigned decimal string into n limbs, reducing mod 2^(64n).
    pub fn from_decimal(s: &str, n: usize) -> Result<Self> {
        let mut v = Self::zeroed(n);
        decimal_to_limbs(&mut v.limbs, s)?;
        Ok(v)
    }

    pub fn len(&self) -> usize {
        self.limbs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.limbs.is_empty()
    }

    pub fn as_slice(&self) -> &[Limb] {
        &self.limbs
    }

    pub fn as_mut_slice(&mut self) -> &mut [Limb] {
        &mut self.limbs
    }

    pub fn into_limbs(self) -> Vec<Limb> {
        self.limbs
    }

    pub fn is_zero(&self) -> bool {
        is_zero(&self.limbs)
    }

    pub fn leading_zeros(&self) -> usize {
        leading_zeros(&self.limbs)
    }

    pub fn shl_assign_bits(&mut self, k: usize) {
        shift_left(&mut self.limbs, k);
    }

    pub fn shr_assign_bits(&mut self, k: usize) {
        shift_right(&mut self.limbs, k);
    }

    /// Sum on `max(m, n)` limbs, wrapping.
    pub fn wrapping_add(&self, rhs: &Self) -> Self {
        let mut s = Self::zeroed(self.len().max(rhs.len()));
        add(&mut s.limbs, &self.limbs, &rhs.limbs);
        s
    }

    /// Difference on `max(m, n)` limbs, wrapping below zero.
    pub fn wrapping_sub(&self, rhs: &Self) -> Self {
        let mut s = Self::zeroed(self.len().max(rhs.len()));
        sub(&mut s.limbs, &self.limbs, &rhs.limbs);
        s
    }

    /// Exact product on `m + n` limbs.
    pub fn widening_mul(&self, rhs: &Self) -> Self {
        let mut p = Self::zeroed(add_len(self.len(), rhs.len()));
        multiply(&mut p.limbs, &self.limbs, &rhs.limbs);
        p
    }

    /// `(self / 10, self % 10)`. Panics on an empty vector.
    pub fn div_rem_ten(&self) -> (Self, u32) {
        let mut q = Self::zeroed(self.len());
        let r = divide_by_ten(&mut q.limbs, &self.limbs);
        (q, r)
    }

    pub fn to_decimal(&self) -> String {
        limbs_to_decimal(&self.limbs)
    }

    /// Three-way comparison of two vectors of the same length.
    ///
    /// Panics if the lengths differ.
    #[track_caller]
    pub fn compare(&self, other: &Self) -> Ordering {
        compare(&self.limbs, &other.limbs)
    }
}

impl From<Vec<Limb>> for LimbVec {
    fn from(limbs: Vec<Limb>) -> Self {
        Self::from_limbs(limbs)
    }
}

impl AsRef<[Limb]> for LimbVec {
    fn as_ref(&self) -> &[Limb] {
        &self.limbs
    }
}

/// Vectors of different lengths are unordered.
impl PartialOrd for LimbVec {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.len() != other.len() {
            return None;
        }
        Some(self.compare(other))
    }
}

impl fmt::Display for LimbVec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_decimal())
    }
}
