//! Limb vectors: little-endian sequences of 64-bit limbs whose length is
//! fixed by the caller.
//!
//! A vector `a` of `n` limbs stands for `sum(a[i] * 2^(64i)) mod 2^(64n)`.
//! The free functions work on slices; [`LimbVec`] owns its storage.

pub mod add;
pub mod compare;
pub mod shift;
pub mod sub;
pub mod vector;

pub use add::{add, add_assign, add_assign_at, add_limb_assign};
pub use compare::{compare, comparison, is_zero, leading_zeros};
pub use shift::{shift_left, shift_right};
pub use sub::{abs_diff, sub, sub_assign};
pub use vector::LimbVec;
