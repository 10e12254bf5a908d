//! Unsigned decimal strings to and from limb vectors.

pub mod codec;
pub mod div10;

pub use codec::{decimal_to_limbs, limbs_to_decimal};
pub use div10::{divide_by_ten, reciprocal_of_ten};
