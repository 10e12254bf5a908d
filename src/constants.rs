use static_assertions::const_assert;

/// A single machine word of a multi-precision integer.
pub type Limb = u64;

pub const LIMB_BITS: usize = 64;
pub const LIMB_BYTES: usize = core::mem::size_of::<Limb>();

/// Guard bits kept below the top of a normalized widefloat mantissa.
pub const WIDEFLOAT_OVERHEAD: usize = 11;

/// Top limb of floor(2^(64(n+2)) / 10).
pub const RECIP_TEN_TOP: Limb = 0x1999_9999_9999_9999;
/// Every lower limb of floor(2^(64(n+2)) / 10).
pub const RECIP_TEN_LOW: Limb = 0x9999_9999_9999_9999;

/// Return the largest power of two `T` such that `2 * T` still fits in a
/// `usize`. Above it the square multiplier can no longer pad to the next
/// power of two.
const fn max_pad_boundary() -> usize {
    let t = (usize::MAX >> 2) + 1;
    if !t.is_power_of_two() {
        panic!("pad boundary must be a power of two");
    }
    t
}

pub const MAX_PAD_BOUNDARY: usize = max_pad_boundary();

const_assert!(LIMB_BITS == Limb::BITS as usize);
const_assert!(LIMB_BYTES * 8 == LIMB_BITS);
const_assert!(WIDEFLOAT_OVERHEAD < LIMB_BITS);
