//! Stack-scoped scratch space for the recursive multipliers.
//!
//! A top-level call sizes one zeroed region up front; each recursion level
//! carves its temporaries off the front with [`ScratchStack::take`] and hands
//! the remainder to its children. Nothing is freed by hand: the region is
//! owned by a [`Scratch`] that drops when the top-level call returns.

use crate::constants::Limb;
use crate::size::{add_len, alloc_limbs, fill_limbs};

pub struct Scratch {
    buf: Vec<Limb>,
}

impl Scratch {
    pub fn new(len: usize) -> Self {
        Self {
            buf: alloc_limbs(len),
        }
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn stack(&mut self) -> ScratchStack<'_> {
        ScratchStack {
            buf: &mut self.buf[..],
        }
    }
}

pub struct ScratchStack<'a> {
    buf: &'a mut [Limb],
}

impl<'a> ScratchStack<'a> {
    pub fn new(buf: &'a mut [Limb]) -> Self {
        Self { buf }
    }

    pub fn remaining(&self) -> usize {
        self.buf.len()
    }

    /// Split off `len` zeroed limbs; the rest stays available to callees.
    ///
    /// Panics if fewer than `len` limbs remain, which means the caller sized
    /// the region wrongly.
    #[track_caller]
    pub fn take(self, len: usize) -> (&'a mut [Limb], ScratchStack<'a>) {
        assert!(
            len <= self.buf.len(),
            "scratch exhausted: need {len}, have {}",
            self.buf.len()
        );
        let (head, tail) = self.buf.split_at_mut(len);
        fill_limbs(head, 0);
        (head, ScratchStack { buf: tail })
    }

    /// Lend the remaining space to a callee without giving it up.
    pub fn reborrow(&mut self) -> ScratchStack<'_> {
        ScratchStack {
            buf: &mut *self.buf,
        }
    }
}

/// Scratch limbs needed by a Karatsuba product of two `t`-limb operands,
/// `t` a power of two.
///
/// Each level of size `t = 2h` holds `|ah - al|`, `|bh - bl|` (h limbs each),
/// their product (2h) and the middle term (2h + 1), then recurses on `h`.
pub fn karatsuba_scratch_len(t: usize) -> usize {
    debug_assert!(t == 0 || t.is_power_of_two());
    if t <= 1 {
        return 0;
    }
    let level = add_len(add_len(t, t), add_len(t, 1));
    add_len(level, karatsuba_scratch_len(t / 2))
}
