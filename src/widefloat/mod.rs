//! A wide-mantissa floating-point record built on limb vectors.
//!
//! A finite value is `(-1)^sign * 2^exponent * f`, where `f` is the mantissa
//! read as a fixed-point fraction whose leading one sits
//! [`WIDEFLOAT_OVERHEAD`](crate::constants::WIDEFLOAT_OVERHEAD) bits below
//! the top of the vector, so `1 <= f < 2` for non-zero values.

mod scaled;

use crate::constants::{Limb, LIMB_BITS, WIDEFLOAT_OVERHEAD};
use crate::limbs::is_zero;
use crate::size::{alloc_limbs, fill_limbs};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FloatClass {
    NaN,
    PosInf,
    NegInf,
    Number,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WideFloat {
    class: FloatClass,
    sign: bool,
    exponent: i32,
    /// `None` once the value has been cleared.
    mantissa: Option<Vec<Limb>>,
}

impl WideFloat {
    /// A NaN with an `n`-limb mantissa.
    pub fn new(n: usize) -> Self {
        Self {
            class: FloatClass::NaN,
            sign: false,
            exponent: 0,
            mantissa: Some(alloc_limbs(n)),
        }
    }

    /// Reallocate the mantissa with `n` limbs and reset to NaN.
    pub fn init(&mut self, n: usize) {
        *self = Self::new(n);
    }

    /// Release the mantissa. The value must be re-initialised before any
    /// other use.
    pub fn clear(&mut self) {
        self.class = FloatClass::NaN;
        self.sign = false;
        self.exponent = 0;
        self.mantissa = None;
    }

    pub fn is_cleared(&self) -> bool {
        self.mantissa.is_none()
    }

    pub fn class(&self) -> FloatClass {
        self.class
    }

    pub fn sign(&self) -> bool {
        self.sign
    }

    pub fn exponent(&self) -> i32 {
        self.exponent
    }

    /// Panics if the value has been cleared.
    #[track_caller]
    pub fn mantissa(&self) -> &[Limb] {
        match &self.mantissa {
            Some(m) => m,
            None => panic!("widefloat used after clear"),
        }
    }

    #[track_caller]
    fn mantissa_mut(&mut self) -> &mut [Limb] {
        match &mut self.mantissa {
            Some(m) => m,
            None => panic!("widefloat used after clear"),
        }
    }

    #[track_caller]
    pub fn mantissa_size(&self) -> usize {
        self.mantissa().len()
    }

    /// Bit position of the leading one in a normalized mantissa of `n` limbs,
    /// counted from the least significant bit.
    pub fn fraction_bits(n: usize) -> i128 {
        n as i128 * LIMB_BITS as i128 - WIDEFLOAT_OVERHEAD as i128 - 1
    }

    pub fn is_nan(&self) -> bool {
        self.class == FloatClass::NaN
    }

    pub fn is_infinite(&self) -> bool {
        matches!(self.class, FloatClass::PosInf | FloatClass::NegInf)
    }

    pub fn is_zero(&self) -> bool {
        self.class == FloatClass::Number && is_zero(self.mantissa())
    }

    fn set_zero(&mut self, sign: bool) {
        self.class = FloatClass::Number;
        self.sign = sign;
        self.exponent = 0;
        fill_limbs(self.mantissa_mut(), 0);
    }

    fn set_infinity(&mut self, sign: bool) {
        self.class = if sign {
            FloatClass::NegInf
        } else {
            FloatClass::PosInf
        };
        self.sign = sign;
        self.exponent = 0;
        fill_limbs(self.mantissa_mut(), 0);
    }
}
