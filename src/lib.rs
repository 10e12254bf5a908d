//! Fixed-width, arbitrary-length unsigned integer arithmetic on 64-bit limb
//! vectors, and a wide-mantissa float constructor built on top of it.

pub mod config;
pub mod constants;
pub mod decimal;
pub mod error;
pub mod limbs;
pub mod mul;
pub mod scratch;
pub mod size;
pub mod utils;
pub mod widefloat;

pub use config::MulConfig;
pub use constants::{Limb, LIMB_BITS, WIDEFLOAT_OVERHEAD};
pub use decimal::{decimal_to_limbs, divide_by_ten, limbs_to_decimal};
pub use error::{Error, Result};
pub use limbs::LimbVec;
pub use mul::{multiply, multiply_with_config};
pub use widefloat::{FloatClass, WideFloat};
