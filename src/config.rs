use crate::constants::MAX_PAD_BOUNDARY;

/// Tuning knobs for the multiplication engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MulConfig {
    /// Power-of-two limb count `T` from which the square multiplier splits
    /// operands into unequal halves instead of padding them to `2t`.
    pub split_boundary: usize,
}

impl MulConfig {
    /// Pad whenever doubling a length is representable, split only beyond.
    pub const fn standard() -> Self {
        Self {
            split_boundary: MAX_PAD_BOUNDARY,
        }
    }

    /// Panics if `split_boundary` is not a non-zero power of two.
    pub fn with_split_boundary(split_boundary: usize) -> Self {
        assert!(
            split_boundary.is_power_of_two(),
            "split boundary must be a power of two, got {split_boundary}"
        );
        Self { split_boundary }
    }
}

impl Default for MulConfig {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_boundary_doubles_safely() {
        let config = MulConfig::default();
        assert_eq!(config, MulConfig::standard());
        assert!(config.split_boundary.checked_mul(2).is_some());
        assert!(config.split_boundary.checked_mul(4).is_none());
    }

    #[test]
    #[should_panic(expected = "power of two")]
    fn rejects_non_power_of_two() {
        MulConfig::with_split_boundary(6);
    }
}
