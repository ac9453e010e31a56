//! Cart line quantity, clamped to `[0, 99]`.

use serde::{Deserialize, Serialize};

/// A quantity of units in the cart.
///
/// Construction always clamps: out-of-range input saturates at the bounds and
/// is never rejected. A cart line holds a quantity in `[1, MAX]`; `ZERO` only
/// appears transiently as "remove this line". Deserialization goes through
/// the same clamp, so a stored `500` reads back as `99`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "i64", into = "u32")]
pub struct Quantity(u32);

impl Quantity {
    pub const MAX: Quantity = Quantity(99);
    pub const ZERO: Quantity = Quantity(0);
    pub const ONE: Quantity = Quantity(1);

    /// Clamp any signed input into `[0, 99]`.
    pub fn clamped(raw: i64) -> Self {
        Self(raw.clamp(0, i64::from(Self::MAX.0)) as u32)
    }

    pub const fn get(self) -> u32 {
        self.0
    }

    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Additive merge, saturating at both bounds.
    pub fn saturating_add(self, delta: i64) -> Self {
        Self::clamped(i64::from(self.0).saturating_add(delta))
    }

    /// One step up, capped at `MAX` (quantity-control "+" button).
    pub fn step_up(self) -> Self {
        self.saturating_add(1)
    }

    /// One step down, floored at zero (quantity-control "-" button).
    pub fn step_down(self) -> Self {
        self.saturating_add(-1)
    }
}

impl Default for Quantity {
    fn default() -> Self {
        Self::ZERO
    }
}

impl From<i64> for Quantity {
    fn from(raw: i64) -> Self {
        Self::clamped(raw)
    }
}

impl core::fmt::Display for Quantity {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<Quantity> for u32 {
    fn from(value: Quantity) -> Self {
        value.0
    }
}

impl From<Quantity> for u64 {
    fn from(value: Quantity) -> Self {
        u64::from(value.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_into_range() {
        assert_eq!(Quantity::clamped(-5), Quantity::ZERO);
        assert_eq!(Quantity::clamped(0), Quantity::ZERO);
        assert_eq!(Quantity::clamped(42).get(), 42);
        assert_eq!(Quantity::clamped(100), Quantity::MAX);
        assert_eq!(Quantity::clamped(i64::MAX), Quantity::MAX);
        assert_eq!(Quantity::clamped(i64::MIN), Quantity::ZERO);
    }

    #[test]
    fn merge_saturates_at_max() {
        let q = Quantity::clamped(60).saturating_add(60);
        assert_eq!(q, Quantity::MAX);
    }

    #[test]
    fn stepping_respects_bounds() {
        assert_eq!(Quantity::MAX.step_up(), Quantity::MAX);
        assert_eq!(Quantity::ZERO.step_down(), Quantity::ZERO);
        assert_eq!(Quantity::ONE.step_up().get(), 2);
        assert_eq!(Quantity::ONE.step_down(), Quantity::ZERO);
    }

    #[test]
    fn deserialization_clamps() {
        let q: Quantity = serde_json::from_str("500").unwrap();
        assert_eq!(q, Quantity::MAX);
        let q: Quantity = serde_json::from_str("-4").unwrap();
        assert_eq!(q, Quantity::ZERO);
        let q: Quantity = serde_json::from_str("7").unwrap();
        assert_eq!(serde_json::to_string(&q).unwrap(), "7");
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: clamping never leaves `[0, 99]`.
            #[test]
            fn clamped_is_always_in_range(raw in any::<i64>()) {
                let q = Quantity::clamped(raw);
                prop_assert!(q.get() <= 99);
            }

            /// Property: a merge equals clamping the plain sum.
            #[test]
            fn saturating_add_matches_clamped_sum(start in 0i64..=99, delta in -500i64..500) {
                let merged = Quantity::clamped(start).saturating_add(delta);
                prop_assert_eq!(merged, Quantity::clamped(start + delta));
            }
        }
    }
}
