use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Classification of an expense by how much it cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CostTier {
    Low,
    Medium,
    High,
}

impl CostTier {
    /// Upper bound (inclusive) of the `Low` tier.
    pub fn low_ceiling() -> Decimal {
        Decimal::new(2000, 2)
    }

    /// Upper bound (inclusive) of the `Medium` tier.
    pub fn medium_ceiling() -> Decimal {
        Decimal::new(10000, 2)
    }

    /// Buckets `amount` into a tier; both ceilings are inclusive.
    pub fn for_amount(amount: Decimal) -> Self {
        if amount <= Self::low_ceiling() {
            CostTier::Low
        } else if amount <= Self::medium_ceiling() {
            CostTier::Medium
        } else {
            CostTier::High
        }
    }
}

impl fmt::Display for CostTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            CostTier::Low => "Low",
            CostTier::Medium => "Medium",
            CostTier::High => "High",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn boundaries_are_inclusive() {
        assert_eq!(CostTier::for_amount(dec!(20.00)), CostTier::Low);
        assert_eq!(CostTier::for_amount(dec!(20.01)), CostTier::Medium);
        assert_eq!(CostTier::for_amount(dec!(100.00)), CostTier::Medium);
        assert_eq!(CostTier::for_amount(dec!(100.01)), CostTier::High);
    }

    #[test]
    fn extra_precision_is_not_rounded_away() {
        assert_eq!(CostTier::for_amount(dec!(20.0001)), CostTier::Medium);
        assert_eq!(CostTier::for_amount(dec!(100.000)), CostTier::Medium);
        assert_eq!(CostTier::for_amount(dec!(100.0000001)), CostTier::High);
    }
}
