use rust_decimal::Decimal;

/// Sums per-charity allocations when the donor splits their gift.
pub struct AllocationAggregator;

impl AllocationAggregator {
    /// Total committed across all charities.
    ///
    /// Addition is exact in decimal, so the result does not depend on the
    /// order of the entries and never drifts below a cent.
    ///
    /// ```
    /// use std::collections::BTreeMap;
    /// use rust_decimal_macros::dec;
    /// use donation_core::calculations::AllocationAggregator;
    ///
    /// let allocations = BTreeMap::from([
    ///     ("amf".to_string(), dec!(0.01)),
    ///     ("gd".to_string(), dec!(0.01)),
    ///     ("hki".to_string(), dec!(1.98)),
    /// ]);
    ///
    /// assert_eq!(AllocationAggregator::total(allocations.values()), dec!(2.00));
    /// ```
    pub fn total<'a, I>(amounts: I) -> Decimal
    where
        I: IntoIterator<Item = &'a Decimal>,
    {
        amounts.into_iter().copied().sum()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::{BTreeMap, HashMap};

    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn total_of_empty_mapping_is_zero() {
        let allocations: BTreeMap<String, Decimal> = BTreeMap::new();

        assert_eq!(AllocationAggregator::total(allocations.values()), dec!(0));
    }

    #[test]
    fn total_counts_zero_entries_as_nothing() {
        let allocations = BTreeMap::from([
            ("a".to_string(), dec!(0)),
            ("b".to_string(), dec!(12.34)),
            ("c".to_string(), dec!(0)),
        ]);

        assert_eq!(AllocationAggregator::total(allocations.values()), dec!(12.34));
    }

    #[test]
    fn total_is_exact_for_repeated_cents() {
        let cents = vec![dec!(0.10); 30];

        assert_eq!(AllocationAggregator::total(&cents), dec!(3.00));
    }

    #[test]
    fn total_is_independent_of_insertion_order() {
        let values = [dec!(0.01), dec!(1.98), dec!(0.01), dec!(250), dec!(33.33)];

        let forward: HashMap<usize, Decimal> = values.iter().copied().enumerate().collect();
        let reversed: Vec<Decimal> = values.iter().rev().copied().collect();

        assert_eq!(AllocationAggregator::total(forward.values()), dec!(285.33));
        assert_eq!(AllocationAggregator::total(&reversed), dec!(285.33));
    }
}
