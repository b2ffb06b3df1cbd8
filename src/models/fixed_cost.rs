//! Recurring fixed costs
//!
//! Fixed costs are stored as a JSON-encoded array inside `Settings`, not as
//! first-class rows, so parsing is deliberately lenient: the aggregate is
//! advisory and must never block a pricing computation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Recurrence of a fixed cost
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CostFrequency {
    Monthly,
    Yearly,
}

/// A recurring business expense
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixedCost {
    pub id: String,
    pub name: String,
    pub category: String,
    pub amount: Decimal,
    pub frequency: CostFrequency,
}

/// Parse the serialized fixed-cost list from settings
///
/// Missing, empty, or malformed JSON yields an empty list, never an error.
pub fn parse_fixed_costs(json: Option<&str>) -> Vec<FixedCost> {
    match json {
        Some(raw) => serde_json::from_str(raw).unwrap_or_default(),
        None => Vec::new(),
    }
}

/// Serialize a fixed-cost list for storage inside settings
pub fn stringify_fixed_costs(costs: &[FixedCost]) -> String {
    serde_json::to_string(costs).unwrap_or_default()
}

/// Reduce a fixed-cost list to a single monthly total
///
/// Monthly amounts are added as-is; yearly amounts are amortized to
/// `amount / 12`.
pub fn calculate_monthly_fixed_costs(costs: &[FixedCost]) -> Decimal {
    costs.iter().fold(Decimal::ZERO, |total, cost| {
        match cost.frequency {
            CostFrequency::Monthly => total + cost.amount,
            CostFrequency::Yearly => total + cost.amount / Decimal::from(12),
        }
    })
}

/// Generate an identifier for a newly created fixed cost
pub fn new_fixed_cost_id() -> String {
    Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_yearly_amortized_to_monthly() {
        let costs = vec![FixedCost {
            id: new_fixed_cost_id(),
            name: "Insurance".to_string(),
            category: "Ασφάλειες".to_string(),
            amount: Decimal::from(1200),
            frequency: CostFrequency::Yearly,
        }];
        assert_eq!(calculate_monthly_fixed_costs(&costs), Decimal::from(100));
    }

    #[test]
    fn test_monthly_added_directly() {
        let costs = vec![FixedCost {
            id: new_fixed_cost_id(),
            name: "Rent".to_string(),
            category: "Ενοίκιο".to_string(),
            amount: Decimal::from(100),
            frequency: CostFrequency::Monthly,
        }];
        assert_eq!(calculate_monthly_fixed_costs(&costs), Decimal::from(100));
    }

    #[test]
    fn test_mixed_frequencies() {
        let costs = vec![
            FixedCost {
                id: "a".to_string(),
                name: "Rent".to_string(),
                category: "Ενοίκιο".to_string(),
                amount: dec("800"),
                frequency: CostFrequency::Monthly,
            },
            FixedCost {
                id: "b".to_string(),
                name: "Accountant".to_string(),
                category: "Λογιστής".to_string(),
                amount: dec("600"),
                frequency: CostFrequency::Yearly,
            },
        ];
        assert_eq!(calculate_monthly_fixed_costs(&costs), dec("850"));
    }

    #[test]
    fn test_empty_list_is_zero() {
        assert_eq!(calculate_monthly_fixed_costs(&[]), Decimal::ZERO);
    }

    #[test]
    fn test_malformed_json_yields_empty_list() {
        assert!(parse_fixed_costs(Some("not json")).is_empty());
        assert!(parse_fixed_costs(Some("{\"truncated\":")).is_empty());
        assert!(parse_fixed_costs(None).is_empty());
    }
}
